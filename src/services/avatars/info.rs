use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AvatarService;
use crate::models::{ApiResponse, ErrorCode, avatars::responses::AvatarInfo};

pub async fn get_avatar_info(
    service: &AvatarService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let avatar = match storage.get_avatar_by_student_id(student_id).await {
        Ok(Some(avatar)) => avatar,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AvatarNotFound,
                "Avatar not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Avatar lookup failed: {e}"),
                )),
            );
        }
    };

    let student_name = match storage.get_student_by_id(student_id).await {
        Ok(student) => student.map(|s| s.name),
        Err(_) => None,
    };

    let response = AvatarInfo {
        id: avatar.id,
        student_id: avatar.student_id,
        student_name,
        file_path: avatar.file_path,
        file_size: avatar.file_size,
        media_type: avatar.media_type,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Avatar info retrieved successfully",
    )))
}
