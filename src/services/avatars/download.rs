use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::path::Path;

use super::AvatarService;
use crate::models::{ApiResponse, ErrorCode};

// 从磁盘读取原图并返回
pub async fn download_avatar(
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

    // 记录存在但文件丢失时按未找到处理
    if !Path::new(&avatar.file_path).exists() {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AvatarNotFound,
            "Avatar file is missing",
        )));
    }

    match tokio::fs::read(&avatar.file_path).await {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type(avatar.media_type)
            .body(bytes)),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to read avatar file: {e}"),
            )),
        ),
    }
}
