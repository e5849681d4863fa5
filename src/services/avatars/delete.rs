use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::fs;
use std::io::ErrorKind;
use tracing::info;

use super::AvatarService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_avatar(
    service: &AvatarService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_avatar(student_id).await {
        Ok(Some(avatar)) => {
            // 同时清理磁盘上的原图，文件已不存在不算错误
            if let Err(e) = fs::remove_file(&avatar.file_path)
                && e.kind() != ErrorKind::NotFound
            {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::AvatarDeleteFailed,
                        format!("Failed to remove avatar file: {e}"),
                    )),
                );
            }
            info!("Avatar for student {} deleted", student_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Avatar deleted successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AvatarNotFound,
            "Avatar not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::AvatarDeleteFailed,
                format!("Failed to delete avatar: {e}"),
            )),
        ),
    }
}
