use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::fs;
use std::io::ErrorKind;
use tracing::warn;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_student(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 头像记录随学生级联删除，先取出文件路径以便清理磁盘原图
    let avatar = storage
        .get_avatar_by_student_id(student_id)
        .await
        .ok()
        .flatten();

    match storage.delete_student(student_id).await {
        Ok(true) => {
            if let Some(avatar) = avatar
                && let Err(e) = fs::remove_file(&avatar.file_path)
                && e.kind() != ErrorKind::NotFound
            {
                warn!(
                    "Failed to remove avatar file '{}': {}",
                    avatar.file_path, e
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::StudentDeleteFailed,
                format!("Student deletion failed: {e}"),
            )),
        ),
    }
}
