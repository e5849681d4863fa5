use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FacultyService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_faculty(
    service: &FacultyService,
    faculty_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 删除后学生的学院引用由外键约束置空
    match storage.delete_faculty(faculty_id).await {
        Ok(true) => {
            info!("Faculty {} deleted", faculty_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Faculty deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FacultyNotFound,
            "Faculty not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::FacultyDeleteFailed,
                format!("Failed to delete faculty: {e}"),
            )),
        ),
    }
}
