use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, faculties::responses::FacultySummary};

pub async fn get_student_faculty(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_with_faculty(student_id).await {
        Ok(Some((_, Some(faculty)))) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FacultySummary::from(&faculty),
            "Faculty retrieved successfully",
        ))),
        Ok(Some((_, None))) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FacultyNotFound,
            "Student is not assigned to a faculty",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get student's faculty: {e}"),
            )),
        ),
    }
}
