use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FacultyService;
use crate::models::{ApiResponse, ErrorCode, students::responses::StudentSummary};

pub async fn get_faculty_students(
    service: &FacultyService,
    faculty_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学院必须存在
    match storage.get_faculty_by_id(faculty_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FacultyNotFound,
                "Faculty not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Faculty lookup failed: {e}"),
                )),
            );
        }
    }

    match storage.list_students_by_faculty(faculty_id).await {
        Ok(students) if students.is_empty() => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Faculty has no students",
            )))
        }
        Ok(students) => {
            let items: Vec<StudentSummary> = students.iter().map(StudentSummary::from).collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                items,
                "Students retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list faculty students: {e}"),
            )),
        ),
    }
}
