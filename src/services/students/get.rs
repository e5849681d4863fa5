use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    faculties::responses::FacultySummary,
    students::responses::StudentWithFaculty,
};

pub async fn get_student(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_with_faculty(student_id).await {
        Ok(Some((student, faculty))) => {
            let response = StudentWithFaculty {
                id: student.id,
                name: student.name,
                age: student.age,
                faculty: faculty.as_ref().map(FacultySummary::from),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Student information retrieved successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get student information: {e}"),
            )),
        ),
    }
}
