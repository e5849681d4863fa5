use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::AgeRangeParams, responses::StudentSummary},
};

pub async fn get_students_by_age(
    service: &StudentService,
    age: i32,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students_by_age(age).await {
        Ok(students) if students.is_empty() => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                format!("No students with age {age}"),
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
                format!("Failed to filter students by age: {e}"),
            )),
        ),
    }
}

pub async fn get_students_by_age_between(
    service: &StudentService,
    params: AgeRangeParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if params.min > params.max {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "min must not be greater than max",
        )));
    }

    let storage = service.get_storage(request);

    match storage
        .list_students_by_age_between(params.min, params.max)
        .await
    {
        Ok(students) if students.is_empty() => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                format!("No students with age between {} and {}", params.min, params.max),
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
                format!("Failed to filter students by age range: {e}"),
            )),
        ),
    }
}
