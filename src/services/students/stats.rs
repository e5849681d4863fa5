use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::responses::{StudentStatsResponse, StudentSummary},
};

// 最近创建学生数量，对应“最后五个学生”查询
const LATEST_STUDENTS_LIMIT: u64 = 5;

pub async fn get_student_stats(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let total = match storage.count_students().await {
        Ok(count) => count,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to count students: {e}"),
                )),
            );
        }
    };

    let average_age = match storage.average_student_age().await {
        Ok(avg) => avg,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to compute average age: {e}"),
                )),
            );
        }
    };

    let response = StudentStatsResponse {
        total: total as i64,
        average_age,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Student statistics retrieved successfully",
    )))
}

pub async fn get_latest_students(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_latest_students(LATEST_STUDENTS_LIMIT).await {
        Ok(students) => {
            let items: Vec<StudentSummary> = students.iter().map(StudentSummary::from).collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                items,
                "Latest students retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve latest students: {e}"),
            )),
        ),
    }
}
