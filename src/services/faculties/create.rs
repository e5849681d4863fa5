use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FacultyService;
use crate::models::{ApiResponse, ErrorCode, faculties::requests::CreateFacultyRequest};
use crate::utils::validate::{validate_color, validate_name};

pub async fn create_faculty(
    service: &FacultyService,
    faculty_data: CreateFacultyRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 验证名称
    if let Err(msg) = validate_name(&faculty_data.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FacultyNameInvalid, msg)));
    }

    // 验证颜色
    if let Err(msg) = validate_color(&faculty_data.color) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FacultyColorInvalid, msg)));
    }

    let storage = service.get_storage(request);

    // 名称唯一性检查
    match storage.faculty_name_taken(&faculty_data.name).await {
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::FacultyAlreadyExists,
                format!("Faculty with name '{}' already exists", faculty_data.name),
            )));
        }
        Ok(false) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Faculty lookup failed: {e}"),
                )),
            );
        }
    }

    match storage.create_faculty(faculty_data).await {
        Ok(faculty) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(faculty, "学院创建成功")))
        }
        Err(e) => {
            let msg = format!("Faculty creation failed: {e}");
            error!("{}", msg);
            // 判断是否唯一约束冲突
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::FacultyAlreadyExists,
                    "Faculty name already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::FacultyCreationFailed,
                    msg,
                )))
            }
        }
    }
}
