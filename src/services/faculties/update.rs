use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FacultyService;
use crate::models::{ApiResponse, ErrorCode, faculties::requests::UpdateFacultyRequest};
use crate::utils::validate::{validate_color, validate_name};

pub async fn update_faculty(
    service: &FacultyService,
    faculty_id: i64,
    update_data: UpdateFacultyRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let existing = match storage.get_faculty_by_id(faculty_id).await {
        Ok(Some(faculty)) => faculty,
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
    };

    // 更名时校验格式和唯一性（与原名称大小写不敏感比较）
    if let Some(ref name) = update_data.name {
        if let Err(msg) = validate_name(name) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::FacultyNameInvalid, msg)));
        }

        if !existing.name.eq_ignore_ascii_case(name) {
            match storage.faculty_name_taken(name).await {
                Ok(true) => {
                    return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                        ErrorCode::FacultyAlreadyExists,
                        format!("Faculty with name '{name}' already exists"),
                    )));
                }
                Ok(false) => {}
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Faculty lookup failed: {e}"),
                        ),
                    ));
                }
            }
        }
    }

    if let Some(ref color) = update_data.color
        && let Err(msg) = validate_color(color)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FacultyColorInvalid, msg)));
    }

    match storage.update_faculty(faculty_id, update_data).await {
        Ok(Some(faculty)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            faculty,
            "Faculty information updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FacultyNotFound,
            "Faculty not found",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FacultyUpdateFailed,
            format!("Failed to update faculty information: {e}"),
        ))),
    }
}
