use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FacultyService;
use crate::models::{ApiResponse, ErrorCode, faculties::requests::FacultySearchParams};

// 按颜色筛选学院（大小写不敏感，精确匹配）
pub async fn get_faculties_by_color(
    service: &FacultyService,
    color: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_faculties_by_color(&color).await {
        Ok(faculties) if faculties.is_empty() => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FacultyNotFound,
                format!("No faculties with color '{color}'"),
            )))
        }
        Ok(faculties) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            faculties,
            "Faculties retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to filter faculties by color: {e}"),
            )),
        ),
    }
}

// 按名称或颜色搜索学院（大小写不敏感，精确匹配）
pub async fn search_faculties(
    service: &FacultyService,
    params: FacultySearchParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let query = params.query.trim();
    if query.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Search query must not be blank",
        )));
    }

    let storage = service.get_storage(request);

    match storage.search_faculties(query).await {
        Ok(faculties) if faculties.is_empty() => {
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FacultyNotFound,
                format!("No faculties matching '{query}'"),
            )))
        }
        Ok(faculties) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            faculties,
            "Faculties retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Faculty search failed: {e}"),
            )),
        ),
    }
}
