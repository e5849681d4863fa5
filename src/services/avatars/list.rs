use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AvatarService;
use crate::models::common::PaginationQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_avatars(
    service: &AvatarService,
    query: PaginationQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if query.page < 1 || query.size < 1 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "page and size must be positive",
        )));
    }

    let storage = service.get_storage(request);

    match storage
        .list_avatars_with_pagination(query.page, query.size)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Avatar list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve avatar list: {e}"),
            )),
        ),
    }
}
