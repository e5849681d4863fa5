use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AvatarService;
use crate::models::{ApiResponse, ErrorCode};

// 缩略图统一编码为 JPEG 存库，因此响应类型固定
const PREVIEW_CONTENT_TYPE: &str = "image/jpeg";

pub async fn get_avatar_preview(
    service: &AvatarService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_avatar_preview(student_id).await {
        Ok(Some(preview)) => Ok(HttpResponse::Ok()
            .content_type(PREVIEW_CONTENT_TYPE)
            .body(preview.data)),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AvatarNotFound,
            "Avatar not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load avatar preview: {e}"),
            )),
        ),
    }
}
