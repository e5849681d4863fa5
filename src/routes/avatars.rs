use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::common::PaginationQuery;
use crate::services::AvatarService;
use crate::utils::SafeStudentIdI64;

// 懒加载的全局 AvatarService 实例
static AVATAR_SERVICE: Lazy<AvatarService> = Lazy::new(AvatarService::new_lazy);

pub async fn upload_avatar(
    request: HttpRequest,
    student_id: SafeStudentIdI64,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    AVATAR_SERVICE
        .upload_avatar(student_id.0, payload, &request)
        .await
}

pub async fn get_avatar_preview(
    request: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    AVATAR_SERVICE
        .get_avatar_preview(student_id.0, &request)
        .await
}

pub async fn download_avatar(
    request: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    AVATAR_SERVICE.download_avatar(student_id.0, &request).await
}

pub async fn get_avatar_info(
    request: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    AVATAR_SERVICE.get_avatar_info(student_id.0, &request).await
}

pub async fn delete_avatar(
    request: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    AVATAR_SERVICE.delete_avatar(student_id.0, &request).await
}

pub async fn list_avatars(
    request: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    AVATAR_SERVICE.list_avatars(query.into_inner(), &request).await
}

// 配置路由
pub fn configure_avatar_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/avatars")
            .route("/page", web::get().to(list_avatars))
            .route("/{student_id}", web::post().to(upload_avatar))
            .route("/{student_id}", web::delete().to(delete_avatar))
            .route("/{student_id}/preview", web::get().to(get_avatar_preview))
            .route("/{student_id}/file", web::get().to(download_avatar))
            .route("/{student_id}/info", web::get().to(get_avatar_info)),
    );
}
