use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::faculties::requests::{
    CreateFacultyRequest, FacultyListParams, FacultySearchParams, UpdateFacultyRequest,
};
use crate::services::FacultyService;
use crate::utils::SafeIdI64;

// 懒加载的全局 FacultyService 实例
static FACULTY_SERVICE: Lazy<FacultyService> = Lazy::new(FacultyService::new_lazy);

pub async fn list_faculties(
    request: HttpRequest,
    query: web::Query<FacultyListParams>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .list_faculties(query.into_inner(), &request)
        .await
}

pub async fn create_faculty(
    request: HttpRequest,
    faculty_data: web::Json<CreateFacultyRequest>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .create_faculty(faculty_data.into_inner(), &request)
        .await
}

pub async fn get_faculty(request: HttpRequest, faculty_id: SafeIdI64) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE.get_faculty(faculty_id.0, &request).await
}

pub async fn update_faculty(
    request: HttpRequest,
    faculty_id: SafeIdI64,
    update_data: web::Json<UpdateFacultyRequest>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .update_faculty(faculty_id.0, update_data.into_inner(), &request)
        .await
}

pub async fn delete_faculty(
    request: HttpRequest,
    faculty_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE.delete_faculty(faculty_id.0, &request).await
}

pub async fn get_faculties_by_color(
    request: HttpRequest,
    color: web::Path<String>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .get_faculties_by_color(color.into_inner(), &request)
        .await
}

pub async fn search_faculties(
    request: HttpRequest,
    params: web::Query<FacultySearchParams>,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .search_faculties(params.into_inner(), &request)
        .await
}

pub async fn get_faculty_students(
    request: HttpRequest,
    faculty_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    FACULTY_SERVICE
        .get_faculty_students(faculty_id.0, &request)
        .await
}

// 配置路由（字面量路径注册在 /{id} 之前）
pub fn configure_faculty_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/faculties")
            .route("", web::get().to(list_faculties))
            .route("", web::post().to(create_faculty))
            .route("/search", web::get().to(search_faculties))
            .route("/color/{color}", web::get().to(get_faculties_by_color))
            .route("/{id}", web::get().to(get_faculty))
            .route("/{id}", web::put().to(update_faculty))
            .route("/{id}", web::delete().to(delete_faculty))
            .route("/{id}/students", web::get().to(get_faculty_students)),
    );
}
