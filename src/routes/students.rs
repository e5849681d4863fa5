use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::students::requests::{
    AgeRangeParams, CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::services::StudentService;
use crate::utils::SafeIdI64;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn list_students(
    request: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .list_students(query.into_inner(), &request)
        .await
}

pub async fn create_student(
    request: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(student_data.into_inner(), &request)
        .await
}

pub async fn get_student(request: HttpRequest, student_id: SafeIdI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(student_id.0, &request).await
}

pub async fn update_student(
    request: HttpRequest,
    student_id: SafeIdI64,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(student_id.0, update_data.into_inner(), &request)
        .await
}

pub async fn delete_student(
    request: HttpRequest,
    student_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(student_id.0, &request).await
}

pub async fn get_students_by_age(
    request: HttpRequest,
    age: web::Path<i32>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .get_students_by_age(age.into_inner(), &request)
        .await
}

pub async fn get_students_by_age_between(
    request: HttpRequest,
    params: web::Query<AgeRangeParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .get_students_by_age_between(params.into_inner(), &request)
        .await
}

pub async fn get_student_faculty(
    request: HttpRequest,
    student_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .get_student_faculty(student_id.0, &request)
        .await
}

pub async fn get_student_stats(request: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student_stats(&request).await
}

pub async fn get_latest_students(request: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_latest_students(&request).await
}

// 配置路由（字面量路径注册在 /{id} 之前）
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .route("", web::get().to(list_students))
            .route("", web::post().to(create_student))
            .route("/stats", web::get().to(get_student_stats))
            .route("/latest", web::get().to(get_latest_students))
            .route("/age-range", web::get().to(get_students_by_age_between))
            .route("/age/{age}", web::get().to(get_students_by_age))
            .route("/{id}", web::get().to(get_student))
            .route("/{id}", web::put().to(update_student))
            .route("/{id}", web::delete().to(delete_student))
            .route("/{id}/faculty", web::get().to(get_student_faculty)),
    );
}
