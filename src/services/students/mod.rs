pub mod by_age;
pub mod create;
pub mod delete;
pub mod faculty;
pub mod get;
pub mod list;
pub mod stats;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{
    AgeRangeParams, CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取学生列表
    pub async fn list_students(
        &self,
        query: StudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, query, request).await
    }

    // 创建学生
    pub async fn create_student(
        &self,
        student_data: CreateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, student_data, request).await
    }

    // 根据ID获取学生
    pub async fn get_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_student(self, student_id, request).await
    }

    // 更新学生信息
    pub async fn update_student(
        &self,
        student_id: i64,
        update_data: UpdateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, student_id, update_data, request).await
    }

    // 删除学生
    pub async fn delete_student(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, student_id, request).await
    }

    // 按年龄精确筛选
    pub async fn get_students_by_age(
        &self,
        age: i32,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        by_age::get_students_by_age(self, age, request).await
    }

    // 按年龄区间筛选
    pub async fn get_students_by_age_between(
        &self,
        params: AgeRangeParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        by_age::get_students_by_age_between(self, params, request).await
    }

    // 获取学生所属学院
    pub async fn get_student_faculty(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        faculty::get_student_faculty(self, student_id, request).await
    }

    // 学生统计（总数、平均年龄）
    pub async fn get_student_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::get_student_stats(self, request).await
    }

    // 最近创建的学生
    pub async fn get_latest_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::get_latest_students(self, request).await
    }
}
