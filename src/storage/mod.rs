use std::sync::Arc;

use crate::models::{
    avatars::{
        entities::{Avatar, AvatarPreview},
        requests::UpsertAvatarData,
        responses::AvatarPageResponse,
    },
    faculties::{
        entities::Faculty,
        requests::{CreateFacultyRequest, FacultyListQuery, UpdateFacultyRequest},
        responses::FacultyListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};

use crate::errors::Result;

#[cfg(test)]
pub mod memory;
pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过ID获取学生及其所属学院
    async fn get_student_with_faculty(&self, id: i64) -> Result<Option<(Student, Option<Faculty>)>>;
    // 学生名称是否已被占用（大小写不敏感）
    async fn student_name_taken(&self, name: &str) -> Result<bool>;
    // 分页列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 更新学生信息
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;
    // 按年龄精确筛选
    async fn list_students_by_age(&self, age: i32) -> Result<Vec<Student>>;
    // 按年龄区间筛选（闭区间）
    async fn list_students_by_age_between(&self, min: i32, max: i32) -> Result<Vec<Student>>;
    // 列出某学院的学生
    async fn list_students_by_faculty(&self, faculty_id: i64) -> Result<Vec<Student>>;
    // 学生总数
    async fn count_students(&self) -> Result<u64>;
    // 学生平均年龄（无学生时为 None）
    async fn average_student_age(&self) -> Result<Option<f64>>;
    // 最近创建的 N 个学生（ID 最大）
    async fn list_latest_students(&self, limit: u64) -> Result<Vec<Student>>;

    /// 学院管理方法
    // 创建学院
    async fn create_faculty(&self, faculty: CreateFacultyRequest) -> Result<Faculty>;
    // 通过ID获取学院信息
    async fn get_faculty_by_id(&self, id: i64) -> Result<Option<Faculty>>;
    // 学院名称是否已被占用（大小写不敏感）
    async fn faculty_name_taken(&self, name: &str) -> Result<bool>;
    // 分页列出学院
    async fn list_faculties_with_pagination(
        &self,
        query: FacultyListQuery,
    ) -> Result<FacultyListResponse>;
    // 更新学院信息
    async fn update_faculty(&self, id: i64, update: UpdateFacultyRequest)
    -> Result<Option<Faculty>>;
    // 删除学院（学生的学院引用被置空）
    async fn delete_faculty(&self, id: i64) -> Result<bool>;
    // 按颜色筛选（大小写不敏感）
    async fn list_faculties_by_color(&self, color: &str) -> Result<Vec<Faculty>>;
    // 按名称或颜色搜索（大小写不敏感）
    async fn search_faculties(&self, query: &str) -> Result<Vec<Faculty>>;

    /// 头像管理方法
    // 创建或更新学生头像（每个学生最多一个）
    async fn upsert_avatar(&self, student_id: i64, data: UpsertAvatarData) -> Result<Avatar>;
    // 通过学生ID获取头像元数据
    async fn get_avatar_by_student_id(&self, student_id: i64) -> Result<Option<Avatar>>;
    // 通过学生ID获取数据库中的缩略图
    async fn get_avatar_preview(&self, student_id: i64) -> Result<Option<AvatarPreview>>;
    // 删除学生头像，返回被删除的记录（用于清理磁盘文件）
    async fn delete_avatar(&self, student_id: i64) -> Result<Option<Avatar>>;
    // 分页列出头像元数据（附学生名称）
    async fn list_avatars_with_pagination(
        &self,
        page: i64,
        size: i64,
    ) -> Result<AvatarPageResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
