//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, SchoolError};
use crate::models::{
    PaginationInfo,
    faculties::entities::Faculty,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            age: Set(req.age),
            faculty_id: Set(req.faculty_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过 ID 获取学生及其所属学院
    pub async fn get_student_with_faculty_impl(
        &self,
        id: i64,
    ) -> Result<Option<(Student, Option<Faculty>)>> {
        let result = Students::find_by_id(id)
            .find_also_related(crate::entity::prelude::Faculties)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|(student, faculty)| {
            (
                student.into_student(),
                faculty.map(|f| f.into_faculty()),
            )
        }))
    }

    /// 学生名称是否已被占用（大小写不敏感）
    pub async fn student_name_taken_impl(&self, name: &str) -> Result<bool> {
        let count = Students::find()
            .filter(Expr::expr(Func::lower(Expr::col(Column::Name))).eq(name.to_lowercase()))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生名称失败: {e}")))?;

        Ok(count > 0)
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = Ord::max(query.page.unwrap_or(1), 1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Students::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(age) = update.age {
            model.age = Set(age);
        }

        // 外层 Some 表示请求中出现了该字段，内层 None 表示移出学院
        if let Some(faculty_id) = update.faculty_id {
            model.faculty_id = Set(faculty_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按年龄精确筛选
    pub async fn list_students_by_age_impl(&self, age: i32) -> Result<Vec<Student>> {
        let result = Students::find()
            .filter(Column::Age.eq(age))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("按年龄查询学生失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_student()).collect())
    }

    /// 按年龄区间筛选（闭区间）
    pub async fn list_students_by_age_between_impl(
        &self,
        min: i32,
        max: i32,
    ) -> Result<Vec<Student>> {
        let result = Students::find()
            .filter(Column::Age.between(min, max))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("按年龄区间查询学生失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_student()).collect())
    }

    /// 列出某学院的学生
    pub async fn list_students_by_faculty_impl(&self, faculty_id: i64) -> Result<Vec<Student>> {
        let result = Students::find()
            .filter(Column::FacultyId.eq(faculty_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("按学院查询学生失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_student()).collect())
    }

    /// 统计学生数量
    pub async fn count_students_impl(&self) -> Result<u64> {
        let count = Students::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计学生数量失败: {e}")))?;

        Ok(count)
    }

    /// 学生平均年龄（在 Rust 侧以 SUM/COUNT 计算，避免各数据库 AVG 返回类型差异）
    pub async fn average_student_age_impl(&self) -> Result<Option<f64>> {
        let count = self.count_students_impl().await?;
        if count == 0 {
            return Ok(None);
        }

        let sum = Students::find()
            .select_only()
            .column_as(Column::Age.sum(), "age_sum")
            .into_tuple::<Option<i64>>()
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计学生年龄失败: {e}")))?
            .flatten()
            .unwrap_or(0);

        Ok(Some(sum as f64 / count as f64))
    }

    /// 最近创建的 N 个学生（ID 最大）
    pub async fn list_latest_students_impl(&self, limit: u64) -> Result<Vec<Student>> {
        let result = Students::find()
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询最新学生失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_student()).collect())
    }
}
