//! 学院存储操作

use super::SeaOrmStorage;
use crate::entity::faculties::{ActiveModel, Column, Entity as Faculties};
use crate::errors::{Result, SchoolError};
use crate::models::{
    PaginationInfo,
    faculties::{
        entities::Faculty,
        requests::{CreateFacultyRequest, FacultyListQuery, UpdateFacultyRequest},
        responses::FacultyListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建学院
    pub async fn create_faculty_impl(&self, req: CreateFacultyRequest) -> Result<Faculty> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            color: Set(req.color),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建学院失败: {e}")))?;

        Ok(result.into_faculty())
    }

    /// 通过 ID 获取学院
    pub async fn get_faculty_by_id_impl(&self, id: i64) -> Result<Option<Faculty>> {
        let result = Faculties::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学院失败: {e}")))?;

        Ok(result.map(|m| m.into_faculty()))
    }

    /// 学院名称是否已被占用（大小写不敏感）
    pub async fn faculty_name_taken_impl(&self, name: &str) -> Result<bool> {
        let count = Faculties::find()
            .filter(Expr::expr(Func::lower(Expr::col(Column::Name))).eq(name.to_lowercase()))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学院名称失败: {e}")))?;

        Ok(count > 0)
    }

    /// 分页列出学院
    pub async fn list_faculties_with_pagination_impl(
        &self,
        query: FacultyListQuery,
    ) -> Result<FacultyListResponse> {
        let page = Ord::max(query.page.unwrap_or(1), 1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Faculties::find();

        // 搜索条件（名称或颜色模糊匹配）
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Color.contains(&escaped)),
            );
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学院总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学院页数失败: {e}")))?;

        let faculties = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学院列表失败: {e}")))?;

        Ok(FacultyListResponse {
            items: faculties.into_iter().map(|m| m.into_faculty()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学院信息
    pub async fn update_faculty_impl(
        &self,
        id: i64,
        update: UpdateFacultyRequest,
    ) -> Result<Option<Faculty>> {
        // 先检查学院是否存在
        let existing = self.get_faculty_by_id_impl(id).await?;
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

        if let Some(color) = update.color {
            model.color = Set(color);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新学院失败: {e}")))?;

        self.get_faculty_by_id_impl(id).await
    }

    /// 删除学院
    pub async fn delete_faculty_impl(&self, id: i64) -> Result<bool> {
        let result = Faculties::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除学院失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按颜色筛选（大小写不敏感）
    pub async fn list_faculties_by_color_impl(&self, color: &str) -> Result<Vec<Faculty>> {
        let result = Faculties::find()
            .filter(Expr::expr(Func::lower(Expr::col(Column::Color))).eq(color.to_lowercase()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("按颜色查询学院失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_faculty()).collect())
    }

    /// 按名称或颜色搜索（大小写不敏感）
    pub async fn search_faculties_impl(&self, query: &str) -> Result<Vec<Faculty>> {
        let needle = query.to_lowercase();

        let result = Faculties::find()
            .filter(
                Condition::any()
                    .add(Expr::expr(Func::lower(Expr::col(Column::Name))).eq(needle.clone()))
                    .add(Expr::expr(Func::lower(Expr::col(Column::Color))).eq(needle)),
            )
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("搜索学院失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_faculty()).collect())
    }
}
