//! 头像存储操作
//!
//! 每个学生最多一条头像记录，上传时按 student_id 进行 upsert。

use super::SeaOrmStorage;
use crate::entity::avatars::{ActiveModel, Column, Entity as Avatars};
use crate::entity::prelude::Students;
use crate::errors::{Result, SchoolError};
use crate::models::{
    PaginationInfo,
    avatars::{
        entities::{Avatar, AvatarPreview},
        requests::UpsertAvatarData,
        responses::{AvatarInfo, AvatarPageResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建或更新学生头像
    pub async fn upsert_avatar_impl(
        &self,
        student_id: i64,
        data: UpsertAvatarData,
    ) -> Result<Avatar> {
        let now = chrono::Utc::now().timestamp();

        let existing = Avatars::find()
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询头像失败: {e}")))?;

        let result = match existing {
            Some(found) => {
                let mut model: ActiveModel = found.into();
                model.file_path = Set(data.file_path);
                model.file_size = Set(data.file_size);
                model.media_type = Set(data.media_type);
                model.preview = Set(data.preview);
                model.updated_at = Set(now);

                model
                    .update(&self.db)
                    .await
                    .map_err(|e| SchoolError::database_operation(format!("更新头像失败: {e}")))?
            }
            None => {
                let model = ActiveModel {
                    student_id: Set(student_id),
                    file_path: Set(data.file_path),
                    file_size: Set(data.file_size),
                    media_type: Set(data.media_type),
                    preview: Set(data.preview),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };

                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| SchoolError::database_operation(format!("创建头像失败: {e}")))?
            }
        };

        Ok(result.into_avatar())
    }

    /// 通过学生 ID 获取头像元数据
    pub async fn get_avatar_by_student_id_impl(&self, student_id: i64) -> Result<Option<Avatar>> {
        let result = Avatars::find()
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询头像失败: {e}")))?;

        Ok(result.map(|m| m.into_avatar()))
    }

    /// 通过学生 ID 获取数据库中的缩略图
    pub async fn get_avatar_preview_impl(&self, student_id: i64) -> Result<Option<AvatarPreview>> {
        let result = Avatars::find()
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询头像缩略图失败: {e}")))?;

        Ok(result.map(|m| AvatarPreview {
            data: m.preview,
            media_type: m.media_type,
        }))
    }

    /// 删除学生头像，返回被删除的记录
    pub async fn delete_avatar_impl(&self, student_id: i64) -> Result<Option<Avatar>> {
        let existing = Avatars::find()
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询头像失败: {e}")))?;

        let Some(found) = existing else {
            return Ok(None);
        };

        let avatar = found.clone().into_avatar();

        found
            .delete(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除头像失败: {e}")))?;

        Ok(Some(avatar))
    }

    /// 分页列出头像元数据（附学生名称）
    pub async fn list_avatars_with_pagination_impl(
        &self,
        page: i64,
        size: i64,
    ) -> Result<AvatarPageResponse> {
        let page = page.max(1) as u64;
        let size = size.clamp(1, 100) as u64;

        let paginator = Avatars::find()
            .find_also_related(Students)
            .order_by_asc(Column::Id)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询头像总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询头像页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询头像列表失败: {e}")))?;

        Ok(AvatarPageResponse {
            items: rows
                .into_iter()
                .map(|(avatar, student)| AvatarInfo {
                    id: avatar.id,
                    student_id: avatar.student_id,
                    student_name: student.map(|s| s.name),
                    file_path: avatar.file_path,
                    file_size: avatar.file_size,
                    media_type: avatar.media_type,
                })
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
