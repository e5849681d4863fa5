//! 头像实体
//!
//! 原图存放在磁盘上，缩略图（preview）以 BLOB 形式存放在数据库中。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "avatars")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub student_id: i64,
    pub file_path: String,
    pub file_size: i64,
    pub media_type: String,
    #[sea_orm(column_type = "Blob")]
    pub preview: Vec<u8>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型（不携带缩略图字节）
impl Model {
    pub fn into_avatar(self) -> crate::models::avatars::entities::Avatar {
        use crate::models::avatars::entities::Avatar;
        use chrono::{DateTime, Utc};

        Avatar {
            id: self.id,
            student_id: self.student_id,
            file_path: self.file_path,
            file_size: self.file_size,
            media_type: self.media_type,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
