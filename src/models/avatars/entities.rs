use serde::{Deserialize, Serialize};

// 头像实体（元数据，缩略图字节单独获取）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    pub id: i64,
    pub student_id: i64,
    pub file_path: String,
    pub file_size: i64,
    pub media_type: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 数据库中的缩略图及其类型
#[derive(Debug, Clone)]
pub struct AvatarPreview {
    pub data: Vec<u8>,
    pub media_type: String,
}
