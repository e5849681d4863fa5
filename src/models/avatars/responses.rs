use serde::{Deserialize, Serialize};

use crate::models::PaginationInfo;

// 头像元数据（附学生信息，分页列表和 info 接口使用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarInfo {
    pub id: i64,
    pub student_id: i64,
    pub student_name: Option<String>,
    pub file_path: String,
    pub file_size: i64,
    pub media_type: String,
}

// 头像分页响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarPageResponse {
    pub items: Vec<AvatarInfo>,
    pub pagination: PaginationInfo,
}

// 上传成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarUploadResponse {
    pub student_id: i64,
    pub file_size: i64,
    pub media_type: String,
    pub preview_size: i64,
}
