// 存储层 upsert 用的头像数据（由上传管线组装）
#[derive(Debug, Clone)]
pub struct UpsertAvatarData {
    pub file_path: String,
    pub file_size: i64,
    pub media_type: String,
    pub preview: Vec<u8>,
}
