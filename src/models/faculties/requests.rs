use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 学院查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct FacultyListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 创建学院请求
#[derive(Debug, Deserialize)]
pub struct CreateFacultyRequest {
    pub name: String,
    pub color: String,
}

// 更新学院请求
#[derive(Debug, Deserialize)]
pub struct UpdateFacultyRequest {
    pub name: Option<String>,
    pub color: Option<String>,
}

// 名称或颜色搜索参数
#[derive(Debug, Deserialize)]
pub struct FacultySearchParams {
    pub query: String,
}

// 学院列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize)]
pub struct FacultyListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
