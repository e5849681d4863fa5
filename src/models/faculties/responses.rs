use serde::{Deserialize, Serialize};

use super::entities::Faculty;
use crate::models::PaginationInfo;
use crate::models::students::responses::StudentSummary;

// 学院摘要（嵌入学生响应中使用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultySummary {
    pub id: i64,
    pub name: String,
    pub color: String,
}

impl From<&Faculty> for FacultySummary {
    fn from(faculty: &Faculty) -> Self {
        Self {
            id: faculty.id,
            name: faculty.name.clone(),
            color: faculty.color.clone(),
        }
    }
}

// 学院详情（附学生列表）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyWithStudents {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub students: Vec<StudentSummary>,
}

// 学院列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyListResponse {
    pub items: Vec<Faculty>,
    pub pagination: PaginationInfo,
}
