use serde::{Deserialize, Serialize};

use super::entities::Student;
use crate::models::PaginationInfo;
use crate::models::faculties::responses::FacultySummary;

// 学生详情（附所属学院）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentWithFaculty {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub faculty: Option<FacultySummary>,
}

// 学生摘要（不含学院信息，列表场景使用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

impl From<&Student> for StudentSummary {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            age: student.age,
        }
    }
}

// 学生列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentListResponse {
    pub items: Vec<Student>,
    pub pagination: PaginationInfo,
}

// 学生统计响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentStatsResponse {
    pub total: i64,
    // 没有学生时为 null
    pub average_age: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_student_summary_from_student() {
        let student = Student {
            id: 7,
            name: "Harry".to_string(),
            age: 11,
            faculty_id: Some(1),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let summary = StudentSummary::from(&student);
        assert_eq!(summary.id, 7);
        assert_eq!(summary.name, "Harry");
        assert_eq!(summary.age, 11);
    }
}
