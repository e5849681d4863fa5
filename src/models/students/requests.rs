use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 学生查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct StudentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 学生创建请求
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub age: i32,
    pub faculty_id: Option<i64>,
}

// 学生更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    // 字段缺省表示保持不变，显式 null 表示移出学院
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub faculty_id: Option<Option<i64>>,
}

// 区分“字段缺省”与“显式 null”：缺省时 serde 不调用本函数（外层 None），
// 出现时包一层 Some，null 变成 Some(None)
fn deserialize_explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

// 年龄区间查询参数
#[derive(Debug, Deserialize)]
pub struct AgeRangeParams {
    pub min: i32,
    pub max: i32,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_faculty_id_missing_keeps() {
        let req: UpdateStudentRequest = serde_json::from_str(r#"{"age":12}"#).unwrap();
        assert_eq!(req.age, Some(12));
        assert_eq!(req.faculty_id, None);
    }

    #[test]
    fn test_update_faculty_id_null_detaches() {
        let req: UpdateStudentRequest = serde_json::from_str(r#"{"faculty_id":null}"#).unwrap();
        assert_eq!(req.faculty_id, Some(None));
    }

    #[test]
    fn test_update_faculty_id_value_reassigns() {
        let req: UpdateStudentRequest = serde_json::from_str(r#"{"faculty_id":3}"#).unwrap();
        assert_eq!(req.faculty_id, Some(Some(3)));
    }
}
