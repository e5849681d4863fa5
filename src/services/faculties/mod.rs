pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod students;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::faculties::requests::{
    CreateFacultyRequest, FacultyListParams, FacultySearchParams, UpdateFacultyRequest,
};
use crate::storage::Storage;

pub struct FacultyService {
    storage: Option<Arc<dyn Storage>>,
}

impl FacultyService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取学院列表
    pub async fn list_faculties(
        &self,
        query: FacultyListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_faculties(self, query, request).await
    }

    // 创建学院
    pub async fn create_faculty(
        &self,
        faculty_data: CreateFacultyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_faculty(self, faculty_data, request).await
    }

    // 根据ID获取学院（附学生列表）
    pub async fn get_faculty(
        &self,
        faculty_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_faculty(self, faculty_id, request).await
    }

    // 更新学院信息
    pub async fn update_faculty(
        &self,
        faculty_id: i64,
        update_data: UpdateFacultyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_faculty(self, faculty_id, update_data, request).await
    }

    // 删除学院
    pub async fn delete_faculty(
        &self,
        faculty_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_faculty(self, faculty_id, request).await
    }

    // 按颜色筛选
    pub async fn get_faculties_by_color(
        &self,
        color: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        search::get_faculties_by_color(self, color, request).await
    }

    // 按名称或颜色搜索
    pub async fn search_faculties(
        &self,
        params: FacultySearchParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        search::search_faculties(self, params, request).await
    }

    // 列出学院的学生
    pub async fn get_faculty_students(
        &self,
        faculty_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students::get_faculty_students(self, faculty_id, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use serde_json::Value;

    use crate::models::students::requests::CreateStudentRequest;
    use crate::storage::memory::MemoryStorage;

    fn service_with_storage() -> (FacultyService, Arc<dyn Storage>) {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        (
            FacultyService {
                storage: Some(storage.clone()),
            },
            storage,
        )
    }

    async fn json_body(resp: actix_web::HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_create_then_get_includes_students() {
        let (service, storage) = service_with_storage();
        let req = TestRequest::default().to_http_request();

        let resp = service
            .create_faculty(
                CreateFacultyRequest {
                    name: "Ravenclaw".to_string(),
                    color: "blue".to_string(),
                },
                &req,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = json_body(resp).await;
        let id = body["data"]["id"].as_i64().unwrap();

        storage
            .create_student(CreateStudentRequest {
                name: "Padma Patil".to_string(),
                age: 12,
                faculty_id: Some(id),
            })
            .await
            .unwrap();

        let resp = service.get_faculty(id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["data"]["name"], "Ravenclaw");
        assert_eq!(body["data"]["color"], "blue");
        let students = body["data"]["students"].as_array().unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0]["name"], "Padma Patil");
    }

    #[actix_web::test]
    async fn test_duplicate_name_conflicts() {
        let (service, storage) = service_with_storage();
        let req = TestRequest::default().to_http_request();

        storage
            .create_faculty(CreateFacultyRequest {
                name: "Hufflepuff".to_string(),
                color: "yellow".to_string(),
            })
            .await
            .unwrap();

        let resp = service
            .create_faculty(
                CreateFacultyRequest {
                    name: "hufflepuff".to_string(),
                    color: "gold".to_string(),
                },
                &req,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_color_filter_returns_only_matching_rows() {
        let (service, storage) = service_with_storage();
        let req = TestRequest::default().to_http_request();

        for (name, color) in [("Gryffindor", "red"), ("Slytherin", "green")] {
            storage
                .create_faculty(CreateFacultyRequest {
                    name: name.to_string(),
                    color: color.to_string(),
                })
                .await
                .unwrap();
        }

        let resp = service
            .get_faculties_by_color("RED".to_string(), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "Gryffindor");

        let resp = service
            .get_faculties_by_color("purple".to_string(), &req)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_search_matches_name_or_color() {
        let (service, storage) = service_with_storage();
        let req = TestRequest::default().to_http_request();

        storage
            .create_faculty(CreateFacultyRequest {
                name: "Slytherin".to_string(),
                color: "green".to_string(),
            })
            .await
            .unwrap();

        let resp = service
            .search_faculties(
                FacultySearchParams {
                    query: "slytherin".to_string(),
                },
                &req,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = service
            .search_faculties(
                FacultySearchParams {
                    query: "   ".to_string(),
                },
                &req,
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_delete_detaches_students() {
        let (service, storage) = service_with_storage();
        let req = TestRequest::default().to_http_request();

        let faculty = storage
            .create_faculty(CreateFacultyRequest {
                name: "Durmstrang".to_string(),
                color: "black".to_string(),
            })
            .await
            .unwrap();
        let student = storage
            .create_student(CreateStudentRequest {
                name: "Viktor Krum".to_string(),
                age: 17,
                faculty_id: Some(faculty.id),
            })
            .await
            .unwrap();

        let resp = service.delete_faculty(faculty.id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        // 学生保留，但学院引用被置空
        let detached = storage.get_student_by_id(student.id).await.unwrap().unwrap();
        assert_eq!(detached.faculty_id, None);

        let resp = service.delete_faculty(faculty.id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
