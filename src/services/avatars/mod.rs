pub mod delete;
pub mod download;
pub mod info;
pub mod list;
pub mod preview;
pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::common::PaginationQuery;
use crate::storage::Storage;

pub struct AvatarService {
    storage: Option<Arc<dyn Storage>>,
}

impl AvatarService {
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

    // 上传（或替换）学生头像
    pub async fn upload_avatar(
        &self,
        student_id: i64,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        upload::upload_avatar(self, student_id, payload, request).await
    }

    // 获取数据库中的缩略图
    pub async fn get_avatar_preview(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        preview::get_avatar_preview(self, student_id, request).await
    }

    // 下载磁盘上的原图
    pub async fn download_avatar(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        download::download_avatar(self, student_id, request).await
    }

    // 获取头像元数据
    pub async fn get_avatar_info(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        info::get_avatar_info(self, student_id, request).await
    }

    // 删除学生头像（数据库记录和磁盘文件）
    pub async fn delete_avatar(
        &self,
        student_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_avatar(self, student_id, request).await
    }

    // 分页列出头像元数据
    pub async fn list_avatars(
        &self,
        query: PaginationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_avatars(self, query, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::error::PayloadError;
    use actix_web::http::StatusCode;
    use actix_web::http::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
    use actix_web::test::TestRequest;
    use actix_web::web::Bytes;
    use futures_util::stream;
    use serde_json::Value;
    use std::fs;

    use crate::config::AppConfig;
    use crate::models::avatars::requests::UpsertAvatarData;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::storage::memory::MemoryStorage;

    fn service_with_storage() -> (AvatarService, Arc<dyn Storage>) {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        (
            AvatarService {
                storage: Some(storage.clone()),
            },
            storage,
        )
    }

    async fn json_body(resp: actix_web::HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn new_student(storage: &Arc<dyn Storage>, name: &str) -> i64 {
        storage
            .create_student(CreateStudentRequest {
                name: name.to_string(),
                age: 11,
                faculty_id: None,
            })
            .await
            .unwrap()
            .id
    }

    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([30, 30, 200]));
        let mut buf = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buf);
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut cursor, image::ImageFormat::Png)
            .unwrap();
        buf
    }

    fn avatar_form_body(filename: &str, content: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(b"--avatar-test\r\n");
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"avatar\"; filename=\"{filename}\"\r\n\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n--avatar-test--\r\n");
        body
    }

    fn multipart_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("multipart/form-data; boundary=avatar-test"),
        );
        headers
    }

    fn multipart_payload(body: Vec<u8>) -> Multipart {
        Multipart::new(
            &multipart_headers(),
            stream::iter(vec![Ok::<_, PayloadError>(Bytes::from(body))]),
        )
    }

    #[actix_web::test]
    async fn test_upload_stores_original_and_preview() {
        let (service, storage) = service_with_storage();
        let req = TestRequest::default().to_http_request();
        let student_id = new_student(&storage, "Ginny Weasley").await;

        let payload = multipart_payload(avatar_form_body("pic.png", &sample_png(120, 60)));
        let resp = service.upload_avatar(student_id, payload, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["data"]["media_type"], "image/png");
        assert!(body["data"]["preview_size"].as_i64().unwrap() > 0);

        // 原图落盘，缩略图以 JPEG 存库
        let config = AppConfig::get();
        let file_path = format!("{}/student_{}.png", config.avatars.dir, student_id);
        assert!(fs::metadata(&file_path).is_ok());
        let preview = storage.get_avatar_preview(student_id).await.unwrap().unwrap();
        assert!(preview.data.starts_with(&[0xFF, 0xD8, 0xFF]));

        let _ = fs::remove_file(&file_path);
    }

    #[actix_web::test]
    async fn test_upload_reports_stream_errors() {
        let (service, storage) = service_with_storage();
        let req = TestRequest::default().to_http_request();
        let student_id = new_student(&storage, "Dean Thomas").await;

        // 传输中断不应被当作"没有文件"
        let payload = Multipart::new(
            &multipart_headers(),
            stream::iter(vec![Err::<Bytes, _>(PayloadError::Incomplete(None))]),
        );
        let resp = service.upload_avatar(student_id, payload, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = json_body(resp).await;
        assert!(body["message"].as_str().unwrap().contains("Multipart"));
    }

    #[actix_web::test]
    async fn test_upload_unknown_student_not_found() {
        let (service, _storage) = service_with_storage();
        let req = TestRequest::default().to_http_request();

        let payload = multipart_payload(avatar_form_body("pic.png", &sample_png(10, 10)));
        let resp = service.upload_avatar(404, payload, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_upload_rejects_disallowed_extension() {
        let (service, storage) = service_with_storage();
        let req = TestRequest::default().to_http_request();
        let student_id = new_student(&storage, "Seamus Finnigan").await;

        let payload = multipart_payload(avatar_form_body("pic.svg", b"<svg/>"));
        let resp = service.upload_avatar(student_id, payload, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_info_delete_lifecycle() {
        let (service, storage) = service_with_storage();
        let req = TestRequest::default().to_http_request();
        let student_id = new_student(&storage, "Neville Longbottom").await;

        let path = std::env::temp_dir().join(format!(
            "avatar_lifecycle_{}_{}.png",
            std::process::id(),
            student_id
        ));
        fs::write(&path, b"png").unwrap();
        storage
            .upsert_avatar(
                student_id,
                UpsertAvatarData {
                    file_path: path.to_string_lossy().into_owned(),
                    file_size: 3,
                    media_type: "image/png".to_string(),
                    preview: vec![0xFF, 0xD8, 0xFF],
                },
            )
            .await
            .unwrap();

        let resp = service.get_avatar_info(student_id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["data"]["student_name"], "Neville Longbottom");
        assert_eq!(body["data"]["media_type"], "image/png");

        let resp = service.get_avatar_preview(student_id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = service.delete_avatar(student_id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(!path.exists());

        let resp = service.delete_avatar(student_id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let resp = service.get_avatar_preview(student_id, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
