use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::path::Path;

use super::AvatarService;
use crate::config::AppConfig;
use crate::errors::SchoolError;
use crate::models::ErrorCode;
use crate::models::{
    ApiResponse,
    avatars::{requests::UpsertAvatarData, responses::AvatarUploadResponse},
};
use crate::utils::file_magic::{media_type_for_extension, validate_magic_bytes};
use crate::utils::preview::generate_preview;

pub async fn upload_avatar(
    service: &AvatarService,
    student_id: i64,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let avatar_dir = &config.avatars.dir;
    let max_size = config.avatars.max_size;
    let allowed_extensions = &config.avatars.allowed_extensions;

    let storage = service.get_storage(request);

    // 学生必须存在
    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Student lookup failed: {e}"),
                )),
            );
        }
    }

    // 确保头像目录存在
    if !Path::new(avatar_dir).exists()
        && let Err(e) = fs::create_dir_all(avatar_dir)
    {
        tracing::error!("{}", SchoolError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::AvatarUploadFailed,
                "创建头像目录失败",
            )),
        );
    }

    // 文件相关信息
    let mut file_uploaded = false;
    let mut extension = String::new();
    let mut file_data: Vec<u8> = Vec::new();

    loop {
        let mut field = match payload.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            // 流解析失败直接上报，而不是当作“没有文件”
            Err(e) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::AvatarUploadFailed,
                    format!("Multipart parsing failed: {e}"),
                )));
            }
        };

        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name == "avatar" {
            if file_uploaded {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::MultifileUploadNotAllowed,
                    "Only one file can be uploaded at a time",
                )));
            }
            file_uploaded = true;

            // 先获取原始文件名
            let original_name = content_disposition
                .and_then(|cd| cd.get_filename())
                .map(|s| s.to_string())
                .unwrap_or_default();

            // 提取扩展名并校验
            extension = Path::new(&original_name)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| format!(".{}", ext.to_lowercase()))
                .unwrap_or_default();

            if !allowed_extensions
                .iter()
                .any(|t| t.to_lowercase() == extension)
            {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileTypeNotAllowed,
                    "File type not allowed",
                )));
            }

            let mut first_chunk = true;
            while let Some(chunk) = field.next().await {
                let data = chunk?;

                // 第一个 chunk 时验证魔术字节
                if first_chunk {
                    first_chunk = false;
                    if !validate_magic_bytes(&data, &extension) {
                        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::FileTypeNotAllowed,
                            "文件内容与扩展名不匹配",
                        )));
                    }
                }

                // 校验大小
                if file_data.len() + data.len() > max_size {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileSizeExceeded,
                        "File size exceeds the limit",
                    )));
                }
                file_data.extend_from_slice(&data);
            }
        }
    }

    if !file_uploaded || file_data.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AvatarUploadFailed,
            "No file found in upload payload",
        )));
    }

    // 生成缩略图（无法解码的内容直接拒绝）
    let preview = match generate_preview(&file_data, config.avatars.preview_width) {
        Ok(preview) => preview,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::FileTypeNotAllowed,
                format!("Unable to decode image: {e}"),
            )));
        }
    };

    // 原图落盘，每个学生一个固定路径
    let file_path = format!("{avatar_dir}/student_{student_id}{extension}");
    if let Err(e) = fs::write(&file_path, &file_data) {
        tracing::error!("{}", SchoolError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::AvatarUploadFailed,
                "文件写入失败",
            )),
        );
    }

    // 替换上传时清理扩展名不同的旧文件
    let previous = storage
        .get_avatar_by_student_id(student_id)
        .await
        .ok()
        .flatten();

    let preview_size = preview.len() as i64;
    let upsert = UpsertAvatarData {
        file_path: file_path.clone(),
        file_size: file_data.len() as i64,
        media_type: media_type_for_extension(&extension).to_string(),
        preview,
    };

    match storage.upsert_avatar(student_id, upsert).await {
        Ok(avatar) => {
            if let Some(previous) = previous
                && previous.file_path != file_path
            {
                let _ = fs::remove_file(&previous.file_path);
            }

            let response = AvatarUploadResponse {
                student_id: avatar.student_id,
                file_size: avatar.file_size,
                media_type: avatar.media_type,
                preview_size,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "头像上传成功")))
        }
        Err(e) => {
            let _ = fs::remove_file(&file_path);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AvatarUploadFailed,
                    format!("Failed to save avatar: {e}"),
                )),
            )
        }
    }
}
