//! 路径参数安全提取器
//!
//! 把路径中的 ID 解析为 i64，解析失败或非正数时直接返回 400，
//! 避免每个 handler 重复校验。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 定义按路径参数名提取 i64 的 extractor
macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let raw = req.match_info().get($param).unwrap_or_default();
                match raw.parse::<i64>() {
                    Ok(id) if id > 0 => ready(Ok($name(id))),
                    _ => {
                        let message = format!("Invalid {} parameter: '{raw}'", $param);
                        let response = HttpResponse::BadRequest()
                            .json(ApiResponse::error_empty(ErrorCode::BadRequest, &message));
                        ready(Err(actix_web::error::InternalError::from_response(
                            message, response,
                        )
                        .into()))
                    }
                }
            }
        }
    };
}

define_safe_id_extractor!(SafeIdI64, "id");
define_safe_id_extractor!(SafeStudentIdI64, "student_id");
