//! 请求参数解析失败的统一处理
//!
//! Json/Query/Path 的反序列化错误都转成统一信封的 400 响应，
//! 在 main 里通过 `JsonConfig`/`QueryConfig`/`PathConfig` 挂载。

use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::ApiResponse;

/// JSON 请求体解析失败 → 400
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid request body: {err}");
    bad_request(err, message)
}

/// 查询参数解析失败 → 400
pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid query parameters: {err}");
    bad_request(err, message)
}

/// 路径参数解析失败（如非数字 ID）→ 400
pub fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    bad_request(err, "Invalid ID format.".to_string())
}

fn bad_request<E>(err: E, message: String) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = HttpResponse::BadRequest().json(ApiResponse::error(message));
    error::InternalError::from_response(err, response).into()
}
