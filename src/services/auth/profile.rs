use actix_web::{HttpRequest, HttpResponse};

use crate::errors::{CmisError, Result};
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;

/// 返回认证中间件解析出的当前用户（id + 邮箱）
pub async fn handle_me(request: &HttpRequest) -> Result<HttpResponse> {
    let user = RequireJWT::extract_current_user(request)
        .ok_or_else(|| CmisError::unauthorized("Not authorized. Please login."))?;

    Ok(HttpResponse::Ok().json(ApiResponse::data(user)))
}
