pub mod login;
pub mod profile;
pub mod register;

use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;

use crate::errors::{CmisError, Result};
use crate::models::auth::requests::{LoginRequest, RegisterRequest};
use crate::storage::Storage;
use crate::utils::jwt::Jwt;

pub struct AuthService {
    storage: Arc<dyn Storage>,
    jwt: Jwt,
}

impl AuthService {
    /// 存储句柄与令牌服务在启动时构造一次后传进来
    pub fn new(storage: Arc<dyn Storage>, jwt: Jwt) -> Self {
        Self { storage, jwt }
    }

    // 用户注册
    pub async fn register(&self, request: RegisterRequest) -> Result<HttpResponse> {
        register::handle_register(self, request).await
    }

    // 登录验证
    pub async fn login(&self, request: LoginRequest) -> Result<HttpResponse> {
        login::handle_login(self, request).await
    }

    // 获取当前登录用户
    pub async fn me(&self, request: &HttpRequest) -> Result<HttpResponse> {
        profile::handle_me(request).await
    }

    pub(crate) fn issue_token(&self, user_id: i64) -> Result<String> {
        self.jwt
            .issue(user_id)
            .map_err(|e| CmisError::internal(format!("令牌签发失败: {e}")))
    }
}

/// 注册与登录共用的凭证检查
///
/// 两个字段缺一即拒绝；邮箱 trim 后统一转小写，密码原样保留。
pub(crate) fn credentials(
    email: &Option<String>,
    password: &Option<String>,
) -> Result<(String, String)> {
    let email = email.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let password = password.as_deref().filter(|s| !s.is_empty());

    match (email, password) {
        (Some(email), Some(password)) => Ok((email.to_lowercase(), password.to_string())),
        _ => Err(CmisError::bad_request("Please provide email and password.")),
    }
}
