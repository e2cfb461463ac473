use actix_web::HttpResponse;
use tracing::info;

use super::{AuthService, credentials};
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;
use crate::models::auth::requests::RegisterRequest;
use crate::models::auth::responses::{AuthResponse, AuthUser};
use crate::utils::password::hash_password;

pub async fn handle_register(
    service: &AuthService,
    request: RegisterRequest,
) -> Result<HttpResponse> {
    let (email, password) = credentials(&request.email, &request.password)?;

    // 1. 预检查邮箱是否已注册；并发竞争由唯一约束兜底
    if service.storage.get_user_by_email(&email).await?.is_some() {
        return Err(CmisError::conflict(
            "User is already registered. Please login to the application.",
        ));
    }

    // 2. 哈希密码后落库
    let password_hash = hash_password(&password)?;
    let user = service.storage.create_user(email, password_hash).await?;

    info!("New user registered: {}", user.email);

    // 3. 注册即签发令牌，客户端可以直接进入系统
    let token = service.issue_token(user.id)?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        AuthResponse {
            user: AuthUser::from(user),
            token,
        },
        "Registration successful! You can now login.",
    )))
}
