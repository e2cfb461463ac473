use actix_web::HttpResponse;
use tracing::info;

use super::{AuthService, credentials};
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;
use crate::models::auth::requests::LoginRequest;
use crate::models::auth::responses::{AuthResponse, AuthUser};
use crate::utils::password::verify_password;

const INVALID_CREDENTIALS: &str = "Invalid email or password.";

pub async fn handle_login(service: &AuthService, request: LoginRequest) -> Result<HttpResponse> {
    let (email, password) = credentials(&request.email, &request.password)?;

    // 未注册与密码错误必须返回完全一致的响应，避免探测哪些邮箱已注册
    let Some(user) = service.storage.get_user_by_email(&email).await? else {
        return Err(CmisError::unauthorized(INVALID_CREDENTIALS));
    };

    if !verify_password(&password, &user.password_hash) {
        return Err(CmisError::unauthorized(INVALID_CREDENTIALS));
    }

    info!("User logged in: {}", user.email);

    let token = service.issue_token(user.id)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AuthResponse {
            user: AuthUser::from(user),
            token,
        },
        "Login successful!",
    )))
}
