use serde::Serialize;

use crate::models::users::entities::User;

// 注册/登录响应里对外暴露的用户信息
#[derive(Debug, Serialize)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
}

impl From<User> for AuthUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

// 注册/登录响应：用户 + 新签发的令牌
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: AuthUser,
    pub token: String,
}
