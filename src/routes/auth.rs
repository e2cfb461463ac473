use actix_web::{HttpRequest, HttpResponse, web};

use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::auth::requests::{LoginRequest, RegisterRequest};
use crate::services::AuthService;
use crate::utils::jwt::Jwt;

pub async fn register(
    service: web::Data<AuthService>,
    user_data: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    service.register(user_data.into_inner()).await
}

pub async fn login(
    service: web::Data<AuthService>,
    user_data: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    service.login(user_data.into_inner()).await
}

pub async fn me(service: web::Data<AuthService>, request: HttpRequest) -> Result<HttpResponse> {
    service.me(&request).await
}

// 配置路由。注册/登录开放，/me 需要令牌
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig, jwt: &Jwt) {
    cfg.service(
        web::scope("/api/v1/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .service(
                web::scope("")
                    .wrap(RequireJWT::new(jwt.clone()))
                    .route("/me", web::get().to(me)),
            ),
    );
}
