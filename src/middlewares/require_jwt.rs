/*!
 * JWT 认证中间件
 *
 * 除注册/登录外的所有 `/api/v1` 路由都挂这个中间件：校验 Bearer 令牌、
 * 解析出用户并放进请求扩展，供 handler 读取。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * let jwt = Jwt::new(&config.jwt);
 * App::new().service(
 *     web::scope("/api/v1/students")
 *         .wrap(RequireJWT::new(jwt.clone()))
 *         .route("", web::get().to(list_students)),
 * )
 * ```
 *
 * handler 里取当前用户：
 *
 * ```rust,ignore
 * if let Some(user) = RequireJWT::extract_current_user(&req) {
 *     // user.id / user.email，密码哈希不进扩展
 * }
 * ```
 *
 * ## 认证流程
 *
 * 1. `Authorization: Bearer <token>` 缺失 → 401（提示先登录）
 * 2. 令牌过期与令牌非法分别返回不同的 401 文案
 * 3. 令牌里的用户在凭证存储中不存在 → 401
 * 4. 校验通过后把 `CurrentUser` 写入请求扩展，继续处理
 *
 * 签名密钥由启动时构造的 [`Jwt`] 提供，中间件本身不读全局配置。
 */

use std::{rc::Rc, sync::Arc};

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, info};

use crate::models::ApiResponse;
use crate::models::users::entities::CurrentUser;
use crate::storage::Storage;
use crate::utils::jwt::{Jwt, TokenError};

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

const NO_TOKEN_MESSAGE: &str = "No token provided. Please login to access this resource.";
const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please login again.";
const INVALID_TOKEN_MESSAGE: &str = "Invalid token. Please login again.";
const USER_NOT_FOUND_MESSAGE: &str = "User not found. Please login again.";
const NOT_AUTHORIZED_MESSAGE: &str = "Not authorized. Please login.";

#[derive(Clone)]
pub struct RequireJWT {
    jwt: Jwt,
}

impl RequireJWT {
    pub fn new(jwt: Jwt) -> Self {
        Self { jwt }
    }
}

// 辅助函数：创建错误响应
fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(ApiResponse::error(message)),
    }
}

// 辅助函数：提取并验证 Bearer 令牌，解析出当前用户
async fn authenticate(jwt: &Jwt, req: &ServiceRequest) -> Result<CurrentUser, &'static str> {
    let Some(token) = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
    else {
        return Err(NO_TOKEN_MESSAGE);
    };

    let claims = jwt.verify(token).map_err(|err| match err {
        TokenError::Expired => SESSION_EXPIRED_MESSAGE,
        TokenError::Malformed => INVALID_TOKEN_MESSAGE,
    })?;

    // sub 必须是数据库用户 ID
    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| INVALID_TOKEN_MESSAGE)?;

    let Some(storage) = req.app_data::<web::Data<Arc<dyn Storage>>>() else {
        return Err(NOT_AUTHORIZED_MESSAGE);
    };

    let user = storage
        .get_user_by_id(user_id)
        .await
        .map_err(|err| {
            info!("Failed to resolve user {} during auth: {}", user_id, err);
            NOT_AUTHORIZED_MESSAGE
        })?
        .ok_or(USER_NOT_FOUND_MESSAGE)?;

    Ok(CurrentUser::from(user))
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
            jwt: self.jwt.clone(),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
    jwt: Jwt,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let jwt = self.jwt.clone();
        Box::pin(async move {
            // CORS 预检请求直接放行
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            match authenticate(&jwt, &req).await {
                Ok(user) => {
                    debug!("JWT authentication successful for ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(message) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        message
                    );
                    Ok(req.into_response(
                        create_error_response(StatusCode::UNAUTHORIZED, message)
                            .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取用户信息
impl RequireJWT {
    /// 从请求扩展中提取当前用户，在挂了本中间件的 handler 里调用
    pub fn extract_current_user(req: &actix_web::HttpRequest) -> Option<CurrentUser> {
        req.extensions().get::<CurrentUser>().cloned()
    }
}
