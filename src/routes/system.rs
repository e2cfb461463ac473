use actix_web::{HttpRequest, HttpResponse, web};

use crate::models::ApiResponse;
use crate::models::common::health::HealthStatus;

// 健康检查，无需认证
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus::running())
}

// 兜底处理：未匹配的路由统一返回 404
pub async fn route_not_found(request: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error(format!(
        "Route not found: {}",
        request.path()
    )))
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health_check));
}
