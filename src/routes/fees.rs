use actix_web::{HttpResponse, web};

use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::fees::requests::{CreateFeesRequest, UpdateFeesRequest};
use crate::services::FeeService;
use crate::utils::jwt::Jwt;

// HTTP处理程序
pub async fn list_fees(service: web::Data<FeeService>) -> Result<HttpResponse> {
    service.list_fees().await
}

pub async fn get_fees_by_student(
    service: web::Data<FeeService>,
    student_id: web::Path<i64>,
) -> Result<HttpResponse> {
    service.get_fees_by_student(student_id.into_inner()).await
}

pub async fn create_fees(
    service: web::Data<FeeService>,
    fees_data: web::Json<CreateFeesRequest>,
) -> Result<HttpResponse> {
    service.create_fees(fees_data.into_inner()).await
}

pub async fn update_fees(
    service: web::Data<FeeService>,
    student_id: web::Path<i64>,
    update_data: web::Json<UpdateFeesRequest>,
) -> Result<HttpResponse> {
    service
        .update_fees(student_id.into_inner(), update_data.into_inner())
        .await
}

// 配置路由。按学生查询/更新直接挂在 /{student_id} 下
pub fn configure_fees_routes(cfg: &mut web::ServiceConfig, jwt: &Jwt) {
    cfg.service(
        web::scope("/api/v1/fees")
            .wrap(RequireJWT::new(jwt.clone()))
            .service(
                web::resource("")
                    .route(web::get().to(list_fees))
                    .route(web::post().to(create_fees)),
            )
            .service(
                web::resource("/{student_id}")
                    .route(web::get().to(get_fees_by_student))
                    .route(web::put().to(update_fees)),
            ),
    );
}
