use actix_web::{HttpResponse, web};

use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::marks::requests::{CreateMarksRequest, UpdateMarksRequest};
use crate::services::MarkService;
use crate::utils::jwt::Jwt;

// HTTP处理程序
pub async fn list_marks(service: web::Data<MarkService>) -> Result<HttpResponse> {
    service.list_marks().await
}

pub async fn list_marks_by_student(
    service: web::Data<MarkService>,
    student_id: web::Path<i64>,
) -> Result<HttpResponse> {
    service.list_marks_by_student(student_id.into_inner()).await
}

pub async fn create_marks(
    service: web::Data<MarkService>,
    marks_data: web::Json<CreateMarksRequest>,
) -> Result<HttpResponse> {
    service.create_marks(marks_data.into_inner()).await
}

pub async fn update_marks(
    service: web::Data<MarkService>,
    id: web::Path<i64>,
    update_data: web::Json<UpdateMarksRequest>,
) -> Result<HttpResponse> {
    service
        .update_marks(id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_marks(
    service: web::Data<MarkService>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    service.delete_marks(id.into_inner()).await
}

// 配置路由。/student/{student_id} 必须注册在 /{id} 之前
pub fn configure_marks_routes(cfg: &mut web::ServiceConfig, jwt: &Jwt) {
    cfg.service(
        web::scope("/api/v1/marks")
            .wrap(RequireJWT::new(jwt.clone()))
            .route("/student/{student_id}", web::get().to(list_marks_by_student))
            .service(
                web::resource("")
                    .route(web::get().to(list_marks))
                    .route(web::post().to(create_marks)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_marks))
                    .route(web::delete().to(delete_marks)),
            ),
    );
}
