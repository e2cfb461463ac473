use actix_web::{HttpResponse, web};

use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::courses::requests::{CreateCourseRequest, UpdateCourseRequest};
use crate::services::CourseService;
use crate::utils::jwt::Jwt;

// HTTP处理程序
pub async fn list_courses(service: web::Data<CourseService>) -> Result<HttpResponse> {
    service.list_courses().await
}

pub async fn get_course(
    service: web::Data<CourseService>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    service.get_course(id.into_inner()).await
}

pub async fn create_course(
    service: web::Data<CourseService>,
    course_data: web::Json<CreateCourseRequest>,
) -> Result<HttpResponse> {
    service.create_course(course_data.into_inner()).await
}

pub async fn update_course(
    service: web::Data<CourseService>,
    id: web::Path<i64>,
    update_data: web::Json<UpdateCourseRequest>,
) -> Result<HttpResponse> {
    service
        .update_course(id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_course(
    service: web::Data<CourseService>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    service.delete_course(id.into_inner()).await
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig, jwt: &Jwt) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(RequireJWT::new(jwt.clone()))
            .service(
                web::resource("")
                    .route(web::get().to(list_courses))
                    .route(web::post().to(create_course)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_course))
                    .route(web::put().to(update_course))
                    .route(web::delete().to(delete_course)),
            ),
    );
}
