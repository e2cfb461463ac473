use actix_web::{HttpResponse, web};

use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::students::requests::{
    CreateStudentRequest, StudentSearchParams, UpdateStudentRequest,
};
use crate::services::StudentService;
use crate::utils::jwt::Jwt;

// HTTP处理程序
pub async fn list_students(service: web::Data<StudentService>) -> Result<HttpResponse> {
    service.list_students().await
}

pub async fn search_students(
    service: web::Data<StudentService>,
    query: web::Query<StudentSearchParams>,
) -> Result<HttpResponse> {
    service.search_students(query.into_inner()).await
}

pub async fn get_student(
    service: web::Data<StudentService>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    service.get_student(id.into_inner()).await
}

pub async fn create_student(
    service: web::Data<StudentService>,
    student_data: web::Json<CreateStudentRequest>,
) -> Result<HttpResponse> {
    service.create_student(student_data.into_inner()).await
}

pub async fn update_student(
    service: web::Data<StudentService>,
    id: web::Path<i64>,
    update_data: web::Json<UpdateStudentRequest>,
) -> Result<HttpResponse> {
    service
        .update_student(id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_student(
    service: web::Data<StudentService>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    service.delete_student(id.into_inner()).await
}

// 配置路由。/search 必须注册在 /{id} 之前
pub fn configure_students_routes(cfg: &mut web::ServiceConfig, jwt: &Jwt) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(RequireJWT::new(jwt.clone()))
            .route("/search", web::get().to(search_students))
            .service(
                web::resource("")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_student)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_student))
                    .route(web::put().to(update_student))
                    .route(web::delete().to(delete_student)),
            ),
    );
}
