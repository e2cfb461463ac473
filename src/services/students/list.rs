use actix_web::HttpResponse;
use tracing::info;

use super::StudentService;
use crate::errors::Result;
use crate::models::ApiResponse;

pub async fn list_students(service: &StudentService) -> Result<HttpResponse> {
    let students = service.storage.list_students().await?;

    info!("Fetched {} students", students.len());
    Ok(HttpResponse::Ok().json(ApiResponse::list(students)))
}
