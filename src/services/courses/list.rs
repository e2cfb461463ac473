use actix_web::HttpResponse;
use tracing::info;

use super::CourseService;
use crate::errors::Result;
use crate::models::ApiResponse;

pub async fn list_courses(service: &CourseService) -> Result<HttpResponse> {
    let courses = service.storage.list_courses().await?;

    info!("Fetched {} courses", courses.len());
    Ok(HttpResponse::Ok().json(ApiResponse::list(courses)))
}
