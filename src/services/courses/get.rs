use actix_web::HttpResponse;

use super::CourseService;
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;

pub async fn get_course(service: &CourseService, id: i64) -> Result<HttpResponse> {
    let course = service
        .storage
        .get_course_by_id(id)
        .await?
        .ok_or_else(|| CmisError::not_found("Course not found."))?;

    Ok(HttpResponse::Ok().json(ApiResponse::data(course)))
}
