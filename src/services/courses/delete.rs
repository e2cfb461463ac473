use actix_web::HttpResponse;
use tracing::info;

use super::CourseService;
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;

pub async fn delete_course(service: &CourseService, id: i64) -> Result<HttpResponse> {
    if !service.storage.delete_course(id).await? {
        return Err(CmisError::not_found("Course not found."));
    }

    info!("Deleted course {}", id);
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Course deleted successfully.")))
}
