use actix_web::HttpResponse;

use super::StudentService;
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;

pub async fn get_student(service: &StudentService, id: i64) -> Result<HttpResponse> {
    let student = service
        .storage
        .get_student_by_id(id)
        .await?
        .ok_or_else(|| CmisError::not_found("Student not found."))?;

    Ok(HttpResponse::Ok().json(ApiResponse::data(student)))
}
