use actix_web::HttpResponse;

use super::FeeService;
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;

pub async fn get_fees_by_student(service: &FeeService, student_id: i64) -> Result<HttpResponse> {
    service.require_student(student_id).await?;

    let record = service
        .storage
        .get_fees_by_student(student_id)
        .await?
        .ok_or_else(|| CmisError::not_found("No fee record found for this student."))?;

    Ok(HttpResponse::Ok().json(ApiResponse::data(record)))
}
