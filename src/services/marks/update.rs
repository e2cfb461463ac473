use actix_web::HttpResponse;
use tracing::info;

use super::MarkService;
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;
use crate::models::marks::requests::UpdateMarksRequest;
use crate::utils::validate::{reject_blank_fields, validate_marks};

pub async fn update_marks(
    service: &MarkService,
    id: i64,
    request: UpdateMarksRequest,
) -> Result<HttpResponse> {
    reject_blank_fields(&[("subject", request.subject.as_deref())])
        .map_err(CmisError::bad_request)?;

    if let Some(marks) = request.marks {
        validate_marks(marks).map_err(CmisError::bad_request)?;
    }

    let request = UpdateMarksRequest {
        subject: request.subject.map(|s| s.trim().to_string()),
        semester: request.semester.map(|s| s.trim().to_string()),
        ..request
    };

    let record = service
        .storage
        .update_marks(id, request)
        .await?
        .ok_or_else(|| CmisError::not_found("Marks record not found."))?;

    info!("Updated marks record {}", record.id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(record, "Marks updated successfully.")))
}
