use actix_web::HttpResponse;
use tracing::info;

use super::FeeService;
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;
use crate::models::fees::requests::{CreateFeesRequest, NewFeeRecord};
use crate::utils::validate::{missing_fields_message, validate_non_negative};

pub async fn create_fees(service: &FeeService, request: CreateFeesRequest) -> Result<HttpResponse> {
    let Some(student_id) = request.student_id else {
        return Err(CmisError::bad_request(missing_fields_message(&[
            "studentId",
        ])));
    };

    let fees_paid = request.fees_paid.unwrap_or(0.0);
    let fees_pending = request.fees_pending.unwrap_or(0.0);
    validate_non_negative(fees_paid, "Fees paid cannot be negative")
        .map_err(CmisError::bad_request)?;
    validate_non_negative(fees_pending, "Fees pending cannot be negative")
        .map_err(CmisError::bad_request)?;

    service.require_student(student_id).await?;

    // 每个学生至多一条费用记录；并发竞争由唯一约束兜底
    if service
        .storage
        .get_fees_by_student(student_id)
        .await?
        .is_some()
    {
        return Err(CmisError::conflict(
            "Fee record already exists for this student. Use update instead.",
        ));
    }

    let new_record = NewFeeRecord {
        student_id,
        fees_paid,
        fees_pending,
        total_fees: request.total_fees.unwrap_or(0.0),
    };

    let record = service.storage.create_fees(new_record).await?;

    info!("Fee record created for student {}", record.student_id);
    Ok(HttpResponse::Created().json(ApiResponse::success(
        record,
        "Fee record created successfully.",
    )))
}
