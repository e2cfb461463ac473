use actix_web::HttpResponse;
use tracing::info;

use super::FeeService;
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;
use crate::models::fees::requests::UpdateFeesRequest;
use crate::utils::validate::validate_non_negative;

/// 按学生更新费用（upsert）：记录不存在时直接创建，两条路径都盖章 lastPaymentDate。
pub async fn update_fees(
    service: &FeeService,
    student_id: i64,
    request: UpdateFeesRequest,
) -> Result<HttpResponse> {
    if let Some(fees_paid) = request.fees_paid {
        validate_non_negative(fees_paid, "Fees paid cannot be negative")
            .map_err(CmisError::bad_request)?;
    }
    if let Some(fees_pending) = request.fees_pending {
        validate_non_negative(fees_pending, "Fees pending cannot be negative")
            .map_err(CmisError::bad_request)?;
    }

    service.require_student(student_id).await?;

    let record = service.storage.upsert_fees(student_id, request).await?;

    info!("Fee record updated for student {}", record.student_id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        record,
        "Fee record updated successfully.",
    )))
}
