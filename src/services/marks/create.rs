use actix_web::HttpResponse;
use tracing::info;

use super::MarkService;
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;
use crate::models::marks::requests::{CreateMarksRequest, NewMarkRecord};
use crate::utils::validate::{missing_fields_message, trimmed, validate_marks};

pub async fn create_marks(
    service: &MarkService,
    request: CreateMarksRequest,
) -> Result<HttpResponse> {
    // marks 是数值字段，0 分是合法值，只有完全缺失才算未填
    let mut missing = Vec::new();
    if request.student_id.is_none() {
        missing.push("studentId");
    }
    if request
        .subject
        .as_deref()
        .is_none_or(|s| s.trim().is_empty())
    {
        missing.push("subject");
    }
    if request.marks.is_none() {
        missing.push("marks");
    }
    if !missing.is_empty() {
        return Err(CmisError::bad_request(missing_fields_message(&missing)));
    }

    let student_id = request.student_id.unwrap_or_default();
    let marks = request.marks.unwrap_or_default();
    validate_marks(marks).map_err(CmisError::bad_request)?;

    service.require_student(student_id).await?;

    let new_record = NewMarkRecord {
        student_id,
        subject: trimmed(request.subject),
        marks,
        exam_type: request.exam_type.unwrap_or_default(),
        semester: request
            .semester
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    };

    let record = service.storage.create_marks(new_record).await?;

    info!(
        "Marks added for student {}: {} = {}",
        record.student_id, record.subject, record.marks
    );
    Ok(HttpResponse::Created().json(ApiResponse::success(record, "Marks added successfully.")))
}
