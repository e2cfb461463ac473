use actix_web::HttpResponse;
use tracing::info;

use super::StudentService;
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;
use crate::models::students::requests::UpdateStudentRequest;
use crate::utils::validate::{reject_blank_fields, validate_email};

pub async fn update_student(
    service: &StudentService,
    id: i64,
    request: UpdateStudentRequest,
) -> Result<HttpResponse> {
    // 没提供的字段保持原值；重新提供的必填字段不允许是空白
    reject_blank_fields(&[
        ("name", request.name.as_deref()),
        ("email", request.email.as_deref()),
        ("department", request.department.as_deref()),
        ("course", request.course.as_deref()),
    ])
    .map_err(CmisError::bad_request)?;

    let update = UpdateStudentRequest {
        name: request.name.map(|s| s.trim().to_string()),
        email: request.email.map(|s| s.trim().to_lowercase()),
        department: request.department.map(|s| s.trim().to_string()),
        course: request.course.map(|s| s.trim().to_string()),
        phone: request.phone.map(|s| s.trim().to_string()),
        enrollment_year: request.enrollment_year,
    };

    if let Some(ref email) = update.email {
        validate_email(email).map_err(CmisError::bad_request)?;
    }

    // 改邮箱撞上已有学生时由唯一约束兜底，归类为 Conflict
    let student = service
        .storage
        .update_student(id, update)
        .await?
        .ok_or_else(|| CmisError::not_found("Student not found."))?;

    info!("Updated student: {}", student.name);
    Ok(HttpResponse::Ok().json(ApiResponse::success(student, "Student updated successfully.")))
}
