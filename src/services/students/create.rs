use actix_web::HttpResponse;
use chrono::Datelike;
use tracing::info;

use super::StudentService;
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;
use crate::models::students::requests::{CreateStudentRequest, NewStudent};
use crate::utils::validate::{require_fields, trimmed, validate_email};

pub async fn create_student(
    service: &StudentService,
    request: CreateStudentRequest,
) -> Result<HttpResponse> {
    require_fields(&[
        ("name", request.name.as_deref()),
        ("email", request.email.as_deref()),
        ("department", request.department.as_deref()),
        ("course", request.course.as_deref()),
    ])
    .map_err(CmisError::bad_request)?;

    let email = trimmed(request.email).to_lowercase();
    validate_email(&email).map_err(CmisError::bad_request)?;

    // 邮箱唯一性预检查；并发竞争由唯一约束兜底
    if service.storage.get_student_by_email(&email).await?.is_some() {
        return Err(CmisError::conflict(
            "A student with this email already exists.",
        ));
    }

    let new_student = NewStudent {
        name: trimmed(request.name),
        email,
        department: trimmed(request.department),
        course: trimmed(request.course),
        phone: request
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty()),
        // 入学年份缺省为当前年份
        enrollment_year: request
            .enrollment_year
            .unwrap_or_else(|| chrono::Utc::now().year()),
    };

    let student = service.storage.create_student(new_student).await?;

    info!("New student added: {} ({})", student.name, student.email);
    Ok(HttpResponse::Created().json(ApiResponse::success(student, "Student added successfully.")))
}
