use actix_web::HttpResponse;
use tracing::info;

use super::CourseService;
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;
use crate::models::courses::requests::{CreateCourseRequest, NewCourse};
use crate::utils::validate::{require_fields, trimmed};

pub async fn create_course(
    service: &CourseService,
    request: CreateCourseRequest,
) -> Result<HttpResponse> {
    require_fields(&[
        ("courseName", request.course_name.as_deref()),
        ("courseCode", request.course_code.as_deref()),
        ("department", request.department.as_deref()),
        ("duration", request.duration.as_deref()),
    ])
    .map_err(CmisError::bad_request)?;

    // 课程代码统一大写存储
    let course_code = trimmed(request.course_code).to_uppercase();

    // 代码唯一性预检查；并发竞争由唯一约束兜底
    if service
        .storage
        .get_course_by_code(&course_code)
        .await?
        .is_some()
    {
        return Err(CmisError::conflict(
            "A course with this course code already exists.",
        ));
    }

    let new_course = NewCourse {
        course_name: trimmed(request.course_name),
        course_code,
        department: trimmed(request.department),
        duration: trimmed(request.duration),
        description: request
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
    };

    let course = service.storage.create_course(new_course).await?;

    info!(
        "New course added: {} ({})",
        course.course_name, course.course_code
    );
    Ok(HttpResponse::Created().json(ApiResponse::success(course, "Course added successfully.")))
}
