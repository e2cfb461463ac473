use actix_web::HttpResponse;
use tracing::info;

use super::CourseService;
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;
use crate::models::courses::requests::UpdateCourseRequest;
use crate::utils::validate::reject_blank_fields;

pub async fn update_course(
    service: &CourseService,
    id: i64,
    request: UpdateCourseRequest,
) -> Result<HttpResponse> {
    reject_blank_fields(&[
        ("courseName", request.course_name.as_deref()),
        ("courseCode", request.course_code.as_deref()),
        ("department", request.department.as_deref()),
        ("duration", request.duration.as_deref()),
    ])
    .map_err(CmisError::bad_request)?;

    let update = UpdateCourseRequest {
        course_name: request.course_name.map(|s| s.trim().to_string()),
        // 更新时同样统一大写
        course_code: request.course_code.map(|s| s.trim().to_uppercase()),
        department: request.department.map(|s| s.trim().to_string()),
        duration: request.duration.map(|s| s.trim().to_string()),
        description: request.description.map(|s| s.trim().to_string()),
    };

    // 改代码撞上已有课程时由唯一约束兜底，归类为 Conflict
    let course = service
        .storage
        .update_course(id, update)
        .await?
        .ok_or_else(|| CmisError::not_found("Course not found."))?;

    info!("Updated course: {}", course.course_name);
    Ok(HttpResponse::Ok().json(ApiResponse::success(course, "Course updated successfully.")))
}
