use actix_web::HttpResponse;
use tracing::info;

use super::StudentService;
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;

pub async fn delete_student(service: &StudentService, id: i64) -> Result<HttpResponse> {
    // 不级联：该学生的成绩与费用记录保留为孤儿记录
    if !service.storage.delete_student(id).await? {
        return Err(CmisError::not_found("Student not found."));
    }

    info!("Deleted student {}", id);
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student deleted successfully.")))
}
