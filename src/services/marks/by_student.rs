use actix_web::HttpResponse;

use super::MarkService;
use crate::errors::Result;
use crate::models::ApiResponse;

/// 按学生查询成绩。学生必须存在，但成绩可以为空（空列表照常返回 200）。
pub async fn list_marks_by_student(service: &MarkService, student_id: i64) -> Result<HttpResponse> {
    service.require_student(student_id).await?;

    let marks = service.storage.list_marks_by_student(student_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::list(marks)))
}
