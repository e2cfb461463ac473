use actix_web::HttpResponse;
use tracing::info;

use super::StudentService;
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;
use crate::models::students::requests::StudentSearchParams;

pub async fn search_students(
    service: &StudentService,
    params: StudentSearchParams,
) -> Result<HttpResponse> {
    let keyword = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CmisError::bad_request("Please provide a search query."))?;

    let students = service.storage.search_students(keyword).await?;

    info!("Search \"{}\" returned {} results", keyword, students.len());
    Ok(HttpResponse::Ok().json(ApiResponse::list(students)))
}
