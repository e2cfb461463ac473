use actix_web::HttpResponse;
use tracing::info;

use super::MarkService;
use crate::errors::Result;
use crate::models::ApiResponse;

pub async fn list_marks(service: &MarkService) -> Result<HttpResponse> {
    let marks = service.storage.list_marks().await?;

    info!("Fetched {} marks records", marks.len());
    Ok(HttpResponse::Ok().json(ApiResponse::list(marks)))
}
