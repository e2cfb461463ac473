use actix_web::HttpResponse;
use tracing::info;

use super::MarkService;
use crate::errors::{CmisError, Result};
use crate::models::ApiResponse;

pub async fn delete_marks(service: &MarkService, id: i64) -> Result<HttpResponse> {
    if !service.storage.delete_marks(id).await? {
        return Err(CmisError::not_found("Marks record not found."));
    }

    info!("Deleted marks record {}", id);
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Marks deleted successfully.")))
}
