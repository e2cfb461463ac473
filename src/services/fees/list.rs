use actix_web::HttpResponse;
use tracing::info;

use super::FeeService;
use crate::errors::Result;
use crate::models::ApiResponse;

pub async fn list_fees(service: &FeeService) -> Result<HttpResponse> {
    let fees = service.storage.list_fees().await?;

    info!("Fetched {} fee records", fees.len());
    Ok(HttpResponse::Ok().json(ApiResponse::list(fees)))
}
