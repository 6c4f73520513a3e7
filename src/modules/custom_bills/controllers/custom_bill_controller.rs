use std::sync::Arc;

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::custom_bills::models::CustomBillRequest;
use crate::modules::custom_bills::services::CustomBillService;

/// GET /admin/custom-bills
pub async fn list_bills(
    service: web::Data<Arc<CustomBillService>>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list_bills().await?))
}

/// POST /admin/custom-bills
pub async fn add_bill(
    service: web::Data<Arc<CustomBillService>>,
    request: web::Json<CustomBillRequest>,
) -> Result<HttpResponse, AppError> {
    let bill = service.add_bill(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(bill))
}

/// PUT /admin/custom-bills/{uuid}
/// Non-UUID ids never reach the handler.
pub async fn update_bill(
    service: web::Data<Arc<CustomBillService>>,
    path: web::Path<Uuid>,
    request: web::Json<CustomBillRequest>,
) -> Result<HttpResponse, AppError> {
    let bill = service
        .update_bill(path.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(bill))
}

/// Configure custom bill routes (mounted under the admin scope)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/custom-bills")
            .route("", web::get().to(list_bills))
            .route("", web::post().to(add_bill))
            .route("/{id}", web::put().to(update_bill)),
    );
}
