use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::money::format_amount;
use crate::modules::orders::services::{OrderService, UpdateOrderDetails};

/// List orders, newest first
/// GET /admin/orders
pub async fn list_orders(service: web::Data<Arc<OrderService>>) -> Result<HttpResponse, AppError> {
    let orders = service.list_orders().await?;
    Ok(HttpResponse::Ok().json(orders))
}

/// Order detail with normalized line items
/// GET /admin/orders/{id}
pub async fn get_order(
    service: web::Data<Arc<OrderService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let detail = service.get_detail(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// Update status and item quantities/discounts, recomputing the total
/// POST /admin/orders/{id}/update_details
pub async fn update_order_details(
    service: web::Data<Arc<OrderService>>,
    path: web::Path<String>,
    request: web::Json<UpdateOrderDetails>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let total = service
        .update_details(&order_id, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "id": order_id,
        "total": format_amount(total),
    })))
}

/// Configure order routes (mounted under the admin scope)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::get().to(list_orders))
            .route("/{id}", web::get().to(get_order))
            .route("/{id}/update_details", web::post().to(update_order_details)),
    );
}
