use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::dashboard::services::DashboardService;

/// GET /admin/dashboard
pub async fn dashboard(
    service: web::Data<Arc<DashboardService>>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.stats().await?))
}

/// Configure dashboard routes (mounted under the admin scope)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(dashboard));
}
