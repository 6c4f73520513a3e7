use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::settings::models::{AboutSettings, BillingSettingsForm, ShopSettings};
use crate::modules::settings::services::SettingsService;

/// GET /admin/bill_settings
pub async fn get_billing_settings(
    service: web::Data<Arc<SettingsService>>,
) -> Result<HttpResponse, AppError> {
    let settings = service.fetch_billing_settings().await?;
    Ok(HttpResponse::Ok().json(settings))
}

/// PUT /admin/bill_settings
pub async fn update_billing_settings(
    service: web::Data<Arc<SettingsService>>,
    form: web::Json<BillingSettingsForm>,
) -> Result<HttpResponse, AppError> {
    let settings = service.update_billing_settings(form.into_inner()).await?;
    Ok(HttpResponse::Ok().json(settings))
}

/// GET /admin/site_settings
pub async fn get_shop_settings(service: web::Data<Arc<SettingsService>>) -> HttpResponse {
    HttpResponse::Ok().json(service.shop_settings().await)
}

/// PUT /admin/site_settings
pub async fn update_shop_settings(
    service: web::Data<Arc<SettingsService>>,
    settings: web::Json<ShopSettings>,
) -> Result<HttpResponse, AppError> {
    let settings = service.update_shop_settings(settings.into_inner()).await?;
    Ok(HttpResponse::Ok().json(settings))
}

/// GET /admin/about_us
pub async fn get_about_settings(service: web::Data<Arc<SettingsService>>) -> HttpResponse {
    HttpResponse::Ok().json(service.about_settings().await)
}

/// PUT /admin/about_us
pub async fn update_about_settings(
    service: web::Data<Arc<SettingsService>>,
    settings: web::Json<AboutSettings>,
) -> Result<HttpResponse, AppError> {
    let settings = service.update_about_settings(settings.into_inner()).await?;
    Ok(HttpResponse::Ok().json(settings))
}

/// GET /about - public, never fails
pub async fn public_about(service: web::Data<Arc<SettingsService>>) -> HttpResponse {
    HttpResponse::Ok().json(service.public_about().await)
}

/// Configure admin settings routes (mounted under the admin scope)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/bill_settings")
            .route(web::get().to(get_billing_settings))
            .route(web::put().to(update_billing_settings)),
    )
    .service(
        web::resource("/site_settings")
            .route(web::get().to(get_shop_settings))
            .route(web::put().to(update_shop_settings)),
    )
    .service(
        web::resource("/about_us")
            .route(web::get().to(get_about_settings))
            .route(web::put().to(update_about_settings)),
    );
}

/// Configure the public About Us route
pub fn configure_public(cfg: &mut web::ServiceConfig) {
    cfg.route("/about", web::get().to(public_about));
}
