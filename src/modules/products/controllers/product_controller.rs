use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::products::models::ProductRequest;
use crate::modules::products::services::ProductService;

/// GET /admin/products
pub async fn list_products(
    service: web::Data<Arc<ProductService>>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list_products().await?))
}

/// POST /admin/products
pub async fn create_product(
    service: web::Data<Arc<ProductService>>,
    request: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    let product = service.create_product(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(product))
}

/// GET /admin/products/{id}
pub async fn get_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_product(&path.into_inner()).await?))
}

/// PUT /admin/products/{id}
pub async fn update_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<String>,
    request: web::Json<ProductRequest>,
) -> Result<HttpResponse, AppError> {
    let product = service
        .update_product(&path.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(product))
}

/// DELETE /admin/products/{id}
pub async fn delete_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_product(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configure product routes (mounted under the admin scope)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(list_products))
            .route("", web::post().to(create_product))
            .route("/{id}", web::get().to(get_product))
            .route("/{id}", web::put().to(update_product))
            .route("/{id}", web::delete().to(delete_product)),
    );
}
