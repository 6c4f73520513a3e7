use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::users::models::UserProfileUpdate;
use crate::modules::users::services::UserService;

/// GET /admin/users
pub async fn list_users(service: web::Data<Arc<UserService>>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list_users().await?))
}

/// GET /admin/users/{id}
pub async fn get_user(
    service: web::Data<Arc<UserService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_user(&path.into_inner()).await?))
}

/// PUT /admin/users/{id}
pub async fn update_user(
    service: web::Data<Arc<UserService>>,
    path: web::Path<String>,
    request: web::Json<UserProfileUpdate>,
) -> Result<HttpResponse, AppError> {
    let profile = service
        .update_user(&path.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// DELETE /admin/users/{id}
pub async fn delete_user(
    service: web::Data<Arc<UserService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configure user routes (mounted under the admin scope)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(list_users))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}
