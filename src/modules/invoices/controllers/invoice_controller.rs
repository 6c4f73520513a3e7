use std::sync::Arc;

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use tracing::error;

use crate::core::error::AppError;
use crate::modules::invoices::services::InvoiceService;

const NOT_FOUND_TEXT: &str = "Order not found";

/// Invoice endpoints answer in plain text on failure, not the JSON envelope
fn failure_response(err: &AppError, context: &str) -> HttpResponse {
    if err.is_not_found() {
        return HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body(NOT_FOUND_TEXT);
    }

    error!("{}: {}", context, err);
    HttpResponse::InternalServerError()
        .content_type("text/plain; charset=utf-8")
        .body(format!("{}: {}", context, err))
}

/// HTML preview before download
/// GET /admin/order/{id}/bill
pub async fn view_bill(
    service: web::Data<Arc<InvoiceService>>,
    path: web::Path<String>,
) -> HttpResponse {
    match service.preview(&path.into_inner()).await {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => failure_response(&e, "Error displaying bill"),
    }
}

/// PDF invoice as an attachment
/// GET /admin/order/{id}/pdf
pub async fn download_pdf(
    service: web::Data<Arc<InvoiceService>>,
    path: web::Path<String>,
) -> HttpResponse {
    match service.download(&path.into_inner()).await {
        Ok(pdf) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", pdf.filename),
            ))
            .body(pdf.bytes),
        Err(e) => failure_response(&e, "Error generating invoice"),
    }
}

/// Configure invoice routes (mounted under the admin scope)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/order")
            .route("/{id}/bill", web::get().to(view_bill))
            .route("/{id}/pdf", web::get().to(download_pdf)),
    );
}
