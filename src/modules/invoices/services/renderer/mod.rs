//! Two-path invoice renderer.
//!
//! Preview returns the styled markup as-is. Download hands the markup, with
//! the print stylesheet injected, to the [`DocumentEngine`]; only when that
//! engine is unavailable is the invoice drawn manually on a [`PdfCanvas`].
//! Both paths print the totals carried by the [`InvoiceDocument`] and never
//! recompute them.

pub mod engine;
pub mod fallback;
pub mod markup;
pub mod pdf_canvas;

use std::sync::Arc;

use tracing::{info, warn};

pub use engine::{CommandEngine, DisabledEngine, DocumentEngine, EngineError};
pub use fallback::{draw_invoice, Canvas, CanvasError, FontStyle};
pub use markup::{inject_print_styles, render_markup, MarkupMode};
pub use pdf_canvas::PdfCanvas;

use crate::core::error::AppError;
use crate::core::Result;
use crate::modules::invoices::models::InvoiceDocument;

/// Which path produced a PDF
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPath {
    Engine,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub path: RenderPath,
}

#[derive(Clone)]
pub struct InvoiceRenderer {
    engine: Arc<dyn DocumentEngine>,
}

impl InvoiceRenderer {
    pub fn new(engine: Arc<dyn DocumentEngine>) -> Self {
        Self { engine }
    }

    /// Inline HTML for the admin preview page
    pub fn preview_html(&self, doc: &InvoiceDocument) -> Result<String> {
        render_markup(doc, MarkupMode::Preview)
    }

    /// PDF bytes, from the document engine or the drawing fallback
    pub async fn render_pdf(&self, doc: &InvoiceDocument) -> Result<RenderedPdf> {
        let markup = inject_print_styles(&render_markup(doc, MarkupMode::Download)?);

        match self.engine.render_pdf(&markup).await {
            Ok(bytes) => Ok(RenderedPdf {
                bytes,
                path: RenderPath::Engine,
            }),
            Err(EngineError::Unavailable(reason)) => {
                warn!(
                    "Invoice {}: {}, drawing fallback PDF",
                    doc.invoice_number(),
                    reason
                );
                let bytes = render_fallback_pdf(doc)?;
                info!(
                    "Invoice {} drawn by fallback ({} bytes)",
                    doc.invoice_number(),
                    bytes.len()
                );
                Ok(RenderedPdf {
                    bytes,
                    path: RenderPath::Fallback,
                })
            }
            Err(e @ EngineError::Failed(_)) => Err(AppError::render(e.to_string())),
        }
    }
}

/// Draw the invoice on a fresh PDF canvas
pub fn render_fallback_pdf(doc: &InvoiceDocument) -> Result<Vec<u8>> {
    let mut canvas = PdfCanvas::new(&format!("Invoice {}", doc.invoice_number()))
        .map_err(|e| AppError::render(e.to_string()))?;
    draw_invoice(&mut canvas, doc);
    canvas.finish().map_err(|e| AppError::render(e.to_string()))
}
