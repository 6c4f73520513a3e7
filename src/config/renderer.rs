use std::sync::Arc;

use serde::Deserialize;

use crate::core::{AppError, Result};
use crate::modules::invoices::services::renderer::{CommandEngine, DisabledEngine, DocumentEngine};

/// How invoice PDFs are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// External HTML-to-PDF command; falls back to drawing when it cannot start
    Command,
    /// Always draw manually
    Disabled,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RendererConfig {
    pub engine: EngineKind,
    pub bin: String,
    pub args: Vec<String>,
}

impl RendererConfig {
    pub fn from_vars(get: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let engine = match get("INVOICE_ENGINE").as_deref().map(str::trim) {
            None | Some("") | Some("command") => EngineKind::Command,
            Some("disabled") => EngineKind::Disabled,
            Some(other) => {
                return Err(AppError::Configuration(format!(
                    "Invalid INVOICE_ENGINE: {} (expected command or disabled)",
                    other
                )))
            }
        };

        let args = get("INVOICE_ENGINE_ARGS")
            .unwrap_or_else(|| "- -".to_string())
            .split_whitespace()
            .map(str::to_string)
            .collect();

        Ok(Self {
            engine,
            bin: get("INVOICE_ENGINE_BIN").unwrap_or_else(|| "weasyprint".to_string()),
            args,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.engine == EngineKind::Command && self.bin.trim().is_empty() {
            return Err(AppError::Configuration(
                "INVOICE_ENGINE_BIN cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn build_engine(&self) -> Arc<dyn DocumentEngine> {
        match self.engine {
            EngineKind::Command => Arc::new(CommandEngine::new(self.bin.clone(), self.args.clone())),
            EngineKind::Disabled => Arc::new(DisabledEngine),
        }
    }
}
