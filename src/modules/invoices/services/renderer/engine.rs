// Styled document engine
//
// Converts invoice markup to PDF bytes through an external HTML-to-PDF
// command. An engine that cannot be started is "unavailable" and triggers the
// drawing fallback; one that starts and then fails is a hard error.

use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("document engine unavailable: {0}")]
    Unavailable(String),

    #[error("document engine failed: {0}")]
    Failed(String),
}

/// Markup to PDF conversion
#[async_trait]
pub trait DocumentEngine: Send + Sync {
    async fn render_pdf(&self, markup: &str) -> Result<Vec<u8>, EngineError>;
}

/// Runs an external converter with markup on stdin and reads PDF from stdout
#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
}

impl CommandEngine {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `weasyprint - -`
    pub fn weasyprint() -> Self {
        Self::new("weasyprint", vec!["-".to_string(), "-".to_string()])
    }
}

#[async_trait]
impl DocumentEngine for CommandEngine {
    async fn render_pdf(&self, markup: &str) -> Result<Vec<u8>, EngineError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| EngineError::Unavailable(format!("{}: {}", self.program, e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| EngineError::Failed("stdin not captured".to_string()))?;
        let input = markup.as_bytes().to_vec();

        // Feed stdin while collecting output so a chatty converter cannot block
        let feed = async move {
            stdin.write_all(&input).await?;
            stdin.shutdown().await?;
            Ok::<(), std::io::Error>(())
        };
        let (fed, output) = tokio::join!(feed, child.wait_with_output());

        let output = output.map_err(|e| EngineError::Failed(e.to_string()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EngineError::Failed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        if let Err(e) = fed {
            return Err(EngineError::Failed(format!("writing markup: {}", e)));
        }
        if output.stdout.is_empty() {
            return Err(EngineError::Failed(format!(
                "{} produced no output",
                self.program
            )));
        }

        Ok(output.stdout)
    }
}

/// Engine switched off in configuration; always unavailable
#[derive(Debug, Clone, Default)]
pub struct DisabledEngine;

#[async_trait]
impl DocumentEngine for DisabledEngine {
    async fn render_pdf(&self, _markup: &str) -> Result<Vec<u8>, EngineError> {
        Err(EngineError::Unavailable("disabled by configuration".to_string()))
    }
}
