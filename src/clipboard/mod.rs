//! Clipboard Module
//!
//! Read-only access to the system clipboard, used as the input fallback when
//! the launcher query is empty.

use crate::error::{CaseError, CaseResult};
use async_trait::async_trait;
use tracing::debug;

pub mod system;

pub use system::SystemClipboard;

/// Trait for clipboard sources
#[async_trait]
pub trait ClipboardReader: Send + Sync + std::fmt::Debug {
    /// Current clipboard text, untrimmed. An empty clipboard reads as `""`.
    async fn read_text(&self) -> CaseResult<String>;

    /// Get the reader name
    fn name(&self) -> &str;
}

/// Clipboard stand-in that is always empty
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

#[async_trait]
impl ClipboardReader for NoClipboard {
    async fn read_text(&self) -> CaseResult<String> {
        debug!("Clipboard fallback disabled");
        Ok(String::new())
    }

    fn name(&self) -> &str {
        "none"
    }
}

/// Pick the clipboard reader for this run
pub fn create_reader(fallback_enabled: bool) -> Box<dyn ClipboardReader> {
    if fallback_enabled {
        Box::new(SystemClipboard::new())
    } else {
        Box::new(NoClipboard)
    }
}

pub(crate) fn join_error(err: tokio::task::JoinError) -> CaseError {
    CaseError::Clipboard(format!("clipboard task failed: {}", err))
}
