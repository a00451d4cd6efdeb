//! System clipboard backed by arboard.

use super::{join_error, ClipboardReader};
use crate::error::CaseResult;
use async_trait::async_trait;
use tracing::debug;

/// Reads the desktop clipboard (X11, Wayland, macOS, Windows)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClipboardReader for SystemClipboard {
    async fn read_text(&self) -> CaseResult<String> {
        // arboard blocks on the display server; keep it off the runtime threads.
        let text = tokio::task::spawn_blocking(read_blocking)
            .await
            .map_err(join_error)??;
        debug!("Read {} bytes from system clipboard", text.len());
        Ok(text)
    }

    fn name(&self) -> &str {
        "system"
    }
}

fn read_blocking() -> CaseResult<String> {
    let mut clipboard = arboard::Clipboard::new()?;
    match clipboard.get_text() {
        Ok(text) => Ok(text),
        // Empty clipboard or non-text contents (e.g. an image)
        Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}
