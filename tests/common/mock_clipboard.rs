//! Mock Clipboard for Testing
//!
//! Serves fixed text and records how often it was read.

use async_trait::async_trait;
use caseshift::clipboard::ClipboardReader;
use caseshift::error::{CaseError, CaseResult};
use std::sync::{Arc, Mutex};

/// Mock clipboard with configurable contents
#[derive(Debug)]
pub struct MockClipboard {
    /// Text returned by every read
    pub contents: Arc<Mutex<String>>,
    /// Number of reads performed
    pub reads: Arc<Mutex<usize>>,
    /// Simulate an inaccessible clipboard
    pub should_fail: Arc<Mutex<bool>>,
}

impl MockClipboard {
    pub fn new(contents: &str) -> Self {
        Self {
            contents: Arc::new(Mutex::new(contents.to_string())),
            reads: Arc::new(Mutex::new(0)),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn failing() -> Self {
        let mock = Self::new("");
        *mock.should_fail.lock().unwrap() = true;
        mock
    }

    pub fn read_count(&self) -> usize {
        *self.reads.lock().unwrap()
    }
}

impl Default for MockClipboard {
    fn default() -> Self {
        Self::new("")
    }
}

#[async_trait]
impl ClipboardReader for MockClipboard {
    async fn read_text(&self) -> CaseResult<String> {
        *self.reads.lock().unwrap() += 1;
        if *self.should_fail.lock().unwrap() {
            return Err(CaseError::Clipboard("Mock clipboard failure".to_string()));
        }
        Ok(self.contents.lock().unwrap().clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
