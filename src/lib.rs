//! caseshift Library
//!
//! Turns a launcher query (or the clipboard) into common identifier casings.

pub mod clipboard;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod workflow;

pub use error::{CaseError, CaseResult};
pub use workflow::run;
