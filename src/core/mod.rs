//! Core conversion modules
//!
//! Word tokenization and the casing formatters built on top of it.

pub mod formatters;
pub mod tokenizer;

pub use formatters::{capitalize, CaseFormat, FormattedResult, OUTPUT_ORDER};
pub use tokenizer::tokenize;
