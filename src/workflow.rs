//! Conversion Workflow
//!
//! Resolves the input (query first, clipboard second), tokenizes it once and
//! turns every configured format into a launcher record.

use crate::clipboard::ClipboardReader;
use crate::core::{tokenize, CaseFormat, FormattedResult, OUTPUT_ORDER};
use crate::error::CaseResult;
use crate::output::ResultRecord;
use tracing::{debug, info};

/// Trimmed query, or the trimmed clipboard text when the query is blank.
///
/// The clipboard is only touched when the query is blank.
pub async fn resolve_input(query: &str, clipboard: &dyn ClipboardReader) -> CaseResult<String> {
    let query = query.trim();
    if !query.is_empty() {
        debug!("Using launcher query ({} bytes)", query.len());
        return Ok(query.to_string());
    }

    debug!("Query empty, falling back to '{}' clipboard", clipboard.name());
    let text = clipboard.read_text().await?;
    let text = text.trim();
    if text.is_empty() {
        info!("Query and clipboard are both empty");
    }
    Ok(text.to_string())
}

/// Apply `formats` in order to a single word sequence of `input`
pub fn convert(input: &str, formats: &[CaseFormat]) -> Vec<FormattedResult> {
    let words = tokenize(input);
    debug!("Tokenized into {} words: {:?}", words.len(), words);

    formats
        .iter()
        .map(|&format| FormattedResult {
            format,
            value: format.apply(&words),
        })
        .collect()
}

/// Entries of [`OUTPUT_ORDER`] whose format is in `selected`.
///
/// An empty selection means every format.
pub fn select_formats(selected: &[CaseFormat]) -> Vec<CaseFormat> {
    OUTPUT_ORDER
        .iter()
        .copied()
        .filter(|format| selected.is_empty() || selected.contains(format))
        .collect()
}

/// Run one conversion over all formats
pub async fn run(query: &str, clipboard: &dyn ClipboardReader) -> CaseResult<Vec<ResultRecord>> {
    run_with_formats(query, clipboard, &OUTPUT_ORDER).await
}

/// Run one conversion over `formats`, preserving their order
pub async fn run_with_formats(
    query: &str,
    clipboard: &dyn ClipboardReader,
    formats: &[CaseFormat],
) -> CaseResult<Vec<ResultRecord>> {
    let input = resolve_input(query, clipboard).await?;
    if input.is_empty() {
        return Ok(Vec::new());
    }

    Ok(convert(&input, formats)
        .iter()
        .map(ResultRecord::from)
        .collect())
}
