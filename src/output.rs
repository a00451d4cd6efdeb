//! Launcher Output
//!
//! Result records and the sinks that render them. The JSON sink writes the
//! launcher's script-filter document:
//! `{"items":[{"arg":..,"title":..,"subtitle":..,"text":{"copy":..,"largetype":..}}]}`.

use crate::core::FormattedResult;
use crate::error::CaseResult;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Copy and large-type payloads of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordText {
    pub copy: String,
    pub largetype: String,
}

/// One selectable launcher item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Value inserted at the cursor when the item is actioned
    pub arg: String,
    pub title: String,
    pub subtitle: String,
    pub text: RecordText,
    /// Format label, used by sinks that lay out label and value themselves
    #[serde(skip)]
    pub label: String,
}

impl From<&FormattedResult> for ResultRecord {
    fn from(result: &FormattedResult) -> Self {
        let value = &result.value;
        Self {
            arg: value.clone(),
            title: format!("{}: {}", result.format.label(), value),
            subtitle: format!("Paste {} at cursor position", value),
            text: RecordText {
                copy: value.clone(),
                largetype: value.clone(),
            },
            label: result.format.label().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ScriptFilter<'a> {
    items: &'a [ResultRecord],
}

/// Receives the ordered records of a run
pub trait PresentationSink {
    fn present(&mut self, records: &[ResultRecord]) -> CaseResult<()>;
}

/// Writes the script-filter JSON document
#[derive(Debug)]
pub struct ScriptFilterSink<W: Write> {
    writer: W,
}

impl<W: Write> ScriptFilterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PresentationSink for ScriptFilterSink<W> {
    fn present(&mut self, records: &[ResultRecord]) -> CaseResult<()> {
        if records.is_empty() {
            return Ok(());
        }
        serde_json::to_writer(&mut self.writer, &ScriptFilter { items: records })?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes `label<TAB>value` lines for terminal use
#[derive(Debug)]
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PresentationSink for TextSink<W> {
    fn present(&mut self, records: &[ResultRecord]) -> CaseResult<()> {
        for record in records {
            writeln!(self.writer, "{}\t{}", record.label, record.arg)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Output mode selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Launcher script-filter JSON
    #[default]
    Json,
    /// Tab-separated lines
    Text,
}

/// Build the sink for `mode` over `writer`
pub fn create_sink<'a, W: Write + 'a>(mode: OutputMode, writer: W) -> Box<dyn PresentationSink + 'a> {
    match mode {
        OutputMode::Json => Box::new(ScriptFilterSink::new(writer)),
        OutputMode::Text => Box::new(TextSink::new(writer)),
    }
}
