use crate::core::CaseFormat;
use crate::output::OutputMode;
use crate::workflow::select_formats;
use clap::Parser;

/// Runtime settings, resolved once from the command line and environment.
///
/// Launchers should pass the query after `--` (`caseshift [FLAGS] -- {query}`)
/// so queries such as `-v` or `--help` are never taken for flags. Without the
/// separator, hyphenated text that is not a known flag is still read as query.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Launcher query; words are joined with single spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub query: Vec<String>,

    /// Output document format
    #[arg(short, long, value_enum, env = "CASESHIFT_OUTPUT", default_value = "json")]
    pub output: OutputMode,

    /// Only emit these formats (repeatable), keeping the usual order
    #[arg(short, long = "format", value_enum)]
    pub formats: Vec<CaseFormat>,

    /// Do not fall back to the clipboard when the query is empty
    #[arg(long)]
    pub no_clipboard: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// The raw (untrimmed) query text
    pub fn query(&self) -> String {
        self.query.join(" ")
    }

    pub fn clipboard_fallback(&self) -> bool {
        !self.no_clipboard
    }

    /// Formats to emit, in presentation order
    pub fn selected_formats(&self) -> Vec<CaseFormat> {
        select_formats(&self.formats)
    }

    /// Default tracing filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
