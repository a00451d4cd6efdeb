//! Word Tokenization
//!
//! Splits mixed-convention input (camelCase, PascalCase, snake_case,
//! kebab-case, free text) into a canonical sequence of lowercase words.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A lowercase letter directly followed by an uppercase one.
    static ref CASE_BOUNDARY: Regex = Regex::new(r"([a-z])([A-Z])").expect("valid regex");
}

/// Split `input` into ordered, non-empty, lowercase words.
///
/// Only the lowercase→uppercase boundary is detected, so acronym runs such
/// as `HTTPServer` stay a single word. Any run of characters that are not
/// ASCII letters or digits acts as one delimiter.
pub fn tokenize(input: &str) -> Vec<String> {
    let separated = CASE_BOUNDARY.replace_all(input, "$1 $2");
    let lowered = separated.to_lowercase();

    lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
