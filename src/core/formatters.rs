//! Casing Formatters
//!
//! Each formatter maps a word sequence (as produced by
//! [`tokenize`](super::tokenize)) to one cased string. All of them are total:
//! an empty sequence yields an empty string.

use clap::ValueEnum;
use std::fmt;

/// Uppercase the first character of `word`, leaving the rest untouched.
///
/// Words of zero or one character are uppercased whole.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match (chars.next(), chars.as_str()) {
        (None, _) => String::new(),
        (Some(first), "") => first.to_uppercase().collect(),
        (Some(first), rest) => first.to_uppercase().chain(rest.chars()).collect(),
    }
}

pub fn to_camel_case(words: &[String]) -> String {
    match words.split_first() {
        Some((first, rest)) => format!("{}{}", first, to_pascal_case(rest)),
        None => String::new(),
    }
}

pub fn to_pascal_case(words: &[String]) -> String {
    words.iter().map(|w| capitalize(w)).collect()
}

pub fn to_constant_case(words: &[String]) -> String {
    words
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

pub fn to_dot_case(words: &[String]) -> String {
    words.join(".")
}

pub fn to_kebab_case(words: &[String]) -> String {
    words.join("-")
}

pub fn to_lower_case(words: &[String]) -> String {
    words.concat()
}

pub fn to_no_case(words: &[String]) -> String {
    words.join(" ")
}

pub fn to_path_case(words: &[String]) -> String {
    words.join("/")
}

/// Space-joined words with only the very first character uppercased.
pub fn to_sentence_case(words: &[String]) -> String {
    capitalize(&to_no_case(words))
}

pub fn to_snake_case(words: &[String]) -> String {
    words.join("_")
}

pub fn to_title_case(words: &[String]) -> String {
    words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Supported output casings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CaseFormat {
    Camel,
    Constant,
    Dot,
    Kebab,
    Lower,
    #[value(name = "no")]
    NoCase,
    Pascal,
    Path,
    Sentence,
    Snake,
    Title,
}

/// Presentation order of the launcher results.
///
/// PascalCase appears twice, at positions 6 and 8.
pub const OUTPUT_ORDER: [CaseFormat; 12] = [
    CaseFormat::Camel,
    CaseFormat::Constant,
    CaseFormat::Dot,
    CaseFormat::Kebab,
    CaseFormat::Lower,
    CaseFormat::NoCase,
    CaseFormat::Pascal,
    CaseFormat::Path,
    CaseFormat::Pascal,
    CaseFormat::Sentence,
    CaseFormat::Snake,
    CaseFormat::Title,
];

impl CaseFormat {
    /// Short tag used on the command line
    pub fn tag(self) -> &'static str {
        match self {
            CaseFormat::Camel => "camel",
            CaseFormat::Constant => "constant",
            CaseFormat::Dot => "dot",
            CaseFormat::Kebab => "kebab",
            CaseFormat::Lower => "lower",
            CaseFormat::NoCase => "no",
            CaseFormat::Pascal => "pascal",
            CaseFormat::Path => "path",
            CaseFormat::Sentence => "sentence",
            CaseFormat::Snake => "snake",
            CaseFormat::Title => "title",
        }
    }

    /// Human label, itself written in the casing it names
    pub fn label(self) -> &'static str {
        match self {
            CaseFormat::Camel => "camelCase",
            CaseFormat::Constant => "CONSTANT_CASE",
            CaseFormat::Dot => "dot.case",
            CaseFormat::Kebab => "kebab-case",
            CaseFormat::Lower => "lowercase",
            CaseFormat::NoCase => "no case",
            CaseFormat::Pascal => "PascalCase",
            CaseFormat::Path => "path/case",
            CaseFormat::Sentence => "Sentence case",
            CaseFormat::Snake => "snake_case",
            CaseFormat::Title => "Title case",
        }
    }

    pub fn apply(self, words: &[String]) -> String {
        match self {
            CaseFormat::Camel => to_camel_case(words),
            CaseFormat::Constant => to_constant_case(words),
            CaseFormat::Dot => to_dot_case(words),
            CaseFormat::Kebab => to_kebab_case(words),
            CaseFormat::Lower => to_lower_case(words),
            CaseFormat::NoCase => to_no_case(words),
            CaseFormat::Pascal => to_pascal_case(words),
            CaseFormat::Path => to_path_case(words),
            CaseFormat::Sentence => to_sentence_case(words),
            CaseFormat::Snake => to_snake_case(words),
            CaseFormat::Title => to_title_case(words),
        }
    }
}

impl fmt::Display for CaseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cased variant of a word sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedResult {
    pub format: CaseFormat,
    pub value: String,
}
