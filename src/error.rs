// src/error.rs
//! Error taxonomy.
//!
//! `ExtractError` is what the parsing side raises once a page is in hand: either
//! a fragment the anchor path expects is gone (site layout changed), or a glyph
//! or token falls outside the fixed tables (unrecognized locale content).
//! None of these are recovered from; a run that hits one aborts.
//!
//! `FetchError` and the crate-level `Error` cover the collaborators around it.

use std::io;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("could not find HTML tag {tag:?}{}", describe_attr(.attr, .value))]
    NotFound {
        tag: String,
        attr: Option<String>,
        value: Option<String>,
    },

    #[error("unknown numeral {} in {input:?}", describe_glyph(.glyph))]
    UnknownNumeral { glyph: Option<char>, input: String },

    #[error("unknown weekday {0:?}")]
    UnknownWeekday(String),

    #[error("unknown solar-hijri month {0:?}")]
    UnknownMonth(String),

    #[error("malformed date text {0:?}")]
    MalformedDate(String),

    #[error("HTML tag {0:?} has no text")]
    EmptyText(String),
}

fn describe_attr(attr: &Option<String>, value: &Option<String>) -> String {
    match (attr, value) {
        (Some(a), Some(v)) => format!(" with attribute {a} and value {v}"),
        (Some(a), None) => format!(" with attribute {a}"),
        _ => s!(),
    }
}

fn describe_glyph(glyph: &Option<char>) -> String {
    match glyph {
        Some(c) => format!("{c:?} (U+{:04X})", *c as u32),
        None => s!("<empty>"),
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} from {url}")]
    Status { status: u16, url: String },

    #[error("response from {url} is only {len} bytes; expected a full page")]
    TooShort { len: usize, url: String },
}

/// Crate-level error for the runner and the CLI.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// True when the failure came from reading the page, i.e. the site changed shape.
    pub fn is_layout_change(&self) -> bool {
        matches!(self, Error::Extract(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
