//! Entry header parser using chumsky
//!
//! Every concept entry opens with a numbered line. A well-formed header
//! reads `<number> - <name>; <description>`; any line starting with
//! `<number> -` opens an entry, and entries whose opening line is not a
//! well-formed header are dropped by the parser.

use crate::core::chumsky_utils::{ascii_digits, inline_whitespace, padded_dash};
use chumsky::prelude::*;

/// Name and description taken from an entry header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryHeader {
    pub name: String,
    pub description: String,
}

/// Chumsky-based parser for entry header lines
pub struct ChumskyHeaderParser;

impl ChumskyHeaderParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a trimmed header line, `None` when it is not a header
    pub fn parse_header(&self, line: &str) -> Option<EntryHeader> {
        Self::header_parser().parse(line).into_result().ok()
    }

    /// Whether the line is a well-formed header
    pub fn is_header(&self, line: &str) -> bool {
        self.parse_header(line.trim()).is_some()
    }

    /// Whether the line opens a new entry (`<number> -` prefix)
    pub fn starts_entry(&self, line: &str) -> bool {
        Self::entry_start_parser()
            .parse(line.trim())
            .into_result()
            .is_ok()
    }

    fn entry_start_parser<'src>() -> impl Parser<'src, &'src str, ()> {
        ascii_digits()
            .then_ignore(padded_dash())
            .then_ignore(any().repeated())
            .ignored()
    }

    fn header_parser<'src>() -> impl Parser<'src, &'src str, EntryHeader> {
        let name = none_of(";")
            .repeated()
            .at_least(1)
            .to_slice()
            .map(|s: &str| s.trim().to_string());

        let description = any()
            .repeated()
            .to_slice()
            .map(|s: &str| s.trim().to_string());

        ascii_digits()
            .ignore_then(padded_dash())
            .ignore_then(name)
            .then_ignore(just(';'))
            .then_ignore(inline_whitespace())
            .then(description)
            .then_ignore(end())
            .map(|(name, description)| EntryHeader { name, description })
    }
}

impl Default for ChumskyHeaderParser {
    fn default() -> Self {
        Self::new()
    }
}
