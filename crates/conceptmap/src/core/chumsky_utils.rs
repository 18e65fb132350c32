//! Shared chumsky parser utilities
//!
//! Entry text is always handled one trimmed line at a time, so only inline
//! whitespace (spaces and tabs) is ever consumed here.

use chumsky::prelude::*;

/// Parse optional inline whitespace (spaces and tabs, no newlines).
pub fn inline_whitespace<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    one_of(" \t").repeated().ignored()
}

/// Parse an unsigned decimal number made of ASCII digits.
pub fn ascii_digits<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    one_of('0'..='9').repeated().at_least(1).to_slice()
}

/// Parse a dash surrounded by optional inline whitespace: ` - `, `-`, `  -\t`.
pub fn padded_dash<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    just('-').padded_by(inline_whitespace()).ignored()
}
