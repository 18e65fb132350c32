//! Core parser trait for concept descriptions
//!
//! This trait defines the interface for turning free text into structured
//! data stored in a database.

use anyhow::Result;

use super::Database;

/// Core trait for parsers
///
/// # Example
/// ```
/// use conceptmap::core::{Database, Parser};
/// use conceptmap::plugins::concept::{ConceptDatabase, ConceptParser};
///
/// let parser = ConceptParser::new();
/// let mut db = ConceptDatabase::new();
/// parser.parse("1 - Player; Someone who plays", &mut db).unwrap();
/// assert_eq!(db.node_count(), 1);
/// ```
pub trait Parser<D: Database>: Send + Sync {
    /// Parse input text into the provided database
    fn parse(&self, input: &str, database: &mut D) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;

    /// Check if the input looks like something this parser understands
    fn can_parse(&self, input: &str) -> bool;
}
