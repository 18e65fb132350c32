//! Concept map plugin
//!
//! Parses numbered concept descriptions and renders them as Mermaid ER
//! diagrams.

mod chumsky_parser;
mod database;
pub mod notation;
mod parser;
mod renderer;
pub mod rules;

pub use chumsky_parser::{ChumskyHeaderParser, EntryHeader};
pub use database::{Concept, ConceptDatabase, ConceptKind, Relationship, RelationshipKind};
pub use notation::{clean_attribute, sanitize_id, Notation};
pub use parser::ConceptParser;
pub use renderer::{EdgeKind, ErDiagramRenderer, ErEdge};
pub use rules::{classify_line, classify_with_rule, LineClass, RuleKind};
