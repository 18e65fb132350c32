//! Concept description parser
//!
//! Splits the input into numbered entries and turns each entry into a
//! [`Concept`]. Entry boundaries and headers are recognised by the chumsky
//! header parser; body lines are classified by the phrase rules in
//! [`super::rules`].

use anyhow::Result;
use tracing::{debug, info, span, trace, Level};

use super::chumsky_parser::ChumskyHeaderParser;
use super::database::{Concept, ConceptDatabase};
use super::rules::{classify_with_rule, strip_bullet, LineClass};
use crate::core::{Database, Parser};

/// Concept description parser
pub struct ConceptParser {
    headers: ChumskyHeaderParser,
}

impl ConceptParser {
    pub fn new() -> Self {
        Self {
            headers: ChumskyHeaderParser::new(),
        }
    }

    /// Group the input into entries, each starting at a `<number> -` line.
    ///
    /// Lines are trimmed and blank lines dropped. Text before the first
    /// entry belongs to no entry.
    pub fn split_entries<'a>(&self, input: &'a str) -> Vec<Vec<&'a str>> {
        let mut entries: Vec<Vec<&'a str>> = Vec::new();

        for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if self.headers.starts_entry(line) {
                entries.push(vec![line]);
            } else if let Some(current) = entries.last_mut() {
                current.push(line);
            } else {
                trace!(line, "Discarding text before the first entry");
            }
        }

        entries
    }

    /// Build a concept from one entry's lines, `None` if the header is unusable
    pub fn parse_entry(&self, lines: &[&str]) -> Option<Concept> {
        let (first, body) = lines.split_first()?;
        let header = self.headers.parse_header(first.trim())?;
        if header.name.is_empty() {
            return None;
        }

        let mut concept = Concept::new(header.name).with_description(header.description);

        for raw in body {
            let line = strip_bullet(raw.trim());
            if line.is_empty() {
                continue;
            }

            let (rule, class) = classify_with_rule(line);
            let rule = rule.map(|r| r.kind);
            match class {
                LineClass::Parent(parent) => {
                    trace!(concept = %concept.name, ?rule, %parent, "Specialization");
                    concept.set_parent(parent);
                }
                LineClass::Relationships(relationships) => {
                    trace!(
                        concept = %concept.name,
                        ?rule,
                        count = relationships.len(),
                        "Relationships"
                    );
                    for relationship in relationships {
                        concept.add_relationship(relationship);
                    }
                }
                LineClass::Attribute(attribute) => {
                    trace!(concept = %concept.name, ?rule, %attribute, "Attribute");
                    concept.add_attribute(attribute);
                }
                LineClass::Nothing => {
                    trace!(concept = %concept.name, ?rule, line, "Line dropped");
                }
            }
        }

        Some(concept)
    }
}

impl Default for ConceptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser<ConceptDatabase> for ConceptParser {
    fn parse(&self, input: &str, database: &mut ConceptDatabase) -> Result<()> {
        let parse_span = span!(Level::INFO, "parse_concepts", input_len = input.len());
        let _enter = parse_span.enter();

        let entries = self.split_entries(input);
        let mut skipped = 0usize;

        for entry in &entries {
            match self.parse_entry(entry) {
                Some(concept) => database.add_node(concept)?,
                None => {
                    skipped += 1;
                    trace!(header = ?entry.first(), "Skipping entry without a usable header");
                }
            }
        }

        debug!(
            entries = entries.len(),
            skipped,
            concepts = database.node_count(),
            relationships = database.edge_count(),
            "Parsed concepts"
        );
        info!("Parsing completed");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "concept"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        input.lines().any(|line| self.headers.is_header(line))
    }
}
