//! Mermaid ER diagram renderer
//!
//! Renders a concept database as a fenced Mermaid `erDiagram` block followed
//! by a notation legend, an optional glossary and a usage note.

use anyhow::Result;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info, span, trace, Level};

use super::database::{Concept, ConceptDatabase, RelationshipKind};
use super::notation::{clean_attribute, sanitize_id, Notation};
use crate::core::{Database, RenderConfig, Renderer};

const LEGEND_HEADING: &str = "## Relationship Syntax Legend";
const GLOSSARY_HEADING: &str = "## Ubiquitous Language";
const USAGE_NOTE: &str = "**Usage:** Copy this output to a markdown file (.md). \
With Mermaid and Markdown plugins installed in IntelliJ, the diagram will render perfectly.";

/// What an emitted edge represents; part of the deduplication key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Specialization link to the parent concept
    Inheritance,
    Relationship(RelationshipKind),
}

/// One relationship line of the ER diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErEdge {
    pub from: String,
    pub to: String,
    pub notation: Notation,
    pub label: &'static str,
    pub kind: EdgeKind,
}

impl ErEdge {
    fn key(&self) -> (String, String, EdgeKind) {
        (self.from.clone(), self.to.clone(), self.kind)
    }
}

impl fmt::Display for ErEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "    {} {} {} : \"{}\"",
            self.from, self.notation, self.to, self.label
        )
    }
}

/// Mermaid ER diagram renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct ErDiagramRenderer {
    config: RenderConfig,
}

impl ErDiagramRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> RenderConfig {
        self.config
    }

    /// Edges for a single concept, in discovery order, before deduplication
    fn concept_edges(concept: &Concept) -> Vec<ErEdge> {
        let source = sanitize_id(&concept.name);
        let mut edges = Vec::with_capacity(concept.relationships.len() + 1);

        if let Some(parent) = &concept.parent {
            edges.push(ErEdge {
                from: source.clone(),
                to: sanitize_id(parent),
                notation: Notation::OneToOne,
                label: "is kind of",
                kind: EdgeKind::Inheritance,
            });
        }

        for rel in &concept.relationships {
            let target = sanitize_id(&rel.target);
            let kind = EdgeKind::Relationship(rel.kind);
            let edge = match rel.kind {
                RelationshipKind::Association => ErEdge {
                    from: source.clone(),
                    to: target,
                    notation: Notation::from_cardinality(&rel.cardinality),
                    label: "associated with",
                    kind,
                },
                RelationshipKind::Composition => ErEdge {
                    from: source.clone(),
                    to: target,
                    notation: Notation::from_cardinality(&rel.cardinality),
                    label: "has",
                    kind,
                },
                // The earning side owns the edge
                RelationshipKind::EarnedBy => ErEdge {
                    from: target,
                    to: source.clone(),
                    notation: Notation::OneToMany,
                    label: "earns",
                    kind,
                },
                RelationshipKind::Displays => ErEdge {
                    from: source.clone(),
                    to: target,
                    notation: Notation::OneToOne,
                    label: "displays",
                    kind,
                },
            };
            edges.push(edge);
        }

        edges
    }

    /// All diagram edges in emission order, duplicates removed.
    ///
    /// Two edges are duplicates when they share sanitized endpoints and
    /// kind; the same endpoints with a different kind are kept.
    pub fn edges(&self, database: &ConceptDatabase) -> Vec<ErEdge> {
        let mut emitted: HashSet<(String, String, EdgeKind)> = HashSet::new();
        let mut edges = Vec::new();

        for concept in database.nodes() {
            for edge in Self::concept_edges(concept) {
                if emitted.insert(edge.key()) {
                    edges.push(edge);
                } else {
                    trace!(from = %edge.from, to = %edge.to, kind = ?edge.kind, "Skipping duplicate edge");
                }
            }
        }

        edges
    }

    /// The fenced `erDiagram` block
    pub fn render_diagram(&self, database: &ConceptDatabase) -> String {
        let mut lines = vec!["```mermaid".to_string(), "erDiagram".to_string()];

        lines.extend(self.edges(database).iter().map(ErEdge::to_string));
        lines.push(String::new());

        for concept in database.nodes().filter(|c| !c.attributes.is_empty()) {
            lines.push(format!("    {} {{", sanitize_id(&concept.name)));
            for attribute in &concept.attributes {
                lines.push(format!("        string {}", clean_attribute(attribute)));
            }
            lines.push("    }".to_string());
        }

        lines.push("```".to_string());
        lines.join("\n")
    }

    /// The notation legend, starting with a blank line
    pub fn render_legend(&self) -> String {
        let mut lines = vec![format!("\n{}\n", LEGEND_HEADING)];
        lines.extend(
            Notation::ALL
                .iter()
                .map(|n| format!("- `{}` : {}", n.token(), n.description())),
        );
        lines.join("\n")
    }

    /// The glossary of described concepts, `None` when nothing is described
    pub fn render_glossary(&self, database: &ConceptDatabase) -> Option<String> {
        let entries: Vec<String> = database
            .described_concepts()
            .map(|c| format!("- **{}**: {}", c.name, c.description))
            .collect();

        if entries.is_empty() {
            return None;
        }

        let mut lines = vec![format!("\n{}\n", GLOSSARY_HEADING)];
        lines.extend(entries);
        Some(lines.join("\n"))
    }

    /// The trailing usage note
    pub fn render_usage_note(&self) -> String {
        format!("\n---\n\n{}", USAGE_NOTE)
    }
}

impl Renderer<ConceptDatabase> for ErDiagramRenderer {
    type Output = String;

    fn render(&self, database: &ConceptDatabase) -> Result<String> {
        let render_span = span!(
            Level::INFO,
            "render_er_diagram",
            concept_count = database.node_count(),
            relationship_count = database.edge_count()
        );
        let _enter = render_span.enter();

        let mut output = self.render_diagram(database);

        if self.config.legend {
            output.push_str(&self.render_legend());
        }

        if self.config.glossary {
            if let Some(glossary) = self.render_glossary(database) {
                output.push('\n');
                output.push_str(&glossary);
            }
        }

        if self.config.usage_note {
            output.push_str(&self.render_usage_note());
        }

        debug!(output_len = output.len(), "Rendered diagram");
        info!("Rendering completed");
        Ok(output)
    }

    fn name(&self) -> &'static str {
        "mermaid-er"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "mermaid"
    }
}
