//! Conceptmap - Turn numbered concept descriptions into Mermaid ER diagrams
//!
//! Input is a list of numbered entries, one per domain concept:
//!
//! ```text
//! 1 - Player; A user playing the game
//! - has a Score
//! - can be associated with 1 or more `Achievement`
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use conceptmap::render;
//!
//! let input = "1 - Player; A user\n- can be associated with 1 or more `Achievement`";
//! let diagram = render(input).unwrap();
//! assert!(diagram.contains("Player ||--o{ Achievement : \"associated with\""));
//! ```
//!
//! # Advanced Usage
//!
//! ```rust
//! use conceptmap::prelude::*;
//!
//! let parser = ConceptParser::new();
//! let mut database = ConceptDatabase::new();
//! parser.parse("1 - Badge; A reward\n- shows the Icon", &mut database).unwrap();
//! assert_eq!(database.node_count(), 1);
//!
//! let renderer = ErDiagramRenderer::with_config(RenderConfig::diagram_only());
//! let mermaid = renderer.render(&database).unwrap();
//! assert!(mermaid.ends_with("```"));
//! ```

pub mod core;
pub mod plugins;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{Database, OutputFormat, Parser, RenderConfig, Renderer};
    pub use crate::plugins::concept::{
        Concept, ConceptDatabase, ConceptKind, ConceptParser, ErDiagramRenderer, Relationship,
        RelationshipKind,
    };
}

/// Parse concept descriptions into a database without rendering
///
/// # Example
/// ```rust
/// use conceptmap::parse;
/// use conceptmap::prelude::Database;
///
/// let db = parse("1 - Foo; bar\n2 - Baz; qux").unwrap();
/// assert_eq!(db.node_count(), 2);
/// ```
pub fn parse(input: &str) -> anyhow::Result<plugins::concept::ConceptDatabase> {
    use crate::core::Parser as _;
    use crate::plugins::concept::{ConceptDatabase, ConceptParser};

    let parser = ConceptParser::new();
    let mut database = ConceptDatabase::new();
    parser.parse(input, &mut database)?;
    Ok(database)
}

/// Render concept descriptions as a full Mermaid document
///
/// Produces the diagram, legend, glossary (when any concept is described)
/// and usage note.
pub fn render(input: &str) -> anyhow::Result<String> {
    render_with_config(input, RenderConfig::default())
}

/// Render concept descriptions with control over the optional sections
///
/// # Example
/// ```rust
/// use conceptmap::{render_with_config, RenderConfig};
///
/// let diagram = render_with_config("1 - Foo; bar", RenderConfig::diagram_only()).unwrap();
/// assert_eq!(diagram, "```mermaid\nerDiagram\n\n```");
/// ```
pub fn render_with_config(input: &str, config: RenderConfig) -> anyhow::Result<String> {
    use crate::core::Renderer as _;
    use crate::plugins::concept::ErDiagramRenderer;

    let database = parse(input)?;
    ErDiagramRenderer::with_config(config).render(&database)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Database as _;

    #[test]
    fn test_render_full_document() {
        let output = render("1 - Foo; bar").unwrap();
        assert!(output.starts_with("```mermaid\nerDiagram\n"));
        assert!(output.contains("## Relationship Syntax Legend"));
        assert!(output.contains("- **Foo**: bar"));
        assert!(output.contains("**Usage:**"));
    }

    #[test]
    fn test_render_empty_input() {
        let output = render("").unwrap();
        assert!(output.starts_with("```mermaid\nerDiagram\n\n```"));
        assert!(output.contains("## Relationship Syntax Legend"));
        assert!(!output.contains("## Ubiquitous Language"));
    }

    #[test]
    fn test_parse_counts() {
        let db = parse("1 - A; a\n- has B\n2 - B; b").unwrap();
        assert_eq!(db.node_count(), 2);
        assert_eq!(db.edge_count(), 1);
    }
}
