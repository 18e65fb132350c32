//! Core renderer trait for diagram output

use anyhow::Result;

use super::Database;

/// Core trait for renderers
///
/// # Example
/// ```
/// use conceptmap::core::Renderer;
/// use conceptmap::plugins::concept::{ConceptDatabase, ErDiagramRenderer};
///
/// let db = ConceptDatabase::new();
/// let renderer = ErDiagramRenderer::new();
/// let output = renderer.render(&db).unwrap();
/// assert!(output.starts_with("```mermaid"));
/// ```
pub trait Renderer<D: Database>: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render the database into the output format
    fn render(&self, database: &D) -> Result<Self::Output>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the version of this renderer
    fn version(&self) -> &'static str;

    /// Get the supported output format
    fn format(&self) -> &'static str;
}
