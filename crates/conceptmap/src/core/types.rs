//! Core type definitions shared by the pipeline stages

use std::fmt;
use std::str::FromStr;

/// Which optional sections the diagram renderer emits
///
/// The defaults produce the full document: diagram, legend, glossary (when
/// any concept has a description) and the usage note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    /// Emit the relationship syntax legend after the diagram
    pub legend: bool,
    /// Emit the "Ubiquitous Language" glossary
    pub glossary: bool,
    /// Emit the trailing usage note
    pub usage_note: bool,
}

impl RenderConfig {
    pub fn new(legend: bool, glossary: bool, usage_note: bool) -> Self {
        Self {
            legend,
            glossary,
            usage_note,
        }
    }

    /// Only the fenced diagram block, nothing around it
    pub fn diagram_only() -> Self {
        Self::new(false, false, false)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

/// Output format produced by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum OutputFormat {
    /// Mermaid `erDiagram` source with legend and glossary
    #[default]
    Mermaid,
    /// The parsed concept graph as JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Mermaid => write!(f, "mermaid"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mermaid" => Ok(OutputFormat::Mermaid),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
