//! Command-line interface for the conceptmap utility
//!
//! Reads numbered concept descriptions from a file or stdin and prints the
//! Mermaid ER document (or the parsed graph as JSON).

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use conceptmap::plugins::concept::{ConceptDatabase, ErDiagramRenderer};
use conceptmap::{ConceptMapError, Database, OutputFormat, RenderConfig, Renderer};

/// Conceptmap - Turn concept descriptions into Mermaid ER diagrams
#[derive(Parser)]
#[command(name = "conceptmap")]
#[command(about = "Generate Mermaid ER diagrams and a glossary from numbered concept descriptions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    /// Input file with concept descriptions (use - for stdin)
    pub input: Option<PathBuf>,

    /// Output file (use - for stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// What to print
    #[arg(long, value_enum, default_value_t = FormatChoice::Mermaid)]
    pub format: FormatChoice,

    /// Leave out the relationship syntax legend
    #[arg(long)]
    pub no_legend: bool,

    /// Leave out the ubiquitous language glossary
    #[arg(long)]
    pub no_glossary: bool,

    /// Leave out the usage note
    #[arg(long)]
    pub no_usage: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Render configuration selected by the section flags
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new(!self.no_legend, !self.no_glossary, !self.no_usage)
    }
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

/// Output formats
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum FormatChoice {
    /// Mermaid erDiagram with legend and glossary
    #[default]
    Mermaid,
    /// Parsed concept graph as JSON
    Json,
}

impl From<FormatChoice> for OutputFormat {
    fn from(value: FormatChoice) -> Self {
        match value {
            FormatChoice::Mermaid => OutputFormat::Mermaid,
            FormatChoice::Json => OutputFormat::Json,
        }
    }
}

/// JSON view of a parsed description
#[derive(Serialize)]
struct ConceptReport<'a> {
    concept_count: usize,
    relationship_count: usize,
    dangling_targets: Vec<&'a str>,
    concepts: &'a ConceptDatabase,
}

impl<'a> ConceptReport<'a> {
    fn new(database: &'a ConceptDatabase) -> Self {
        Self {
            concept_count: database.node_count(),
            relationship_count: database.edge_count(),
            dangling_targets: database.dangling_targets(),
            concepts: database,
        }
    }
}

/// Main CLI application
#[derive(Default)]
pub struct ConceptMapApp;

impl ConceptMapApp {
    pub fn new() -> Self {
        Self
    }

    /// Usage text printed when no input is given
    pub fn usage() -> String {
        let mut usage = Cli::command().render_usage().to_string();
        usage.push_str("\n   or: echo 'text' | conceptmap -");
        usage
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        if cli.verbose {
            eprintln!("Conceptmap v{}", env!("CARGO_PKG_VERSION"));
        }

        let input = cli
            .input
            .as_deref()
            .ok_or_else(|| anyhow!("No input given\n{}", Self::usage()))?;
        let content = self.read_input(input)?;

        if cli.verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let rendered = self.convert(&content, cli.format.into(), cli.render_config())?;
        self.write_output(cli.output.as_deref(), &rendered)
    }

    /// Parse the description and produce the requested output
    pub fn convert(&self, content: &str, format: OutputFormat, config: RenderConfig) -> Result<String> {
        let database = conceptmap::parse(content)?;
        debug!(
            concepts = database.node_count(),
            relationships = database.edge_count(),
            %format,
            "Converting description"
        );

        let output = match format {
            OutputFormat::Mermaid => ErDiagramRenderer::with_config(config).render(&database)?,
            OutputFormat::Json => serde_json::to_string_pretty(&ConceptReport::new(&database))?,
        };

        info!(output_len = output.len(), "Conversion completed");
        Ok(output)
    }

    /// Read input from a file, or stdin when the path is `-`
    pub fn read_input(&self, input: &Path) -> Result<String> {
        if input.to_string_lossy() == "-" {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(ConceptMapError::from)?;
            Ok(content)
        } else {
            Ok(fs::read_to_string(input).map_err(|e| ConceptMapError::input_error(input, e))?)
        }
    }

    /// Write output to a file, or stdout when no path or `-` is given
    pub fn write_output(&self, output: Option<&Path>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", content)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
