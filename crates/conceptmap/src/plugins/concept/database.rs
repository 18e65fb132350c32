//! Concept database
//!
//! Stores the concepts extracted from a description, keyed by name and kept
//! in first-seen order.

use anyhow::Result;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

use crate::core::{ConceptMapError, Database};

/// What sort of thing a concept is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptKind {
    #[default]
    Entity,
    ValueObject,
    /// Set automatically once a parent link is found
    SpecializedEntity,
}

impl fmt::Display for ConceptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConceptKind::Entity => write!(f, "entity"),
            ConceptKind::ValueObject => write!(f, "value_object"),
            ConceptKind::SpecializedEntity => write!(f, "specialized_entity"),
        }
    }
}

/// Relationship type between concepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    Association,
    Composition,
    /// Rendered reversed: the target earns the owning concept
    EarnedBy,
    Displays,
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationshipKind::Association => write!(f, "association"),
            RelationshipKind::Composition => write!(f, "composition"),
            RelationshipKind::EarnedBy => write!(f, "earned_by"),
            RelationshipKind::Displays => write!(f, "displays"),
        }
    }
}

/// A relationship owned by a concept
///
/// `target` is the name as written in the input and may not exist as a
/// concept of its own. `cardinality` is the informal phrase ("1 or more",
/// "0..*") that the renderer maps onto ER notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub target: String,
    pub kind: RelationshipKind,
    pub cardinality: String,
}

impl Relationship {
    pub fn new(
        target: impl Into<String>,
        kind: RelationshipKind,
        cardinality: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            kind,
            cardinality: cardinality.into(),
        }
    }
}

/// A named entity or value extracted from the input
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Concept {
    pub name: String,
    pub kind: ConceptKind,
    pub description: String,
    pub attributes: Vec<String>,
    pub relationships: Vec<Relationship>,
    pub parent: Option<String>,
}

impl Concept {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn add_attribute(&mut self, attribute: impl Into<String>) {
        self.attributes.push(attribute.into());
    }

    pub fn add_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    /// Record a specialization link; also switches the kind
    pub fn set_parent(&mut self, parent: impl Into<String>) {
        self.parent = Some(parent.into());
        self.kind = ConceptKind::SpecializedEntity;
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

/// Concept database
///
/// Re-adding a name replaces the stored concept but keeps the position the
/// name first appeared at.
#[derive(Debug, Clone, Default)]
pub struct ConceptDatabase {
    /// Concepts indexed by name
    concepts: HashMap<String, Concept>,
    /// Names in first-insertion order
    order: Vec<String>,
}

impl ConceptDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a concept exists
    pub fn has_concept(&self, name: &str) -> bool {
        self.concepts.contains_key(name)
    }

    /// Concepts in insertion order
    pub fn concepts(&self) -> Vec<&Concept> {
        self.nodes().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Concepts that carry a description, for the glossary
    pub fn described_concepts(&self) -> impl Iterator<Item = &Concept> {
        self.nodes().filter(|c| c.has_description())
    }

    /// Relationship targets that have no concept of their own
    pub fn dangling_targets(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for rel in self.edges() {
            if !self.has_concept(&rel.target) && !seen.contains(&rel.target.as_str()) {
                seen.push(rel.target.as_str());
            }
        }
        seen
    }
}

impl Database for ConceptDatabase {
    type Node = Concept;
    type Edge = Relationship;

    fn add_node(&mut self, concept: Concept) -> Result<()> {
        if concept.name.is_empty() {
            return Err(ConceptMapError::database_error("concept name must not be empty").into());
        }
        trace!(
            concept = %concept.name,
            kind = %concept.kind,
            attributes = concept.attributes.len(),
            relationships = concept.relationships.len(),
            "Adding concept to database"
        );
        if !self.concepts.contains_key(&concept.name) {
            self.order.push(concept.name.clone());
        } else {
            debug!(concept = %concept.name, "Replacing previously defined concept");
        }
        self.concepts.insert(concept.name.clone(), concept);
        Ok(())
    }

    fn get_node(&self, name: &str) -> Option<&Concept> {
        self.concepts.get(name)
    }

    fn nodes(&self) -> impl Iterator<Item = &Concept> {
        self.order.iter().filter_map(|name| self.concepts.get(name))
    }

    fn edges(&self) -> impl Iterator<Item = &Relationship> {
        self.nodes().flat_map(|c| c.relationships.iter())
    }

    fn clear(&mut self) {
        self.concepts.clear();
        self.order.clear();
    }

    fn node_count(&self) -> usize {
        self.concepts.len()
    }

    fn edge_count(&self) -> usize {
        self.concepts.values().map(|c| c.relationships.len()).sum()
    }
}

impl Serialize for ConceptDatabase {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.nodes())
    }
}
