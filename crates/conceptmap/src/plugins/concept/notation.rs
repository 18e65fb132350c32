//! Mermaid ER notation helpers
//!
//! Identifier sanitization, cardinality mapping and attribute label cleanup
//! used by the diagram renderer.

use std::fmt;

/// ER relationship notation between two entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `||--||`
    OneToOne,
    /// `||--o|`
    OneToZeroOrOne,
    /// `||--o{`
    OneToMany,
    /// `||--|{`
    OneToOneOrMore,
}

impl Notation {
    /// Every notation, in legend order
    pub const ALL: [Notation; 4] = [
        Notation::OneToOne,
        Notation::OneToZeroOrOne,
        Notation::OneToMany,
        Notation::OneToOneOrMore,
    ];

    /// The Mermaid token for this notation
    pub fn token(self) -> &'static str {
        match self {
            Notation::OneToOne => "||--||",
            Notation::OneToZeroOrOne => "||--o|",
            Notation::OneToMany => "||--o{",
            Notation::OneToOneOrMore => "||--|{",
        }
    }

    /// Human-readable meaning, as shown in the legend
    pub fn description(self) -> &'static str {
        match self {
            Notation::OneToOne => "One to exactly one",
            Notation::OneToZeroOrOne => "One to zero or one",
            Notation::OneToMany => "One to many",
            Notation::OneToOneOrMore => "One to one or more",
        }
    }

    /// Map an informal cardinality phrase onto a notation.
    ///
    /// Matching is case-insensitive and the first rule that applies wins.
    /// "zero or more" maps to the same token as "one or more"; the optional
    /// side is not represented. Unknown phrases fall back to one-to-many.
    pub fn from_cardinality(phrase: &str) -> Self {
        let phrase = phrase.trim().to_lowercase();

        let many = ["1 or more", "one or more", "0 or more", "zero or more"];

        if many.iter().any(|m| phrase.contains(m)) {
            Notation::OneToMany
        } else if phrase == "1" {
            Notation::OneToOne
        } else if phrase.contains("0..1") {
            Notation::OneToZeroOrOne
        } else {
            Notation::OneToMany
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Turn a concept name into a Mermaid-safe identifier.
///
/// Spaces become underscores and anything outside `[A-Za-z0-9_]` is dropped.
/// Distinct names can collapse onto the same identifier ("Gold-Badge" and
/// "GoldBadge"); they then share a node.
pub fn sanitize_id(name: &str) -> String {
    name.chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Clean a free-text attribute into an ER attribute label.
///
/// Drops one leading "a "/"an ", then every period and comma.
pub fn clean_attribute(attribute: &str) -> String {
    let label = attribute
        .strip_prefix("a ")
        .or_else(|| attribute.strip_prefix("an "))
        .unwrap_or(attribute);

    label
        .trim_end_matches('.')
        .chars()
        .filter(|c| *c != '.' && *c != ',')
        .collect()
}
