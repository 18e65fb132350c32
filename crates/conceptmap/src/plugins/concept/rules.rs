//! Phrase rules for classifying entry lines
//!
//! Each body line of an entry is tested against an ordered list of rules.
//! A rule fires when the lowercased line contains one of its trigger
//! phrases; its extractor then pulls structured data out of the line. The
//! first rule that fires decides the line, even when its extractor finds
//! nothing. Lines no rule fires on become plain attributes.

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

use super::database::{Relationship, RelationshipKind};

/// Cardinality used for `has` lines without an explicit count
pub const DEFAULT_HAS_CARDINALITY: &str = "1";
/// Cardinality for each item of an "earned by completing X or Y" list
pub const EARNED_BY_LIST_CARDINALITY: &str = "0..*";
/// Cardinality for a single "earned by"/"created by" source
pub const EARNED_BY_SOURCE_CARDINALITY: &str = "1..*";
/// Cardinality for "displays"/"shows" targets
pub const DISPLAYS_CARDINALITY: &str = "1";

/// What a single entry line contributes to its concept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Specialization link to a parent concept
    Parent(String),
    /// One or more relationships to other concepts
    Relationships(Vec<Relationship>),
    /// Free-text attribute
    Attribute(String),
    /// A rule fired but could not extract anything
    Nothing,
}

/// The rule families, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Specialization,
    Association,
    Has,
    EarnedBy,
    Displays,
}

/// A trigger/extractor pair
pub struct LineRule {
    pub kind: RuleKind,
    /// Lowercase phrases; any one of them fires the rule
    pub triggers: &'static [&'static str],
    pub extract: fn(&str) -> LineClass,
}

impl LineRule {
    /// Whether this rule fires on the line
    pub fn fires(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.triggers.iter().any(|t| lower.contains(t))
    }
}

/// Rules in the order they are tried
pub static RULES: [LineRule; 5] = [
    LineRule {
        kind: RuleKind::Specialization,
        triggers: &["is a type of", "is a"],
        extract: extract_parent,
    },
    LineRule {
        kind: RuleKind::Association,
        triggers: &["associated with", "can be associated with"],
        extract: extract_association,
    },
    LineRule {
        kind: RuleKind::Has,
        triggers: &["has", "can have"],
        extract: extract_has,
    },
    LineRule {
        kind: RuleKind::EarnedBy,
        triggers: &["earned by", "created by"],
        extract: extract_earned_by,
    },
    LineRule {
        kind: RuleKind::Displays,
        triggers: &["displays", "shows"],
        extract: extract_displays,
    },
];

/// The first rule that fires on the line, if any
pub fn matching_rule(line: &str) -> Option<&'static LineRule> {
    RULES.iter().find(|rule| rule.fires(line))
}

/// Classify a body line (bullet marker already removed)
pub fn classify_line(line: &str) -> LineClass {
    classify_with_rule(line).1
}

/// Classify a body line and report the rule that decided it
pub fn classify_with_rule(line: &str) -> (Option<&'static LineRule>, LineClass) {
    match matching_rule(line) {
        Some(rule) => (Some(rule), (rule.extract)(line)),
        None => (None, LineClass::Attribute(line.to_string())),
    }
}

/// Remove one leading `*` or `-` bullet and the whitespace around it
pub fn strip_bullet(line: &str) -> &str {
    let trimmed = line.trim_start();
    trimmed
        .strip_prefix(['*', '-'])
        .map(str::trim_start)
        .unwrap_or(trimmed)
}

/// Upper-case the first character and lower-case the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn phrase_pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| {
        RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .expect("phrase pattern is a valid regex")
    })
}

fn extract_parent(line: &str) -> LineClass {
    static PARENT: OnceLock<Regex> = OnceLock::new();
    let re = phrase_pattern(&PARENT, r"is a(?:\s+type of)?\s+`?([^`\s]+)");

    match re.captures(line) {
        Some(caps) => LineClass::Parent(caps[1].trim().to_string()),
        None => LineClass::Nothing,
    }
}

fn extract_association(line: &str) -> LineClass {
    static ASSOCIATION: OnceLock<Regex> = OnceLock::new();
    let re = phrase_pattern(
        &ASSOCIATION,
        r"associated with\s+(\d+(?:\s+or\s+more)?)\s+`([^`]+)`",
    );

    match re.captures(line) {
        Some(caps) => LineClass::Relationships(vec![Relationship::new(
            caps[2].trim(),
            RelationshipKind::Association,
            caps[1].trim(),
        )]),
        None => LineClass::Nothing,
    }
}

fn extract_has(line: &str) -> LineClass {
    static HAS: OnceLock<Regex> = OnceLock::new();
    let re = phrase_pattern(
        &HAS,
        r"(?:has|can have)\s+(?:(\d+(?:\s+or\s+more)?)\s+)?([^*\n]+)",
    );

    let Some(caps) = re.captures(line) else {
        return LineClass::Nothing;
    };
    let cardinality = caps
        .get(1)
        .map(|m| m.as_str().trim())
        .unwrap_or(DEFAULT_HAS_CARDINALITY);
    let remainder = caps[2].trim();

    let Some(first_word) = remainder.split_whitespace().next() else {
        return LineClass::Nothing;
    };
    let names_concept =
        remainder.contains('`') || first_word.chars().next().is_some_and(char::is_uppercase);

    if names_concept {
        let target = remainder.replace('`', "");
        LineClass::Relationships(vec![Relationship::new(
            target.trim(),
            RelationshipKind::Composition,
            cardinality,
        )])
    } else {
        LineClass::Attribute(remainder.to_string())
    }
}

fn extract_earned_by(line: &str) -> LineClass {
    static COMPLETING: OnceLock<Regex> = OnceLock::new();
    static SOURCE: OnceLock<Regex> = OnceLock::new();
    static OR_SEPARATOR: OnceLock<Regex> = OnceLock::new();

    let completing = phrase_pattern(
        &COMPLETING,
        r"(?:earned by|created by)\s+completing\s+([^*\n]+)",
    );
    if let Some(caps) = completing.captures(line) {
        // The list separator is matched case-sensitively: "OR" stays in an item
        let separator = OR_SEPARATOR.get_or_init(|| {
            Regex::new(r"\s+or\s+").expect("separator pattern is a valid regex")
        });
        let relationships = separator
            .split(caps[1].trim())
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| {
                Relationship::new(
                    capitalize(item),
                    RelationshipKind::EarnedBy,
                    EARNED_BY_LIST_CARDINALITY,
                )
            })
            .collect::<Vec<_>>();
        return if relationships.is_empty() {
            LineClass::Nothing
        } else {
            LineClass::Relationships(relationships)
        };
    }

    let source = phrase_pattern(&SOURCE, r"(?:earned by|created by)\s+([^*\n]+)");
    match source.captures(line) {
        Some(caps) if !caps[1].trim().is_empty() => {
            LineClass::Relationships(vec![Relationship::new(
                caps[1].trim(),
                RelationshipKind::EarnedBy,
                EARNED_BY_SOURCE_CARDINALITY,
            )])
        }
        _ => LineClass::Nothing,
    }
}

fn extract_displays(line: &str) -> LineClass {
    static ACCUMULATED: OnceLock<Regex> = OnceLock::new();
    static REMAINDER: OnceLock<Regex> = OnceLock::new();

    let accumulated = phrase_pattern(
        &ACCUMULATED,
        r"(?:displays|shows)\s+(?:the\s+)?(?:total\s+)?([a-zA-Z\s]+)\s+accumulated",
    );
    if let Some(caps) = accumulated.captures(line) {
        return LineClass::Relationships(vec![Relationship::new(
            capitalize(caps[1].trim()),
            RelationshipKind::Displays,
            DISPLAYS_CARDINALITY,
        )]);
    }

    let remainder = phrase_pattern(&REMAINDER, r"(?:displays|shows)\s+(?:the\s+)?([^*\n]+)");
    match remainder.captures(line) {
        Some(caps) if !caps[1].trim().is_empty() => {
            LineClass::Relationships(vec![Relationship::new(
                caps[1].trim(),
                RelationshipKind::Displays,
                DISPLAYS_CARDINALITY,
            )])
        }
        _ => LineClass::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(target: &str, kind: RelationshipKind, cardinality: &str) -> Relationship {
        Relationship::new(target, kind, cardinality)
    }

    #[test]
    fn test_rule_priority_order() {
        let kinds: Vec<_> = RULES.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RuleKind::Specialization,
                RuleKind::Association,
                RuleKind::Has,
                RuleKind::EarnedBy,
                RuleKind::Displays,
            ]
        );
    }

    #[test]
    fn test_strip_bullet() {
        assert_eq!(strip_bullet("- has a Score"), "has a Score");
        assert_eq!(strip_bullet("*   shows points"), "shows points");
        assert_eq!(strip_bullet("  -- double"), "- double");
        assert_eq!(strip_bullet("no bullet"), "no bullet");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("quest1"), "Quest1");
        assert_eq!(capitalize("daily QUEST"), "Daily quest");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_specialization_backticked() {
        assert_eq!(
            classify_line("is a type of `Badge`"),
            LineClass::Parent("Badge".to_string())
        );
    }

    #[test]
    fn test_specialization_bare() {
        assert_eq!(
            classify_line("Is A Reward given out"),
            LineClass::Parent("Reward".to_string())
        );
    }

    #[test]
    fn test_specialization_trigger_without_token_is_dropped() {
        // "is a" fires the rule, but "is an" has no token after "is a "
        assert_eq!(classify_line("this is an example"), LineClass::Nothing);
    }

    #[test]
    fn test_association() {
        assert_eq!(
            classify_line("can be associated with 1 or more `Achievement`"),
            LineClass::Relationships(vec![rel(
                "Achievement",
                RelationshipKind::Association,
                "1 or more"
            )])
        );
        assert_eq!(
            classify_line("Associated With 2 `Team Member`"),
            LineClass::Relationships(vec![rel("Team Member", RelationshipKind::Association, "2")])
        );
    }

    #[test]
    fn test_association_without_backticks_is_dropped() {
        assert_eq!(
            classify_line("associated with 1 Achievement"),
            LineClass::Nothing
        );
    }

    #[test]
    fn test_has_lowercase_is_attribute() {
        assert_eq!(
            classify_line("has a Score"),
            LineClass::Attribute("a Score".to_string())
        );
        assert_eq!(
            classify_line("has a nickname."),
            LineClass::Attribute("a nickname.".to_string())
        );
    }

    #[test]
    fn test_has_uppercase_is_composition() {
        assert_eq!(
            classify_line("has Inventory"),
            LineClass::Relationships(vec![rel("Inventory", RelationshipKind::Composition, "1")])
        );
    }

    #[test]
    fn test_has_backticks_and_cardinality() {
        assert_eq!(
            classify_line("can have 0 or more `quest log`"),
            LineClass::Relationships(vec![rel(
                "quest log",
                RelationshipKind::Composition,
                "0 or more"
            )])
        );
        assert_eq!(
            classify_line("has 3 Lives"),
            LineClass::Relationships(vec![rel("Lives", RelationshipKind::Composition, "3")])
        );
    }

    #[test]
    fn test_has_stops_at_asterisk() {
        assert_eq!(
            classify_line("has a rank *optional*"),
            LineClass::Attribute("a rank".to_string())
        );
    }

    #[test]
    fn test_earned_by_completing_list() {
        assert_eq!(
            classify_line("earned by completing Quest1 or Quest2 or daily challenge"),
            LineClass::Relationships(vec![
                rel("Quest1", RelationshipKind::EarnedBy, "0..*"),
                rel("Quest2", RelationshipKind::EarnedBy, "0..*"),
                rel("Daily challenge", RelationshipKind::EarnedBy, "0..*"),
            ])
        );
    }

    #[test]
    fn test_created_by_single_source() {
        assert_eq!(
            classify_line("created by the Game Master"),
            LineClass::Relationships(vec![rel(
                "the Game Master",
                RelationshipKind::EarnedBy,
                "1..*"
            )])
        );
    }

    #[test]
    fn test_displays_accumulated() {
        assert_eq!(
            classify_line("displays the total experience points accumulated"),
            LineClass::Relationships(vec![rel(
                "Experience points",
                RelationshipKind::Displays,
                "1"
            )])
        );
    }

    #[test]
    fn test_shows_remainder() {
        assert_eq!(
            classify_line("shows the Leaderboard"),
            LineClass::Relationships(vec![rel("Leaderboard", RelationshipKind::Displays, "1")])
        );
    }

    #[test]
    fn test_fallback_attribute() {
        assert_eq!(
            classify_line("unique per region"),
            LineClass::Attribute("unique per region".to_string())
        );
    }

    #[test]
    fn test_first_trigger_wins() {
        // Contains both "is a" and "has": specialization decides
        assert_eq!(
            classify_line("is a Container that has Items"),
            LineClass::Parent("Container".to_string())
        );
        // Contains "associated with" but the sub-pattern fails; "has" is not tried
        assert_eq!(
            classify_line("associated with many things and has Items"),
            LineClass::Nothing
        );
    }

    #[test]
    fn test_classify_with_rule_reports_deciding_rule() {
        let (rule, class) = classify_with_rule("earned by completing Quest1");
        assert_eq!(rule.map(|r| r.kind), Some(RuleKind::EarnedBy));
        assert_eq!(
            class,
            LineClass::Relationships(vec![Relationship::new(
                "Quest1",
                RelationshipKind::EarnedBy,
                "0..*"
            )])
        );

        let (rule, class) = classify_with_rule("unique per region");
        assert!(rule.is_none());
        assert_eq!(class, LineClass::Attribute("unique per region".to_string()));
    }

    #[test]
    fn test_matching_rule() {
        assert_eq!(
            matching_rule("shows the map").map(|r| r.kind),
            Some(RuleKind::Displays)
        );
        assert!(matching_rule("plain text").is_none());
    }
}
