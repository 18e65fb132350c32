//! Integration tests for the public API

use conceptmap::prelude::*;
use conceptmap::{parse, render, render_with_config};

const GAME_INPUT: &str = "1 - Player; A user playing the game
- has a Score
- can be associated with 1 or more `Achievement`
2 - Achievement; A milestone
- is a type of `Badge`
- earned by completing Quest1 or Quest2
3 - Leaderboard;
* displays the total points accumulated
";

const GAME_OUTPUT: &str = r#"```mermaid
erDiagram
    Player ||--o{ Achievement : "associated with"
    Achievement ||--|| Badge : "is kind of"
    Quest1 ||--o{ Achievement : "earns"
    Quest2 ||--o{ Achievement : "earns"
    Leaderboard ||--|| Points : "displays"

    Player {
        string Score
    }
```
## Relationship Syntax Legend

- `||--||` : One to exactly one
- `||--o|` : One to zero or one
- `||--o{` : One to many
- `||--|{` : One to one or more

## Ubiquitous Language

- **Player**: A user playing the game
- **Achievement**: A milestone
---

**Usage:** Copy this output to a markdown file (.md). With Mermaid and Markdown plugins installed in IntelliJ, the diagram will render perfectly."#;

#[test]
fn test_full_document() {
    assert_eq!(render(GAME_INPUT).unwrap(), GAME_OUTPUT);
}

#[test]
fn test_render_is_deterministic() {
    let first = render(GAME_INPUT).unwrap();
    let second = render(GAME_INPUT).unwrap();
    assert_eq!(first, second);

    let db = parse(GAME_INPUT).unwrap();
    let renderer = ErDiagramRenderer::new();
    assert_eq!(renderer.render(&db).unwrap(), renderer.render(&db).unwrap());
}

#[test]
fn test_single_header_entry() {
    let db = parse("1 - Foo; bar").unwrap();
    assert_eq!(db.node_count(), 1);
    let foo = db.get_node("Foo").unwrap();
    assert_eq!(foo.description, "bar");
    assert!(foo.attributes.is_empty());
    assert!(foo.relationships.is_empty());
    assert!(foo.parent.is_none());
}

#[test]
fn test_player_example() {
    let db = parse(
        "1 - Player; A user playing the game\n- has a Score\n- can be associated with 1 or more `Achievement`",
    )
    .unwrap();
    let player = db.get_node("Player").unwrap();
    assert_eq!(player.attributes, vec!["a Score"]);
    assert_eq!(
        player.relationships,
        vec![Relationship::new(
            "Achievement",
            RelationshipKind::Association,
            "1 or more"
        )]
    );

    let output = ErDiagramRenderer::new().render(&db).unwrap();
    assert!(output.contains("    Player ||--o{ Achievement : \"associated with\"\n"));
}

#[test]
fn test_achievement_example() {
    let db = parse(
        "2 - Achievement; A milestone\n- is a type of `Badge`\n- earned by completing Quest1 or Quest2",
    )
    .unwrap();
    let achievement = db.get_node("Achievement").unwrap();
    assert_eq!(achievement.parent.as_deref(), Some("Badge"));
    assert_eq!(achievement.kind, ConceptKind::SpecializedEntity);
    let targets: Vec<_> = achievement
        .relationships
        .iter()
        .map(|r| (r.target.as_str(), r.kind))
        .collect();
    assert_eq!(
        targets,
        vec![
            ("Quest1", RelationshipKind::EarnedBy),
            ("Quest2", RelationshipKind::EarnedBy),
        ]
    );

    let output = ErDiagramRenderer::new().render(&db).unwrap();
    assert!(output.contains("    Quest1 ||--o{ Achievement : \"earns\""));
    assert!(output.contains("    Quest2 ||--o{ Achievement : \"earns\""));
}

#[test]
fn test_repeated_name_matches_second_entry() {
    let both = parse("1 - Foo; old\n- has a size\n2 - Foo; new\n- shows the Map").unwrap();
    let second = parse("2 - Foo; new\n- shows the Map").unwrap();
    assert_eq!(both.node_count(), 1);
    assert_eq!(both.get_node("Foo"), second.get_node("Foo"));
}

#[test]
fn test_duplicate_association_rendered_once() {
    let input = "1 - A; a\n- associated with 1 `Widget`\n- associated with 1 `Widget`\n\
                 2 - B; b\n- associated with 1 `Widget`\n- associated with 1 `Widget`";
    let output = render(input).unwrap();
    assert_eq!(output.matches("A ||--|| Widget : \"associated with\"").count(), 1);
    assert_eq!(output.matches("B ||--|| Widget : \"associated with\"").count(), 1);
}

#[test]
fn test_glossary_presence() {
    let without = render("1 - A;\n2 - B;").unwrap();
    assert!(!without.contains("Ubiquitous Language"));

    let with = render("1 - A; described\n2 - B;").unwrap();
    assert_eq!(with.matches("## Ubiquitous Language").count(), 1);
    assert!(with.contains("- **A**: described"));
    assert!(!with.contains("- **B**"));
}

#[test]
fn test_render_with_config_diagram_only() {
    let output = render_with_config(GAME_INPUT, RenderConfig::diagram_only()).unwrap();
    assert!(output.ends_with("    }\n```"));
    assert!(!output.contains("Legend"));
}

#[test]
fn test_dangling_reference_rendered() {
    let db = parse("1 - Player; p\n- has `Quest Log`").unwrap();
    assert!(db.get_node("Quest Log").is_none());
    assert_eq!(db.dangling_targets(), vec!["Quest Log"]);
    let output = ErDiagramRenderer::new().render(&db).unwrap();
    assert!(output.contains("    Player ||--|| Quest_Log : \"has\""));
}
