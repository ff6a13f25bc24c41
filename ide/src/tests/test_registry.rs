use analyzer::{Dialect, Pos, TokenStyle};
use serde_json::json;

use crate::tests::hint_dsl::{coffee, t};
use crate::{
    Buffer, Editor, EditorType, HintOptions, HintRegistry, HintResult, Picked, coffeescript_token,
    javascript_hint,
};

// ----------------------------
// Registry
// ----------------------------

#[test]
fn test_default_modes() {
    let registry = HintRegistry::default();
    assert_eq!(
        registry.modes().collect::<Vec<_>>(),
        ["javascript", "coffeescript"]
    );
    assert_eq!(format!("{registry:?}"), r#"["javascript", "coffeescript"]"#);
    assert!(HintRegistry::empty().get("javascript").is_none());
}

#[test]
fn test_unknown_mode_has_no_hints() {
    let buffer = Buffer::new("Math.fl", Dialect::JavaScript).with_cursor(Pos::new(0, 7));
    let registry = HintRegistry::default();
    assert!(registry.hint("python", &buffer, &HintOptions::default()).is_none());
    assert!(registry.hint("javascript", &buffer, &HintOptions::default()).is_some());
}

fn fixed(_editor: &dyn Editor, _options: &HintOptions<'_>) -> Option<HintResult> {
    Some(HintResult {
        list: vec!["fixed".to_string()],
        from: Pos::default(),
        to: Pos::default(),
    })
}

#[test]
fn test_register_replaces_helper() {
    let buffer = Buffer::new("x", Dialect::JavaScript).with_cursor(Pos::new(0, 1));
    let mut registry = HintRegistry::default();
    registry.register("javascript", fixed);
    registry.register("json", fixed);

    let result = registry.hint("javascript", &buffer, &HintOptions::default());
    assert_eq!(result.map(|r| r.list), Some(vec!["fixed".to_string()]));
    assert_eq!(registry.modes().count(), 3);
}

#[test]
fn test_editor_type_names() {
    assert_eq!(EditorType::from_name("vue"), Some(EditorType::Vue));
    assert_eq!(EditorType::from_name("angular"), None);
    assert_eq!(EditorType::React.name(), "react");
    let parsed: EditorType = serde_json::from_str(r#""regular""#).unwrap();
    assert_eq!(parsed, EditorType::Regular);
}

// ----------------------------
// CoffeeScript
// ----------------------------

#[test]
fn test_coffee_token_adapter() {
    let buffer = Buffer::new("a.bc", Dialect::CoffeeScript);

    let stripped = coffeescript_token(&buffer, Pos::new(0, 4));
    assert_eq!((stripped.start, stripped.end), (2, 4));
    assert_eq!(stripped.string, "bc");
    assert_eq!(stripped.style, Some(TokenStyle::Property));

    let dot = coffeescript_token(&buffer, Pos::new(0, 2));
    assert_eq!((dot.start, dot.end), (1, 1));
    assert_eq!(dot.string, ".");

    let plain = coffeescript_token(&buffer, Pos::new(0, 1));
    assert_eq!(plain.string, "a");
    assert_eq!(plain.style, Some(TokenStyle::Variable));
}

#[test]
fn test_coffee_member_completion() {
    coffee("x = 'hi'\nx.toU$0")
        .expect_labels(&["toUpperCase"])
        .expect_range(2, 5);
    coffee("Math.fl$0").expect_labels(&["floor"]);
}

#[test]
fn test_coffee_trailing_dot() {
    coffee("s = 'a'\ns.$0")
        .expect_contains_labels(&["charAt", "length"])
        .expect_range(2, 2)
        .expect_well_formed();
}

#[test]
fn test_coffee_this_member_has_no_chain() {
    coffee("@na$0").expect_none();
    coffee("# Math.$0").expect_none();
}

// ----------------------------
// Results
// ----------------------------

#[test]
fn test_pick_replaces_partial_word() {
    let source = "var a;\nMath.fl";
    let buffer = Buffer::new(source, Dialect::JavaScript).with_cursor(Pos::new(1, 7));
    let result = javascript_hint(&buffer, &HintOptions::default()).unwrap();

    assert_eq!(
        result.pick(source, 0),
        Some(Picked {
            text: "var a;\nMath.floor".to_string(),
            cursor: Pos::new(1, 10),
        })
    );
    assert_eq!(result.pick(source, 1), None);
}

#[test]
fn test_result_serializes_positions() {
    let source = "var a;\nMath.fl";
    let buffer = Buffer::new(source, Dialect::JavaScript).with_cursor(Pos::new(1, 7));
    let result = javascript_hint(&buffer, &HintOptions::default()).unwrap();

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "list": ["floor"],
            "from": { "line": 1, "ch": 5 },
            "to": { "line": 1, "ch": 7 },
        })
    );
}

#[test]
fn test_buffer_edits_rehighlight() {
    let mut buffer = Buffer::new("Math.fl", Dialect::JavaScript).with_cursor(Pos::new(0, 7));
    let before = javascript_hint(&buffer, &HintOptions::default()).unwrap();
    assert_eq!(before.list, ["floor"]);

    buffer.set_value("JSON.st");
    assert_eq!(buffer.value(), "JSON.st");
    let after = javascript_hint(&buffer, &HintOptions::default()).unwrap();
    assert_eq!(after.list, ["stringify"]);
    assert_eq!(buffer.dialect(), Dialect::JavaScript);

    buffer.set_cursor(Pos::new(0, 5));
    let moved = javascript_hint(&buffer, &HintOptions::default()).unwrap();
    assert_eq!(moved.list, ["parse", "stringify"]);
    assert_eq!((moved.from, moved.to), (Pos::new(0, 5), Pos::new(0, 5)));
}

#[test]
fn test_mid_word_range_excludes_suffix() {
    t("Math.fl$0oor").expect_labels(&["floor"]).expect_range(5, 7);
}
