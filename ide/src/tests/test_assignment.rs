use analyzer::{Dialect, Pos};
use evaluator::{EvalError, ExpressionEvaluator, Realm};

use crate::completion::assignment::last_assignment;
use crate::tests::hint_dsl::t;
use crate::{Buffer, HintOptions, javascript_hint};

#[test]
fn test_last_assignment_text() {
    assert_eq!(last_assignment("var x = 1; x = 'a';", "x"), Some(" 'a'"));
    assert_eq!(last_assignment("x=2", "x"), Some("2"));
    assert_eq!(last_assignment("if (x == 1) {}", "x"), None);
    assert_eq!(last_assignment("y = 1\n x == 1", "x"), Some(""));
    assert_eq!(last_assignment("var ax = 1", "x"), None);
    assert_eq!(last_assignment("var a = [1, 2]", "a"), Some(" [1"));
    assert_eq!(last_assignment("var $ = {}", "$"), Some(" {}"));
    assert_eq!(last_assignment("a.b = 1", "b"), None);
}

#[test]
fn test_inferred_type_selects_global_constructor() {
    t("var x = 5;\nx.$0")
        .expect_contains_labels(&["isInteger", "toFixed", "prototype"])
        .expect_order("isInteger", "toFixed")
        .expect_well_formed();
    t("var s = 'hi'; s.char$0").expect_labels(&["charAt", "charCodeAt"]);
    t("var d = new Date(); d.no$0").expect_labels(&["now"]);
    t("var o = {};\no.ke$0").expect_labels(&["keys"]);
}

#[test]
fn test_last_assignment_wins() {
    t("var x = 5;\nx = [];\nx.$0").expect_contains_labels(&["isArray", "push"]);
}

#[test]
fn test_inferred_type_without_global_is_empty() {
    t("var x = 5; x.$0").realm(Realm::new()).expect_empty();
}

#[test]
fn test_failed_evaluation_keeps_name() {
    // `compute` is not defined, so `Math` is looked up as written.
    t("var Math = compute(); Math.fl$0").expect_labels(&["floor"]);
    t("var x = 1 + 2; x.$0").expect_empty();
}

#[test]
fn test_deeply_nested_assignment_is_not_evaluated() {
    t(&format!("x = {}\nx.$0", "[".repeat(10_000))).expect_empty();
    t(&format!("x = {}\nx.$0", "!".repeat(1_000))).expect_empty();
    t(&format!("var Math = {}\nMath.fl$0", "!".repeat(1_000))).expect_labels(&["floor"]);
}

#[test]
fn test_locals_are_not_resolved_by_assignment() {
    t("function f() {\n  var n = 5;\n  n.$0\n}").expect_empty();
}

struct FixedTag(&'static str);

impl ExpressionEvaluator for FixedTag {
    fn type_tag(&self, _source: &str) -> Result<String, EvalError> {
        Ok(self.0.to_string())
    }
}

struct Refuse;

impl ExpressionEvaluator for Refuse {
    fn type_tag(&self, source: &str) -> Result<String, EvalError> {
        Err(EvalError::Unsupported(source.to_string()))
    }
}

#[test]
fn test_evaluator_is_pluggable() {
    let buffer =
        Buffer::new("var m = load(); m.fl", Dialect::JavaScript).with_cursor(Pos::new(0, 20));

    let math = FixedTag("Math");
    let options = HintOptions::new().evaluator(&math);
    let result = javascript_hint(&buffer, &options).unwrap();
    assert_eq!(result.list, ["floor"]);

    let options = HintOptions::new().evaluator(&Refuse);
    let result = javascript_hint(&buffer, &options).unwrap();
    assert!(result.list.is_empty());
}
