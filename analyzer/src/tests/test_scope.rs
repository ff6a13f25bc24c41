use insta::assert_snapshot;

use super::common::{coffee, js, render_line, trim_indent};
use crate::{ModeState, Pos, TokenStyle};

fn vars(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_function_scope_locals() {
    let source = trim_indent(
        r#"
        function f(a, b) {
          var c = a;
          c.
        }"#,
    );
    let hl = js(&source);

    assert_snapshot!(render_line(&hl, 1), @"_ var:keyword _ c:def _ =:operator _ a:variable-2 ;");

    let dot = hl.token_at(Pos::new(2, 4));
    assert_eq!(dot.string, ".");
    assert_eq!(dot.state.local_vars, vars(&["c", "b", "a"]));
    assert_eq!(dot.state.global_vars, vars(&["f"]));

    let c = hl.token_at(Pos::new(2, 3));
    assert_eq!(c.style, Some(TokenStyle::Variable2));

    let close = hl.token_at(Pos::new(3, 1));
    assert!(close.state.local_vars.is_empty());
    assert_eq!(close.state.global_vars, vars(&["f"]));
}

#[test]
fn test_line_start_state_is_previous_line_end() {
    let hl = js("function f(a) {\n  a.\n}");
    let start = hl.token_at(Pos::new(1, 0));
    assert_eq!(start.string, "");
    assert_eq!(start.state.local_vars, vars(&["a"]));
}

#[test]
fn test_declaration_lists() {
    let hl = js("let a = 1, b = [1, 2], c");
    let last = hl.token_at(Pos::new(0, 99));
    assert_eq!(last.string, "c");
    assert_eq!(last.style, Some(TokenStyle::Def));
    assert_eq!(last.state.global_vars, vars(&["c", "b", "a"]));
}

#[test]
fn test_declaration_continues_after_operator() {
    let hl = js("var a = 1 +\n  2, b");
    let last = hl.token_at(Pos::new(1, 99));
    assert_eq!(last.style, Some(TokenStyle::Def));
    assert_eq!(last.state.global_vars, vars(&["b", "a"]));

    let hl = js("var a = 1\nb");
    let last = hl.token_at(Pos::new(1, 99));
    assert_eq!(last.style, Some(TokenStyle::Variable));
    assert_eq!(last.state.global_vars, vars(&["a"]));
}

#[test]
fn test_nested_functions() {
    let source = "function outer(x) { function inner(y) { y } x }";
    let hl = js(source);

    let y = hl.token_at(Pos::new(0, 41));
    assert_eq!(y.string, "y");
    assert_eq!(y.style, Some(TokenStyle::Variable2));
    assert_eq!(y.state.local_vars, vars(&["y", "inner", "x"]));

    let x = hl.token_at(Pos::new(0, 45));
    assert_eq!(x.string, "x");
    assert_eq!(x.style, Some(TokenStyle::Variable2));
    assert_eq!(x.state.local_vars, vars(&["inner", "x"]));
    assert_eq!(x.state.global_vars, vars(&["outer"]));
}

#[test]
fn test_object_literal_braces_do_not_close_scope() {
    let hl = js("function f(o) { var p = { q: 1 }; o }");
    let o = hl.token_at(Pos::new(0, 35));
    assert_eq!(o.string, "o");
    assert_eq!(o.style, Some(TokenStyle::Variable2));
    assert_eq!(o.state.local_vars, vars(&["p", "o"]));
}

#[test]
fn test_default_parameter_values_are_not_params() {
    let hl = js("function f(a = b, c) {}");
    let b = hl.token_at(Pos::new(0, 16));
    assert_eq!(b.string, "b");
    assert_eq!(b.style, Some(TokenStyle::Variable));
    assert_eq!(b.state.local_vars, vars(&["a"]));
}

#[test]
fn test_property_after_dot_is_not_declared() {
    let hl = js("var a = x.y");
    let y = hl.token_at(Pos::new(0, 11));
    assert_eq!(y.style, Some(TokenStyle::Property));
    assert_eq!(y.state.global_vars, vars(&["a"]));
}

#[test]
fn test_coffee_has_no_scope() {
    let hl = coffee("a = 1\na.");
    let dot = hl.token_at(Pos::new(1, 2));
    assert_eq!(*dot.state, ModeState::default());
}

#[test]
fn test_innermost_state() {
    let state = ModeState::new(vars(&["outer"]), vec![])
        .with_inner(ModeState::new(vars(&["inner"]), vars(&["g"])));
    assert_eq!(state.innermost().local_vars, vars(&["inner"]));
    assert_eq!(state.innermost().global_vars, vars(&["g"]));
}
