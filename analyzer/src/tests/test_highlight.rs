use insta::assert_snapshot;

use super::common::{coffee, js, render_line, token_at_marker};
use crate::{Dialect, Pos, TokenStyle};

#[test]
fn test_render_declaration_line() {
    let hl = js("var x = 5; x.");
    assert_snapshot!(render_line(&hl, 0), @"var:keyword _ x:def _ =:operator _ 5:number ; _ x:variable .");
}

#[test]
fn test_column_zero_is_empty() {
    let hl = js("abc");
    let token = hl.token_at(Pos::new(0, 0));
    assert_eq!(token.string, "");
    assert_eq!((token.start, token.end), (0, 0));
    assert_eq!(token.style, None);
}

#[test]
fn test_token_ending_at_cursor_wins() {
    let token = token_at_marker("x.$0foo", Dialect::JavaScript);
    assert_eq!(token.string, ".");
    assert_eq!((token.start, token.end), (1, 2));

    let token = token_at_marker("x.fo$0o", Dialect::JavaScript);
    assert_eq!(token.string, "foo");
    assert_eq!(token.style, Some(TokenStyle::Property));
    assert_eq!((token.start, token.end), (2, 5));
}

#[test]
fn test_past_line_end_yields_last_token() {
    let hl = js("x.foo\nbar");
    let token = hl.token_at(Pos::new(0, 99));
    assert_eq!(token.string, "foo");
}

#[test]
fn test_whitespace_is_unstyled() {
    let token = token_at_marker("a  $0b", Dialect::JavaScript);
    assert_eq!(token.string, "  ");
    assert_eq!(token.style, None);
    assert_eq!((token.start, token.end), (1, 3));
}

#[test]
fn test_literal_styles() {
    let hl = js(r#"/r/ "s" `t` 1 null true undefined // c"#);
    assert_snapshot!(
        render_line(&hl, 0),
        @r#"/r/:string-2 _ "s":string _ `t`:string-2 _ 1:number _ null:atom _ true:atom _ undefined:atom _ // c:comment"#
    );
}

#[test]
fn test_library_entry_points_styled_as_function() {
    let hl = js("$('#x'); jQuery; _.map; $el");
    let styles: Vec<_> = hl
        .line_tokens(0)
        .iter()
        .filter(|t| t.style.is_some_and(TokenStyle::is_variable) || t.style == Some(TokenStyle::Function))
        .map(|t| (t.string.as_str(), t.style))
        .collect();
    assert_eq!(
        styles,
        vec![
            ("$", Some(TokenStyle::Function)),
            ("jQuery", Some(TokenStyle::Function)),
            ("_", Some(TokenStyle::Function)),
            ("$el", Some(TokenStyle::Variable)),
        ]
    );
}

#[test]
fn test_declared_library_name_is_a_variable() {
    let hl = js("var $ = 1; $");
    let last = hl.token_at(Pos::new(0, 12));
    assert_eq!(last.string, "$");
    assert_eq!(last.style, Some(TokenStyle::Variable));
}

#[test]
fn test_multiline_block_comment_spans_lines() {
    let hl = js("/* a\nb */ x");
    assert_eq!(render_line(&hl, 0), "/* a:comment");
    assert_eq!(render_line(&hl, 1), "b */:comment _ x:variable");
}

#[test]
fn test_coffee_this_member() {
    let hl = coffee("@name.first");
    assert_snapshot!(render_line(&hl, 0), @"@:variable-2 name:property .first:property");
}

#[test]
fn test_coffee_trailing_dot() {
    let token = token_at_marker("a.$0", Dialect::CoffeeScript);
    assert_eq!(token.string, ".");
    assert_eq!(token.style, None);
}

#[test]
fn test_style_names_round_trip() {
    for style in [
        TokenStyle::Variable,
        TokenStyle::Variable2,
        TokenStyle::Def,
        TokenStyle::Property,
        TokenStyle::String2,
        TokenStyle::Function,
    ] {
        assert_eq!(TokenStyle::from_name(style.as_str()), Some(style));
    }
    assert!(TokenStyle::Variable2.is_variable());
    assert!(!TokenStyle::Def.is_variable());
    assert!(TokenStyle::String2.is_string_or_comment());
}

#[test]
fn test_lexer_diagnostics_are_kept() {
    let hl = js("'open");
    assert_eq!(hl.diagnostics().len(), 1);
    assert_eq!(hl.line_count(), 1);
}
