use std::rc::Rc;

use analyzer::{ModeState, Pos, StyledToken, TokenStyle};

use crate::completion::{classify, is_word};
use crate::tests::hint_dsl::t;

fn token(start: u32, string: &str, style: Option<TokenStyle>) -> StyledToken {
    StyledToken {
        start,
        end: start + string.len() as u32,
        string: string.to_string(),
        style,
        state: Rc::default(),
    }
}

#[test]
fn test_word_shape() {
    assert!(is_word(""));
    assert!(is_word("$el"));
    assert!(is_word("_a1"));
    assert!(!is_word("."));
    assert!(!is_word(" "));
    assert!(!is_word("é"));
}

#[test]
fn test_strings_and_comments_are_skipped() {
    let cursor = Pos::new(0, 2);
    for style in [TokenStyle::String, TokenStyle::String2, TokenStyle::Comment] {
        assert_eq!(classify(token(0, "'ab'", Some(style)), cursor), None);
    }
}

#[test]
fn test_non_word_token_becomes_empty_at_cursor() {
    let dot = classify(token(3, ".", None), Pos::new(0, 4)).unwrap();
    assert_eq!((dot.start, dot.end, dot.string.as_str()), (4, 4, ""));
    assert_eq!(dot.style, Some(TokenStyle::Property));

    let paren = classify(token(3, "(", None), Pos::new(0, 4)).unwrap();
    assert_eq!((paren.start, paren.end), (4, 4));
    assert_eq!(paren.style, None);
}

#[test]
fn test_word_is_truncated_at_cursor() {
    let word = classify(token(2, "document", Some(TokenStyle::Variable)), Pos::new(0, 5)).unwrap();
    assert_eq!((word.start, word.end, word.string.as_str()), (2, 5, "doc"));

    let whole = classify(token(2, "doc", Some(TokenStyle::Variable)), Pos::new(0, 5)).unwrap();
    assert_eq!(whole.string, "doc");
}

#[test]
fn test_state_is_unwrapped_to_innermost() {
    let outer = ModeState::default().with_inner(ModeState::new(vec!["inner".into()], vec![]));
    let mut tok = token(0, "in", Some(TokenStyle::Variable));
    tok.state = Rc::new(outer);

    let classified = classify(tok, Pos::new(0, 2)).unwrap();
    assert_eq!(classified.state.local_vars, ["inner"]);
    assert!(classified.state.inner.is_none());
}

#[test]
fn test_hint_is_none_inside_strings_and_comments() {
    t("var s = \"do$0c\";").expect_none();
    t("// document.$0").expect_none();
    t("/* win$0 */").expect_none();
    t("var s = `a.$0`;").expect_none();
}

#[test]
fn test_cursor_mid_word_replaces_prefix_only() {
    t("docu$0ment")
        .expect_contains_labels(&["document"])
        .expect_range(0, 4)
        .expect_well_formed();
}
