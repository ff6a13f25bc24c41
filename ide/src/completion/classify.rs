//! Token classification at the cursor.

use std::rc::Rc;

use analyzer::{Pos, StyledToken, TokenStyle};

/// Normalizes the token under the cursor into the partial word being completed.
///
/// Returns `None` inside strings and comments. Non-word tokens become a zero-width token at the
/// cursor, styled `property` when the token was a lone `.`.
pub(crate) fn classify(mut token: StyledToken, cursor: Pos) -> Option<StyledToken> {
    if token.style.is_some_and(TokenStyle::is_string_or_comment) {
        return None;
    }

    if token.state.inner.is_some() {
        token.state = Rc::new(token.state.innermost().clone());
    }

    if !is_word(&token.string) {
        let style = (token.string == ".").then_some(TokenStyle::Property);
        return Some(StyledToken {
            start: cursor.ch,
            end: cursor.ch,
            string: String::new(),
            style,
            state: token.state,
        });
    }

    if token.end > cursor.ch {
        let keep = cursor.ch.saturating_sub(token.start) as usize;
        token.end = cursor.ch;
        token.string.truncate(keep);
    }

    Some(token)
}

/// `^[A-Za-z0-9_$]*$`
pub(crate) fn is_word(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
