//! CoffeeScript mode. Styles only; no scope tracking, so every token carries the empty state.

use std::rc::Rc;

use super::{ModeState, Styled, TokenStyle, is_dot};
use crate::lexer::{LitKind, Token, TokenKind};

const ATOMS: &[&str] = &["undefined", "NaN", "Infinity"];

pub(crate) fn style_tokens(_source: &str, tokens: &[Token]) -> Vec<Styled> {
    let state: Rc<ModeState> = Rc::default();
    let mut out = Vec::with_capacity(tokens.len());
    let mut prev: Option<&Token> = None;

    for token in tokens {
        if matches!(token.kind, TokenKind::Newline | TokenKind::Eof) {
            continue;
        }
        let style = style_of(token, prev);
        out.push(Styled {
            span: token.span,
            style,
            state: Rc::clone(&state),
        });
        if !token.is_trivia() {
            prev = Some(token);
        }
    }

    out
}

fn style_of(token: &Token, prev: Option<&Token>) -> Option<TokenStyle> {
    match &token.kind {
        TokenKind::Comment(..) => Some(TokenStyle::Comment),
        TokenKind::Keyword(_) => Some(TokenStyle::Keyword),
        TokenKind::Member(_) => Some(TokenStyle::Property),
        TokenKind::At => Some(TokenStyle::Variable2),
        TokenKind::Ident(symbol) => {
            let after_at = prev.is_some_and(|prev| {
                prev.kind == TokenKind::At && prev.span.end == token.span.start
            });
            if after_at || is_dot(prev) {
                Some(TokenStyle::Property)
            } else if ATOMS.contains(&symbol.text.as_str()) {
                Some(TokenStyle::Atom)
            } else {
                Some(TokenStyle::Variable)
            }
        }
        TokenKind::Literal(lit) => Some(match lit.kind {
            LitKind::Bool | LitKind::Null => TokenStyle::Atom,
            LitKind::Number => TokenStyle::Number,
            LitKind::String => TokenStyle::String,
            LitKind::Template | LitKind::Regex => TokenStyle::String2,
        }),
        TokenKind::Operator(_) | TokenKind::Eq | TokenKind::FatArrow => Some(TokenStyle::Operator),
        TokenKind::Dot
        | TokenKind::Comma
        | TokenKind::Semi
        | TokenKind::Colon
        | TokenKind::Question
        | TokenKind::OpenParen
        | TokenKind::CloseParen
        | TokenKind::OpenBracket
        | TokenKind::CloseBracket
        | TokenKind::OpenBrace
        | TokenKind::CloseBrace
        | TokenKind::Unknown(_)
        | TokenKind::Newline
        | TokenKind::Eof => None,
    }
}
