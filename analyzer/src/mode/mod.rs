//! Editor modes: per-line styled tokens with scope state.
//!
//! A [`Highlighted`] buffer answers `token_at(Pos)` the way a host editor does, so the
//! completion core can re-tokenize at arbitrary earlier positions of the same snapshot.
//! Columns are byte offsets within a line.

use std::rc::Rc;

use crate::diagnostics::Diagnostic;
use crate::lexer::{Span, Token, TokenKind, lex};
use crate::source_map::SourceMap;
use crate::span::Pos;

mod coffeescript;
mod javascript;
mod state;
mod style;

pub use state::ModeState;
pub use style::TokenStyle;

/// Language dialect selecting the tokenizer rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    #[default]
    JavaScript,
    CoffeeScript,
}

impl Dialect {
    /// Mode name used for helper registration.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::JavaScript => "javascript",
            Dialect::CoffeeScript => "coffeescript",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "javascript" | "js" => Some(Dialect::JavaScript),
            "coffeescript" | "coffee" => Some(Dialect::CoffeeScript),
            _ => None,
        }
    }
}

/// One token of one line, as an editor reports it.
///
/// `start`/`end` are byte columns within the line; `string` is the covered text.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledToken {
    pub start: u32,
    pub end: u32,
    pub string: String,
    pub style: Option<TokenStyle>,
    pub state: Rc<ModeState>,
}

impl StyledToken {
    /// Zero-width unstyled token at column `ch`.
    pub fn empty(ch: u32, state: Rc<ModeState>) -> Self {
        Self {
            start: ch,
            end: ch,
            string: String::new(),
            style: None,
            state,
        }
    }
}

/// A token span with its style, before it is cut into lines.
pub(crate) struct Styled {
    pub(crate) span: Span,
    pub(crate) style: Option<TokenStyle>,
    pub(crate) state: Rc<ModeState>,
}

#[derive(Debug, Clone)]
struct LineTokens {
    tokens: Vec<StyledToken>,
    start_state: Rc<ModeState>,
}

/// Styled tokens for every line of a buffer snapshot.
#[derive(Debug, Clone)]
pub struct Highlighted {
    lines: Vec<LineTokens>,
    diagnostics: Vec<Diagnostic>,
}

/// Tokenizes and styles `source` as `dialect`.
pub fn highlight(source: &str, dialect: Dialect) -> Highlighted {
    let lexed = lex(source, dialect);
    let styled = match dialect {
        Dialect::JavaScript => javascript::style_tokens(source, &lexed.tokens),
        Dialect::CoffeeScript => coffeescript::style_tokens(source, &lexed.tokens),
    };

    Highlighted {
        lines: split_lines(source, &styled),
        diagnostics: lexed.diagnostics,
    }
}

impl Highlighted {
    /// Returns the token at `pos` following the host-editor contract:
    /// - column 0 yields an empty unstyled token;
    /// - otherwise the first token whose end is at or past the column;
    /// - past the end of the line, the line's last token.
    pub fn token_at(&self, pos: Pos) -> StyledToken {
        let Some(line) = self.lines.get(pos.line as usize) else {
            return StyledToken::empty(0, Rc::default());
        };

        if pos.ch == 0 {
            return StyledToken::empty(0, Rc::clone(&line.start_state));
        }

        line.tokens
            .iter()
            .find(|token| token.end >= pos.ch)
            .or_else(|| line.tokens.last())
            .cloned()
            .unwrap_or_else(|| StyledToken::empty(0, Rc::clone(&line.start_state)))
    }

    pub fn line_tokens(&self, line: u32) -> &[StyledToken] {
        self.lines
            .get(line as usize)
            .map(|line| line.tokens.as_slice())
            .unwrap_or_default()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Cuts styled spans into per-line tokens, filling gaps with unstyled whitespace tokens.
fn split_lines(source: &str, styled: &[Styled]) -> Vec<LineTokens> {
    let sm = SourceMap::new(source);
    let mut lines = Vec::with_capacity(sm.line_count());
    let mut first = 0usize;
    let mut state: Rc<ModeState> = Rc::default();

    for line in 0..sm.line_count() as u32 {
        let (Some(line_start), Some(text)) = (sm.line_start(line), sm.line_text(line)) else {
            continue;
        };
        let line_end = line_start + text.len() as u32;
        let start_state = Rc::clone(&state);
        let mut tokens = Vec::new();
        let mut col = line_start;

        while first < styled.len() && styled[first].span.end <= line_start {
            first += 1;
        }

        for item in styled[first..].iter() {
            if item.span.start >= line_end {
                break;
            }
            if item.span.end <= line_start {
                continue;
            }
            let seg_start = u32::max(item.span.start, line_start);
            let seg_end = u32::min(item.span.end, line_end);
            if seg_start > col {
                tokens.push(gap(source, line_start, col, seg_start, &state));
            }
            tokens.push(StyledToken {
                start: seg_start - line_start,
                end: seg_end - line_start,
                string: slice(source, seg_start, seg_end).to_string(),
                style: item.style,
                state: Rc::clone(&item.state),
            });
            state = Rc::clone(&item.state);
            col = seg_end;
        }

        if col < line_end {
            tokens.push(gap(source, line_start, col, line_end, &state));
        }

        lines.push(LineTokens {
            tokens,
            start_state,
        });
    }

    lines
}

fn gap(source: &str, line_start: u32, from: u32, to: u32, state: &Rc<ModeState>) -> StyledToken {
    StyledToken {
        start: from - line_start,
        end: to - line_start,
        string: slice(source, from, to).to_string(),
        style: None,
        state: Rc::clone(state),
    }
}

fn slice(source: &str, start: u32, end: u32) -> &str {
    source.get(start as usize..end as usize).unwrap_or("")
}

/// The nearest non-trivia token before index `idx`.
pub(crate) fn prev_significant(tokens: &[Token], idx: usize) -> Option<&Token> {
    tokens[..idx].iter().rev().find(|token| !token.is_trivia())
}

pub(crate) fn is_dot(token: Option<&Token>) -> bool {
    matches!(token.map(|token| &token.kind), Some(TokenKind::Dot))
}
