//! Editor-side tokenization for JavaScript and CoffeeScript.
//!
//! Pipeline: lex → mode styling → per-line tokens with scope state.
//! All spans are UTF-8 byte offsets into the original source, using `[start, end)`.
//! UTF-16 conversion for editors happens in `analyzer_wasm`.

mod diagnostics;
mod lexer;
mod mode;
mod source_map;
mod span;
mod tests;

pub use diagnostics::{Diagnostic, DiagnosticKind, format_diagnostics};
pub use lexer::{CommentKind, LexOutput, Lit, LitKind, Symbol, Token, TokenKind, lex};
pub use mode::{Dialect, Highlighted, ModeState, StyledToken, TokenStyle, highlight};
pub use source_map::SourceMap;
pub use span::{Pos, Span};
