//! Lexer tokens.
//!
//! [`Span`] uses UTF-8 byte offsets into the original source and is half-open `[start, end)`.
//! The lexer also emits a [`TokenKind::Eof`] token with an empty span at end of input.

pub use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub text: String,
}

impl Symbol {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    Bool,
    Null,
    Number,
    String,
    /// Backtick template (or CoffeeScript embedded JavaScript), substitutions included verbatim.
    Template,
    Regex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lit {
    pub kind: LitKind,
    /// Source text including quotes, slashes and flags.
    pub symbol: Symbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Line,
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /* Structural symbols */
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `;`
    Semi,
    /// `:`
    Colon,
    /// `?`
    Question,
    /// `@` (CoffeeScript `this`)
    At,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `=`
    Eq,
    /// `=>`
    FatArrow,
    /// Any other operator, longest match first (`===`, `+=`, `?.`, `...`).
    Operator(Symbol),

    /* Literals */
    Literal(Lit),
    Ident(Symbol),
    Keyword(Symbol),
    /// CoffeeScript `.name` member access lexed as one token.
    /// `Symbol` excludes the dot; the span includes it.
    Member(Symbol),

    Comment(CommentKind, Symbol),
    /// Newline trivia (`\n`).
    Newline,
    /// A character no rule accepts.
    Unknown(char),

    /// End Of File
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A token with its source span.
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source
            .get(self.span.start as usize..self.span.end as usize)
            .unwrap_or("")
    }

    /// True when a `/` right after this token starts a division rather than a regex literal.
    pub(crate) fn ends_operand(&self) -> bool {
        match &self.kind {
            TokenKind::Ident(_)
            | TokenKind::Member(_)
            | TokenKind::Literal(_)
            | TokenKind::CloseParen
            | TokenKind::CloseBracket
            | TokenKind::CloseBrace => true,
            TokenKind::Keyword(symbol) => matches!(symbol.text.as_str(), "this" | "super"),
            TokenKind::Operator(symbol) => matches!(symbol.text.as_str(), "++" | "--"),
            _ => false,
        }
    }
}

impl TokenKind {
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Comment(..) | TokenKind::Newline)
    }
}
