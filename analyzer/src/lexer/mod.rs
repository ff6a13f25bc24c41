use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::mode::Dialect;

mod token;

pub use token::{CommentKind, Lit, LitKind, Span, Symbol, Token, TokenKind};

pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

const JS_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "export",
    "extends",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

const COFFEE_KEYWORDS: &[&str] = &[
    "and",
    "break",
    "by",
    "catch",
    "class",
    "continue",
    "debugger",
    "delete",
    "do",
    "else",
    "extends",
    "finally",
    "for",
    "if",
    "in",
    "instanceof",
    "is",
    "isnt",
    "loop",
    "new",
    "not",
    "of",
    "or",
    "own",
    "return",
    "super",
    "switch",
    "then",
    "this",
    "throw",
    "try",
    "typeof",
    "unless",
    "until",
    "when",
    "while",
    "yield",
];

/// Operators other than the structural ones, longest first.
const OPERATORS: &[&str] = &[
    ">>>=", "...", "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=", "??=", "->", "==",
    "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=",
    "|=", "^=", "**", "<<", ">>", "..", "+", "-", "*", "/", "%", "<", ">", "!", "~", "&", "|",
    "^",
];

/// Lex `input` as `dialect`.
///
/// Never stops early: malformed input (unterminated strings/comments, stray characters) is
/// reported in `diagnostics` and lexing resumes after it, as an editor tokenizer must.
pub fn lex(input: &str, dialect: Dialect) -> LexOutput {
    let mut lexer = Lexer {
        src: input,
        pos: 0,
        dialect,
        tokens: Vec::new(),
        diagnostics: Diagnostics::default(),
    };
    lexer.run();

    lexer.tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span {
            start: input.len() as u32,
            end: input.len() as u32,
        },
    });

    LexOutput {
        tokens: lexer.tokens,
        diagnostics: lexer.diagnostics.diags,
    }
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    dialect: Dialect,
    tokens: Vec<Token>,
    diagnostics: Diagnostics,
}

impl<'a> Lexer<'a> {
    fn run(&mut self) {
        while let Some(ch) = self.peek() {
            let start = self.pos;

            // Skip spaces/tabs but keep newlines as trivia tokens.
            if matches!(ch, ' ' | '\t' | '\r' | '\u{feff}' | '\u{a0}') {
                self.bump();
                continue;
            }

            if ch == '\n' {
                self.bump();
                self.push(TokenKind::Newline, start);
                continue;
            }

            let kind = match ch {
                '#' if self.dialect == Dialect::CoffeeScript => self.coffee_comment(start),
                '/' if self.dialect == Dialect::JavaScript && self.peek_nth(1) == Some('/') => {
                    self.line_comment(start, 2)
                }
                '/' if self.dialect == Dialect::JavaScript && self.peek_nth(1) == Some('*') => {
                    self.block_comment(start, "/*", "*/")
                }
                '/' if self.regex_allowed() => match self.regex(start) {
                    Some(kind) => kind,
                    None => self.operator(start),
                },
                '"' | '\'' => self.string(start, ch),
                '`' => self.template(start),
                c if c.is_ascii_digit() => self.number(start),
                '.' if self.peek_nth(1).is_some_and(|c| c.is_ascii_digit())
                    && !self.after_dot() =>
                {
                    self.number(start)
                }
                '.' if self.dialect == Dialect::CoffeeScript
                    && self.peek_nth(1).is_some_and(is_ident_start)
                    && !self.after_dot() =>
                {
                    self.bump();
                    let name = self.ident_text();
                    TokenKind::Member(Symbol::new(name))
                }
                c if is_ident_start(c) => self.word(),
                '.' if !self.at_spread_or_range() => {
                    self.bump();
                    TokenKind::Dot
                }
                ',' => self.single(TokenKind::Comma),
                ';' => self.single(TokenKind::Semi),
                ':' => self.single(TokenKind::Colon),
                '@' => self.single(TokenKind::At),
                '(' => self.single(TokenKind::OpenParen),
                ')' => self.single(TokenKind::CloseParen),
                '[' => self.single(TokenKind::OpenBracket),
                ']' => self.single(TokenKind::CloseBracket),
                '{' => self.single(TokenKind::OpenBrace),
                '}' => self.single(TokenKind::CloseBrace),
                '=' if self.peek_nth(1) == Some('>') => {
                    self.bump();
                    self.bump();
                    TokenKind::FatArrow
                }
                '=' if self.peek_nth(1) != Some('=') => self.single(TokenKind::Eq),
                '?' if !matches!(self.peek_nth(1), Some('?' | '.')) => {
                    self.single(TokenKind::Question)
                }
                _ => self.operator(start),
            };

            self.push(kind, start);
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token {
            kind,
            span: Span {
                start: start as u32,
                end: self.pos as u32,
            },
        });
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.bump();
        kind
    }

    fn error(&mut self, start: usize, end: usize, message: impl Into<String>) {
        self.diagnostics
            .emit_error(Span::new(start as u32, end as u32), message);
    }

    fn last_significant(&self) -> Option<&Token> {
        self.tokens.iter().rev().find(|token| !token.is_trivia())
    }

    fn after_dot(&self) -> bool {
        self.tokens
            .last()
            .is_some_and(|token| token.kind == TokenKind::Dot && token.span.end as usize == self.pos)
    }

    fn at_spread_or_range(&self) -> bool {
        let rest = self.rest();
        rest.starts_with("...") || (self.dialect == Dialect::CoffeeScript && rest.starts_with(".."))
    }

    fn regex_allowed(&self) -> bool {
        !self.last_significant().is_some_and(Token::ends_operand)
    }

    fn operator(&mut self, start: usize) -> TokenKind {
        let rest = self.rest();
        let matched = OPERATORS
            .iter()
            .copied()
            .filter(|op| self.dialect == Dialect::CoffeeScript || !matches!(*op, "->" | ".."))
            .find(|op| rest.starts_with(op));

        match matched {
            Some(op) => {
                self.pos += op.len();
                TokenKind::Operator(Symbol::new(op))
            }
            None => {
                let ch = self.bump().unwrap_or('\0');
                self.error(start, self.pos, format!("unexpected char '{}'", ch));
                TokenKind::Unknown(ch)
            }
        }
    }

    fn line_comment(&mut self, start: usize, marker_len: usize) -> TokenKind {
        self.pos += marker_len;
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.bump();
        }
        let body = self.src[start + marker_len..self.pos].trim_end_matches('\r');
        TokenKind::Comment(CommentKind::Line, Symbol::new(body))
    }

    fn block_comment(&mut self, start: usize, open: &str, close: &str) -> TokenKind {
        self.pos += open.len();
        match self.rest().find(close) {
            Some(offset) => {
                let body = &self.src[self.pos..self.pos + offset];
                self.pos += offset + close.len();
                TokenKind::Comment(CommentKind::Block, Symbol::new(body))
            }
            None => {
                let body = self.rest();
                self.pos = self.src.len();
                self.error(start, self.pos, "unterminated block comment");
                TokenKind::Comment(CommentKind::Block, Symbol::new(body))
            }
        }
    }

    fn coffee_comment(&mut self, start: usize) -> TokenKind {
        if self.rest().starts_with("###") && !self.rest().starts_with("####") {
            self.block_comment(start, "###", "###")
        } else {
            self.line_comment(start, 1)
        }
    }

    fn string(&mut self, start: usize, quote: char) -> TokenKind {
        self.bump();
        let mut terminated = false;
        while let Some(ch) = self.peek() {
            match ch {
                '\\' => {
                    self.bump();
                    self.bump();
                }
                '\n' if self.dialect == Dialect::JavaScript => break,
                c if c == quote => {
                    self.bump();
                    terminated = true;
                    break;
                }
                _ => {
                    self.bump();
                }
            }
        }

        if !terminated {
            self.error(start, self.pos, "unterminated string literal");
        }

        TokenKind::Literal(Lit {
            kind: LitKind::String,
            symbol: Symbol::new(&self.src[start..self.pos]),
        })
    }

    fn template(&mut self, start: usize) -> TokenKind {
        self.bump();
        let mut terminated = false;
        while let Some(ch) = self.bump() {
            match ch {
                '\\' => {
                    self.bump();
                }
                '`' => {
                    terminated = true;
                    break;
                }
                _ => {}
            }
        }

        if !terminated {
            self.error(start, self.pos, "unterminated template literal");
        }

        TokenKind::Literal(Lit {
            kind: LitKind::Template,
            symbol: Symbol::new(&self.src[start..self.pos]),
        })
    }

    /// Scans `/.../flags`; returns `None` (consuming nothing) when the line ends first.
    fn regex(&mut self, start: usize) -> Option<TokenKind> {
        let mut chars = self.src[start + 1..].char_indices();
        let mut in_class = false;
        let mut body_end = None;
        while let Some((i, ch)) = chars.next() {
            match ch {
                '\\' => {
                    if matches!(chars.next(), None | Some((_, '\n'))) {
                        return None;
                    }
                }
                '\n' => return None,
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => {
                    body_end = Some(start + 1 + i + 1);
                    break;
                }
                _ => {}
            }
        }

        let mut end = body_end?;
        if end == start + 2 {
            // `//` is never an empty regex.
            return None;
        }
        end += self.src[end..]
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .map(char::len_utf8)
            .sum::<usize>();
        self.pos = end;

        Some(TokenKind::Literal(Lit {
            kind: LitKind::Regex,
            symbol: Symbol::new(&self.src[start..end]),
        }))
    }

    fn number(&mut self, start: usize) -> TokenKind {
        let first = self.bump().unwrap_or('0');

        if first == '0' && matches!(self.peek(), Some('x' | 'X' | 'o' | 'O' | 'b' | 'B')) {
            self.bump();
            self.eat_while(|c| c.is_ascii_hexdigit() || c == '_');
            self.eat_if('n');
        } else {
            if first != '.' {
                self.eat_while(|c| c.is_ascii_digit() || c == '_');
                if self.eat_if('n') {
                    return self.number_token(start);
                }
                let range_dots =
                    self.dialect == Dialect::CoffeeScript && self.rest().starts_with("..");
                if self.peek() == Some('.') && !range_dots {
                    self.bump();
                }
            }
            self.eat_while(|c| c.is_ascii_digit() || c == '_');
            self.exponent();
        }

        self.number_token(start)
    }

    fn exponent(&mut self) {
        let mut chars = self.rest().chars();
        if !matches!(chars.next(), Some('e' | 'E')) {
            return;
        }
        let mut len = 1;
        let mut next = chars.next();
        if matches!(next, Some('+' | '-')) {
            len += 1;
            next = chars.next();
        }
        if next.is_some_and(|c| c.is_ascii_digit()) {
            self.pos += len;
            self.eat_while(|c| c.is_ascii_digit() || c == '_');
        }
    }

    fn number_token(&self, start: usize) -> TokenKind {
        TokenKind::Literal(Lit {
            kind: LitKind::Number,
            symbol: Symbol::new(&self.src[start..self.pos]),
        })
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.bump();
        }
    }

    fn eat_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn ident_text(&mut self) -> String {
        let start = self.pos;
        if self.peek().is_some_and(is_ident_start) {
            self.bump();
            self.eat_while(is_ident_continue);
        }
        self.src[start..self.pos].to_string()
    }

    fn word(&mut self) -> TokenKind {
        let ident = self.ident_text();
        let keywords = match self.dialect {
            Dialect::JavaScript => JS_KEYWORDS,
            Dialect::CoffeeScript => COFFEE_KEYWORDS,
        };

        let lit = |kind| {
            TokenKind::Literal(Lit {
                kind,
                symbol: Symbol::new(ident.as_str()),
            })
        };

        match (self.dialect, ident.as_str()) {
            (_, "true" | "false") => lit(LitKind::Bool),
            (Dialect::CoffeeScript, "yes" | "no" | "on" | "off") => lit(LitKind::Bool),
            (_, "null") => lit(LitKind::Null),
            (_, word) if keywords.contains(&word) => TokenKind::Keyword(Symbol::new(word)),
            _ => TokenKind::Ident(Symbol::new(ident.as_str())),
        }
    }
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_ascii_alphabetic() || (!c.is_ascii() && c.is_alphabetic())
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit() || (!c.is_ascii() && c.is_alphanumeric())
}
