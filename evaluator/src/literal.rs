//! Sandboxed evaluation of literal expressions.
//!
//! Accepted: primitives, template literals without substitutions, regex literals, array and
//! object literals, grouping, unary `- + ! ~ void typeof`, and `new` of known constructors with
//! literal arguments. Identifiers other than `undefined`, `NaN` and `Infinity` are reference
//! errors; everything else is rejected. Nothing is ever executed.

use analyzer::{Dialect, LitKind, Token, TokenKind, lex};
use indexmap::IndexMap;

use crate::error::EvalError;

/// Infers the runtime category of an expression's value.
pub trait ExpressionEvaluator: Send + Sync {
    /// `Object.prototype.toString` class name of the value `source` evaluates to.
    fn type_tag(&self, source: &str) -> Result<String, EvalError>;
}

/// The value of a literal expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    BigInt,
    String(String),
    RegExp(String),
    Array(Vec<Literal>),
    Object(IndexMap<String, Literal>),
    /// `new C(...)`, holding the class of the constructed object.
    Instance(&'static str),
}

impl Literal {
    pub fn class_name(&self) -> &'static str {
        match self {
            Literal::Undefined => "Undefined",
            Literal::Null => "Null",
            Literal::Boolean(_) => "Boolean",
            Literal::Number(_) => "Number",
            Literal::BigInt => "BigInt",
            Literal::String(_) => "String",
            Literal::RegExp(_) => "RegExp",
            Literal::Array(_) => "Array",
            Literal::Object(_) => "Object",
            Literal::Instance(class) => *class,
        }
    }

    fn type_of(&self) -> &'static str {
        match self {
            Literal::Undefined => "undefined",
            Literal::Boolean(_) => "boolean",
            Literal::Number(_) => "number",
            Literal::BigInt => "bigint",
            Literal::String(_) => "string",
            Literal::Instance("Function") => "function",
            Literal::Null
            | Literal::RegExp(_)
            | Literal::Array(_)
            | Literal::Object(_)
            | Literal::Instance(_) => "object",
        }
    }

    fn is_truthy(&self) -> bool {
        match self {
            Literal::Undefined | Literal::Null => false,
            Literal::Boolean(b) => *b,
            Literal::Number(n) => *n != 0.0 && !n.is_nan(),
            Literal::String(s) => !s.is_empty(),
            Literal::BigInt
            | Literal::RegExp(_)
            | Literal::Array(_)
            | Literal::Object(_)
            | Literal::Instance(_) => true,
        }
    }

    fn to_number(&self) -> f64 {
        match self {
            Literal::Null => 0.0,
            Literal::Boolean(b) => f64::from(u8::from(*b)),
            Literal::Number(n) => *n,
            Literal::String(s) if s.trim().is_empty() => 0.0,
            Literal::String(s) => s.trim().parse().unwrap_or(f64::NAN),
            Literal::Array(items) if items.is_empty() => 0.0,
            _ => f64::NAN,
        }
    }
}

/// Constructors `new` accepts, with the class of the object they build.
const CONSTRUCTORS: &[(&str, &str)] = &[
    ("Object", "Object"),
    ("Array", "Array"),
    ("String", "String"),
    ("Number", "Number"),
    ("Boolean", "Boolean"),
    ("Date", "Date"),
    ("RegExp", "RegExp"),
    ("Function", "Function"),
    ("Map", "Map"),
    ("Set", "Set"),
    ("WeakMap", "WeakMap"),
    ("WeakSet", "WeakSet"),
    ("ArrayBuffer", "ArrayBuffer"),
    ("Error", "Error"),
    ("TypeError", "Error"),
    ("RangeError", "Error"),
    ("SyntaxError", "Error"),
    ("ReferenceError", "Error"),
    ("EvalError", "Error"),
    ("URIError", "Error"),
];

/// Known globals that cannot be used with `new`.
const NON_CONSTRUCTORS: &[&str] = &["Math", "JSON", "Symbol", "BigInt", "console", "Reflect"];

/// The default [`ExpressionEvaluator`]: parses, never executes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralEvaluator;

impl LiteralEvaluator {
    pub fn evaluate(&self, source: &str) -> Result<Literal, EvalError> {
        let lexed = lex(source, Dialect::JavaScript);
        if let Some(diag) = lexed.diagnostics.first() {
            return Err(EvalError::Syntax(diag.message.clone()));
        }

        let tokens: Vec<Token> = lexed
            .tokens
            .into_iter()
            .filter(|token| !token.is_trivia())
            .collect();
        let mut parser = Parser {
            source,
            tokens,
            pos: 0,
            depth: 0,
        };

        // Blank input evaluates to `undefined`.
        if parser.at(&TokenKind::Eof) {
            return Ok(Literal::Undefined);
        }

        let value = parser.expr()?;
        if !parser.at(&TokenKind::Eof) {
            return Err(parser.unexpected());
        }
        Ok(value)
    }
}

impl ExpressionEvaluator for LiteralEvaluator {
    fn type_tag(&self, source: &str) -> Result<String, EvalError> {
        self.evaluate(source)
            .map(|value| value.class_name().to_string())
    }
}

/// Nesting bound for operators, groups, arrays and objects.
const MAX_DEPTH: usize = 64;

struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> &TokenKind {
        self.tokens
            .get(self.pos)
            .map(|token| &token.kind)
            .unwrap_or(&TokenKind::Eof)
    }

    fn at(&self, kind: &TokenKind) -> bool {
        self.peek() == kind
    }

    fn bump(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), EvalError> {
        if self.at(&kind) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> EvalError {
        match self.tokens.get(self.pos) {
            Some(token) if token.kind != TokenKind::Eof => EvalError::Syntax(format!(
                "unexpected token `{}`",
                token.text(self.source)
            )),
            _ => EvalError::Syntax("unexpected end of input".to_string()),
        }
    }

    fn expr(&mut self) -> Result<Literal, EvalError> {
        if self.depth >= MAX_DEPTH {
            return Err(EvalError::Unsupported("nesting too deep".to_string()));
        }
        self.depth += 1;
        let value = self.unary();
        self.depth -= 1;
        value
    }

    fn unary(&mut self) -> Result<Literal, EvalError> {
        match self.peek().clone() {
            TokenKind::Operator(op) => {
                self.bump();
                let operand = self.expr()?;
                match (op.text.as_str(), operand) {
                    ("-", Literal::BigInt) => Ok(Literal::BigInt),
                    ("+", Literal::BigInt) => Err(EvalError::Construct(
                        "Cannot convert a BigInt value to a number".to_string(),
                    )),
                    ("-", operand) => Ok(Literal::Number(-operand.to_number())),
                    ("+", operand) => Ok(Literal::Number(operand.to_number())),
                    ("~", _) => Ok(Literal::Number(0.0)),
                    ("!", operand) => Ok(Literal::Boolean(!operand.is_truthy())),
                    (other, _) => Err(EvalError::Unsupported(format!("operator `{other}`"))),
                }
            }
            TokenKind::Keyword(kw) if kw.text == "void" => {
                self.bump();
                self.expr()?;
                Ok(Literal::Undefined)
            }
            TokenKind::Keyword(kw) if kw.text == "typeof" => {
                self.bump();
                let operand = self.expr()?;
                Ok(Literal::String(operand.type_of().to_string()))
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Literal, EvalError> {
        let kind = self.peek().clone();
        match kind {
            TokenKind::Literal(lit) => {
                self.bump();
                let text = lit.symbol.text.as_str();
                match lit.kind {
                    LitKind::Bool => Ok(Literal::Boolean(text == "true")),
                    LitKind::Null => Ok(Literal::Null),
                    LitKind::Number if text.ends_with('n') => Ok(Literal::BigInt),
                    LitKind::Number => Ok(Literal::Number(parse_number(text))),
                    LitKind::String => Ok(Literal::String(unquote(text))),
                    LitKind::Template if text.contains("${") => Err(EvalError::Unsupported(
                        "template substitution".to_string(),
                    )),
                    LitKind::Template => Ok(Literal::String(unquote(text))),
                    LitKind::Regex => Ok(Literal::RegExp(text.to_string())),
                }
            }
            TokenKind::Ident(name) => {
                self.bump();
                match name.text.as_str() {
                    "undefined" => Ok(Literal::Undefined),
                    "NaN" => Ok(Literal::Number(f64::NAN)),
                    "Infinity" => Ok(Literal::Number(f64::INFINITY)),
                    other => Err(EvalError::Reference(other.to_string())),
                }
            }
            TokenKind::OpenParen => {
                self.bump();
                let value = self.expr()?;
                self.expect(TokenKind::CloseParen)?;
                Ok(value)
            }
            TokenKind::OpenBracket => self.array(),
            TokenKind::OpenBrace => self.object(),
            TokenKind::Keyword(kw) if kw.text == "new" => {
                self.bump();
                self.construct()
            }
            TokenKind::Keyword(kw) => Err(EvalError::Unsupported(format!("`{}`", kw.text))),
            _ => Err(self.unexpected()),
        }
    }

    fn array(&mut self) -> Result<Literal, EvalError> {
        self.expect(TokenKind::OpenBracket)?;
        let mut items = Vec::new();
        loop {
            match self.peek() {
                TokenKind::CloseBracket => {
                    self.bump();
                    return Ok(Literal::Array(items));
                }
                TokenKind::Comma => {
                    // Hole.
                    self.bump();
                    items.push(Literal::Undefined);
                    continue;
                }
                _ => {}
            }
            items.push(self.expr()?);
            match self.peek() {
                TokenKind::Comma => self.bump(),
                TokenKind::CloseBracket => {}
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn object(&mut self) -> Result<Literal, EvalError> {
        self.expect(TokenKind::OpenBrace)?;
        let mut props = IndexMap::new();
        loop {
            let key = match self.peek().clone() {
                TokenKind::CloseBrace => {
                    self.bump();
                    return Ok(Literal::Object(props));
                }
                TokenKind::Ident(name) | TokenKind::Keyword(name) => name.text,
                TokenKind::Literal(lit) if lit.kind == LitKind::String => unquote(&lit.symbol.text),
                TokenKind::Literal(lit) if lit.kind == LitKind::Number => lit.symbol.text,
                _ => return Err(self.unexpected()),
            };
            self.bump();

            let value = match self.peek() {
                TokenKind::Colon => {
                    self.bump();
                    self.expr()?
                }
                // Shorthand `{ a }` reads the binding `a`.
                TokenKind::Comma | TokenKind::CloseBrace => {
                    return Err(EvalError::Reference(key));
                }
                _ => return Err(self.unexpected()),
            };
            props.insert(key, value);

            match self.peek() {
                TokenKind::Comma => self.bump(),
                TokenKind::CloseBrace => {}
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn construct(&mut self) -> Result<Literal, EvalError> {
        let TokenKind::Ident(name) = self.peek().clone() else {
            return Err(self.unexpected());
        };
        self.bump();

        if self.at(&TokenKind::OpenParen) {
            self.bump();
            while !self.at(&TokenKind::CloseParen) {
                self.expr()?;
                match self.peek() {
                    TokenKind::Comma => self.bump(),
                    TokenKind::CloseParen => {}
                    _ => return Err(self.unexpected()),
                }
            }
            self.bump();
        }

        let name = name.text;
        if let Some(&(_, class)) = CONSTRUCTORS.iter().find(|(ctor, _)| *ctor == name) {
            return Ok(Literal::Instance(class));
        }
        match name.as_str() {
            "Promise" => Err(EvalError::Construct(
                "Promise resolver undefined is not a function".to_string(),
            )),
            other if NON_CONSTRUCTORS.contains(&other) => {
                Err(EvalError::NotConstructor(other.to_string()))
            }
            other => Err(EvalError::Reference(other.to_string())),
        }
    }
}

fn parse_number(text: &str) -> f64 {
    let text = text.replace('_', "");
    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    match radix {
        Some(radix) => u64::from_str_radix(&text[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN),
        None => text.parse().unwrap_or(f64::NAN),
    }
}

/// Strips the delimiters of a string or template literal and resolves simple escapes.
fn unquote(text: &str) -> String {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();

    let mut out = String::new();
    let mut escaped = false;
    for ch in chars {
        if escaped {
            out.push(match ch {
                'n' => '\n',
                't' => '\t',
                'r' => '\r',
                '0' => '\0',
                other => other,
            });
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else {
            out.push(ch);
        }
    }
    out
}
