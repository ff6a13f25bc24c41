//! JavaScript mode: token styles plus a lightweight scope tracker.
//!
//! Tracked bindings: `var`/`let`/`const` names, function names and parameters. Function
//! scopes open at the parameter list and close with the body's `}`; block scoping and
//! hoisting are not modelled.

use std::rc::Rc;

use super::{ModeState, Styled, TokenStyle, is_dot, prev_significant};
use crate::lexer::{LitKind, Token, TokenKind};

const ATOMS: &[&str] = &["undefined", "NaN", "Infinity"];

/// Free identifiers styled as callable library entry points.
const LIBRARY_FUNCTIONS: &[&str] = &["$", "jQuery", "_"];

#[derive(Debug, Default)]
struct FunctionScope {
    vars: Vec<String>,
    body_depth: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    None,
    /// After `function`, before the name or `(`.
    Name,
    /// After the function name, before `(`.
    Params,
    /// Inside the parameter list opened at this paren depth.
    InParams { depth: u32, expect_name: bool },
    /// After `)`, before the body `{`.
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decl {
    None,
    ExpectName { nesting: u32 },
    Initializer { nesting: u32 },
}

struct Tracker {
    globals: Vec<String>,
    functions: Vec<FunctionScope>,
    paren_depth: u32,
    bracket_depth: u32,
    brace_depth: u32,
    pending: Pending,
    decl: Decl,
    state: Rc<ModeState>,
    dirty: bool,
}

pub(crate) fn style_tokens(source: &str, tokens: &[Token]) -> Vec<Styled> {
    let mut tracker = Tracker {
        globals: Vec::new(),
        functions: Vec::new(),
        paren_depth: 0,
        bracket_depth: 0,
        brace_depth: 0,
        pending: Pending::None,
        decl: Decl::None,
        state: Rc::default(),
        dirty: false,
    };

    let mut out = Vec::with_capacity(tokens.len());
    for (idx, token) in tokens.iter().enumerate() {
        let style = tracker.step(tokens, idx, token);
        if matches!(token.kind, TokenKind::Newline | TokenKind::Eof) {
            continue;
        }
        out.push(Styled {
            span: token.span,
            style,
            state: tracker.snapshot(),
        });
    }

    tracing::trace!(
        tokens = out.len(),
        globals = tracker.globals.len(),
        source_len = source.len(),
        "styled javascript buffer"
    );
    out
}

impl Tracker {
    fn nesting(&self) -> u32 {
        self.paren_depth + self.bracket_depth + self.brace_depth
    }

    fn snapshot(&mut self) -> Rc<ModeState> {
        if self.dirty {
            let local_vars = self
                .functions
                .iter()
                .rev()
                .flat_map(|scope| scope.vars.iter().rev().cloned())
                .collect();
            let global_vars = self.globals.iter().rev().cloned().collect();
            self.state = Rc::new(ModeState::new(local_vars, global_vars));
            self.dirty = false;
        }
        Rc::clone(&self.state)
    }

    fn declare(&mut self, name: &str) {
        let vars = match self.functions.last_mut() {
            Some(scope) => &mut scope.vars,
            None => &mut self.globals,
        };
        if !vars.iter().any(|var| var == name) {
            vars.push(name.to_string());
            self.dirty = true;
        }
    }

    fn is_local(&self, name: &str) -> bool {
        self.functions
            .iter()
            .any(|scope| scope.vars.iter().any(|var| var == name))
    }

    fn is_global(&self, name: &str) -> bool {
        self.globals.iter().any(|var| var == name)
    }

    fn end_decl_below(&mut self, nesting: u32) {
        match self.decl {
            Decl::ExpectName { nesting: n } | Decl::Initializer { nesting: n } if n > nesting => {
                self.decl = Decl::None;
            }
            _ => {}
        }
    }

    fn step(&mut self, tokens: &[Token], idx: usize, token: &Token) -> Option<TokenStyle> {
        match &token.kind {
            TokenKind::Newline => {
                if let Decl::Initializer { nesting } = self.decl
                    && nesting == self.nesting()
                    && !continues_expression(prev_significant(tokens, idx))
                {
                    self.decl = Decl::None;
                }
                None
            }
            TokenKind::Comment(..) => Some(TokenStyle::Comment),
            TokenKind::Keyword(symbol) => {
                match symbol.text.as_str() {
                    "var" | "let" | "const" => {
                        self.decl = Decl::ExpectName {
                            nesting: self.nesting(),
                        };
                    }
                    "function" => self.pending = Pending::Name,
                    _ => {}
                }
                Some(TokenStyle::Keyword)
            }
            TokenKind::Ident(symbol) => Some(self.ident(tokens, idx, &symbol.text)),
            TokenKind::Literal(lit) => Some(match lit.kind {
                LitKind::Bool | LitKind::Null => TokenStyle::Atom,
                LitKind::Number => TokenStyle::Number,
                LitKind::String => TokenStyle::String,
                LitKind::Template | LitKind::Regex => TokenStyle::String2,
            }),
            TokenKind::OpenParen => {
                self.paren_depth += 1;
                if matches!(self.pending, Pending::Name | Pending::Params) {
                    self.functions.push(FunctionScope::default());
                    self.dirty = true;
                    self.pending = Pending::InParams {
                        depth: self.paren_depth,
                        expect_name: true,
                    };
                }
                None
            }
            TokenKind::CloseParen => {
                if let Pending::InParams { depth, .. } = self.pending
                    && depth == self.paren_depth
                {
                    self.pending = Pending::Body;
                }
                self.paren_depth = self.paren_depth.saturating_sub(1);
                self.end_decl_below(self.nesting());
                None
            }
            TokenKind::OpenBracket => {
                self.bracket_depth += 1;
                None
            }
            TokenKind::CloseBracket => {
                self.bracket_depth = self.bracket_depth.saturating_sub(1);
                self.end_decl_below(self.nesting());
                None
            }
            TokenKind::OpenBrace => {
                self.brace_depth += 1;
                if self.pending == Pending::Body {
                    if let Some(scope) = self.functions.last_mut() {
                        scope.body_depth = Some(self.brace_depth);
                    }
                    self.pending = Pending::None;
                }
                None
            }
            TokenKind::CloseBrace => {
                if self
                    .functions
                    .last()
                    .is_some_and(|scope| scope.body_depth == Some(self.brace_depth))
                {
                    self.functions.pop();
                    self.dirty = true;
                }
                self.brace_depth = self.brace_depth.saturating_sub(1);
                self.end_decl_below(self.nesting());
                None
            }
            TokenKind::Comma => {
                if let Decl::Initializer { nesting } = self.decl
                    && nesting == self.nesting()
                {
                    self.decl = Decl::ExpectName { nesting };
                }
                if let Pending::InParams { depth, .. } = self.pending
                    && depth == self.paren_depth
                {
                    self.pending = Pending::InParams {
                        depth,
                        expect_name: true,
                    };
                }
                None
            }
            TokenKind::Semi => {
                if decl_nesting(self.decl).is_some_and(|nesting| self.nesting() <= nesting) {
                    self.decl = Decl::None;
                }
                match self.pending {
                    Pending::InParams { .. } | Pending::None => {}
                    Pending::Body => {
                        // A parameter list with no body never opened a scope body.
                        self.functions.pop();
                        self.dirty = true;
                        self.pending = Pending::None;
                    }
                    Pending::Name | Pending::Params => self.pending = Pending::None,
                }
                None
            }
            TokenKind::Eq => {
                if let Decl::ExpectName { nesting } = self.decl {
                    self.decl = Decl::Initializer { nesting };
                }
                self.no_param_here();
                Some(TokenStyle::Operator)
            }
            TokenKind::Operator(_) | TokenKind::FatArrow => {
                self.no_param_here();
                Some(TokenStyle::Operator)
            }
            TokenKind::Dot
            | TokenKind::Colon
            | TokenKind::Question
            | TokenKind::At
            | TokenKind::Member(_)
            | TokenKind::Unknown(_)
            | TokenKind::Eof => None,
        }
    }

    fn no_param_here(&mut self) {
        if let Pending::InParams { depth, .. } = self.pending {
            self.pending = Pending::InParams {
                depth,
                expect_name: false,
            };
        }
    }

    fn ident(&mut self, tokens: &[Token], idx: usize, name: &str) -> TokenStyle {
        if is_dot(prev_significant(tokens, idx)) {
            return TokenStyle::Property;
        }

        match self.pending {
            Pending::Name => {
                // Function declarations bind in the enclosing scope.
                self.declare(name);
                self.pending = Pending::Params;
                return TokenStyle::Def;
            }
            Pending::InParams { depth, expect_name } if depth == self.paren_depth => {
                if expect_name {
                    self.declare(name);
                    self.pending = Pending::InParams {
                        depth,
                        expect_name: false,
                    };
                    return TokenStyle::Def;
                }
            }
            _ => {}
        }

        if let Decl::ExpectName { nesting } = self.decl
            && nesting == self.nesting()
        {
            self.declare(name);
            self.decl = Decl::Initializer { nesting };
            return TokenStyle::Def;
        }

        if self.is_local(name) {
            TokenStyle::Variable2
        } else if ATOMS.contains(&name) {
            TokenStyle::Atom
        } else if LIBRARY_FUNCTIONS.contains(&name) && !self.is_global(name) {
            TokenStyle::Function
        } else {
            TokenStyle::Variable
        }
    }
}

fn decl_nesting(decl: Decl) -> Option<u32> {
    match decl {
        Decl::None => None,
        Decl::ExpectName { nesting } | Decl::Initializer { nesting } => Some(nesting),
    }
}

/// A line ending in an operator or comma keeps the declaration open.
fn continues_expression(prev: Option<&Token>) -> bool {
    matches!(
        prev.map(|token| &token.kind),
        Some(
            TokenKind::Operator(_)
                | TokenKind::Eq
                | TokenKind::Comma
                | TokenKind::Dot
                | TokenKind::Question
                | TokenKind::Colon
        )
    )
}
