//! Chain root resolution against the realm.

use analyzer::{StyledToken, TokenStyle};
use evaluator::{Realm, Value};
use tracing::debug;

use crate::options::HintOptions;

/// How a chain root is turned into a runtime value, keyed on its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RootKind<'t> {
    /// `variable`, `variable-2`: looked up by name.
    Variable(&'t str),
    /// String literal: the `String` constructor stands in for it.
    String,
    /// `true`, `null`, `undefined`, ...: a number stands in for it.
    Atom,
    /// Library entry point such as `$` or `_`.
    Function(&'t str),
    Unresolved,
}

impl<'t> RootKind<'t> {
    pub(crate) fn of(token: &'t StyledToken) -> Self {
        match token.style {
            Some(style) if style.is_variable() => RootKind::Variable(&token.string),
            Some(TokenStyle::String) => RootKind::String,
            Some(TokenStyle::Atom) => RootKind::Atom,
            Some(TokenStyle::Function) => RootKind::Function(&token.string),
            _ => RootKind::Unresolved,
        }
    }

    /// The value this root denotes, `Undefined` when nothing is known about it.
    pub(crate) fn base(self, realm: &Realm, options: &HintOptions<'_>) -> Value {
        match self {
            RootKind::Variable(name) => {
                if let Some(value) = options.context_value(name) {
                    return value.clone();
                }
                if options.use_global_scope {
                    realm.global_value(name)
                } else {
                    Value::Undefined
                }
            }
            RootKind::String => realm.string_constructor(),
            RootKind::Atom => Value::Number(1.0),
            RootKind::Function(name) => {
                let library = match name {
                    "$" | "jQuery" => "jQuery",
                    "_" => "_",
                    _ => return Value::Undefined,
                };
                let entry = realm.global_value(library);
                if !realm.is_callable(&entry) {
                    return Value::Undefined;
                }
                realm.invoke(&entry).unwrap_or_else(|err| {
                    debug!(library, %err, "library entry point failed");
                    Value::Undefined
                })
            }
            RootKind::Unresolved => Value::Undefined,
        }
    }
}

/// Resolves the root (last element) and indexes through the rest of `chain`, root first.
/// Stops at the first nullish value.
pub(crate) fn resolve_chain(
    mut chain: Vec<StyledToken>,
    realm: &Realm,
    options: &HintOptions<'_>,
) -> Value {
    let Some(root) = chain.pop() else {
        return Value::Undefined;
    };
    let mut base = RootKind::of(&root).base(realm, options);

    while !base.is_nullish() {
        let Some(member) = chain.pop() else {
            break;
        };
        base = realm.get(&base, &member.string);
    }
    base
}
