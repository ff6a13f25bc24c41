//! Candidate collection.

use analyzer::ModeState;
use evaluator::{Realm, Value};
use indexmap::IndexSet;

use super::vocabulary::{KEYWORDS, vocabulary};
use crate::options::{EditorType, HintOptions};

/// Prefix-filtered, deduplicated candidates in first-seen order.
#[derive(Debug)]
pub(crate) struct Candidates<'p> {
    prefix: &'p str,
    found: IndexSet<String>,
}

impl<'p> Candidates<'p> {
    pub(crate) fn new(prefix: &'p str) -> Self {
        Self {
            prefix,
            found: IndexSet::new(),
        }
    }

    pub(crate) fn add(&mut self, name: &str) {
        if name.starts_with(self.prefix) && !self.found.contains(name) {
            self.found.insert(name.to_string());
        }
    }

    pub(crate) fn into_list(self) -> Vec<String> {
        self.found.into_iter().collect()
    }

    /// The editor vocabulary, then every property name reachable from `value`.
    fn add_members(&mut self, realm: &Realm, value: &Value, editor_type: Option<EditorType>) {
        for name in vocabulary(editor_type) {
            self.add(name);
        }
        for name in realm.property_names(value) {
            self.add(&name);
        }
    }
}

/// Members of the value a property access resolves to. A nullish value yields nothing.
pub(crate) fn gather_members(
    candidates: &mut Candidates<'_>,
    realm: &Realm,
    value: &Value,
    options: &HintOptions<'_>,
) {
    if value.is_nullish() {
        return;
    }
    candidates.add_members(realm, value, options.editor_type);
}

/// Lexical bindings, the global namespace and keywords, for a cursor outside any property
/// access.
pub(crate) fn gather_scope(
    candidates: &mut Candidates<'_>,
    state: &ModeState,
    realm: &Realm,
    options: &HintOptions<'_>,
) {
    for name in &state.local_vars {
        candidates.add(name);
    }
    for name in &state.global_vars {
        candidates.add(name);
    }
    if options.use_global_scope {
        let global = Value::Object(realm.global());
        candidates.add_members(realm, &global, options.editor_type);
    }
    for keyword in KEYWORDS {
        candidates.add(keyword);
    }
}
