//! Request options for the hint helpers.

use std::fmt;

use evaluator::{ExpressionEvaluator, LiteralEvaluator, Realm, Value, standard_realm};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Framework flavour of the editor, selecting a static vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorType {
    Regular,
    Vue,
    React,
}

impl EditorType {
    /// Maps an editor `type` option; unknown names select no vocabulary.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "regular" => Some(EditorType::Regular),
            "vue" => Some(EditorType::Vue),
            "react" => Some(EditorType::React),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EditorType::Regular => "regular",
            EditorType::Vue => "vue",
            EditorType::React => "react",
        }
    }
}

/// Options for a single hint request.
///
/// Object values in `additional_context` must belong to the realm used for resolution
/// (`global_scope`, or the standard realm when unset).
#[derive(Clone)]
pub struct HintOptions<'a> {
    pub editor_type: Option<EditorType>,
    pub global_scope: Option<&'a Realm>,
    pub additional_context: IndexMap<String, Value>,
    pub use_global_scope: bool,
    pub evaluator: Option<&'a dyn ExpressionEvaluator>,
}

impl Default for HintOptions<'_> {
    fn default() -> Self {
        Self {
            editor_type: None,
            global_scope: None,
            additional_context: IndexMap::new(),
            use_global_scope: true,
            evaluator: None,
        }
    }
}

impl<'a> HintOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editor_type(mut self, editor_type: EditorType) -> Self {
        self.editor_type = Some(editor_type);
        self
    }

    pub fn global_scope(mut self, realm: &'a Realm) -> Self {
        self.global_scope = Some(realm);
        self
    }

    pub fn context(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional_context.insert(name.into(), value.into());
        self
    }

    pub fn use_global_scope(mut self, enabled: bool) -> Self {
        self.use_global_scope = enabled;
        self
    }

    pub fn evaluator(mut self, evaluator: &'a dyn ExpressionEvaluator) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    pub(crate) fn realm(&self) -> &'a Realm {
        self.global_scope.unwrap_or_else(|| standard_realm())
    }

    pub(crate) fn expression_evaluator(&self) -> &'a dyn ExpressionEvaluator {
        static LITERAL: LiteralEvaluator = LiteralEvaluator;
        self.evaluator.unwrap_or(&LITERAL)
    }

    /// Looks up a root name in `additional_context`, skipping nullish entries.
    pub(crate) fn context_value(&self, name: &str) -> Option<&Value> {
        self.additional_context
            .get(name)
            .filter(|value| !value.is_nullish())
    }
}

impl fmt::Debug for HintOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HintOptions")
            .field("editor_type", &self.editor_type)
            .field("global_scope", &self.global_scope.map(|_| "Realm"))
            .field("additional_context", &self.additional_context)
            .field("use_global_scope", &self.use_global_scope)
            .field("evaluator", &self.evaluator.map(|_| "dyn ExpressionEvaluator"))
            .finish()
    }
}
