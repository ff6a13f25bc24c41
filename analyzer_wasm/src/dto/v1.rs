use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use ts_rs::TS;

/// Editor position; `ch` counts UTF-16 code units within the line.
#[derive(Serialize, Deserialize, TS, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub ch: u32,
}

impl Position {
    pub fn new(line: u32, ch: u32) -> Self {
        Self { line, ch }
    }
}

/// Hint options as the host passes them. Unknown keys are ignored so the editor's own
/// completion options can be forwarded unchanged.
#[derive(Deserialize, TS, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct HintOptions {
    /// `"regular"`, `"vue"` or `"react"`.
    #[serde(rename = "type", default)]
    pub editor_type: Option<String>,
    #[serde(default)]
    pub use_global_scope: Option<bool>,
    #[serde(default)]
    #[ts(type = "Record<string, unknown> | null")]
    pub additional_context: Option<Map<String, JsonValue>>,
    /// Replaces the browser-like global namespace.
    #[serde(default)]
    #[ts(type = "Record<string, unknown> | null")]
    pub global_scope: Option<Map<String, JsonValue>>,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct HintResult {
    pub list: Vec<String>,
    pub from: Position,
    pub to: Position,
}

/// Buffer text after picking a candidate.
#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct PickResult {
    pub text: String,
    pub cursor: Position,
}
