//! Conversion utilities for the WASM/JS boundary.
//!
//! This module is stateless. It parses the host's options JSON into owned runtime values and
//! bridges UTF-16 editor columns to the byte columns `ide` works with.

use analyzer::{Pos, SourceMap};
use evaluator::{Realm, Value};
use ide::{EditorType, HintOptions, Picked};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::dto::v1::{HintOptions as HintOptionsDto, HintResult, PickResult, Position};
use crate::offsets::{byte_offset_to_utf16_offset, utf16_offset_to_byte};

#[derive(Debug, Error)]
pub enum ConverterError {
    #[error("invalid hint options JSON: {0}")]
    InvalidOptions(#[from] serde_json::Error),
    #[error("unknown editor type `{0}`")]
    UnknownEditorType(String),
    #[error("line {line} is out of range (document has {lines} lines)")]
    LineOutOfRange { line: u32, lines: usize },
}

/// Options decoded from JSON, owning the realm their object values live in.
#[derive(Debug)]
pub struct ParsedOptions {
    pub editor_type: Option<EditorType>,
    pub use_global_scope: bool,
    /// `None` means the shared standard realm.
    pub realm: Option<Realm>,
    pub context: IndexMap<String, Value>,
}

impl Default for ParsedOptions {
    fn default() -> Self {
        Self {
            editor_type: None,
            use_global_scope: true,
            realm: None,
            context: IndexMap::new(),
        }
    }
}

impl ParsedOptions {
    pub fn hint_options(&self) -> HintOptions<'_> {
        let mut options = HintOptions::new().use_global_scope(self.use_global_scope);
        if let Some(editor_type) = self.editor_type {
            options = options.editor_type(editor_type);
        }
        if let Some(realm) = &self.realm {
            options = options.global_scope(realm);
        }
        for (name, value) in &self.context {
            options = options.context(name.clone(), value.clone());
        }
        options
    }
}

pub struct Converter;

impl Converter {
    /// Parse the JS-provided options JSON. Blank input means defaults.
    pub fn parse_options(options_json: &str) -> Result<ParsedOptions, ConverterError> {
        let trimmed = options_json.trim();
        if trimmed.is_empty() {
            return Ok(ParsedOptions::default());
        }

        let input: HintOptionsDto = serde_json::from_str(trimmed)?;

        let editor_type = input
            .editor_type
            .as_deref()
            .map(|name| {
                EditorType::from_name(name)
                    .ok_or_else(|| ConverterError::UnknownEditorType(name.to_string()))
            })
            .transpose()?;

        let context_needs_heap = input
            .additional_context
            .iter()
            .flat_map(|context| context.values())
            .any(|value| value.is_object() || value.is_array());

        // A custom global scope starts from an empty namespace; context objects alone only need
        // somewhere to live next to the standard globals.
        let mut realm = match &input.global_scope {
            Some(_) => Some(Realm::new()),
            None if context_needs_heap => Some(Realm::standard()),
            None => None,
        };

        if let (Some(realm), Some(scope)) = (realm.as_mut(), &input.global_scope) {
            for (name, json) in scope {
                let value = json_value(realm, json);
                realm.define_global(name, value);
            }
        }

        let mut context = IndexMap::new();
        for (name, json) in input.additional_context.into_iter().flatten() {
            let value = match realm.as_mut() {
                Some(realm) => json_value(realm, &json),
                None => json_primitive(&json).unwrap_or_default(),
            };
            context.insert(name, value);
        }

        Ok(ParsedOptions {
            editor_type,
            use_global_scope: input.use_global_scope.unwrap_or(true),
            realm,
            context,
        })
    }

    /// Convert a host position (UTF-16 column) to a byte position.
    pub fn position_to_pos(source: &str, position: Position) -> Result<Pos, ConverterError> {
        let sm = SourceMap::new(source);
        let line = sm
            .line_text(position.line)
            .ok_or(ConverterError::LineOutOfRange {
                line: position.line,
                lines: sm.line_count(),
            })?;
        let ch = utf16_offset_to_byte(line, position.ch as usize);
        Ok(Pos::new(position.line, ch as u32))
    }

    pub fn pos_to_position(source: &str, pos: Pos) -> Position {
        let line = SourceMap::new(source).line_text(pos.line).unwrap_or("");
        Position::new(pos.line, byte_offset_to_utf16_offset(line, pos.ch as usize))
    }

    pub fn hint_result_view(source: &str, result: &ide::HintResult) -> HintResult {
        HintResult {
            list: result.list.clone(),
            from: Self::pos_to_position(source, result.from),
            to: Self::pos_to_position(source, result.to),
        }
    }

    pub fn pick_result_view(picked: Picked) -> PickResult {
        let cursor = Self::pos_to_position(&picked.text, picked.cursor);
        PickResult {
            text: picked.text,
            cursor,
        }
    }
}

fn json_primitive(json: &JsonValue) -> Option<Value> {
    let value = match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        JsonValue::String(s) => Value::string(s.as_str()),
        JsonValue::Array(_) | JsonValue::Object(_) => return None,
    };
    Some(value)
}

fn json_value(realm: &mut Realm, json: &JsonValue) -> Value {
    if let Some(value) = json_primitive(json) {
        return value;
    }
    match json {
        JsonValue::Array(items) => {
            let items = items.iter().map(|item| json_value(realm, item)).collect();
            realm.array(items).into()
        }
        JsonValue::Object(map) => {
            let id = realm.plain_object();
            for (name, json) in map {
                let value = json_value(realm, json);
                realm.set(id, name, value);
            }
            id.into()
        }
        _ => Value::Undefined,
    }
}
