//! WASM bindings for script hints.
//!
//! The exports take the buffer text, a cursor as `(line, ch)` with `ch` in UTF-16 code units,
//! and an optional options JSON string. They return a `HintResult` DTO, or `undefined` when
//! there is nothing to complete.

mod converter;
pub mod dto;
mod offsets;

use analyzer::Dialect;
use ide::{Buffer, HintRegistry};
use js_sys::Error as JsError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub use converter::{Converter, ConverterError, ParsedOptions};

use crate::dto::v1::{HintResult, PickResult, Position};

/// Hints for `mode` at `cursor`.
///
/// `Ok(None)` covers unknown modes as well as cursors with nothing to complete.
pub fn hint_at(
    mode: &str,
    source: &str,
    cursor: Position,
    options_json: Option<&str>,
) -> Result<Option<HintResult>, ConverterError> {
    let result = run_hint(mode, source, cursor, options_json)?;
    Ok(result.map(|result| Converter::hint_result_view(source, &result)))
}

/// Applies candidate `index` of the hints at `cursor`.
pub fn pick_at(
    mode: &str,
    source: &str,
    cursor: Position,
    options_json: Option<&str>,
    index: usize,
) -> Result<Option<PickResult>, ConverterError> {
    let Some(result) = run_hint(mode, source, cursor, options_json)? else {
        return Ok(None);
    };
    Ok(result.pick(source, index).map(Converter::pick_result_view))
}

fn run_hint(
    mode: &str,
    source: &str,
    cursor: Position,
    options_json: Option<&str>,
) -> Result<Option<ide::HintResult>, ConverterError> {
    let Some(dialect) = Dialect::from_name(mode) else {
        return Ok(None);
    };
    let parsed = Converter::parse_options(options_json.unwrap_or_default())?;
    let cursor = Converter::position_to_pos(source, cursor)?;
    let buffer = Buffer::new(source, dialect).with_cursor(cursor);
    Ok(HintRegistry::default().hint(dialect.name(), &buffer, &parsed.hint_options()))
}

#[wasm_bindgen]
pub fn hint(
    mode: String,
    source: String,
    line: u32,
    ch: u32,
    options_json: Option<String>,
) -> Result<JsValue, JsValue> {
    let result = hint_at(
        &mode,
        &source,
        Position::new(line, ch),
        options_json.as_deref(),
    )
    .map_err(js_error)?;
    to_js(&result)
}

#[wasm_bindgen]
pub fn javascript_hint(
    source: String,
    line: u32,
    ch: u32,
    options_json: Option<String>,
) -> Result<JsValue, JsValue> {
    hint(Dialect::JavaScript.name().to_string(), source, line, ch, options_json)
}

#[wasm_bindgen]
pub fn coffeescript_hint(
    source: String,
    line: u32,
    ch: u32,
    options_json: Option<String>,
) -> Result<JsValue, JsValue> {
    hint(Dialect::CoffeeScript.name().to_string(), source, line, ch, options_json)
}

#[wasm_bindgen]
pub fn pick_hint(
    mode: String,
    source: String,
    line: u32,
    ch: u32,
    options_json: Option<String>,
    index: usize,
) -> Result<JsValue, JsValue> {
    let result = pick_at(
        &mode,
        &source,
        Position::new(line, ch),
        options_json.as_deref(),
        index,
    )
    .map_err(js_error)?;
    to_js(&result)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from(JsError::new(&err.to_string())))
}

fn js_error(err: ConverterError) -> JsValue {
    JsValue::from(JsError::new(&err.to_string()))
}
