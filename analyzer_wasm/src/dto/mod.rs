//! JS-facing DTO types for `analyzer_wasm`.
//!
//! Positions are `{ line, ch }` with a 0-based line and `ch` in UTF-16 code units.
pub mod v1;
