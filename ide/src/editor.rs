//! The editor seam consumed by the hint helpers.

use analyzer::{Dialect, Highlighted, Pos, StyledToken, highlight};

/// What a hint helper needs from a host editor.
pub trait Editor {
    fn cursor(&self) -> Pos;

    /// Token at `pos` of the current snapshot, following the host tokenizer's rules.
    fn token_at(&self, pos: Pos) -> StyledToken;

    /// Full buffer text.
    fn value(&self) -> &str;
}

/// In-memory editor over a highlighted snapshot.
#[derive(Debug, Clone)]
pub struct Buffer {
    source: String,
    dialect: Dialect,
    highlighted: Highlighted,
    cursor: Pos,
}

impl Buffer {
    pub fn new(source: impl Into<String>, dialect: Dialect) -> Self {
        let source = source.into();
        let highlighted = highlight(&source, dialect);
        Self {
            source,
            dialect,
            highlighted,
            cursor: Pos::default(),
        }
    }

    pub fn with_cursor(mut self, cursor: Pos) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn set_cursor(&mut self, cursor: Pos) {
        self.cursor = cursor;
    }

    /// Replaces the buffer text and re-highlights it. The cursor is kept as is.
    pub fn set_value(&mut self, source: impl Into<String>) {
        self.source = source.into();
        self.highlighted = highlight(&self.source, self.dialect);
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn highlighted(&self) -> &Highlighted {
        &self.highlighted
    }
}

impl Editor for Buffer {
    fn cursor(&self) -> Pos {
        self.cursor
    }

    fn token_at(&self, pos: Pos) -> StyledToken {
        self.highlighted.token_at(pos)
    }

    fn value(&self) -> &str {
        &self.source
    }
}
