//! Script hints for editor integrations.
//!
//! Given a cursor inside a JavaScript or CoffeeScript buffer, [`script_hint`] finds the partial
//! word under the cursor, walks the property access before it and lists the names that can
//! complete it. Positions are `(line, byte column)`, matching `analyzer`.

mod completion;
mod editor;
mod options;
mod registry;
mod text_edit;

use analyzer::{Pos, SourceMap, StyledToken};
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};
use tracing::trace;

use completion::Candidates;

pub use editor::{Buffer, Editor};
pub use options::{EditorType, HintOptions};
pub use registry::{
    HintHelper, HintRegistry, coffeescript_hint, coffeescript_token, javascript_hint,
};
pub use text_edit::{TextEdit, apply_text_edits_bytes_with_cursor};

/// Fetches the token at a position, as the mode's tokenizer reports it.
pub type TokenSource = dyn Fn(&dyn Editor, Pos) -> StyledToken;

/// Candidates for the word at the cursor and the range they replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HintResult {
    pub list: Vec<String>,
    #[serde(serialize_with = "serialize_pos")]
    pub from: Pos,
    #[serde(serialize_with = "serialize_pos")]
    pub to: Pos,
}

/// Buffer text and cursor after picking a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picked {
    pub text: String,
    pub cursor: Pos,
}

impl HintResult {
    /// The edit that replaces `from..to` with candidate `index`.
    pub fn text_edit(&self, source: &str, index: usize) -> Option<TextEdit> {
        let candidate = self.list.get(index)?;
        let sm = SourceMap::new(source);
        let start = sm.offset(self.from)?;
        let end = sm.offset(self.to)?;
        Some(TextEdit {
            range: analyzer::Span::new(start, end),
            new_text: candidate.clone(),
        })
    }

    /// Applies candidate `index` to `source`, leaving the cursor after the inserted name.
    pub fn pick(&self, source: &str, index: usize) -> Option<Picked> {
        let edit = self.text_edit(source, index)?;
        let cursor = edit.range.end;
        let (text, cursor) = apply_text_edits_bytes_with_cursor(source, &[edit], cursor);
        let cursor = SourceMap::new(&text).pos(cursor);
        Some(Picked { text, cursor })
    }
}

fn serialize_pos<S: Serializer>(pos: &Pos, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("Pos", 2)?;
    state.serialize_field("line", &pos.line)?;
    state.serialize_field("ch", &pos.ch)?;
    state.end()
}

/// Computes hints at the editor's cursor.
///
/// `get_token` adapts the mode's tokens; see [`coffeescript_token`]. Returns `None` inside
/// strings and comments and for malformed property accesses.
pub fn script_hint(
    editor: &dyn Editor,
    get_token: &TokenSource,
    options: &HintOptions<'_>,
) -> Option<HintResult> {
    HintSession::new(editor, get_token, options).run()
}

struct HintSession<'a, 'o> {
    editor: &'a dyn Editor,
    get_token: &'a TokenSource,
    options: &'a HintOptions<'o>,
    cursor: Pos,
}

impl<'a, 'o> HintSession<'a, 'o> {
    fn new(
        editor: &'a dyn Editor,
        get_token: &'a TokenSource,
        options: &'a HintOptions<'o>,
    ) -> Self {
        Self {
            editor,
            get_token,
            options,
            cursor: editor.cursor(),
        }
    }

    fn run(self) -> Option<HintResult> {
        // 1) Classify the token under the cursor.
        let raw = (self.get_token)(self.editor, self.cursor);
        let Some(token) = completion::classify(raw, self.cursor) else {
            trace!(cursor = ?self.cursor, "cursor in string or comment");
            return None;
        };

        // 2) Walk the property access left of it.
        let chain = completion::walk_chain(self.editor, self.get_token, &token, self.options)?;

        // 3) Gather candidates for the chain's value, or for the scope.
        let realm = self.options.realm();
        let mut candidates = Candidates::new(&token.string);
        if chain.is_empty() {
            completion::gather_scope(&mut candidates, &token.state, realm, self.options);
        } else {
            let value = completion::resolve_chain(chain, realm, self.options);
            completion::gather_members(&mut candidates, realm, &value, self.options);
        }

        Some(HintResult {
            list: candidates.into_list(),
            from: Pos::new(self.cursor.line, token.start),
            to: Pos::new(self.cursor.line, token.end),
        })
    }
}

#[cfg(test)]
mod tests;
