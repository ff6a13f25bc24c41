//! Backward walk over a `a.b.c` property access.

use analyzer::{Pos, StyledToken, TokenStyle};
use tracing::trace;

use super::assignment::resolve_assignment;
use crate::TokenSource;
use crate::editor::Editor;
use crate::options::HintOptions;

/// Collects the tokens left of `token` across `.` separators, nearest first, so the root is
/// the last element.
///
/// Returns an empty chain when `token` is not a property access, and `None` when the access
/// is malformed.
pub(crate) fn walk_chain(
    editor: &dyn Editor,
    get_token: &TokenSource,
    token: &StyledToken,
    options: &HintOptions<'_>,
) -> Option<Vec<StyledToken>> {
    let line = editor.cursor().line;
    let mut chain = Vec::new();
    let mut start = token.start;
    let mut style = token.style;

    while matches!(style, None | Some(TokenStyle::Property)) {
        let dot = get_token(editor, Pos::new(line, start));
        if dot.string != "." {
            trace!(line, col = start, found = %dot.string, "no dot before property");
            return None;
        }

        let mut prev = get_token(editor, Pos::new(line, dot.start));
        if prev.start >= start {
            trace!(line, col = start, "tokenizer did not move left");
            return None;
        }
        if prev.style == Some(TokenStyle::Variable) {
            resolve_assignment(editor.value(), &mut prev, options.expression_evaluator());
        }

        start = prev.start;
        style = prev.style;
        chain.push(prev);
    }

    Some(chain)
}
