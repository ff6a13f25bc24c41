use analyzer::Span;

/// A byte-range replacement in a source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Span,
    pub new_text: String,
}

/// Applies byte-offset text edits and rebases a byte cursor through them.
///
/// The caller must provide non-overlapping edits sorted by `(start, end)`.
/// Edits are applied in descending order to avoid shifting later offsets.
///
/// Cursor rules:
/// - edits ending at or before the cursor shift it by the byte delta
/// - a cursor strictly inside a replaced range snaps to the edit `start`
pub fn apply_text_edits_bytes_with_cursor(
    source: &str,
    edits: &[TextEdit],
    cursor: u32,
) -> (String, u32) {
    let mut updated = source.to_string();
    let mut cursor = cursor;

    for edit in edits.iter().rev() {
        let Span { start, end } = edit.range;
        let (Some(head), Some(tail)) = (
            updated.get(..start as usize),
            updated.get(end as usize..),
        ) else {
            continue;
        };

        let delta = edit.new_text.len() as i64 - i64::from(end.saturating_sub(start));
        if end <= cursor {
            cursor = (i64::from(cursor) + delta).max(0) as u32;
        } else if start < cursor && cursor < end {
            cursor = start;
        }

        updated = [head, edit.new_text.as_str(), tail].concat();
    }

    (updated, cursor)
}
