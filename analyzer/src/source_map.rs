use crate::span::Pos;

/// Line index over a source string.
///
/// Byte offsets map to 0-based [`Pos`] values whose `ch` is a byte column within the line.
pub struct SourceMap<'a> {
    src: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> SourceMap<'a> {
    pub fn new(src: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in src.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { src, line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the position of `byte`; offsets past the end clamp to the end of input.
    pub fn pos(&self, byte: u32) -> Pos {
        let b = usize::min(byte as usize, self.src.len());
        let line_idx = match self.line_starts.binary_search(&b) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let col = b.saturating_sub(self.line_starts[line_idx]);
        Pos {
            line: line_idx as u32,
            ch: col as u32,
        }
    }

    /// Returns the byte offset of `pos`, or `None` when the line does not exist.
    ///
    /// Columns past the end of the line clamp to the line end.
    pub fn offset(&self, pos: Pos) -> Option<u32> {
        let start = *self.line_starts.get(pos.line as usize)?;
        let text = self.line_text(pos.line)?;
        let ch = usize::min(pos.ch as usize, text.len());
        Some((start + ch) as u32)
    }

    /// Returns the text of `line` without its trailing `\n` (and `\r`).
    pub fn line_text(&self, line: u32) -> Option<&'a str> {
        let idx = line as usize;
        let start = *self.line_starts.get(idx)?;
        let end = match self.line_starts.get(idx + 1) {
            Some(next) => next - 1,
            None => self.src.len(),
        };
        let text = &self.src[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    pub fn line_start(&self, line: u32) -> Option<u32> {
        self.line_starts.get(line as usize).map(|start| *start as u32)
    }
}
