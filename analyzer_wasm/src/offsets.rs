//! JS/editor boundary uses UTF-16 code units (CodeMirror columns).
//! Both helpers work on a single line of text.

pub fn utf16_offset_to_byte(text: &str, utf16: usize) -> usize {
    if utf16 == 0 {
        return 0;
    }

    let mut u16_count = 0usize;
    for (byte_idx, ch) in text.char_indices() {
        if u16_count >= utf16 {
            return byte_idx;
        }
        u16_count += ch.len_utf16();
    }

    text.len()
}

/// A byte inside a multi-byte character counts the whole character.
pub fn byte_offset_to_utf16_offset(text: &str, byte: usize) -> u32 {
    text.char_indices()
        .take_while(|(idx, _)| *idx < byte)
        .map(|(_, ch)| ch.len_utf16())
        .sum::<usize>() as u32
}
