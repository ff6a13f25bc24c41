use crate::source_map::SourceMap;
use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    Error,
}

/// A lexing problem. Tokenization always continues past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: Span,
}

#[derive(Default, Debug)]
pub struct Diagnostics {
    pub diags: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn emit_error(&mut self, span: Span, message: impl Into<String>) {
        self.diags.push(Diagnostic {
            kind: DiagnosticKind::Error,
            message: message.into(),
            span,
        });
    }
}

pub fn format_diagnostics(source: &str, mut diags: Vec<Diagnostic>) -> String {
    use std::fmt::Write;

    diags.sort_by(|a, b| {
        (a.span.start, a.span.end, &a.message).cmp(&(b.span.start, b.span.end, &b.message))
    });
    let sm = SourceMap::new(source);

    let mut out = String::new();
    for d in diags {
        let pos = sm.pos(d.span.start);
        let _ = writeln!(&mut out, "error: {}", d.message);
        let _ = writeln!(
            &mut out,
            "  --> <input>:{}:{} [{}..{}]",
            pos.line + 1,
            pos.ch + 1,
            d.span.start,
            d.span.end
        );
        if let Some(text) = sm.line_text(pos.line) {
            let _ = writeln!(&mut out, "   | {text}");
            let _ = writeln!(&mut out, "   | {}", underline(text, pos.ch, d.span.len()));
        }
    }
    out
}

/// Carets under `len` bytes starting at byte column `ch`, clipped to the line and at least one
/// wide. Columns are counted in chars so multi-byte text lines up.
fn underline(text: &str, ch: u32, len: u32) -> String {
    let ch = ch as usize;
    let end = usize::min(ch + len as usize, text.len());
    let pad = text.get(..ch).map_or(0, |head| head.chars().count());
    let width = text.get(ch..end).map_or(0, |body| body.chars().count()).max(1);
    format!("{}{}", " ".repeat(pad), "^".repeat(width))
}
