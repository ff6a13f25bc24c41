use crate::{Dialect, Highlighted, Pos, StyledToken, highlight};

pub fn trim_indent(s: &str) -> String {
    let lines: Vec<&str> = s.lines().collect();
    let min_indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        // Skip the first line (which is the empty line)
        .skip(1)
        .map(|l| {
            if l.len() >= min_indent {
                &l[min_indent..]
            } else {
                *l
            }
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

#[test]
fn test_trim_indent() {
    let s = r#"
        function f(a) {
            return a;
        }"#;
    let expected = "function f(a) {\n    return a;\n}";
    assert_eq!(expected, trim_indent(s));
}

pub fn js(source: &str) -> Highlighted {
    highlight(source, Dialect::JavaScript)
}

pub fn coffee(source: &str) -> Highlighted {
    highlight(source, Dialect::CoffeeScript)
}

/// Renders one line as `text:style` pairs, whitespace tokens included as `_`.
pub fn render_line(hl: &Highlighted, line: u32) -> String {
    hl.line_tokens(line)
        .iter()
        .map(render_token)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_token(token: &StyledToken) -> String {
    match token.style {
        Some(style) => format!("{}:{}", token.string, style),
        None if token.string.trim().is_empty() => "_".to_string(),
        None => token.string.clone(),
    }
}

/// Token at `$0` in `marked`, which is highlighted with the marker removed.
pub fn token_at_marker(marked: &str, dialect: Dialect) -> StyledToken {
    let offset = marked.find("$0").expect("missing $0 marker");
    let source = marked.replacen("$0", "", 1);
    let before = &source[..offset];
    let line = before.matches('\n').count() as u32;
    let ch = before.rsplit('\n').next().unwrap_or("").len() as u32;
    highlight(&source, dialect).token_at(Pos::new(line, ch))
}
