use std::fs;
use std::path::{Path, PathBuf};

const CURSOR_MARKER: &str = "$0";
const INPUT_HEADER: &str = "=== INPUT ===";
const OUTPUT_HEADER: &str = "=== OUTPUT ===";

/// A fixture buffer with its `$0` cursor marker removed.
pub struct Fixture<'a> {
    pub path: &'a Path,
    pub text: String,
    /// Byte offset of the marker in `text`.
    pub cursor: usize,
}

/// Renders every fixture in `dir` with an extension from `input_exts` and compares the result
/// with the sibling file carrying `golden_ext`.
///
/// `BLESS=1` rewrites all golden files; a missing golden file is written and then fails.
pub fn run_golden_dir<F>(
    test_name: &str,
    dir: &Path,
    input_exts: &[&str],
    golden_ext: &str,
    mut render: F,
) where
    F: FnMut(&Fixture<'_>) -> String,
{
    let bless = std::env::var_os("BLESS").is_some();

    for path in fixture_paths(dir, input_exts) {
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
        let fixture = parse_fixture(&path, &raw);
        let actual = normalize(&render(&fixture));
        let golden_path = path.with_extension(golden_ext);

        if bless {
            write_golden(&golden_path, &raw, &actual);
            continue;
        }

        let Ok(golden) = fs::read_to_string(&golden_path) else {
            write_golden(&golden_path, &raw, &actual);
            panic!(
                "wrote missing golden file {}; review it and re-run `cargo test {test_name}`",
                golden_path.display()
            );
        };

        assert_eq!(
            normalize(output_section(&golden)),
            actual,
            "golden mismatch for {} (BLESS=1 cargo test {test_name} to update)",
            path.display()
        );
    }
}

fn fixture_paths(dir: &Path, input_exts: &[&str]) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("failed to read fixture dir {}: {e}", dir.display()));
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| input_exts.contains(&ext))
        })
        .collect();
    paths.sort();
    paths
}

fn parse_fixture<'a>(path: &'a Path, raw: &str) -> Fixture<'a> {
    let cursor = raw
        .find(CURSOR_MARKER)
        .unwrap_or_else(|| panic!("{} has no {CURSOR_MARKER} marker", path.display()));
    Fixture {
        path,
        text: raw.replacen(CURSOR_MARKER, "", 1),
        cursor,
    }
}

fn write_golden(path: &Path, raw: &str, output: &str) {
    let mut contents = format!("{INPUT_HEADER}\n{raw}");
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    contents.push_str(OUTPUT_HEADER);
    contents.push('\n');
    contents.push_str(output);

    fs::write(path, contents)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
}

fn output_section(golden: &str) -> &str {
    match golden.split_once(OUTPUT_HEADER) {
        Some((_, rest)) => rest.strip_prefix('\n').unwrap_or(rest),
        None => golden,
    }
}

/// Trailing whitespace per line is insignificant; the output always ends with a newline.
fn normalize(text: &str) -> String {
    text.lines().map(|line| format!("{}\n", line.trim_end())).collect()
}
