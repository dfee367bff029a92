//! Text generators.

/// `"line 1\nline 2\n...line n\n"`
pub fn numbered_lines(n: usize) -> String {
    (1..=n).map(|i| format!("line {i}\n")).collect()
}

/// Replace the 1-based line `line_no` of `text` with `new`.
///
/// # Panics
/// Panics if `text` has fewer than `line_no` lines.
pub fn replace_line(text: &str, line_no: usize, new: &str) -> String {
    let mut lines: Vec<&str> = text.lines().collect();
    assert!(
        line_no >= 1 && line_no <= lines.len(),
        "line {line_no} out of range for {} lines",
        lines.len()
    );
    lines[line_no - 1] = new;

    let mut out = lines.join("\n");
    if text.ends_with('\n') {
        out.push('\n');
    }
    out
}
