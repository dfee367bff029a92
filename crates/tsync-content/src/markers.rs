//! Git-style conflict markers
//!
//! Small conflicts are written straight into the tracked file in diff3
//! layout so editors with conflict-marker support can resolve them inline:
//!
//! ```text
//! <<<<<<< Current
//! (local content)
//! ||||||| Base (<original version>)
//! (baseline content)
//! =======
//! (incoming content)
//! >>>>>>> Incoming (<new version>)
//! ```

const CURRENT_MARKER: &str = "<<<<<<< Current";
const BASE_MARKER: &str = "|||||||";
const SEPARATOR: &str = "=======";
const INCOMING_MARKER: &str = ">>>>>>>";

/// Render the full conflict block for one file.
///
/// Every marker sits on its own line and the result ends with a newline.
pub fn render_markers(
    current: &str,
    baseline: &str,
    incoming: &str,
    original_label: &str,
    new_label: &str,
) -> String {
    let mut out = String::with_capacity(current.len() + baseline.len() + incoming.len() + 128);

    out.push_str(CURRENT_MARKER);
    out.push('\n');
    push_block(&mut out, current);

    out.push_str(&format!("{BASE_MARKER} Base ({original_label})\n"));
    push_block(&mut out, baseline);

    out.push_str(SEPARATOR);
    out.push('\n');
    push_block(&mut out, incoming);

    out.push_str(&format!("{INCOMING_MARKER} Incoming ({new_label})\n"));
    out
}

/// Append `text` so that it ends in exactly one newline. Empty text adds
/// nothing.
fn push_block(out: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    out.push_str(text.strip_suffix('\n').unwrap_or(text));
    out.push('\n');
}

/// Whether `text` still contains an unresolved marker block.
pub fn has_conflict_markers(text: &str) -> bool {
    let mut open = false;
    for line in text.lines() {
        if line.starts_with(CURRENT_MARKER) {
            open = true;
        } else if open && line.starts_with(INCOMING_MARKER) {
            return true;
        }
    }
    false
}
