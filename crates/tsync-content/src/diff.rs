//! Positional section diff
//!
//! Line `i` of the current text is compared with line `i` of the incoming
//! text. This is not an alignment diff: an inserted line shifts every later
//! line and marks them all as changed until the two texts line up again.
//!
//! Changed positions are grouped into runs, each run is padded with
//! `context_lines` of surrounding text, and runs whose padded ranges overlap
//! or touch are merged into one section. Everything runs in a single pass
//! over the longer text.

use serde::{Deserialize, Serialize};

/// Context lines used when none are configured
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// An inclusive, 1-based range of line numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start >= 1 && start <= end);
        Self { start, end }
    }

    /// Number of lines covered
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Build from an inclusive, 0-based index range
    fn from_indices(lo: usize, hi: usize) -> Self {
        Self::new(lo + 1, hi + 1)
    }
}

impl std::fmt::Display for LineRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// How a section differs between the two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// Both versions have lines in the section
    Modified,
    /// Only the incoming version reaches into the section
    Added,
    /// Only the current version reaches into the section
    Removed,
}

/// A context-padded block of changed lines (a hunk)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSection {
    /// 1-based position among the sections of one comparison
    pub section_number: usize,
    /// Lines of the current version inside the section, if it has any
    pub current_lines: Option<LineRange>,
    /// Lines of the incoming version inside the section, if it has any
    pub incoming_lines: Option<LineRange>,
    pub current_content: String,
    pub incoming_content: String,
    pub change_type: ChangeType,
}

impl DiffSection {
    /// Line range covered by the section across both versions
    pub fn span(&self) -> LineRange {
        match (self.current_lines, self.incoming_lines) {
            (Some(a), Some(b)) => LineRange::new(a.start.min(b.start), a.end.max(b.end)),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => unreachable!("a section always covers at least one line"),
        }
    }
}

/// Result of comparing two texts section by section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub diff_sections: Vec<DiffSection>,
    /// Line ranges not covered by any section
    pub unchanged_ranges: Vec<LineRange>,
    /// Positions whose lines differ (or exist on one side only)
    pub total_changed_lines: usize,
    /// Positions whose lines are equal, including context lines
    pub total_unchanged_lines: usize,
    pub current_line_count: usize,
    pub incoming_line_count: usize,
    /// The longer of the two line counts
    pub total_lines: usize,
}

impl ComparisonResult {
    fn empty() -> Self {
        Self {
            diff_sections: Vec::new(),
            unchanged_ranges: Vec::new(),
            total_changed_lines: 0,
            total_unchanged_lines: 0,
            current_line_count: 0,
            incoming_line_count: 0,
            total_lines: 0,
        }
    }

    /// True when no line differs
    pub fn is_identical(&self) -> bool {
        self.diff_sections.is_empty()
    }
}

/// Groups positional line changes into context-padded sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDiffer {
    context_lines: usize,
}

impl Default for SectionDiffer {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_LINES)
    }
}

impl SectionDiffer {
    pub fn new(context_lines: usize) -> Self {
        Self { context_lines }
    }

    pub fn context_lines(&self) -> usize {
        self.context_lines
    }

    /// Compare `current` against `incoming` position by position.
    pub fn compare(&self, current: &str, incoming: &str) -> ComparisonResult {
        let current_lines: Vec<&str> = current.lines().collect();
        let incoming_lines: Vec<&str> = incoming.lines().collect();
        let total = current_lines.len().max(incoming_lines.len());

        if total == 0 {
            return ComparisonResult::empty();
        }

        let (runs, changed) = changed_runs(&current_lines, &incoming_lines, total);
        let spans = self.padded_spans(&runs, total - 1);

        let diff_sections = spans
            .iter()
            .enumerate()
            .map(|(idx, &(lo, hi))| build_section(idx + 1, lo, hi, &current_lines, &incoming_lines))
            .collect();

        ComparisonResult {
            diff_sections,
            unchanged_ranges: complement(&spans, total),
            total_changed_lines: changed,
            total_unchanged_lines: total - changed,
            current_line_count: current_lines.len(),
            incoming_line_count: incoming_lines.len(),
            total_lines: total,
        }
    }

    /// Pad each run by the context size, clip to `[0, last]`, and merge
    /// runs whose padded ranges overlap or touch.
    fn padded_spans(&self, runs: &[(usize, usize)], last: usize) -> Vec<(usize, usize)> {
        let mut spans: Vec<(usize, usize)> = Vec::with_capacity(runs.len());

        for &(start, end) in runs {
            let lo = start.saturating_sub(self.context_lines);
            let hi = end.saturating_add(self.context_lines).min(last);

            match spans.last_mut() {
                Some((_, prev_hi)) if lo <= *prev_hi + 1 => *prev_hi = (*prev_hi).max(hi),
                _ => spans.push((lo, hi)),
            }
        }

        spans
    }
}

/// Compare with [`DEFAULT_CONTEXT_LINES`].
pub fn compare(current: &str, incoming: &str) -> ComparisonResult {
    SectionDiffer::default().compare(current, incoming)
}

/// Maximal runs of consecutive differing positions (inclusive, 0-based),
/// plus the number of differing positions.
fn changed_runs(current: &[&str], incoming: &[&str], total: usize) -> (Vec<(usize, usize)>, usize) {
    let mut runs: Vec<(usize, usize)> = Vec::new();
    let mut changed = 0;

    for i in 0..total {
        if current.get(i) == incoming.get(i) {
            continue;
        }
        changed += 1;
        match runs.last_mut() {
            Some((_, end)) if *end + 1 == i => *end = i,
            _ => runs.push((i, i)),
        }
    }

    (runs, changed)
}

fn side_range(lines: &[&str], lo: usize, hi: usize) -> (Option<LineRange>, String) {
    if lo >= lines.len() {
        return (None, String::new());
    }
    let hi = hi.min(lines.len() - 1);
    (Some(LineRange::from_indices(lo, hi)), lines[lo..=hi].join("\n"))
}

fn build_section(
    section_number: usize,
    lo: usize,
    hi: usize,
    current: &[&str],
    incoming: &[&str],
) -> DiffSection {
    let (current_lines, current_content) = side_range(current, lo, hi);
    let (incoming_lines, incoming_content) = side_range(incoming, lo, hi);

    let change_type = match (current_lines, incoming_lines) {
        (None, Some(_)) => ChangeType::Added,
        (Some(_), None) => ChangeType::Removed,
        _ => ChangeType::Modified,
    };

    DiffSection {
        section_number,
        current_lines,
        incoming_lines,
        current_content,
        incoming_content,
        change_type,
    }
}

fn complement(spans: &[(usize, usize)], total: usize) -> Vec<LineRange> {
    let mut ranges = Vec::new();
    let mut cursor = 0;

    for &(lo, hi) in spans {
        if lo > cursor {
            ranges.push(LineRange::from_indices(cursor, lo - 1));
        }
        cursor = hi + 1;
    }
    if cursor < total {
        ranges.push(LineRange::from_indices(cursor, total - 1));
    }

    ranges
}
