//! Markdown review documents for large conflicts
//!
//! When a conflicted file is too large for inline markers, the reviewer gets
//! a side-by-side document instead: one block per changed section showing the
//! current and incoming text, followed by the ranges that did not change.

use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::diff::{ComparisonResult, DiffSection, LineRange, SectionDiffer};
use crate::error::{Error, Result};
use crate::format::language_hint;

/// Suffix appended to a file's basename to name its review document
pub const REVIEW_SUFFIX: &str = ".diff.md";

/// A computed, not yet rendered, review document for one conflicted file.
#[derive(Debug, Clone)]
pub struct ReviewDocument {
    path: String,
    original_label: String,
    new_label: String,
    comparison: ComparisonResult,
}

impl ReviewDocument {
    /// Compare `current` with `incoming` and prepare the document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DiffComputation`] when `baseline` is empty: without a
    /// recorded base there is nothing to anchor the review to, and callers
    /// fall back to inline markers.
    pub fn build(
        path: &str,
        current: &str,
        baseline: &str,
        incoming: &str,
        original_label: &str,
        new_label: &str,
        differ: &SectionDiffer,
    ) -> Result<Self> {
        if baseline.is_empty() {
            return Err(Error::diff(format!("baseline for {path} is empty")));
        }

        Ok(Self {
            path: path.to_string(),
            original_label: original_label.to_string(),
            new_label: new_label.to_string(),
            comparison: differ.compare(current, incoming),
        })
    }

    pub fn comparison(&self) -> &ComparisonResult {
        &self.comparison
    }

    /// `<basename>.diff.md`
    pub fn file_name(&self) -> String {
        let basename = self.path.rsplit(['/', '\\']).next().unwrap_or(self.path.as_str());
        format!("{basename}{REVIEW_SUFFIX}")
    }

    /// Render the document. `generated_at` is the only value that differs
    /// between two renderings of the same inputs.
    pub fn render(&self, generated_at: DateTime<Utc>) -> Result<String> {
        let mut out = String::new();
        let hint = language_hint(&self.path);
        let cmp = &self.comparison;

        writeln!(out, "# Conflict Review: {}", self.path)?;
        writeln!(out)?;
        writeln!(out, "| Version | Label |")?;
        writeln!(out, "|---|---|")?;
        writeln!(out, "| Local base | {} |", self.original_label)?;
        writeln!(out, "| Incoming | {} |", self.new_label)?;
        writeln!(
            out,
            "| Generated | {} |",
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "{} changed section(s), {} changed line(s), {} unchanged line(s) out of {}.",
            cmp.diff_sections.len(),
            cmp.total_changed_lines,
            cmp.total_unchanged_lines,
            cmp.total_lines
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "`{}` still holds your current version. Edit it to take what you need from the incoming side.",
            self.path
        )?;

        for section in &cmp.diff_sections {
            self.render_section(&mut out, section, hint)?;
        }

        writeln!(out)?;
        writeln!(out, "## Unchanged Lines")?;
        writeln!(out)?;
        if cmp.unchanged_ranges.is_empty() {
            writeln!(out, "_(none)_")?;
        }
        for range in &cmp.unchanged_ranges {
            writeln!(out, "- Lines {range}")?;
        }

        Ok(out)
    }

    fn render_section(&self, out: &mut String, section: &DiffSection, hint: &str) -> Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "## Section {}: lines {} ({:?})",
            section.section_number,
            section.span(),
            section.change_type
        )?;

        writeln!(out)?;
        writeln!(out, "### Current{}", lines_suffix("", section.current_lines))?;
        writeln!(out)?;
        write_block(out, &section.current_content, section.current_lines, hint)?;

        writeln!(out)?;
        writeln!(
            out,
            "### Incoming{}",
            lines_suffix(&self.new_label, section.incoming_lines)
        )?;
        writeln!(out)?;
        write_block(out, &section.incoming_content, section.incoming_lines, hint)?;

        Ok(())
    }
}

fn lines_suffix(label: &str, range: Option<LineRange>) -> String {
    match (label.is_empty(), range) {
        (true, Some(r)) => format!(" (lines {r})"),
        (true, None) => String::new(),
        (false, Some(r)) => format!(" ({label}, lines {r})"),
        (false, None) => format!(" ({label})"),
    }
}

fn write_block(
    out: &mut String,
    content: &str,
    range: Option<LineRange>,
    hint: &str,
) -> std::fmt::Result {
    if range.is_none() {
        return writeln!(out, "_(no lines)_");
    }
    let fence = fence_for(content);
    writeln!(out, "{fence}{hint}")?;
    writeln!(out, "{content}")?;
    writeln!(out, "{fence}")
}

/// A backtick fence longer than any backtick run inside `content`.
fn fence_for(content: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in content.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}
