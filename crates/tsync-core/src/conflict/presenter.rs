//! Choosing and writing a conflict representation

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};
use tsync_content::{ReviewDocument, SectionDiffer, render_markers};
use tsync_fs::{NormalizedPath, RobustnessConfig, io};

use crate::{Result, SyncSettings};

/// The three texts and two version labels of one conflicted file
#[derive(Debug, Clone, Copy)]
pub struct ConflictInput<'a> {
    /// Path relative to the project root
    pub path: &'a str,
    pub current: &'a str,
    pub baseline: &'a str,
    pub incoming: &'a str,
    /// Template version the baseline came from
    pub original_label: &'a str,
    /// Template version the incoming text comes from
    pub new_label: &'a str,
}

/// How a conflict was presented
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionKind {
    /// Markers written into the file
    InlineMarkers,
    /// Review document written, file left untouched
    ReviewDocument { document: NormalizedPath },
    /// The review document failed, markers written instead
    FallbackMarkers { reason: String },
}

/// Outcome of [`ConflictPresenter::resolve`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub path: String,
    /// The tracked file on disk
    pub target: NormalizedPath,
    #[serde(flatten)]
    pub kind: ResolutionKind,
}

impl Resolution {
    pub fn document(&self) -> Option<&NormalizedPath> {
        match &self.kind {
            ResolutionKind::ReviewDocument { document } => Some(document),
            _ => None,
        }
    }

    /// Whether the tracked file now contains conflict markers
    pub fn wrote_markers(&self) -> bool {
        !matches!(self.kind, ResolutionKind::ReviewDocument { .. })
    }
}

/// Writes conflicts as inline markers or review documents depending on size.
#[derive(Debug, Clone)]
pub struct ConflictPresenter {
    root: NormalizedPath,
    artifacts_dir: NormalizedPath,
    marker_line_threshold: usize,
    differ: SectionDiffer,
    robustness: RobustnessConfig,
}

impl ConflictPresenter {
    pub fn new(root: impl Into<NormalizedPath>, settings: &SyncSettings) -> Self {
        let root = root.into();
        Self {
            artifacts_dir: settings.artifacts_path(&root),
            root,
            marker_line_threshold: settings.marker_line_threshold,
            differ: settings.differ(),
            robustness: RobustnessConfig::default(),
        }
    }

    pub fn with_robustness(mut self, robustness: RobustnessConfig) -> Self {
        self.robustness = robustness;
        self
    }

    pub fn artifacts_dir(&self) -> &NormalizedPath {
        &self.artifacts_dir
    }

    /// Present one conflict.
    ///
    /// Files up to the marker threshold get inline markers. Larger files get
    /// a review document named `<basename>.diff.md`; if that cannot be built
    /// or written, markers are written instead so the conflict is always
    /// visible.
    ///
    /// # Errors
    ///
    /// Returns an error only if the markers themselves cannot be written.
    pub fn resolve(&self, input: &ConflictInput<'_>) -> Result<Resolution> {
        let target = self.root.join(input.path);
        let line_count = input.current.lines().count().max(input.incoming.lines().count());
        debug!(
            path = input.path,
            line_count,
            threshold = self.marker_line_threshold,
            "resolving conflict"
        );

        if line_count <= self.marker_line_threshold {
            self.write_markers(input, &target)?;
            info!(path = input.path, "wrote inline conflict markers");
            return Ok(Resolution {
                path: input.path.to_string(),
                target,
                kind: ResolutionKind::InlineMarkers,
            });
        }

        let kind = match self.write_review(input) {
            Ok(document) => {
                info!(path = input.path, document = %document, "wrote conflict review document");
                ResolutionKind::ReviewDocument { document }
            }
            Err(e) => {
                warn!(
                    path = input.path,
                    error = %e,
                    "review document failed, falling back to markers"
                );
                self.write_markers(input, &target)?;
                ResolutionKind::FallbackMarkers {
                    reason: e.to_string(),
                }
            }
        };

        Ok(Resolution {
            path: input.path.to_string(),
            target,
            kind,
        })
    }

    fn write_markers(&self, input: &ConflictInput<'_>, target: &NormalizedPath) -> Result<()> {
        let text = render_markers(
            input.current,
            input.baseline,
            input.incoming,
            input.original_label,
            input.new_label,
        );
        io::write_atomic(target, text.as_bytes(), self.robustness)?;
        Ok(())
    }

    fn write_review(&self, input: &ConflictInput<'_>) -> Result<NormalizedPath> {
        let document = ReviewDocument::build(
            input.path,
            input.current,
            input.baseline,
            input.incoming,
            input.original_label,
            input.new_label,
            &self.differ,
        )?;
        let text = document.render(Utc::now())?;
        let path = self.artifacts_dir.join(&document.file_name());
        io::write_atomic(&path, text.as_bytes(), self.robustness)?;
        Ok(path)
    }
}
