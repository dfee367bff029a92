//! End-to-end sync runs: plan, present conflicts, scan custom files, clean up.
//!
//! Each test drives the engine the way an orchestrator would, one run at a
//! time, against a throwaway project directory.

use std::collections::{BTreeMap, HashSet};

use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tsync_content::has_conflict_markers;
use tsync_core::{
    ArtifactJanitor, CleanupOutcome, ConflictArtifacts, ConflictInput, ConflictPresenter,
    FileAction, PlanReport, ResolutionKind, SyncPlanner, SyncSettings, TrackedFileRecord,
};
use tsync_fs::{NormalizedPath, RobustnessConfig, fingerprint_str};
use tsync_test_utils::{TestProject, numbered_lines, replace_line};

struct Run {
    report: PlanReport,
    artifacts: ConflictArtifacts,
}

/// One sync run: classify everything, then present every conflict.
fn run(
    project: &TestProject,
    records: &[TrackedFileRecord],
    upstream: &BTreeMap<String, String>,
    baselines: &BTreeMap<String, String>,
) -> Run {
    let root = NormalizedPath::new(project.root());
    let settings = SyncSettings::load(&root).unwrap();
    let report = SyncPlanner::new(root.clone()).plan(records, upstream);
    let presenter =
        ConflictPresenter::new(root, &settings).with_robustness(RobustnessConfig::no_retry());

    let mut artifacts = ConflictArtifacts::new();
    for state in report.conflicts() {
        let current = project.read(&state.path);
        let resolution = presenter
            .resolve(&ConflictInput {
                path: &state.path,
                current: &current,
                baseline: baselines.get(&state.path).map(String::as_str).unwrap_or(""),
                incoming: &upstream[&state.path],
                original_label: "v1.0.0",
                new_label: "v1.1.0",
            })
            .unwrap();
        artifacts.record(&resolution);
    }

    Run { report, artifacts }
}

fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(p, c)| (p.to_string(), c.to_string()))
        .collect()
}

fn tracked(path: &str, baseline: &str) -> TrackedFileRecord {
    TrackedFileRecord::new(path, Some(fingerprint_str(baseline)))
}

#[test]
fn test_scenarios_in_one_run() {
    let project = TestProject::new();
    project.write("same.md", "A\nB\nC");
    project.write("kept.md", "A\nB\nZ");
    project.write("stale.md", "A\nB");
    project.write("both.md", "A\nX");

    let records = vec![
        tracked("same.md", "A\nB\nC"),
        tracked("kept.md", "A\nB"),
        tracked("stale.md", "A\nB"),
        tracked("both.md", "A\nB"),
    ];
    let upstream = map(&[
        ("same.md", "A\nB\nC"),
        ("stale.md", "A\nB\nC"),
        ("both.md", "A\nY"),
        ("new.md", "X"),
    ]);
    let baselines = map(&[("both.md", "A\nB")]);

    let Run { report, artifacts } = run(&project, &records, &upstream, &baselines);

    let actions: Vec<_> = report
        .states
        .iter()
        .map(|s| (s.path.as_str(), s.action))
        .collect();
    assert_eq!(
        actions,
        vec![
            ("same.md", FileAction::Skip),
            ("kept.md", FileAction::Preserve),
            ("stale.md", FileAction::Update),
            ("both.md", FileAction::Merge),
            ("new.md", FileAction::Add),
        ]
    );
    assert!(report.get("kept.md").unwrap().is_customized);
    assert!(report.get("both.md").unwrap().is_conflict);

    // The small conflict is marked inline, nothing else is touched
    assert!(artifacts.is_empty());
    assert!(has_conflict_markers(&project.read("both.md")));
    project.assert_contains("both.md", "||||||| Base (v1.0.0)\nA\nB\n");
    assert_eq!(project.read("stale.md"), "A\nB");
    project.assert_not_exists("new.md");
}

#[test]
fn test_large_conflict_gets_review_and_cleanup() {
    let project = TestProject::new();
    let baseline = numbered_lines(150);
    let small_base = numbered_lines(50);
    let large_current = replace_line(&baseline, 90, "local");
    let small_current = replace_line(&small_base, 20, "local");
    project.write("docs/large.md", &large_current);
    project.write("docs/small.md", &small_current);

    let records = vec![
        tracked("docs/large.md", &baseline),
        tracked("docs/small.md", &small_base),
    ];
    let upstream = map(&[
        ("docs/large.md", replace_line(&baseline, 90, "upstream").as_str()),
        ("docs/small.md", replace_line(&small_base, 20, "upstream").as_str()),
    ]);
    let baselines = map(&[
        ("docs/large.md", baseline.as_str()),
        ("docs/small.md", small_base.as_str()),
    ]);

    let Run {
        report,
        mut artifacts,
    } = run(&project, &records, &upstream, &baselines);
    assert_eq!(report.count(FileAction::Merge), 2);

    // Large file: review document only, file unchanged
    assert_eq!(project.read("docs/large.md"), large_current);
    let document = artifacts.document_for("docs/large.md").unwrap().to_path_buf();
    assert_eq!(
        document,
        project.path(".template-sync/conflicts/large.md.diff.md")
    );
    let review = predicate::str::contains("# Conflict Review: docs/large.md\n")
        .and(predicate::str::contains("## Section 1: lines 87-93 (Modified)"))
        .and(predicate::str::contains("upstream\n"))
        .and(predicate::str::contains("- Lines 1-86\n- Lines 94-150\n"))
        .and(predicate::str::contains("<<<<<<<").not());
    let document_text = project.read(".template-sync/conflicts/large.md.diff.md");
    assert!(review.eval(document_text.as_str()));

    // Small file: inline markers, no document
    assert!(artifacts.document_for("docs/small.md").is_none());
    let small = project.read("docs/small.md");
    assert!(has_conflict_markers(&small));
    let marked = predicate::str::starts_with("<<<<<<< Current\n")
        .and(predicate::str::contains("line 19\nlocal\nline 21\n"))
        .and(predicate::str::contains("line 50\n||||||| Base (v1.0.0)\n"))
        .and(predicate::str::contains("line 19\nupstream\nline 21\n"))
        .and(predicate::str::ends_with(">>>>>>> Incoming (v1.1.0)\n"));
    assert!(marked.eval(small.as_str()));

    let janitor = ArtifactJanitor::new(RobustnessConfig::no_retry());
    let root = NormalizedPath::new(project.root());
    let outcome = artifacts.cleanup(&janitor, &root, &SyncSettings::default().artifacts_dir);
    assert_eq!(outcome, CleanupOutcome::Removed);
    project.assert_not_exists(".template-sync/conflicts");
    assert_eq!(janitor.cleanup_default(&root), CleanupOutcome::NotPresent);
}

#[test]
fn test_missing_baseline_text_still_shows_conflict() {
    let project = TestProject::new();
    let baseline = numbered_lines(130);
    project.write("big.md", &replace_line(&baseline, 5, "local"));

    let records = vec![tracked("big.md", &baseline)];
    let upstream = map(&[("big.md", replace_line(&baseline, 5, "upstream").as_str())]);

    // The orchestrator has no baseline text for this file
    let Run { artifacts, .. } = run(&project, &records, &upstream, &BTreeMap::new());

    assert!(artifacts.is_empty());
    project.assert_contains("big.md", "<<<<<<< Current\n");
    project.assert_contains("big.md", ">>>>>>> Incoming (v1.1.0)\n");
}

#[test]
fn test_custom_files_are_reported_separately() {
    let project = TestProject::new();
    project.write("agents/review.md", "official");
    project.write("agents/my-helper.md", "mine");
    project.write("agents/notes.txt", "ignored");

    let root = NormalizedPath::new(project.root());
    let settings = SyncSettings::load(&root).unwrap();
    let official: HashSet<String> = ["review.md".to_string()].into_iter().collect();

    let custom = settings.scanner().scan(&project.path("agents"), &official);
    assert_eq!(custom, vec!["my-helper.md".to_string()]);
    assert!(settings.scanner().scan(&project.path("missing"), &official).is_empty());
}

#[test]
fn test_rerun_is_idempotent() {
    let project = TestProject::new();
    project.write("a.md", "A\nX\n");
    let records = vec![tracked("a.md", "A\nB\n")];
    let upstream = map(&[("a.md", "A\nY\n")]);
    let baselines = map(&[("a.md", "A\nB\n")]);

    let first = run(&project, &records, &upstream, &baselines);
    let marked = project.read("a.md");

    // Restore the user's version and run again
    project.write("a.md", "A\nX\n");
    let second = run(&project, &records, &upstream, &baselines);

    assert_eq!(first.report, second.report);
    assert_eq!(project.read("a.md"), marked);
}

#[test]
fn test_resolution_kind_for_settings_threshold() {
    let project = TestProject::new();
    project.write(".template-sync/config.toml", "marker_line_threshold = 2\n");
    project.write("a.md", "A\nX\nC\n");
    let records = vec![tracked("a.md", "A\nB\nC\n")];
    let upstream = map(&[("a.md", "A\nY\nC\n")]);
    let baselines = map(&[("a.md", "A\nB\nC\n")]);

    let Run { artifacts, .. } = run(&project, &records, &upstream, &baselines);
    assert_eq!(artifacts.len(), 1);
    assert_eq!(project.read("a.md"), "A\nX\nC\n");

    let root = NormalizedPath::new(project.root());
    let presenter = ConflictPresenter::new(root, &SyncSettings::default());
    let resolution = presenter
        .resolve(&ConflictInput {
            path: "a.md",
            current: "A\nX\nC\n",
            baseline: "A\nB\nC\n",
            incoming: "A\nY\nC\n",
            original_label: "v1.0.0",
            new_label: "v1.1.0",
        })
        .unwrap();
    assert_eq!(resolution.kind, ResolutionKind::InlineMarkers);
}
