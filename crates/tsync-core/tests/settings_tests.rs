//! Tests for settings loaded from a project

use pretty_assertions::assert_eq;
use tsync_core::{ConflictInput, ConflictPresenter, Error, ResolutionKind, SyncSettings};
use tsync_fs::{ConfigStore, NormalizedPath, SyncPath};
use tsync_test_utils::{TestProject, numbered_lines, replace_line};

#[test]
fn test_saved_settings_load_back() {
    let project = TestProject::new();
    let root = NormalizedPath::new(project.root());
    let settings = SyncSettings {
        context_lines: 1,
        marker_line_threshold: 20,
        artifacts_dir: "review".to_string(),
        custom_file_extension: "txt".to_string(),
    };
    ConfigStore::new()
        .save(&root.join(SyncPath::ConfigFile.as_str()), &settings)
        .unwrap();

    let loaded = SyncSettings::load(&root).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.scanner().extension(), "txt");
}

#[test]
fn test_loaded_settings_drive_presenter() {
    let project = TestProject::new();
    project.write(
        ".template-sync/config.toml",
        "marker_line_threshold = 10\ncontext_lines = 0\nartifacts_dir = \"out/reviews\"\n",
    );
    let root = NormalizedPath::new(project.root());
    let settings = SyncSettings::load(&root).unwrap();

    let baseline = numbered_lines(11);
    let current = replace_line(&baseline, 6, "mine");
    let incoming = replace_line(&baseline, 6, "theirs");
    let resolution = ConflictPresenter::new(root, &settings)
        .resolve(&ConflictInput {
            path: "notes.md",
            current: &current,
            baseline: &baseline,
            incoming: &incoming,
            original_label: "1.0",
            new_label: "2.0",
        })
        .unwrap();

    assert!(matches!(resolution.kind, ResolutionKind::ReviewDocument { .. }));
    project.assert_contains("out/reviews/notes.md.diff.md", "## Section 1: lines 6 (Modified)");
    project.assert_contains("out/reviews/notes.md.diff.md", "- Lines 1-5\n- Lines 7-11\n");
    project.assert_not_exists("notes.md");
}

#[test]
fn test_malformed_settings_file_is_an_error() {
    let project = TestProject::new();
    project.write(".template-sync/config.toml", "context_lines = \"three\"\n");

    let result = SyncSettings::load(&NormalizedPath::new(project.root()));
    assert!(matches!(result, Err(Error::Fs(tsync_fs::Error::ConfigParse { .. }))));
}

#[test]
fn test_dotted_extension_is_rejected() {
    let project = TestProject::new();
    project.write(".template-sync/config.toml", "custom_file_extension = \".md\"\n");

    let result = SyncSettings::load(&NormalizedPath::new(project.root()));
    assert!(matches!(result, Err(Error::InvalidSettings { .. })));
}
