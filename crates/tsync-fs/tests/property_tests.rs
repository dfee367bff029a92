use proptest::prelude::*;
use tsync_fs::checksum::{fingerprint, fingerprint_str, normalize};
use tsync_fs::NormalizedPath;

fn line_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9 #*-]{0,20}", 0..20)
}

proptest! {
    #[test]
    fn crlf_never_changes_fingerprint(lines in line_strategy()) {
        let lf = lines.join("\n");
        let crlf = lines.join("\r\n");
        prop_assert_eq!(fingerprint_str(&lf), fingerprint_str(&crlf));
    }

    #[test]
    fn trailing_whitespace_never_changes_fingerprint(
        lines in line_strategy(),
        pad in "[ \t\u{00A0}\u{3000}]{1,4}"
    ) {
        let plain = lines.join("\n");
        let padded = lines
            .iter()
            .map(|l| format!("{l}{pad}"))
            .collect::<Vec<_>>()
            .join("\n");
        prop_assert_eq!(fingerprint_str(&plain), fingerprint_str(&padded));
    }

    #[test]
    fn bom_never_changes_fingerprint(content in "\\PC{0,200}") {
        let mut with_bom = vec![0xEF, 0xBB, 0xBF];
        with_bom.extend_from_slice(content.as_bytes());
        prop_assert_eq!(fingerprint(&with_bom), fingerprint_str(&content));
    }

    #[test]
    fn normalization_is_idempotent(content in "\\PC{0,200}") {
        let once = normalize(content.as_bytes());
        let twice = normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_paths_have_no_backslashes_or_dot_components(s in "[a-z./\\\\]{0,30}") {
        let path = NormalizedPath::new(&s);
        let as_str = path.as_str();
        prop_assert!(!as_str.contains('\\'));
        prop_assert!(!as_str.split('/').any(|c| c == "." || c == ".."));
        prop_assert_eq!(NormalizedPath::new(path.to_native()), path.clone());
    }
}
