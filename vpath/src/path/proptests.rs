//! Property-based tests for the path algebra.

use proptest::prelude::*;

use crate::{GlobFs, OsKind, PathContext};

const LINUX: PathContext = PathContext::new(OsKind::Linux);
const WINDOWS: PathContext = PathContext::new(OsKind::Windows);

fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9_-]{1,8}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

// Paths mixing real names, dot elements and doubled separators.
fn messy_path_strategy(sep: &'static str) -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(component_strategy(), 0..8)).prop_map(
        move |(rooted, parts)| {
            let body = parts.join(sep);
            if rooted {
                format!("{sep}{body}")
            } else {
                body
            }
        },
    )
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_-]{1,8}", 0..6).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn windows_path_strategy() -> impl Strategy<Value = String> {
    let volume = prop_oneof![
        Just(String::new()),
        Just("C:".to_string()),
        Just("d:\\".to_string()),
        Just("\\\\host\\share\\".to_string()),
    ];
    (volume, messy_path_strategy("\\")).prop_map(|(vol, rest)| format!("{vol}{rest}"))
}

struct Listing(Vec<String>);

impl GlobFs for Listing {
    fn lstat_exists(&self, _path: &str) -> bool {
        false
    }

    fn read_dir_names(&self, _dir: &str) -> std::io::Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // clean(clean(p)) == clean(p)
    #[test]
    fn clean_is_idempotent(path in messy_path_strategy("/")) {
        let once = LINUX.clean(&path);
        prop_assert_eq!(LINUX.clean(&once), once);
    }

    #[test]
    fn clean_is_idempotent_windows(path in windows_path_strategy()) {
        let once = WINDOWS.clean(&path);
        prop_assert_eq!(WINDOWS.clean(&once), once);
    }

    // Cleaned rooted paths never climb above the root.
    #[test]
    fn clean_rooted_has_no_parent_refs(path in messy_path_strategy("/")) {
        let cleaned = LINUX.clean(&path);
        if cleaned.starts_with('/') {
            prop_assert!(!cleaned.split('/').any(|e| e == ".."));
        }
        prop_assert!(!cleaned.is_empty());
    }

    // split(p) == (dir, file) with dir + file == p
    #[test]
    fn split_concatenates_back(path in messy_path_strategy("/")) {
        let (dir, file) = LINUX.split(&path);
        prop_assert_eq!(format!("{dir}{file}"), path.clone());
        prop_assert!(!file.contains('/'));
    }

    #[test]
    fn split_concatenates_back_windows(path in windows_path_strategy()) {
        let (dir, file) = WINDOWS.split(&path);
        prop_assert_eq!(format!("{dir}{file}"), path.clone());
    }

    // join(split(p)) cleans to clean(p) for non-empty file names.
    #[test]
    fn split_join_inverse(path in absolute_path_strategy()) {
        let (dir, file) = LINUX.split(&path);
        prop_assert_eq!(LINUX.join(&[dir, file]), LINUX.clean(&path));
    }

    // join(base, rel(base, target)) == clean(target)
    #[test]
    fn rel_join_round_trip(base in absolute_path_strategy(), target in absolute_path_strategy()) {
        let rel = LINUX.rel(&base, &target).unwrap();
        prop_assert_eq!(LINUX.join(&[base.as_str(), rel.as_str()]), LINUX.clean(&target));
    }

    // Volumes only exist under Windows semantics.
    #[test]
    fn posix_has_no_volume(path in "\\PC{0,24}") {
        prop_assert_eq!(LINUX.volume_name_len(&path), 0);
        prop_assert_eq!(PathContext::new(OsKind::Darwin).volume_name_len(&path), 0);
    }

    // The volume is a prefix of the path and never longer than it.
    #[test]
    fn volume_is_prefix(path in windows_path_strategy()) {
        let len = WINDOWS.volume_name_len(&path);
        prop_assert!(len <= path.len());
        prop_assert!(path.is_char_boundary(len));
    }

    // Walking every component reconstructs the path.
    #[test]
    fn iterator_covers_all_components(path in absolute_path_strategy()) {
        let mut it = LINUX.path_iterator(path.clone());
        let mut parts = Vec::new();
        while it.next() {
            prop_assert!(!it.part().is_empty());
            prop_assert_eq!(format!("{}{}", it.left_part(), it.right()), path.clone());
            parts.push(it.part().to_string());
        }
        prop_assert!(it.is_last());
        prop_assert_eq!(format!("/{}", parts.join("/")), path);
    }

    // The matcher never panics, and "*" matches any separator-free name.
    #[test]
    fn match_never_panics(pattern in "\\PC{0,12}", name in "\\PC{0,12}") {
        let _ = LINUX.match_pattern(&pattern, &name);
        let _ = WINDOWS.match_pattern(&pattern, &name);
        if !name.contains('/') {
            prop_assert!(LINUX.match_pattern("*", &name).unwrap());
        }
    }

    // A literal name always matches itself.
    #[test]
    fn literal_matches_itself(name in "[a-zA-Z0-9._-]{0,16}") {
        prop_assert!(LINUX.match_pattern(&name, &name).unwrap());
    }

    // Glob results are sorted within a directory.
    #[test]
    fn glob_results_sorted(names in prop::collection::vec("[a-z]{1,6}", 0..20)) {
        let found = LINUX.glob(&Listing(names), "/d/*").unwrap();
        let mut sorted = found.clone();
        sorted.sort();
        prop_assert_eq!(found, sorted);
    }
}
