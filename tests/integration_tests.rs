//! Integration tests for elmup
//!
//! These tests verify:
//! - The update scenarios for both manifest schemas
//! - Byte-exact preservation outside rewritten requirements
//! - The update core never touches the filesystem

use elmup::domain::{Dependency, DependencyFile};
use elmup::manifest::load_manifests;
use elmup::{update, FileUpdater, UpdateError};
use std::fs;
use tempfile::TempDir;

const ELM_PACKAGE_JSON: &str = r#"{
    "version": "1.0.0",
    "summary": "helpful summary of your project, less than 80 characters",
    "repository": "https://github.com/user/project.git",
    "license": "BSD3",
    "source-directories": [
        "."
    ],
    "exposed-modules": [],
    "dependencies": {
        "elm-lang/core": "5.1.1 <= v < 6.0.0",
        "elm-lang/html": "2.0.0 <= v < 3.0.0",
        "rtfeldman/elm-css": "13.1.1 <= v <= 13.1.1",
        "NoRedInk/datetimepicker": "3.0.1 <= v <= 3.0.1"
    },
    "elm-version": "0.18.0 <= v < 0.19.0"
}
"#;

const ELM_JSON: &str = r#"{
    "type": "application",
    "source-directories": [
        "src"
    ],
    "elm-version": "0.19.0",
    "dependencies": {
        "direct": {
            "elm/browser": "1.0.0",
            "elm/core": "1.0.0",
            "elm/html": "1.0.0",
            "elm/regex": "1.0.0"
        },
        "indirect": {
            "elm/json": "1.0.0",
            "elm/time": "1.0.0",
            "elm/url": "1.0.0",
            "elm/virtual-dom": "1.0.0"
        }
    },
    "test-dependencies": {
        "direct": {},
        "indirect": {}
    }
}
"#;

fn files() -> Vec<DependencyFile> {
    vec![
        DependencyFile::new("elm-package.json", ELM_PACKAGE_JSON),
        DependencyFile::new("elm.json", ELM_JSON),
    ]
}

fn elm_css_bump() -> Dependency {
    Dependency::new("rtfeldman/elm-css")
        .with_versions("13.1.1", "14.0.0")
        .with_requirement(
            "elm-package.json",
            "13.1.1 <= v <= 13.1.1",
            "14.0.0 <= v <= 14.0.0",
        )
}

fn regex_bump() -> Dependency {
    Dependency::new("elm/regex")
        .with_versions("1.0.0", "1.1.0")
        .with_requirement("elm.json", "1.0.0", "1.1.0")
}

/// Byte offsets at which two equal-length strings differ
fn differing_offsets(a: &str, b: &str) -> Vec<usize> {
    a.bytes()
        .zip(b.bytes())
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i)
        .collect()
}

mod scenarios {
    use super::*;

    #[test]
    fn test_elm_package_json_update() {
        let updated = update(&files(), &[elm_css_bump()]).unwrap();

        assert_eq!(updated.len(), 1);
        let file = updated.iter().find(|f| f.name == "elm-package.json").unwrap();
        assert!(file
            .content
            .contains(r#""rtfeldman/elm-css": "14.0.0 <= v <= 14.0.0","#));
        assert!(file
            .content
            .contains(r#""NoRedInk/datetimepicker": "3.0.1 <= v <= 3.0.1""#));
        assert!(updated.iter().all(|f| f.name != "elm.json"));
    }

    #[test]
    fn test_elm_json_update() {
        let updated = update(&files(), &[regex_bump()]).unwrap();

        assert_eq!(updated.len(), 1);
        let file = updated.iter().find(|f| f.name == "elm.json").unwrap();
        assert!(file.content.contains(r#""elm/regex": "1.1.0""#));
        assert!(file.content.contains(r#""elm/html": "1.0.0""#));
    }

    #[test]
    fn test_unchanged_requirements_raise() {
        let dep = Dependency::new("rtfeldman/elm-css")
            .with_versions("13.1.1", "14.0.0")
            .with_requirement(
                "elm-package.json",
                "13.1.1 <= v <= 13.1.1",
                "13.1.1 <= v <= 13.1.1",
            );

        let err = update(&files(), &[dep]).unwrap_err();
        assert_eq!(err.to_string(), "No files have changed!");
    }

    #[test]
    fn test_both_updates_in_one_call() {
        let updated = update(&files(), &[elm_css_bump(), regex_bump()]).unwrap();

        let names: Vec<_> = updated.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["elm-package.json", "elm.json"]);
    }
}

mod properties {
    use super::*;

    #[test]
    fn test_only_requirement_bytes_differ() {
        let updated = update(&files(), &[regex_bump()]).unwrap();
        let content = &updated[0].content;

        // Same-length replacement, so offsets line up
        assert_eq!(content.len(), ELM_JSON.len());
        let offsets = differing_offsets(ELM_JSON, content);
        assert!(!offsets.is_empty());

        let start = ELM_JSON.find(r#""elm/regex": "1.0.0""#).unwrap() + r#""elm/regex": "#.len();
        let end = start + r#""1.0.0""#.len();
        assert!(offsets.iter().all(|&i| i >= start && i < end));
    }

    #[test]
    fn test_everything_outside_value_is_preserved() {
        let updated = update(&files(), &[elm_css_bump()]).unwrap();
        let content = &updated[0].content;

        let old_value = "13.1.1 <= v <= 13.1.1";
        let new_value = "14.0.0 <= v <= 14.0.0";
        let at = ELM_PACKAGE_JSON.find(old_value).unwrap();

        assert_eq!(&content[..at], &ELM_PACKAGE_JSON[..at]);
        assert_eq!(&content[at..at + new_value.len()], new_value);
        assert_eq!(
            &content[at + new_value.len()..],
            &ELM_PACKAGE_JSON[at + old_value.len()..]
        );
    }

    #[test]
    fn test_idempotent() {
        let once = update(&files(), &[regex_bump()]).unwrap();

        let err = update(&once, &[regex_bump()]).unwrap_err();
        assert!(matches!(err, UpdateError::NoFilesChanged));
    }

    #[test]
    fn test_no_cross_match_on_name_prefix() {
        let content = r#"{
    "dependencies": {
        "direct": {
            "elm/html": "1.0.0",
            "elm/html-lang": "1.0.0"
        },
        "indirect": {}
    }
}
"#;
        let files = vec![DependencyFile::new("elm.json", content)];
        let dep = Dependency::new("elm/html").with_requirement("elm.json", "1.0.0", "1.0.1");

        let updated = update(&files, &[dep]).unwrap();
        assert!(updated[0].content.contains(r#""elm/html": "1.0.1""#));
        assert!(updated[0].content.contains(r#""elm/html-lang": "1.0.0""#));
    }

    #[test]
    fn test_multi_file_distribution() {
        let dep = Dependency::new("elm/core")
            .with_requirement("elm-package.json", "5.1.1 <= v < 6.0.0", "5.1.1 <= v < 7.0.0")
            .with_requirement("elm.json", "1.0.0", "1.0.5");

        let updated = update(&files(), &[dep]).unwrap();
        assert_eq!(updated.len(), 2);
        assert!(updated[0]
            .content
            .contains(r#""elm-lang/core": "5.1.1 <= v < 7.0.0""#));
        assert!(!updated[0].content.contains("1.0.5"));
        assert!(updated[1].content.contains(r#""elm/core": "1.0.5""#));
        assert!(!updated[1].content.contains("7.0.0"));
    }

    #[test]
    fn test_cumulative_rewrites_return_file_once() {
        let deps = vec![
            regex_bump(),
            Dependency::new("elm/browser").with_requirement("elm.json", "1.0.0", "1.0.1"),
            Dependency::new("elm/json").with_requirement("elm.json", "1.0.0", "1.1.2"),
        ];

        let updated = update(&files(), &deps).unwrap();
        assert_eq!(updated.len(), 1);
        let content = &updated[0].content;
        assert!(content.contains(r#""elm/regex": "1.1.0""#));
        assert!(content.contains(r#""elm/browser": "1.0.1""#));
        assert!(content.contains(r#""elm/json": "1.1.2""#));
        assert!(content.contains(r#""elm/time": "1.0.0""#));
    }
}

mod filesystem {
    use super::*;

    fn entries(dir: &TempDir) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_update_does_not_store_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("elm.json"), ELM_JSON).unwrap();
        fs::write(dir.path().join("elm-package.json"), ELM_PACKAGE_JSON).unwrap();

        let before = entries(&dir);
        let files = load_manifests(dir.path()).unwrap();
        let updated = FileUpdater::new(files, vec![elm_css_bump(), regex_bump()])
            .unwrap()
            .updated_dependency_files()
            .unwrap();

        assert_eq!(updated.len(), 2);
        assert_eq!(entries(&dir), before);
        assert_eq!(
            fs::read_to_string(dir.path().join("elm.json")).unwrap(),
            ELM_JSON
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("elm-package.json")).unwrap(),
            ELM_PACKAGE_JSON
        );
    }
}
