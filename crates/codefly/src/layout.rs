//! # On-Disk Layout
//!
//! ```text
//! <root>/
//! ├── LoginInfo.txt                 # alternating lines: username, password
//! └── Q<N>/                         # N = 1..counter, no zero-padding
//!     ├── QuestionDescription.txt   # title, difficulty, body
//!     ├── HintCode.<ext>
//!     ├── Test.<ext>
//!     └── <username>/
//!         └── Solution.<ext>
//! ```
//!
//! All paths produced here are relative to the store root; backends resolve
//! them.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

pub const LOGIN_FILE: &str = "LoginInfo.txt";
pub const DESCRIPTION_FILE: &str = "QuestionDescription.txt";

const HINT_STEM: &str = "HintCode";
const TEST_STEM: &str = "Test";
const SOLUTION_STEM: &str = "Solution";

static QUESTION_DIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Q(\d+)$").expect("valid regex"));

pub fn question_dir_name(id: u32) -> String {
    format!("Q{}", id)
}

/// Numeric suffix of a question folder name, `None` if `name` is not one.
pub fn parse_question_dir(name: &str) -> Option<u64> {
    QUESTION_DIR
        .captures(name)
        .and_then(|caps| caps.get(1))
        // Digit runs too long for u64 still count as folders.
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
}

/// Lowercased language name used as a file extension.
pub fn language_ext(language: &str) -> String {
    language.to_lowercase()
}

pub fn description_path(id: u32) -> PathBuf {
    PathBuf::from(question_dir_name(id)).join(DESCRIPTION_FILE)
}

pub fn hint_path(id: u32, ext: &str) -> PathBuf {
    PathBuf::from(question_dir_name(id)).join(format!("{}.{}", HINT_STEM, ext))
}

pub fn test_path(id: u32, ext: &str) -> PathBuf {
    PathBuf::from(question_dir_name(id)).join(format!("{}.{}", TEST_STEM, ext))
}

pub fn user_dir(id: u32, username: &str) -> PathBuf {
    PathBuf::from(question_dir_name(id)).join(username)
}

pub fn solution_path(id: u32, username: &str, ext: &str) -> PathBuf {
    user_dir(id, username).join(format!("{}.{}", SOLUTION_STEM, ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_dir_name_has_no_padding() {
        assert_eq!(question_dir_name(1), "Q1");
        assert_eq!(question_dir_name(12), "Q12");
    }

    #[test]
    fn test_parse_question_dir() {
        assert_eq!(parse_question_dir("Q1"), Some(1));
        assert_eq!(parse_question_dir("Q007"), Some(7));
        assert_eq!(parse_question_dir("Q"), None);
        assert_eq!(parse_question_dir("q1"), None);
        assert_eq!(parse_question_dir("Q1a"), None);
        assert_eq!(parse_question_dir("XQ1"), None);
        assert_eq!(parse_question_dir("LoginInfo.txt"), None);
    }

    #[test]
    fn test_parse_question_dir_huge_suffix() {
        assert_eq!(
            parse_question_dir("Q99999999999999999999999"),
            Some(u64::MAX)
        );
    }

    #[test]
    fn test_language_ext_lowercases() {
        assert_eq!(language_ext("Java"), "java");
        assert_eq!(language_ext("PY"), "py");
        // No other normalization: the name is used as given
        assert_eq!(language_ext(".Rs"), ".rs");
        assert_eq!(language_ext(" Go"), " go");
    }

    #[test]
    fn test_artifact_paths() {
        assert_eq!(
            description_path(3),
            PathBuf::from("Q3").join("QuestionDescription.txt")
        );
        assert_eq!(hint_path(3, "java"), PathBuf::from("Q3").join("HintCode.java"));
        assert_eq!(test_path(3, "java"), PathBuf::from("Q3").join("Test.java"));
        assert_eq!(
            solution_path(3, "Amy", "py"),
            PathBuf::from("Q3").join("Amy").join("Solution.py")
        );
    }
}
