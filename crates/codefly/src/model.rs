//! # Data Model
//!
//! A question's description document is plain text:
//!
//! ```text
//! Add One                 <- line 0: title
//! Easy                    <- line 1: difficulty
//! Return i + 1.           <- lines 2..: body
//! ```
//!
//! The document is stored verbatim (plus a trailing line terminator), so the
//! body read back is the original body lines joined with `\n`, with no
//! trailing newline.

use crate::error::{CodeflyError, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub title: String,
    pub difficulty: String,
    pub body: String,
}

/// The three parts of a description document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDocument {
    pub title: String,
    pub difficulty: String,
    pub body: String,
}

impl QuestionDocument {
    /// Splits a stored description document. `id` is only used for errors.
    pub fn parse(id: u32, raw: &str) -> Result<Self> {
        let lines: Vec<&str> = raw.lines().collect();

        let title = lines.first().ok_or_else(|| CodeflyError::MalformedQuestion {
            id,
            reason: "missing title line".to_string(),
        })?;
        let difficulty = lines.get(1).ok_or_else(|| CodeflyError::MalformedQuestion {
            id,
            reason: "missing difficulty line".to_string(),
        })?;
        let body = lines.get(2..).map(|rest| rest.join("\n")).unwrap_or_default();

        Ok(Self {
            title: title.to_string(),
            difficulty: difficulty.to_string(),
            body,
        })
    }

    pub fn into_question(self, id: u32) -> Question {
        Question {
            id,
            title: self.title,
            difficulty: self.difficulty,
            body: self.body,
        }
    }
}

/// Outcome of seeding a store with the example data.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub accounts_added: usize,
    pub questions_added: usize,
    pub solutions_written: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.accounts_added == 0 && self.questions_added == 0 && self.solutions_written == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_full_document() {
        let doc = QuestionDocument::parse(1, "Add One\nEasy\nLine A\nLine B\n").unwrap();
        assert_eq!(doc.title, "Add One");
        assert_eq!(doc.difficulty, "Easy");
        assert_eq!(doc.body, "Line A\nLine B");
    }

    #[test]
    fn test_parse_preserves_blank_body_lines() {
        let doc = QuestionDocument::parse(1, "T\nHard\nfirst\n\nthird\n").unwrap();
        assert_eq!(doc.body, "first\n\nthird");
    }

    #[test]
    fn test_parse_crlf() {
        let doc = QuestionDocument::parse(1, "T\r\nMedium\r\nbody\r\n").unwrap();
        assert_eq!(doc.difficulty, "Medium");
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn test_parse_without_body() {
        let doc = QuestionDocument::parse(1, "T\nEasy\n").unwrap();
        assert_eq!(doc.body, "");
    }

    #[test]
    fn test_parse_missing_difficulty() {
        let err = QuestionDocument::parse(4, "Only a title\n").unwrap_err();
        assert!(matches!(err, CodeflyError::MalformedQuestion { id: 4, .. }));
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn test_parse_empty_document() {
        assert!(QuestionDocument::parse(1, "").is_err());
    }

    #[test]
    fn test_seed_report_is_empty() {
        assert!(SeedReport::default().is_empty());
        let report = SeedReport {
            accounts_added: 3,
            ..Default::default()
        };
        assert!(!report.is_empty());
    }
}
