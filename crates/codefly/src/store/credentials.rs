//! # Credential Log
//!
//! `LoginInfo.txt` is an append-only log of two-line records:
//!
//! ```text
//! Amy
//! 123456
//! Bob
//! 000000
//! ```
//!
//! On open the whole log is replayed into an ordered record list plus a
//! lookup index. The index is a pure function of the log: replaying the same
//! file always yields the same map, and every mutation goes through
//! [`CredentialLog::push`] followed by an append of [`Credential::to_record`].
//! If a username appears twice (only possible through manual edits) the later
//! record wins.

use crate::error::{CodeflyError, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    /// The two-line record appended to the login file.
    pub fn to_record(&self) -> String {
        format!("{}\n{}\n", self.username, self.password)
    }
}

#[derive(Debug, Default, Clone)]
pub struct CredentialLog {
    records: Vec<Credential>,
    index: HashMap<String, String>,
}

impl CredentialLog {
    /// Replays the login file.
    ///
    /// A trailing empty line is tolerated; a username line with no password
    /// line after it is a [`CodeflyError::CorruptCredentials`].
    pub fn replay(raw: &str) -> Result<Self> {
        let mut lines: Vec<&str> = raw.lines().collect();
        if lines.len() % 2 == 1 && lines.last() == Some(&"") {
            lines.pop();
        }

        let mut log = Self::default();
        for (i, pair) in lines.chunks(2).enumerate() {
            let [username, password] = pair else {
                return Err(CodeflyError::CorruptCredentials {
                    line: i * 2 + 1,
                    username: pair[0].to_string(),
                });
            };
            log.push(Credential {
                username: username.to_string(),
                password: password.to_string(),
            });
        }
        Ok(log)
    }

    pub fn push(&mut self, credential: Credential) {
        self.index
            .insert(credential.username.clone(), credential.password.clone());
        self.records.push(credential);
    }

    pub fn contains(&self, username: &str) -> bool {
        self.index.contains_key(username)
    }

    pub fn password(&self, username: &str) -> Option<&str> {
        self.index.get(username).map(String::as_str)
    }

    pub fn index(&self) -> &HashMap<String, String> {
        &self.index
    }

    #[cfg(test)]
    pub(crate) fn records(&self) -> &[Credential] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_empty() {
        let log = CredentialLog::replay("").unwrap();
        assert!(log.is_empty());
        assert!(log.records().is_empty());
    }

    #[test]
    fn test_replay_pairs() {
        let log = CredentialLog::replay("Amy\n123456\nBob\n000000\n").unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.password("Amy"), Some("123456"));
        assert_eq!(log.password("Bob"), Some("000000"));
        assert_eq!(log.password("John"), None);
    }

    #[test]
    fn test_replay_without_final_newline() {
        let log = CredentialLog::replay("Amy\n123456").unwrap();
        assert_eq!(log.password("Amy"), Some("123456"));
    }

    #[test]
    fn test_replay_tolerates_trailing_blank_line() {
        let log = CredentialLog::replay("Amy\n123456\n\n").unwrap();
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_replay_missing_password_line() {
        let err = CredentialLog::replay("Amy\n123456\nBob\n").unwrap_err();
        match err {
            CodeflyError::CorruptCredentials { line, username } => {
                assert_eq!(line, 3);
                assert_eq!(username, "Bob");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_later_record_wins() {
        let log = CredentialLog::replay("Amy\nold\nAmy\nnew\n").unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.records().len(), 2);
        assert_eq!(log.password("Amy"), Some("new"));
    }

    #[test]
    fn test_index_matches_replayed_records() {
        let mut log = CredentialLog::default();
        let mut file = String::new();
        for (u, p) in [("Amy", "1"), ("Bob", "2")] {
            let credential = Credential {
                username: u.to_string(),
                password: p.to_string(),
            };
            file.push_str(&credential.to_record());
            log.push(credential);
        }

        let replayed = CredentialLog::replay(&file).unwrap();
        assert_eq!(replayed.index(), log.index());
        assert_eq!(replayed.records(), log.records());
    }
}
