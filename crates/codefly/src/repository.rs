//! # Repository
//!
//! [`Repository`] owns the mapping between in-memory state (the question
//! counter and the credential index) and the files under the store root.
//! Nothing else should read or write those files; paths it hands out for
//! tests, hints and solutions are read-only views for callers such as a
//! grader.
//!
//! ## Lifecycle
//!
//! [`Repository::open`] is the only constructor:
//!
//! 1. Create the root if missing.
//! 2. Count root directories named `Q<digits>`. The count becomes the
//!    question counter. This is the number of folders, not the highest
//!    suffix: a folder removed out of band makes the two disagree, which is
//!    logged but not corrected.
//! 3. Create an empty `LoginInfo.txt` if missing, then replay it.
//!
//! There is no close. Construct it once and pass `&Repository` or
//! `&mut Repository` to whatever needs it.
//!
//! ## Single Writer
//!
//! Every mutator takes `&mut self`, so one owner serializes all writes.
//! Sharing across threads needs the caller's own `Mutex`.
//!
//! ## Partial Writes
//!
//! `add_question` advances the counter and creates the folder before writing
//! its three files. A failure part way leaves a discoverable, partially
//! populated folder; there is no rollback.

use crate::config::RepositoryConfig;
use crate::error::{CodeflyError, Result};
use crate::layout;
use crate::model::{Question, QuestionDocument};
use crate::store::backend::StorageBackend;
use crate::store::credentials::{Credential, CredentialLog};
use crate::store::fs_backend::FsBackend;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct Repository<B: StorageBackend> {
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    source_ext: String,
    question_count: u32,
    highest_suffix: u64,
    credentials: CredentialLog,
}

impl Repository<FsBackend> {
    /// Opens the filesystem store at `config.root`.
    pub fn open_dir(config: &RepositoryConfig) -> Result<Self> {
        Self::open(FsBackend::new(&config.root), config)
    }
}

impl<B: StorageBackend> Repository<B> {
    pub fn open(backend: B, config: &RepositoryConfig) -> Result<Self> {
        backend.ensure_root()?;

        let suffixes: Vec<u64> = backend
            .list_dirs()?
            .iter()
            .filter_map(|name| layout::parse_question_dir(name))
            .collect();
        let question_count = u32::try_from(suffixes.len())
            .map_err(|_| CodeflyError::Store("too many question folders".to_string()))?;

        let highest = suffixes.iter().copied().max().unwrap_or(0);
        if highest != u64::from(question_count) {
            warn!(
                "question folders are not dense: {} folders but highest is Q{}",
                question_count, highest
            );
        }

        let login = Path::new(layout::LOGIN_FILE);
        if !backend.exists(login) {
            backend.append(login, "")?;
        }
        let raw = backend.read(login)?.unwrap_or_default();
        let credentials = CredentialLog::replay(&raw)?;

        info!(
            "opened repository: {} questions, {} accounts",
            question_count,
            credentials.len()
        );

        Ok(Self {
            backend,
            source_ext: config.source_ext(),
            question_count,
            highest_suffix: highest,
            credentials,
        })
    }

    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    /// Highest `Q<N>` suffix seen on open or assigned since.
    ///
    /// Equals [`Self::question_count`] unless folders were removed out of band.
    pub fn highest_question_suffix(&self) -> u64 {
        self.highest_suffix
    }

    /// Extension used for every written hint, test and solution file.
    pub fn source_ext(&self) -> &str {
        &self.source_ext
    }

    // --- Accounts ---

    pub fn credentials(&self) -> &HashMap<String, String> {
        self.credentials.index()
    }

    pub fn password(&self, username: &str) -> Option<&str> {
        self.credentials.password(username)
    }

    pub fn verify_login(&self, username: &str, password: &str) -> bool {
        self.password(username) == Some(password)
    }

    /// Registers a new account and appends its record to the login file.
    ///
    /// Fails with `UserExists` for a taken username and `InvalidInput` for an
    /// empty password, or for values that would break the file layout.
    pub fn add_user_account(&mut self, username: &str, password: &str) -> Result<()> {
        if self.credentials.contains(username) {
            return Err(CodeflyError::UserExists(username.to_string()));
        }
        if password.is_empty() {
            return Err(CodeflyError::InvalidInput("password is empty".to_string()));
        }
        if password.contains(['\n', '\r']) {
            return Err(CodeflyError::InvalidInput(
                "password contains a line break".to_string(),
            ));
        }
        validate_username(username)?;

        let credential = Credential {
            username: username.to_string(),
            password: password.to_string(),
        };
        // Log first, then index: the index never holds what the file lacks.
        self.backend
            .append(Path::new(layout::LOGIN_FILE), &credential.to_record())?;
        self.credentials.push(credential);

        info!("added account {}", username);
        Ok(())
    }

    // --- Questions ---

    fn check_id(&self, id: u32) -> Result<()> {
        if id < 1 || id > self.question_count {
            return Err(CodeflyError::QuestionNotFound(id));
        }
        Ok(())
    }

    fn document(&self, id: u32) -> Result<QuestionDocument> {
        self.check_id(id)?;
        let path = layout::description_path(id);
        let raw = self.backend.read(&path)?.ok_or_else(|| {
            CodeflyError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} is missing", path.display()),
            ))
        })?;
        QuestionDocument::parse(id, &raw)
    }

    pub fn title(&self, id: u32) -> Result<String> {
        Ok(self.document(id)?.title)
    }

    pub fn difficulty(&self, id: u32) -> Result<String> {
        Ok(self.document(id)?.difficulty)
    }

    /// Body lines of the description, joined with `\n`.
    pub fn description(&self, id: u32) -> Result<String> {
        Ok(self.document(id)?.body)
    }

    pub fn question(&self, id: u32) -> Result<Question> {
        Ok(self.document(id)?.into_question(id))
    }

    /// Every question from 1 to the counter, in order.
    pub fn questions(&self) -> Result<Vec<Question>> {
        (1..=self.question_count).map(|id| self.question(id)).collect()
    }

    /// Resolved path of the question's test file. Existence is not checked.
    pub fn test_file(&self, id: u32) -> Result<PathBuf> {
        self.check_id(id)?;
        let path = self.backend.resolve(&layout::test_path(id, &self.source_ext));
        debug!("test file for Q{}: {}", id, path.display());
        Ok(path)
    }

    /// Resolved path of the hint file for `language`, lowercased as the extension.
    pub fn hint_code(&self, id: u32, language: &str) -> Result<PathBuf> {
        self.check_id(id)?;
        let ext = layout::language_ext(language);
        Ok(self.backend.resolve(&layout::hint_path(id, &ext)))
    }

    /// Resolved path of `username`'s solution in `language`.
    pub fn user_code(&self, id: u32, username: &str, language: &str) -> Result<PathBuf> {
        self.check_id(id)?;
        validate_username(username)?;
        let ext = layout::language_ext(language);
        let path = self
            .backend
            .resolve(&layout::solution_path(id, username, &ext));
        debug!("solution of {} for Q{}: {}", username, id, path.display());
        Ok(path)
    }

    /// Stores `username`'s solution, replacing any previous one.
    ///
    /// The question id is not checked and the file always gets the configured
    /// source extension, whatever language it will later be read as.
    pub fn write_user_code(&mut self, id: u32, username: &str, content: &str) -> Result<()> {
        validate_username(username)?;
        self.backend.create_dir_all(&layout::user_dir(id, username))?;

        let path = layout::solution_path(id, username, &self.source_ext);
        self.backend.write(&path, &with_terminator(content))?;
        debug!("wrote {}", path.display());
        Ok(())
    }

    /// Adds a question and returns its id.
    pub fn add_question(&mut self, description: &str, hint_code: &str, test: &str) -> Result<u32> {
        self.question_count = self
            .question_count
            .checked_add(1)
            .ok_or_else(|| CodeflyError::Store("question counter overflow".to_string()))?;
        let id = self.question_count;
        self.highest_suffix = self.highest_suffix.max(u64::from(id));

        self.backend
            .create_dir_all(Path::new(&layout::question_dir_name(id)))?;
        self.backend
            .write(&layout::description_path(id), &with_terminator(description))?;
        self.backend.write(
            &layout::hint_path(id, &self.source_ext),
            &with_terminator(hint_code),
        )?;
        self.backend
            .write(&layout::test_path(id, &self.source_ext), &with_terminator(test))?;

        info!("added question Q{}", id);
        Ok(id)
    }

    pub(crate) fn question_dir_exists(&self, id: u32) -> bool {
        self.backend
            .exists(Path::new(&layout::question_dir_name(id)))
    }
}

/// Usernames become folder names and login-file lines.
fn validate_username(username: &str) -> Result<()> {
    let reason = if username.is_empty() {
        "username is empty"
    } else if username.contains(['\n', '\r']) {
        "username contains a line break"
    } else if username.contains(['/', '\\']) || username == "." || username == ".." {
        "username is not a valid folder name"
    } else {
        return Ok(());
    };
    Err(CodeflyError::InvalidInput(reason.to_string()))
}

fn with_terminator(content: &str) -> String {
    format!("{}\n", content)
}
