use thiserror::Error;

/// Coarse classification of every failure the repository can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    InvalidInput,
    IoFailure,
}

#[derive(Error, Debug)]
pub enum CodeflyError {
    #[error("Question {0} doesn't exist")]
    QuestionNotFound(u32),

    #[error("Username {0} already exists")]
    UserExists(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt login file: line {line} holds username `{username}` with no password line")]
    CorruptCredentials { line: usize, username: String },

    #[error("Question {id} is malformed: {reason}")]
    MalformedQuestion { id: u32, reason: String },

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl CodeflyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodeflyError::QuestionNotFound(_) => ErrorKind::NotFound,
            CodeflyError::UserExists(_) => ErrorKind::Conflict,
            CodeflyError::InvalidInput(_) => ErrorKind::InvalidInput,
            CodeflyError::Io(_)
            | CodeflyError::CorruptCredentials { .. }
            | CodeflyError::MalformedQuestion { .. }
            | CodeflyError::Config(_)
            | CodeflyError::Store(_) => ErrorKind::IoFailure,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodeflyError>;
