use crate::error::Result;
use std::path::{Path, PathBuf};

/// Abstract interface for raw storage I/O.
///
/// Every path is relative to the store root. This trait handles the "how"
/// of storage (filesystem vs memory), while `Repository` handles the "what"
/// (numbering, credentials, validation). No handle is kept between calls.
pub trait StorageBackend {
    /// Create the root if it does not exist yet.
    fn ensure_root(&self) -> Result<()>;

    /// Names of the immediate child directories of the root.
    fn list_dirs(&self) -> Result<Vec<String>>;

    /// Whether anything exists at `rel`.
    fn exists(&self, rel: &Path) -> bool;

    /// Create `rel` and any missing parents.
    fn create_dir_all(&self, rel: &Path) -> Result<()>;

    /// Read a whole file.
    /// Returns Ok(None) if the file does not exist.
    fn read(&self, rel: &Path) -> Result<Option<String>>;

    /// Create or truncate `rel` with `content`. The parent must exist.
    fn write(&self, rel: &Path, content: &str) -> Result<()>;

    /// Append `content` to `rel`, creating the file if missing.
    fn append(&self, rel: &Path, content: &str) -> Result<()>;

    /// The location handed to callers for `rel`.
    /// For FsBackend this is an absolute path; for MemBackend a virtual one.
    fn resolve(&self, rel: &Path) -> PathBuf;
}
