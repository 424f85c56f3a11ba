use super::backend::StorageBackend;
use crate::error::{CodeflyError, Result};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};

const VIRTUAL_ROOT: &str = "/mem";

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the repository is
/// single-threaded. Directories are tracked explicitly so folder counting
/// behaves like the filesystem.
pub struct MemBackend {
    dirs: RefCell<BTreeSet<PathBuf>>,
    files: RefCell<BTreeMap<PathBuf, String>>,
    root_created: RefCell<bool>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            dirs: RefCell::new(BTreeSet::new()),
            files: RefCell::new(BTreeMap::new()),
            root_created: RefCell::new(false),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper: drop a directory and everything under it, as if removed out of band.
    pub fn remove_dir_all(&self, rel: &Path) {
        self.dirs.borrow_mut().retain(|d| !d.starts_with(rel));
        self.files.borrow_mut().retain(|f, _| !f.starts_with(rel));
    }

    pub fn is_root_created(&self) -> bool {
        *self.root_created.borrow()
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CodeflyError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }

    fn parent_exists(&self, rel: &Path) -> bool {
        match rel.parent() {
            Some(parent) if parent.as_os_str().is_empty() => true,
            Some(parent) => self.dirs.borrow().contains(parent),
            None => true,
        }
    }

    fn missing_parent(rel: &Path) -> CodeflyError {
        CodeflyError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("parent directory of {} does not exist", rel.display()),
        ))
    }
}

impl StorageBackend for MemBackend {
    fn ensure_root(&self) -> Result<()> {
        *self.root_created.borrow_mut() = true;
        Ok(())
    }

    fn list_dirs(&self) -> Result<Vec<String>> {
        let dirs = self.dirs.borrow();
        Ok(dirs
            .iter()
            .filter(|d| d.components().count() == 1)
            .filter_map(|d| d.to_str().map(str::to_string))
            .collect())
    }

    fn exists(&self, rel: &Path) -> bool {
        self.dirs.borrow().contains(rel) || self.files.borrow().contains_key(rel)
    }

    fn create_dir_all(&self, rel: &Path) -> Result<()> {
        self.check_writable()?;
        let mut dirs = self.dirs.borrow_mut();
        let mut current = PathBuf::new();
        for component in rel.components() {
            if let Component::Normal(part) = component {
                current.push(part);
                dirs.insert(current.clone());
            }
        }
        Ok(())
    }

    fn read(&self, rel: &Path) -> Result<Option<String>> {
        Ok(self.files.borrow().get(rel).cloned())
    }

    fn write(&self, rel: &Path, content: &str) -> Result<()> {
        self.check_writable()?;
        if !self.parent_exists(rel) {
            return Err(Self::missing_parent(rel));
        }
        self.files
            .borrow_mut()
            .insert(rel.to_path_buf(), content.to_string());
        Ok(())
    }

    fn append(&self, rel: &Path, content: &str) -> Result<()> {
        self.check_writable()?;
        if !self.parent_exists(rel) {
            return Err(Self::missing_parent(rel));
        }
        self.files
            .borrow_mut()
            .entry(rel.to_path_buf())
            .or_default()
            .push_str(content);
        Ok(())
    }

    fn resolve(&self, rel: &Path) -> PathBuf {
        Path::new(VIRTUAL_ROOT).join(rel)
    }
}
