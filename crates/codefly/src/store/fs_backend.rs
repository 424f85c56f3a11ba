use super::backend::StorageBackend;
use crate::error::{CodeflyError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full(&self, rel: &Path) -> PathBuf {
        self.root.join(rel)
    }
}

impl StorageBackend for FsBackend {
    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            log::info!("creating repository root {}", self.root.display());
            fs::create_dir_all(&self.root).map_err(CodeflyError::Io)?;
        }
        Ok(())
    }

    fn list_dirs(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let entries = fs::read_dir(&self.root).map_err(CodeflyError::Io)?;

        for entry in entries {
            let entry = entry.map_err(CodeflyError::Io)?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    fn exists(&self, rel: &Path) -> bool {
        self.full(rel).exists()
    }

    fn create_dir_all(&self, rel: &Path) -> Result<()> {
        fs::create_dir_all(self.full(rel)).map_err(CodeflyError::Io)
    }

    fn read(&self, rel: &Path) -> Result<Option<String>> {
        let path = self.full(rel);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CodeflyError::Io(e)),
        }
    }

    fn write(&self, rel: &Path, content: &str) -> Result<()> {
        let target = self.full(rel);
        let parent = target.parent().unwrap_or(self.root.as_path());

        // Atomic write: tmp file in the same directory, then rename
        let tmp_path = parent.join(format!(".codefly-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(CodeflyError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(CodeflyError::Io(e));
        }
        Ok(())
    }

    fn append(&self, rel: &Path, content: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.full(rel))
            .map_err(CodeflyError::Io)?;
        file.write_all(content.as_bytes()).map_err(CodeflyError::Io)?;
        Ok(())
    }

    fn resolve(&self, rel: &Path) -> PathBuf {
        let full = self.full(rel);
        if full.is_absolute() {
            return full;
        }
        std::path::absolute(&full).unwrap_or(full)
    }
}
