//! # Configuration
//!
//! Repository configuration is managed by [`confique`], layered from
//! environment variables, an optional TOML file and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `CODEFLY_ROOT`, `CODEFLY_SOURCE_EXT`.
//! 2. **Config file**: the TOML file passed to [`RepositoryConfig::load`], if any.
//! 3. **Compiled Defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `root` | `./Repository` | Directory holding `LoginInfo.txt` and the `Q<N>` folders |
//! | `source_ext` | `java` | Extension of every written hint, test and solution file |
//!
//! Reads of hint and solution files take the extension from the requested
//! language instead, so a store written with `source_ext = "java"` only
//! resolves existing files for language `Java`.

use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Root directory of the store.
    #[config(env = "CODEFLY_ROOT", default = "./Repository")]
    pub root: PathBuf,

    /// Extension for written source artifacts (e.g. "java", ".py").
    #[config(env = "CODEFLY_SOURCE_EXT", default = "java")]
    pub source_ext: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./Repository"),
            source_ext: "java".to_string(),
        }
    }
}

impl RepositoryConfig {
    /// Load configuration: environment over `file` (when given and present) over defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// Configuration rooted at `root` with the default extension.
    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// The write extension, lowercased and without a leading dot.
    pub fn source_ext(&self) -> String {
        self.source_ext.trim_start_matches('.').to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = RepositoryConfig::default();
        assert_eq!(config.root, PathBuf::from("./Repository"));
        assert_eq!(config.source_ext(), "java");
    }

    #[test]
    fn test_source_ext_normalization_with_dot() {
        let config = RepositoryConfig {
            source_ext: ".PY".to_string(),
            ..Default::default()
        };
        assert_eq!(config.source_ext(), "py");
    }

    #[test]
    fn test_with_root_keeps_default_ext() {
        let config = RepositoryConfig::with_root("/tmp/store");
        assert_eq!(config.root, PathBuf::from("/tmp/store"));
        assert_eq!(config.source_ext, "java");
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codefly.toml");
        let written = RepositoryConfig {
            root: dir.path().join("store"),
            source_ext: "py".to_string(),
        };
        fs::write(&path, toml::to_string(&written).unwrap()).unwrap();

        let loaded = RepositoryConfig::builder().file(&path).load().unwrap();
        assert_eq!(loaded, written);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = RepositoryConfig::builder()
            .file(dir.path().join("absent.toml"))
            .load()
            .unwrap();
        assert_eq!(loaded, RepositoryConfig::default());
    }
}
