use crate::config::RepositoryConfig;
use crate::repository::Repository;
use crate::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
    pub config: RepositoryConfig,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().join("Repository");
        let config = RepositoryConfig::with_root(&root);
        Self {
            _temp_dir: temp_dir,
            root,
            config,
        }
    }

    /// Opens the store, as a fresh process would.
    pub fn open(&self) -> Repository<FsBackend> {
        Repository::open_dir(&self.config).expect("failed to open repository")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_root_on_open() {
        let env = TestEnv::new();
        assert!(!env.root.exists());
        let repo = env.open();
        assert!(env.root.is_dir());
        assert!(env.root.join("LoginInfo.txt").is_file());
        assert_eq!(repo.question_count(), 0);
    }
}
