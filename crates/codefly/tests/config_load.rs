use codefly::RepositoryConfig;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

// Environment variables are process-wide; tests touching them run one at a time.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const ENV_VARS: [&str; 2] = ["CODEFLY_ROOT", "CODEFLY_SOURCE_EXT"];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

fn write_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("codefly.toml");
    fs::write(&path, "root = \"/from/file\"\nsource_ext = \"py\"\n").unwrap();
    path
}

#[test]
fn test_load_without_file_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    let config = RepositoryConfig::load(None).unwrap();
    assert_eq!(config, RepositoryConfig::default());
}

#[test]
fn test_load_reads_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir);

    let config = RepositoryConfig::load(Some(&path)).unwrap();
    assert_eq!(config.root, PathBuf::from("/from/file"));
    assert_eq!(config.source_ext(), "py");
}

#[test]
fn test_env_overrides_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir);
    let env_root = dir.path().join("envroot");
    env::set_var("CODEFLY_ROOT", &env_root);

    let config = RepositoryConfig::load(Some(&path)).unwrap();
    clear_env();

    assert_eq!(config.root, env_root);
    // Unset variables leave the file value in place
    assert_eq!(config.source_ext, "py");
}

#[test]
fn test_env_overrides_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    env::set_var("CODEFLY_SOURCE_EXT", ".Py");

    let config = RepositoryConfig::load(None).unwrap();
    clear_env();

    assert_eq!(config.root, PathBuf::from("./Repository"));
    assert_eq!(config.source_ext(), "py");
}
