//! # codefly
//!
//! Plain-file persistence for a coding-practice platform: user accounts,
//! questions (description, hint code, test harness) and per-user solutions,
//! all stored as ordinary files under one root directory.
//!
//! ```no_run
//! use codefly::{Repository, RepositoryConfig};
//!
//! # fn main() -> codefly::Result<()> {
//! let config = RepositoryConfig::load(None)?;
//! let mut repo = Repository::open_dir(&config)?;
//! repo.set_up_example()?;
//! let id = repo.add_question("Sum\nEasy\nAdd two numbers.", "class Solution {}", "class Test {}")?;
//! println!("{}: {}", id, repo.title(id)?);
//! # Ok(())
//! # }
//! ```
//!
//! See [`repository`] for lifecycle and [`layout`] for the on-disk format.

pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod repository;
pub mod seed;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use config::RepositoryConfig;
pub use error::{CodeflyError, ErrorKind, Result};
pub use model::{Question, SeedReport};
pub use repository::Repository;
