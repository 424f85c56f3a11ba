//! # Storage Layer
//!
//! Raw I/O lives behind the [`backend::StorageBackend`] trait so the
//! repository logic can run against the filesystem or against memory.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production implementation over a root directory.
//!   Whole-file writes go through a tmp file and a rename; the login file is
//!   only ever appended to.
//! - [`mem_backend::MemBackend`]: For testing repository logic without
//!   filesystem I/O. Resolved paths are virtual (`/mem/...`).
//!
//! [`credentials::CredentialLog`] is the in-memory replay of the login file.

pub mod backend;
pub mod credentials;
pub mod fs_backend;
pub mod mem_backend;
