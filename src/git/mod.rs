//! Git operations needed to resolve a diff base
//!
//! This module handles:
//! - Refreshing remote-tracking refs and tags (fetch)
//! - Resolving short ref names to fully-qualified names
//! - Listing configured remotes
//! - Abbreviating commits to short hashes
//!
//! The resolver only talks to the [`VersionControl`] trait, so tests can swap
//! in an in-memory repository. [`GitRepository`] is the libgit2 implementation.
//!
//! Authentication is delegated entirely to git's native system:
//! - SSH keys from ~/.ssh/
//! - Git credential helpers
//! - Environment variables (`GIT_SSH_COMMAND`, etc.)

pub mod auth;
pub mod error;
pub mod repository;

pub use repository::GitRepository;

use crate::error::Result;

/// Version-control capabilities the resolver depends on
pub trait VersionControl: Send + Sync {
    /// Update remote-tracking branches and tags from every configured remote
    fn refresh_remotes(&self) -> Result<()>;

    /// Resolve a short ref (`main`, `origin/main`, `v1.0`) to its full name
    ///
    /// Returns `Ok(None)` when no such ref exists. That is an expected outcome,
    /// not an error.
    fn resolve_symbolic_name(&self, git_ref: &str) -> Result<Option<String>>;

    /// Names of the configured remotes, in no particular order
    fn list_remote_names(&self) -> Result<Vec<String>>;

    /// Resolve any ref or revision to an abbreviated commit hash
    fn resolve_short_commit_hash(&self, git_ref: &str) -> Result<String>;
}
