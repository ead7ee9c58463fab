//! Error types and handling for diffbase
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! There is no "ref not found" variant: the resolver treats an unknown ref as
//! a bare commit hash.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for diffbase operations
#[derive(Error, Diagnostic, Debug)]
pub enum DiffBaseError {
    // Git errors
    #[error("Git operation failed: {message}")]
    #[diagnostic(code(diffbase::git::operation_failed))]
    GitOperationFailed { message: String },

    #[error("Failed to fetch from remote '{remote}': {reason}")]
    #[diagnostic(
        code(diffbase::git::fetch_failed),
        help("Check your network connection and that you have access to the remote")
    )]
    GitFetchFailed { remote: String, reason: String },

    #[error("Failed to resolve git ref '{git_ref}': {reason}")]
    #[diagnostic(code(diffbase::git::ref_resolve_failed))]
    GitRefResolveFailed { git_ref: String, reason: String },

    #[error("Failed to open repository at '{path}': {reason}")]
    #[diagnostic(code(diffbase::git::open_failed))]
    GitOpenFailed { path: String, reason: String },

    #[error("Not in a git repository")]
    #[diagnostic(
        code(diffbase::git::not_in_repo),
        help("Run diffbase from within a git repository, or pass --repo <DIR>")
    )]
    NotInGitRepository,

    // Resolution errors
    #[error("Remote-tracking ref '{full_name}' does not belong to any configured remote")]
    #[diagnostic(
        code(diffbase::resolve::remote_not_configured),
        help("The remote may have been renamed or removed. Run 'git remote -v' to list remotes")
    )]
    RemoteNotConfigured { full_name: String },

    #[error("Ref '{git_ref}' resolved to '{full_name}', which is not a branch, remote branch or tag")]
    #[diagnostic(
        code(diffbase::resolve::unrecognized_namespace),
        help("Pass a branch name, tag name or commit hash as the diff base")
    )]
    UnrecognizedRefNamespace { git_ref: String, full_name: String },

    #[error("Diff base '{input}' has no ref before the ':'")]
    #[diagnostic(
        code(diffbase::resolve::empty_ref),
        help("Use <ref>:<path>, for example origin/main:screenshots/golden.json")
    )]
    EmptyRef { input: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(diffbase::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(diffbase::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // Output errors
    #[error("IO error: {message}")]
    #[diagnostic(code(diffbase::fs::io_error))]
    IoError { message: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(diffbase::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl From<std::io::Error> for DiffBaseError {
    fn from(err: std::io::Error) -> Self {
        DiffBaseError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DiffBaseError {
    fn from(err: serde_yaml::Error) -> Self {
        DiffBaseError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DiffBaseError {
    fn from(err: serde_json::Error) -> Self {
        DiffBaseError::IoError {
            message: format!("Failed to serialize output: {err}"),
        }
    }
}

impl From<git2::Error> for DiffBaseError {
    fn from(err: git2::Error) -> Self {
        DiffBaseError::GitOperationFailed {
            message: crate::git::error::interpret_git_error(&err),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DiffBaseError>;
