//! libgit2-backed implementation of [`VersionControl`]

use std::path::{Path, PathBuf};

use git2::{AutotagOption, ErrorCode, FetchOptions, RemoteCallbacks, Repository};
use tracing::debug;

use super::VersionControl;
use super::auth::setup_auth_callbacks;
use super::error::{interpret_git_error, is_missing_ref};
use crate::error::{DiffBaseError, Result};
use crate::ui;

/// A git repository on disk
///
/// Only the location is kept. Every operation opens its own libgit2 handle,
/// which keeps the type `Sync` so independent resolutions can share it.
#[derive(Debug, Clone)]
pub struct GitRepository {
    git_dir: PathBuf,
    workdir: Option<PathBuf>,
    show_progress: bool,
}

impl GitRepository {
    /// Find the repository containing `start`, searching parent directories
    ///
    /// Only "no repository found" becomes [`DiffBaseError::NotInGitRepository`].
    /// Other failures, such as a missing start directory or an unreadable
    /// `.git`, keep libgit2's reason.
    pub fn discover(start: &Path) -> Result<Self> {
        let repo = Repository::discover(start).map_err(|e| match e.code() {
            ErrorCode::NotFound if start.exists() => DiffBaseError::NotInGitRepository,
            _ => DiffBaseError::GitOpenFailed {
                path: start.display().to_string(),
                reason: interpret_git_error(&e),
            },
        })?;
        Ok(Self {
            git_dir: repo.path().to_path_buf(),
            workdir: repo.workdir().map(Path::to_path_buf),
            show_progress: false,
        })
    }

    /// Show a spinner on the terminal while fetching remotes
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Working tree root, `None` for bare repositories
    pub fn workdir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }

    fn open(&self) -> Result<Repository> {
        Repository::open(&self.git_dir).map_err(|e| DiffBaseError::GitOpenFailed {
            path: self.git_dir.display().to_string(),
            reason: interpret_git_error(&e),
        })
    }

    fn fetch_remote(repo: &Repository, name: &str) -> Result<()> {
        let fetch_failed = |e: git2::Error| DiffBaseError::GitFetchFailed {
            remote: name.to_string(),
            reason: interpret_git_error(&e),
        };

        let mut remote = repo.find_remote(name).map_err(fetch_failed)?;

        let mut callbacks = RemoteCallbacks::new();
        setup_auth_callbacks(&mut callbacks);

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);
        fetch_options.download_tags(AutotagOption::All);

        // Empty refspecs fetch with the remote's configured refspecs
        remote
            .fetch::<&str>(&[], Some(&mut fetch_options), None)
            .map_err(fetch_failed)
    }
}

impl VersionControl for GitRepository {
    fn refresh_remotes(&self) -> Result<()> {
        let repo = self.open()?;
        let remotes = self.list_remote_names()?;

        let spinner = self
            .show_progress
            .then(|| ui::spinner("Fetching remotes..."));

        for name in &remotes {
            debug!(remote = %name, "fetching remote");
            if let Some(spinner) = &spinner {
                spinner.set_message(format!("Fetching {name}..."));
            }
            if let Err(e) = Self::fetch_remote(&repo, name) {
                if let Some(spinner) = &spinner {
                    spinner.abandon();
                }
                return Err(e);
            }
        }

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        Ok(())
    }

    fn resolve_symbolic_name(&self, git_ref: &str) -> Result<Option<String>> {
        let repo = self.open()?;

        // Same lookup order as git's DWIM rules; symbolic refs come back resolved
        let reference = match repo.resolve_reference_from_short_name(git_ref) {
            Ok(reference) => reference,
            Err(e) if is_missing_ref(&e) => {
                debug!(git_ref, "no ref with this name");
                return Ok(None);
            }
            Err(e) => {
                return Err(DiffBaseError::GitRefResolveFailed {
                    git_ref: git_ref.to_string(),
                    reason: interpret_git_error(&e),
                });
            }
        };

        let full_name = reference
            .name()
            .ok_or_else(|| DiffBaseError::GitRefResolveFailed {
                git_ref: git_ref.to_string(),
                reason: "ref name is not valid UTF-8".to_string(),
            })?;

        Ok(Some(full_name.to_string()))
    }

    fn list_remote_names(&self) -> Result<Vec<String>> {
        let repo = self.open()?;
        let remotes = repo.remotes()?;
        Ok(remotes.iter().flatten().map(str::to_string).collect())
    }

    fn resolve_short_commit_hash(&self, git_ref: &str) -> Result<String> {
        let resolve_failed = |e: git2::Error| DiffBaseError::GitRefResolveFailed {
            git_ref: git_ref.to_string(),
            reason: interpret_git_error(&e),
        };

        let repo = self.open()?;
        let commit = repo
            .revparse_single(git_ref)
            .and_then(|object| object.peel_to_commit())
            .map_err(resolve_failed)?;

        // Honors core.abbrev and lengthens the hash until it is unambiguous
        let short_id = commit.as_object().short_id().map_err(resolve_failed)?;
        short_id
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DiffBaseError::GitRefResolveFailed {
                git_ref: git_ref.to_string(),
                reason: "short hash is not valid UTF-8".to_string(),
            })
    }
}
