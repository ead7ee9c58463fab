//! Diff base resolution
//!
//! Turns the raw `--diff-base` string into a [`DiffSource`]. Checks run in a
//! fixed order and the first match wins:
//!
//! 1. Refresh remotes (always, before anything else)
//! 2. `http://` / `https://` prefix: public URL
//! 3. Existing filesystem entry: local file
//! 4. `<ref>:<path>` split, the path overriding the default snapshot path
//! 5. Unknown ref: bare commit, taken verbatim
//! 6. Known ref: remote branch, local branch or tag by namespace
//!
//! Each call is a single pass with no shared state, so independent diff bases
//! can be resolved concurrently against the same collaborators.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{DiffBaseError, Result};
use crate::fs::FileSystem;
use crate::git::VersionControl;
use crate::source::ref_namespace::split_remote_branch;
use crate::source::{DiffSource, GitRevision, RefNamespace, RevisionRef};

/// Remote reported for tags unless configured otherwise
pub const DEFAULT_PRIMARY_REMOTE: &str = "origin";

const URL_SCHEMES: &[&str] = &["http://", "https://"];

/// Resolves diff base strings against a repository and a filesystem
pub struct DiffSourceResolver<'a> {
    vcs: &'a dyn VersionControl,
    fs: &'a dyn FileSystem,
    primary_remote: String,
}

impl<'a> DiffSourceResolver<'a> {
    pub fn new(vcs: &'a dyn VersionControl, fs: &'a dyn FileSystem) -> Self {
        Self {
            vcs,
            fs,
            primary_remote: DEFAULT_PRIMARY_REMOTE.to_string(),
        }
    }

    /// Set the remote reported for tag diff bases
    #[must_use]
    pub fn with_primary_remote(mut self, remote: impl Into<String>) -> Self {
        self.primary_remote = remote.into();
        self
    }

    /// Resolve `raw_diff_base` into exactly one [`DiffSource`]
    ///
    /// `default_snapshot_path` is used for git revisions unless the input
    /// carries its own path after a `:`.
    ///
    /// # Errors
    ///
    /// Collaborator failures (fetch, ref lookup, hash abbreviation) are
    /// returned as-is. A ref that exists but cannot be classified returns
    /// [`DiffBaseError::RemoteNotConfigured`] or
    /// [`DiffBaseError::UnrecognizedRefNamespace`]. A missing ref is never an
    /// error.
    ///
    /// An input with nothing before the `:` (e.g. `":golden.json"`) returns
    /// [`DiffBaseError::EmptyRef`] without reaching ref lookup.
    pub fn resolve(&self, raw_diff_base: &str, default_snapshot_path: &str) -> Result<DiffSource> {
        self.vcs.refresh_remotes()?;

        if is_public_url(raw_diff_base) {
            info!(url = raw_diff_base, "diff base is a public URL");
            return Ok(DiffSource::PublicUrl {
                url: raw_diff_base.to_string(),
            });
        }

        if self.fs.exists(Path::new(raw_diff_base)) {
            info!(path = raw_diff_base, "diff base is a local file");
            return Ok(DiffSource::LocalFile {
                path: PathBuf::from(raw_diff_base),
            });
        }

        let (ref_part, snapshot_file_path) =
            split_snapshot_path(raw_diff_base, default_snapshot_path);
        if ref_part.is_empty() {
            return Err(DiffBaseError::EmptyRef {
                input: raw_diff_base.to_string(),
            });
        }
        debug!(ref_part, snapshot_file_path, "resolving diff base as a git ref");

        let Some(full_name) = self.vcs.resolve_symbolic_name(ref_part)? else {
            info!(commit = ref_part, "no ref matches, treating diff base as a commit");
            return Ok(DiffSource::GitRevision(GitRevision::commit(
                ref_part,
                snapshot_file_path,
            )));
        };
        debug!(ref_part, full_name = %full_name, "ref resolved");

        let revision = self.classify_ref(ref_part, &full_name, snapshot_file_path)?;
        info!(
            commit = %revision.commit,
            remote = revision.remote(),
            branch = revision.branch(),
            tag = revision.tag(),
            "diff base is a git revision"
        );
        Ok(DiffSource::GitRevision(revision))
    }

    fn classify_ref(
        &self,
        ref_part: &str,
        full_name: &str,
        snapshot_file_path: &str,
    ) -> Result<GitRevision> {
        let namespace = RefNamespace::classify(full_name).ok_or_else(|| {
            DiffBaseError::UnrecognizedRefNamespace {
                git_ref: ref_part.to_string(),
                full_name: full_name.to_string(),
            }
        })?;

        let (commit, reference) = match namespace {
            RefNamespace::Remote(short_name) => {
                let remotes = self.vcs.list_remote_names()?;
                let (remote, branch) = split_remote_branch(&short_name, &remotes).ok_or_else(
                    || DiffBaseError::RemoteNotConfigured {
                        full_name: full_name.to_string(),
                    },
                )?;
                let reference = RevisionRef::RemoteBranch {
                    remote,
                    branch: branch.to_string(),
                };
                (self.vcs.resolve_short_commit_hash(ref_part)?, reference)
            }
            RefNamespace::Tag(tag) => {
                let reference = RevisionRef::Tag {
                    remote: self.primary_remote.clone(),
                    tag,
                };
                (self.vcs.resolve_short_commit_hash(ref_part)?, reference)
            }
            RefNamespace::Local(branch) => {
                let commit = self.vcs.resolve_short_commit_hash(&branch)?;
                (commit, RevisionRef::LocalBranch { branch })
            }
        };

        Ok(GitRevision::commit(commit, snapshot_file_path).with_reference(reference))
    }
}

fn is_public_url(input: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| input.starts_with(scheme))
}

/// Split `<ref>:<path>` on the first colon
///
/// A missing or empty path falls back to `default_snapshot_path`.
fn split_snapshot_path<'a>(input: &'a str, default_snapshot_path: &'a str) -> (&'a str, &'a str) {
    match input.split_once(':') {
        Some((ref_part, path)) if !path.is_empty() => (ref_part, path),
        Some((ref_part, _)) => (ref_part, default_snapshot_path),
        None => (input, default_snapshot_path),
    }
}
