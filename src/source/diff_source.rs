//! Diff source handling
//!
//! This module provides the `DiffSource` enum, the single value produced for
//! every resolved diff base.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Where the golden snapshot file for a screenshot run comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiffSource {
    /// Golden file fetched over HTTP(S)
    PublicUrl {
        /// The URL exactly as given
        url: String,
    },
    /// Golden file read from disk
    LocalFile {
        /// The path exactly as given
        path: PathBuf,
    },
    /// Golden file taken from a point in git history
    GitRevision(GitRevision),
}

/// A snapshot file pinned to a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitRevision {
    /// Short commit hash, or the verbatim input for a bare commit
    pub commit: String,

    /// Path of the golden file inside the repository
    pub snapshot_file_path: String,

    /// How the commit was named, for display only
    #[serde(flatten)]
    pub reference: RevisionRef,
}

/// The ref a revision was reached through
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "ref_kind", rename_all = "snake_case")]
pub enum RevisionRef {
    /// A raw commit hash with no matching ref
    Commit,
    /// A remote-tracking branch such as `origin/main`
    RemoteBranch { remote: String, branch: String },
    /// A tag, reported against the primary remote
    Tag { remote: String, tag: String },
    /// A local branch
    LocalBranch { branch: String },
}

impl DiffSource {
    /// Get the URL if this is a public URL source
    pub fn public_url(&self) -> Option<&str> {
        match self {
            DiffSource::PublicUrl { url } => Some(url),
            _ => None,
        }
    }

    /// Get the path if this is a local file source
    pub fn local_file_path(&self) -> Option<&Path> {
        match self {
            DiffSource::LocalFile { path } => Some(path),
            _ => None,
        }
    }

    /// Get the revision if this is a git source
    pub fn git_revision(&self) -> Option<&GitRevision> {
        match self {
            DiffSource::GitRevision(revision) => Some(revision),
            _ => None,
        }
    }

    /// Short label for the kind of source
    pub fn kind(&self) -> &'static str {
        match self {
            DiffSource::PublicUrl { .. } => "public url",
            DiffSource::LocalFile { .. } => "local file",
            DiffSource::GitRevision(revision) => match revision.reference {
                RevisionRef::Commit => "commit",
                RevisionRef::RemoteBranch { .. } => "remote branch",
                RevisionRef::Tag { .. } => "tag",
                RevisionRef::LocalBranch { .. } => "local branch",
            },
        }
    }
}

impl GitRevision {
    /// A bare commit with no ref information
    pub fn commit(commit: impl Into<String>, snapshot_file_path: impl Into<String>) -> Self {
        Self {
            commit: commit.into(),
            snapshot_file_path: snapshot_file_path.into(),
            reference: RevisionRef::Commit,
        }
    }

    /// Attach the ref the commit was reached through
    #[must_use]
    pub fn with_reference(mut self, reference: RevisionRef) -> Self {
        self.reference = reference;
        self
    }

    pub fn remote(&self) -> Option<&str> {
        match &self.reference {
            RevisionRef::RemoteBranch { remote, .. } | RevisionRef::Tag { remote, .. } => {
                Some(remote)
            }
            RevisionRef::Commit | RevisionRef::LocalBranch { .. } => None,
        }
    }

    pub fn branch(&self) -> Option<&str> {
        match &self.reference {
            RevisionRef::RemoteBranch { branch, .. } | RevisionRef::LocalBranch { branch } => {
                Some(branch)
            }
            RevisionRef::Commit | RevisionRef::Tag { .. } => None,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match &self.reference {
            RevisionRef::Tag { tag, .. } => Some(tag),
            _ => None,
        }
    }
}
