//! Common test utilities for diffbase integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

/// An "upstream" repository plus a clone of it to run diffbase in
///
/// The clone has `origin` pointing at upstream, so remote-tracking refs,
/// tags and a local default branch all exist.
pub struct TestRepos {
    /// Temporary directory holding both repositories
    pub temp: TempDir,
    pub upstream: Repository,
    pub work: Repository,
    /// Name of the default branch (depends on init.defaultBranch)
    pub default_branch: String,
}

impl TestRepos {
    /// Create upstream with one commit, a tag `v1.2.3` and a branch `release/2.0`
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let upstream_path = temp.path().join("upstream");
        let work_path = temp.path().join("work");

        let upstream = Repository::init(&upstream_path).expect("Failed to init upstream");
        let first = commit_file(&upstream, "golden.json", "{\"v\":1}", "Initial commit");
        {
            let target = upstream
                .find_object(first, None)
                .expect("Failed to find commit");
            upstream
                .tag_lightweight("v1.2.3", &target, false)
                .expect("Failed to create tag");
            let commit = upstream.find_commit(first).expect("Failed to find commit");
            upstream
                .branch("release/2.0", &commit, false)
                .expect("Failed to create branch");
        }

        let default_branch = upstream
            .head()
            .expect("Upstream has no HEAD")
            .shorthand()
            .expect("HEAD name is not UTF-8")
            .to_string();

        let url = file_url(&upstream_path);
        let work = Repository::clone(&url, &work_path).expect("Failed to clone upstream");

        Self {
            temp,
            upstream,
            work,
            default_branch,
        }
    }

    /// Working tree of the clone
    pub fn work_path(&self) -> PathBuf {
        self.work
            .workdir()
            .expect("Clone has no working tree")
            .to_path_buf()
    }

    /// Add a commit to upstream's default branch
    pub fn commit_upstream(&self, content: &str) -> Oid {
        commit_file(&self.upstream, "golden.json", content, "Update golden")
    }

    /// Create a local branch in the clone at its HEAD
    pub fn create_local_branch(&self, name: &str) -> Oid {
        let head = self
            .work
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Clone has no HEAD commit");
        self.work
            .branch(name, &head, false)
            .expect("Failed to create branch");
        head.id()
    }

    /// Write a file into the clone's working tree
    pub fn write_work_file(&self, name: &str, content: &str) {
        std::fs::write(self.work_path().join(name), content).expect("Failed to write file");
    }
}

/// `file://` URL for a local repository path
pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

/// Commit a single file on HEAD of a non-bare repository
pub fn commit_file(repo: &Repository, name: &str, content: &str, message: &str) -> Oid {
    let workdir = repo.workdir().expect("Repository has no working tree");
    std::fs::write(workdir.join(name), content).expect("Failed to write file");

    let mut index = repo.index().expect("Failed to open index");
    index
        .add_path(Path::new(name))
        .expect("Failed to add file to index");
    index.write().expect("Failed to write index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");

    let sig = Signature::now("Test", "test@test.com").expect("Failed to create signature");
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("Failed to commit")
}
