//! Golden snapshot source handling
//!
//! This module holds the values a diff base resolves into:
//! - Public URLs: `https://example.com/golden.json`
//! - Local files: `./screenshots/golden.json`
//! - Git revisions: `a1b2c3d`, `main`, `origin/main`, `v1.2.3`
//! - Git revisions with a snapshot path: `origin/main:path/to/golden.json`
//!
//! ## Module Organization
//!
//! - `diff_source.rs`: `DiffSource` enum and the git revision record
//! - `ref_namespace.rs`: classification of fully-qualified ref names

pub mod diff_source;
pub mod ref_namespace;

pub use diff_source::{DiffSource, GitRevision, RevisionRef};
pub use ref_namespace::RefNamespace;
