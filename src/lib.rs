//! diffbase - golden snapshot source resolver
//!
//! Resolves the diff base of a screenshot-testing run (a URL, a local file,
//! or a git revision) into the [`DiffSource`](source::DiffSource) the golden
//! file should be read from.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod git;
pub mod logging;
pub mod resolver;
pub mod source;
pub mod ui;

pub use error::{DiffBaseError, Result};
pub use resolver::DiffSourceResolver;
pub use source::DiffSource;
