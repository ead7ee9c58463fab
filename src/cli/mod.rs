//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - resolve: Resolve command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod resolve;

pub use completions::CompletionsArgs;
pub use resolve::ResolveArgs;

/// diffbase - golden snapshot source resolver
///
/// Work out where the baseline screenshots for a diff come from.
#[derive(Parser, Debug)]
#[command(
    name = "diffbase",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve a screenshot-test diff base into a golden snapshot source",
    long_about = "diffbase turns a diff base (a URL, a local file, a commit, a branch, a remote \
                  branch or a tag) into the exact location of the golden snapshot file to diff \
                  screenshots against."
)]
pub struct Cli {
    /// Repository directory (defaults to current directory)
    #[arg(long, short = 'C', global = true, env = "DIFFBASE_REPO")]
    pub repo: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a diff base and print the golden snapshot source
    Resolve(ResolveArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
