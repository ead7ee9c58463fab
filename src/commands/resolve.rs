//! Resolve command implementation

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::cli::ResolveArgs;
use crate::config::Config;
use crate::error::Result;
use crate::fs::LocalFileSystem;
use crate::git::GitRepository;
use crate::resolver::DiffSourceResolver;
use crate::source::DiffSource;
use crate::ui;

/// Run resolve command
pub fn run(repo: Option<PathBuf>, args: ResolveArgs) -> Result<()> {
    let source = resolve(repo.as_deref(), &args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&source)?);
    } else {
        ui::display_diff_source(&source);
    }

    Ok(())
}

/// Discover the repository, load its config and resolve the diff base
pub fn resolve(repo: Option<&Path>, args: &ResolveArgs) -> Result<DiffSource> {
    let start_dir = match repo {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let show_progress = !args.no_progress && !args.json && std::io::stderr().is_terminal();
    let git = GitRepository::discover(&start_dir)?.with_progress(show_progress);

    let config = match git.workdir() {
        Some(root) => Config::load(root)?,
        None => Config::default(),
    };

    let golden_path = config.golden_path(args.golden_path.as_deref());
    DiffSourceResolver::new(&git, &LocalFileSystem)
        .with_primary_remote(config.primary_remote())
        .resolve(&args.diff_base, golden_path)
}
