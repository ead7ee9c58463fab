use clap::Parser;

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Golden file from a public URL:\n    diffbase resolve https://example.com/golden.json\n\n\
                   Golden file on disk:\n    diffbase resolve ./screenshots/golden.json\n\n\
                   Golden file at a remote branch:\n    diffbase resolve origin/main\n\n\
                   Golden file at a tag, with a custom path:\n    diffbase resolve v1.2.3:ci/golden.json\n\n\
                   Machine-readable output:\n    diffbase resolve a1b2c3d --json")]
pub struct ResolveArgs {
    /// Diff base: URL, local path, commit, branch, remote branch or tag,
    /// optionally followed by :<path> to pick the golden file inside a revision
    pub diff_base: String,

    /// Golden file path used for git revisions when the diff base has no :<path>
    #[arg(long, short = 'g', value_name = "PATH", env = "DIFFBASE_GOLDEN_PATH")]
    pub golden_path: Option<String>,

    /// Print the resolved source as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not show a spinner while fetching remotes
    #[arg(long)]
    pub no_progress: bool,
}
