//! diffbase - golden snapshot source resolver
//!
//! Resolves where the baseline screenshots for a screenshot diff come from.

use clap::Parser;
use miette::Diagnostic;

use diffbase::cli::{Cli, Commands};
use diffbase::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(cli.repo, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
