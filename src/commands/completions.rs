//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::{DiffBaseError, Result};

fn parse_shell(name: &str) -> Option<clap_complete::Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Some(clap_complete::Shell::Bash),
        "elvish" => Some(clap_complete::Shell::Elvish),
        "fish" => Some(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Some(clap_complete::Shell::PowerShell),
        "zsh" => Some(clap_complete::Shell::Zsh),
        _ => None,
    }
}

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell).ok_or(DiffBaseError::UnknownShell { shell: args.shell })?;

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "diffbase", &mut std::io::stdout().lock());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_shells() {
        assert_eq!(parse_shell("bash"), Some(clap_complete::Shell::Bash));
        assert_eq!(parse_shell("ZSH"), Some(clap_complete::Shell::Zsh));
        assert_eq!(parse_shell("pwsh"), Some(clap_complete::Shell::PowerShell));
    }

    #[test]
    fn test_completions_fish() {
        let args = CompletionsArgs {
            shell: "fish".to_string(),
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_completions_invalid_shell() {
        let args = CompletionsArgs {
            shell: "tcsh".to_string(),
        };
        assert!(matches!(run(args), Err(DiffBaseError::UnknownShell { .. })));
    }
}
