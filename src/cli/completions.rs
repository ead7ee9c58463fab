use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    diffbase completions bash > ~/.bash_completion.d/diffbase\n\n\
                  Generate zsh completions:\n    diffbase completions zsh > ~/.zfunc/_diffbase\n\n\
                  Generate fish completions:\n    diffbase completions fish > ~/.config/fish/completions/diffbase.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
