use clap::Parser;

/// Arguments for the completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bash:\n    corvus completions bash > ~/.local/share/bash-completion/completions/corvus\n\n\
                  Zsh:\n    corvus completions zsh > ~/.zfunc/_corvus\n\n\
                  Fish:\n    corvus completions fish > ~/.config/fish/completions/corvus.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, elvish, fish, powershell, pwsh, zsh)
    pub shell: String,
}
