//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;

use corvus::CorvusError;
use corvus::error::Result;

use crate::cli::{Cli, CompletionsArgs};

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout().lock());
    Ok(())
}

/// Shell for a case-insensitive name; `pwsh` is accepted for PowerShell.
fn parse_shell(name: &str) -> Result<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "elvish" => Ok(Shell::Elvish),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" => Ok(Shell::PowerShell),
        "zsh" => Ok(Shell::Zsh),
        _ => Err(CorvusError::UnsupportedShell {
            shell: name.to_string(),
        }),
    }
}
