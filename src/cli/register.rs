use clap::Parser;
use std::path::PathBuf;

/// Arguments for the register command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Register into an empty configuration:\n    corvus register\n\n\
                  Register into an existing host configuration (JSON or JSONC):\n    corvus register --config opencode.jsonc\n\n\
                  Register another plugin root:\n    corvus -r ~/plugins/corvus register")]
pub struct RegisterArgs {
    /// Host configuration file to register into (starts from an empty configuration if omitted)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,
}
