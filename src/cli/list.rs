use clap::Parser;

/// Arguments for the agents and commands listings
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List agents of the current directory:\n    corvus agents\n\n\
                  Show every field, including prompts and templates:\n    corvus commands --detailed\n\n\
                  List agents of another plugin root:\n    corvus -r ./plugin agents")]
pub struct ListArgs {
    /// Show detailed output
    #[arg(long)]
    pub detailed: bool,
}
