use clap::{Args, Parser, Subcommand};

/// Terminal viewer for educational project tasks and their media assets
#[derive(Debug, Parser)]
#[command(name = "lectern", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch the remote project (or fall back to the sample) and print
    /// it as canonical JSON
    Dump(DumpArgs),
}

#[derive(Debug, Args)]
pub struct DumpArgs {
    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}
