use clap::Parser;
use lectern::cli::commands::{Cli, Commands};
use lectern::cli::handlers;

fn main() {
    lectern::logging::init();
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch the viewer
            if let Err(e) = lectern::tui::run() {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Dump(args)) => {
            if let Err(e) = handlers::cmd_dump(args) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
