//! astroreg CLI
//!
//! Text menu over the in-memory astronaut and flight registry

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "astroreg")]
#[command(about = "astroreg - Astronaut and flight registry", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Menu(commands::menu::MenuArgs),
    /// Print the effective configuration as TOML
    Config(commands::config::ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Menu(args)) => commands::menu::execute(args),
        Some(Commands::Config(args)) => commands::config::execute(args),
        None => commands::menu::execute(commands::menu::MenuArgs::default()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
