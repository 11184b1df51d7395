//! scansion command-line entry point

use clap::Parser;
use scansion_cli::commands::Commands;

/// Find texts whose words scan to a syllable pattern such as the haiku's 5-7-5
#[derive(Debug, Parser)]
#[command(name = "scansion", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
