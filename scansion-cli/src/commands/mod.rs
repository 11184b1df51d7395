//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod count;
pub mod generate_config;
pub mod scan;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find texts that scan to a syllable pattern
    Scan(scan::ScanArgs),

    /// Show the syllable counts of words
    Count(count::CountArgs),

    /// Check that a pronouncing dictionary loads
    Validate(validate::ValidateArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List named verse forms
    Forms,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Scan(args) => args.execute(),
            Commands::Count(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Forms => {
                println!("Available verse forms:");
                for form in scansion_core::forms::all()? {
                    println!(
                        "  {:<10} {:<18} {}",
                        form.name,
                        form.pattern.to_string(),
                        form.description
                    );
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text      One group per line, blank line between matches");
                println!("  json      JSON array of matches with source and line");
                println!("  markdown  Numbered verses with a total");
            }
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed (tests, embedding)
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
