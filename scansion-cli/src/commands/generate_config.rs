//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Point [matching].dictionary at a CMU-format pronouncing dictionary");
        println!("2. Use it for scanning:");
        println!(
            "   scansion scan -i poems.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    fn template() -> &'static str {
        r#"# scansion configuration
# Command-line flags override every value here.

[matching]
# Named verse form; run `scansion list forms` for the choices.
form = "haiku"

# Explicit syllable pattern; takes precedence over `form` when set.
# pattern = "5-7-5"

# CMU-format pronouncing dictionary, consulted first.
# dictionary = "cmudict.dict"

# Estimate syllables from spelling for words the dictionary lacks.
estimate_fallback = true

# Match each non-blank line on its own instead of the whole file.
per_line = false

[output]
# text, json or markdown
default_format = "text"
pretty_json = true

[performance]
# Worker threads for matching (0 = all cores)
worker_threads = 0
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("scansion.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("scansion.toml"));
    }

    #[test]
    fn test_template_parses() {
        let config: CliConfig = toml::from_str(GenerateConfigArgs::template()).unwrap();
        assert_eq!(config.matching.form.as_deref(), Some("haiku"));
        assert!(config.matching.pattern.is_none());
        assert!(config.matching.estimate_fallback);
        assert_eq!(config.output.default_format, "text");
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("scansion.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());

        let loaded = CliConfig::load(&output_path).unwrap();
        assert_eq!(loaded.performance.worker_threads, 0);
    }
}
