//! Count command implementation

use anyhow::Result;
use clap::Args;
use scansion_core::SyllableCounter;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::counter_source::CounterSource;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Words to count
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// CMU-format pronouncing dictionary
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Do not estimate syllables for words missing from the dictionary
    #[arg(long)]
    pub no_estimate: bool,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> Result<()> {
        let counter = CounterSource {
            dictionary: self.dictionary.clone(),
            estimate: !self.no_estimate,
        }
        .build()?;

        let mut stdout = io::stdout().lock();
        self.write_counts(&counter, &mut stdout)
    }

    fn write_counts<C: SyllableCounter, W: Write>(&self, counter: &C, out: &mut W) -> Result<()> {
        for word in &self.words {
            let counts = counter.count(word);
            if counts.is_empty() {
                writeln!(out, "{word}: ?")?;
            } else {
                let rendered: Vec<String> = counts.iter().map(|c| c.to_string()).collect();
                writeln!(out, "{word}: {}", rendered.join(", "))?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
