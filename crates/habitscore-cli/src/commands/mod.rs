pub mod config;
pub mod report;
pub mod score;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Args;
use habitscore_core::{read_checkmarks, Checkmark};

/// Where the checkmark history comes from.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// JSON file with an array of {"date", "value"} checkmarks ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,
}

impl InputArgs {
    pub fn read(&self) -> Result<Vec<Checkmark>, Box<dyn std::error::Error>> {
        let checkmarks = if self.input.as_os_str() == "-" {
            read_checkmarks(std::io::stdin().lock())?
        } else {
            let file = File::open(&self.input)
                .map_err(|e| format!("cannot open {}: {e}", self.input.display()))?;
            read_checkmarks(BufReader::new(file))?
        };
        tracing::debug!(count = checkmarks.len(), input = %self.input.display(), "loaded history");
        Ok(checkmarks)
    }
}
