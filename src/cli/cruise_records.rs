//! `convert-cruise-records`: reformat a legacy cruise export for import.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::error;

use crate::cruise::{self, ConvertError};
use crate::logging::{self, Verbosity};

/// Cruise record reformatter.
///
/// Prints the converted records as a JSON array on stdout.
#[derive(Debug, Parser)]
#[command(name = "convert-cruise-records")]
pub struct CruiseRecordsCli {
    /// Display debug messages.
    #[arg(short, long)]
    debug: bool,

    /// Original cruise record to reformat: one record or an array of records.
    cruise_record_file: PathBuf,
}

impl CruiseRecordsCli {
    /// Run the tool, returning an error message on failure.
    pub fn run(self) -> Result<(), String> {
        logging::init(Verbosity::from_debug_flag(self.debug));
        self.execute(&mut io::stdout().lock())
    }

    /// Convert the input and write the result to `out`.
    ///
    /// A missing file, a failed conversion and an empty export all write
    /// nothing and still succeed.
    fn execute(&self, out: &mut impl Write) -> Result<(), String> {
        if !super::require_file(&self.cruise_record_file) {
            return Ok(());
        }

        match cruise::convert(&self.cruise_record_file) {
            Ok(cruises) if !cruises.is_empty() => {
                let json = cruise::to_json(&cruises)
                    .map_err(|e| format!("failed to serialize cruises: {e}"))?;
                writeln!(out, "{json}").map_err(|e| format!("failed to write output: {e}"))?;
            }
            Ok(_) => error!("Nothing to return"),
            Err(e) => {
                // Malformed records are logged where they are found.
                if !matches!(e, ConvertError::MalformedRecord { .. }) {
                    error!("{}: {e}", self.cruise_record_file.display());
                }
                error!("Nothing to return");
            }
        }

        Ok(())
    }
}
