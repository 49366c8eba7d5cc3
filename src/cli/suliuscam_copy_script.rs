//! `convert-suliuscam-copy-script`: retarget an at-sea copy script for shore.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::warn;

use crate::config::Config;
use crate::logging::{self, Verbosity};
use crate::suliuscam;

/// SuliusCam copy script tweaker.
///
/// Prints a script that copies a lowering's SuliusCam images into the
/// shoreside image tree, renamed by capture time.
#[derive(Debug, Parser)]
#[command(name = "convert-suliuscam-copy-script")]
pub struct SuliusCamCopyScriptCli {
    /// Display debug messages.
    #[arg(short, long)]
    debug: bool,

    /// Config file (default: `~/.sealog-import/config.toml` if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the directory the copy script reads images from.
    #[arg(long)]
    source_dir: Option<String>,

    /// Override the root of the shoreside image tree.
    #[arg(long)]
    dest_dir: Option<String>,

    /// Lowering ID the images belong to.
    lowering_id: String,

    /// Original SuliusCam copy script to modify.
    copy_script: PathBuf,
}

impl SuliusCamCopyScriptCli {
    /// Run the tool, returning an error message on failure.
    pub fn run(self) -> Result<(), String> {
        logging::init(Verbosity::from_debug_flag(self.debug));
        self.execute(&mut io::stdout().lock())
    }

    /// Rewrite the script and write the assembled result to `out`.
    ///
    /// A missing file or a script without copy lines writes nothing and
    /// still succeeds. A malformed copy line is an error and writes nothing.
    fn execute(self, out: &mut impl Write) -> Result<(), String> {
        let config = Config::resolve(self.config.as_deref())
            .map_err(|e| e.to_string())?
            .with_overrides(self.source_dir, self.dest_dir);

        if !super::require_file(&self.copy_script) {
            return Ok(());
        }

        let body = suliuscam::rewrite(&self.lowering_id, &self.copy_script)
            .map_err(|e| format!("failed to rewrite {}: {e}", self.copy_script.display()))?;

        if body.is_empty() {
            warn!("Nothing to return");
            return Ok(());
        }

        let script = suliuscam::render_script(&self.lowering_id, &body, &config);
        out.write_all(script.as_bytes())
            .map_err(|e| format!("failed to write output: {e}"))
    }
}
