//! Command-line front ends for the import tools.
//!
//! Each tool reads one file and prints its converted form to stdout.
//! A missing input or an empty result is logged and the tool exits cleanly;
//! only unrecoverable input (a malformed copy line, a bad config) is returned
//! as an error for the binary to report.

mod cruise_records;
mod suliuscam_copy_script;

use std::path::Path;

use tracing::error;

pub use cruise_records::CruiseRecordsCli;
pub use suliuscam_copy_script::SuliusCamCopyScriptCli;

/// Check that the input file exists, logging when it doesn't.
fn require_file(path: &Path) -> bool {
    if path.is_file() {
        return true;
    }
    error!("{} does not exist.", path.display());
    false
}
