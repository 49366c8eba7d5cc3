//! SuliusCam copy script rewriting.
//!
//! The at-sea Sealog instance exports a script of `cp` lines that copy
//! camera images out of a flat directory. The shoreside server files them
//! per lowering and names them by capture time:
//!
//! ```text
//! cp -v /data/SuliusCam_20190522143000.jpg /dest/
//!   → cp -v ${SOURCE_DIR}/SuliusCam_20190522143000.jpg ${DEST_DIR}/<lowering>/SuliusCam/SuliusCam.20190522_143000000.jpg
//! ```

use std::{fs, io, path::Path};

use tracing::debug;

use crate::config::Config;
use crate::model::{CaptureTimestamp, CopyCommand, CopyCommandError};

/// Camera name: the destination subdirectory and the new file name prefix.
pub const CAMERA: &str = "SuliusCam";

/// Errors that can occur while rewriting a copy script.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {source}")]
    MalformedLine {
        line: usize,
        #[source]
        source: CopyCommandError,
    },
}

pub type Result<T> = core::result::Result<T, RewriteError>;

/// Rewrites the copy script at `path` for the given lowering.
///
/// Returns only the rewritten `cp` lines; every other line is dropped.
/// An empty string means the script had no copy lines.
pub fn rewrite(lowering_id: &str, path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path)?;
    rewrite_str(lowering_id, &contents)
}

/// Rewrites a copy script already held in memory.
pub fn rewrite_str(lowering_id: &str, script: &str) -> Result<String> {
    let mut body = String::new();
    for (index, line) in script.lines().enumerate() {
        if !CopyCommand::is_copy_line(line) {
            continue;
        }
        let rewritten = rewrite_line(lowering_id, line).map_err(|source| {
            RewriteError::MalformedLine {
                line: index + 1,
                source,
            }
        })?;
        debug!("{rewritten}");
        body.push_str(&rewritten);
        body.push('\n');
    }
    Ok(body)
}

/// Rewrites a single `cp` line, without its trailing newline.
pub fn rewrite_line(
    lowering_id: &str,
    line: &str,
) -> core::result::Result<String, CopyCommandError> {
    let command = CopyCommand::parse(line)?;
    let file_name = command.source_file_name();
    let timestamp = CaptureTimestamp::from_file_name(file_name)?;
    if timestamp.civil().is_none() {
        debug!("{file_name}: capture timestamp is not a calendar date-time, copying as named");
    }
    debug!("{file_name}: replacing destination {}", command.dest_dir);

    Ok(format!(
        "{} {} ${{SOURCE_DIR}}/{file_name} ${{DEST_DIR}}/{}",
        command.directive,
        command.verbosity,
        destination_path(lowering_id, &timestamp),
    ))
}

/// `<lowering>/SuliusCam/SuliusCam.<YYYYMMDD_HHMMSS000><suffix>`
fn destination_path(lowering_id: &str, timestamp: &CaptureTimestamp) -> String {
    format!("{lowering_id}/{CAMERA}/{CAMERA}.{}", timestamp.render())
}

/// Wraps a rewritten body into a runnable script.
///
/// The header declares the directories the body's placeholders refer to and
/// creates the lowering's destination directory.
pub fn render_script(lowering_id: &str, body: &str, config: &Config) -> String {
    format!(
        "#!/bin/bash\n\
         SOURCE_DIR={}\n\
         DEST_DIR={}\n\
         mkdir -p ${{DEST_DIR}}/{lowering_id}/{CAMERA}\n\
         {body}\n",
        config.source_dir, config.dest_dir_root,
    )
}
