//! Data model for the import tools.
//!
//! Both models are transient: built from one input file, emitted once.

mod copy_command;
mod cruise;

pub use copy_command::{COPY_DIRECTIVE, CaptureTimestamp, CopyCommand, CopyCommandError};
pub use cruise::{Cruise, CruiseAdditionalMeta, CruiseDocument, Date, LegacyCruise, ObjectId};
