//! Offline import tools for moving at-sea Sealog data ashore.
//!
//! - [`cruise`] converts legacy cruise exports into import documents.
//! - [`suliuscam`] rewrites SuliusCam copy scripts for the shoreside layout.

pub mod cli;
pub mod config;
pub mod cruise;
pub mod logging;
pub mod model;
pub mod suliuscam;
