//! Filesystem utilities for promptforge.
//!
//! Atomic writes back both document export and config scaffolding, so a
//! crash never leaves a half-written file behind.

pub mod atomic;
mod export;

pub use atomic::atomic_write_file;
pub use export::{ExportReport, export_document};
