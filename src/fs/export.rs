//! Plain-text export of generated documents.

use super::atomic::atomic_write_file;
use crate::error::Result;
use crate::synth::GeneratedDocument;
use std::path::{Path, PathBuf};

/// Where a document was written and how large it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Write the document text, exactly as generated, to `path`.
pub fn export_document(document: &GeneratedDocument, path: &Path) -> Result<ExportReport> {
    atomic_write_file(path, document.as_str())?;
    Ok(ExportReport {
        path: path.to_path_buf(),
        bytes: document.len(),
    })
}
