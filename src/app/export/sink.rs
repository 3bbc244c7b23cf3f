use super::{ExportError, ExportedDocument};
use crate::trace_debug;
use std::path::{Path, PathBuf};

/// Destination for exported documents.
pub trait ExportSink {
    /// Persist `document` and return where it ended up.
    fn save(&self, document: &ExportedDocument) -> Result<PathBuf, ExportError>;
}

/// Writes documents into a directory, overwriting any previous export of the same format.
#[derive(Debug, Clone)]
pub struct FileSystemSink {
    directory: PathBuf,
}

impl FileSystemSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl ExportSink for FileSystemSink {
    fn save(&self, document: &ExportedDocument) -> Result<PathBuf, ExportError> {
        std::fs::create_dir_all(&self.directory).map_err(|source| ExportError::Io {
            path: self.directory.clone(),
            source,
        })?;

        let path = self.directory.join(&document.file_name);
        std::fs::write(&path, document.body.as_bytes()).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        trace_debug!(
            "Wrote {} bytes of {} to {:?}",
            document.body.len(),
            document.mime_type,
            path
        );
        Ok(path)
    }
}
