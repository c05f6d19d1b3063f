use std::fs;
use std::path::{Path, PathBuf};

use crate::usecase::ports::export::{ExportError, ExportPayload, ExportSink};

pub fn write_payload(target: &Path, payload: &ExportPayload) -> Result<PathBuf, ExportError> {
    if let Some(parent) = target.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| {
            ExportError::Io(format!("failed to create {}: {err}", parent.display()))
        })?;
    }
    fs::write(target, payload.body.as_bytes())
        .map_err(|err| ExportError::Io(format!("failed to write {}: {err}", target.display())))?;
    tracing::info!(
        path = %target.display(),
        mime = payload.mime_type,
        bytes = payload.body.len(),
        "export written"
    );
    Ok(target.to_path_buf())
}

/// Saves every payload under one directory using the payload's file name.
pub struct FileExportSink {
    dir: PathBuf,
}

impl FileExportSink {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl ExportSink for FileExportSink {
    fn deliver(&self, payload: &ExportPayload) -> Result<PathBuf, ExportError> {
        write_payload(&self.dir.join(&payload.file_name), payload)
    }
}

/// Asks the user where to save, then writes there.
pub struct DialogExportSink {
    default_dir: Option<PathBuf>,
}

impl DialogExportSink {
    pub fn new(default_dir: Option<PathBuf>) -> Self {
        Self { default_dir }
    }
}

impl ExportSink for DialogExportSink {
    fn deliver(&self, payload: &ExportPayload) -> Result<PathBuf, ExportError> {
        let extension = Path::new(&payload.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("txt")
            .to_string();
        let mut dialog = rfd::FileDialog::new()
            .set_file_name(payload.file_name.as_str())
            .add_filter(payload.mime_type, &[extension.as_str()]);
        if let Some(dir) = &self.default_dir {
            dialog = dialog.set_directory(dir);
        }
        let target = dialog.save_file().ok_or(ExportError::Cancelled)?;
        write_payload(&target, payload)
    }
}
