use std::path::PathBuf;

pub const CSV_FILE_NAME: &str = "campaign-data.csv";
pub const CSV_MIME_TYPE: &str = "text/csv";
pub const REPORT_FILE_NAME: &str = "campaign-report.html";
pub const REPORT_MIME_TYPE: &str = "text/html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub file_name: String,
    pub mime_type: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    Cancelled,
    Serialize(String),
    Io(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Cancelled => write!(f, "export cancelled"),
            ExportError::Serialize(message) => write!(f, "failed to serialize export: {message}"),
            ExportError::Io(message) => write!(f, "failed to write export: {message}"),
        }
    }
}

impl std::error::Error for ExportError {}

/// Host-side delivery of an export (download, print, save).
pub trait ExportSink: Send + Sync {
    fn deliver(&self, payload: &ExportPayload) -> Result<PathBuf, ExportError>;
}
