pub mod csv;
pub mod file_sink;
pub mod format;
pub mod report;
