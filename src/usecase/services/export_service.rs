use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::campaign::CampaignRow;
use crate::infra::export::csv::{to_csv, CsvQuoting};
use crate::infra::export::report::{to_printable_report, ReportOptions};
use crate::usecase::ports::export::{
    ExportError, ExportPayload, ExportSink, CSV_FILE_NAME, CSV_MIME_TYPE, REPORT_FILE_NAME,
    REPORT_MIME_TYPE,
};

pub struct ExportService {
    sink: Arc<dyn ExportSink>,
    csv_quoting: CsvQuoting,
    report_options: ReportOptions,
}

impl ExportService {
    pub fn new(
        sink: Arc<dyn ExportSink>,
        csv_quoting: CsvQuoting,
        report_options: ReportOptions,
    ) -> Self {
        Self {
            sink,
            csv_quoting,
            report_options,
        }
    }

    pub fn csv_payload(&self, rows: &[CampaignRow]) -> Result<ExportPayload, ExportError> {
        Ok(ExportPayload {
            file_name: CSV_FILE_NAME.to_string(),
            mime_type: CSV_MIME_TYPE,
            body: to_csv(rows, self.csv_quoting)?,
        })
    }

    pub fn report_payload(&self, rows: &[CampaignRow], generated_at: NaiveDate) -> ExportPayload {
        ExportPayload {
            file_name: REPORT_FILE_NAME.to_string(),
            mime_type: REPORT_MIME_TYPE,
            body: to_printable_report(rows, generated_at, &self.report_options),
        }
    }

    /// `rows` is the full filtered and sorted set, owned by the caller for
    /// the duration of the export.
    pub fn export_csv(&self, rows: &[CampaignRow]) -> Result<PathBuf, ExportError> {
        let payload = self.csv_payload(rows)?;
        self.deliver(&payload, rows.len())
    }

    pub fn export_report(
        &self,
        rows: &[CampaignRow],
        generated_at: NaiveDate,
    ) -> Result<PathBuf, ExportError> {
        let payload = self.report_payload(rows, generated_at);
        self.deliver(&payload, rows.len())
    }

    fn deliver(&self, payload: &ExportPayload, row_count: usize) -> Result<PathBuf, ExportError> {
        match self.sink.deliver(payload) {
            Ok(path) => {
                tracing::info!(file = %payload.file_name, rows = row_count, "export delivered");
                Ok(path)
            }
            Err(ExportError::Cancelled) => {
                tracing::debug!(file = %payload.file_name, "export cancelled");
                Err(ExportError::Cancelled)
            }
            Err(err) => {
                tracing::warn!(file = %payload.file_name, error = %err, "export failed");
                Err(err)
            }
        }
    }
}
