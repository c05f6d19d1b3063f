use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::domain::entities::view::{SortField, SortSpec};
use crate::infra::export::csv::CsvQuoting;
use crate::infra::export::report::{ReportOptions, DEFAULT_CURRENCY_SYMBOL, DEFAULT_REPORT_TITLE};
use crate::usecase::table::filter::DateRangeMode;

pub const ENV_PREFIX: &str = "CAMPAIGN_INSIGHTS";
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub refresh_interval_secs: u64,
    pub initial_load_delay_ms: u64,
    pub csv_quoting: String,
    pub apply_date_range: bool,
    pub currency_symbol: String,
    pub report_title: String,
    /// Row key of the column sorted on first load, e.g. `"clicks"`.
    pub initial_sort: String,
    /// Write exports straight into this directory instead of asking.
    pub export_dir: Option<PathBuf>,
    /// Fixed seed for the mock data source.
    pub mock_seed: Option<u64>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 10,
            initial_load_delay_ms: 1_000,
            csv_quoting: "never".to_string(),
            apply_date_range: false,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            report_title: DEFAULT_REPORT_TITLE.to_string(),
            initial_sort: "campaignName".to_string(),
            export_dir: None,
            mock_seed: None,
        }
    }
}

impl AppSettings {
    /// Defaults, then the optional settings file, then environment overrides.
    pub fn load(settings_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = settings_file {
            builder = builder.add_source(File::from(path).required(false));
        }
        let settings: AppSettings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("failed to build settings")?
            .try_deserialize()
            .context("failed to parse settings")?;
        Ok(settings.normalized())
    }

    fn normalized(mut self) -> Self {
        if self.refresh_interval_secs == 0 {
            self.refresh_interval_secs = 1;
        }
        self
    }

    pub fn csv_quoting(&self) -> CsvQuoting {
        CsvQuoting::from_setting(&self.csv_quoting)
    }

    /// Unknown keys fall back to the campaign name column.
    pub fn initial_sort(&self) -> SortSpec {
        match SortField::from_key(&self.initial_sort) {
            Some(field) => SortSpec {
                field,
                ..SortSpec::default()
            },
            None => {
                tracing::warn!(key = %self.initial_sort, "unknown initial sort column");
                SortSpec::default()
            }
        }
    }

    pub fn date_range_mode(&self) -> DateRangeMode {
        if self.apply_date_range {
            DateRangeMode::Overlap
        } else {
            DateRangeMode::Ignore
        }
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            title: self.report_title.clone(),
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}
