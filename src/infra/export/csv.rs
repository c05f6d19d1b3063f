use crate::domain::entities::campaign::CampaignRow;
use crate::usecase::ports::export::ExportError;

pub const CSV_HEADERS: [&str; 8] = [
    "Campaign Name",
    "Impressions",
    "Clicks",
    "CPC",
    "Conversion Rate",
    "Status",
    "Type",
    "Region",
];

/// `Never` writes fields verbatim, so a comma inside a campaign name shifts
/// the columns of that line. `Necessary` applies RFC 4180 quoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvQuoting {
    #[default]
    Never,
    Necessary,
}

impl CsvQuoting {
    pub fn from_setting(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "necessary" | "rfc4180" => CsvQuoting::Necessary,
            _ => CsvQuoting::Never,
        }
    }

    fn quote_style(self) -> csv::QuoteStyle {
        match self {
            CsvQuoting::Never => csv::QuoteStyle::Never,
            CsvQuoting::Necessary => csv::QuoteStyle::Necessary,
        }
    }
}

fn csv_fields(row: &CampaignRow) -> [String; 8] {
    [
        row.campaign_name.clone(),
        row.impressions.to_string(),
        row.clicks.to_string(),
        row.cpc.to_string(),
        row.conversion_rate.to_string(),
        row.status.label().to_string(),
        row.campaign_type.label().to_string(),
        row.region.label().to_string(),
    ]
}

/// Header line plus one line per row, joined with `\n` and no trailing
/// newline.
pub fn to_csv(rows: &[CampaignRow], quoting: CsvQuoting) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(quoting.quote_style())
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(CSV_HEADERS)
        .map_err(|err| ExportError::Serialize(err.to_string()))?;
    for row in rows {
        writer
            .write_record(csv_fields(row))
            .map_err(|err| ExportError::Serialize(err.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Serialize(err.to_string()))?;
    let mut text =
        String::from_utf8(bytes).map_err(|err| ExportError::Serialize(err.to_string()))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
