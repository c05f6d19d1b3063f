use chrono::NaiveDate;

use crate::domain::entities::campaign::CampaignRow;
use crate::infra::export::format::{
    escape_html, format_currency_2dp, format_percent_2dp, group_thousands,
};

pub const DEFAULT_REPORT_TITLE: &str = "ADmyBRAND Insights — Campaign Report";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

const REPORT_HEADERS: [&str; 6] = [
    "Campaign Name",
    "Impressions",
    "Clicks",
    "CPC",
    "Conversion Rate",
    "Status",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub title: String,
    pub currency_symbol: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

fn report_row(row: &CampaignRow, options: &ReportOptions) -> String {
    let cells = [
        escape_html(&row.campaign_name),
        group_thousands(row.impressions),
        group_thousands(row.clicks),
        escape_html(&format_currency_2dp(row.cpc, &options.currency_symbol)),
        format_percent_2dp(row.conversion_rate),
        row.status.label().to_string(),
    ];
    let mut html = String::from("<tr>");
    for cell in cells {
        html.push_str("<td>");
        html.push_str(&cell);
        html.push_str("</td>");
    }
    html.push_str("</tr>\n");
    html
}

/// Self-contained HTML document for the print dialog.
pub fn to_printable_report(
    rows: &[CampaignRow],
    generated_at: NaiveDate,
    options: &ReportOptions,
) -> String {
    let title = escape_html(&options.title);
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Campaign Report</title>\n</head>\n<body>\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));
    html.push_str(&format!(
        "<p>Generated on: {}</p>\n",
        generated_at.format("%-m/%-d/%Y")
    ));
    html.push_str("<table border=\"1\" style=\"width: 100%; border-collapse: collapse;\">\n<thead>\n<tr>");
    for header in REPORT_HEADERS {
        html.push_str(&format!("<th>{header}</th>"));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in rows {
        html.push_str(&report_row(row, options));
    }
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures::{date, row};

    #[test]
    fn report_has_title_date_and_bordered_table() {
        let html = to_printable_report(&[], date(2024, 7, 4), &ReportOptions::default());
        assert!(html.contains("<h1>ADmyBRAND Insights — Campaign Report</h1>"));
        assert!(html.contains("<p>Generated on: 7/4/2024</p>"));
        assert!(html.contains("<table border=\"1\""));
        assert!(html.contains("<th>Conversion Rate</th><th>Status</th>"));
        assert!(!html.contains("<td>"));
    }

    #[test]
    fn cells_are_formatted_for_reading() {
        let mut sample = row("campaign-4", "Valentine's Day", 1_234_567);
        sample.clicks = 25_000;
        sample.cpc = 3.5;
        sample.conversion_rate = 7.1;
        let html = to_printable_report(&[sample], date(2024, 1, 1), &ReportOptions::default());
        assert!(html.contains(
            "<tr><td>Valentine&#39;s Day</td><td>1,234,567</td><td>25,000</td><td>₹3.50</td><td>7.10%</td><td>Live</td></tr>"
        ));
    }

    #[test]
    fn every_row_is_emitted_in_order() {
        let rows = vec![row("a", "Zeta", 1), row("b", "Alpha", 2)];
        let html = to_printable_report(&rows, date(2024, 1, 1), &ReportOptions::default());
        let zeta = html.find("Zeta").expect("first row present");
        let alpha = html.find("Alpha").expect("second row present");
        assert!(zeta < alpha, "rows keep the order they were given");
        assert_eq!(html.matches("<tr><td>").count(), 2);
    }
}
