use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::entities::campaign::{CampaignRow, CampaignStatus, CampaignType, Region};
use crate::domain::entities::dashboard::{
    ChangeDirection, ChartPoint, DemographicSlice, MetricCard, MetricFormat,
};
use crate::domain::entities::view::{
    PageState, PageView, Selection, SortDirection, SortField, SortSpec, ALL_OPTION_VALUE,
};
use crate::infra::export::file_sink::{DialogExportSink, FileExportSink};
use crate::infra::export::format::{
    format_count, format_currency_2dp, format_currency_whole, format_percent_1dp,
    format_percent_2dp, group_indian,
};
use crate::infra::mock::generator::MockSource;
use crate::platform::desktop::paths::default_export_dir;
use crate::settings::AppSettings;
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::export::{ExportError, ExportSink};
use crate::usecase::ports::source::SnapshotSource;
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::table_service::TableViewService;

pub const TABLE_COLUMNS: [(SortField, &str); 6] = [
    (SortField::CampaignName, "Campaign Name"),
    (SortField::Impressions, "Impressions"),
    (SortField::Clicks, "Clicks"),
    (SortField::Cpc, "CPC"),
    (SortField::ConversionRate, "Conversion %"),
    (SortField::Status, "Status"),
];

pub fn card_style() -> &'static str {
    "background: #fff; border: 1px solid #ddd; border-radius: 10px; padding: 16px;"
}

pub fn table_header_cell_style() -> &'static str {
    "border-bottom: 1px solid #ccc; padding: 8px; text-align: left; cursor: pointer; user-select: none; white-space: nowrap;"
}

pub fn sort_indicator(sort: SortSpec, field: SortField) -> &'static str {
    if sort.field != field {
        return "";
    }
    match sort.direction {
        SortDirection::Asc => " ▲",
        SortDirection::Desc => " ▼",
    }
}

pub fn status_badge_style(row: &CampaignRow) -> &'static str {
    match row.status {
        CampaignStatus::Live => "background: #111; color: #fff; padding: 2px 8px; border-radius: 999px;",
        CampaignStatus::Paused => "background: #eee; color: #333; padding: 2px 8px; border-radius: 999px;",
        CampaignStatus::Ended => "border: 1px solid #bbb; color: #333; padding: 2px 8px; border-radius: 999px;",
    }
}

pub fn format_metric_value(card: &MetricCard, currency_symbol: &str) -> String {
    match card.format {
        MetricFormat::Currency => format_currency_whole(card.value, currency_symbol),
        MetricFormat::Number => format_count(card.value),
        MetricFormat::Percentage => format_percent_1dp(card.value),
    }
}

fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

fn point_tooltip(point: &ChartPoint) -> String {
    let mut parts = vec![point.name.clone()];
    if let Some(date) = &point.date {
        parts.push(date.clone());
    }
    if let Some(revenue) = point.revenue {
        parts.push(format!("revenue {}", format_count(revenue)));
    }
    if let Some(impressions) = point.impressions {
        parts.push(format!("{} impressions", group_indian(impressions)));
    }
    if let Some(clicks) = point.clicks {
        parts.push(format!("{} clicks", group_indian(clicks)));
    }
    parts.join(" · ")
}

fn export_status(kind: &str, result: Result<std::path::PathBuf, ExportError>) -> String {
    match result {
        Ok(path) => format!("{kind} saved to {}", path.display()),
        Err(ExportError::Cancelled) => format!("{kind} export cancelled"),
        Err(err) => format!("{kind} export failed: {err}"),
    }
}

#[component]
fn MetricCardView(card: MetricCard, currency_symbol: String) -> Element {
    let value = format_metric_value(&card, &currency_symbol);
    let (arrow, color) = match card.change_direction {
        ChangeDirection::Increase => ("▲", "#16a34a"),
        ChangeDirection::Decrease => ("▼", "#dc2626"),
    };
    let change = format_percent_1dp(card.change.abs());

    rsx! {
        div { style: "{card_style()}", title: "{card.icon}",
            div { style: "font-size: 13px; color: #666;", "{card.title}" }
            div { style: "font-size: 24px; font-weight: bold; margin: 6px 0;", "{value}" }
            div { style: "font-size: 12px; color: #666;",
                span { style: "color: {color};", "{arrow} {change}" }
                span { " from last week" }
            }
        }
    }
}

#[component]
fn LoadingCard() -> Element {
    rsx! {
        div { style: "{card_style()} color: #aaa;", "Loading…" }
    }
}

#[component]
fn BarPanel(title: &'static str, subtitle: &'static str, points: Vec<ChartPoint>) -> Element {
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);

    rsx! {
        div { style: "{card_style()} flex: 1; min-width: 320px;",
            div { style: "font-weight: bold;", "{title}" }
            div { style: "font-size: 12px; color: #666; margin-bottom: 8px;", "{subtitle}" }
            for point in points.iter() {
                div {
                    style: "display: flex; align-items: center; gap: 8px; margin: 4px 0;",
                    title: "{point_tooltip(point)}",
                    span { style: "width: 90px; font-size: 12px;", "{point.name}" }
                    div { style: "flex: 1; background: #f1f5f9; height: 12px; border-radius: 4px;",
                        div { style: "width: {bar_width(point.value, max)}%; background: #3B82F6; height: 12px; border-radius: 4px;" }
                    }
                    span { style: "width: 80px; font-size: 12px; text-align: right;",
                        "{format_count(point.value)}"
                    }
                }
            }
        }
    }
}

#[component]
fn DemographicsPanel(slices: Vec<DemographicSlice>) -> Element {
    rsx! {
        div { style: "{card_style()} min-width: 220px;",
            div { style: "font-weight: bold; margin-bottom: 8px;", "Audience" }
            for slice in slices.iter() {
                div { style: "display: flex; align-items: center; gap: 8px; margin: 4px 0; font-size: 12px;",
                    span { style: "width: 10px; height: 10px; border-radius: 50%; background: {slice.color};" }
                    span { style: "flex: 1;", "{slice.segment}" }
                    span { title: "{group_indian(slice.count)} users", "{slice.percentage}%" }
                }
            }
        }
    }
}

#[component]
fn FilterBar(
    search_term: String,
    campaign_type: Selection<CampaignType>,
    region: Selection<Region>,
    on_search: EventHandler<String>,
    on_type: EventHandler<String>,
    on_region: EventHandler<String>,
    on_export_csv: EventHandler<()>,
    on_export_pdf: EventHandler<()>,
) -> Element {
    let selected_type = campaign_type.option_value();
    let selected_region = region.option_value();

    rsx! {
        div { style: "{card_style()} display: flex; gap: 16px; align-items: end; flex-wrap: wrap;",
            label { style: "display: flex; flex-direction: column; gap: 4px;",
                span { "Search Campaigns" }
                input {
                    placeholder: "Enter campaign name...",
                    value: "{search_term}",
                    oninput: move |event| on_search.call(event.value()),
                }
            }
            label { style: "display: flex; flex-direction: column; gap: 4px;",
                span { "Campaign Type" }
                select {
                    value: "{selected_type}",
                    onchange: move |event| on_type.call(event.value()),
                    option { value: ALL_OPTION_VALUE, selected: selected_type == ALL_OPTION_VALUE, "All Types" }
                    for kind in CampaignType::ALL {
                        option { value: kind.label(), selected: selected_type == kind.label(), "{kind.label()}" }
                    }
                }
            }
            label { style: "display: flex; flex-direction: column; gap: 4px;",
                span { "Region" }
                select {
                    value: "{selected_region}",
                    onchange: move |event| on_region.call(event.value()),
                    option { value: ALL_OPTION_VALUE, selected: selected_region == ALL_OPTION_VALUE, "All Regions" }
                    for place in Region::ALL {
                        option { value: place.label(), selected: selected_region == place.label(), "{place.label()}" }
                    }
                }
            }
            button { onclick: move |_| on_export_csv.call(()), "CSV" }
            button { onclick: move |_| on_export_pdf.call(()), "PDF" }
        }
    }
}

#[component]
fn DataTable(
    view: PageView,
    sort: SortSpec,
    page: PageState,
    currency_symbol: String,
    on_sort: EventHandler<SortField>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let summary = view.summary();
    let total_pages = view.total_pages;

    rsx! {
        div { style: "{card_style()}",
            div { style: "font-weight: bold; margin-bottom: 8px;", "Campaign Performance Data" }
            table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                thead {
                    tr {
                        for (field, label) in TABLE_COLUMNS {
                            th {
                                style: "{table_header_cell_style()}",
                                onclick: move |_| on_sort.call(field),
                                "{label}{sort_indicator(sort, field)}"
                            }
                        }
                    }
                }
                tbody {
                    for row in view.page_rows.iter() {
                        tr { key: "{row.id}",
                            td { style: "padding: 8px; font-weight: 500;", "{row.campaign_name}" }
                            td { style: "padding: 8px;", "{group_indian(row.impressions)}" }
                            td { style: "padding: 8px;", "{group_indian(row.clicks)}" }
                            td { style: "padding: 8px;", "{format_currency_2dp(row.cpc, &currency_symbol)}" }
                            td { style: "padding: 8px;", "{format_percent_2dp(row.conversion_rate)}" }
                            td { style: "padding: 8px;",
                                span { style: "{status_badge_style(row)}", "{row.status.label()}" }
                            }
                        }
                    }
                }
            }
            div { style: "display: flex; justify-content: space-between; align-items: center; padding-top: 12px;",
                span { style: "font-size: 13px; color: #666;", "{summary}" }
                div { style: "display: flex; gap: 8px; align-items: center;",
                    button {
                        disabled: !page.has_prev(),
                        onclick: move |_| on_prev.call(()),
                        "Previous"
                    }
                    span { style: "font-size: 13px; color: #666;",
                        "Page {page.current_page} of {total_pages}"
                    }
                    button {
                        disabled: !page.has_next(total_pages),
                        onclick: move |_| on_next.call(()),
                        "Next"
                    }
                }
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let settings = use_context::<AppSettings>();

    let AppState {
        mut snapshot,
        mut loading,
        mut criteria,
        mut sort,
        mut page,
        mut status,
    } = AppState::new(settings.initial_sort());

    let mock_seed = settings.mock_seed;
    let source = use_hook(move || {
        let source = match mock_seed {
            Some(seed) => MockSource::seeded(seed),
            None => MockSource::new(),
        };
        Arc::new(source) as Arc<dyn SnapshotSource>
    });
    let table_service = TableViewService::new(settings.date_range_mode());
    let export_service = use_hook({
        let settings = settings.clone();
        move || {
            let sink: Arc<dyn ExportSink> = match settings.export_dir.clone() {
                Some(dir) => Arc::new(FileExportSink::new(dir)),
                None => Arc::new(DialogExportSink::new(default_export_dir())),
            };
            Arc::new(ExportService::new(
                sink,
                settings.csv_quoting(),
                settings.report_options(),
            ))
        }
    });

    let load_delay = Duration::from_millis(settings.initial_load_delay_ms);
    let refresh_interval = Duration::from_secs(settings.refresh_interval_secs);
    use_future(move || {
        let source = source.clone();
        async move {
            tokio::time::sleep(load_delay).await;
            *snapshot.write() = source.load();
            *loading.write() = false;
            loop {
                tokio::time::sleep(refresh_interval).await;
                let next = {
                    let current = snapshot.peek();
                    source.refresh(&current)
                };
                *snapshot.write() = next;
            }
        }
    });

    let table = use_memo(move || {
        table_service.recompute(
            &snapshot.read().campaigns,
            &criteria.read(),
            sort(),
            page(),
        )
    });

    // a refresh or a narrower filter can leave the page past the end
    use_effect(move || {
        let total_pages = table.read().page.total_pages;
        let current = page();
        let fixed = current.clamped(total_pages);
        if fixed != current {
            *page.write() = fixed;
        }
    });

    let export_service_for_csv = export_service.clone();
    let export_service_for_pdf = export_service.clone();
    let current = snapshot.read().clone();
    let current_criteria = criteria.read().clone();
    let currency_symbol = settings.currency_symbol.clone();

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 16px; padding: 16px; background: #f8fafc; min-height: 100vh; font-family: sans-serif;",
            div {
                h1 { style: "margin: 0;", "Analytics Dashboard" }
                p { style: "margin: 4px 0 0; color: #666;",
                    "Comprehensive insights for your digital marketing campaigns"
                }
            }

            div { style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px;",
                if loading() {
                    for _ in 0..4 {
                        LoadingCard {}
                    }
                } else {
                    for card in current.metrics.iter() {
                        MetricCardView {
                            card: card.clone(),
                            currency_symbol: currency_symbol.clone(),
                        }
                    }
                }
            }

            div { style: "display: flex; gap: 16px; flex-wrap: wrap;",
                BarPanel {
                    title: "Revenue Trend",
                    subtitle: "Monthly revenue",
                    points: current.revenue.clone(),
                }
                BarPanel {
                    title: "Campaign Performance",
                    subtitle: "Impressions by platform",
                    points: current.channel_performance.clone(),
                }
                DemographicsPanel { slices: current.demographics.clone() }
            }

            FilterBar {
                search_term: current_criteria.search_term.clone(),
                campaign_type: current_criteria.campaign_type,
                region: current_criteria.region,
                on_search: move |term: String| {
                    criteria.write().search_term = term;
                    page.set(page().first());
                },
                on_type: move |value: String| {
                    criteria.write().campaign_type = Selection::<CampaignType>::from_option_value(&value);
                    page.set(page().first());
                },
                on_region: move |value: String| {
                    criteria.write().region = Selection::<Region>::from_option_value(&value);
                    page.set(page().first());
                },
                on_export_csv: move |_| {
                    let rows = table.read().rows.clone();
                    let result = export_service_for_csv.export_csv(&rows);
                    *status.write() = export_status("CSV", result);
                },
                on_export_pdf: move |_| {
                    let rows = table.read().rows.clone();
                    let today = chrono::Local::now().date_naive();
                    let result = export_service_for_pdf.export_report(&rows, today);
                    *status.write() = export_status("Report", result);
                },
            }

            if loading() {
                LoadingCard {}
            } else {
                DataTable {
                    view: table.read().page.clone(),
                    sort: sort(),
                    page: page(),
                    currency_symbol: currency_symbol.clone(),
                    on_sort: move |field: SortField| {
                        sort.set(sort().toggled_by(field));
                        page.set(page().first());
                    },
                    on_prev: move |_| {
                        page.set(page().prev());
                    },
                    on_next: move |_| {
                        let total_pages = table.read().page.total_pages;
                        page.set(page().next(total_pages));
                    },
                }
            }

            div { style: "font-size: 12px; color: #666;", "{status}" }
        }
    }
}
