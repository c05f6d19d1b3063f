use std::sync::Mutex;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::entities::campaign::{
    CampaignId, CampaignRow, CampaignStatus, CampaignType, Region,
};
use crate::domain::entities::dashboard::{
    ChangeDirection, ChartPoint, DashboardSnapshot, DemographicSlice, MetricCard, MetricFormat,
};
use crate::usecase::ports::source::SnapshotSource;

pub const CAMPAIGN_NAMES: [&str; 16] = [
    "Summer Sale 2024",
    "Brand Awareness Q4",
    "Product Launch",
    "Holiday Special",
    "Back to School",
    "Black Friday Deals",
    "New Year Campaign",
    "Valentine's Day",
    "Mother's Day Special",
    "Father's Day Promo",
    "Independence Day",
    "Diwali Campaign",
    "Christmas Special",
    "Year End Sale",
    "Spring Collection",
    "Monsoon Offers",
];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const CHANNELS: [&str; 6] = [
    "Google Ads",
    "Facebook",
    "Instagram",
    "LinkedIn",
    "Twitter",
    "YouTube",
];

const DATA_YEAR: i32 = 2024;

/// Centered noise in `[-half_width, half_width)`.
fn jitter(rng: &mut impl Rng, width: f64) -> f64 {
    (rng.gen::<f64>() - 0.5) * width
}

fn direction(rng: &mut impl Rng, decrease_odds: f64) -> ChangeDirection {
    if rng.gen::<f64>() > decrease_odds {
        ChangeDirection::Increase
    } else {
        ChangeDirection::Decrease
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn random_day(rng: &mut impl Rng) -> NaiveDate {
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    NaiveDate::from_ymd_opt(DATA_YEAR, month, day).unwrap_or_default()
}

pub fn generate_metrics(rng: &mut impl Rng) -> Vec<MetricCard> {
    let base_revenue = 2_500_000.0;
    let base_users = 45_000.0;
    let base_conversion = 3.2;
    let base_growth = 12.5;

    let revenue_variation = jitter(rng, 100_000.0);
    let users_variation = jitter(rng, 2_000.0).floor();
    let conversion_variation = jitter(rng, 0.5);
    let growth_variation = jitter(rng, 2.0);

    vec![
        MetricCard {
            title: "Total Revenue".to_string(),
            value: base_revenue + revenue_variation,
            change: base_growth + growth_variation,
            change_direction: direction(rng, 0.3),
            icon: "TrendingUp",
            format: MetricFormat::Currency,
        },
        MetricCard {
            title: "Active Users".to_string(),
            value: base_users + users_variation,
            change: 8.2 + jitter(rng, 3.0),
            change_direction: direction(rng, 0.2),
            icon: "Users",
            format: MetricFormat::Number,
        },
        MetricCard {
            title: "Conversion Rate".to_string(),
            value: base_conversion + conversion_variation,
            change: 2.1 + jitter(rng, 1.0),
            change_direction: direction(rng, 0.4),
            icon: "Target",
            format: MetricFormat::Percentage,
        },
        MetricCard {
            title: "Growth Rate".to_string(),
            value: base_growth + growth_variation,
            change: 5.3 + jitter(rng, 2.0),
            change_direction: direction(rng, 0.3),
            icon: "BarChart3",
            format: MetricFormat::Percentage,
        },
    ]
}

pub fn generate_revenue(rng: &mut impl Rng) -> Vec<ChartPoint> {
    MONTHS
        .iter()
        .enumerate()
        .map(|(index, month)| {
            let revenue = 150_000.0 + index as f64 * 25_000.0 + rng.gen::<f64>() * 50_000.0;
            ChartPoint {
                name: month.to_string(),
                value: revenue,
                revenue: Some(revenue),
                date: Some(format!("{DATA_YEAR}-{:02}-01", index + 1)),
                ..ChartPoint::default()
            }
        })
        .collect()
}

pub fn generate_channel_performance(rng: &mut impl Rng) -> Vec<ChartPoint> {
    CHANNELS
        .iter()
        .map(|channel| ChartPoint {
            name: channel.to_string(),
            impressions: Some(rng.gen_range(100_000..600_000)),
            clicks: Some(rng.gen_range(5_000..30_000)),
            value: rng.gen_range(100_000..600_000) as f64,
            ..ChartPoint::default()
        })
        .collect()
}

pub fn demographics() -> Vec<DemographicSlice> {
    vec![
        DemographicSlice {
            segment: "18-24",
            percentage: 22.0,
            count: 9_900,
            color: "#3B82F6",
        },
        DemographicSlice {
            segment: "25-34",
            percentage: 35.0,
            count: 15_750,
            color: "#10B981",
        },
        DemographicSlice {
            segment: "35-44",
            percentage: 28.0,
            count: 12_600,
            color: "#F59E0B",
        },
        DemographicSlice {
            segment: "45-54",
            percentage: 12.0,
            count: 5_400,
            color: "#EF4444",
        },
        DemographicSlice {
            segment: "55+",
            percentage: 3.0,
            count: 1_350,
            color: "#8B5CF6",
        },
    ]
}

pub fn generate_campaigns(rng: &mut impl Rng) -> Vec<CampaignRow> {
    CAMPAIGN_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| CampaignRow {
            id: CampaignId(format!("campaign-{}", index + 1)),
            campaign_name: name.to_string(),
            impressions: rng.gen_range(50_000..550_000),
            clicks: rng.gen_range(2_500..27_500),
            cpc: round_cents(rng.gen::<f64>() * 5.0 + 0.5),
            conversion_rate: round_cents(rng.gen::<f64>() * 8.0 + 1.0),
            status: *CampaignStatus::ALL
                .choose(rng)
                .unwrap_or(&CampaignStatus::Live),
            campaign_type: *CampaignType::ALL
                .choose(rng)
                .unwrap_or(&CampaignType::Brand),
            region: *Region::ALL.choose(rng).unwrap_or(&Region::India),
            start_date: random_day(rng),
            end_date: random_day(rng),
        })
        .collect()
}

/// Random dashboard data. Refresh regenerates metrics and channel
/// performance; the other series are carried over as copies.
pub struct MockSource {
    rng: Mutex<StdRng>,
}

impl MockSource {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotSource for MockSource {
    fn load(&self) -> DashboardSnapshot {
        let snapshot = self.with_rng(|rng| DashboardSnapshot {
            metrics: generate_metrics(rng),
            revenue: generate_revenue(rng),
            channel_performance: generate_channel_performance(rng),
            demographics: demographics(),
            campaigns: generate_campaigns(rng),
        });
        tracing::info!(campaigns = snapshot.campaigns.len(), "snapshot loaded");
        snapshot
    }

    fn refresh(&self, previous: &DashboardSnapshot) -> DashboardSnapshot {
        let snapshot = self.with_rng(|rng| DashboardSnapshot {
            metrics: generate_metrics(rng),
            channel_performance: generate_channel_performance(rng),
            revenue: previous.revenue.clone(),
            demographics: previous.demographics.clone(),
            campaigns: previous.campaigns.clone(),
        });
        tracing::debug!("snapshot refreshed");
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campaigns_follow_generator_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows = generate_campaigns(&mut rng);

        assert_eq!(rows.len(), CAMPAIGN_NAMES.len());
        for (index, row) in rows.iter().enumerate() {
            assert_eq!(row.id.0, format!("campaign-{}", index + 1));
            assert_eq!(row.campaign_name, CAMPAIGN_NAMES[index]);
            assert!((50_000..550_000).contains(&row.impressions));
            assert!((2_500..27_500).contains(&row.clicks));
            assert!((0.5..=5.5).contains(&row.cpc), "cpc {}", row.cpc);
            assert!((1.0..=9.0).contains(&row.conversion_rate));
            assert_eq!(row.cpc, round_cents(row.cpc));
            assert_eq!(row.start_date.format("%Y").to_string(), "2024");
        }
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let first = MockSource::seeded(42).load();
        let second = MockSource::seeded(42).load();
        assert_eq!(first, second);
    }

    #[test]
    fn refresh_keeps_table_rows_and_replaces_metrics() {
        let source = MockSource::seeded(3);
        let initial = source.load();
        let refreshed = source.refresh(&initial);

        assert_eq!(refreshed.campaigns, initial.campaigns);
        assert_eq!(refreshed.revenue, initial.revenue);
        assert_eq!(refreshed.metrics.len(), 4);
        assert_ne!(refreshed.metrics, initial.metrics);
    }

    #[test]
    fn metrics_stay_near_their_base_values() {
        let mut rng = StdRng::seed_from_u64(11);
        let metrics = generate_metrics(&mut rng);
        let titles: Vec<_> = metrics.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Total Revenue", "Active Users", "Conversion Rate", "Growth Rate"]
        );
        assert!((2_450_000.0..=2_550_000.0).contains(&metrics[0].value));
        assert!((44_000.0..=46_000.0).contains(&metrics[1].value));
        assert_eq!(metrics[3].value, metrics[0].change, "growth shares its variation");
    }

    #[test]
    fn revenue_climbs_by_month_band() {
        let mut rng = StdRng::seed_from_u64(5);
        let revenue = generate_revenue(&mut rng);
        assert_eq!(revenue.len(), 12);
        assert_eq!(revenue[0].date.as_deref(), Some("2024-01-01"));
        assert_eq!(revenue[11].name, "Dec");
        for (index, point) in revenue.iter().enumerate() {
            let floor = 150_000.0 + index as f64 * 25_000.0;
            assert!(point.value >= floor && point.value < floor + 50_000.0);
        }
    }
}
