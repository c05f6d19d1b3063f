use crate::domain::entities::campaign::CampaignRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Increase,
    Decrease,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricFormat {
    Currency,
    Number,
    Percentage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: String,
    pub value: f64,
    pub change: f64,
    pub change_direction: ChangeDirection,
    pub icon: &'static str,
    pub format: MetricFormat,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
    pub revenue: Option<f64>,
    pub impressions: Option<u64>,
    pub clicks: Option<u64>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemographicSlice {
    pub segment: &'static str,
    pub percentage: f64,
    pub count: u64,
    pub color: &'static str,
}

/// Everything one refresh delivers. Replaced wholesale, never merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardSnapshot {
    pub metrics: Vec<MetricCard>,
    pub revenue: Vec<ChartPoint>,
    pub channel_performance: Vec<ChartPoint>,
    pub demographics: Vec<DemographicSlice>,
    pub campaigns: Vec<CampaignRow>,
}
