use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CampaignId(pub String);

impl From<&str> for CampaignId {
    fn from(value: &str) -> Self {
        CampaignId(value.to_string())
    }
}

impl std::fmt::Display for CampaignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampaignStatus {
    Live,
    Paused,
    Ended,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 3] = [
        CampaignStatus::Live,
        CampaignStatus::Paused,
        CampaignStatus::Ended,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CampaignStatus::Live => "Live",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Ended => "Ended",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampaignType {
    Brand,
    Performance,
    Awareness,
}

impl CampaignType {
    pub const ALL: [CampaignType; 3] = [
        CampaignType::Brand,
        CampaignType::Performance,
        CampaignType::Awareness,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CampaignType::Brand => "Brand",
            CampaignType::Performance => "Performance",
            CampaignType::Awareness => "Awareness",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    India,
    Us,
    Europe,
    AsiaPacific,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::India, Region::Us, Region::Europe, Region::AsiaPacific];

    pub fn label(self) -> &'static str {
        match self {
            Region::India => "India",
            Region::Us => "US",
            Region::Europe => "Europe",
            Region::AsiaPacific => "Asia-Pacific",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.label() == label)
    }
}

/// One campaign's performance record.
///
/// `clicks <= impressions` and `end_date >= start_date` are expected from
/// the data source but not enforced here.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignRow {
    pub id: CampaignId,
    pub campaign_name: String,
    pub impressions: u64,
    pub clicks: u64,
    pub cpc: f64,
    pub conversion_rate: f64,
    pub status: CampaignStatus,
    pub campaign_type: CampaignType,
    pub region: Region,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back_to_the_same_variant() {
        for kind in CampaignType::ALL {
            assert_eq!(CampaignType::from_label(kind.label()), Some(kind));
        }
        for region in Region::ALL {
            assert_eq!(Region::from_label(region.label()), Some(region));
        }
        assert_eq!(Region::from_label("Antarctica"), None);
        assert_eq!(CampaignType::from_label("brand"), None, "labels are case-sensitive");
    }

    #[test]
    fn dates_render_as_iso_days() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date");
        assert_eq!(format_date(date), "2024-03-07");
    }
}
