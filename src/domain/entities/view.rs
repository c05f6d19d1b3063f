use chrono::NaiveDate;

use crate::domain::entities::campaign::{CampaignRow, CampaignType, Region};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const ALL_OPTION_VALUE: &str = "all";

/// Either every value passes, or only one enum value does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: Copy + PartialEq> Selection<T> {
    pub fn accepts(&self, value: T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => *expected == value,
        }
    }
}

impl Selection<CampaignType> {
    pub fn from_option_value(value: &str) -> Self {
        CampaignType::from_label(value).map_or(Selection::All, Selection::Only)
    }

    pub fn option_value(&self) -> &'static str {
        match self {
            Selection::All => ALL_OPTION_VALUE,
            Selection::Only(kind) => kind.label(),
        }
    }
}

impl Selection<Region> {
    pub fn from_option_value(value: &str) -> Self {
        Region::from_label(value).map_or(Selection::All, Selection::Only)
    }

    pub fn option_value(&self) -> &'static str {
        match self {
            Selection::All => ALL_OPTION_VALUE,
            Selection::Only(region) => region.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// True when the row's run overlaps this range. Open bounds match
    /// everything on their side; reversed row dates are normalized first.
    pub fn overlaps(&self, row: &CampaignRow) -> bool {
        let (start, end) = if row.start_date <= row.end_date {
            (row.start_date, row.end_date)
        } else {
            (row.end_date, row.start_date)
        };
        let after_from = self.from.map_or(true, |from| end >= from);
        let before_to = self.to.map_or(true, |to| start <= to);
        after_from && before_to
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub campaign_type: Selection<CampaignType>,
    pub region: Selection<Region>,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    CampaignName,
    Impressions,
    Clicks,
    Cpc,
    ConversionRate,
    Status,
    CampaignType,
    Region,
    StartDate,
    EndDate,
}

impl SortField {
    /// Parses the camelCase row field names (`campaignName`, `startDate`, ...).
    pub fn from_key(key: &str) -> Option<Self> {
        let field = match key.trim() {
            "id" => SortField::Id,
            "campaignName" => SortField::CampaignName,
            "impressions" => SortField::Impressions,
            "clicks" => SortField::Clicks,
            "cpc" => SortField::Cpc,
            "conversionRate" => SortField::ConversionRate,
            "status" => SortField::Status,
            "type" => SortField::CampaignType,
            "region" => SortField::Region,
            "startDate" => SortField::StartDate,
            "endDate" => SortField::EndDate,
            _ => return None,
        };
        Some(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::CampaignName,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSpec {
    /// Header click: same field flips direction, another field starts ascending.
    pub fn toggled_by(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Asc,
            }
        }
    }
}

/// Caller-owned page position; the page size stays at
/// [`DEFAULT_PAGE_SIZE`]. Navigation clamps to `[1, total_pages]`;
/// the pagination stage itself never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageState {
    pub fn first(self) -> Self {
        Self {
            current_page: 1,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            current_page: self.current_page.saturating_sub(1).max(1),
            ..self
        }
    }

    pub fn next(self, total_pages: usize) -> Self {
        Self {
            current_page: (self.current_page + 1).min(total_pages.max(1)),
            ..self
        }
    }

    pub fn clamped(self, total_pages: usize) -> Self {
        Self {
            current_page: self.current_page.clamp(1, total_pages.max(1)),
            ..self
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, total_pages: usize) -> bool {
        self.current_page < total_pages
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub page_rows: Vec<CampaignRow>,
    pub total_pages: usize,
    pub start_index: usize,
    /// Exclusive, clipped to the row count.
    pub end_index: usize,
    pub total_rows: usize,
}

impl PageView {
    /// An empty or out-of-range page reads "Showing 0 to 0".
    pub fn summary(&self) -> String {
        if self.start_index >= self.end_index {
            return format!("Showing 0 to 0 of {} results", self.total_rows);
        }
        format!(
            "Showing {} to {} of {} results",
            self.start_index + 1,
            self.end_index,
            self.total_rows
        )
    }
}
