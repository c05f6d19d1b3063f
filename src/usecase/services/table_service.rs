use crate::domain::entities::campaign::CampaignRow;
use crate::domain::entities::view::{FilterCriteria, PageState, PageView, SortSpec};
use crate::usecase::table::filter::{filter_rows, DateRangeMode};
use crate::usecase::table::paginate::paginate;
use crate::usecase::table::sort::sort_rows;

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    /// Full filtered and sorted set; exports read this, not the page.
    pub rows: Vec<CampaignRow>,
    pub page: PageView,
}

/// Pure recompute over one snapshot. Safe to call as often as inputs change.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableViewService {
    date_range_mode: DateRangeMode,
}

impl TableViewService {
    pub fn new(date_range_mode: DateRangeMode) -> Self {
        Self { date_range_mode }
    }

    pub fn filtered_sorted(
        &self,
        snapshot: &[CampaignRow],
        criteria: &FilterCriteria,
        sort: SortSpec,
    ) -> Vec<CampaignRow> {
        let filtered = filter_rows(snapshot, criteria, self.date_range_mode);
        sort_rows(&filtered, sort)
    }

    pub fn recompute(
        &self,
        snapshot: &[CampaignRow],
        criteria: &FilterCriteria,
        sort: SortSpec,
        page: PageState,
    ) -> TableView {
        let rows = self.filtered_sorted(snapshot, criteria, sort);
        let page = paginate(&rows, page.current_page, page.page_size);
        tracing::debug!(
            source = snapshot.len(),
            visible = rows.len(),
            page_rows = page.page_rows.len(),
            "table view recomputed"
        );
        TableView { rows, page }
    }
}
