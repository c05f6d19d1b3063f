use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::dashboard::DashboardSnapshot;
use crate::domain::entities::view::{FilterCriteria, PageState, SortSpec};

/// View state owned by the dashboard. Engine calls receive copies of these
/// values; nothing here is shared outside the component tree.
#[derive(Clone, Copy)]
pub struct AppState {
    pub snapshot: Signal<DashboardSnapshot>,
    pub loading: Signal<bool>,
    pub criteria: Signal<FilterCriteria>,
    pub sort: Signal<SortSpec>,
    pub page: Signal<PageState>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(initial_sort: SortSpec) -> Self {
        Self {
            snapshot: use_signal(DashboardSnapshot::default),
            loading: use_signal(|| true),
            criteria: use_signal(FilterCriteria::default),
            sort: use_signal(move || initial_sort),
            page: use_signal(PageState::default),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
