use crate::domain::entities::campaign::CampaignRow;
use crate::domain::entities::view::FilterCriteria;

/// Whether the date range predicate takes part in filtering. The range is
/// carried in the criteria either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRangeMode {
    #[default]
    Ignore,
    Overlap,
}

fn matches_lowered(
    row: &CampaignRow,
    criteria: &FilterCriteria,
    needle: &str,
    mode: DateRangeMode,
) -> bool {
    if !needle.is_empty() && !row.campaign_name.to_lowercase().contains(needle) {
        return false;
    }
    if !criteria.campaign_type.accepts(row.campaign_type) {
        return false;
    }
    if !criteria.region.accepts(row.region) {
        return false;
    }
    match mode {
        DateRangeMode::Ignore => true,
        DateRangeMode::Overlap => criteria.date_range.is_open() || criteria.date_range.overlaps(row),
    }
}

/// Keeps rows passing every active predicate, in their original order.
pub fn filter_rows(
    rows: &[CampaignRow],
    criteria: &FilterCriteria,
    mode: DateRangeMode,
) -> Vec<CampaignRow> {
    let needle = criteria.search_term.to_lowercase();
    rows.iter()
        .filter(|row| matches_lowered(row, criteria, &needle, mode))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::campaign::{CampaignType, Region};
    use crate::domain::entities::view::{DateRange, Selection};
    use crate::tests::fixtures::{date, row};

    fn sample() -> Vec<CampaignRow> {
        let mut first = row("a", "Summer Sale 2024", 100);
        first.campaign_type = CampaignType::Brand;
        first.region = Region::India;
        let mut second = row("b", "Holiday Special", 200);
        second.campaign_type = CampaignType::Performance;
        second.region = Region::Us;
        let mut third = row("c", "Christmas Special", 300);
        third.campaign_type = CampaignType::Brand;
        third.region = Region::Us;
        vec![first, second, third]
    }

    #[test]
    fn default_criteria_keep_every_row() {
        let rows = sample();
        let filtered = filter_rows(&rows, &FilterCriteria::default(), DateRangeMode::Ignore);
        assert_eq!(filtered, rows);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rows = sample();
        let criteria = FilterCriteria {
            search_term: "SPECIAL".to_string(),
            ..FilterCriteria::default()
        };
        let names: Vec<_> = filter_rows(&rows, &criteria, DateRangeMode::Ignore)
            .into_iter()
            .map(|row| row.campaign_name)
            .collect();
        assert_eq!(names, vec!["Holiday Special", "Christmas Special"]);
    }

    #[test]
    fn predicates_are_anded() {
        let rows = sample();
        let criteria = FilterCriteria {
            search_term: "special".to_string(),
            campaign_type: Selection::Only(CampaignType::Brand),
            region: Selection::Only(Region::Us),
            ..FilterCriteria::default()
        };
        let filtered = filter_rows(&rows, &criteria, DateRangeMode::Ignore);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].campaign_name, "Christmas Special");

        let none = FilterCriteria {
            region: Selection::Only(Region::Europe),
            ..criteria
        };
        assert!(filter_rows(&rows, &none, DateRangeMode::Ignore).is_empty());
    }

    #[test]
    fn date_range_is_ignored_unless_enabled() {
        let mut rows = sample();
        rows[0].start_date = date(2024, 1, 1);
        rows[0].end_date = date(2024, 1, 31);
        rows[1].start_date = date(2024, 6, 1);
        rows[1].end_date = date(2024, 6, 30);
        // reversed dates still count as a run
        rows[2].start_date = date(2024, 12, 20);
        rows[2].end_date = date(2024, 12, 1);

        let criteria = FilterCriteria {
            date_range: DateRange {
                from: Some(date(2024, 6, 15)),
                to: Some(date(2024, 12, 5)),
            },
            ..FilterCriteria::default()
        };

        assert_eq!(filter_rows(&rows, &criteria, DateRangeMode::Ignore).len(), 3);

        let ids: Vec<_> = filter_rows(&rows, &criteria, DateRangeMode::Overlap)
            .into_iter()
            .map(|row| row.id.0)
            .collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn open_date_range_matches_everything_when_enabled() {
        let rows = sample();
        assert_eq!(
            filter_rows(&rows, &FilterCriteria::default(), DateRangeMode::Overlap).len(),
            rows.len()
        );
        let only_from = FilterCriteria {
            date_range: DateRange {
                from: Some(date(2030, 1, 1)),
                to: None,
            },
            ..FilterCriteria::default()
        };
        assert!(filter_rows(&rows, &only_from, DateRangeMode::Overlap).is_empty());
        assert_eq!(filter_rows(&rows, &only_from, DateRangeMode::Ignore).len(), 3);
    }
}
