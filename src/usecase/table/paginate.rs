use crate::domain::entities::campaign::CampaignRow;
use crate::domain::entities::view::PageView;

pub fn total_pages(total_rows: usize, page_size: usize) -> usize {
    total_rows.div_ceil(page_size.max(1)).max(1)
}

/// Slices one page out of `rows`. `page` is 1-based and expected to be
/// clamped by the caller; a page past the end yields an empty slice.
pub fn paginate(rows: &[CampaignRow], page: usize, page_size: usize) -> PageView {
    let page_size = page_size.max(1);
    let start_index = page.saturating_sub(1).saturating_mul(page_size);
    let begin = start_index.min(rows.len());
    let end_index = start_index.saturating_add(page_size).min(rows.len());
    let end_index = end_index.max(begin);

    PageView {
        page_rows: rows[begin..end_index].to_vec(),
        total_pages: total_pages(rows.len(), page_size),
        start_index,
        end_index,
        total_rows: rows.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures::numbered_rows;

    #[test]
    fn empty_set_has_one_empty_page() {
        let view = paginate(&[], 1, 10);
        assert!(view.page_rows.is_empty());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.summary(), "Showing 0 to 0 of 0 results");
    }

    #[test]
    fn pages_cover_every_row_exactly_once() {
        for len in [1_usize, 9, 10, 11, 20, 37] {
            let rows = numbered_rows(len);
            let pages = total_pages(len, 10);
            assert_eq!(pages, len.div_ceil(10).max(1));
            let seen: usize = (1..=pages)
                .map(|page| paginate(&rows, page, 10).page_rows.len())
                .sum();
            assert_eq!(seen, len, "rows across pages for len {len}");
        }
    }

    #[test]
    fn last_page_is_clipped() {
        let rows = numbered_rows(16);
        let view = paginate(&rows, 2, 10);
        assert_eq!(view.page_rows.len(), 6);
        assert_eq!(view.start_index, 10);
        assert_eq!(view.end_index, 16);
        assert_eq!(view.summary(), "Showing 11 to 16 of 16 results");
        assert_eq!(view.page_rows[0].id.0, "campaign-11");
    }

    #[test]
    fn out_of_range_page_is_not_clamped_here() {
        let rows = numbered_rows(16);
        let view = paginate(&rows, 7, 10);
        assert!(view.page_rows.is_empty());
        assert_eq!(view.start_index, 60);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.summary(), "Showing 0 to 0 of 16 results");
    }
}
