use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::entities::campaign::{format_date, CampaignRow};
use crate::domain::entities::view::{SortDirection, SortField, SortSpec};

#[derive(Debug, Clone, PartialEq)]
pub enum SortKey<'a> {
    Text(std::borrow::Cow<'a, str>),
    Number(f64),
}

pub fn sort_key(row: &CampaignRow, field: SortField) -> SortKey<'_> {
    use std::borrow::Cow;
    match field {
        SortField::Id => SortKey::Text(Cow::Borrowed(&row.id.0)),
        SortField::CampaignName => SortKey::Text(Cow::Borrowed(&row.campaign_name)),
        SortField::Impressions => SortKey::Number(row.impressions as f64),
        SortField::Clicks => SortKey::Number(row.clicks as f64),
        SortField::Cpc => SortKey::Number(row.cpc),
        SortField::ConversionRate => SortKey::Number(row.conversion_rate),
        SortField::Status => SortKey::Text(Cow::Borrowed(row.status.label())),
        SortField::CampaignType => SortKey::Text(Cow::Borrowed(row.campaign_type.label())),
        SortField::Region => SortKey::Text(Cow::Borrowed(row.region.label())),
        SortField::StartDate => SortKey::Text(Cow::Owned(format_date(row.start_date))),
        SortField::EndDate => SortKey::Text(Cow::Owned(format_date(row.end_date))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Space,
    Punctuation,
    Digit,
    Letter,
}

fn char_class(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Space
    } else if ch.is_numeric() {
        CharClass::Digit
    } else if ch.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Punctuation
    }
}

/// Base letters without accents or case, ranked space < punctuation <
/// digit < letter.
fn primary_key(text: &str) -> Vec<(CharClass, char)> {
    text.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .map(|ch| (char_class(ch), ch))
        .collect()
}

fn accent_key(text: &str) -> Vec<char> {
    text.nfd().flat_map(char::to_lowercase).collect()
}

fn case_key(text: &str) -> Vec<bool> {
    text.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .map(char::is_uppercase)
        .collect()
}

/// Collation in levels: base letters, then accents (unaccented first), then
/// case (lowercase first), then code points.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

/// Mismatched or unordered keys (NaN) compare equal.
pub fn compare_keys(a: &SortKey<'_>, b: &SortKey<'_>) -> Ordering {
    match (a, b) {
        (SortKey::Text(a), SortKey::Text(b)) => locale_cmp(a, b),
        (SortKey::Number(a), SortKey::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

pub fn compare_rows(a: &CampaignRow, b: &CampaignRow, spec: SortSpec) -> Ordering {
    let ordering = compare_keys(&sort_key(a, spec.field), &sort_key(b, spec.field));
    match spec.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Stable: rows with equal keys keep their incoming order in both directions.
pub fn sort_rows(rows: &[CampaignRow], spec: SortSpec) -> Vec<CampaignRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| compare_rows(a, b, spec));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::campaign::CampaignStatus;
    use crate::tests::fixtures::{date, row};

    fn ids(rows: &[CampaignRow]) -> Vec<&str> {
        rows.iter().map(|row| row.id.0.as_str()).collect()
    }

    #[test]
    fn names_sort_case_insensitively() {
        let rows = vec![
            row("1", "banana", 1),
            row("2", "Apple", 1),
            row("3", "cherry", 1),
            row("4", "apple", 1),
        ];
        let sorted = sort_rows(&rows, SortSpec::default());
        assert_eq!(ids(&sorted), vec!["4", "2", "1", "3"]);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let rows = vec![
            row("1", "Fiesta", 1),
            row("2", "Éclair", 1),
            row("3", "Zebra", 1),
            row("4", "A:1", 1),
            row("5", "A1", 1),
            row("6", "eclair", 1),
        ];
        let sorted = sort_rows(&rows, SortSpec::default());
        assert_eq!(ids(&sorted), vec!["4", "5", "6", "2", "1", "3"]);
    }

    #[test]
    fn punctuation_sorts_before_digits_and_letters() {
        assert_eq!(locale_cmp("A:1", "A1"), Ordering::Less);
        assert_eq!(locale_cmp("A 1", "A:1"), Ordering::Less);
        assert_eq!(locale_cmp("A9", "AB"), Ordering::Less);
        assert_eq!(locale_cmp("Ångström", "Angstrom"), Ordering::Greater);
        assert_eq!(locale_cmp("Ångström", "Angstroms"), Ordering::Less);
    }

    #[test]
    fn numbers_sort_by_value_not_text() {
        let rows = vec![row("a", "A", 900), row("b", "B", 10_000), row("c", "C", 80)];
        let spec = SortSpec {
            field: SortField::Impressions,
            direction: SortDirection::Asc,
        };
        assert_eq!(ids(&sort_rows(&rows, spec)), vec!["c", "a", "b"]);
    }

    #[test]
    fn descending_keeps_ties_in_prior_order() {
        let rows = vec![
            row("a", "A", 500),
            row("b", "B", 900),
            row("c", "C", 500),
            row("d", "D", 900),
            row("e", "E", 100),
        ];
        let spec = SortSpec {
            field: SortField::Impressions,
            direction: SortDirection::Desc,
        };
        let sorted = sort_rows(&rows, spec);
        assert_eq!(ids(&sorted), vec!["b", "d", "a", "c", "e"]);

        let ascending = sort_rows(
            &sorted,
            SortSpec {
                direction: SortDirection::Asc,
                ..spec
            },
        );
        assert_eq!(ids(&ascending), vec!["e", "a", "c", "b", "d"]);
    }

    #[test]
    fn sorting_twice_is_idempotent_and_a_permutation() {
        let mut rows = vec![
            row("a", "Year End Sale", 5),
            row("b", "Back to School", 3),
            row("c", "Product Launch", 5),
        ];
        rows[1].status = CampaignStatus::Paused;
        let spec = SortSpec {
            field: SortField::Status,
            direction: SortDirection::Desc,
        };
        let once = sort_rows(&rows, spec);
        let twice = sort_rows(&once, spec);
        assert_eq!(once, twice);

        let mut before = ids(&rows);
        let mut after = ids(&once);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn dates_sort_chronologically() {
        let mut rows = vec![row("a", "A", 1), row("b", "B", 1)];
        rows[0].start_date = date(2024, 11, 2);
        rows[1].start_date = date(2024, 2, 11);
        let spec = SortSpec {
            field: SortField::StartDate,
            direction: SortDirection::Asc,
        };
        assert_eq!(ids(&sort_rows(&rows, spec)), vec!["b", "a"]);
    }

    #[test]
    fn mismatched_or_nan_keys_compare_equal() {
        assert_eq!(
            compare_keys(&SortKey::Number(1.0), &SortKey::Text("1".into())),
            Ordering::Equal
        );
        assert_eq!(
            compare_keys(&SortKey::Number(f64::NAN), &SortKey::Number(2.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn source_rows_are_left_untouched() {
        let rows = vec![row("b", "B", 2), row("a", "A", 1)];
        let snapshot = rows.clone();
        let _ = sort_rows(&rows, SortSpec::default());
        assert_eq!(rows, snapshot);
    }
}
