//! Generic sort/filter machinery.
//!
//! Entities opt in by implementing [`Listable`]: a field enum, a static
//! registry of named sort strategies, a typed accessor per sortable field,
//! and the set of searchable text fields. Field access stays statically
//! typed; there is no reflection over record shape.

use core::cmp::Ordering;

use chrono::{DateTime, Utc};

/// Sort direction of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A sortable value extracted from a record field.
///
/// Dates compare by instant, numbers by `total_cmp`, text case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(f64),
    Instant(DateTime<Utc>),
}

/// A named sort strategy: registry key, dropdown caption, field, direction.
///
/// `field == None` marks a strategy that intentionally leaves the input
/// order alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortSpec<F: 'static> {
    pub key: &'static str,
    pub label: &'static str,
    pub field: Option<F>,
    pub direction: SortDirection,
}

/// A record type that list views can order and search.
pub trait Listable: Clone {
    /// Sortable fields of this entity.
    type Field: Copy + core::fmt::Debug;

    /// Named sort strategies for this entity.
    fn sort_specs() -> &'static [SortSpec<Self::Field>];

    /// Extract the sort value for a field; `None` when the record is missing
    /// the field (compares as equal, preserving input order for that pair).
    fn sort_value(&self, field: Self::Field) -> Option<SortValue<'_>>;

    /// Text fields searched by substring match.
    fn search_haystacks(&self) -> Vec<&str>;
}

fn compare_values(a: Option<SortValue<'_>>, b: Option<SortValue<'_>>) -> Ordering {
    match (a, b) {
        (Some(SortValue::Text(a)), Some(SortValue::Text(b))) => {
            a.to_lowercase().cmp(&b.to_lowercase())
        }
        (Some(SortValue::Number(a)), Some(SortValue::Number(b))) => a.total_cmp(&b),
        (Some(SortValue::Instant(a)), Some(SortValue::Instant(b))) => a.cmp(&b),
        // Missing on either side: keep the pair in input order.
        _ => Ordering::Equal,
    }
}

/// Order `records` by the named strategy.
///
/// An unknown key, or a strategy with no field, returns the input order
/// unchanged. The sort is stable, so records comparing equal keep their
/// relative input order.
pub fn sort<R: Listable>(records: &[R], spec_key: &str) -> Vec<R>
where
    R::Field: 'static,
{
    let spec = R::sort_specs().iter().find(|spec| spec.key == spec_key);
    let Some(spec) = spec else {
        tracing::debug!(spec_key, "unknown sort key, keeping input order");
        return records.to_vec();
    };
    let Some(field) = spec.field else {
        return records.to_vec();
    };

    let mut out = records.to_vec();
    out.sort_by(|a, b| {
        let ordering = compare_values(a.sort_value(field), b.sort_value(field));
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    out
}

/// Keep records where any searchable field contains `term` (case-insensitive).
///
/// An empty term keeps everything.
pub fn filter<R: Listable>(records: &[R], term: &str) -> Vec<R> {
    if term.is_empty() {
        return records.to_vec();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record
                .search_haystacks()
                .iter()
                .any(|haystack| haystack.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Sort, then filter. Filtering after sorting preserves the chosen order
/// among surviving records.
pub fn sort_and_filter<R: Listable>(records: &[R], spec_key: &str, term: &str) -> Vec<R>
where
    R::Field: 'static,
{
    let sorted = sort(records, spec_key);
    filter(&sorted, term)
}
