//! Selection state and the pure filter/sort step.
//!
//! The state is an explicit value: front-ends hold a [`Selection`], feed user
//! input through [`Selection::apply`], and call [`select`] with the result.
//! Nothing here renders or keeps hidden state, so the same selection over the
//! same records always yields the same sequence.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, Publication};

/// Category filter: everything, or one category tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parse a filter value as carried by a filter control.
    ///
    /// `"all"` (any case) and the empty string select everything. Any other
    /// value is taken as a category tag, even one that matches no record.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Category(s.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(tag) => tag,
        }
    }

    /// Display label: "All", the label of the first record carrying the tag,
    /// or the raw tag when no record does.
    pub fn label(&self, records: &[Publication]) -> String {
        match self {
            Self::All => "All".to_string(),
            Self::Category(tag) => records
                .iter()
                .find(|p| p.category == *tag)
                .map(|p| p.category_label.clone())
                .unwrap_or_else(|| tag.clone()),
        }
    }

    pub fn matches(&self, publication: &Publication) -> bool {
        match self {
            Self::All => true,
            Self::Category(tag) => publication.category == *tag,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Year ordering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Descending year.
    #[default]
    Newest,
    /// Ascending year.
    Oldest,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Newest, SortOrder::Oldest];

    pub fn toggle(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::Newest,
        }
    }

    /// Value carried by the sort control.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }

    /// Human-readable option text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest first",
            Self::Oldest => "Oldest first",
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            _ => Err(CoreError::UnknownSortOrder(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user interaction that changes the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    SetFilter(CategoryFilter),
    SetSort(SortOrder),
}

/// Current filter and sort order. Starts as (all, newest).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub filter: CategoryFilter,
    pub sort: SortOrder,
}

impl Selection {
    pub fn new(filter: CategoryFilter, sort: SortOrder) -> Self {
        Self { filter, sort }
    }

    /// Build a selection from raw control values. A missing value keeps the
    /// default for that half.
    pub fn from_params(filter: Option<&str>, sort: Option<&str>) -> Result<Self, CoreError> {
        Self::default().override_with(filter, sort)
    }

    /// Replace each half for which a raw value is given. A missing or blank
    /// sort keeps the current one; an unrecognized sort is an error.
    pub fn override_with(self, filter: Option<&str>, sort: Option<&str>) -> Result<Self, CoreError> {
        let filter = filter.map(CategoryFilter::parse).unwrap_or(self.filter);
        let sort = match sort {
            Some(s) if !s.trim().is_empty() => s.parse()?,
            _ => self.sort,
        };
        Ok(Self { filter, sort })
    }

    /// Return the selection that results from `event`.
    pub fn apply(self, event: SelectionEvent) -> Self {
        match event {
            SelectionEvent::SetFilter(filter) => Self { filter, ..self },
            SelectionEvent::SetSort(sort) => Self { sort, ..self },
        }
    }
}

/// Filter `records` by the selected category, then order by year.
///
/// The sort is stable, so records sharing a year keep their source order.
/// An unmatched category yields an empty vector.
pub fn select<'a>(records: &'a [Publication], selection: &Selection) -> Vec<&'a Publication> {
    let mut out: Vec<&Publication> = records
        .iter()
        .filter(|p| selection.filter.matches(p))
        .collect();

    match selection.sort {
        SortOrder::Newest => out.sort_by(|a, b| b.year.cmp(&a.year)),
        SortOrder::Oldest => out.sort_by_key(|p| p.year),
    }

    tracing::debug!(
        filter = %selection.filter,
        sort = %selection.sort,
        total = records.len(),
        selected = out.len(),
        "selection applied"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    fn ids(v: &[&Publication]) -> Vec<String> {
        v.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn default_selection_is_all_newest() {
        let s = Selection::default();
        assert_eq!(s.filter, CategoryFilter::All);
        assert_eq!(s.sort, SortOrder::Newest);
    }

    #[test]
    fn parse_filter_all_variants() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("  "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("nlp"),
            CategoryFilter::Category("nlp".into())
        );
    }

    #[test]
    fn parse_sort_order() {
        assert_eq!("newest".parse::<SortOrder>().unwrap(), SortOrder::Newest);
        assert_eq!("Oldest".parse::<SortOrder>().unwrap(), SortOrder::Oldest);
        let err = "sideways".parse::<SortOrder>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownSortOrder(ref s) if s == "sideways"));
    }

    #[test]
    fn from_params_defaults_missing_values() {
        let s = Selection::from_params(None, None).unwrap();
        assert_eq!(s, Selection::default());
        let s = Selection::from_params(Some("nlp"), Some("")).unwrap();
        assert_eq!(s.filter, CategoryFilter::Category("nlp".into()));
        assert_eq!(s.sort, SortOrder::Newest);
        assert!(Selection::from_params(None, Some("bogus")).is_err());
    }

    #[test]
    fn override_with_replaces_given_halves_only() {
        let base = Selection::new(CategoryFilter::parse("nlp"), SortOrder::Oldest);
        assert_eq!(base.clone().override_with(None, None).unwrap(), base);
        assert_eq!(base.clone().override_with(None, Some(" ")).unwrap(), base);

        let s = base.clone().override_with(Some("all"), None).unwrap();
        assert_eq!(s, Selection::new(CategoryFilter::All, SortOrder::Oldest));

        let s = base.clone().override_with(None, Some("newest")).unwrap();
        assert_eq!(s.filter, CategoryFilter::Category("nlp".into()));
        assert_eq!(s.sort, SortOrder::Newest);

        assert!(matches!(
            base.override_with(Some("all"), Some("sideways")),
            Err(CoreError::UnknownSortOrder(_))
        ));
    }

    #[test]
    fn apply_changes_only_one_half() {
        let s = Selection::default()
            .apply(SelectionEvent::SetFilter(CategoryFilter::parse("nlp")))
            .apply(SelectionEvent::SetSort(SortOrder::Oldest));
        assert_eq!(s.filter, CategoryFilter::Category("nlp".into()));
        assert_eq!(s.sort, SortOrder::Oldest);

        let s = s.apply(SelectionEvent::SetFilter(CategoryFilter::All));
        assert_eq!(s.sort, SortOrder::Oldest);
    }

    #[test]
    fn newest_puts_2025_first_and_keeps_source_order() {
        let catalog = Catalog::builtin();
        let out = select(&catalog.publications, &Selection::default());
        assert_eq!(
            ids(&out),
            vec![
                "pub3", "pub8", "pub9", "pub1", "pub2", "pub4", "pub5", "pub6", "pub7"
            ]
        );
    }

    #[test]
    fn oldest_puts_2024_first_and_keeps_source_order() {
        let catalog = Catalog::builtin();
        let sel = Selection::new(CategoryFilter::All, SortOrder::Oldest);
        let out = select(&catalog.publications, &sel);
        assert_eq!(
            ids(&out),
            vec![
                "pub1", "pub2", "pub4", "pub5", "pub6", "pub7", "pub3", "pub8", "pub9"
            ]
        );
    }

    #[test]
    fn single_category_has_one_item_for_both_orders() {
        let catalog = Catalog::builtin();
        for sort in SortOrder::ALL {
            let sel = Selection::new(CategoryFilter::parse("medical-ai"), sort);
            let out = select(&catalog.publications, &sel);
            assert_eq!(ids(&out), vec!["pub3"]);
        }
    }

    #[test]
    fn unknown_category_is_empty_not_error() {
        let catalog = Catalog::builtin();
        let sel = Selection::new(CategoryFilter::parse("nonexistent-category"), SortOrder::Newest);
        assert!(select(&catalog.publications, &sel).is_empty());
    }

    #[test]
    fn empty_record_list_is_empty() {
        assert!(select(&[], &Selection::default()).is_empty());
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(SortOrder::Newest.toggle(), SortOrder::Oldest);
        assert_eq!(SortOrder::Newest.toggle().toggle(), SortOrder::Newest);
    }
}
