use crate::domain::common::CatalogRecord;
use serde::{Deserialize, Serialize};

/// Current category + search selection of a catalog page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub active_category: String,
    pub search_term: String,
}

impl CatalogFilter {
    /// Default selection: the collection's "all" sentinel and no search
    pub fn for_collection<R: CatalogRecord>() -> Self {
        Self {
            active_category: R::all_category().to_string(),
            search_term: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.active_category = category.into();
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn is_all<R: CatalogRecord>(&self) -> bool {
        self.active_category == R::all_category()
    }

    /// Lower-cased search term, `None` when blank
    pub fn normalized_term(&self) -> Option<String> {
        let term = self.search_term.trim();
        if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        }
    }

    /// True when neither a category nor a search term narrows the list
    pub fn is_default<R: CatalogRecord>(&self) -> bool {
        self.is_all::<R>() && self.normalized_term().is_none()
    }

    pub fn matches<R: CatalogRecord>(&self, record: &R) -> bool {
        self.matches_category(record) && matches_term(record, self.normalized_term().as_deref())
    }

    fn matches_category<R: CatalogRecord>(&self, record: &R) -> bool {
        self.is_all::<R>() || record.category() == self.active_category
    }
}

/// OR across the search fields and keywords; `term` must already be lower-cased
fn matches_term<R: CatalogRecord>(record: &R, term: Option<&str>) -> bool {
    let Some(term) = term else {
        return true;
    };

    record
        .search_fields()
        .into_iter()
        .chain(record.keywords().iter().map(String::as_str))
        .any(|field| field.to_lowercase().contains(term))
}

/// Visible subset of `records` for the given selection, in source order
pub fn visible<'a, R: CatalogRecord>(records: &'a [R], filter: &CatalogFilter) -> Vec<&'a R> {
    let term = filter.normalized_term();
    records
        .iter()
        .filter(|r| filter.matches_category(*r) && matches_term(*r, term.as_deref()))
        .collect()
}

/// Per-category counts of records matching the current search term.
///
/// The first entry is the "all" sentinel; categories follow in their
/// declared order, including those with zero matches.
pub fn category_counts<R: CatalogRecord>(
    records: &[R],
    filter: &CatalogFilter,
) -> Vec<(&'static str, usize)> {
    let term = filter.normalized_term();
    let matching: Vec<&R> = records
        .iter()
        .filter(|r| matches_term(*r, term.as_deref()))
        .collect();

    let mut counts = vec![(R::all_category(), matching.len())];
    counts.extend(R::categories().iter().map(|c| {
        let n = matching.iter().filter(|r| r.category() == c.key).count();
        (c.key, n)
    }));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_faq::{self, Faq};
    use crate::domain::a002_destination::{self, Destination};
    use crate::domain::a003_project::{self, Project};

    fn ids<R: CatalogRecord>(items: &[&R]) -> Vec<R::Id> {
        items.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_all_category_returns_full_collection_in_order() {
        let faqs = a001_faq::seed();
        let filter = CatalogFilter::for_collection::<Faq>();
        let result = visible(&faqs, &filter);
        assert_eq!(ids(&result), faqs.iter().map(|f| f.id).collect::<Vec<_>>());
    }

    #[test]
    fn test_faq_search_cuesta() {
        let faqs = a001_faq::seed();
        let filter = CatalogFilter::for_collection::<Faq>().with_search("cuesta");
        assert_eq!(filter.active_category, "todas");

        let result = visible(&faqs, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
        assert_eq!(result[0].category, "precios");
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let faqs = a001_faq::seed();
        let upper = CatalogFilter::for_collection::<Faq>().with_search("  CUESTA ");
        let lower = CatalogFilter::for_collection::<Faq>().with_search("cuesta");
        assert_eq!(ids(&visible(&faqs, &upper)), ids(&visible(&faqs, &lower)));
    }

    #[test]
    fn test_search_matches_keywords() {
        let faqs = a001_faq::seed();
        let filter = CatalogFilter::for_collection::<Faq>().with_search("presupuesto");
        let result = visible(&faqs, &filter);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_blank_search_does_not_filter() {
        let faqs = a001_faq::seed();
        let filter = CatalogFilter::for_collection::<Faq>().with_search("   ");
        assert_eq!(visible(&faqs, &filter).len(), faqs.len());
    }

    #[test]
    fn test_category_totality() {
        let destinations = a002_destination::seed();
        for d in &destinations {
            let filter = CatalogFilter::for_collection::<Destination>().with_category(&d.category);
            let result = visible(&destinations, &filter);
            assert!(result.iter().any(|r| r.id == d.id));
            assert!(result.iter().all(|r| r.category == d.category));
        }
    }

    #[test]
    fn test_category_and_search_compose() {
        let faqs = a001_faq::seed();
        // "semanas" appears only in a "proceso" answer
        let in_category = CatalogFilter::for_collection::<Faq>()
            .with_category("proceso")
            .with_search("semanas");
        assert_eq!(ids(&visible(&faqs, &in_category)), vec![4]);

        let other_category = in_category.clone().with_category("precios");
        assert!(visible(&faqs, &other_category).is_empty());
        // switching category keeps the term
        assert_eq!(other_category.search_term, "semanas");
    }

    #[test]
    fn test_empty_result_for_destinations() {
        let destinations = a002_destination::seed();
        let filter = CatalogFilter::for_collection::<Destination>()
            .with_category("europa")
            .with_search("xyznotfound");
        let result = visible(&destinations, &filter);
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_idempotence() {
        let projects = a003_project::seed();
        let filter = CatalogFilter::for_collection::<Project>()
            .with_category("ecommerce")
            .with_search("stripe");
        let first = ids(&visible(&projects, &filter));
        let second = ids(&visible(&projects, &filter));
        assert_eq!(first, second);
        assert_eq!(first, vec!["bodega-alta".to_string(), "moda-lumen".to_string()]);
    }

    #[test]
    fn test_category_counts_follow_search() {
        let projects = a003_project::seed();
        let filter = CatalogFilter::for_collection::<Project>().with_search("rust");
        let counts = category_counts(&projects, &filter);
        assert_eq!(counts[0], ("all", 3));
        assert!(counts.contains(&("web", 1)));
        assert!(counts.contains(&("app", 1)));
        assert!(counts.contains(&("ecommerce", 1)));
        assert!(counts.contains(&("branding", 0)));
    }
}
