use super::Category;
use crate::shared::catalog::VoteCounts;
use std::fmt::Debug;
use std::hash::Hash;

/// A record of an interactive catalog
///
/// Every collection rendered as an interactive catalog (FAQ, destinations,
/// projects, vacancies) implements it so the filter, tracker and detail
/// controller can stay generic.
pub trait CatalogRecord {
    /// Stable identifier, unique within the collection
    type Id: Clone + Eq + Hash + Debug;

    // ============================================================================
    // Instance data
    // ============================================================================

    fn id(&self) -> Self::Id;

    /// Category key, one of `Self::categories()`
    fn category(&self) -> &str;

    /// Free-text fields used by the search (title, description, ...)
    fn search_fields(&self) -> Vec<&str>;

    /// Extra search keywords that are never displayed
    fn keywords(&self) -> &[String] {
        &[]
    }

    /// Cross-references to other records of the same collection
    fn related(&self) -> Vec<Self::Id> {
        Vec::new()
    }

    // ============================================================================
    // Collection metadata
    // ============================================================================

    /// Collection name for logs (e.g. "faq")
    fn collection_name() -> &'static str;

    /// Sentinel category that disables category filtering
    fn all_category() -> &'static str;

    /// Fixed category enumeration of the collection (without the sentinel)
    fn categories() -> &'static [Category];

    /// Display label for a category key, falls back to the key itself
    fn category_label(key: &str) -> &str {
        Self::categories()
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.label)
            .unwrap_or(key)
    }
}

/// Records that carry seed vote counters (FAQ helpfulness)
pub trait Votable: CatalogRecord {
    fn seed_votes(&self) -> VoteCounts;
}
