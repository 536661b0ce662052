use super::filter::{self, CatalogFilter};
use super::interaction::{InteractionTracker, VoteCounts, VoteDirection};
use super::CatalogError;
use crate::domain::common::{CatalogRecord, Votable};

/// Record store, current selection and interaction side table of one page.
///
/// Records are fixed at construction; everything mutable is keyed by id.
#[derive(Debug, Clone)]
pub struct Catalog<R: CatalogRecord> {
    records: Vec<R>,
    filter: CatalogFilter,
    tracker: InteractionTracker<R::Id>,
}

impl<R: CatalogRecord> Catalog<R> {
    pub fn new(records: Vec<R>) -> Self {
        log::debug!("{} catalog with {} records", R::collection_name(), records.len());
        Self {
            records,
            filter: CatalogFilter::for_collection::<R>(),
            tracker: InteractionTracker::new(),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.records.iter().find(|r| &r.id() == id)
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn tracker(&self) -> &InteractionTracker<R::Id> {
        &self.tracker
    }

    // ============================================================================
    // Selection
    // ============================================================================

    /// Change the category; the search term is kept
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.active_category = category.into();
    }

    /// Change the search term; the category is kept
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn reset_filter(&mut self) {
        self.filter = CatalogFilter::for_collection::<R>();
    }

    pub fn visible(&self) -> Vec<&R> {
        filter::visible(&self.records, &self.filter)
    }

    pub fn category_counts(&self) -> Vec<(&'static str, usize)> {
        filter::category_counts(&self.records, &self.filter)
    }

    // ============================================================================
    // Favorites
    // ============================================================================

    pub fn favorite(&mut self, id: &R::Id) -> Result<bool, CatalogError> {
        self.ensure_known(id)?;
        Ok(self.tracker.favorite(id.clone()))
    }

    pub fn is_favorite(&self, id: &R::Id) -> bool {
        self.tracker.is_favorite(id)
    }

    pub fn favorites_count(&self) -> usize {
        self.tracker.favorites_count()
    }

    fn ensure_known(&self, id: &R::Id) -> Result<(), CatalogError> {
        if self.get(id).is_some() {
            Ok(())
        } else {
            log::warn!("{}: unknown record {:?}", R::collection_name(), id);
            Err(CatalogError::UnknownRecord(format!("{:?}", id)))
        }
    }
}

impl<R: Votable> Catalog<R> {
    pub fn vote(&mut self, id: &R::Id, direction: VoteDirection) -> Result<VoteCounts, CatalogError> {
        let seed = self
            .get(id)
            .map(|r| r.seed_votes())
            .ok_or_else(|| CatalogError::UnknownRecord(format!("{:?}", id)))?;
        self.tracker.vote(id.clone(), seed, direction)
    }

    /// Counters to display for `id`, `None` for unknown records
    pub fn counts(&self, id: &R::Id) -> Option<VoteCounts> {
        self.get(id).map(|r| self.tracker.counts(id, r.seed_votes()))
    }

    pub fn clear_thanks(&mut self, id: &R::Id) {
        self.tracker.clear_thanks(id);
    }

    pub fn thanks_visible(&self, id: &R::Id) -> bool {
        self.tracker.thanks_visible(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_faq::{self, Faq};
    use crate::domain::a003_project::{self, Project};

    #[test]
    fn test_vote_scenario_on_seed() {
        let mut catalog = Catalog::<Faq>::new(a001_faq::seed());

        let counts = catalog.vote(&1, VoteDirection::Helpful).unwrap();
        assert_eq!(counts.helpful, 157);
        assert!(catalog.thanks_visible(&1));

        assert_eq!(
            catalog.vote(&1, VoteDirection::NotHelpful),
            Err(CatalogError::AlreadyVoted)
        );
        assert_eq!(catalog.counts(&1).unwrap().not_helpful, 12);
        assert_eq!(catalog.counts(&1).unwrap().helpful, 157);

        catalog.clear_thanks(&1);
        assert!(!catalog.thanks_visible(&1));
    }

    #[test]
    fn test_vote_counts_reach_visible_list() {
        let mut catalog = Catalog::<Faq>::new(a001_faq::seed());
        catalog.set_search("cuesta");
        catalog.vote(&1, VoteDirection::NotHelpful).unwrap();

        let shown: Vec<_> = catalog
            .visible()
            .into_iter()
            .map(|f| catalog.counts(&f.id).unwrap())
            .collect();
        assert_eq!(shown, vec![VoteCounts { helpful: 156, not_helpful: 13 }]);
    }

    #[test]
    fn test_unknown_record_is_rejected() {
        let mut catalog = Catalog::<Faq>::new(a001_faq::seed());
        assert!(matches!(
            catalog.vote(&404, VoteDirection::Helpful),
            Err(CatalogError::UnknownRecord(_))
        ));
        assert!(catalog.counts(&404).is_none());
        assert!(catalog.favorite(&404).is_err());
    }

    #[test]
    fn test_category_change_keeps_search() {
        let mut catalog = Catalog::<Project>::new(a003_project::seed());
        catalog.set_search("rust");
        catalog.set_category("web");
        assert_eq!(catalog.filter().search_term, "rust");
        assert_eq!(catalog.visible().len(), 1);

        catalog.reset_filter();
        assert_eq!(catalog.filter().active_category, "all");
        assert_eq!(catalog.visible().len(), catalog.records().len());
    }

    #[test]
    fn test_favorites_on_projects() {
        let mut catalog = Catalog::<Project>::new(a003_project::seed());
        let id = "rutamov".to_string();
        assert_eq!(catalog.favorite(&id), Ok(true));
        assert_eq!(catalog.favorites_count(), 1);
        assert_eq!(catalog.favorite(&id), Ok(false));
        assert_eq!(catalog.favorites_count(), 0);
    }
}
