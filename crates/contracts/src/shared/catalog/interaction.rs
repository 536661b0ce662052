use super::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoteDirection {
    Helpful,
    NotHelpful,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCounts {
    pub helpful: u32,
    pub not_helpful: u32,
}

impl VoteCounts {
    fn increment(&mut self, direction: VoteDirection) {
        match direction {
            VoteDirection::Helpful => self.helpful += 1,
            VoteDirection::NotHelpful => self.not_helpful += 1,
        }
    }
}

/// Ephemeral per-record state for one page view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub favorited: bool,
    pub vote: Option<VoteDirection>,
    /// Tracked counters, `None` until the first vote copies the seed
    pub counts: Option<VoteCounts>,
    pub thanks_visible: bool,
}

/// Side table of interaction state keyed by record id.
///
/// Entries are created lazily on first interaction. A vote moves
/// `None -> Some(direction)` exactly once per id; favorites toggle freely.
#[derive(Debug, Clone)]
pub struct InteractionTracker<Id> {
    states: HashMap<Id, InteractionState>,
}

impl<Id> Default for InteractionTracker<Id> {
    fn default() -> Self {
        Self {
            states: HashMap::new(),
        }
    }
}

impl<Id: Clone + Eq + Hash + Debug> InteractionTracker<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: &Id) -> Option<&InteractionState> {
        self.states.get(id)
    }

    /// Cast a vote for `id`; `seed` provides the counters shown before any vote.
    ///
    /// Returns the updated counters, or `AlreadyVoted` without touching them.
    pub fn vote(
        &mut self,
        id: Id,
        seed: VoteCounts,
        direction: VoteDirection,
    ) -> Result<VoteCounts, CatalogError> {
        let state = self.states.entry(id.clone()).or_default();
        if state.vote.is_some() {
            log::info!("vote for {:?} rejected: already voted", id);
            return Err(CatalogError::AlreadyVoted);
        }

        let mut counts = state.counts.unwrap_or(seed);
        counts.increment(direction);
        state.counts = Some(counts);
        state.vote = Some(direction);
        state.thanks_visible = true;
        log::debug!("vote {:?} recorded for {:?}: {:?}", direction, id, counts);
        Ok(counts)
    }

    /// Hide the "thanks" notice; called by the page timer after the delay
    pub fn clear_thanks(&mut self, id: &Id) {
        if let Some(state) = self.states.get_mut(id) {
            state.thanks_visible = false;
        }
    }

    pub fn thanks_visible(&self, id: &Id) -> bool {
        self.states.get(id).map(|s| s.thanks_visible).unwrap_or(false)
    }

    pub fn vote_of(&self, id: &Id) -> Option<VoteDirection> {
        self.states.get(id).and_then(|s| s.vote)
    }

    pub fn has_voted(&self, id: &Id) -> bool {
        self.vote_of(id).is_some()
    }

    /// Counters to display: tracked values after a vote, the seed otherwise
    pub fn counts(&self, id: &Id, seed: VoteCounts) -> VoteCounts {
        self.states
            .get(id)
            .and_then(|s| s.counts)
            .unwrap_or(seed)
    }

    /// Flip the favorite flag and return the new value
    pub fn favorite(&mut self, id: Id) -> bool {
        let state = self.states.entry(id.clone()).or_default();
        state.favorited = !state.favorited;
        log::debug!("favorite {:?} -> {}", id, state.favorited);
        state.favorited
    }

    pub fn is_favorite(&self, id: &Id) -> bool {
        self.states.get(id).map(|s| s.favorited).unwrap_or(false)
    }

    pub fn favorites_count(&self) -> usize {
        self.states.values().filter(|s| s.favorited).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: VoteCounts = VoteCounts {
        helpful: 156,
        not_helpful: 12,
    };

    #[test]
    fn test_vote_conflict() {
        let mut tracker = InteractionTracker::<u32>::new();

        let counts = tracker.vote(1, SEED, VoteDirection::Helpful).unwrap();
        assert_eq!(counts.helpful, 157);
        assert!(tracker.thanks_visible(&1));

        let second = tracker.vote(1, SEED, VoteDirection::NotHelpful);
        assert_eq!(second, Err(CatalogError::AlreadyVoted));
        assert_eq!(tracker.counts(&1, SEED).not_helpful, 12);
        assert_eq!(tracker.counts(&1, SEED).helpful, 157);
        assert_eq!(tracker.vote_of(&1), Some(VoteDirection::Helpful));
    }

    #[test]
    fn test_same_direction_twice_is_rejected() {
        let mut tracker = InteractionTracker::<u32>::new();
        tracker.vote(1, SEED, VoteDirection::NotHelpful).unwrap();
        assert_eq!(
            tracker.vote(1, SEED, VoteDirection::NotHelpful),
            Err(CatalogError::AlreadyVoted)
        );
        assert_eq!(tracker.counts(&1, SEED), VoteCounts { helpful: 156, not_helpful: 13 });
    }

    #[test]
    fn test_votes_are_independent_per_record() {
        let mut tracker = InteractionTracker::<u32>::new();
        tracker.vote(1, SEED, VoteDirection::Helpful).unwrap();
        assert!(tracker.vote(2, VoteCounts::default(), VoteDirection::NotHelpful).is_ok());
        assert_eq!(tracker.counts(&2, VoteCounts::default()).not_helpful, 1);
    }

    #[test]
    fn test_counts_default_to_seed() {
        let tracker = InteractionTracker::<u32>::new();
        assert_eq!(tracker.counts(&7, SEED), SEED);
        assert!(!tracker.has_voted(&7));
    }

    #[test]
    fn test_clear_thanks_keeps_vote() {
        let mut tracker = InteractionTracker::<u32>::new();
        tracker.vote(3, SEED, VoteDirection::Helpful).unwrap();
        tracker.clear_thanks(&3);
        assert!(!tracker.thanks_visible(&3));
        assert!(tracker.has_voted(&3));
        // still rejected after the notice is gone
        assert!(tracker.vote(3, SEED, VoteDirection::Helpful).is_err());
    }

    #[test]
    fn test_favorite_reversibility() {
        let mut tracker = InteractionTracker::<String>::new();
        tracker.favorite("a".to_string());
        let before = tracker.favorites_count();

        assert!(tracker.favorite("b".to_string()));
        assert_eq!(tracker.favorites_count(), before + 1);
        assert!(!tracker.favorite("b".to_string()));
        assert_eq!(tracker.favorites_count(), before);
        assert!(!tracker.is_favorite(&"b".to_string()));
        assert!(tracker.is_favorite(&"a".to_string()));
    }
}
