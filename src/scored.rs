use std::cmp::Ordering;

use crate::{
    base::{ItemId, Score},
    error::Result,
    order::Order,
    select::BoundedSelector,
};

#[derive(Clone, Copy, Debug)]
pub struct ScoredItem {
    pub id: ItemId,
    pub score: Score,
}

impl std::fmt::Display for ScoredItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.id, self.score)
    }
}

impl PartialEq for ScoredItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredItem {}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Total order on scores, then on IDs
impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Keeps the top-k scored items
pub struct TopScored {
    selector: BoundedSelector<ScoredItem, Order>,
}

impl TopScored {
    pub fn new(top_k: usize) -> Result<Self> {
        Ok(Self {
            selector: BoundedSelector::largest(top_k)?,
        })
    }

    /// Add a new candidate, and returns the new lower bound on scores
    ///
    /// NaN scores are ignored: `total_cmp` would rank them above any score.
    pub fn add(&mut self, candidate: ItemId, score: Score) -> Score {
        if !score.is_nan() {
            self.selector.offer(ScoredItem {
                id: candidate,
                score,
            });
        }

        // If the selector is not full, returns -infinity
        self.selector
            .threshold()
            .map_or(Score::NEG_INFINITY, |item| item.score)
    }

    pub fn len(&self) -> usize {
        self.selector.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selector.is_empty()
    }

    pub fn into_sorted_vec(self) -> Vec<ScoredItem> {
        self.selector.into_sorted_vec()
    }
}
