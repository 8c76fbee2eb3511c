//! Per-category progress aggregation and study recommendations
//!
//! Everything here is pure: the functions are recomputed from the stored
//! decks on every dashboard render.

use serde::Serialize;

use super::models::{mastery_percent, Category, Deck};

/// Number of decks surfaced with a recommendation
pub const RECOMMENDED_DECK_LIMIT: usize = 2;

/// Number of decks shown in the "Recent Decks" section
pub const RECENT_DECK_LIMIT: usize = 4;

/// Card totals for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAggregate {
    pub category: Category,
    pub total_cards: u64,
    pub mastered_cards: u64,
    /// Member decks in input order
    pub decks: Vec<Deck>,
}

impl CategoryAggregate {
    fn new(category: Category) -> Self {
        Self {
            category,
            total_cards: 0,
            mastered_cards: 0,
            decks: Vec::new(),
        }
    }

    /// mastered / total, or `None` for a category with no cards
    pub fn ratio(&self) -> Option<f64> {
        if self.total_cards == 0 {
            None
        } else {
            Some(self.mastered_cards as f64 / self.total_cards as f64)
        }
    }

    pub fn percent(&self) -> u32 {
        mastery_percent(self.mastered_cards, self.total_cards)
    }
}

/// Category aggregates, iterated in first-encountered order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryAggregates {
    entries: Vec<CategoryAggregate>,
}

impl CategoryAggregates {
    pub fn get(&self, category: Category) -> Option<&CategoryAggregate> {
        self.entries.iter().find(|a| a.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryAggregate> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&mut self, category: Category) -> &mut CategoryAggregate {
        let pos = match self.entries.iter().position(|a| a.category == category) {
            Some(pos) => pos,
            None => {
                self.entries.push(CategoryAggregate::new(category));
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos]
    }
}

/// Reduce decks into per-category card totals
pub fn aggregate_by_category(decks: &[Deck]) -> CategoryAggregates {
    let mut aggregates = CategoryAggregates::default();
    for deck in decks {
        let entry = aggregates.entry(deck.category);
        entry.total_cards += deck.total_cards as u64;
        entry.mastered_cards += deck.mastered_cards as u64;
        entry.decks.push(deck.clone());
    }
    aggregates
}

/// The category the learner should focus on next
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: Category,
    pub ratio: f64,
    pub decks: Vec<Deck>,
}

impl Recommendation {
    pub fn percent(&self) -> f64 {
        self.ratio * 100.0
    }
}

/// Pick the category with the lowest mastery ratio.
///
/// Categories without any cards are skipped. Ties keep the category seen
/// first. Returns `None` when no category has cards.
pub fn weakest_category(aggregates: &CategoryAggregates) -> Option<Recommendation> {
    weakest_category_with_limit(aggregates, RECOMMENDED_DECK_LIMIT)
}

pub fn weakest_category_with_limit(
    aggregates: &CategoryAggregates,
    deck_limit: usize,
) -> Option<Recommendation> {
    let mut weakest: Option<(&CategoryAggregate, f64)> = None;

    for aggregate in aggregates.iter() {
        let Some(ratio) = aggregate.ratio() else {
            log::debug!("Skipping {} with no cards", aggregate.category);
            continue;
        };
        if weakest.map_or(true, |(_, best)| ratio < best) {
            weakest = Some((aggregate, ratio));
        }
    }

    weakest.map(|(aggregate, ratio)| Recommendation {
        category: aggregate.category,
        ratio,
        decks: aggregate.decks.iter().take(deck_limit).cloned().collect(),
    })
}

/// Most recently studied decks first
pub fn recent_decks(decks: &[Deck], limit: usize) -> Vec<Deck> {
    let mut sorted = decks.to_vec();
    sorted.sort_by(|a, b| b.last_studied.cmp(&a.last_studied));
    sorted.truncate(limit);
    sorted
}
