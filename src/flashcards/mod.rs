//! IELTS deck model and progress logic
//!
//! This module provides:
//! - Deck and category models (the `ielts_decks` record format)
//! - Per-category aggregation and the weakest-category recommendation
//! - Relative "time ago" labels
//! - Built-in sample decks

pub mod models;
pub mod progress;
pub mod seed;
pub mod time_ago;

pub use models::*;
pub use progress::{
    aggregate_by_category, recent_decks, weakest_category, weakest_category_with_limit,
    CategoryAggregate, CategoryAggregates, Recommendation, RECENT_DECK_LIMIT,
    RECOMMENDED_DECK_LIMIT,
};
pub use time_ago::{time_ago, RelativeTime, DEFAULT_DATE_FORMAT};
