//! Data models for IELTS decks

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// IELTS skill a deck trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Reading,
    Writing,
    Listening,
    Speaking,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Reading,
        Category::Writing,
        Category::Listening,
        Category::Speaking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Writing => "writing",
            Self::Listening => "listening",
            Self::Speaking => "speaking",
        }
    }

    /// Badge label shown on deck cards
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reading" => Ok(Self::Reading),
            "writing" => Ok(Self::Writing),
            "listening" => Ok(Self::Listening),
            "speaking" => Ok(Self::Speaking),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// A deck of flashcards with aggregate progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub total_cards: u32,
    pub mastered_cards: u32,
    /// Percentage of mastered cards
    #[serde(default)]
    pub progress: u32,
    #[serde(default = "default_thumbnail")]
    pub thumbnail: String,
    pub category: Category,
    pub last_studied: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

fn default_thumbnail() -> String {
    "/api/placeholder/400/200".to_string()
}

impl Deck {
    pub fn new(title: String, category: Category, total_cards: u32, now: DateTime<Utc>) -> Self {
        Self {
            id: format!("deck-{}", Uuid::new_v4()),
            title,
            description: String::new(),
            total_cards,
            mastered_cards: 0,
            progress: 0,
            thumbnail: default_thumbnail(),
            category,
            last_studied: now,
            created_at: now,
        }
    }

    /// Mastery percentage, rounded half away from zero
    pub fn mastery_percent(&self) -> u32 {
        mastery_percent(self.mastered_cards as u64, self.total_cards as u64)
    }

    /// Clamp mastered cards to the deck size and refresh `progress`
    pub fn recompute_progress(&mut self) {
        self.mastered_cards = self.mastered_cards.min(self.total_cards);
        self.progress = self.mastery_percent();
    }

    /// Whether the stored `progress` matches the card counts
    pub fn progress_is_consistent(&self) -> bool {
        self.mastered_cards <= self.total_cards && self.progress == self.mastery_percent()
    }
}

/// round(mastered / total * 100), zero when the deck is empty
pub fn mastery_percent(mastered: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    ((mastered as f64 / total as f64) * 100.0).round() as u32
}

/// Suggested review for the dashboard banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReview {
    pub id: String,
    pub title: String,
    pub word_count: u32,
    pub deck_id: String,
}
