//! Nova: IELTS flashcard study dashboard
//!
//! The library holds the records (decks, stats, targets), the key/value
//! store they persist to, and the pure view-models the dashboard renders.

pub mod config;
pub mod dashboard;
pub mod flashcards;
pub mod stats;
pub mod storage;
