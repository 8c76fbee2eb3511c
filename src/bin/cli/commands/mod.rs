pub mod chat;
pub mod dashboard;
pub mod deck;
pub mod decks;
pub mod recommend;
pub mod slides;
pub mod stats;
