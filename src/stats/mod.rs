//! Learner stats and targets

pub mod models;

pub use models::*;
