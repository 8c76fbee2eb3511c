//! Typed access to the learner's decks, stats and targets

use chrono::{DateTime, Utc};

use super::kv::{KeyValueStore, Result, StorageError, DECKS_KEY, USER_STATS_KEY, USER_TARGETS_KEY};
use crate::flashcards::seed::sample_decks;
use crate::flashcards::{Category, Deck};
use crate::stats::{UserStats, UserTargets};

/// Fields for a new deck
#[derive(Debug, Clone)]
pub struct CreateDeckRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub total_cards: u32,
}

/// Repository over a key/value store.
///
/// Reads fall back to the built-in sample data; writes replace the whole
/// record under its key.
pub struct StudyStore<S> {
    store: S,
}

impl<S: KeyValueStore> StudyStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    // ==================== Records ====================

    /// Stored decks, or the sample decks when none are saved.
    ///
    /// Each deck is normalized so `masteredCards <= totalCards` and
    /// `progress` matches the card counts.
    pub fn decks(&self, now: DateTime<Utc>) -> Vec<Deck> {
        let mut decks: Vec<Deck> = self.store.load_or(DECKS_KEY, sample_decks(now));
        for deck in decks.iter_mut() {
            if !deck.progress_is_consistent() {
                log::warn!(
                    "Deck {} has inconsistent progress ({}/{} cards, {}%); normalizing",
                    deck.id,
                    deck.mastered_cards,
                    deck.total_cards,
                    deck.progress
                );
                deck.recompute_progress();
            }
        }
        decks
    }

    pub fn stats(&self) -> UserStats {
        self.store.load_or(USER_STATS_KEY, UserStats::default())
    }

    pub fn targets(&self) -> UserTargets {
        self.store.load_or(USER_TARGETS_KEY, UserTargets::default())
    }

    pub fn save_decks(&self, decks: &[Deck]) -> Result<()> {
        self.store.save(DECKS_KEY, decks)
    }

    pub fn save_stats(&self, stats: &UserStats) -> Result<()> {
        stats
            .validate()
            .map_err(|e| StorageError::InvalidOperation(e.to_string()))?;
        self.store.save(USER_STATS_KEY, stats)
    }

    pub fn save_targets(&self, targets: &UserTargets) -> Result<()> {
        targets
            .validate()
            .map_err(|e| StorageError::InvalidOperation(e.to_string()))?;
        self.store.save(USER_TARGETS_KEY, targets)
    }

    /// Overwrite every record with the sample data
    pub fn reset(&self, now: DateTime<Utc>) -> Result<()> {
        self.save_decks(&sample_decks(now))?;
        self.store.save(USER_STATS_KEY, &UserStats::default())?;
        self.store.save(USER_TARGETS_KEY, &UserTargets::default())?;
        log::info!("Reset study data to sample decks");
        Ok(())
    }

    // ==================== Deck Operations ====================

    pub fn get_deck(&self, deck_id: &str, now: DateTime<Utc>) -> Result<Deck> {
        self.decks(now)
            .into_iter()
            .find(|d| d.id == deck_id)
            .ok_or_else(|| StorageError::DeckNotFound(deck_id.to_string()))
    }

    pub fn create_deck(&self, request: CreateDeckRequest, now: DateTime<Utc>) -> Result<Deck> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(StorageError::InvalidOperation(
                "Deck title cannot be empty".to_string(),
            ));
        }

        let mut deck = Deck::new(title.to_string(), request.category, request.total_cards, now);
        if let Some(description) = request.description {
            deck.description = description;
        }
        deck.recompute_progress();

        let mut decks = self.decks(now);
        decks.push(deck.clone());
        self.save_decks(&decks)?;

        log::info!("Created deck {} ({})", deck.id, deck.title);
        Ok(deck)
    }

    /// Record a study session: bump `lastStudied` and add newly mastered cards
    pub fn study_deck(
        &self,
        deck_id: &str,
        newly_mastered: u32,
        now: DateTime<Utc>,
    ) -> Result<Deck> {
        let mut decks = self.decks(now);
        let deck = decks
            .iter_mut()
            .find(|d| d.id == deck_id)
            .ok_or_else(|| StorageError::DeckNotFound(deck_id.to_string()))?;

        let before = deck.mastered_cards;
        deck.mastered_cards = deck.mastered_cards.saturating_add(newly_mastered);
        deck.last_studied = now;
        deck.recompute_progress();
        let gained = deck.mastered_cards.saturating_sub(before);
        let updated = deck.clone();
        self.save_decks(&decks)?;

        if gained > 0 {
            let mut stats = self.stats();
            stats.total_mastered = stats.total_mastered.saturating_add(gained);
            self.store.save(USER_STATS_KEY, &stats)?;
        }

        Ok(updated)
    }

    pub fn delete_deck(&self, deck_id: &str, now: DateTime<Utc>) -> Result<()> {
        let mut decks = self.decks(now);
        let before = decks.len();
        decks.retain(|d| d.id != deck_id);
        if decks.len() == before {
            return Err(StorageError::DeckNotFound(deck_id.to_string()));
        }
        self.save_decks(&decks)?;
        log::info!("Deleted deck {}", deck_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn create_test_store() -> StudyStore<MemoryStore> {
        StudyStore::new(MemoryStore::new())
    }

    #[test]
    fn test_defaults_when_empty() {
        let store = create_test_store();
        assert_eq!(store.decks(now()), sample_decks(now()));
        assert_eq!(store.stats(), UserStats::default());
        assert_eq!(store.targets(), UserTargets::default());
    }

    #[test]
    fn test_create_deck_persists() {
        let store = create_test_store();
        let deck = store
            .create_deck(
                CreateDeckRequest {
                    title: "  Listening Section 3  ".to_string(),
                    description: Some("Campus conversations".to_string()),
                    category: Category::Listening,
                    total_cards: 30,
                },
                now(),
            )
            .unwrap();

        assert_eq!(deck.title, "Listening Section 3");
        assert_eq!(deck.progress, 0);
        let decks = store.decks(now());
        assert_eq!(decks.len(), 6);
        assert_eq!(store.get_deck(&deck.id, now()).unwrap(), deck);
    }

    #[test]
    fn test_create_deck_rejects_blank_title() {
        let store = create_test_store();
        let result = store.create_deck(
            CreateDeckRequest {
                title: "   ".to_string(),
                description: None,
                category: Category::Reading,
                total_cards: 10,
            },
            now(),
        );
        assert!(matches!(result, Err(StorageError::InvalidOperation(_))));
    }

    #[test]
    fn test_study_deck_updates_progress_and_stats() {
        let store = create_test_store();
        let later = now() + chrono::Duration::hours(1);

        let deck = store.study_deck("deck-4", 4, later).unwrap();
        assert_eq!(deck.mastered_cards, 22);
        assert_eq!(deck.progress, 55);
        assert_eq!(deck.last_studied, later);
        assert_eq!(store.stats().total_mastered, 124);
    }

    #[test]
    fn test_study_deck_clamps_to_total() {
        let store = create_test_store();
        let deck = store.study_deck("deck-1", 500, now()).unwrap();
        assert_eq!(deck.mastered_cards, 50);
        assert_eq!(deck.progress, 100);
        assert_eq!(store.stats().total_mastered, 135);
    }

    #[test]
    fn test_decks_normalizes_inconsistent_records() {
        let store = create_test_store();
        let mut decks = sample_decks(now());
        decks[0].mastered_cards = 60;
        decks[1].progress = 12;
        store.inner().save(DECKS_KEY, &decks).unwrap();

        let loaded = store.decks(now());
        assert!(loaded.iter().all(|d| d.progress_is_consistent()));
        assert_eq!(loaded[0].mastered_cards, 50);
        assert_eq!(loaded[0].progress, 100);
        assert_eq!(loaded[1].progress, loaded[1].mastery_percent());
    }

    #[test]
    fn test_study_deck_with_overfull_stored_deck() {
        let store = create_test_store();
        let mut decks = sample_decks(now());
        decks[0].mastered_cards = 60;
        store.inner().save(DECKS_KEY, &decks).unwrap();

        let deck = store.study_deck("deck-1", 0, now()).unwrap();
        assert_eq!(deck.mastered_cards, 50);
        assert_eq!(deck.progress, 100);
        assert_eq!(store.stats().total_mastered, UserStats::default().total_mastered);
    }

    #[test]
    fn test_missing_deck_errors() {
        let store = create_test_store();
        assert!(matches!(
            store.study_deck("nope", 1, now()),
            Err(StorageError::DeckNotFound(_))
        ));
        assert!(matches!(
            store.delete_deck("nope", now()),
            Err(StorageError::DeckNotFound(_))
        ));
    }

    #[test]
    fn test_delete_deck() {
        let store = create_test_store();
        store.delete_deck("deck-5", now()).unwrap();
        let decks = store.decks(now());
        assert_eq!(decks.len(), 4);
        assert!(decks.iter().all(|d| d.id != "deck-5"));
    }

    #[test]
    fn test_save_stats_validates_band() {
        let store = create_test_store();
        let stats = UserStats {
            estimated_band: 6.2,
            ..UserStats::default()
        };
        assert!(store.save_stats(&stats).is_err());
        assert_eq!(store.stats(), UserStats::default());
    }

    #[test]
    fn test_reset_on_file_store() {
        let temp = TempDir::new().unwrap();
        let store = StudyStore::new(FileStore::new(temp.path().to_path_buf()));
        store.delete_deck("deck-1", now()).unwrap();
        assert_eq!(store.decks(now()).len(), 4);

        store.reset(now()).unwrap();
        assert_eq!(store.decks(now()).len(), 5);
        assert!(temp.path().join("user_targets.json").exists());
    }
}
