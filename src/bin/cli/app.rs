use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use nova_lib::config::Settings;
use nova_lib::dashboard::{DashboardView, ViewOptions};
use nova_lib::flashcards::seed::sample_daily_review;
use nova_lib::storage::{FileStore, KeyValueStore, MemoryStore, StudyStore};

pub type DynStore = Box<dyn KeyValueStore + Send + Sync>;

/// Shared application state for CLI commands
pub struct App {
    pub settings: Settings,
    pub store: StudyStore<DynStore>,
    pub now: DateTime<Utc>,
}

impl App {
    /// Load settings and open the store.
    ///
    /// `data_dir` beats the config file, which beats the platform default.
    pub fn new(
        config_path: Option<&Path>,
        data_dir: Option<PathBuf>,
        ephemeral: bool,
    ) -> Result<Self> {
        let settings = Settings::load(config_path).context("Failed to load settings")?;

        let store: DynStore = if ephemeral {
            log::info!("Using in-memory store; changes will not be saved");
            Box::new(MemoryStore::new())
        } else {
            let dir = match data_dir.or_else(|| settings.data_dir.clone()) {
                Some(dir) => dir,
                None => FileStore::default_data_dir().context("Failed to get data directory")?,
            };
            let store = FileStore::new(dir);
            store.init().context("Failed to initialize data directory")?;
            log::debug!("Data directory: {}", store.base_path().display());
            Box::new(store)
        };

        Ok(Self {
            settings,
            store: StudyStore::new(store),
            now: Utc::now(),
        })
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions::from(&self.settings)
    }

    /// Build the full dashboard from the stored records
    pub fn dashboard(&self) -> DashboardView {
        let decks = self.store.decks(self.now);
        let stats = self.store.stats();
        let targets = self.store.targets();
        // the banner only makes sense while its deck still exists
        let review = sample_daily_review();
        let daily_review = decks.iter().any(|d| d.id == review.deck_id).then_some(review);
        DashboardView::build(
            &decks,
            &stats,
            &targets,
            daily_review,
            self.now,
            &self.view_options(),
        )
    }
}
