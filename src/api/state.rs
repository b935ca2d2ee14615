use std::sync::Arc;

use crate::config::Config;
use crate::data::Tables;
use crate::models::Habit;
use crate::services::{
    cluster_habits, Chatbot, HabitAdvisor, KMeans, MusicLibrary, SentimentScorer, VaderScorer,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<AppContext>,
}

/// Everything trained or loaded at startup. Read-only afterwards.
pub struct AppContext {
    pub chatbot: Chatbot,
    pub advisor: HabitAdvisor,
    pub habits: Vec<Habit>,
    pub music: MusicLibrary,
}

impl AppState {
    /// Loads the tables from `config.data_dir` and trains with VADER scoring
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let tables = Tables::load(&config.data_dir)?;
        Self::build(tables, config, Arc::new(VaderScorer))
    }

    /// Trains every model from already-parsed tables
    pub fn build(
        tables: Tables,
        config: &Config,
        scorer: Arc<dyn SentimentScorer>,
    ) -> anyhow::Result<Self> {
        let advisor = HabitAdvisor::train(&tables.surveys)
            .map_err(|e| anyhow::anyhow!("Failed to train habit advisor: {}", e))?;

        let kmeans = KMeans::new(
            config.habit_clusters,
            config.cluster_seed,
            config.cluster_restarts,
        );
        let habits = cluster_habits(&tables.habits, &kmeans);
        tracing::info!(
            habits = habits.len(),
            clusters = habits.iter().map(|h| h.ordered_cluster + 1).max().unwrap_or(0),
            "Habits clustered by time needed"
        );

        let chatbot = Chatbot::new(scorer, &tables.responses);
        let music = MusicLibrary::new(tables.tracks);
        if music.is_empty() {
            tracing::warn!("Music catalog is empty; every mood will return 404");
        } else {
            tracing::info!(tracks = music.len(), "Music catalog loaded");
        }

        Ok(Self {
            inner: Arc::new(AppContext {
                chatbot,
                advisor,
                habits,
                music,
            }),
        })
    }
}
