use std::sync::Arc;

use mvp_core::Leaderboard;

use crate::config::ServerConfig;
use crate::data::load_dataset;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Load the current data files and rank them. Nothing is cached between
    /// requests, so edits to the data files show up on the next load.
    pub async fn leaderboard(&self) -> Leaderboard {
        let dataset = load_dataset(&self.config).await;
        Leaderboard::new(&dataset.players, &dataset.events)
    }
}
