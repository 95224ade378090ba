use std::path::{Path, PathBuf};

use mvp_core::{Event, Player};
use serde::de::DeserializeOwned;

use crate::config::ServerConfig;

/// Roster and event log for one leaderboard computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub players: Vec<Player>,
    pub events: Vec<Event>,
}

/// Failure reading one of the data files.
#[derive(Debug)]
pub enum LoadError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            },
            Self::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            },
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse both data files, surfacing the first failure.
pub async fn try_load_dataset(config: &ServerConfig) -> Result<Dataset, LoadError> {
    let players = read_json(&config.players_path()).await?;
    let events = read_json(&config.events_path()).await?;
    Ok(Dataset { players, events })
}

/// Load the roster and event log. Never fails: any read or parse error is
/// logged and both collections come back empty.
pub async fn load_dataset(config: &ServerConfig) -> Dataset {
    match try_load_dataset(config).await {
        Ok(dataset) => {
            tracing::debug!(
                players = dataset.players.len(),
                events = dataset.events.len(),
                "Loaded leaderboard data"
            );
            dataset
        },
        Err(e) => {
            tracing::error!(data_dir = %config.data_dir, "Error loading leaderboard data: {e}");
            Dataset::default()
        },
    }
}
