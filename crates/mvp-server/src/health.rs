use std::path::Path;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Structured health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub data: DataInfo,
}

/// Whether each configured data file is present on disk.
#[derive(Serialize)]
pub struct DataInfo {
    pub players_file: bool,
    pub events_file: bool,
}

impl DataInfo {
    async fn probe(state: &AppState) -> Self {
        Self {
            players_file: is_file(&state.config.players_path()).await,
            events_file: is_file(&state.config.events_path()).await,
        }
    }
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .is_ok_and(|meta| meta.is_file())
}

/// Structured health check endpoint. Missing data files do not make the
/// server unhealthy; the leaderboard is simply empty.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        data: DataInfo::probe(&state).await,
    })
}

/// Readiness check — both data files must exist.
pub async fn readiness_check(State(state): State<AppState>) -> &'static str {
    let data = DataInfo::probe(&state).await;
    if !data.players_file {
        return "not ready: players file missing";
    }
    if !data.events_file {
        return "not ready: events file missing";
    }
    "ready"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    #[test]
    fn health_response_serializes() {
        let resp = HealthResponse {
            status: "healthy",
            version: "0.1.0",
            data: DataInfo {
                players_file: true,
                events_file: false,
            },
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"healthy\""));
        assert!(json.contains("\"players_file\":true"));
        assert!(json.contains("\"events_file\":false"));
    }

    #[tokio::test]
    async fn readiness_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(ServerConfig {
            data_dir: dir.path().to_string_lossy().into_owned(),
            ..ServerConfig::default()
        });
        assert_eq!(
            readiness_check(State(state.clone())).await,
            "not ready: players file missing"
        );

        std::fs::write(dir.path().join("players.json"), "[]").unwrap();
        assert_eq!(
            readiness_check(State(state.clone())).await,
            "not ready: events file missing"
        );

        std::fs::write(dir.path().join("events.json"), "[]").unwrap();
        assert_eq!(readiness_check(State(state)).await, "ready");
    }

    #[tokio::test]
    async fn health_reports_data_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("players.json"), "[]").unwrap();
        // a directory under the events name is not a data file
        std::fs::create_dir(dir.path().join("events.json")).unwrap();
        let state = AppState::new(ServerConfig {
            data_dir: dir.path().to_string_lossy().into_owned(),
            ..ServerConfig::default()
        });

        let Json(resp) = health_check(State(state)).await;
        assert_eq!(resp.status, "healthy");
        assert!(resp.data.players_file);
        assert!(!resp.data.events_file);
    }
}
