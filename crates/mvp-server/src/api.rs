use axum::extract::{Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use mvp_core::{LeaderboardView, PlayerId, TOP_PERFORMER_THRESHOLD};

use crate::error::AppError;
use crate::state::AppState;

/// Query string shared by the page and the JSON endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub filter: Option<String>,
}

impl ViewQuery {
    /// `top` selects top performers; `all` or no value selects everyone.
    pub fn is_filtered(&self) -> Result<bool, AppError> {
        match self.filter.as_deref() {
            None | Some("") | Some("all") => Ok(false),
            Some("top") => Ok(true),
            Some(other) => Err(AppError::BadRequest(format!(
                "Unknown filter '{other}' (expected 'all' or 'top')"
            ))),
        }
    }
}

/// One ranked row in the JSON response.
#[derive(Debug, Serialize)]
pub struct RankedPlayer {
    pub rank: usize,
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
}

/// Response for the leaderboard endpoint.
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub filtered: bool,
    pub total_players: usize,
    pub displayed: usize,
    pub top_count: usize,
    pub threshold: u32,
    pub players: Vec<RankedPlayer>,
}

impl From<LeaderboardView<'_>> for LeaderboardResponse {
    fn from(view: LeaderboardView<'_>) -> Self {
        Self {
            filtered: view.is_filtered(),
            total_players: view.total(),
            displayed: view.displayed(),
            top_count: view.top_count(),
            threshold: TOP_PERFORMER_THRESHOLD,
            players: view
                .entries()
                .map(|entry| RankedPlayer {
                    rank: entry.rank,
                    id: entry.player.id,
                    name: entry.player.name.clone(),
                    score: entry.player.score,
                })
                .collect(),
        }
    }
}

/// GET /api/v1/leaderboard — ranked scores, optionally filtered.
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<LeaderboardResponse>, AppError> {
    let filtered = query.is_filtered()?;
    let board = state.leaderboard().await;
    Ok(Json(LeaderboardResponse::from(board.view(filtered))))
}
