pub mod events;
pub mod leaderboard;
pub mod player;
pub mod scoring;

pub use events::{Action, Event};
pub use leaderboard::{
    Leaderboard, LeaderboardView, RankedEntry, TOP_PERFORMER_THRESHOLD, filter_top_performers,
};
pub use player::{Player, PlayerId};
pub use scoring::{PlayerScore, calculate_scores, points_for};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::events::Event;
    use crate::player::{Player, PlayerId};

    /// Create `n` test players with sequential IDs starting at 1.
    pub fn make_players(n: usize) -> Vec<Player> {
        (0..n)
            .map(|i| Player {
                id: i as PlayerId + 1,
                name: format!("Player{}", i + 1),
            })
            .collect()
    }

    /// Create a single scoring event.
    pub fn make_event(player_id: PlayerId, action: &str) -> Event {
        Event {
            player_id,
            action: action.to_string(),
        }
    }

    /// Create one event per action, all for the same player.
    pub fn make_events(player_id: PlayerId, actions: &[&str]) -> Vec<Event> {
        actions
            .iter()
            .map(|action| make_event(player_id, action))
            .collect()
    }
}
