use serde::{Deserialize, Serialize};

/// Unique identifier for a player within a roster.
pub type PlayerId = i64;

/// A player on the roster for one leaderboard computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
