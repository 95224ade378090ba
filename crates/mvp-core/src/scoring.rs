use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::events::{Action, Event};
use crate::leaderboard::TOP_PERFORMER_THRESHOLD;
use crate::player::{Player, PlayerId};

/// Points awarded for taking a wicket.
pub const TAKE_WICKET_POINTS: u32 = 20;
/// Points awarded for reaching fifty runs.
pub const FIFTY_RUNS_MILESTONE_POINTS: u32 = 15;
/// Points awarded per six.
pub const HIT_SIX_POINTS: u32 = 2;
/// Points awarded per four.
pub const HIT_FOUR_POINTS: u32 = 1;

impl Action {
    /// Point value of this action.
    pub fn points(self) -> u32 {
        match self {
            Self::TakeWicket => TAKE_WICKET_POINTS,
            Self::FiftyRunsMilestone => FIFTY_RUNS_MILESTONE_POINTS,
            Self::HitSix => HIT_SIX_POINTS,
            Self::HitFour => HIT_FOUR_POINTS,
        }
    }
}

/// Point value of a raw action name. Unrecognized names are worth 0.
pub fn points_for(action: &str) -> u32 {
    Action::parse(action).map_or(0, Action::points)
}

/// A player annotated with their cumulative score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
}

impl PlayerScore {
    pub fn new(player: &Player, score: u32) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            score,
        }
    }

    pub fn is_top_performer(&self) -> bool {
        self.score >= TOP_PERFORMER_THRESHOLD
    }
}

/// Score every roster player from the event log and rank them.
///
/// Every player appears exactly once, even with no events. Events for ids
/// not on the roster are dropped. The sort is stable, so equal scores keep
/// their roster order.
pub fn calculate_scores(players: &[Player], events: &[Event]) -> Vec<PlayerScore> {
    let mut totals: HashMap<PlayerId, u32> = players.iter().map(|p| (p.id, 0)).collect();

    for event in events {
        match totals.get_mut(&event.player_id) {
            Some(total) => *total = total.saturating_add(points_for(&event.action)),
            None => {
                tracing::trace!(player_id = event.player_id, "event for unknown player dropped");
            },
        }
    }

    let mut scores: Vec<PlayerScore> = players
        .iter()
        .map(|p| PlayerScore::new(p, totals.get(&p.id).copied().unwrap_or(0)))
        .collect();
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores
}
