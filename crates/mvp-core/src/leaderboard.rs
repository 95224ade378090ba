use crate::events::Event;
use crate::player::{Player, PlayerId};
use crate::scoring::{PlayerScore, calculate_scores};

/// Minimum score for a player to count as a top performer.
pub const TOP_PERFORMER_THRESHOLD: u32 = 20;

/// Number of leading ranks highlighted on the board.
pub const PODIUM_SIZE: usize = 3;

/// Keep only players at or above [`TOP_PERFORMER_THRESHOLD`], preserving
/// input order. Works on any slice of scores, sorted or not.
pub fn filter_top_performers(scores: &[PlayerScore]) -> Vec<PlayerScore> {
    scores
        .iter()
        .filter(|s| s.is_top_performer())
        .cloned()
        .collect()
}

/// Full and filtered rankings computed once from a roster and event log.
///
/// Switching between the two views reads a snapshot and never re-runs
/// aggregation.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    all: Vec<PlayerScore>,
    top: Vec<PlayerScore>,
}

impl Leaderboard {
    pub fn new(players: &[Player], events: &[Event]) -> Self {
        Self::from_scores(calculate_scores(players, events))
    }

    pub fn from_scores(all: Vec<PlayerScore>) -> Self {
        let top = filter_top_performers(&all);
        Self { all, top }
    }

    pub fn all(&self) -> &[PlayerScore] {
        &self.all
    }

    pub fn top_performers(&self) -> &[PlayerScore] {
        &self.top
    }

    pub fn total_players(&self) -> usize {
        self.all.len()
    }

    pub fn top_count(&self) -> usize {
        self.top.len()
    }

    /// Borrow either the full or the filtered ranking for display.
    pub fn view(&self, filtered: bool) -> LeaderboardView<'_> {
        let rows = if filtered { &self.top } else { &self.all };
        LeaderboardView {
            rows,
            filtered,
            total: self.total_players(),
            top_count: self.top_count(),
        }
    }
}

/// The rows currently on display plus the counters shown around them.
#[derive(Debug, Clone, Copy)]
pub struct LeaderboardView<'a> {
    rows: &'a [PlayerScore],
    filtered: bool,
    total: usize,
    top_count: usize,
}

/// A displayed row with its 1-based position in the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    pub player: &'a PlayerScore,
    pub podium: bool,
}

impl<'a> LeaderboardView<'a> {
    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    pub fn rows(&self) -> &'a [PlayerScore] {
        self.rows
    }

    pub fn displayed(&self) -> usize {
        self.rows.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn top_count(&self) -> usize {
        self.top_count
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn entries(self) -> impl Iterator<Item = RankedEntry<'a>> {
        self.rows.iter().enumerate().map(|(i, player)| RankedEntry {
            rank: i + 1,
            player,
            podium: i < PODIUM_SIZE,
        })
    }

    /// "Showing X of Y" line for the header.
    pub fn summary(&self) -> String {
        format!("Showing {} of {}", self.displayed(), self.total)
    }
}
