use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// Recognized scoring actions.
///
/// The set is closed: any other action string in the event log is worth
/// nothing and never fails parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    TakeWicket,
    FiftyRunsMilestone,
    HitSix,
    HitFour,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::TakeWicket,
        Action::FiftyRunsMilestone,
        Action::HitSix,
        Action::HitFour,
    ];

    /// Exact, case-sensitive lookup of an action name from the event log.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "TAKE_WICKET" => Some(Self::TakeWicket),
            "50_RUNS_MILESTONE" => Some(Self::FiftyRunsMilestone),
            "HIT_SIX" => Some(Self::HitSix),
            "HIT_FOUR" => Some(Self::HitFour),
            _ => None,
        }
    }

    /// Wire name as it appears in the event log.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TakeWicket => "TAKE_WICKET",
            Self::FiftyRunsMilestone => "50_RUNS_MILESTONE",
            Self::HitSix => "HIT_SIX",
            Self::HitFour => "HIT_FOUR",
        }
    }
}

/// One scoring occurrence from the event log.
///
/// `action` stays a raw string so that unrecognized actions load cleanly and
/// simply score zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    pub action: String,
}

impl Event {
    pub fn new(player_id: PlayerId, action: impl Into<String>) -> Self {
        Self {
            player_id,
            action: action.into(),
        }
    }

    /// The recognized action, if any.
    pub fn kind(&self) -> Option<Action> {
        Action::parse(&self.action)
    }
}
