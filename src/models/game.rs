//! A single match between two players.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// One match: two player slots, an optional winner, and the mars flag
/// (a mars is a win worth extra points).
///
/// A slot holds `None` while the match is an unfilled bracket placeholder or
/// the empty side of a bye; such a match cannot accept a result.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub p1: Option<PlayerId>,
    pub p2: Option<PlayerId>,
    /// `None` until a result is recorded (or pre-set for byes).
    pub winner: Option<PlayerId>,
    pub mars: bool,
    /// Points credited at record time: winner id -> points per settings.
    pub points_awarded: Option<HashMap<PlayerId, u32>>,
}

impl Match {
    /// A regular match between two players, no result yet.
    pub fn new(p1: PlayerId, p2: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            p1: Some(p1),
            p2: Some(p2),
            winner: None,
            mars: false,
            points_awarded: None,
        }
    }

    /// A bracket placeholder: both slots empty, filled by propagation.
    pub fn pending() -> Self {
        Self {
            id: Uuid::new_v4(),
            p1: None,
            p2: None,
            winner: None,
            mars: false,
            points_awarded: None,
        }
    }

    /// A bye: sole occupant advances without playing. Winner is pre-set and
    /// no result can be recorded.
    pub fn bye(p: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            p1: Some(p),
            p2: None,
            winner: Some(p),
            mars: false,
            points_awarded: None,
        }
    }

    /// Both slots filled and a winner recorded (a played match; excludes byes).
    pub fn is_played(&self) -> bool {
        self.p1.is_some() && self.p2.is_some() && self.winner.is_some()
    }

    /// Both slots filled but no winner yet: awaiting a result.
    pub fn is_open(&self) -> bool {
        self.p1.is_some() && self.p2.is_some() && self.winner.is_none()
    }

    pub fn involves(&self, pid: PlayerId) -> bool {
        self.p1 == Some(pid) || self.p2 == Some(pid)
    }

    /// The participant who did not win, once both slots are filled and the
    /// winner is set.
    pub fn loser(&self) -> Option<PlayerId> {
        match (self.p1, self.p2, self.winner) {
            (Some(p1), Some(p2), Some(w)) if w == p1 => Some(p2),
            (Some(p1), Some(p2), Some(w)) if w == p2 => Some(p1),
            _ => None,
        }
    }
}
