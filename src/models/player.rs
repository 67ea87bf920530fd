//! Player identity and derived statistics records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// A player in the global roster. Identity is immutable; the name may be edited.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a new player with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// Per-tournament statistics row: one per participant, derived from decided
/// matches. Also the shape of cached standings entries.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub mars_wins: u32,
    pub points: u32,
}

impl PlayerRecord {
    /// Zeroed record for a participant.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wins: 0,
            losses: 0,
            mars_wins: 0,
            points: 0,
        }
    }
}

/// Cross-tournament summary for one player (profile view).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub wins: u32,
    pub losses: u32,
    pub mars_wins: u32,
    /// wins / (wins + losses); 0.0 when no decided matches.
    pub ratio: f64,
    /// Names of tournaments the player took part in.
    pub tournaments: Vec<String>,
}
