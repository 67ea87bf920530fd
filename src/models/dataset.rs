//! The persisted document: roster, tournaments, and settings.
//!
//! The whole dataset is the unit of persistence. The engine mutates it in
//! memory; the caller saves the entire document after each mutation.

use crate::models::player::{Player, PlayerId};
use crate::models::tournament::{Status, Tournament, TournamentId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Point values for match results. Must both be positive; enforced by the
/// layer that accepts configuration updates, trusted at scoring time.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PointsConfig {
    /// Points for a plain win.
    pub win: u32,
    /// Points for a mars (bonus) win.
    pub mars: u32,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self { win: 1, mars: 2 }
    }
}

impl PointsConfig {
    pub fn is_valid(&self) -> bool {
        self.win >= 1 && self.mars >= 1
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub points: PointsConfig,
}

/// The single serializable document holding everything.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub players: HashMap<PlayerId, Player>,
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
    #[serde(default)]
    pub settings: Settings,
    /// The tournament currently shown live, if any. Cleared by the caller
    /// when a tournament completes; the engine never touches it.
    #[serde(default)]
    pub active_tournament_id: Option<TournamentId>,
}

fn default_version() -> u32 {
    1
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}

impl Dataset {
    pub fn new() -> Self {
        Self {
            version: 1,
            players: HashMap::new(),
            tournaments: Vec::new(),
            settings: Settings::default(),
            active_tournament_id: None,
        }
    }

    /// Add a player to the roster and return the new id.
    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let player = Player::new(name);
        let id = player.id;
        self.players.insert(id, player);
        id
    }

    /// Remove a player from the roster. Active tournaments drop the player
    /// from their participant list; completed tournaments are left untouched
    /// so historical standings keep their meaning. Recorded matches are never
    /// rewritten either way.
    pub fn remove_player(&mut self, id: PlayerId) {
        self.players.remove(&id);
        for t in &mut self.tournaments {
            if t.status != Status::Completed {
                t.participants.retain(|&p| p != id);
            }
        }
    }

    /// Display name for a player id; `"???"` for ids no longer in the roster.
    pub fn player_name(&self, id: PlayerId) -> String {
        self.players
            .get(&id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "???".to_string())
    }

}
