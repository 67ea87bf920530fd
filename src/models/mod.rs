//! Data structures for the tournament manager: players, matches, brackets,
//! tournaments, and the persisted dataset.

mod bracket;
mod dataset;
mod game;
mod player;
mod tournament;

pub use bracket::{Bracket, BracketNode};
pub use dataset::{Dataset, PointsConfig, Settings};
pub use game::{Match, MatchId};
pub use player::{Player, PlayerId, PlayerRecord, PlayerSummary};
pub use tournament::{
    Format, Round, Schedule, Status, Tournament, TournamentError, TournamentId,
};
