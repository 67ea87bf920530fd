//! Backgammon tournament web app: library with models and engine logic.

pub mod logic;
pub mod models;

pub use logic::{
    aggregate_player_stats, compute_standings, compute_tournament_stats, record_result,
    sort_records, standings, standings_order, SortDir, SortKey,
};
pub use models::{
    Bracket, BracketNode, Dataset, Format, Match, MatchId, Player, PlayerId, PlayerRecord,
    PlayerSummary, PointsConfig, Round, Schedule, Settings, Status, Tournament, TournamentError,
    TournamentId,
};
