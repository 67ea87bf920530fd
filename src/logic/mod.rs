//! Tournament engine: schedule generation, result progression, statistics,
//! and ranking.

mod pairing;
mod progression;
mod standings;
mod stats;

pub use pairing::generate_schedule_with_rng;
pub use progression::record_result;
pub use standings::{compute_standings, sort_records, standings, standings_order, SortDir, SortKey};
pub use stats::{aggregate_player_stats, compute_tournament_stats};
