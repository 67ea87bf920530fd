//! Ranking: scoreboard sorting and the cached standings snapshot.

use crate::logic::stats::compute_tournament_stats;
use crate::models::{Player, PlayerId, PlayerRecord, PointsConfig, Tournament};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scoreboard column to sort by.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Points,
    Wins,
    Losses,
    MarsWins,
    Name,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortKey {
    /// Direction used when a column is first selected: names ascend,
    /// numbers descend.
    pub fn default_dir(self) -> SortDir {
        match self {
            SortKey::Name => SortDir::Asc,
            _ => SortDir::Desc,
        }
    }
}

/// Interactive sort: one key, no secondary tie-break. The sort is stable, so
/// rows with equal keys keep their previous relative order. Names compare by
/// Unicode code point.
pub fn sort_records(rows: &mut [PlayerRecord], key: SortKey, dir: SortDir) {
    rows.sort_by(|a, b| {
        let ord = match key {
            SortKey::Points => a.points.cmp(&b.points),
            SortKey::Wins => a.wins.cmp(&b.wins),
            SortKey::Losses => a.losses.cmp(&b.losses),
            SortKey::MarsWins => a.mars_wins.cmp(&b.mars_wins),
            SortKey::Name => a.name.cmp(&b.name),
        };
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}

/// The fixed default order used for standings, archival, and export:
/// points descending, then wins descending, then input order (stable).
pub fn standings_order(rows: &mut [PlayerRecord]) {
    rows.sort_by(|a, b| b.points.cmp(&a.points).then(b.wins.cmp(&a.wins)));
}

/// Compute and cache the default-order standings on the tournament.
pub fn compute_standings(
    tournament: &mut Tournament,
    roster: &HashMap<PlayerId, Player>,
    points: &PointsConfig,
) {
    let mut rows = compute_tournament_stats(tournament, roster, points);
    standings_order(&mut rows);
    tournament.standings = rows;
}

/// The tournament's standings in default order: the cached snapshot when one
/// exists (set at completion), otherwise computed fresh.
pub fn standings(
    tournament: &Tournament,
    roster: &HashMap<PlayerId, Player>,
    points: &PointsConfig,
) -> Vec<PlayerRecord> {
    if !tournament.standings.is_empty() {
        return tournament.standings.clone();
    }
    let mut rows = compute_tournament_stats(tournament, roster, points);
    standings_order(&mut rows);
    rows
}
