//! Statistics aggregation: per-tournament scoreboards and cross-tournament
//! player summaries. Derived on demand, never persisted on the player.

use crate::models::{
    Dataset, Player, PlayerId, PlayerRecord, PlayerSummary, PointsConfig, Tournament,
};
use std::collections::HashMap;

/// Per-player rows for one tournament, in a stable order: declared
/// participants first (sign-up order, zeroed even with no matches played),
/// then any player found only in match history, in encounter order. The
/// latter happens when someone was removed from the roster after playing;
/// their results are kept under a synthesized row rather than dropped.
///
/// Only played matches count: both slots filled and a winner recorded. Byes
/// award no win and no points.
pub fn compute_tournament_stats(
    tournament: &Tournament,
    roster: &HashMap<PlayerId, Player>,
    points: &PointsConfig,
) -> Vec<PlayerRecord> {
    let mut rows: Vec<PlayerRecord> = Vec::with_capacity(tournament.participants.len());
    let mut index: HashMap<PlayerId, usize> = HashMap::new();
    for &pid in &tournament.participants {
        index.insert(pid, rows.len());
        rows.push(PlayerRecord::new(pid, display_name(roster, pid)));
    }

    for game in tournament.matches() {
        if !game.is_played() {
            continue;
        }
        let (winner, loser) = match (game.winner, game.loser()) {
            (Some(w), Some(l)) => (w, l),
            _ => continue,
        };

        let wi = row_for(&mut rows, &mut index, roster, winner);
        rows[wi].wins += 1;
        if game.mars {
            rows[wi].mars_wins += 1;
        }
        rows[wi].points += if game.mars { points.mars } else { points.win };

        let li = row_for(&mut rows, &mut index, roster, loser);
        rows[li].losses += 1;
    }
    rows
}

fn row_for(
    rows: &mut Vec<PlayerRecord>,
    index: &mut HashMap<PlayerId, usize>,
    roster: &HashMap<PlayerId, Player>,
    pid: PlayerId,
) -> usize {
    *index.entry(pid).or_insert_with(|| {
        rows.push(PlayerRecord::new(pid, display_name(roster, pid)));
        rows.len() - 1
    })
}

fn display_name(roster: &HashMap<PlayerId, Player>, pid: PlayerId) -> String {
    roster
        .get(&pid)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "???".to_string())
}

/// Career summary for one player across every tournament in the dataset,
/// active and completed alike. A tournament's name is listed if the player
/// was a declared participant or appears in any of its matches. The win
/// ratio is 0.0 when no decided matches exist.
pub fn aggregate_player_stats(data: &Dataset, pid: PlayerId) -> PlayerSummary {
    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut mars_wins = 0u32;
    let mut tournaments = Vec::new();

    for t in &data.tournaments {
        let mut participated = t.participants.contains(&pid);
        for game in t.matches() {
            if !game.is_played() || !game.involves(pid) {
                continue;
            }
            participated = true;
            if game.winner == Some(pid) {
                wins += 1;
                if game.mars {
                    mars_wins += 1;
                }
            } else {
                losses += 1;
            }
        }
        if participated {
            tournaments.push(t.name.clone());
        }
    }

    let played = wins + losses;
    let ratio = if played > 0 {
        f64::from(wins) / f64::from(played)
    } else {
        0.0
    };
    PlayerSummary {
        wins,
        losses,
        mars_wins,
        ratio,
        tournaments,
    }
}
