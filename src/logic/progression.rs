//! Result recording and bracket progression.
//!
//! `record_result` is the only way match state changes after generation.
//! Completion is detected here as a side effect of the final result; nothing
//! polls for it separately.

use crate::logic::standings::compute_standings;
use crate::models::{
    Match, MatchId, Player, PlayerId, PointsConfig, Schedule, Status, Tournament, TournamentError,
};
use std::collections::HashMap;

/// Record a result for one match and advance the tournament.
///
/// Fails with `UnknownMatch` if the id is not in the schedule, `InvalidWinner`
/// if a slot is unfilled or the winner is not one of the two players (the
/// match is left untouched), and `MatchAlreadyDecided` on any re-record:
/// results are immutable, byes included.
///
/// On success the winner and mars flag are stored together with the points
/// awarded under the current configuration. For elimination formats the
/// winner is advanced into the parent node's first empty slot; the tournament
/// completes when the decider has a winner (elimination) or every match is
/// decided (round robin). Completion caches the standings and flips the
/// status; it never runs twice.
pub fn record_result(
    tournament: &mut Tournament,
    roster: &HashMap<PlayerId, Player>,
    match_id: MatchId,
    winner_id: PlayerId,
    mars: bool,
    points: &PointsConfig,
) -> Result<(), TournamentError> {
    match &mut tournament.schedule {
        Schedule::RoundRobin { rounds } => {
            let game = rounds
                .iter_mut()
                .flat_map(|r| r.matches.iter_mut())
                .find(|m| m.id == match_id)
                .ok_or(TournamentError::UnknownMatch(match_id))?;
            apply_result(game, winner_id, mars, points)?;

            let all_decided = rounds
                .iter()
                .all(|r| r.matches.iter().all(|m| m.winner.is_some()));
            if all_decided {
                complete(tournament, roster, points);
            }
        }
        Schedule::Elimination { bracket } => {
            let node = bracket
                .node_mut(match_id)
                .ok_or(TournamentError::UnknownMatch(match_id))?;
            apply_result(&mut node.game, winner_id, mars, points)?;

            match node.parent {
                Some(parent) => {
                    bracket.fill_slot(parent, winner_id);
                }
                // No parent: this was the decider.
                None => complete(tournament, roster, points),
            }
        }
    }
    Ok(())
}

/// Validate and store a single result. Checked in this order: already
/// decided, unfilled slot, winner not a participant.
fn apply_result(
    game: &mut Match,
    winner_id: PlayerId,
    mars: bool,
    points: &PointsConfig,
) -> Result<(), TournamentError> {
    if game.winner.is_some() {
        return Err(TournamentError::MatchAlreadyDecided);
    }
    let (p1, p2) = match (game.p1, game.p2) {
        (Some(p1), Some(p2)) => (p1, p2),
        _ => return Err(TournamentError::InvalidWinner),
    };
    if winner_id != p1 && winner_id != p2 {
        return Err(TournamentError::InvalidWinner);
    }

    game.winner = Some(winner_id);
    game.mars = mars;
    let awarded = if mars { points.mars } else { points.win };
    game.points_awarded = Some(HashMap::from([(winner_id, awarded)]));
    Ok(())
}

/// Snapshot standings and close the tournament. No-op if already completed.
/// Clearing any caller-held "active tournament" pointer is the caller's job.
fn complete(tournament: &mut Tournament, roster: &HashMap<PlayerId, Player>, points: &PointsConfig) {
    if tournament.status == Status::Completed {
        return;
    }
    compute_standings(tournament, roster, points);
    tournament.status = Status::Completed;
}
