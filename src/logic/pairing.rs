//! Schedule generation: round-robin pairing (circle method) and
//! single-elimination brackets.

use crate::models::{
    Bracket, BracketNode, Format, Match, MatchId, PlayerId, Round, Schedule, TournamentError,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Build the schedule for `format`. Pure: fails without side effects when
/// there are fewer than 2 participants, or for double elimination, which has
/// no generator yet.
pub fn generate_schedule_with_rng(
    format: Format,
    participants: &[PlayerId],
    rng: &mut impl Rng,
) -> Result<Schedule, TournamentError> {
    if participants.len() < 2 {
        return Err(TournamentError::InsufficientParticipants);
    }
    match format {
        Format::RoundRobin => Ok(Schedule::RoundRobin {
            rounds: generate_round_robin(participants),
        }),
        Format::SingleElim => Ok(Schedule::Elimination {
            bracket: generate_single_elim(participants, rng),
        }),
        Format::DoubleElim => Err(TournamentError::UnsupportedFormat),
    }
}

/// Circle method: pad odd lists with a phantom slot, pair position `i` with
/// `n-1-i` for `n-1` rounds, rotating the tail through index 1 between rounds
/// (position 0 stays fixed). Every real pair meets exactly once; a pairing
/// against the phantom slot is that player's idle round.
fn generate_round_robin(participants: &[PlayerId]) -> Vec<Round> {
    let mut slots: Vec<Option<PlayerId>> = participants.iter().copied().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let n = slots.len();

    let mut rounds = Vec::with_capacity(n - 1);
    for _ in 0..n - 1 {
        let mut matches = Vec::with_capacity(n / 2);
        for i in 0..n / 2 {
            if let (Some(p1), Some(p2)) = (slots[i], slots[n - 1 - i]) {
                matches.push(Match::new(p1, p2));
            }
        }
        rounds.push(Round { matches });
        if let Some(last) = slots.pop() {
            slots.insert(1, last);
        }
    }
    rounds
}

/// Knockout bracket: uniform shuffle, bracket size is the smallest power of
/// two >= participant count, the shortfall becomes byes. Layer 0 seeds real
/// pairings first, then one bye node per leftover player; byes get a pre-set
/// winner and advance into their parent slot immediately, since no result
/// will ever be recorded for them. Later layers are placeholders that halve
/// down to the single decider, each node linked to its sources (`from`) and
/// its destination (`parent`).
fn generate_single_elim(participants: &[PlayerId], rng: &mut impl Rng) -> Bracket {
    let mut seeded: Vec<PlayerId> = participants.to_vec();
    seeded.shuffle(rng);

    let mut size = 1;
    while size < seeded.len() {
        size *= 2;
    }
    let byes = size - seeded.len();
    let pairings = (seeded.len() - byes) / 2;

    let mut entry = Vec::with_capacity(size / 2);
    let mut idx = 0;
    for _ in 0..pairings {
        entry.push(BracketNode::pairing(seeded[idx], seeded[idx + 1]));
        idx += 2;
    }
    for _ in 0..byes {
        entry.push(BracketNode::bye(seeded[idx]));
        idx += 1;
    }

    let mut bracket = Bracket { rounds: Vec::new() };
    let mut current = entry;
    while current.len() > 1 {
        let mut next = Vec::with_capacity(current.len() / 2);
        for pair in current.chunks(2) {
            next.push(BracketNode::placeholder([pair[0].game.id, pair[1].game.id]));
        }
        for (i, node) in current.iter_mut().enumerate() {
            node.parent = Some(next[i / 2].game.id);
        }
        bracket.rounds.push(current);
        current = next;
    }
    bracket.rounds.push(current);

    // Byes only exist on layer 0; advance their occupants now.
    let advancing: Vec<(MatchId, PlayerId)> = bracket.rounds[0]
        .iter()
        .filter(|n| n.bye)
        .filter_map(|n| Some((n.parent?, n.game.winner?)))
        .collect();
    for (parent, winner) in advancing {
        bracket.fill_slot(parent, winner);
    }

    bracket
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    fn ids(n: usize) -> Vec<PlayerId> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn rejects_single_participant() {
        let players = ids(1);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_schedule_with_rng(Format::RoundRobin, &players, &mut rng),
            Err(TournamentError::InsufficientParticipants)
        );
    }

    #[test]
    fn rejects_double_elim() {
        let players = ids(4);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_schedule_with_rng(Format::DoubleElim, &players, &mut rng),
            Err(TournamentError::UnsupportedFormat)
        );
    }

    #[test]
    fn bracket_layers_halve_to_one() {
        let players = ids(6);
        let mut rng = StdRng::seed_from_u64(7);
        let bracket = generate_single_elim(&players, &mut rng);
        let sizes: Vec<usize> = bracket.rounds.iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![4, 2, 1]);
    }

    #[test]
    fn every_non_final_node_has_a_parent() {
        let players = ids(5);
        let mut rng = StdRng::seed_from_u64(7);
        let bracket = generate_single_elim(&players, &mut rng);
        let last = bracket.rounds.len() - 1;
        for (layer, round) in bracket.rounds.iter().enumerate() {
            for node in round {
                assert_eq!(node.parent.is_none(), layer == last);
            }
        }
    }
}
