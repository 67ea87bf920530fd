//! Integration tests for single-elimination brackets: seeding, byes,
//! propagation, and completion.

use backgammon_tournament_web::{
    record_result, Bracket, Format, Player, PlayerId, PointsConfig, Schedule, Status, Tournament,
    TournamentError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn roster(n: usize) -> (HashMap<PlayerId, Player>, Vec<PlayerId>) {
    let mut players = HashMap::new();
    let mut ids = Vec::new();
    for i in 0..n {
        let p = Player::new(format!("P{i}"));
        ids.push(p.id);
        players.insert(p.id, p);
    }
    (players, ids)
}

fn single_elim(n: usize, seed: u64) -> (HashMap<PlayerId, Player>, Vec<PlayerId>, Tournament) {
    let (players, ids) = roster(n);
    let mut rng = StdRng::seed_from_u64(seed);
    let t = Tournament::new_with_rng("Knockout", Format::SingleElim, ids.clone(), &mut rng)
        .unwrap();
    (players, ids, t)
}

fn bracket_of(t: &Tournament) -> &Bracket {
    match &t.schedule {
        Schedule::Elimination { bracket } => bracket,
        Schedule::RoundRobin { .. } => panic!("expected elimination schedule"),
    }
}

/// Play the whole bracket, always advancing the smaller player id.
/// Returns the expected champion: the smallest id overall, since that player
/// can never lose under this rule.
fn play_out_min_wins(
    t: &mut Tournament,
    players: &HashMap<PlayerId, Player>,
    points: &PointsConfig,
) -> PlayerId {
    loop {
        let open: Vec<(uuid::Uuid, PlayerId, PlayerId)> = t
            .open_matches()
            .iter()
            .map(|m| (m.id, m.p1.unwrap(), m.p2.unwrap()))
            .collect();
        if open.is_empty() {
            break;
        }
        for (id, p1, p2) in open {
            let winner = p1.min(p2);
            record_result(t, players, id, winner, false, points).unwrap();
        }
    }
    *t.participants.iter().min().unwrap()
}

#[test]
fn five_players_get_a_bracket_of_eight_with_three_byes() {
    let (_, _, t) = single_elim(5, 42);
    let bracket = bracket_of(&t);

    let sizes: Vec<usize> = bracket.rounds.iter().map(|r| r.len()).collect();
    assert_eq!(sizes, vec![4, 2, 1]);

    let byes: Vec<_> = bracket.rounds[0].iter().filter(|n| n.bye).collect();
    assert_eq!(byes.len(), 3);
    for bye in &byes {
        assert_eq!(bye.game.winner, bye.game.p1, "bye winner is pre-set");
        assert_eq!(bye.game.p2, None);
    }
    assert_eq!(
        bracket.rounds[0].iter().filter(|n| !n.bye).count(),
        1,
        "one real opening match"
    );

    // Byes never show up as open matches; their occupants are already in the
    // next layer, so two bye-winners facing each other are playable at once.
    let open = t.open_matches();
    assert!(open.iter().all(|m| m.p1.is_some() && m.p2.is_some()));
    assert_eq!(open.len(), 2);
}

#[test]
fn placeholder_nodes_reference_their_sources() {
    let (_, _, t) = single_elim(8, 3);
    let bracket = bracket_of(&t);
    for (layer, round) in bracket.rounds.iter().enumerate().skip(1) {
        for (i, node) in round.iter().enumerate() {
            let from = node.from.expect("non-entry node has sources");
            let sources = &bracket.rounds[layer - 1];
            assert_eq!(from[0], sources[2 * i].game.id);
            assert_eq!(from[1], sources[2 * i + 1].game.id);
            for src in &sources[2 * i..2 * i + 2] {
                assert_eq!(src.parent, Some(node.game.id));
            }
        }
    }
}

#[test]
fn recording_fills_exactly_one_slot_upstream() {
    let points = PointsConfig::default();
    let (players, _, mut t) = single_elim(8, 9);

    let filled = |t: &Tournament| -> usize {
        bracket_of(t)
            .rounds
            .iter()
            .skip(1)
            .flat_map(|r| r.iter())
            .map(|n| usize::from(n.game.p1.is_some()) + usize::from(n.game.p2.is_some()))
            .sum()
    };
    assert_eq!(filled(&t), 0, "no byes with 8 players");

    let (first_id, winner) = {
        let node = &bracket_of(&t).rounds[0][0];
        (node.game.id, node.game.p1.unwrap())
    };
    record_result(&mut t, &players, first_id, winner, false, &points).unwrap();

    assert_eq!(filled(&t), 1);
    assert_eq!(bracket_of(&t).rounds[1][0].game.p1, Some(winner));
}

#[test]
fn bracket_resolves_to_the_replayed_champion() {
    let points = PointsConfig::default();
    for seed in [1, 2, 77] {
        let (players, _, mut t) = single_elim(5, seed);
        let champion = play_out_min_wins(&mut t, &players, &points);

        assert_eq!(t.status, Status::Completed);
        let final_node = bracket_of(&t).final_node().unwrap();
        assert_eq!(final_node.game.winner, Some(champion));
    }

    // Without byes the champion also tops the standings outright: three wins
    // against at most two for anyone else.
    let (players, _, mut t) = single_elim(8, 4);
    let champion = play_out_min_wins(&mut t, &players, &points);
    assert_eq!(t.standings[0].id, champion);
    assert_eq!(t.standings[0].wins, 3);
}

#[test]
fn two_player_knockout_is_a_single_final() {
    let points = PointsConfig::default();
    let (players, ids, mut t) = single_elim(2, 5);
    let bracket = bracket_of(&t);
    assert_eq!(bracket.rounds.len(), 1);
    assert_eq!(bracket.rounds[0].len(), 1);

    let m = t.matches().next().unwrap().id;
    record_result(&mut t, &players, m, ids[1], false, &points).unwrap();
    assert_eq!(t.status, Status::Completed);
    assert_eq!(t.standings[0].id, ids[1]);
}

#[test]
fn byes_cannot_take_a_result() {
    let points = PointsConfig::default();
    let (players, _, mut t) = single_elim(3, 11);
    let (bye_id, occupant) = {
        let bye = bracket_of(&t)
            .rounds[0]
            .iter()
            .find(|n| n.bye)
            .expect("3 players leave one bye");
        (bye.game.id, bye.game.p1.unwrap())
    };
    assert_eq!(
        record_result(&mut t, &players, bye_id, occupant, false, &points).unwrap_err(),
        TournamentError::MatchAlreadyDecided
    );
}

#[test]
fn placeholder_with_empty_slot_rejects_results() {
    let points = PointsConfig::default();
    let (players, _, mut t) = single_elim(8, 13);
    let (final_id, some_player) = {
        let bracket = bracket_of(&t);
        (
            bracket.final_node().unwrap().game.id,
            bracket.rounds[0][0].game.p1.unwrap(),
        )
    };
    assert_eq!(
        record_result(&mut t, &players, final_id, some_player, false, &points).unwrap_err(),
        TournamentError::InvalidWinner
    );
}

#[test]
fn completed_bracket_rejects_further_results() {
    let points = PointsConfig::default();
    let (players, _, mut t) = single_elim(4, 21);
    play_out_min_wins(&mut t, &players, &points);
    assert_eq!(t.status, Status::Completed);

    let snapshot = t.clone();
    let final_id = bracket_of(&t).final_node().unwrap().game.id;
    let loser = bracket_of(&t).final_node().unwrap().game.loser().unwrap();
    assert_eq!(
        record_result(&mut t, &players, final_id, loser, false, &points).unwrap_err(),
        TournamentError::MatchAlreadyDecided
    );
    assert_eq!(t, snapshot);
}

#[test]
fn double_elimination_is_rejected_at_creation() {
    let (_, ids) = roster(4);
    assert_eq!(
        Tournament::new("Double", Format::DoubleElim, ids).unwrap_err(),
        TournamentError::UnsupportedFormat
    );
}
