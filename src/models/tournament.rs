//! Tournament: format, participants, schedule, and lifecycle status.

use crate::models::bracket::Bracket;
use crate::models::game::{Match, MatchId};
use crate::models::player::{PlayerId, PlayerRecord};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during engine operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Fewer than 2 unique participants at creation.
    InsufficientParticipants,
    /// No match with this id exists in the tournament's schedule.
    UnknownMatch(MatchId),
    /// Winner is not one of the match's participants, or a slot is unfilled.
    InvalidWinner,
    /// The match already has a recorded result; results are immutable.
    MatchAlreadyDecided,
    /// Schedule generation is not implemented for this format.
    UnsupportedFormat,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InsufficientParticipants => {
                write!(f, "Need at least 2 players to create a tournament")
            }
            TournamentError::UnknownMatch(_) => write!(f, "Match not found"),
            TournamentError::InvalidWinner => {
                write!(f, "Winner must be one of the match's two players")
            }
            TournamentError::MatchAlreadyDecided => {
                write!(f, "Match already has a result")
            }
            TournamentError::UnsupportedFormat => {
                write!(f, "Tournament format is not supported")
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Scheduling format chosen at creation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Every pair meets exactly once (circle method).
    #[default]
    RoundRobin,
    /// Knockout bracket, power-of-two sized, byes auto-advance.
    SingleElim,
    /// Not implemented: rejected at generation time.
    DoubleElim,
}

/// Lifecycle of a tournament. Active -> Completed, never back.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Active,
    Completed,
}

/// One round-robin round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub matches: Vec<Match>,
}

/// The format-appropriate schedule container. Exactly one shape exists per
/// tournament; the untagged serde form keeps the persisted document's
/// `rounds` / `bracket` field names.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Schedule {
    RoundRobin { rounds: Vec<Round> },
    Elimination { bracket: Bracket },
}

/// Full tournament state. Created atomically with its schedule; matches then
/// mutate in place as results come in, and the status flips to Completed when
/// the schedule is decided.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    #[serde(rename = "type")]
    pub format: Format,
    /// Declared participants, in sign-up order. Unique; may shrink while the
    /// tournament is active if a player leaves the roster, never grows.
    pub participants: Vec<PlayerId>,
    pub created_at: DateTime<Utc>,
    pub status: Status,
    #[serde(flatten)]
    pub schedule: Schedule,
    /// Ranked snapshot cached at completion (default order: points, then
    /// wins). Empty until then; recomputed lazily by the standings accessor.
    #[serde(default)]
    pub standings: Vec<PlayerRecord>,
}

impl Tournament {
    /// Create a tournament with a fully generated schedule. Fails without
    /// side effects when there are fewer than 2 unique participants or the
    /// format has no generator. Elimination seeding uses the thread rng.
    pub fn new(
        name: impl Into<String>,
        format: Format,
        participants: Vec<PlayerId>,
    ) -> Result<Self, TournamentError> {
        Self::new_with_rng(name, format, participants, &mut rand::thread_rng())
    }

    /// Like [`Tournament::new`] but with an injected randomness source, so
    /// elimination seeding can be made deterministic.
    pub fn new_with_rng(
        name: impl Into<String>,
        format: Format,
        participants: Vec<PlayerId>,
        rng: &mut impl Rng,
    ) -> Result<Self, TournamentError> {
        let mut unique: Vec<PlayerId> = Vec::with_capacity(participants.len());
        for pid in participants {
            if !unique.contains(&pid) {
                unique.push(pid);
            }
        }
        let schedule = crate::logic::generate_schedule_with_rng(format, &unique, rng)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            format,
            participants: unique,
            created_at: Utc::now(),
            status: Status::Active,
            schedule,
            standings: Vec::new(),
        })
    }

    /// All matches in schedule order (round-robin matches or bracket nodes).
    pub fn matches(&self) -> Box<dyn Iterator<Item = &Match> + '_> {
        match &self.schedule {
            Schedule::RoundRobin { rounds } => {
                Box::new(rounds.iter().flat_map(|r| r.matches.iter()))
            }
            Schedule::Elimination { bracket } => Box::new(bracket.nodes().map(|n| &n.game)),
        }
    }

    /// Look up a match anywhere in the schedule.
    pub fn find_match(&self, id: MatchId) -> Option<&Match> {
        self.matches().find(|m| m.id == id)
    }

    /// Matches awaiting a result: both slots filled, no winner. Byes never
    /// appear here (their winner is pre-set at generation).
    pub fn open_matches(&self) -> Vec<&Match> {
        self.matches().filter(|m| m.is_open()).collect()
    }
}
