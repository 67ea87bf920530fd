//! Elimination bracket: layers of nodes halving down to a single decider.

use crate::models::game::{Match, MatchId};
use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// One slot in the bracket tree. Layer 0 nodes are seeded matches or byes;
/// later layers start as placeholders and are filled by winner propagation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketNode {
    #[serde(flatten)]
    pub game: Match,
    /// True for auto-resolved byes (winner pre-set, never playable).
    #[serde(default)]
    pub bye: bool,
    /// Ids of the two source nodes whose winners feed this node (absent on layer 0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<[MatchId; 2]>,
    /// Id of the node this node's winner advances to (absent on the final node).
    /// Stored at generation time so propagation never relies on positional
    /// arithmetic over the layer vectors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<MatchId>,
}

impl BracketNode {
    /// Layer-0 node pairing two seeded players.
    pub fn pairing(p1: PlayerId, p2: PlayerId) -> Self {
        Self {
            game: Match::new(p1, p2),
            bye: false,
            from: None,
            parent: None,
        }
    }

    /// Layer-0 bye: the sole occupant advances without playing.
    pub fn bye(p: PlayerId) -> Self {
        Self {
            game: Match::bye(p),
            bye: true,
            from: None,
            parent: None,
        }
    }

    /// Placeholder node awaiting winners from two source nodes.
    pub fn placeholder(from: [MatchId; 2]) -> Self {
        Self {
            game: Match::pending(),
            bye: false,
            from: Some(from),
            parent: None,
        }
    }
}

/// The full bracket. Layer sizes strictly halve; the last layer holds exactly
/// one node, the tournament decider.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub rounds: Vec<Vec<BracketNode>>,
}

impl Bracket {
    pub fn node_mut(&mut self, id: MatchId) -> Option<&mut BracketNode> {
        self.rounds
            .iter_mut()
            .flat_map(|r| r.iter_mut())
            .find(|n| n.game.id == id)
    }

    /// All nodes, layer by layer.
    pub fn nodes(&self) -> impl Iterator<Item = &BracketNode> {
        self.rounds.iter().flat_map(|r| r.iter())
    }

    /// The single decider node in the last layer.
    pub fn final_node(&self) -> Option<&BracketNode> {
        self.rounds.last().and_then(|r| r.first())
    }

    /// Put `player` into the first empty slot of node `id` (p1, else p2).
    /// Returns false if the node does not exist or both slots are taken.
    pub fn fill_slot(&mut self, id: MatchId, player: PlayerId) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        if node.game.p1.is_none() {
            node.game.p1 = Some(player);
            true
        } else if node.game.p2.is_none() {
            node.game.p2 = Some(player);
            true
        } else {
            false
        }
    }
}
