pub(crate) mod components;
pub(crate) mod matrix;
pub(crate) mod update;

use crate::sjadam::prelude::*;

pub use components::Component;
use matrix::EdgeMatrix;

/// The incremental jump-reachability engine.
///
/// Two edge sets are maintained against the occupancy masks: the own-jump
/// graph (jumps over the mover's pieces) and the enemy-jump graph (jumps over
/// the opponent's pieces). The enemy graph is stored in the opponent's
/// mirrored frame, so swapping perspectives never rewrites an edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JumpGraph {
    own_edges: EdgeMatrix,
    enemy_edges: EdgeMatrix,
    own: BitBoard,
    enemy: BitBoard,
}

impl JumpGraph {
    /// Builds the graphs for the given occupancy masks.
    pub fn new(own: BitBoard, enemy: BitBoard) -> JumpGraph {
        let mut graph = JumpGraph {
            own_edges: EdgeMatrix::default(),
            enemy_edges: EdgeMatrix::default(),
            own: BitBoard::EMPTY,
            enemy: BitBoard::EMPTY,
        };
        graph.rebind(own, enemy);
        graph
    }

    /// Attaches new occupancy masks and rebuilds both graphs from scratch.
    pub fn rebind(&mut self, own: BitBoard, enemy: BitBoard) -> &mut Self {
        self.own = own;
        self.enemy = enemy;
        self.rebuild();
        self
    }

    /// Swaps the sides of the graph. The edge sets trade roles untouched;
    /// the masks trade roles and move into the new mover's frame.
    pub fn flip(&mut self) -> &mut Self {
        std::mem::swap(&mut self.own_edges, &mut self.enemy_edges);
        let (own, enemy) = (self.own, self.enemy);
        self.own = enemy.mirror();
        self.enemy = own.mirror();
        self
    }

    /// Moves one of the mover's pieces from one square to another, if the
    /// occupancy allows it. Landing on an enemy square is a capture.
    pub fn play(&mut self, from: Square, to: Square) -> Result<()> {
        if !self.own.contains(from) {
            return Err(anyhow!("no piece to move on {}", from.notate()));
        }
        if self.own.contains(to) {
            return Err(anyhow!("{} is occupied by the moving side", to.notate()));
        }
        self.play_unchecked(from, to);
        Ok(())
    }

    /// The mover's occupancy mask.
    pub fn own(&self) -> BitBoard {
        self.own
    }

    /// The opponent's occupancy mask.
    pub fn enemy(&self) -> BitBoard {
        self.enemy
    }

    /// The union of both occupancy masks.
    pub fn complete(&self) -> BitBoard {
        self.own | self.enemy
    }

    /// Single-jump landings out of `from` over the mover's pieces.
    pub fn own_landings(&self, from: Square) -> BitBoard {
        self.own_edges.successors(from)
    }

    /// Single-jump landings out of `from` over the opponent's pieces.
    pub fn enemy_landings(&self, from: Square) -> BitBoard {
        self.enemy_edges.successors(from.mirror()).mirror()
    }
}
