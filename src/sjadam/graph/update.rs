use super::matrix::EdgeMatrix;
use super::*;

/// Add every edge that jumps over `over`. Each of the four lines through the
/// square contributes up to two directed edges, one per landing square that
/// is empty on the complete board.
fn add_edges_over(edges: &mut EdgeMatrix, over: Square, complete: BitBoard) {
    for direction in LINE_DIRECTIONS.iter() {
        let ahead = over + direction;
        let behind = over - direction;
        if !ahead.in_bounds() || !behind.in_bounds() {
            continue;
        }
        let (ahead, behind) = (ahead.coerce(), behind.coerce());
        if !complete.contains(behind) {
            edges.connect(ahead, behind);
        }
        if !complete.contains(ahead) {
            edges.connect(behind, ahead);
        }
    }
}

/// Remove every edge that jumps over `over`, in both directions. No occupancy
/// check; removal is idempotent.
fn remove_edges_over(edges: &mut EdgeMatrix, over: Square) {
    for direction in LINE_DIRECTIONS.iter() {
        let ahead = over + direction;
        let behind = over - direction;
        if !ahead.in_bounds() || !behind.in_bounds() {
            continue;
        }
        let (ahead, behind) = (ahead.coerce(), behind.coerce());
        edges.disconnect(ahead, behind);
        edges.disconnect(behind, ahead);
    }
}

impl JumpGraph {
    /// Clears both edge sets and rescans the masks. The enemy graph is built
    /// in the opponent's frame by mirroring the masks once up front.
    pub(super) fn rebuild(&mut self) {
        self.own_edges.clear();
        self.enemy_edges.clear();

        let complete = self.complete();
        for over in self.own.iter() {
            add_edges_over(&mut self.own_edges, over, complete);
        }

        let (enemy, complete) = (self.enemy.mirror(), complete.mirror());
        for over in enemy.iter() {
            add_edges_over(&mut self.enemy_edges, over, complete);
        }
    }

    /// Moves one of the mover's pieces with no occupancy checks; engine use only.
    ///
    /// The masks are brought up to date first, then the edge sets: jumps over
    /// the vacated square go away, jumps over the landing square appear (and,
    /// on a capture, the enemy jumps over it disappear), the vacated square
    /// becomes a landing square, and the occupied one stops being one.
    pub fn play_unchecked(&mut self, from: Square, to: Square) -> () {
        debug_assert!(self.own.contains(from), "{} is not own-occupied", from.notate());
        debug_assert!(!self.own.contains(to), "{} is own-occupied", to.notate());

        let capture = self.enemy.contains(to);
        self.own.remove(from);
        self.own.insert(to);
        if capture {
            self.enemy.remove(to);
        }

        remove_edges_over(&mut self.own_edges, from);
        if capture {
            remove_edges_over(&mut self.enemy_edges, to.mirror());
        }
        let complete = self.complete();
        add_edges_over(&mut self.own_edges, to, complete);
        self.add_edges_into(from);
        self.remove_edges_into(to);
    }

    /// Add every edge landing on a newly vacated square, for both sides.
    fn add_edges_into(&mut self, to: Square) {
        for direction in ALL_DIRECTIONS.iter() {
            let from = to + direction + direction;
            if !from.in_bounds() {
                continue;
            }
            let from = from.coerce();
            let over = (to + direction).coerce();
            if self.own.contains(over) {
                self.own_edges.connect(from, to);
            } else if self.enemy.contains(over) {
                self.connect_enemy(from, to);
            }
        }
    }

    /// Remove every edge landing on a newly occupied square, for both sides.
    fn remove_edges_into(&mut self, to: Square) {
        for direction in ALL_DIRECTIONS.iter() {
            let from = to + direction + direction;
            if !from.in_bounds() {
                continue;
            }
            let from = from.coerce();
            self.own_edges.disconnect(from, to);
            self.disconnect_enemy(from, to);
        }
    }

    // The enemy edge set lives in the opponent's frame; square arguments are
    // mirrored here and nowhere else.

    fn connect_enemy(&mut self, from: Square, to: Square) {
        self.enemy_edges.connect(from.mirror(), to.mirror());
    }

    fn disconnect_enemy(&mut self, from: Square, to: Square) {
        self.enemy_edges.disconnect(from.mirror(), to.mirror());
    }
}
