use crate::sjadam::graph::components::enumerate_components;
use crate::sjadam::prelude::*;

/// Single-jump landings out of `from`, crossing only pieces in `over` and
/// landing only on squares empty in `complete`.
fn jump_landings(from: Square, over: BitBoard, complete: BitBoard) -> BitBoard {
    let mut landings = BitBoard::EMPTY;
    for direction in ALL_DIRECTIONS.iter() {
        let to = from + direction + direction;
        if !to.in_bounds() {
            continue;
        }
        let to = to.coerce();
        let between = (from + direction).coerce();
        if over.contains(between) && !complete.contains(to) {
            landings.insert(to);
        }
    }
    landings
}

/// Enumerates jump components straight off the occupancy masks, with no
/// stored graph. Slower per query than [`JumpGraph::components`], but needs
/// no upkeep; it also serves as the rebuild oracle for the incremental
/// engine.
pub fn scan_components(own: BitBoard, enemy: BitBoard) -> Vec<Component> {
    let complete = own | enemy;
    enumerate_components(
        own,
        |from| jump_landings(from, own, complete),
        |from| jump_landings(from, enemy, complete),
    )
}
