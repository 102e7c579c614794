use super::*;

/// A connected set of jump destinations, paired with the set of own pieces
/// that can open a chain into it. Destination sets of distinct components
/// never overlap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Component {
    pub sources: BitBoard,
    pub destinations: BitBoard,
}

impl JumpGraph {
    /// Enumerates every square reachable through a legal jump chain, grouped
    /// into components with their source pieces.
    pub fn components(&self) -> Vec<Component> {
        enumerate_components(
            self.own(),
            |from| self.own_landings(from),
            |from| self.enemy_landings(from),
        )
    }
}

/// Shared traversal core for the incremental graph and the stateless sweep.
///
/// Seeds are the first-jump landings of own pieces; a piece with no own-jump
/// out of its square starts no chain. From each unclaimed landing, a
/// depth-first search spans own-jumps only, which is what limits enemy jumps
/// to one per chain: landings over an enemy piece attach to the component as
/// leaves and are never expanded.
///
/// An enemy-hop leaf is skipped when its square has own-jumps of its own;
/// the own-jump traversal owns it then. Claiming the leaves in the visit map
/// is what keeps destination sets disjoint when two components can hop onto
/// the same square.
pub(crate) fn enumerate_components(
    own: BitBoard,
    own_landings: impl Fn(Square) -> BitBoard,
    enemy_landings: impl Fn(Square) -> BitBoard,
) -> Vec<Component> {
    let mut claimed = [0usize; NUM_SQUARES];
    let mut components: Vec<Component> = vec![];

    for seed in own.iter() {
        for entry in own_landings(seed).iter() {
            match claimed[entry.index()] {
                0 => {
                    // This component has not been visited.
                    let id = components.len() + 1;
                    let mut destinations = BitBoard::EMPTY;
                    let mut stack = vec![entry];
                    while let Some(at) = stack.pop() {
                        if claimed[at.index()] != 0 {
                            continue;
                        }
                        claimed[at.index()] = id;
                        destinations.insert(at);

                        for next in own_landings(at).iter() {
                            if claimed[next.index()] == 0 {
                                stack.push(next);
                            }
                        }
                        for hop in enemy_landings(at).iter() {
                            if claimed[hop.index()] == 0 && own_landings(hop).is_empty() {
                                claimed[hop.index()] = id;
                                destinations.insert(hop);
                            }
                        }
                    }

                    let mut sources = BitBoard::EMPTY;
                    sources.insert(seed);
                    components.push(Component { sources, destinations });
                }
                id => {
                    // This component has already been visited.
                    components[id - 1].sources.insert(seed);
                }
            }
        }
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn board(names: &[&str]) -> BitBoard {
        names.iter().map(|name| sq(name)).collect()
    }

    fn assert_disjoint(components: &[Component]) {
        let mut seen = BitBoard::EMPTY;
        for component in components {
            assert!((seen & component.destinations).is_empty());
            seen = seen | component.destinations;
        }
    }

    #[test]
    fn starting_position_components() {
        let graph = JumpGraph::new(START_OWN, START_ENEMY);
        let components = graph.components();

        // Every rank-3 square is its own single-square component, fed by the
        // rank-1 pieces that cross rank 2 into it.
        assert_eq!(components.len(), 8);
        assert_disjoint(&components);

        let destinations = components
            .iter()
            .flat_map(|c| c.destinations.iter().map(|d| d.notate()))
            .collect::<BTreeSet<_>>();
        assert_eq!(
            destinations,
            BTreeSet::from_iter(["a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3"].map(String::from))
        );

        let a3 = components.iter().find(|c| c.destinations.contains(sq("a3"))).unwrap();
        assert_eq!(a3.sources, board(&["a1", "c1"]));
        let d3 = components.iter().find(|c| c.destinations.contains(sq("d3"))).unwrap();
        assert_eq!(d3.sources, board(&["b1", "d1", "f1"]));
    }

    #[test]
    fn occupied_landing_blocks_the_jump() {
        // A piece on a3 can cross a2 down to a1, but nothing jumps from a1:
        // the a3 landing of the only line out of it is occupied.
        let graph = JumpGraph::new(board(&["a2", "a3"]), BitBoard::EMPTY);
        assert!(graph.own_landings(sq("a1")).is_empty());

        let components = graph.components();
        assert_eq!(components.len(), 2);
        assert_disjoint(&components);
        assert!(components.contains(&Component { sources: board(&["a3"]), destinations: board(&["a1"]) }));
        assert!(components.contains(&Component { sources: board(&["a2"]), destinations: board(&["a4"]) }));
    }

    #[test]
    fn enemy_hop_alone_is_not_a_seed() {
        // The only jump out of a2 crosses an enemy piece, so a2 seeds nothing.
        let own = board(&["a2"]);
        let enemy = board(&["a3"]);
        let graph = JumpGraph::new(own, enemy);

        assert_eq!(graph.enemy_landings(sq("a2")), board(&["a4"]));
        assert!(graph.components().is_empty());
    }

    #[test]
    fn enemy_hop_attaches_as_a_leaf() {
        // a1 crosses a2 to a3; from a3 one enemy hop over b3 reaches c3.
        // c3 has no onward own-jump, so it joins the component as a leaf.
        let graph = JumpGraph::new(board(&["a1", "a2"]), board(&["b3"]));
        let components = graph.components();

        assert_eq!(components.len(), 1);
        assert_eq!(components[0].sources, board(&["a1"]));
        assert_eq!(components[0].destinations, board(&["a3", "c3"]));
    }

    #[test]
    fn enemy_hop_with_onward_jumps_is_deferred() {
        // As above, but c3 now has an own-jump over c4: the enemy hop is
        // skipped and c3 belongs to whichever traversal reaches it by
        // own-jumps. No seed does here, so it appears nowhere.
        let graph = JumpGraph::new(board(&["a1", "a2", "c4"]), board(&["b3"]));
        let components = graph.components();

        assert_disjoint(&components);
        for component in &components {
            assert!(!component.destinations.contains(sq("c3")));
        }
    }

    #[test]
    fn contested_enemy_hop_stays_in_one_component() {
        // Both a1 (via a3) and e1 (via e3) can end a chain on c3, each over a
        // different enemy pawn. The square lands in exactly one destination
        // set; the later component keeps its own-jump destinations only.
        let own = board(&["a1", "a2", "e1", "e2"]);
        let enemy = board(&["b3", "d3"]);
        let components = JumpGraph::new(own, enemy).components();

        assert_eq!(components.len(), 2);
        assert_disjoint(&components);
        let holders = components
            .iter()
            .filter(|c| c.destinations.contains(sq("c3")))
            .count();
        assert_eq!(holders, 1);
    }

    #[test]
    fn seeds_with_first_jumps_appear_as_sources() {
        let graph = JumpGraph::new(START_OWN, START_ENEMY);
        let components = graph.components();

        let sources = components.iter().fold(BitBoard::EMPTY, |acc, c| acc | c.sources);
        for piece in graph.own().iter() {
            if !graph.own_landings(piece).is_empty() {
                assert!(sources.contains(piece), "{} missing", piece.notate());
            }
        }
    }

    #[test]
    fn destinations_are_empty_squares() {
        let graph = JumpGraph::new(START_OWN, START_ENEMY);
        for component in graph.components() {
            assert!((component.destinations & graph.complete()).is_empty());
        }
    }

    #[test]
    fn flip_is_an_involution() {
        let mut graph = JumpGraph::new(START_OWN, START_ENEMY);
        graph.play(sq("d2"), sq("d3")).unwrap();

        let before = graph.clone();
        graph.flip();
        assert_ne!(graph, before);
        graph.flip();
        assert_eq!(graph, before);
    }

    #[test]
    fn flip_matches_swapped_masks() {
        let mut graph = JumpGraph::new(START_OWN, START_ENEMY);
        graph.play(sq("d2"), sq("d3")).unwrap();
        graph.play(sq("e2"), sq("e4")).unwrap();

        let (own, enemy) = (graph.own(), graph.enemy());
        graph.flip();

        let fresh = JumpGraph::new(enemy.mirror(), own.mirror());
        assert_eq!(graph, fresh);
        assert_eq!(graph.components(), fresh.components());
    }
}
