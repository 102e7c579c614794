use crate::sjadam::prelude::*;

/// Dense adjacency for jump edges: one destination set per source square.
///
/// An edge `u -> v` means a piece standing on `u` can land on `v` in a single
/// jump over the occupied square between them. Rows are plain square sets, so
/// edge tests and successor scans cost one load each.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMatrix([BitBoard; NUM_SQUARES]);

impl Default for EdgeMatrix {
    fn default() -> Self {
        EdgeMatrix([BitBoard::EMPTY; NUM_SQUARES])
    }
}

impl EdgeMatrix {
    pub fn connect(&mut self, from: Square, to: Square) -> &mut Self {
        self.0[from.index()].insert(to);
        self
    }

    pub fn disconnect(&mut self, from: Square, to: Square) -> &mut Self {
        self.0[from.index()].remove(to);
        self
    }

    pub fn has(&self, from: Square, to: Square) -> bool {
        self.0[from.index()].contains(to)
    }

    /// The destination set of all single jumps out of `from`.
    pub fn successors(&self, from: Square) -> BitBoard {
        self.0[from.index()]
    }

    pub fn clear(&mut self) -> &mut Self {
        self.0 = [BitBoard::EMPTY; NUM_SQUARES];
        self
    }
}
