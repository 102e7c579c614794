/*
 *  A jump-reachability engine for the chess variant Sjadam.
 */

pub mod bitboard;
pub(crate) mod consts;
pub mod graph;
pub mod notation;
pub mod scan;
pub mod squares;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        bitboard::BitBoard,
        consts::*,
        graph::{Component, JumpGraph},
        notation::*,
        scan::scan_components,
        squares::{self, *},
    };
}
