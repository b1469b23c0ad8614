//! The nine named tie-out points of a tarp and a selection cursor over them.

use crate::topology::GridIndex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of tie-outs on every tarp.
pub const TIE_OUT_COUNT: usize = 9;

/// A named anchor: corner, edge midpoint, or centre of the sheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TieOut {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    Center,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl TieOut {
    /// All tie-outs in canonical row-major order.
    pub const ALL: [TieOut; TIE_OUT_COUNT] = [
        TieOut::TopLeft,
        TieOut::TopCenter,
        TieOut::TopRight,
        TieOut::MiddleLeft,
        TieOut::Center,
        TieOut::MiddleRight,
        TieOut::BottomLeft,
        TieOut::BottomCenter,
        TieOut::BottomRight,
    ];

    /// Tie-out at a driver selection slot; the slot wraps modulo 9.
    pub const fn from_selection(slot: usize) -> TieOut {
        TieOut::ALL[slot % TIE_OUT_COUNT]
    }

    /// Position of this tie-out in [`TieOut::ALL`].
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// Lattice coordinate of this tie-out on an N×N grid.
    ///
    /// Midpoints use `(n - 1) / 2`, so on even grids they sit one step
    /// towards the top-left of the true centre.
    pub const fn grid_index(self, n: usize) -> GridIndex {
        let mid = (n - 1) / 2;
        let end = n - 1;
        let (row, col) = match self {
            TieOut::TopLeft => (0, 0),
            TieOut::TopCenter => (0, mid),
            TieOut::TopRight => (0, end),
            TieOut::MiddleLeft => (mid, 0),
            TieOut::Center => (mid, mid),
            TieOut::MiddleRight => (mid, end),
            TieOut::BottomLeft => (end, 0),
            TieOut::BottomCenter => (end, mid),
            TieOut::BottomRight => (end, end),
        };
        GridIndex::new(row, col)
    }
}

/// Grid coordinates of the nine tie-outs, in canonical order.
pub fn tie_out_indices(n: usize) -> [GridIndex; TIE_OUT_COUNT] {
    TieOut::ALL.map(|t| t.grid_index(n))
}

/// Driver-side selection over the tie-outs, stepping left/right with wrap-around.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TieOutCursor {
    slot: usize,
}

impl TieOutCursor {
    /// Cursor resting on the centre tie-out.
    pub const fn new() -> Self {
        TieOutCursor { slot: TieOut::Center.slot() }
    }

    pub const fn at(tie_out: TieOut) -> Self {
        TieOutCursor { slot: tie_out.slot() }
    }

    pub const fn selected(&self) -> TieOut {
        TieOut::from_selection(self.slot)
    }

    pub fn next(&mut self) -> TieOut {
        self.slot = (self.slot + 1) % TIE_OUT_COUNT;
        self.selected()
    }

    pub fn prev(&mut self) -> TieOut {
        self.slot = (self.slot + TIE_OUT_COUNT - 1) % TIE_OUT_COUNT;
        self.selected()
    }
}

impl Default for TieOutCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_follow_canonical_order() {
        for (i, t) in TieOut::ALL.iter().enumerate() {
            assert_eq!(t.slot(), i);
            assert_eq!(TieOut::from_selection(i), *t);
        }
        assert_eq!(TieOut::from_selection(13), TieOut::Center);
    }

    #[test]
    fn two_point_grid_collapses_midpoints_onto_corners() {
        let idx = tie_out_indices(2);
        assert_eq!(idx[0], GridIndex::new(0, 0));
        assert_eq!(idx[1], GridIndex::new(0, 0));
        assert_eq!(idx[4], GridIndex::new(0, 0));
        assert_eq!(idx[8], GridIndex::new(1, 1));
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut cursor = TieOutCursor::at(TieOut::TopLeft);
        assert_eq!(cursor.prev(), TieOut::BottomRight);
        assert_eq!(cursor.next(), TieOut::TopLeft);
        assert_eq!(TieOutCursor::default().selected(), TieOut::Center);
    }
}
