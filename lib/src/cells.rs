//! The tri-state cell model.
//!
//! A cell carries one of four values, encoded as two bits `(bit0, bit1)`:
//! `bit1` says whether the cell is still uncertain, and `bit0` is either the
//! live bit (when certain) or the flavour of uncertainty (when not).
//!
//! ```text
//! Off            = (0, 0)
//! On             = (1, 0)
//! UnknownStable  = (0, 1)
//! Unknown        = (1, 1)
//! ```

use std::fmt;

/// The coordinates of a cell within a universe, `(x, y)`, both 0-indexed.
pub type Coord = (i32, i32);

/// A single cell's value.
///
/// `UnknownStable` and `Unknown` both count as "uncertain" to the evolution
/// kernel; they are distinguished only by [`Cell::may_be_chosen`], which the
/// search driver uses to find predecessor cells it is allowed to commit.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Certainly dead.
    Off,
    /// Certainly alive.
    On,
    /// Undetermined, but must resolve to the same value in every generation
    /// of the still-life background.
    UnknownStable,
    /// Undetermined; the kernel produced this when the raw step could not
    /// be resolved regardless of how its unknown inputs settle.
    Unknown,
}

use Cell::{Off, On, Unknown, UnknownStable};

impl Cell {
    /// The `(bit0, bit1)` encoding described in the module docs.
    pub fn bits(self) -> (bool, bool) {
        match self {
            Off => (false, false),
            On => (true, false),
            UnknownStable => (false, true),
            Unknown => (true, true),
        }
    }

    /// Reconstructs a cell from its bit encoding.
    pub fn from_bits(bit0: bool, bit1: bool) -> Self {
        match (bit0, bit1) {
            (false, false) => Off,
            (true, false) => On,
            (false, true) => UnknownStable,
            (true, true) => Unknown,
        }
    }

    /// `true` for [`Cell::UnknownStable`] or [`Cell::Unknown`].
    pub fn is_uncertain(self) -> bool {
        matches!(self, UnknownStable | Unknown)
    }

    /// Whether a predecessor cell with this value is eligible to be chosen
    /// by [`crate::search`] — only background cells not yet committed.
    pub fn may_be_chosen(self) -> bool {
        matches!(self, UnknownStable)
    }

    /// The known boolean value of a certain cell, or `None` if uncertain.
    pub fn known(self) -> Option<bool> {
        match self {
            Off => Some(false),
            On => Some(true),
            UnknownStable | Unknown => None,
        }
    }

    /// `true` only for [`Cell::On`] (a definite live cell).
    pub fn is_on(self) -> bool {
        matches!(self, On)
    }

    /// Builds a committed cell from a boolean value.
    pub fn from_bool(alive: bool) -> Self {
        if alive {
            On
        } else {
            Off
        }
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Off => "Off",
            On => "On",
            UnknownStable => "UnknownStable",
            Unknown => "Unknown",
        };
        write!(f, "{s}")
    }
}

/// The 8 compass offsets around a cell, in the fixed priority order the
/// search uses when looking for a predecessor: orthogonals first
/// (E, S, W, N), then diagonals (SW, SE, NW, NE).
///
/// `choose_cell` additionally tries `(0, 0)` before any of these.
pub const ORTHOGONAL_THEN_DIAGONAL: [Coord; 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// All 8 neighbour offsets, in row-major order, used by the evolution
/// kernel (order does not matter there, only completeness).
pub const NEIGHBOURS: [Coord; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];
