//! Offset coordinates: `(col, row)` positions for rectangular layouts of hexes.
//!
//! Offset coordinates carry no algebra of their own; they exist to build and display
//! rectangular regions. All arithmetic happens on [`Cube`] coordinates.
//!
//! See [reference](https://www.redblobgames.com/grids/hexagons/#conversions-offset).

use std::convert::TryFrom;

use num::Integer;
use serde::{Deserialize, Serialize};

use super::cube::Cube;

/// A `(col, row)` position in some offset [`Layout`].
///
/// The same value names a different hex depending on the layout and [`Shift`] it is
/// interpreted with.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display("({col}, {row})")]
pub struct Offset {
    pub col: i32,
    pub row: i32,
}

/// Which parity of row (or column) is shoved half a hex over.
///
/// Converts to and from the integers `0` and `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Shift {
    /// `0`: odd rows (or columns) are shoved.
    #[default]
    Odd,
    /// `1`: even rows (or columns) are shoved.
    Even,
}

impl Shift {
    #[inline]
    fn factor(self) -> i32 {
        match self {
            Shift::Odd => 0,
            Shift::Even => 1,
        }
    }

    /// Half of `n`, adjusted by this shift for the parity of `n`, rounded toward negative infinity.
    ///
    /// `n & 1` is the low bit, which is the parity even for negative `n`.
    #[inline]
    fn half(self, n: i32) -> i32 {
        Integer::div_floor(&(n + self.factor() * (n & 1)), &2)
    }
}

impl From<Shift> for i32 {
    fn from(shift: Shift) -> i32 {
        shift.factor()
    }
}

impl TryFrom<i32> for Shift {
    type Error = InvalidShift;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Shift::Odd),
            1 => Ok(Shift::Even),
            _ => Err(InvalidShift(value)),
        }
    }
}

/// A shift was neither `0` nor `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid offset shift {0}: must be 0 or 1")]
pub struct InvalidShift(pub i32);

/// Orientation of the offset grid.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Layout {
    /// Pointy-top hexes; alternate rows are shoved.
    #[default]
    #[display("r_offset")]
    #[serde(rename = "r_offset")]
    ROffset,
    /// Flat-top hexes; alternate columns are shoved.
    #[display("q_offset")]
    #[serde(rename = "q_offset")]
    QOffset,
}

impl Layout {
    pub fn to_offset(self, cube: Cube, shift: Shift) -> Offset {
        match self {
            Layout::ROffset => Offset::roffset_from_cube(cube, shift),
            Layout::QOffset => Offset::qoffset_from_cube(cube, shift),
        }
    }

    pub fn to_cube(self, offset: Offset, shift: Shift) -> Cube {
        match self {
            Layout::ROffset => offset.roffset_to_cube(shift),
            Layout::QOffset => offset.qoffset_to_cube(shift),
        }
    }
}

impl Offset {
    pub const fn new(col: i32, row: i32) -> Offset {
        Offset { col, row }
    }

    /// Position of `cube` in a pointy-top layout.
    pub fn roffset_from_cube(cube: Cube, shift: Shift) -> Offset {
        Offset {
            col: cube.q() + shift.half(cube.r()),
            row: cube.r(),
        }
    }

    /// Hex at this position in a pointy-top layout.
    pub fn roffset_to_cube(self, shift: Shift) -> Cube {
        Cube::axial(self.col - shift.half(self.row), self.row)
    }

    /// Position of `cube` in a flat-top layout.
    pub fn qoffset_from_cube(cube: Cube, shift: Shift) -> Offset {
        Offset {
            col: cube.q(),
            row: cube.r() + shift.half(cube.q()),
        }
    }

    /// Hex at this position in a flat-top layout.
    pub fn qoffset_to_cube(self, shift: Shift) -> Cube {
        Cube::axial(self.col, self.row - shift.half(self.col))
    }
}
