use std::str::FromStr;

use super::cube::Rotation;

/// Direction in a hexagonal coordinate system
///
/// Assumes pointy-top tiles: rows are horizontal, so there is no north or south.
///
/// Displays and parses as `snake_case`: `north_east`, `east`, ...
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display(style = "snake_case")]
pub enum Direction {
    NorthEast,
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Iterate through all `Direction`s, clockwise from `NorthEast`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::NorthEast), |direction| {
            use Direction::*;

            match direction {
                NorthEast => Some(East),
                East => Some(SouthEast),
                SouthEast => Some(SouthWest),
                SouthWest => Some(West),
                West => Some(NorthWest),
                NorthWest => None,
            }
        })
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Direction {
        use Direction::*;

        match self {
            NorthEast => SouthWest,
            East => West,
            SouthEast => NorthWest,
            SouthWest => NorthEast,
            West => East,
            NorthWest => SouthEast,
        }
    }

    /// The direction reached by turning this one 60 degrees.
    ///
    /// Agrees with [`Cube::rotate`][super::Cube::rotate] on the unit vectors.
    pub fn rotated(self, rotation: Rotation) -> Direction {
        use Direction::*;

        match (rotation, self) {
            (Rotation::Left, NorthEast) => East,
            (Rotation::Left, East) => SouthEast,
            (Rotation::Left, SouthEast) => SouthWest,
            (Rotation::Left, SouthWest) => West,
            (Rotation::Left, West) => NorthWest,
            (Rotation::Left, NorthWest) => NorthEast,
            (Rotation::Right, NorthEast) => NorthWest,
            (Rotation::Right, East) => NorthEast,
            (Rotation::Right, SouthEast) => East,
            (Rotation::Right, SouthWest) => SouthEast,
            (Rotation::Right, West) => SouthWest,
            (Rotation::Right, NorthWest) => West,
        }
    }
}

/// A sequence of steps, written as direction names separated by commas or whitespace.
///
/// `"north_west, west south_west"` parses to three steps. An empty string is an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Directions(pub Vec<Direction>);

impl FromStr for Directions {
    type Err = ParseDirectionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse()
                    .map_err(|_| ParseDirectionsError(token.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Directions)
    }
}

impl IntoIterator for Directions {
    type Item = Direction;
    type IntoIter = std::vec::IntoIter<Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A step in a path was not a direction name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hex direction {0:?}")]
pub struct ParseDirectionsError(pub String);
