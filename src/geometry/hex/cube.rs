use std::{
    ops::{Add, AddAssign, Mul, Neg, Sub},
    str::FromStr,
};

use super::direction::Direction;

/// Cube hex coordinates.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
///
/// Constraint: `q + r + s == 0`
///
/// The fields are private so that the constraint holds for every value of this type.
/// [`Cube::new`] is the checked entry point; [`Cube::axial`] derives `s` and cannot fail.
/// Arithmetic assumes its inputs already satisfy the constraint and does not re-check it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash, parse_display::Display,
)]
#[display("({q}, {r}, {s})")]
pub struct Cube {
    q: i32,
    r: i32,
    s: i32,
}

/// Which way to turn by 60 degrees about the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, parse_display::Display, parse_display::FromStr)]
#[display(style = "snake_case")]
pub enum Rotation {
    Left,
    Right,
}

impl Cube {
    pub const ORIGIN: Cube = Cube { q: 0, r: 0, s: 0 };

    /// Create a coordinate, checking that `q + r + s == 0`.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Cube, InvalidCoordinate> {
        // summed in i64 so that no triple can overflow or wrap to zero
        if q as i64 + r as i64 + s as i64 == 0 {
            Ok(Cube { q, r, s })
        } else {
            Err(InvalidCoordinate { q, r, s })
        }
    }

    /// Create a coordinate from its two axial components; `s` is derived.
    pub const fn axial(q: i32, r: i32) -> Cube {
        Cube { q, r, s: -q - r }
    }

    #[inline]
    pub fn q(self) -> i32 {
        self.q
    }

    #[inline]
    pub fn r(self) -> i32 {
        self.r
    }

    #[inline]
    pub fn s(self) -> i32 {
        self.s
    }

    /// Unit vector pointing in `direction`.
    pub const fn direction(direction: Direction) -> Cube {
        match direction {
            Direction::NorthEast => Cube { q: 1, r: -1, s: 0 },
            Direction::East => Cube { q: 1, r: 0, s: -1 },
            Direction::SouthEast => Cube { q: 0, r: 1, s: -1 },
            Direction::SouthWest => Cube { q: -1, r: 1, s: 0 },
            Direction::West => Cube { q: -1, r: 0, s: 1 },
            Direction::NorthWest => Cube { q: 0, r: -1, s: 1 },
        }
    }

    /// The adjacent tile in `direction`.
    pub fn neighbour(self, direction: Direction) -> Cube {
        self + Cube::direction(direction)
    }

    /// All six adjacent tiles, in [`Direction::iter`] order.
    pub fn neighbours(self) -> impl 'static + Iterator<Item = Cube> {
        Direction::iter().map(move |direction| self.neighbour(direction))
    }

    /// Rotate this coordinate by 60 degrees about the origin.
    ///
    /// Six rotations in the same direction produce the original coordinate.
    pub fn rotate(self, rotation: Rotation) -> Cube {
        let Cube { q, r, s } = self;
        match rotation {
            Rotation::Left => Cube {
                q: -r,
                r: -s,
                s: -q,
            },
            Rotation::Right => Cube {
                q: -s,
                r: -q,
                s: -r,
            },
        }
    }

    /// Number of steps between this coordinate and the origin.
    pub fn length(self) -> i32 {
        // the sum of absolute values is always even when the constraint holds
        (self.q.abs() + self.r.abs() + self.s.abs()) / 2
    }

    /// Number of steps between two coordinates.
    pub fn distance(self, other: Cube) -> i32 {
        (self - other).length()
    }

    /// Follow a sequence of steps from this coordinate.
    pub fn walk(self, directions: impl IntoIterator<Item = Direction>) -> Cube {
        directions.into_iter().fold(self, |position, direction| position + direction)
    }
}

impl Add for Cube {
    type Output = Cube;

    fn add(self, rhs: Cube) -> Self::Output {
        Cube {
            q: self.q + rhs.q,
            r: self.r + rhs.r,
            s: self.s + rhs.s,
        }
    }
}

impl Sub for Cube {
    type Output = Cube;

    fn sub(self, rhs: Cube) -> Self::Output {
        Cube {
            q: self.q - rhs.q,
            r: self.r - rhs.r,
            s: self.s - rhs.s,
        }
    }
}

impl Neg for Cube {
    type Output = Cube;

    fn neg(self) -> Self::Output {
        Cube {
            q: -self.q,
            r: -self.r,
            s: -self.s,
        }
    }
}

impl Mul<i32> for Cube {
    type Output = Cube;

    fn mul(self, k: i32) -> Self::Output {
        Cube {
            q: self.q * k,
            r: self.r * k,
            s: self.s * k,
        }
    }
}

impl AddAssign<Direction> for Cube {
    fn add_assign(&mut self, rhs: Direction) {
        *self = self.neighbour(rhs);
    }
}

impl Add<Direction> for Cube {
    type Output = Cube;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

#[derive(parse_display::FromStr)]
#[display("({q}, {r}, {s})")]
struct RawCube {
    q: i32,
    r: i32,
    s: i32,
}

impl FromStr for Cube {
    type Err = ParseCubeError;

    /// Parse the `(q, r, s)` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let RawCube { q, r, s } = s.trim().parse()?;
        Cube::new(q, r, s).map_err(Into::into)
    }
}

/// The components of a cube coordinate did not sum to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid cube coordinate ({q}, {r}, {s}): q + r + s must be 0")]
pub struct InvalidCoordinate {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseCubeError {
    #[error("malformed cube coordinate")]
    Malformed(#[from] parse_display::ParseError),
    #[error(transparent)]
    Invalid(#[from] InvalidCoordinate),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates() {
        let cube = Cube::new(1, -2, 1).unwrap();
        assert_eq!((cube.q(), cube.r(), cube.s()), (1, -2, 1));

        assert_eq!(
            Cube::new(4, -2, 1),
            Err(InvalidCoordinate { q: 4, r: -2, s: 1 })
        );
    }

    #[test]
    fn test_new_rejects_overflowing_sums() {
        assert_eq!(
            Cube::new(i32::MAX, 1, 0),
            Err(InvalidCoordinate {
                q: i32::MAX,
                r: 1,
                s: 0
            })
        );
        // wraps to zero in i32 arithmetic
        assert_eq!(
            Cube::new(i32::MAX, i32::MAX, 2),
            Err(InvalidCoordinate {
                q: i32::MAX,
                r: i32::MAX,
                s: 2
            })
        );
        assert!(Cube::new(i32::MAX, i32::MIN, 1).is_ok());
    }

    #[test]
    fn test_axial_derives_s() {
        assert_eq!(Cube::axial(3, -5), Cube::new(3, -5, 2).unwrap());
    }

    #[test]
    fn test_rotate() {
        let cube = Cube::new(2, 0, -2).unwrap();
        assert_eq!(cube.rotate(Rotation::Left), Cube::new(0, 2, -2).unwrap());
        assert_eq!(cube.rotate(Rotation::Right), Cube::new(2, -2, 0).unwrap());
    }

    #[test]
    fn test_rotate_left_then_right_is_identity() {
        let cube = Cube::axial(5, -3);
        assert_eq!(cube.rotate(Rotation::Left).rotate(Rotation::Right), cube);
    }

    #[test]
    fn test_distance() {
        let a = Cube::new(1, -2, 1).unwrap();
        let b = Cube::new(-2, -3, 5).unwrap();
        assert_eq!(a.distance(b), 4);
        assert_eq!(b.distance(a), 4);
        assert_eq!(a.distance(a), 0);
        assert_eq!(Cube::ORIGIN.length(), 0);
    }

    #[test]
    fn test_directions_are_unit_length_and_sum_to_zero() {
        let sum = Direction::iter().fold(Cube::ORIGIN, |acc, direction| {
            let unit = Cube::direction(direction);
            assert_eq!(unit.length(), 1);
            acc + unit
        });
        assert_eq!(sum, Cube::ORIGIN);
    }

    #[test]
    fn test_neighbours_are_adjacent_and_distinct() {
        let center = Cube::axial(-4, 7);
        let neighbours: Vec<_> = center.neighbours().collect();
        assert_eq!(neighbours.len(), 6);
        for (idx, neighbour) in neighbours.iter().enumerate() {
            assert_eq!(center.distance(*neighbour), 1);
            assert!(!neighbours[idx + 1..].contains(neighbour));
        }
    }

    #[test]
    fn test_scale_and_negate() {
        let cube = Cube::axial(2, -1);
        assert_eq!(cube * 3, Cube::axial(6, -3));
        assert_eq!(-cube, Cube::axial(-2, 1));
        assert_eq!(cube * -1, -cube);
    }

    #[test]
    fn test_add_direction() {
        let mut cube = Cube::ORIGIN;
        cube += Direction::East;
        assert_eq!(cube, Cube::axial(1, 0));
        assert_eq!(cube + Direction::West, Cube::ORIGIN);
    }

    #[test]
    fn test_display_and_parse() {
        let cube = Cube::new(1, -2, 1).unwrap();
        assert_eq!(cube.to_string(), "(1, -2, 1)");
        assert_eq!("(1, -2, 1)".parse::<Cube>().unwrap(), cube);
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(matches!(
            "(4, -2, 1)".parse::<Cube>(),
            Err(ParseCubeError::Invalid(InvalidCoordinate { q: 4, r: -2, s: 1 }))
        ));
        assert!(matches!(
            "4, -2".parse::<Cube>(),
            Err(ParseCubeError::Malformed(_))
        ));
    }
}
