//! Hexagonal geometry support.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)

pub mod cube;
pub mod direction;
pub mod fractional;
pub mod grid;
pub mod offset;

pub use cube::{Cube, InvalidCoordinate, ParseCubeError, Rotation};
pub use direction::{Direction, Directions, ParseDirectionsError};
pub use fractional::FractionalCube;
pub use grid::{Boundaries, EmptyGrid, HexGrid};
pub use offset::{InvalidShift, Layout, Offset, Shift};
