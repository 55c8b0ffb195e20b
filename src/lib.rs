pub mod config;
pub mod geometry;

pub use geometry::hex::{Cube, Direction, HexGrid, Offset};
