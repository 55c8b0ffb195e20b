pub mod hex;

pub use hex::{Cube, Direction, HexGrid, Offset};
