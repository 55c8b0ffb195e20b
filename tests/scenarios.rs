//! Run with: `cargo test --test scenarios`

use hexgrid::geometry::hex::{
    fractional::round_hex, Boundaries, Cube, EmptyGrid, FractionalCube, HexGrid,
    InvalidCoordinate, Offset, Rotation, Shift,
};
use std::convert::TryFrom;

#[test]
fn test_validated_construction() {
    let cube = Cube::new(1, -2, 1).unwrap();
    assert_eq!((cube.q(), cube.r(), cube.s()), (1, -2, 1));
    assert_eq!(
        Cube::new(4, -2, 1),
        Err(InvalidCoordinate { q: 4, r: -2, s: 1 })
    );
}

#[test]
fn test_rotation() {
    let cube = Cube::new(2, 0, -2).unwrap();
    assert_eq!(cube.rotate(Rotation::Left), Cube::new(0, 2, -2).unwrap());
    assert_eq!(cube.rotate(Rotation::Right), Cube::new(2, -2, 0).unwrap());
}

#[test]
fn test_distance() {
    let a = Cube::new(1, -2, 1).unwrap();
    let b = Cube::new(-2, -3, 5).unwrap();
    assert_eq!(a.distance(b), 4);
}

#[test]
fn test_round_hex() {
    assert_eq!(
        round_hex(FractionalCube::new(1.5, -2.25, 0.75)),
        Cube::new(1, -2, 1).unwrap()
    );
}

#[test]
fn test_roffset_from_cube() {
    let shift = Shift::try_from(1).unwrap();
    assert_eq!(
        Offset::roffset_from_cube(Cube::new(4, 3, -7).unwrap(), shift),
        Offset { col: 6, row: 3 }
    );
}

#[test]
fn test_grid_boundaries() {
    let grid = HexGrid::rectangle(4, 4, -2, -2);
    assert_eq!(
        grid.boundaries(),
        Ok(Boundaries {
            min_col: -2,
            max_col: 2,
            min_row: -2,
            max_row: 2,
        })
    );
}

#[test]
fn test_empty_grid_boundaries_fail() {
    let grid: HexGrid = std::iter::empty().collect();
    assert_eq!(grid.boundaries(), Err(EmptyGrid));
}

#[test]
fn test_grid_edges_lack_neighbours() {
    let grid = HexGrid::rectangle(4, 4, -2, -2);
    let edge_tiles = grid
        .iter()
        .filter(|&tile| grid.has_neighbours(tile).values().any(|&present| !present))
        .count();
    // a 5x5 rectangle has 16 tiles on its perimeter
    assert_eq!(edge_tiles, 16);
}
