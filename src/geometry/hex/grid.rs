use std::{
    collections::{hash_set, BTreeMap, HashSet},
    iter::FromIterator,
    ops::RangeInclusive,
};

use itertools::Itertools;

use super::{
    cube::Cube,
    direction::Direction,
    offset::{Layout, Offset, Shift},
};

/// A set of hex tiles.
///
/// Tiles are identified by their full [`Cube`] value. Iteration order is unspecified.
///
/// ## Entry Points
///
/// - [`HexGrid::rectangle`] builds a rectangular region of offset positions.
/// - Arbitrary shapes can be collected from any iterator of [`Cube`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HexGrid {
    tiles: HashSet<Cube>,
}

/// Inclusive extent of a [`HexGrid`] in offset coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, parse_display::Display)]
#[display("cols {min_col}..={max_col}, rows {min_row}..={max_row}")]
pub struct Boundaries {
    pub min_col: i32,
    pub max_col: i32,
    pub min_row: i32,
    pub max_row: i32,
}

impl Boundaries {
    /// The extent covering a single position.
    pub fn of(offset: Offset) -> Boundaries {
        Boundaries {
            min_col: offset.col,
            max_col: offset.col,
            min_row: offset.row,
            max_row: offset.row,
        }
    }

    /// The smallest extent covering both `self` and `other`.
    pub fn union(self, other: Boundaries) -> Boundaries {
        Boundaries {
            min_col: self.min_col.min(other.min_col),
            max_col: self.max_col.max(other.max_col),
            min_row: self.min_row.min(other.min_row),
            max_row: self.max_row.max(other.max_row),
        }
    }

    /// `true` when `offset` lies within this extent.
    pub fn contains(&self, offset: Offset) -> bool {
        (self.min_col..=self.max_col).contains(&offset.col)
            && (self.min_row..=self.max_row).contains(&offset.row)
    }
}

/// Positions `start..=start + extent`, clipped at `i32::MAX`.
fn span(start: i32, extent: u32) -> RangeInclusive<i32> {
    start..=start.saturating_add_unsigned(extent)
}

impl HexGrid {
    pub fn new() -> HexGrid {
        HexGrid::default()
    }

    /// Build the tiles covering a rectangle of pointy-top offset positions.
    ///
    /// Bounds are inclusive: the rectangle spans columns `offset_col..=offset_col + columns`
    /// and rows `offset_row..=offset_row + rows`, so it holds `(rows + 1) * (columns + 1)` tiles.
    /// Positions past `i32::MAX` are clipped off rather than wrapping around.
    ///
    /// Positions are interpreted in [`Layout::ROffset`] with [`Shift::Odd`].
    pub fn rectangle(rows: u32, columns: u32, offset_col: i32, offset_row: i32) -> HexGrid {
        Self::rectangle_with(
            Layout::ROffset,
            Shift::Odd,
            rows,
            columns,
            offset_col,
            offset_row,
        )
    }

    /// Build the tiles covering a rectangle of offset positions in an arbitrary layout.
    ///
    /// See [`HexGrid::rectangle`] for the meaning of the bounds.
    pub fn rectangle_with(
        layout: Layout,
        shift: Shift,
        rows: u32,
        columns: u32,
        offset_col: i32,
        offset_row: i32,
    ) -> HexGrid {
        let tiles: HashSet<Cube> = span(offset_row, rows)
            .cartesian_product(span(offset_col, columns))
            .map(|(row, col)| layout.to_cube(Offset::new(col, row), shift))
            .collect();

        log::debug!(
            "built {} grid of {} tiles from {} ({} rows, {} columns)",
            layout,
            tiles.len(),
            Offset::new(offset_col, offset_row),
            u64::from(rows) + 1,
            u64::from(columns) + 1,
        );

        HexGrid { tiles }
    }

    /// Add a tile. Returns `false` if it was already present.
    pub fn insert(&mut self, tile: Cube) -> bool {
        self.tiles.insert(tile)
    }

    #[inline]
    pub fn contains(&self, tile: Cube) -> bool {
        self.tiles.contains(&tile)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over the tiles of this grid, in no particular order.
    pub fn iter(&self) -> impl '_ + Iterator<Item = Cube> {
        self.tiles.iter().copied()
    }

    /// Inclusive extent of this grid in pointy-top offset coordinates with [`Shift::Odd`].
    pub fn boundaries(&self) -> Result<Boundaries, EmptyGrid> {
        self.boundaries_with(Layout::ROffset, Shift::Odd)
    }

    /// Inclusive extent of this grid in the given offset layout.
    pub fn boundaries_with(&self, layout: Layout, shift: Shift) -> Result<Boundaries, EmptyGrid> {
        let offsets = || self.iter().map(move |tile| layout.to_offset(tile, shift));

        let (min_col, max_col) = offsets()
            .map(|offset| offset.col)
            .minmax()
            .into_option()
            .ok_or(EmptyGrid)?;
        let (min_row, max_row) = offsets()
            .map(|offset| offset.row)
            .minmax()
            .into_option()
            .ok_or(EmptyGrid)?;

        let boundaries = Boundaries {
            min_col,
            max_col,
            min_row,
            max_row,
        };
        log::trace!("{} boundaries of {} tiles: {}", layout, self.len(), boundaries);
        Ok(boundaries)
    }

    /// `true` when the tile adjacent to `tile` in `direction` is part of this grid.
    ///
    /// `tile` itself need not be a member.
    pub fn has_neighbour(&self, tile: Cube, direction: Direction) -> bool {
        self.contains(tile.neighbour(direction))
    }

    /// Adjacency of `tile` in each of the six directions.
    ///
    /// The result always has an entry for every [`Direction`].
    pub fn has_neighbours(&self, tile: Cube) -> BTreeMap<Direction, bool> {
        Direction::iter()
            .map(|direction| (direction, self.has_neighbour(tile, direction)))
            .collect()
    }

    /// Iterate over the members of this grid adjacent to `tile`.
    pub fn neighbours(&self, tile: Cube) -> impl '_ + Iterator<Item = Cube> {
        tile.neighbours().filter(move |&neighbour| self.contains(neighbour))
    }
}

#[cfg(feature = "parallel")]
impl HexGrid {
    /// Parallel equivalent of [`HexGrid::rectangle_with`].
    pub fn par_rectangle_with(
        layout: Layout,
        shift: Shift,
        rows: u32,
        columns: u32,
        offset_col: i32,
        offset_row: i32,
    ) -> HexGrid {
        use rayon::prelude::*;

        let tiles: HashSet<Cube> = span(offset_row, rows)
            .into_par_iter()
            .flat_map_iter(move |row| {
                span(offset_col, columns)
                    .map(move |col| layout.to_cube(Offset::new(col, row), shift))
            })
            .collect();

        log::debug!("built {} grid of {} tiles in parallel", layout, tiles.len());

        HexGrid { tiles }
    }

    /// Parallel equivalent of [`HexGrid::boundaries_with`].
    pub fn par_boundaries_with(
        &self,
        layout: Layout,
        shift: Shift,
    ) -> Result<Boundaries, EmptyGrid> {
        use rayon::prelude::*;

        self.tiles
            .par_iter()
            .map(|&tile| Boundaries::of(layout.to_offset(tile, shift)))
            .reduce_with(Boundaries::union)
            .ok_or(EmptyGrid)
    }
}

impl FromIterator<Cube> for HexGrid {
    fn from_iter<T: IntoIterator<Item = Cube>>(iter: T) -> Self {
        HexGrid {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cube> for HexGrid {
    fn extend<T: IntoIterator<Item = Cube>>(&mut self, iter: T) {
        self.tiles.extend(iter)
    }
}

impl IntoIterator for HexGrid {
    type Item = Cube;
    type IntoIter = hash_set::IntoIter<Cube>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.into_iter()
    }
}

impl<'a> IntoIterator for &'a HexGrid {
    type Item = &'a Cube;
    type IntoIter = hash_set::Iter<'a, Cube>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// An empty grid has no boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("an empty grid has no boundaries")]
pub struct EmptyGrid;
