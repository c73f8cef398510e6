//! Square grid of placed tile ids
//!
//! A `Grid` is produced complete by the generator and never changes
//! afterwards; cells are stored row-major in an `ndarray` matrix.

use ndarray::Array2;

use crate::io::error::{KolamError, Result, invalid_parameter};
use crate::spatial::symmetry::GridTransform;
use crate::spatial::tiles::TileId;

/// Orientation of a pair of neighbouring cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// `first` is directly left of `second`
    Horizontal,
    /// `first` is directly above `second`
    Vertical,
}

/// Two neighbouring cells and their tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacency {
    /// Left or upper cell
    pub first: [usize; 2],
    /// Right or lower cell
    pub second: [usize; 2],
    /// Tile in `first`
    pub first_tile: TileId,
    /// Tile in `second`
    pub second_tile: TileId,
    /// How the cells touch
    pub axis: Axis,
}

/// Fully assigned `size x size` tile grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Array2<TileId>,
}

impl Grid {
    /// Build a grid from a complete cell matrix
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is empty or not square, or if any
    /// cell holds tile id 0 or an id above `max_tile`.
    pub fn from_cells(cells: Array2<TileId>, max_tile: usize) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || rows != cols {
            return Err(invalid_parameter(
                "grid",
                &format!("{rows}x{cols}"),
                &"grid must be square with at least one cell",
            ));
        }
        if let Some(&bad) = cells.iter().find(|&&tile| tile == 0 || tile > max_tile) {
            return Err(KolamError::InvalidTileIndex {
                index: bad,
                max_tiles: max_tile,
            });
        }
        Ok(Self { size: rows, cells })
    }

    /// Build a grid from row vectors
    ///
    /// # Errors
    ///
    /// Returns an error if rows differ in length or fail [`Grid::from_cells`].
    pub fn from_rows(rows: &[Vec<TileId>], max_tile: usize) -> Result<Self> {
        let size = rows.len();
        let flat: Vec<TileId> = rows.iter().flatten().copied().collect();
        let cells = Array2::from_shape_vec((size, size), flat).map_err(|e| {
            invalid_parameter("grid", &format!("{size} rows"), &e)
        })?;
        Self::from_cells(cells, max_tile)
    }

    /// Side length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Tile at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<TileId> {
        self.cells.get([row, col]).copied()
    }

    /// Underlying cell matrix
    pub const fn cells(&self) -> &Array2<TileId> {
        &self.cells
    }

    /// Cells with their tiles in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ([usize; 2], TileId)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &tile)| ([row, col], tile))
    }

    /// Every horizontally or vertically adjacent pair, row-major
    pub fn adjacent_pairs(&self) -> Vec<Adjacency> {
        let mut pairs = Vec::with_capacity(2 * self.size * self.size);
        for ([row, col], tile) in self.iter() {
            if let Some(right) = self.get(row, col + 1) {
                pairs.push(Adjacency {
                    first: [row, col],
                    second: [row, col + 1],
                    first_tile: tile,
                    second_tile: right,
                    axis: Axis::Horizontal,
                });
            }
            if let Some(below) = self.get(row + 1, col) {
                pairs.push(Adjacency {
                    first: [row, col],
                    second: [row + 1, col],
                    first_tile: tile,
                    second_tile: below,
                    axis: Axis::Vertical,
                });
            }
        }
        pairs
    }

    /// Whether mapping every cell and tile through `transform` reproduces the grid
    pub fn is_invariant_under(&self, transform: GridTransform) -> bool {
        self.iter().all(|(cell, tile)| {
            let [row, col] = transform.apply_cell(cell, self.size);
            self.get(row, col) == Some(transform.apply_tile(tile))
        })
    }
}
