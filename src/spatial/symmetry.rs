//! Symmetry tables and grid transforms
//!
//! A permutation table maps tile `i` to `table[i - 1]`, the tile that
//! results from mirroring or rotating tile `i`. The tables match the stub
//! geometry of the standard library: the horizontal mirror swaps East and
//! West, the vertical mirror swaps North and South, the diagonal mirror
//! transposes the cell and the quarter turn rotates it clockwise.

use crate::io::configuration::TILE_COUNT;
use crate::spatial::tiles::TileId;

/// Tile permutation over the standard library
pub type Permutation = [TileId; TILE_COUNT];

/// Left-right mirror (East and West swap)
pub const HORIZONTAL_MIRROR: Permutation = [1, 2, 5, 4, 3, 9, 8, 7, 6, 10, 11, 12, 15, 14, 13, 16];
/// Top-bottom mirror (North and South swap)
pub const VERTICAL_MIRROR: Permutation = [1, 4, 3, 2, 5, 7, 6, 9, 8, 10, 11, 14, 13, 12, 15, 16];
/// Mirror across the main diagonal (North with West, East with South)
pub const DIAGONAL_MIRROR: Permutation = [1, 3, 2, 5, 4, 6, 9, 8, 7, 11, 10, 13, 12, 15, 14, 16];
/// Clockwise quarter turn; equals the horizontal mirror after the diagonal one
pub const ROTATION_90: Permutation = [1, 5, 2, 3, 4, 9, 6, 7, 8, 11, 10, 15, 12, 13, 14, 16];

/// Tiles unchanged by [`HORIZONTAL_MIRROR`]
pub const HORIZONTAL_SYMMETRIC: &[TileId] = &[1, 2, 4, 10, 11, 12, 14, 16];
/// Tiles unchanged by [`VERTICAL_MIRROR`]
pub const VERTICAL_SYMMETRIC: &[TileId] = &[1, 3, 5, 10, 11, 13, 15, 16];
/// Tiles unchanged by [`DIAGONAL_MIRROR`]
pub const DIAGONAL_SYMMETRIC: &[TileId] = &[1, 6, 8, 16];
/// Tiles unchanged by [`ROTATION_90`]
pub const ROTATION_SYMMETRIC: &[TileId] = &[1, 16];
/// Tiles unchanged by a half turn (both mirrors)
pub const HALF_TURN_SYMMETRIC: &[TileId] = &[1, 10, 11, 16];

/// Image of `tile` under `table`; ids outside the table map to themselves
pub fn permute(table: &Permutation, tile: TileId) -> TileId {
    tile.checked_sub(1)
        .and_then(|index| table.get(index))
        .copied()
        .unwrap_or(tile)
}

/// Ids `i` with `table[i - 1] == i`
pub fn fixed_points(table: &Permutation) -> Vec<TileId> {
    (1..=TILE_COUNT)
        .filter(|&tile| permute(table, tile) == tile)
        .collect()
}

/// Smallest `k >= 1` such that applying `table` `k` times is the identity
///
/// Returns `None` when `table` is not a permutation of `1..=16`.
pub fn order(table: &Permutation) -> Option<usize> {
    // No permutation of sixteen ids has order above 140
    const MAX_ORDER: usize = 256;

    let mut power = *table;
    for k in 1..=MAX_ORDER {
        if (1..=TILE_COUNT).all(|tile| permute(&power, tile) == tile) {
            return Some(k);
        }
        for slot in &mut power {
            *slot = permute(table, *slot);
        }
    }
    None
}

/// A symmetry of the square grid acting on both cells and tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridTransform {
    /// Leaves everything in place
    Identity,
    /// Reflects columns, `(r, c) -> (r, n - 1 - c)`
    MirrorColumns,
    /// Reflects rows, `(r, c) -> (n - 1 - r, c)`
    MirrorRows,
    /// Reflects rows and columns (a half turn)
    MirrorBoth,
    /// Swaps rows and columns, `(r, c) -> (c, r)`
    Transpose,
    /// Rotates clockwise by the given number of quarter turns
    QuarterTurns(u8),
}

impl GridTransform {
    /// Cell that `[row, col]` moves to in a grid of side `size`
    pub const fn apply_cell(self, cell: [usize; 2], size: usize) -> [usize; 2] {
        let [row, col] = cell;
        let last = size.saturating_sub(1);
        match self {
            Self::Identity => cell,
            Self::MirrorColumns => [row, last - col],
            Self::MirrorRows => [last - row, col],
            Self::MirrorBoth => [last - row, last - col],
            Self::Transpose => [col, row],
            Self::QuarterTurns(turns) => match turns % 4 {
                0 => cell,
                1 => [col, last - row],
                2 => [last - row, last - col],
                _ => [last - col, row],
            },
        }
    }

    /// Tile that `tile` becomes under this transform
    pub fn apply_tile(self, tile: TileId) -> TileId {
        match self {
            Self::Identity => tile,
            Self::MirrorColumns => permute(&HORIZONTAL_MIRROR, tile),
            Self::MirrorRows => permute(&VERTICAL_MIRROR, tile),
            Self::MirrorBoth => permute(&VERTICAL_MIRROR, permute(&HORIZONTAL_MIRROR, tile)),
            Self::Transpose => permute(&DIAGONAL_MIRROR, tile),
            Self::QuarterTurns(turns) => {
                (0..turns % 4).fold(tile, |current, _| permute(&ROTATION_90, current))
            }
        }
    }

    /// Tiles this transform leaves unchanged; `None` for the identity
    pub const fn fixed_tiles(self) -> Option<&'static [TileId]> {
        match self {
            Self::Identity => None,
            Self::MirrorColumns => Some(HORIZONTAL_SYMMETRIC),
            Self::MirrorRows => Some(VERTICAL_SYMMETRIC),
            Self::Transpose => Some(DIAGONAL_SYMMETRIC),
            Self::MirrorBoth => Some(HALF_TURN_SYMMETRIC),
            Self::QuarterTurns(turns) => match turns % 4 {
                0 => None,
                2 => Some(HALF_TURN_SYMMETRIC),
                _ => Some(ROTATION_SYMMETRIC),
            },
        }
    }
}

/// Symmetry constraint requested for a generated pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Symmetry {
    /// Every cell chosen independently
    #[default]
    None,
    /// Mirror image left to right
    Horizontal,
    /// Mirror image top to bottom
    Vertical,
    /// Mirror image in both axes
    Quadrants,
    /// Mirror image across the main diagonal
    Diagonal,
    /// Unchanged by quarter turns
    Rotational,
}

const NO_SYMMETRY: [GridTransform; 1] = [GridTransform::Identity];
const HORIZONTAL: [GridTransform; 2] = [GridTransform::Identity, GridTransform::MirrorColumns];
const VERTICAL: [GridTransform; 2] = [GridTransform::Identity, GridTransform::MirrorRows];
const QUADRANTS: [GridTransform; 4] = [
    GridTransform::Identity,
    GridTransform::MirrorColumns,
    GridTransform::MirrorRows,
    GridTransform::MirrorBoth,
];
const DIAGONAL: [GridTransform; 2] = [GridTransform::Identity, GridTransform::Transpose];
const ROTATIONAL: [GridTransform; 4] = [
    GridTransform::Identity,
    GridTransform::QuarterTurns(1),
    GridTransform::QuarterTurns(2),
    GridTransform::QuarterTurns(3),
];

impl Symmetry {
    /// Group of transforms the pattern must be invariant under, identity first
    pub const fn transforms(self) -> &'static [GridTransform] {
        match self {
            Self::None => &NO_SYMMETRY,
            Self::Horizontal => &HORIZONTAL,
            Self::Vertical => &VERTICAL,
            Self::Quadrants => &QUADRANTS,
            Self::Diagonal => &DIAGONAL,
            Self::Rotational => &ROTATIONAL,
        }
    }

    /// Orbit of `cell`: its image under every transform, duplicates removed
    pub fn orbit(self, cell: [usize; 2], size: usize) -> Vec<[usize; 2]> {
        let mut cells: Vec<[usize; 2]> = Vec::with_capacity(self.transforms().len());
        for transform in self.transforms() {
            let image = transform.apply_cell(cell, size);
            if !cells.contains(&image) {
                cells.push(image);
            }
        }
        cells
    }

    /// Whether `cell` is the row-major first cell of its orbit
    pub fn is_representative(self, cell: [usize; 2], size: usize) -> bool {
        self.orbit(cell, size).iter().all(|other| *other >= cell)
    }

    /// Short lowercase label
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Quadrants => "quadrants",
            Self::Diagonal => "diagonal",
            Self::Rotational => "rotational",
        }
    }
}
