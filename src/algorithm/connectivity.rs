//! Connectivity index derived from the tile library
//!
//! Records which tiles continue into the cell below or to the right and, for
//! every tile, the tiles allowed to follow it (to its right or below it).
//! A tile without connections accepts every other tile. A connecting tile
//! accepts only other connecting tiles or the blank tile. The rule only looks
//! at the first tile's stubs, so the table is not symmetric.

use std::sync::LazyLock;

use crate::algorithm::bitset::TileSet;
use crate::io::configuration::BLANK_TILE;
use crate::io::error::{KolamError, Result, invalid_parameter};
use crate::spatial::grid::{Adjacency, Grid};
use crate::spatial::tiles::{TileId, TileLibrary};

static STANDARD_CONNECTIVITY: LazyLock<ConnectivityIndex> =
    LazyLock::new(|| ConnectivityIndex::from_library(TileLibrary::standard()));

/// Read-only connection sets and compatibility table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityIndex {
    tile_count: usize,
    down_connectors: TileSet,
    right_connectors: TileSet,
    compatible: Vec<Vec<TileId>>,
    compatible_sets: Vec<TileSet>,
}

impl ConnectivityIndex {
    /// Index of the standard library, built once per process
    pub fn standard() -> &'static Self {
        &STANDARD_CONNECTIVITY
    }

    /// Derive the index from a tile library
    pub fn from_library(library: &TileLibrary) -> Self {
        let tile_count = library.len();
        let mut down_connectors = TileSet::new(tile_count);
        let mut right_connectors = TileSet::new(tile_count);
        for tile in library.iter() {
            if tile.has_down_connection {
                down_connectors.insert(tile.id);
            }
            if tile.has_right_connection {
                right_connectors.insert(tile.id);
            }
        }

        let compatible: Vec<Vec<TileId>> = library
            .iter()
            .map(|current| {
                library
                    .iter()
                    .filter(|target| target.id != current.id)
                    .filter(|target| {
                        !current.is_connecting()
                            || target.is_connecting()
                            || target.id == BLANK_TILE
                    })
                    .map(|target| target.id)
                    .collect()
            })
            .collect();

        Self::assemble(tile_count, down_connectors, right_connectors, compatible)
    }

    /// Build an index from an explicit table (`table[id - 1]` lists followers)
    ///
    /// Connection sets are left empty; only compatibility drives generation.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty or lists an id outside
    /// `1..=table.len()`.
    pub fn from_table(table: Vec<Vec<TileId>>) -> Result<Self> {
        let tile_count = table.len();
        if tile_count == 0 {
            return Err(invalid_parameter(
                "compatibility_table",
                &0,
                &"table needs at least one tile",
            ));
        }
        if let Some(&bad) = table
            .iter()
            .flatten()
            .find(|&&tile| tile == 0 || tile > tile_count)
        {
            return Err(KolamError::InvalidTileIndex {
                index: bad,
                max_tiles: tile_count,
            });
        }

        Ok(Self::assemble(
            tile_count,
            TileSet::new(tile_count),
            TileSet::new(tile_count),
            table,
        ))
    }

    fn assemble(
        tile_count: usize,
        down_connectors: TileSet,
        right_connectors: TileSet,
        compatible: Vec<Vec<TileId>>,
    ) -> Self {
        let compatible_sets = compatible
            .iter()
            .map(|ids| TileSet::from_ids(ids, tile_count))
            .collect();
        Self {
            tile_count,
            down_connectors,
            right_connectors,
            compatible,
            compatible_sets,
        }
    }

    /// Number of tiles covered by the table
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Tiles whose curve continues into the cell below
    pub const fn down_connectors(&self) -> &TileSet {
        &self.down_connectors
    }

    /// Tiles whose curve continues into the cell to the right
    pub const fn right_connectors(&self) -> &TileSet {
        &self.right_connectors
    }

    /// Ordered ids allowed right of or below `tile` (empty for unknown ids)
    pub fn compatible_with(&self, tile: TileId) -> &[TileId] {
        tile.checked_sub(1)
            .and_then(|index| self.compatible.get(index))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Bitset form of [`ConnectivityIndex::compatible_with`]
    pub fn compatible_set(&self, tile: TileId) -> Option<&TileSet> {
        tile.checked_sub(1)
            .and_then(|index| self.compatible_sets.get(index))
    }

    /// Whether `second` may sit directly right of or below `first`
    pub fn is_compatible(&self, first: TileId, second: TileId) -> bool {
        self.compatible_set(first)
            .is_some_and(|set| set.contains(second))
    }

    /// Adjacent pairs of `grid` that break the table
    pub fn incompatible_pairs(&self, grid: &Grid) -> Vec<Adjacency> {
        grid.adjacent_pairs()
            .into_iter()
            .filter(|pair| !self.is_compatible(pair.first_tile, pair.second_tile))
            .collect()
    }
}
