use ndarray::Array2;
use rand::{rngs::StdRng, seq::SliceRandom};

use crate::{
    algorithm::bitset::TileSet,
    spatial::tiles::{Direction, TileDefinition, TileId, TileLibrary},
};

/// Marker for a cell that has not been assigned yet
pub const EMPTY_CELL: TileId = 0;

/// Ordering applied to a cell's candidates before stub ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SelectionPolicy {
    /// Shuffle candidates with the generator's seeded random source
    #[default]
    Seeded,
    /// Keep candidates in ascending id order (no randomness)
    FirstById,
}

fn placed(cells: &Array2<TileId>, row: usize, col: usize) -> Option<TileId> {
    cells
        .get([row, col])
        .copied()
        .filter(|&tile| tile != EMPTY_CELL)
}

/// Count the edges of `cell` where `tile` agrees with its surroundings
///
/// An edge agrees when the stub matches the facing stub of a placed
/// neighbour, or when an edge on the grid border carries no stub. Edges next
/// to unplaced cells do not count.
pub fn stub_agreement(
    tile: &TileDefinition,
    cells: &Array2<TileId>,
    cell: [usize; 2],
    library: &TileLibrary,
) -> usize {
    let [row, col] = cell;
    let (rows, cols) = cells.dim();

    let neighbour_stub = |neighbour: Option<TileId>, facing: Direction| {
        neighbour
            .and_then(|id| library.get(id))
            .map(|definition| definition.stubs.has(facing))
    };

    let edges = [
        (
            Direction::North,
            row.checked_sub(1)
                .map(|up| neighbour_stub(placed(cells, up, col), Direction::South)),
        ),
        (
            Direction::West,
            col.checked_sub(1)
                .map(|left| neighbour_stub(placed(cells, row, left), Direction::East)),
        ),
        (
            Direction::South,
            (row + 1 < rows).then(|| neighbour_stub(placed(cells, row + 1, col), Direction::North)),
        ),
        (
            Direction::East,
            (col + 1 < cols).then(|| neighbour_stub(placed(cells, row, col + 1), Direction::West)),
        ),
    ];

    edges
        .into_iter()
        .filter(|&(direction, facing)| match facing {
            // Border edge: agree when the tile keeps its curve inside
            None => !tile.stubs.has(direction),
            Some(Some(stub)) => tile.stubs.has(direction) == stub,
            Some(None) => false,
        })
        .count()
}

/// Order candidates from best to worst for placement at `cell`
///
/// The policy fixes the base order (shuffled or by id); candidates are then
/// stably sorted by descending stub agreement, so ties keep the policy order.
pub fn rank_candidates(
    candidates: &TileSet,
    cells: &Array2<TileId>,
    cell: [usize; 2],
    library: &TileLibrary,
    policy: SelectionPolicy,
    rng: &mut StdRng,
) -> Vec<TileId> {
    let mut ranked = candidates.to_vec();
    if policy == SelectionPolicy::Seeded {
        ranked.shuffle(rng);
    }

    ranked.sort_by_cached_key(|&tile| {
        let score = library
            .get(tile)
            .map_or(0, |definition| stub_agreement(definition, cells, cell, library));
        std::cmp::Reverse(score)
    });
    ranked
}
