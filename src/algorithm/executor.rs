//! Backtracking grid generation
//!
//! Each step picks the unfilled orbit with the fewest candidates left and
//! tries its best-ranked tile. The choice is copied, transformed, into the
//! rest of the orbit, so the finished grid is invariant under the symmetry
//! group, and the constraint network prunes every neighbouring domain. When
//! a choice empties some domain the network is rolled back and the next
//! candidate is tried; an orbit with no candidates left undoes the previous
//! choice.

use ndarray::Array2;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    algorithm::{
        connectivity::ConnectivityIndex,
        propagation::ConstraintNetwork,
        selection::{EMPTY_CELL, SelectionPolicy, rank_candidates},
    },
    io::{
        configuration::{DEFAULT_CELL_SIZE, DEFAULT_DOT_RADIUS, TILE_COUNT},
        error::{KolamError, Result, invalid_parameter},
    },
    spatial::{
        Grid, Pattern,
        symmetry::{GridTransform, Symmetry},
        tiles::{TileId, TileLibrary},
    },
};

/// Parameters controlling grid filling and pattern geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Side length of one cell in output units
    pub cell_size: f64,
    /// Radius of the dot drawn at each cell centre
    pub dot_radius: f64,
    /// Symmetry the grid must have
    pub symmetry: Symmetry,
    /// Base ordering of candidates
    pub selection: SelectionPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            dot_radius: DEFAULT_DOT_RADIUS,
            symmetry: Symmetry::None,
            selection: SelectionPolicy::Seeded,
        }
    }
}

// One level of the backtracking search
struct Frame {
    variable: usize,
    cell: [usize; 2],
    candidates: Vec<TileId>,
    next: usize,
    checkpoint: usize,
}

/// Generator holding read-only tile tables and its own random source
pub struct KolamGenerator<'a> {
    library: &'a TileLibrary,
    connectivity: &'a ConnectivityIndex,
    config: GeneratorConfig,
    rng: StdRng,
    /// Cells undone during the last fill
    pub backtracks: usize,
    /// Successful placements (including retried ones) during the last fill
    pub placements: usize,
}

impl KolamGenerator<'static> {
    /// Generator over the standard tile library
    ///
    /// Without a seed the random source is drawn from the operating system,
    /// so output varies between runs.
    pub fn new(config: GeneratorConfig, seed: Option<u64>) -> Self {
        Self {
            library: TileLibrary::standard(),
            connectivity: ConnectivityIndex::standard(),
            config,
            rng: seeded_rng(seed),
            backtracks: 0,
            placements: 0,
        }
    }
}

impl<'a> KolamGenerator<'a> {
    /// Generator over custom tables
    ///
    /// # Errors
    ///
    /// Returns an error if the library and the connectivity index disagree
    /// on the number of tiles, or a symmetry is requested for a library
    /// other than the sixteen-tile one the symmetry tables describe.
    pub fn with_tables(
        library: &'a TileLibrary,
        connectivity: &'a ConnectivityIndex,
        config: GeneratorConfig,
        seed: Option<u64>,
    ) -> Result<Self> {
        if library.len() != connectivity.tile_count() {
            return Err(invalid_parameter(
                "connectivity",
                &connectivity.tile_count(),
                &format!("library has {} tiles", library.len()),
            ));
        }
        if config.symmetry != Symmetry::None && library.len() != TILE_COUNT {
            return Err(invalid_parameter(
                "symmetry",
                &config.symmetry.label(),
                &format!("symmetry tables cover exactly {TILE_COUNT} tiles"),
            ));
        }
        Ok(Self {
            library,
            connectivity,
            config,
            rng: seeded_rng(seed),
            backtracks: 0,
            placements: 0,
        })
    }

    /// Active configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Fill a `size x size` grid with mutually compatible tiles
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `size` is zero (before anything is
    /// allocated) and `UnsatisfiablePlacement` if no grid exists. That
    /// happens with an inconsistent connectivity table, and with quadrant
    /// symmetry on even sizes from 4 up, where the mirror seams cannot be
    /// closed; both are detected before the first placement.
    pub fn fill_grid(&mut self, size: usize) -> Result<Grid> {
        if size < 1 {
            return Err(invalid_parameter(
                "size",
                &size,
                &"grid size must be at least 1",
            ));
        }

        self.backtracks = 0;
        self.placements = 0;

        let mut network = ConstraintNetwork::build(size, self.config.symmetry, self.connectivity)?;
        let variables = network.variable_count();
        let mut assigned = vec![false; variables];
        let mut cells = Array2::from_elem((size, size), EMPTY_CELL);
        let mut frames: Vec<Frame> = Vec::with_capacity(variables);
        let mut depth = 0;

        while depth < variables {
            if frames.len() == depth {
                let Some(variable) = network.most_constrained(&assigned) else {
                    break;
                };
                let (Some(cell), Some(domain)) = (network.cell(variable), network.domain(variable))
                else {
                    break;
                };
                let candidates = rank_candidates(
                    domain,
                    &cells,
                    cell,
                    self.library,
                    self.config.selection,
                    &mut self.rng,
                );
                if let Some(flag) = assigned.get_mut(variable) {
                    *flag = true;
                }
                frames.push(Frame {
                    variable,
                    cell,
                    candidates,
                    next: 0,
                    checkpoint: network.checkpoint(),
                });
            }

            let Some(frame) = frames.get_mut(depth) else {
                break;
            };

            // Undo whatever this level did on a previous attempt
            network.restore(frame.checkpoint);
            self.write_orbit(&mut cells, frame.cell, EMPTY_CELL, size);

            let mut advanced = false;
            while let Some(&tile) = frame.candidates.get(frame.next) {
                frame.next += 1;
                if network.assign(frame.variable, tile) {
                    self.write_orbit(&mut cells, frame.cell, tile, size);
                    advanced = true;
                    break;
                }
                network.restore(frame.checkpoint);
            }

            if advanced {
                self.placements += 1;
                depth += 1;
                continue;
            }

            let cell = frame.cell;
            if let Some(exhausted) = frames.pop() {
                if let Some(flag) = assigned.get_mut(exhausted.variable) {
                    *flag = false;
                }
            }
            if depth == 0 {
                return Err(KolamError::UnsatisfiablePlacement {
                    row: cell[0],
                    col: cell[1],
                    grid_size: size,
                });
            }
            depth -= 1;
            self.backtracks += 1;
        }

        Grid::from_cells(cells, self.library.len())
    }

    /// Generate a complete pattern of `size x size` cells
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero, the search is exhausted, or the
    /// configured geometry is invalid.
    pub fn generate(&mut self, size: usize) -> Result<Pattern> {
        let grid = self.fill_grid(size)?;
        let name = match self.config.symmetry {
            Symmetry::None => format!("Kolam {size}x{size}"),
            symmetry => format!("Kolam {size}x{size} ({} symmetry)", symmetry.label()),
        };
        Pattern::materialize(
            name,
            grid,
            self.library,
            self.config.cell_size,
            self.config.dot_radius,
        )
    }

    // Write `tile` (or `EMPTY_CELL`) into every cell of the orbit of `cell`
    fn write_orbit(&self, cells: &mut Array2<TileId>, cell: [usize; 2], tile: TileId, size: usize) {
        for &transform in self.config.symmetry.transforms() {
            if let Some(slot) = cells.get_mut(transform.apply_cell(cell, size)) {
                *slot = transform.apply_tile(tile);
            }
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Generate a pattern with default settings and an unseeded random source
///
/// # Errors
///
/// Returns `InvalidParameter` if `size` is zero.
pub fn generate(size: usize) -> Result<Pattern> {
    KolamGenerator::new(GeneratorConfig::default(), None).generate(size)
}

/// Generate a pattern with default settings, reproducible for a given seed
///
/// # Errors
///
/// Returns `InvalidParameter` if `size` is zero.
pub fn generate_seeded(size: usize, seed: u64) -> Result<Pattern> {
    KolamGenerator::new(GeneratorConfig::default(), Some(seed)).generate(size)
}

/// Apply every non-identity transform of `symmetry` to `grid` and report
/// whether the grid is unchanged by all of them
pub fn is_symmetric(grid: &Grid, symmetry: Symmetry) -> bool {
    symmetry
        .transforms()
        .iter()
        .filter(|&&transform| transform != GridTransform::Identity)
        .all(|&transform| grid.is_invariant_under(transform))
}
