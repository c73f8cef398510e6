//! Arc consistency over symmetric tile assignments
//!
//! Every orbit of cells under the symmetry group is one variable, held by
//! its row-major first cell. Any other cell of the orbit shows the
//! variable's tile mapped through the transform that carries the
//! representative there. An adjacent pair of cells therefore constrains
//! either two variables (a binary arc) or a single one, when both cells
//! belong to the same orbit along a mirror seam. Single-variable pairs and
//! cells fixed by a transform are filtered out before the search starts;
//! binary arcs are kept consistent after every assignment.

use std::collections::VecDeque;

use ndarray::Array2;

use crate::{
    algorithm::{bitset::TileSet, connectivity::ConnectivityIndex},
    io::error::{KolamError, Result},
    spatial::{
        symmetry::{GridTransform, Symmetry},
        tiles::TileId,
    },
};

// Variable a cell takes its tile from and the transform applied on the way
#[derive(Clone, Copy, Debug)]
struct Link {
    variable: usize,
    transform: GridTransform,
}

// Adjacency seen from one variable towards `other`
#[derive(Clone, Copy, Debug)]
struct Constraint {
    other: usize,
    // Transform of the left or top cell of the pair
    first: GridTransform,
    // Transform of the right or bottom cell
    second: GridTransform,
    // Whether the owning variable supplies the left or top cell
    leads: bool,
}

/// Candidate domains of every orbit representative, kept arc consistent
///
/// Domains only shrink; each change is recorded on a trail so the search
/// can roll back to any earlier [`checkpoint`](Self::checkpoint).
pub struct ConstraintNetwork<'a> {
    connectivity: &'a ConnectivityIndex,
    size: usize,
    cells: Vec<[usize; 2]>,
    arcs: Vec<Vec<Constraint>>,
    domains: Vec<TileSet>,
    trail: Vec<(usize, TileSet)>,
}

impl<'a> ConstraintNetwork<'a> {
    /// Build the network for a `size x size` grid and make it consistent
    ///
    /// # Errors
    ///
    /// Returns `UnsatisfiablePlacement` naming the first cell whose domain
    /// empties before any tile is chosen. No grid of this size and symmetry
    /// exists in that case.
    pub fn build(
        size: usize,
        symmetry: Symmetry,
        connectivity: &'a ConnectivityIndex,
    ) -> Result<Self> {
        let tile_count = connectivity.tile_count();
        let mut links: Array2<Option<Link>> = Array2::from_elem((size, size), None);
        let mut cells = Vec::new();
        let mut domains = Vec::new();

        for row in 0..size {
            for col in 0..size {
                let cell = [row, col];
                if !symmetry.is_representative(cell, size) {
                    continue;
                }
                let variable = cells.len();
                let mut domain = TileSet::all(tile_count);
                for &transform in symmetry.transforms() {
                    let image = transform.apply_cell(cell, size);
                    // A cell mapped onto itself holds a tile the transform leaves alone
                    if image == cell {
                        if let Some(fixed) = transform.fixed_tiles() {
                            domain.intersect_with(&TileSet::from_ids(fixed, tile_count));
                        }
                    }
                    if let Some(slot) = links.get_mut(image) {
                        slot.get_or_insert(Link {
                            variable,
                            transform,
                        });
                    }
                }
                cells.push(cell);
                domains.push(domain);
            }
        }

        let mut arcs = vec![Vec::new(); cells.len()];
        for ((row, col), link) in links.indexed_iter() {
            let Some(first) = *link else {
                continue;
            };
            let followers = [links.get([row, col + 1]), links.get([row + 1, col])];
            for second in followers.into_iter().filter_map(|slot| slot.copied().flatten()) {
                if first.variable == second.variable {
                    // Both cells of the pair come from one choice
                    if let Some(domain) = domains.get_mut(first.variable) {
                        let kept: Vec<TileId> = domain
                            .iter()
                            .filter(|&tile| {
                                connectivity.is_compatible(
                                    first.transform.apply_tile(tile),
                                    second.transform.apply_tile(tile),
                                )
                            })
                            .collect();
                        *domain = TileSet::from_ids(&kept, tile_count);
                    }
                    continue;
                }
                if let Some(list) = arcs.get_mut(first.variable) {
                    list.push(Constraint {
                        other: second.variable,
                        first: first.transform,
                        second: second.transform,
                        leads: true,
                    });
                }
                if let Some(list) = arcs.get_mut(second.variable) {
                    list.push(Constraint {
                        other: first.variable,
                        first: first.transform,
                        second: second.transform,
                        leads: false,
                    });
                }
            }
        }

        let mut network = Self {
            connectivity,
            size,
            cells,
            arcs,
            domains,
            trail: Vec::new(),
        };

        if let Some(variable) = network.domains.iter().position(TileSet::is_empty) {
            return Err(network.unsatisfiable(variable));
        }
        let everything = 0..network.variable_count();
        if let Some(variable) = network.propagate(everything) {
            return Err(network.unsatisfiable(variable));
        }
        // The consistent starting state is the floor the search rolls back to
        network.trail.clear();
        Ok(network)
    }

    /// Number of orbit representatives
    pub const fn variable_count(&self) -> usize {
        self.cells.len()
    }

    /// Representative cell of `variable`
    pub fn cell(&self, variable: usize) -> Option<[usize; 2]> {
        self.cells.get(variable).copied()
    }

    /// Tiles `variable` may still take
    pub fn domain(&self, variable: usize) -> Option<&TileSet> {
        self.domains.get(variable)
    }

    /// Unassigned variable with the fewest candidates left
    ///
    /// Ties go to the earliest representative in row-major order.
    pub fn most_constrained(&self, assigned: &[bool]) -> Option<usize> {
        self.domains
            .iter()
            .enumerate()
            .filter(|&(variable, _)| !assigned.get(variable).copied().unwrap_or(false))
            .min_by_key(|(_, domain)| domain.count())
            .map(|(variable, _)| variable)
    }

    /// Trail position to roll back to
    pub const fn checkpoint(&self) -> usize {
        self.trail.len()
    }

    /// Undo every domain change made after `checkpoint`
    pub fn restore(&mut self, checkpoint: usize) {
        while self.trail.len() > checkpoint {
            let Some((variable, previous)) = self.trail.pop() else {
                break;
            };
            if let Some(slot) = self.domains.get_mut(variable) {
                *slot = previous;
            }
        }
    }

    /// Fix `variable` to `tile` and propagate
    ///
    /// Returns `false` when `tile` is not in the domain or some other domain
    /// empties; the caller then rolls back to its checkpoint.
    pub fn assign(&mut self, variable: usize, tile: TileId) -> bool {
        let single = TileSet::from_ids(&[tile], self.connectivity.tile_count());
        let Some(slot) = self.domains.get_mut(variable) else {
            return false;
        };
        if !slot.contains(tile) {
            return false;
        }
        let previous = std::mem::replace(slot, single);
        self.trail.push((variable, previous));
        self.propagate([variable]).is_none()
    }

    // AC-3 from the given variables; returns a variable whose domain emptied
    fn propagate(&mut self, pending: impl IntoIterator<Item = usize>) -> Option<usize> {
        let mut queued = vec![false; self.cells.len()];
        let mut queue: VecDeque<usize> = VecDeque::new();
        for variable in pending {
            if let Some(flag) = queued.get_mut(variable) {
                *flag = true;
                queue.push_back(variable);
            }
        }

        while let Some(source) = queue.pop_front() {
            if let Some(flag) = queued.get_mut(source) {
                *flag = false;
            }
            let arcs = self.arcs.get(source).cloned().unwrap_or_default();
            for arc in arcs {
                let (Some(from), Some(to)) = (self.domains.get(source), self.domains.get(arc.other))
                else {
                    continue;
                };
                let kept = self.supported(&arc, from, to);
                if kept.count() == to.count() {
                    continue;
                }

                let wiped = kept.is_empty();
                if let Some(slot) = self.domains.get_mut(arc.other) {
                    let previous = std::mem::replace(slot, kept);
                    self.trail.push((arc.other, previous));
                }
                if wiped {
                    return Some(arc.other);
                }
                if let Some(flag) = queued.get_mut(arc.other) {
                    if !*flag {
                        *flag = true;
                        queue.push_back(arc.other);
                    }
                }
            }
        }
        None
    }

    // Tiles of `target` with at least one compatible partner in `source`
    fn supported(&self, arc: &Constraint, source: &TileSet, target: &TileSet) -> TileSet {
        let partners: Vec<TileId> = source
            .iter()
            .map(|tile| {
                if arc.leads {
                    arc.first.apply_tile(tile)
                } else {
                    arc.second.apply_tile(tile)
                }
            })
            .collect();

        let mut kept = TileSet::new(self.connectivity.tile_count());
        for tile in target.iter() {
            let has_partner = if arc.leads {
                let image = arc.second.apply_tile(tile);
                partners
                    .iter()
                    .any(|&partner| self.connectivity.is_compatible(partner, image))
            } else {
                let image = arc.first.apply_tile(tile);
                partners
                    .iter()
                    .any(|&partner| self.connectivity.is_compatible(image, partner))
            };
            if has_partner {
                kept.insert(tile);
            }
        }
        kept
    }

    fn unsatisfiable(&self, variable: usize) -> KolamError {
        let [row, col] = self.cell(variable).unwrap_or([0, 0]);
        KolamError::UnsatisfiablePlacement {
            row,
            col,
            grid_size: self.size,
        }
    }
}
