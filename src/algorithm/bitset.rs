use bitvec::prelude::*;

use crate::spatial::tiles::TileId;

/// Candidate domain of one cell: the tile ids still allowed there
///
/// Ids are 1-based like the tile library, bit `id - 1` marks membership.
/// Domains only shrink during propagation; the search restores them from a
/// trail of earlier copies, so the set is cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    bits: BitVec,
}

impl TileSet {
    /// Empty domain over ids `1..=max_tiles`
    pub fn new(max_tiles: usize) -> Self {
        Self {
            bits: bitvec![0; max_tiles],
        }
    }

    /// Unrestricted domain over ids `1..=max_tiles`
    pub fn all(max_tiles: usize) -> Self {
        Self {
            bits: bitvec![1; max_tiles],
        }
    }

    /// Domain holding `ids`; ids outside `1..=max_tiles` are dropped
    pub fn from_ids(ids: &[TileId], max_tiles: usize) -> Self {
        let mut set = Self::new(max_tiles);
        for &tile in ids {
            set.insert(tile);
        }
        set
    }

    /// Allow `tile`
    pub fn insert(&mut self, tile: TileId) {
        if let Some(mut bit) = tile.checked_sub(1).and_then(|index| self.bits.get_mut(index)) {
            *bit = true;
        }
    }

    /// Whether `tile` is still allowed
    pub fn contains(&self, tile: TileId) -> bool {
        tile.checked_sub(1)
            .and_then(|index| self.bits.get(index))
            .is_some_and(|bit| *bit)
    }

    /// Keep only the tiles `other` also allows
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Whether the domain has been wiped out
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Number of tiles still allowed
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Allowed ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.bits.iter_ones().map(|index| index + 1)
    }

    /// Allowed ids collected in ascending order
    pub fn to_vec(&self) -> Vec<TileId> {
        self.iter().collect()
    }
}
