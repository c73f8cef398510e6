//! Tests for stub agreement and ranking policies

#[cfg(test)]
mod tests {
    use kolam::algorithm::bitset::TileSet;
    use kolam::algorithm::selection::{
        EMPTY_CELL, SelectionPolicy, rank_candidates, stub_agreement,
    };
    use kolam::spatial::tiles::TileLibrary;
    use ndarray::Array2;
    use rand::{SeedableRng, rngs::StdRng};

    fn empty(size: usize) -> Array2<usize> {
        Array2::from_elem((size, size), EMPTY_CELL)
    }

    fn place(cells: &mut Array2<usize>, cell: [usize; 2], tile: usize) {
        if let Some(slot) = cells.get_mut(cell) {
            *slot = tile;
        }
    }

    // Tests border edges agree only when the tile has no stub there
    // Verified by counting unplaced neighbours as agreeing
    #[test]
    fn test_stub_agreement_border() {
        let library = TileLibrary::standard();
        let cells = empty(3);
        let score = |id: usize| {
            library
                .get(id)
                .map(|tile| stub_agreement(tile, &cells, [0, 0], library))
        };

        assert_eq!(score(1), Some(2));
        assert_eq!(score(8), Some(2));
        assert_eq!(score(2), Some(1));
        assert_eq!(score(16), Some(0));
    }

    // Tests agreement with a placed neighbour's facing stub
    // Verified by comparing against the neighbour's own edge
    #[test]
    fn test_stub_agreement_neighbour() {
        let library = TileLibrary::standard();
        let mut cells = empty(3);
        // East-West tile left of the centre cell
        place(&mut cells, [1, 0], 10);

        let score = |id: usize| {
            library
                .get(id)
                .map(|tile| stub_agreement(tile, &cells, [1, 1], library))
        };
        assert_eq!(score(3), Some(1));
        assert_eq!(score(5), Some(0));
    }

    // Tests the id policy orders by agreement then id
    // Verified by sorting ascending by score
    #[test]
    fn test_rank_first_by_id() {
        let library = TileLibrary::standard();
        let cells = empty(3);
        let candidates = TileSet::all(16);
        let mut rng = StdRng::seed_from_u64(0);

        let ranked = rank_candidates(
            &candidates,
            &cells,
            [0, 0],
            library,
            SelectionPolicy::FirstById,
            &mut rng,
        );
        assert_eq!(
            ranked,
            vec![1, 4, 5, 8, 2, 3, 7, 9, 10, 11, 14, 15, 6, 12, 13, 16]
        );
    }

    // Tests seeded ranking is reproducible and keeps agreement order
    // Verified by shuffling after the agreement sort
    #[test]
    fn test_rank_seeded() {
        let library = TileLibrary::standard();
        let cells = empty(3);
        let candidates = TileSet::all(16);
        let rank = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            rank_candidates(
                &candidates,
                &cells,
                [0, 0],
                library,
                SelectionPolicy::Seeded,
                &mut rng,
            )
        };

        let first = rank(11);
        assert_eq!(first, rank(11));
        assert_eq!(first.len(), 16);

        let scores: Vec<usize> = first
            .iter()
            .filter_map(|&id| library.get(id))
            .map(|tile| stub_agreement(tile, &cells, [0, 0], library))
            .collect();
        assert!(scores.windows(2).all(|pair| pair.first() >= pair.last()));
        assert_eq!(SelectionPolicy::default(), SelectionPolicy::Seeded);
    }

    // Tests ranking only returns tiles left in the domain
    // Verified by ranking the whole library instead of the domain
    #[test]
    fn test_rank_restricted_domain() {
        let library = TileLibrary::standard();
        let mut cells = empty(3);
        place(&mut cells, [0, 1], 2);
        let mut rng = StdRng::seed_from_u64(3);

        let ranked = rank_candidates(
            &TileSet::from_ids(&[6, 3, 1], 16),
            &cells,
            [0, 0],
            library,
            SelectionPolicy::FirstById,
            &mut rng,
        );
        // Agreement: tile 1 on three edges, 3 on two, 6 on one
        assert_eq!(ranked, vec![1, 3, 6]);
    }
}
