//! Tests for connection sets and the compatibility table

#[cfg(test)]
mod tests {
    use kolam::KolamError;
    use kolam::algorithm::connectivity::ConnectivityIndex;
    use kolam::io::configuration::{BLANK_TILE, TILE_COUNT};
    use kolam::spatial::Grid;
    use kolam::spatial::grid::Axis;

    // Tests connection sets follow the South and East stubs
    // Verified by reading the right connectors from the West stub
    #[test]
    fn test_connection_sets() {
        let index = ConnectivityIndex::standard();

        assert_eq!(index.tile_count(), TILE_COUNT);
        assert_eq!(
            index.down_connectors().to_vec(),
            vec![4, 7, 8, 11, 13, 14, 15, 16]
        );
        assert_eq!(
            index.right_connectors().to_vec(),
            vec![5, 8, 9, 10, 12, 14, 15, 16]
        );
    }

    // Tests no tile is compatible with itself
    // Verified by dropping the self-exclusion filter
    #[test]
    fn test_self_excluded() {
        let index = ConnectivityIndex::standard();
        for tile in 1..=TILE_COUNT {
            assert!(!index.is_compatible(tile, tile), "tile {tile}");
            assert!(!index.compatible_with(tile).contains(&tile));
        }
    }

    // Tests non-connecting tiles accept every other tile
    // Verified by applying the connecting rule to every tile
    #[test]
    fn test_non_connecting_accepts_all() {
        let index = ConnectivityIndex::standard();
        for tile in [BLANK_TILE, 2, 3, 6] {
            assert_eq!(index.compatible_with(tile).len(), TILE_COUNT - 1);
        }
    }

    // Tests connecting tiles accept only connecting tiles and the blank tile
    // Verified by allowing tile 2 after a connecting tile
    #[test]
    fn test_connecting_rule() {
        let index = ConnectivityIndex::standard();

        assert_eq!(
            index.compatible_with(16),
            &[1, 4, 5, 7, 8, 9, 10, 11, 12, 13, 14, 15]
        );
        assert!(index.is_compatible(8, BLANK_TILE));
        assert!(!index.is_compatible(8, 2));
        // The table is not symmetric
        assert!(index.is_compatible(2, 8));
        assert!(index.compatible_with(0).is_empty());
        assert!(index.compatible_set(17).is_none());
    }

    // Tests every candidate set against the standard table is non-empty
    // Verified by excluding the blank tile from connecting sets
    #[test]
    fn test_candidate_sets_never_empty() {
        let index = ConnectivityIndex::standard();
        for left in 1..=TILE_COUNT {
            for up in 1..=TILE_COUNT {
                let (Some(a), Some(b)) = (index.compatible_set(left), index.compatible_set(up))
                else {
                    panic!("missing set for {left} or {up}");
                };
                let mut both = a.clone();
                both.intersect_with(b);
                assert!(!both.is_empty(), "left {left}, up {up}");
            }
        }
    }

    // Tests explicit tables are validated and used as given
    // Verified by skipping the range check
    #[test]
    fn test_from_table() {
        let index = ConnectivityIndex::from_table(vec![vec![2], vec![1]])
            .unwrap_or_else(|e| panic!("table: {e}"));
        assert!(index.is_compatible(1, 2));
        assert!(!index.is_compatible(1, 1));
        assert!(index.down_connectors().is_empty());

        assert!(matches!(
            ConnectivityIndex::from_table(vec![vec![3], vec![1]]),
            Err(KolamError::InvalidTileIndex { index: 3, .. })
        ));
        assert!(ConnectivityIndex::from_table(Vec::new()).is_err());
    }

    // Tests incompatible pairs are reported with their axis
    // Verified by checking only horizontal pairs
    #[test]
    fn test_incompatible_pairs() {
        let index = ConnectivityIndex::standard();
        let grid = Grid::from_rows(&[vec![8, 7], vec![8, 9]], 16)
            .unwrap_or_else(|e| panic!("grid: {e}"));

        let broken = index.incompatible_pairs(&grid);
        assert_eq!(broken.len(), 1);
        let pair = broken.first().copied();
        assert!(pair.is_some_and(|p| p.axis == Axis::Vertical && p.first == [0, 0]));
    }
}
