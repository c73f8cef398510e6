//! Tests for orbit variables, up-front seam filtering and arc consistency

#[cfg(test)]
mod tests {
    use kolam::KolamError;
    use kolam::algorithm::connectivity::ConnectivityIndex;
    use kolam::algorithm::propagation::ConstraintNetwork;
    use kolam::spatial::symmetry::Symmetry;

    fn network(size: usize, symmetry: Symmetry) -> ConstraintNetwork<'static> {
        ConstraintNetwork::build(size, symmetry, ConnectivityIndex::standard())
            .unwrap_or_else(|e| panic!("{} size {size}: {e}", symmetry.label()))
    }

    fn domain(network: &ConstraintNetwork<'_>, variable: usize) -> Vec<usize> {
        network
            .domain(variable)
            .map(|set| set.to_vec())
            .unwrap_or_else(|| panic!("no variable {variable}"))
    }

    // Tests a grid without symmetry has one unrestricted variable per cell
    // Verified by skipping cells that are not orbit representatives
    #[test]
    fn test_plain_grid_unrestricted() {
        let network = network(3, Symmetry::None);

        assert_eq!(network.variable_count(), 9);
        assert_eq!(network.cell(4), Some([1, 1]));
        assert_eq!(network.cell(9), None);
        for variable in 0..9 {
            assert_eq!(domain(&network, variable).len(), 16);
        }

        let mut assigned = vec![false; 9];
        assert_eq!(network.most_constrained(&assigned), Some(0));
        if let Some(first) = assigned.first_mut() {
            *first = true;
        }
        assert_eq!(network.most_constrained(&assigned), Some(1));
    }

    // Tests cells beside the mirror seam only keep tiles compatible with their image
    // Verified by leaving same-orbit pairs out of the initial filter
    #[test]
    fn test_seam_pruned_up_front() {
        let network = network(4, Symmetry::Horizontal);

        assert_eq!(network.variable_count(), 8);
        assert_eq!(network.cell(1), Some([0, 1]));
        assert_eq!(domain(&network, 1), vec![3, 6, 7, 8, 13, 15]);
        assert_eq!(
            domain(&network, 0),
            vec![1, 3, 4, 6, 7, 8, 10, 11, 12, 13, 14, 15, 16]
        );
        // The seam cells are the tightest and go first
        assert_eq!(network.most_constrained(&[false; 8]), Some(1));
    }

    // Tests cells a transform maps onto themselves keep only its fixed tiles
    // Verified by skipping the fixed-tile intersection
    #[test]
    fn test_fixed_cells_restricted() {
        let rotational = network(3, Symmetry::Rotational);
        assert_eq!(rotational.variable_count(), 3);
        assert_eq!(rotational.cell(2), Some([1, 1]));
        assert_eq!(domain(&rotational, 2), vec![1, 16]);

        let quadrants = network(3, Symmetry::Quadrants);
        assert_eq!(domain(&quadrants, 1), vec![1, 2, 4, 10, 11, 12, 14, 16]);
        assert_eq!(domain(&quadrants, 3), vec![1, 10, 11, 16]);

        let diagonal = network(3, Symmetry::Diagonal);
        assert_eq!(domain(&diagonal, 0), vec![1, 6, 8, 16]);
    }

    // Tests even quadrant grids are recognised as unsolvable while building
    // Verified by building without the initial propagation pass
    #[test]
    fn test_quadrant_even_sides_unsolvable() {
        for size in [4, 6, 8, 16] {
            let built =
                ConstraintNetwork::build(size, Symmetry::Quadrants, ConnectivityIndex::standard());
            assert!(
                matches!(
                    built,
                    Err(KolamError::UnsatisfiablePlacement { grid_size, .. }) if grid_size == size
                ),
                "size {size}"
            );
        }

        // A 2x2 grid is one orbit whose corner must close on itself
        let corner = network(2, Symmetry::Quadrants);
        assert_eq!(corner.variable_count(), 1);
        assert_eq!(domain(&corner, 0), vec![6]);
    }

    // Tests an assignment prunes its neighbours and rolls back to a checkpoint
    // Verified by not recording replaced domains on the trail
    #[test]
    fn test_assign_and_restore() {
        let mut network = network(2, Symmetry::None);
        let start = network.checkpoint();
        assert_eq!(start, 0);

        assert!(network.assign(0, 16));
        assert_eq!(domain(&network, 0), vec![16]);
        let connecting = vec![1, 4, 5, 7, 8, 9, 10, 11, 12, 13, 14, 15];
        assert_eq!(domain(&network, 1), connecting);
        assert_eq!(domain(&network, 2), connecting);
        assert_eq!(domain(&network, 3).len(), 16);
        assert!(network.checkpoint() > start);

        network.restore(start);
        for variable in 0..4 {
            assert_eq!(domain(&network, variable).len(), 16);
        }
    }

    // Tests tiles outside the domain are refused without touching the trail
    // Verified by narrowing to the tile before checking membership
    #[test]
    fn test_assign_outside_domain() {
        let mut network = network(3, Symmetry::Rotational);
        assert!(!network.assign(2, 6));
        assert!(!network.assign(7, 1));
        assert_eq!(network.checkpoint(), 0);
        assert_eq!(domain(&network, 2), vec![1, 16]);

        let table = ConnectivityIndex::from_table(vec![vec![2], vec![1]])
            .unwrap_or_else(|e| panic!("table: {e}"));
        let mut checkerboard = ConstraintNetwork::build(2, Symmetry::None, &table)
            .unwrap_or_else(|e| panic!("build: {e}"));
        assert!(checkerboard.assign(0, 1));
        assert_eq!(domain(&checkerboard, 1), vec![2]);
        assert_eq!(domain(&checkerboard, 2), vec![2]);
        assert_eq!(domain(&checkerboard, 3), vec![1]);
        assert!(!checkerboard.assign(3, 2));
    }
}
