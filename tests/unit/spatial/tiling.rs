//! Tests for the tiling collection, color assignment and invariant checks

#[cfg(test)]
mod tests {
    use subdivart::AlgorithmError;
    use subdivart::algorithm::{Orientation, SplitRecord, replay};
    use subdivart::spatial::tiling::{UNOWNED_CELL, partition_cell_owners, verify_partition};
    use subdivart::spatial::{Rectangle, Tiling};

    fn two_halves() -> Tiling {
        let records = [SplitRecord {
            index: 0,
            orientation: Orientation::Horizontal,
            break_point: 3,
        }];
        replay(10, 10, &records).unwrap_or_else(|e| unreachable!("valid split: {e}"))
    }

    // Tests the initial canvas holds one full rectangle
    #[test]
    fn test_canvas_initial_rectangle() {
        let tiling = Tiling::canvas(12, 8).unwrap_or_else(|e| unreachable!("{e}"));

        assert_eq!(tiling.len(), 1);
        assert!(!tiling.is_empty());
        let rectangle = tiling.get(0).copied();
        assert_eq!(
            rectangle.map(|r| (r.left, r.right, r.top, r.bottom)),
            Some((0, 12, 8, 0))
        );
        assert_eq!(tiling.total_area(), 96);
        assert_eq!(tiling.canvas_area(), 96);
    }

    // Tests non-positive dimensions are rejected
    // Verified by accepting zero width
    #[test]
    fn test_canvas_rejects_invalid_dimensions() {
        assert!(matches!(
            Tiling::canvas(0, 5),
            Err(AlgorithmError::InvalidDimension {
                parameter: "width",
                value: 0
            })
        ));
        assert!(matches!(
            Tiling::canvas(5, -2),
            Err(AlgorithmError::InvalidDimension {
                parameter: "height",
                value: -2
            })
        ));
    }

    // Tests colors are assigned by position and count mismatches are rejected
    // Verified by zipping without the length check
    #[test]
    fn test_assign_colors() {
        let tiling = two_halves();
        assert!(!tiling.is_colored());

        let short = tiling.clone().assign_colors(vec![[1, 2, 3, 255]]);
        assert!(matches!(
            short,
            Err(AlgorithmError::PaletteMismatch {
                colors: 1,
                rectangles: 2
            })
        ));

        let colored = tiling
            .assign_colors(vec![[1, 2, 3, 255], [4, 5, 6, 255]])
            .unwrap_or_else(|e| unreachable!("{e}"));
        assert!(colored.is_colored());
        assert_eq!(colored.get(1).and_then(|r| r.color), Some([4, 5, 6, 255]));
    }

    #[test]
    fn test_verify_accepts_valid_tiling() {
        assert!(two_halves().verify().is_ok());
    }

    fn violation<T: std::fmt::Debug>(result: Result<T, AlgorithmError>) -> String {
        match result {
            Err(AlgorithmError::TilingViolation { reason }) => reason,
            other => panic!("expected a tiling violation, got {other:?}"),
        }
    }

    // Tests overlapping halves are rejected by both checks
    // Verified by skipping the second rectangle in the coverage loop
    #[test]
    fn test_overlap_rejected() {
        let shifted = [Rectangle::new(0, 6, 10, 0), Rectangle::new(4, 10, 10, 0)];
        assert_eq!(
            violation(verify_partition(10, 10, &shifted)),
            "areas sum to 120, canvas area is 100"
        );
        assert_eq!(
            violation(partition_cell_owners(10, 10, &shifted)),
            "cell (0, 4) covered by rectangles 0 and 1"
        );

        // Same total area, so only the sweep can catch it
        let stacked_twice = [Rectangle::new(0, 2, 1, 0), Rectangle::new(0, 2, 1, 0)];
        assert_eq!(
            violation(verify_partition(2, 2, &stacked_twice)),
            "rectangles 0 and 1 overlap"
        );
    }

    // Tests an uncovered cell is rejected by both checks
    // Verified by returning the owner grid without the final coverage scan
    #[test]
    fn test_hole_rejected() {
        let left_column = [Rectangle::new(0, 1, 2, 0)];

        assert_eq!(
            violation(verify_partition(2, 2, &left_column)),
            "areas sum to 2, canvas area is 4"
        );
        assert_eq!(
            violation(partition_cell_owners(2, 2, &left_column)),
            "cell (0, 1) is not covered"
        );
    }

    // Tests rectangles leaving the canvas are rejected instead of clipped
    // Verified by clamping the rectangle into the canvas before checking
    #[test]
    fn test_out_of_bounds_rejected() {
        let overhang = [Rectangle::new(0, 2, 1, 0), Rectangle::new(0, 2, 3, 1)];

        assert_eq!(
            violation(verify_partition(2, 2, &overhang)),
            "rectangle 1 leaves the 2x2 canvas"
        );
        assert_eq!(
            violation(partition_cell_owners(2, 2, &overhang)),
            "rectangle 1 leaves the 2x2 canvas"
        );

        let negative = [Rectangle::new(-1, 1, 2, 0), Rectangle::new(1, 2, 2, 0)];
        assert!(verify_partition(2, 2, &negative).is_err());
        assert!(partition_cell_owners(2, 2, &negative).is_err());
    }

    #[test]
    fn test_empty_rectangle_rejected() {
        let collapsed = [Rectangle::new(0, 0, 2, 0), Rectangle::new(0, 2, 2, 0)];

        assert!(violation(verify_partition(2, 2, &collapsed)).contains("non-positive extent"));
    }

    // Tests the free checks agree with the tiling methods on generated input
    #[test]
    fn test_partition_checks_accept_split_canvas() {
        let tiling = two_halves();
        let rectangles: Vec<Rectangle> = tiling.iter().copied().collect();

        assert!(verify_partition(10, 10, &rectangles).is_ok());
        assert_eq!(
            partition_cell_owners(10, 10, &rectangles).ok(),
            tiling.cell_owners().ok()
        );
    }

    // Tests every unit cell maps to exactly one rectangle in image row order
    // Verified by indexing rows from the bottom of the canvas
    #[test]
    fn test_cell_owners_image_order() {
        let records = [SplitRecord {
            index: 0,
            orientation: Orientation::Vertical,
            break_point: 1,
        }];
        let tiling = replay(2, 4, &records).unwrap_or_else(|e| unreachable!("{e}"));
        let owners = tiling.cell_owners().unwrap_or_else(|e| unreachable!("{e}"));

        assert_eq!(owners.dim(), (4, 2));
        assert!(owners.iter().all(|&o| o != UNOWNED_CELL));
        // Rectangle 0 keeps [0, 1), the bottom image row
        assert_eq!(owners.get([3, 0]).copied(), Some(0));
        assert_eq!(owners.get([0, 1]).copied(), Some(1));
        assert_eq!(owners.iter().filter(|&&o| o == 1).count(), 6);
    }

    #[test]
    fn test_iteration_order_matches_indices() {
        let tiling = two_halves();
        let lefts: Vec<i64> = (&tiling).into_iter().map(|r| r.left).collect();
        assert_eq!(lefts, vec![0, 3]);
        assert_eq!(tiling.areas(), vec![30, 70]);
    }
}
