use battleship_engine::{Coordinate, GameError, Grid, MAX_BOARD_SIZE};

#[test]
fn test_parse_corners() {
    let grid = Grid::new(10).unwrap();
    assert_eq!(grid.parse("A1").unwrap(), Coordinate::new(0, 0));
    assert_eq!(grid.parse("J10").unwrap(), Coordinate::new(9, 9));
    assert_eq!(grid.parse("c5").unwrap(), Coordinate::new(2, 4));
    assert_eq!(grid.parse("  B7 ").unwrap(), Coordinate::new(1, 6));
}

#[test]
fn test_parse_rejects_out_of_range_and_malformed() {
    let grid = Grid::new(10).unwrap();
    for text in ["K1", "A11", "A0", "A01", "", "5A", "A", "AA1", "A-1", "A1x"] {
        assert!(
            matches!(grid.parse(text), Err(GameError::InvalidCoordinate(_))),
            "{:?} should not parse",
            text
        );
    }
}

#[test]
fn test_format_matches_parse() {
    let grid = Grid::new(10).unwrap();
    assert_eq!(grid.format(Coordinate::new(9, 9)), "J10");
    assert_eq!(grid.format(Coordinate::new(2, 4)), "C5");
    for c in grid.cells() {
        assert_eq!(grid.parse(&grid.format(c)).unwrap(), c);
    }
}

#[test]
fn test_neighbors_clipped() {
    let grid = Grid::new(5).unwrap();
    assert_eq!(
        grid.neighbors(Coordinate::new(0, 0)),
        vec![Coordinate::new(1, 0), Coordinate::new(0, 1)]
    );
    assert_eq!(
        grid.neighbors(Coordinate::new(2, 2)),
        vec![
            Coordinate::new(1, 2),
            Coordinate::new(3, 2),
            Coordinate::new(2, 1),
            Coordinate::new(2, 3),
        ]
    );
    assert_eq!(grid.neighbors(Coordinate::new(4, 4)).len(), 2);
}

#[test]
fn test_bounds_and_sizes() {
    let grid = Grid::new(5).unwrap();
    assert!(grid.in_bounds(Coordinate::new(4, 4)));
    assert!(!grid.in_bounds(Coordinate::new(5, 0)));
    assert_eq!(grid.cells().count(), 25);

    assert_eq!(Grid::new(0).unwrap_err(), GameError::InvalidBoardSize { size: 0 });
    assert!(Grid::new(MAX_BOARD_SIZE).is_ok());
    assert!(Grid::new(MAX_BOARD_SIZE + 1).is_err());
}

#[test]
fn test_coordinate_ordering_is_row_major() {
    let mut cells = vec![Coordinate::new(1, 0), Coordinate::new(0, 5), Coordinate::new(0, 1)];
    cells.sort();
    assert_eq!(
        cells,
        vec![Coordinate::new(0, 1), Coordinate::new(0, 5), Coordinate::new(1, 0)]
    );
}
