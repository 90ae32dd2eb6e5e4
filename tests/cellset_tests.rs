use battleship_engine::{CellSet, CellSetError, Cells, Coordinate};

#[test]
fn test_try_new_sizes() {
    assert!(CellSet::<u64, 8>::try_new().is_ok());
    assert!(matches!(
        CellSet::<u8, 3>::try_new(),
        Err(CellSetError::SizeTooLarge { .. })
    ));
    assert!(Cells::try_new().is_ok());
}

#[test]
fn test_insert_remove_contains() {
    let mut set = CellSet::<u16, 4>::new();
    assert!(set.is_empty());
    assert!(set.insert(Coordinate::new(1, 1)).unwrap());
    assert!(!set.insert(Coordinate::new(1, 1)).unwrap());
    assert!(set.contains(Coordinate::new(1, 1)));
    assert_eq!(set.len(), 1);

    assert!(set.remove(Coordinate::new(1, 1)).unwrap());
    assert!(!set.contains(Coordinate::new(1, 1)));
    assert_eq!(
        set.insert(Coordinate::new(4, 0)),
        Err(CellSetError::OutOfRange(Coordinate::new(4, 0)))
    );
    assert!(!set.contains(Coordinate::new(9, 9)));
}

#[test]
fn test_iter_and_set_ops() {
    let a = CellSet::<u16, 4>::from_cells([Coordinate::new(3, 3), Coordinate::new(0, 1)]).unwrap();
    let b = CellSet::<u16, 4>::from_cells([Coordinate::new(0, 1), Coordinate::new(2, 2)]).unwrap();
    let cells: Vec<_> = a.iter().collect();
    assert_eq!(cells, vec![Coordinate::new(0, 1), Coordinate::new(3, 3)]);

    assert!(a.intersects(&b));
    assert_eq!((a & b).len(), 1);
    assert_eq!((a | b).len(), 3);
    assert_eq!((!a).len(), 14);
}
