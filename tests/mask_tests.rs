use sea_battle::{CellMask, Coordinate, MaskError};

#[test]
fn test_insert_contains_clear() {
    let mut mask = CellMask::<u64, 6>::new();
    assert!(mask.is_empty());

    mask.insert(Coordinate::new(1, 4)).unwrap();
    assert!(mask.contains(Coordinate::new(1, 4)));
    assert!(!mask.contains(Coordinate::new(4, 1)));
    assert_eq!(mask.count(), 1);

    mask.clear();
    assert!(mask.is_empty());
}

#[test]
fn test_off_grid_cells() {
    let mut mask = CellMask::<u64, 6>::new();
    let outside = Coordinate::new(-1, 2);
    assert!(!mask.contains(outside));
    assert_eq!(mask.insert(outside), Err(MaskError::OutOfBounds(outside)));
    assert_eq!(
        mask.insert(Coordinate::new(0, 6)),
        Err(MaskError::OutOfBounds(Coordinate::new(0, 6)))
    );
}

#[test]
fn test_from_cells_and_iter() {
    let cells = [Coordinate::new(0, 1), Coordinate::new(5, 5)];
    let mask = CellMask::<u64, 6>::from_cells(cells).unwrap();
    let collected: Vec<_> = mask.cells().collect();
    assert_eq!(collected, cells.to_vec());
}

#[test]
fn test_intersection_and_union() {
    let ship = CellMask::<u64, 6>::from_cells([Coordinate::new(2, 2), Coordinate::new(2, 3)]).unwrap();
    let mut forbidden = CellMask::<u64, 6>::from_cells([Coordinate::new(2, 3)]).unwrap();

    let clash: Vec<_> = (ship & forbidden).cells().collect();
    assert_eq!(clash, vec![Coordinate::new(2, 3)]);

    forbidden |= ship;
    assert_eq!(forbidden.count(), 2);
    assert!(forbidden.contains(Coordinate::new(2, 2)));
}

#[test]
fn test_from_cells_rejects_off_grid() {
    let res = CellMask::<u64, 6>::from_cells([Coordinate::new(0, 0), Coordinate::new(6, 0)]);
    assert_eq!(res, Err(MaskError::OutOfBounds(Coordinate::new(6, 0))));
}
