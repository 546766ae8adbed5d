use armada::{Board, BoardError, Coordinate, Orientation, Placement, Ship, ShipKind};

fn ship(kind: ShipKind, row: usize, col: usize, orientation: Orientation) -> Ship {
    Ship::build(kind, Placement::new(Coordinate::new(row, col), orientation)).unwrap()
}

fn hit_cells(board: &Board, idx: usize) -> Vec<Coordinate> {
    let s = &board.ships()[idx];
    s.cells()
        .iter()
        .copied()
        .filter(|&c| s.was_hit_at(c))
        .collect()
}

#[test]
fn test_t_shape_move_carries_damage_by_slot() {
    // T-shape at (0,0) facing down: slot 1 is (1,1). After moving to (5,5)
    // facing up, slot 1 is (5,6); the damage must follow the slot, not the
    // absolute coordinate.
    let mut board = Board::new();
    board
        .try_add_ship(ship(ShipKind::Battleship, 0, 0, Orientation::Down))
        .unwrap();
    board.fire_at(Coordinate::new(1, 1)).unwrap();

    board
        .move_ship(
            Coordinate::new(0, 0),
            Placement::new(Coordinate::new(5, 5), Orientation::Up),
        )
        .unwrap();

    let moved = &board.ships()[0];
    assert_eq!(moved.anchor(), Coordinate::new(5, 5));
    assert_eq!(moved.orientation(), Orientation::Up);
    assert_eq!(hit_cells(&board, 0), vec![Coordinate::new(5, 6)]);
    assert_eq!(moved.hit_count(), 1);
}

#[test]
fn test_z_shape_move_keeps_every_slot() {
    let mut board = Board::new();
    board
        .try_add_ship(ship(ShipKind::Carrier, 2, 0, Orientation::Up))
        .unwrap();
    // slots 1 and 7 of 'U' at (2,0): (2,0) and (6,1)
    board.fire_at(Coordinate::new(2, 0)).unwrap();
    board.fire_at(Coordinate::new(6, 1)).unwrap();

    board
        .move_ship(
            Coordinate::new(2, 0),
            Placement::new(Coordinate::new(10, 3), Orientation::Left),
        )
        .unwrap();

    // slots 1 and 7 of 'L' at (10,3): (11,3) and (10,7)
    let mut hits = hit_cells(&board, 0);
    hits.sort();
    assert_eq!(
        hits,
        vec![Coordinate::new(10, 7), Coordinate::new(11, 3)]
    );
}

#[test]
fn test_rectangle_move_keeps_bow_to_stern_damage() {
    let mut board = Board::new();
    board
        .try_add_ship(ship(ShipKind::Submarine, 0, 0, Orientation::Vertical))
        .unwrap();
    board.fire_at(Coordinate::new(0, 0)).unwrap();

    board
        .move_ship(
            Coordinate::new(1, 0),
            Placement::new(Coordinate::new(8, 1), Orientation::Horizontal),
        )
        .unwrap();

    assert_eq!(hit_cells(&board, 0), vec![Coordinate::new(8, 1)]);
}

#[test]
fn test_failed_move_leaves_board_unchanged() {
    let mut board = Board::new();
    board
        .try_add_ship(ship(ShipKind::Submarine, 0, 0, Orientation::Vertical))
        .unwrap();
    board
        .try_add_ship(ship(ShipKind::Destroyer, 5, 5, Orientation::Horizontal))
        .unwrap();
    board.fire_at(Coordinate::new(0, 0)).unwrap();

    // overlapping target
    let err = board
        .move_ship(
            Coordinate::new(0, 0),
            Placement::new(Coordinate::new(5, 5), Orientation::Vertical),
        )
        .unwrap_err();
    assert_eq!(err, BoardError::Overlap);

    // off the board
    let err = board
        .move_ship(
            Coordinate::new(0, 0),
            Placement::new(Coordinate::new(19, 9), Orientation::Vertical),
        )
        .unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds);

    // original ship still in place, damage intact
    let sub = board.ship_at(Coordinate::new(0, 0)).unwrap();
    assert_eq!(sub.anchor(), Coordinate::new(0, 0));
    assert!(sub.was_hit_at(Coordinate::new(0, 0)));
}

#[test]
fn test_move_requires_a_ship_at_the_coordinate() {
    let mut board = Board::new();
    let err = board
        .move_ship(
            Coordinate::new(3, 3),
            Placement::new(Coordinate::new(0, 0), Orientation::Vertical),
        )
        .unwrap_err();
    assert_eq!(err, BoardError::NoShipAt);
}

#[test]
fn test_move_rejects_illegal_orientation() {
    let mut board = Board::new();
    board
        .try_add_ship(ship(ShipKind::Battleship, 0, 0, Orientation::Up))
        .unwrap();
    let err = board
        .move_ship(
            Coordinate::new(1, 0),
            Placement::new(Coordinate::new(5, 5), Orientation::Horizontal),
        )
        .unwrap_err();
    assert!(matches!(err, BoardError::IllegalOrientation { .. }));
}

#[test]
fn test_move_onto_own_footprint_is_allowed() {
    // the moved ship is excluded from the overlap check, so shifting a ship
    // onto cells it already occupies is legal
    let mut board = Board::new();
    board
        .try_add_ship(ship(ShipKind::Destroyer, 0, 0, Orientation::Vertical))
        .unwrap();
    board
        .move_ship(
            Coordinate::new(0, 0),
            Placement::new(Coordinate::new(1, 0), Orientation::Vertical),
        )
        .unwrap();
    assert_eq!(board.ships()[0].anchor(), Coordinate::new(1, 0));
}
