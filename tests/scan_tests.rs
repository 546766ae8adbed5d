use std::collections::HashSet;

use armada::{Board, Coordinate, Orientation, Placement, ScanReport, Ship, ShipKind};

fn ship(kind: ShipKind, row: usize, col: usize, orientation: Orientation) -> Ship {
    Ship::build(kind, Placement::new(Coordinate::new(row, col), orientation)).unwrap()
}

/// The diamond around (r, c): |dr| + |dc| <= 3.
fn diamond(r: isize, c: isize) -> HashSet<(isize, isize)> {
    let mut cells = HashSet::new();
    for dr in -3isize..=3 {
        for dc in -3isize..=3 {
            if dr.abs() + dc.abs() <= 3 {
                cells.insert((r + dr, c + dc));
            }
        }
    }
    cells
}

#[test]
fn test_scan_area_is_the_full_diamond_when_unclipped() {
    let board = Board::with_extent(10, 10);
    let area = board.scan_area(Coordinate::new(5, 5));
    assert_eq!(area.len(), 25);
    let got: HashSet<(isize, isize)> = area
        .iter()
        .map(|c| (c.row as isize, c.col as isize))
        .collect();
    assert_eq!(got, diamond(5, 5));
}

#[test]
fn test_scan_area_is_clipped_at_the_corner() {
    let board = Board::with_extent(10, 10);
    let area = board.scan_area(Coordinate::new(0, 0));
    let got: HashSet<(isize, isize)> = area
        .iter()
        .map(|c| (c.row as isize, c.col as isize))
        .collect();
    let expected: HashSet<(isize, isize)> = diamond(0, 0)
        .into_iter()
        .filter(|&(r, c)| (0..10).contains(&r) && (0..10).contains(&c))
        .collect();
    assert_eq!(got, expected);
    // quarter of the diamond survives: the center, (0,1..=3), (1..=3,0),
    // (1,1), (1,2), (2,1)
    assert_eq!(area.len(), 10);
}

#[test]
fn test_scan_counts_cells_per_kind() {
    let mut board = Board::with_extent(10, 10);
    // both submarine cells inside the window
    board
        .try_add_ship(ship(ShipKind::Submarine, 2, 5, Orientation::Vertical))
        .unwrap();
    // all three destroyer cells on the center row
    board
        .try_add_ship(ship(ShipKind::Destroyer, 5, 2, Orientation::Horizontal))
        .unwrap();
    // T-shape with two of four cells inside
    board
        .try_add_ship(ship(ShipKind::Battleship, 7, 5, Orientation::Up))
        .unwrap();
    // carrier entirely outside
    board
        .try_add_ship(ship(ShipKind::Carrier, 0, 7, Orientation::Up))
        .unwrap();

    let report = board.scan(Coordinate::new(5, 5));
    assert_eq!(
        report,
        ScanReport {
            submarines: 2,
            destroyers: 3,
            battleships: 2,
            carriers: 0,
        }
    );
    assert_eq!(report.total(), 7);
}

#[test]
fn test_scan_reveals_nothing_on_empty_water() {
    let board = Board::new();
    let report = board.scan(Coordinate::new(10, 5));
    assert_eq!(report, ScanReport::default());
}

#[test]
fn test_scan_report_rendering() {
    let report = ScanReport {
        submarines: 2,
        destroyers: 0,
        battleships: 1,
        carriers: 7,
    };
    let text = report.to_string();
    assert_eq!(
        text,
        "Submarines occupy 2 squares\n\
         Destroyers occupy 0 squares\n\
         Battleships occupy 1 squares\n\
         Carriers occupy 7 squares\n"
    );
}
