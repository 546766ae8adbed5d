//! Board state: placed ships, recorded misses, and attack resolution.

use core::fmt;
use std::collections::HashSet;

use rand::Rng;

use crate::common::BoardError;
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::coord::{Coordinate, Placement};
use crate::ship::{Ship, ShipKind};

/// Per-kind occupied-cell counts inside a sonar window. Counts are cells,
/// not ships: a vessel half inside the window contributes half its cells.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    pub submarines: usize,
    pub destroyers: usize,
    pub battleships: usize,
    pub carriers: usize,
}

impl ScanReport {
    fn tally(&mut self, kind: ShipKind) {
        match kind {
            ShipKind::Submarine => self.submarines += 1,
            ShipKind::Destroyer => self.destroyers += 1,
            ShipKind::Battleship => self.battleships += 1,
            ShipKind::Carrier => self.carriers += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.submarines + self.destroyers + self.battleships + self.carriers
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Submarines occupy {} squares", self.submarines)?;
        writeln!(f, "Destroyers occupy {} squares", self.destroyers)?;
        writeln!(f, "Battleships occupy {} squares", self.battleships)?;
        writeln!(f, "Carriers occupy {} squares", self.carriers)
    }
}

/// A player's private ocean: fixed extent, the ships on it, and the misses
/// recorded against it (shown on the enemy's view).
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    ships: Vec<Ship>,
    misses: HashSet<Coordinate>,
}

impl Board {
    /// An empty board with the configured extent.
    pub fn new() -> Self {
        Self::with_extent(BOARD_WIDTH, BOARD_HEIGHT)
    }

    pub fn with_extent(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ships: Vec::new(),
            misses: HashSet::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, cell: Coordinate) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Whether a miss has been recorded at `cell`.
    pub fn is_miss(&self, cell: Coordinate) -> bool {
        self.misses.contains(&cell)
    }

    /// All ships sunk. A board with no ships is trivially complete.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Validate `ship` against the extent and every ship except `skip`.
    fn check_fit(&self, ship: &Ship, skip: Option<usize>) -> Result<(), BoardError> {
        for &cell in ship.cells() {
            if !self.contains(cell) {
                return Err(BoardError::OutOfBounds);
            }
            for (i, other) in self.ships.iter().enumerate() {
                if Some(i) == skip {
                    continue;
                }
                if other.occupies(cell) {
                    return Err(BoardError::Overlap);
                }
            }
        }
        Ok(())
    }

    /// Add `ship`, rejecting out-of-bounds or overlapping cells. The board
    /// is unchanged on failure.
    pub fn try_add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        self.check_fit(&ship, None)?;
        self.ships.push(ship);
        Ok(())
    }

    /// The ship occupying `cell`, if any. Pure lookup.
    pub fn ship_at(&self, cell: Coordinate) -> Option<&Ship> {
        self.ships.iter().find(|s| s.occupies(cell))
    }

    fn ship_index_at(&self, cell: Coordinate) -> Option<usize> {
        self.ships.iter().position(|s| s.occupies(cell))
    }

    /// Resolve a shot at `target`. A hit marks the cell on the occupying
    /// ship and returns it; firing again at a hit cell returns the ship
    /// again without changing state. A miss is recorded and returns `None`.
    pub fn fire_at(&mut self, target: Coordinate) -> Option<&Ship> {
        match self.ship_index_at(target) {
            Some(i) => {
                self.ships[i].record_hit(target);
                Some(&self.ships[i])
            }
            None => {
                self.misses.insert(target);
                None
            }
        }
    }

    /// Relocate the ship occupying `at` to `placement`, carrying damage by
    /// slot identity. The replacement is validated against the extent and
    /// all other ships before anything is removed, so a failed move leaves
    /// the board untouched.
    pub fn move_ship(&mut self, at: Coordinate, placement: Placement) -> Result<(), BoardError> {
        let idx = self.ship_index_at(at).ok_or(BoardError::NoShipAt)?;
        let moved = self.ships[idx].relocated(placement)?;
        self.check_fit(&moved, Some(idx))?;
        self.ships[idx] = moved;
        Ok(())
    }

    /// Candidate sonar cells around `center`: the full row out to +/-3
    /// columns, single cells 3 rows above and below, 3-wide segments at
    /// +/-2 rows, and 5-wide segments at +/-1 row, clipped to the extent.
    pub fn scan_area(&self, center: Coordinate) -> Vec<Coordinate> {
        let row = center.row as isize;
        let col = center.col as isize;
        let mut candidates: Vec<(isize, isize)> = Vec::with_capacity(25);
        for dc in -3..=3 {
            candidates.push((row, col + dc));
        }
        candidates.push((row + 3, col));
        candidates.push((row - 3, col));
        for dc in -1..=1 {
            candidates.push((row + 2, col + dc));
        }
        for dc in -1..=1 {
            candidates.push((row - 2, col + dc));
        }
        for dc in -2..=2 {
            candidates.push((row + 1, col + dc));
        }
        for dc in -2..=2 {
            candidates.push((row - 1, col + dc));
        }
        candidates
            .into_iter()
            .filter(|&(r, c)| {
                r >= 0 && c >= 0 && (r as usize) < self.height && (c as usize) < self.width
            })
            .map(|(r, c)| Coordinate::new(r as usize, c as usize))
            .collect()
    }

    /// Sonar scan centered on `center`: per-kind occupied-cell counts over
    /// the clipped scan area. Reveals counts, never positions.
    pub fn scan(&self, center: Coordinate) -> ScanReport {
        let mut report = ScanReport::default();
        for cell in self.scan_area(center) {
            if let Some(ship) = self.ship_at(cell) {
                report.tally(ship.kind());
            }
        }
        report
    }

    /// A random legal placement for `kind`, or `UnableToPlace` after a
    /// bounded number of attempts.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        kind: ShipKind,
    ) -> Result<Placement, BoardError> {
        let orientations = kind.orientations();
        let mut attempts = 0;
        while attempts < 100 {
            attempts += 1;
            let orientation = orientations[rng.random_range(0..orientations.len())];
            let anchor = Coordinate::new(
                rng.random_range(0..self.height),
                rng.random_range(0..self.width),
            );
            let placement = Placement::new(anchor, orientation);
            let ship = Ship::build(kind, placement)?;
            if self.check_fit(&ship, None).is_ok() {
                return Ok(placement);
            }
        }
        Err(BoardError::UnableToPlace)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
