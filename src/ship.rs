//! Ship kinds, shape geometry, and per-slot damage tracking.
//!
//! Every (shape, orientation) pair is an independent literal offset table.
//! The tables are deliberately not derived from one canonical polyomino by a
//! rotation formula: the four variants of each shape differ in cell layout
//! and in how slots are assigned, and both must be reproduced exactly.
//!
//! A slot is a structural position on a ship, numbered 1..=N. The i-th entry
//! of a table is slot i+1, so the cell list of a constructed ship doubles as
//! its slot map. Damage is a bit mask over slots, which makes relocation a
//! rebuild-plus-mask-copy rather than a coordinate diff.

use core::fmt;

use crate::common::BoardError;
use crate::coord::{Coordinate, Placement};

/// How a ship lies on the board. Rectangles accept `Horizontal`/`Vertical`;
/// T- and Z-shaped ships accept the four rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    pub const RECT: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
    pub const ROTATIONS: [Orientation; 4] = [
        Orientation::Up,
        Orientation::Down,
        Orientation::Left,
        Orientation::Right,
    ];

    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'H' => Some(Orientation::Horizontal),
            'V' => Some(Orientation::Vertical),
            'U' => Some(Orientation::Up),
            'D' => Some(Orientation::Down),
            'L' => Some(Orientation::Left),
            'R' => Some(Orientation::Right),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
            Orientation::Up => 'U',
            Orientation::Down => 'D',
            Orientation::Left => 'L',
            Orientation::Right => 'R',
        }
    }

    /// Whether this orientation is in `kind`'s legal alphabet.
    pub fn legal_for(self, kind: ShipKind) -> bool {
        if kind.is_rectangular() {
            matches!(self, Orientation::Horizontal | Orientation::Vertical)
        } else {
            matches!(
                self,
                Orientation::Up | Orientation::Down | Orientation::Left | Orientation::Right
            )
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The four vessel kinds of the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipKind {
    Submarine,
    Destroyer,
    Battleship,
    Carrier,
}

impl ShipKind {
    pub const ALL: [ShipKind; 4] = [
        ShipKind::Submarine,
        ShipKind::Destroyer,
        ShipKind::Battleship,
        ShipKind::Carrier,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Battleship => "Battleship",
            ShipKind::Carrier => "Carrier",
        }
    }

    /// Letter used when rendering the player's own board.
    pub const fn letter(self) -> char {
        match self {
            ShipKind::Submarine => 's',
            ShipKind::Destroyer => 'd',
            ShipKind::Battleship => 'b',
            ShipKind::Carrier => 'c',
        }
    }

    /// Number of occupied cells, invariant across orientation.
    pub const fn cell_count(self) -> usize {
        match self {
            ShipKind::Submarine => 2,
            ShipKind::Destroyer => 3,
            ShipKind::Battleship => 4,
            ShipKind::Carrier => 7,
        }
    }

    pub const fn is_rectangular(self) -> bool {
        matches!(self, ShipKind::Submarine | ShipKind::Destroyer)
    }

    /// The orientations a placement of this kind may use.
    pub fn orientations(self) -> &'static [Orientation] {
        if self.is_rectangular() {
            &Orientation::RECT
        } else {
            &Orientation::ROTATIONS
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// T-shape slot tables, slot 1..=4 -> (row, col) offset from the anchor.
const T_UP: [(usize, usize); 4] = [(0, 1), (1, 0), (1, 1), (1, 2)];
const T_RIGHT: [(usize, usize); 4] = [(1, 1), (0, 0), (1, 0), (2, 0)];
const T_DOWN: [(usize, usize); 4] = [(1, 1), (0, 2), (0, 1), (0, 0)];
const T_LEFT: [(usize, usize); 4] = [(1, 0), (2, 1), (1, 1), (0, 1)];

// Z-shape slot tables, slot 1..=7 -> (row, col) offset from the anchor.
const Z_UP: [(usize, usize); 7] = [(0, 0), (1, 0), (2, 0), (3, 0), (2, 1), (3, 1), (4, 1)];
const Z_RIGHT: [(usize, usize); 7] = [(0, 4), (0, 3), (0, 2), (0, 1), (1, 2), (1, 1), (1, 0)];
const Z_DOWN: [(usize, usize); 7] = [(4, 1), (3, 1), (2, 1), (1, 1), (2, 0), (1, 0), (0, 0)];
const Z_LEFT: [(usize, usize); 7] = [(1, 0), (1, 1), (1, 2), (1, 3), (0, 2), (0, 3), (0, 4)];

fn t_offsets(orientation: Orientation) -> &'static [(usize, usize)] {
    match orientation {
        Orientation::Up => &T_UP,
        Orientation::Right => &T_RIGHT,
        Orientation::Down => &T_DOWN,
        Orientation::Left => &T_LEFT,
        // legality is checked before shape dispatch
        Orientation::Horizontal | Orientation::Vertical => {
            unreachable!("rectangular orientation on a T-shape")
        }
    }
}

fn z_offsets(orientation: Orientation) -> &'static [(usize, usize)] {
    match orientation {
        Orientation::Up => &Z_UP,
        Orientation::Right => &Z_RIGHT,
        Orientation::Down => &Z_DOWN,
        Orientation::Left => &Z_LEFT,
        Orientation::Horizontal | Orientation::Vertical => {
            unreachable!("rectangular orientation on a Z-shape")
        }
    }
}

/// Slot-ordered offsets of a `w`x`h` rectangle. `Vertical` keeps the block
/// as given, `Horizontal` transposes it; slots run rows-outer, so the 1xL
/// ships used here number their slots bow to stern.
fn rect_offsets(w: usize, h: usize, orientation: Orientation) -> Vec<(usize, usize)> {
    let (w, h) = match orientation {
        Orientation::Vertical => (w, h),
        Orientation::Horizontal => (h, w),
        _ => unreachable!("rotation orientation on a rectangle"),
    };
    let mut offsets = Vec::with_capacity(w * h);
    for dr in 0..h {
        for dc in 0..w {
            offsets.push((dr, dc));
        }
    }
    offsets
}

/// A placed vessel: fixed geometry plus a mutable per-slot hit mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    anchor: Coordinate,
    orientation: Orientation,
    /// Occupied cells in slot order: `cells[i]` is slot i+1.
    cells: Vec<Coordinate>,
    /// Bit i set means slot i+1 has been hit.
    hits: u8,
}

impl Ship {
    /// Construct a ship of `kind` at `placement`. Fails when the orientation
    /// is outside the kind's alphabet; never consults a board.
    pub fn build(kind: ShipKind, placement: Placement) -> Result<Self, BoardError> {
        if !placement.orientation.legal_for(kind) {
            return Err(BoardError::IllegalOrientation {
                kind,
                orientation: placement.orientation,
            });
        }
        let offsets: Vec<(usize, usize)> = match kind {
            ShipKind::Submarine => rect_offsets(1, 2, placement.orientation),
            ShipKind::Destroyer => rect_offsets(1, 3, placement.orientation),
            ShipKind::Battleship => t_offsets(placement.orientation).to_vec(),
            ShipKind::Carrier => z_offsets(placement.orientation).to_vec(),
        };
        let cells = offsets
            .into_iter()
            .map(|(dr, dc)| placement.anchor.offset(dr, dc))
            .collect();
        Ok(Self {
            kind,
            anchor: placement.anchor,
            orientation: placement.orientation,
            cells,
            hits: 0,
        })
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn letter(&self) -> char {
        self.kind.letter()
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn placement(&self) -> Placement {
        Placement::new(self.anchor, self.orientation)
    }

    /// Occupied cells in slot order.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn occupies(&self, cell: Coordinate) -> bool {
        self.cells.contains(&cell)
    }

    /// Slot id (1..=N) of `cell`, if this ship occupies it.
    pub fn slot_of(&self, cell: Coordinate) -> Option<usize> {
        self.cells.iter().position(|&c| c == cell).map(|i| i + 1)
    }

    /// Mark `cell` hit. Returns `false` when the ship does not occupy the
    /// cell; re-hitting an already-hit cell is a no-op.
    pub fn record_hit(&mut self, cell: Coordinate) -> bool {
        match self.cells.iter().position(|&c| c == cell) {
            Some(slot) => {
                self.hits |= 1 << slot;
                true
            }
            None => false,
        }
    }

    pub fn was_hit_at(&self, cell: Coordinate) -> bool {
        self.cells
            .iter()
            .position(|&c| c == cell)
            .is_some_and(|slot| self.hits & (1 << slot) != 0)
    }

    pub fn hit_count(&self) -> usize {
        self.hits.count_ones() as usize
    }

    /// Sunk when every slot has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hit_count() == self.cells.len()
    }

    /// The same ship rebuilt at `placement`, damage carried over by slot:
    /// because the hit mask is keyed by slot id and slot tables agree across
    /// orientations of a kind, the mask transfers verbatim.
    pub fn relocated(&self, placement: Placement) -> Result<Self, BoardError> {
        let mut moved = Ship::build(self.kind, placement)?;
        moved.hits = self.hits;
        Ok(moved)
    }
}
