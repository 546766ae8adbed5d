//! Scripted decision source: a fixed opening fleet layout and raster-order
//! fire, no prompting.

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::coord::Coordinate;

use super::{Decider, Request};

/// Known-good fleet layout for the default extent, in fleet order.
const SCRIPTED_PLACEMENTS: &[&str] = &[
    "a0v", "o2v", "a1h", "a6h", "d7v", "b1u", "j5u", "m5u", "c0u", "o7u",
];

/// Automated player: places its fleet from the script (falling back to the
/// engine's random-placement shortcut once the script runs out or the board
/// is not the default size) and fires across the enemy board in raster
/// order, wrapping at the bottom-right corner.
pub struct AutoPilot {
    script: &'static [&'static str],
    next_placement: usize,
    row: usize,
    col: usize,
    width: usize,
    height: usize,
}

impl AutoPilot {
    pub fn new(width: usize, height: usize) -> Self {
        let script: &'static [&'static str] =
            if width == BOARD_WIDTH && height == BOARD_HEIGHT {
                SCRIPTED_PLACEMENTS
            } else {
                &[]
            };
        Self {
            script,
            next_placement: 0,
            row: 0,
            col: 0,
            width,
            height,
        }
    }

    fn next_target(&mut self) -> Coordinate {
        let target = Coordinate::new(self.row, self.col);
        if self.col == self.width - 1 {
            self.col = 0;
            self.row = if self.row == self.height - 1 {
                0
            } else {
                self.row + 1
            };
        } else {
            self.col += 1;
        }
        target
    }
}

impl Default for AutoPilot {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

impl Decider for AutoPilot {
    fn next_token(&mut self, request: Request) -> anyhow::Result<String> {
        Ok(match request {
            Request::Action => "F".to_string(),
            Request::FireTarget => self.next_target().to_string(),
            Request::Placement(_) => match self.script.get(self.next_placement) {
                Some(token) => {
                    self.next_placement += 1;
                    (*token).to_string()
                }
                // empty token asks the engine for a random placement
                None => String::new(),
            },
            // never reached while the autopilot only ever fires
            Request::ScanCenter | Request::ShipToMove => "A0".to_string(),
            Request::MovePlacement => "A0V".to_string(),
        })
    }
}
