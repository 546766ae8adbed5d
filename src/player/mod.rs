//! Decision sources for a turn engine.
//!
//! The engine owns the whole action state machine; a [`Decider`] only
//! supplies raw command tokens. `Console` reads them from a line-oriented
//! input, `AutoPilot` generates them. Swapping one for the other changes
//! nothing about validation or board mutation.

use crate::ship::ShipKind;

/// What the engine is currently asking a token for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// An attack-phase action letter (F, M, or S).
    Action,
    /// A coordinate to fire at on the enemy board.
    FireTarget,
    /// The center coordinate of a sonar scan.
    ScanCenter,
    /// A coordinate selecting one of the player's own ships.
    ShipToMove,
    /// The placement a moved ship should end up at.
    MovePlacement,
    /// A placement for the next ship of the setup phase.
    Placement(ShipKind),
}

/// Source of raw command tokens. Returning an error (e.g. input exhausted)
/// aborts the game; invalid tokens are fine and simply get re-requested.
pub trait Decider {
    fn next_token(&mut self, request: Request) -> anyhow::Result<String>;
}

pub mod auto;
pub mod console;

pub use auto::AutoPilot;
pub use console::{Console, StdinConsole};
