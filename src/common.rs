//! Shared error types for parsing, board operations, and action choices.
//!
//! All of these are recoverable: the prompt loop reports the reason and asks
//! again. None of them leave a board partially mutated.

use thiserror::Error;

use crate::ship::{Orientation, ShipKind};

/// Lexical errors from coordinate and placement tokens.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("that coordinate is invalid: it does not have the correct format")]
    CoordinateFormat,
    #[error("that placement is invalid: it does not have the correct format")]
    PlacementFormat,
}

/// Errors from placing, relocating, or looking up ships on a board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("that placement is invalid: the ship goes off the board")]
    OutOfBounds,
    #[error("that placement is invalid: the ship overlaps another ship")]
    Overlap,
    #[error("invalid orientation {orientation} for a {kind}")]
    IllegalOrientation {
        kind: ShipKind,
        orientation: Orientation,
    },
    #[error("that coordinate is invalid: no ship is found")]
    NoShipAt,
    #[error("unable to find a legal placement")]
    UnableToPlace,
}

/// What went wrong with a coordinate token: lexically malformed, or well
/// formed but outside the board it is aimed at.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("that coordinate is invalid: it is out of the board")]
    OutOfBoard,
}

/// Errors from validating an attack-phase action choice.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    #[error("that choice is invalid: it does not have the correct format")]
    Format,
    #[error("that choice is invalid: {0}")]
    Unknown(char),
    #[error("no move actions remaining")]
    MovesDepleted,
    #[error("no scan actions remaining")]
    ScansDepleted,
}
