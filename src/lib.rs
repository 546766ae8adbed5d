//! Turn-based naval combat on a grid, with movable, oddly shaped ships.
//!
//! Two players each own a private board carrying a fleet of rectangular,
//! T-shaped, and Z-shaped vessels. Attack turns fire at, sonar-scan around,
//! or relocate coordinates on the enemy ocean; damage survives relocation
//! because it is tracked per structural slot rather than per absolute cell.

mod board;
mod common;
mod config;
mod coord;
mod game;
mod logging;
mod player;
mod ship;
mod turn;
mod view;

pub use board::{Board, ScanReport};
pub use common::{ActionError, BoardError, CoordinateError, ParseError};
pub use config::{BOARD_HEIGHT, BOARD_WIDTH, FLEET, MOVE_ACTIONS, SCAN_ACTIONS};
pub use coord::{Coordinate, Placement};
pub use game::Game;
pub use logging::init_logging;
pub use player::{AutoPilot, Console, Decider, Request, StdinConsole};
pub use ship::{Orientation, Ship, ShipKind};
pub use turn::{validate_choice, validate_coordinate, ActionChoice, TurnEngine};
pub use view::{render_enemy, render_own, render_side_by_side};
