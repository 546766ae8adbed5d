//! Per-player turn orchestration: the placement phase and the attack-phase
//! action state machine (choose -> fire / scan / move -> choose).
//!
//! Recoverable problems (bad tokens, illegal placements, depleted counters)
//! are reported to the output sink and re-prompted; only a failing decider
//! or sink aborts the game. Validation lives in free functions so that
//! non-interactive callers can check a token without entering the loop.

use std::io::Write;

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{ActionError, BoardError, CoordinateError};
use crate::config::{FLEET, MOVE_ACTIONS, SCAN_ACTIONS};
use crate::coord::{Coordinate, Placement};
use crate::player::{Decider, Request};
use crate::ship::{Ship, ShipKind};
use crate::view;

/// An attack-phase action, already checked against the remaining budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionChoice {
    Fire,
    Move,
    Scan,
}

/// Validate an action token against the remaining move/scan budgets.
/// Depleted budgets reject the choice here, before any input for the action
/// itself is consumed.
pub fn validate_choice(
    token: &str,
    moves_left: u32,
    scans_left: u32,
) -> Result<ActionChoice, ActionError> {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() != 1 {
        return Err(ActionError::Format);
    }
    match chars[0].to_ascii_uppercase() {
        'F' => Ok(ActionChoice::Fire),
        'M' if moves_left == 0 => Err(ActionError::MovesDepleted),
        'M' => Ok(ActionChoice::Move),
        'S' if scans_left == 0 => Err(ActionError::ScansDepleted),
        'S' => Ok(ActionChoice::Scan),
        other => Err(ActionError::Unknown(other)),
    }
}

/// Validate a coordinate token against a board extent.
pub fn validate_coordinate(
    token: &str,
    width: usize,
    height: usize,
) -> Result<Coordinate, CoordinateError> {
    let coordinate = Coordinate::parse(token)?;
    if coordinate.row >= height || coordinate.col >= width {
        return Err(CoordinateError::OutOfBoard);
    }
    Ok(coordinate)
}

/// One player's half of a game: the owned board, the remaining action
/// budgets, the fleet still to place, and the collaborators that supply
/// tokens and accept rendered text.
pub struct TurnEngine<W: Write> {
    name: String,
    board: Board,
    moves_left: u32,
    scans_left: u32,
    to_place: Vec<ShipKind>,
    decider: Box<dyn Decider>,
    out: W,
}

impl<W: Write> TurnEngine<W> {
    pub fn new(name: impl Into<String>, board: Board, decider: Box<dyn Decider>, out: W) -> Self {
        Self {
            name: name.into(),
            board,
            moves_left: MOVE_ACTIONS,
            scans_left: SCAN_ACTIONS,
            to_place: FLEET.to_vec(),
            decider,
            out,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn scans_left(&self) -> u32 {
        self.scans_left
    }

    /// Rendered text written so far; lets tests inspect what the player saw.
    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// The player has lost once every ship on their board is sunk.
    pub fn has_lost(&self) -> bool {
        self.board.all_sunk()
    }

    /// Place the whole fleet. Each ship is prompted until a legal placement
    /// is supplied; an empty token places the ship randomly.
    pub fn placement_phase(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        writeln!(self.out, "{}", view::render_own(&self.board))?;
        writeln!(
            self.out,
            "Player {}: you are going to place the following ships. For each ship,\n\
             type the coordinate of the upper left side of the ship, followed by\n\
             H (horizontal) or V (vertical) for rectangular ships, or U/D/L/R for\n\
             the shaped ones. For example A0V places a ship vertically starting\n\
             at A0. Press ENTER alone for a random placement. You have\n\n\
             2 \"Submarines\" (1x2 rectangles)\n\
             3 \"Destroyers\" (1x3 rectangles)\n\
             3 \"Battleships\" (T-shaped, 4 squares)\n\
             2 \"Carriers\" (Z-shaped, 7 squares)\n",
            self.name
        )?;
        for kind in self.to_place.clone() {
            self.place_one(kind, rng)?;
        }
        log::info!("player {} has placed their fleet", self.name);
        Ok(())
    }

    fn place_one(&mut self, kind: ShipKind, rng: &mut SmallRng) -> anyhow::Result<()> {
        loop {
            writeln!(
                self.out,
                "Player {}: where do you want to place a {}?",
                self.name, kind
            )?;
            let token = self.decider.next_token(Request::Placement(kind))?;
            let placement = if token.is_empty() {
                match self.board.random_placement(rng, kind) {
                    Ok(p) => p,
                    Err(e) => {
                        writeln!(self.out, "{e}")?;
                        continue;
                    }
                }
            } else {
                match Placement::parse(&token) {
                    Ok(p) => p,
                    Err(e) => {
                        writeln!(self.out, "{e}")?;
                        continue;
                    }
                }
            };
            let ship = match Ship::build(kind, placement) {
                Ok(s) => s,
                Err(e) => {
                    writeln!(self.out, "{e}")?;
                    continue;
                }
            };
            match self.board.try_add_ship(ship) {
                Ok(()) => {
                    log::debug!("player {} placed a {kind} at {placement}", self.name);
                    writeln!(self.out, "{}", view::render_own(&self.board))?;
                    return Ok(());
                }
                Err(e) => writeln!(self.out, "{e}")?,
            }
        }
    }

    /// Play one attack turn against `enemy`: show both oceans, then run the
    /// choose-action loop until one action resolves.
    pub fn play_turn(&mut self, enemy: &mut Board, enemy_name: &str) -> anyhow::Result<()> {
        writeln!(self.out, "Player {}'s turn:", self.name)?;
        writeln!(
            self.out,
            "{}",
            view::render_side_by_side(
                &self.board,
                enemy,
                "Your ocean",
                &format!("Player {enemy_name}'s ocean"),
            )
        )?;
        loop {
            writeln!(
                self.out,
                "Possible actions for Player {}:\n\n\
                 F Fire at a square\n\
                 M Move a ship to another square ({} remaining)\n\
                 S Sonar scan ({} remaining)\n\n\
                 Player {}, what would you like to do?",
                self.name, self.moves_left, self.scans_left, self.name
            )?;
            let token = self.decider.next_token(Request::Action)?;
            let choice = match validate_choice(&token, self.moves_left, self.scans_left) {
                Ok(c) => c,
                Err(e) => {
                    writeln!(self.out, "{e}")?;
                    continue;
                }
            };
            match choice {
                ActionChoice::Fire => {
                    self.do_fire(enemy)?;
                    break;
                }
                ActionChoice::Scan => {
                    self.scans_left -= 1;
                    self.do_scan(enemy)?;
                    break;
                }
                ActionChoice::Move => {
                    // budget is spent only when the move succeeds
                    if self.do_move()? {
                        self.moves_left -= 1;
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Prompt until a well-formed, in-bounds coordinate arrives.
    fn read_coordinate(
        &mut self,
        prompt: &str,
        request: Request,
        width: usize,
        height: usize,
    ) -> anyhow::Result<Coordinate> {
        loop {
            writeln!(self.out, "{prompt}")?;
            let token = self.decider.next_token(request)?;
            match validate_coordinate(&token, width, height) {
                Ok(c) => return Ok(c),
                Err(e) => writeln!(self.out, "{e}")?,
            }
        }
    }

    fn do_fire(&mut self, enemy: &mut Board) -> anyhow::Result<()> {
        let target = self.read_coordinate(
            "Please choose a coordinate to fire at:",
            Request::FireTarget,
            enemy.width(),
            enemy.height(),
        )?;
        match enemy.fire_at(target) {
            Some(ship) => {
                writeln!(self.out, "You hit a {}!", ship.name())?;
                if ship.is_sunk() {
                    log::info!("player {} sank the enemy {}", self.name, ship.name());
                }
            }
            None => writeln!(self.out, "You missed!")?,
        }
        Ok(())
    }

    fn do_scan(&mut self, enemy: &Board) -> anyhow::Result<()> {
        let center = self.read_coordinate(
            "Please choose the center coordinate for sonar scan:",
            Request::ScanCenter,
            enemy.width(),
            enemy.height(),
        )?;
        let report = enemy.scan(center);
        write!(self.out, "{report}")?;
        Ok(())
    }

    /// One move attempt. `Ok(false)` means a recoverable problem was already
    /// reported and the caller should return to action choice, matching the
    /// fire/scan coordinate loops which instead retry in place.
    fn do_move(&mut self) -> anyhow::Result<bool> {
        writeln!(self.out, "Please choose a ship to move:")?;
        let token = self.decider.next_token(Request::ShipToMove)?;
        let at = match validate_coordinate(&token, self.board.width(), self.board.height()) {
            Ok(c) => c,
            Err(e) => {
                writeln!(self.out, "{e}")?;
                return Ok(false);
            }
        };
        if self.board.ship_at(at).is_none() {
            writeln!(self.out, "{}", BoardError::NoShipAt)?;
            return Ok(false);
        }
        writeln!(self.out, "Please enter the location to move your ship to:")?;
        let token = self.decider.next_token(Request::MovePlacement)?;
        let placement = match Placement::parse(&token) {
            Ok(p) => p,
            Err(e) => {
                writeln!(self.out, "{e}")?;
                return Ok(false);
            }
        };
        match self.board.move_ship(at, placement) {
            Ok(()) => {
                writeln!(self.out, "Move Successfully!")?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.out, "{e}")?;
                Ok(false)
            }
        }
    }
}
