//! A full match between two turn engines: placement for both, then strictly
//! alternating attack turns until one fleet is destroyed.

use std::io::Write;

use rand::rngs::SmallRng;

use crate::turn::TurnEngine;

pub struct Game<W: Write> {
    a: TurnEngine<W>,
    b: TurnEngine<W>,
}

impl<W: Write> Game<W> {
    pub fn new(a: TurnEngine<W>, b: TurnEngine<W>) -> Self {
        Self { a, b }
    }

    pub fn player_a(&self) -> &TurnEngine<W> {
        &self.a
    }

    pub fn player_b(&self) -> &TurnEngine<W> {
        &self.b
    }

    /// Run the match to completion and return the winner's name. The first
    /// engine attacks first; the defender's fleet is checked right after
    /// each turn, so the attacker wins the moment the last cell is hit.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<String> {
        log::info!("starting match: {} vs {}", self.a.name(), self.b.name());
        self.a.placement_phase(rng)?;
        self.b.placement_phase(rng)?;
        loop {
            let b_name = self.b.name().to_string();
            self.a.play_turn(self.b.board_mut(), &b_name)?;
            if self.b.has_lost() {
                return self.announce_winner(true);
            }
            let a_name = self.a.name().to_string();
            self.b.play_turn(self.a.board_mut(), &a_name)?;
            if self.a.has_lost() {
                return self.announce_winner(false);
            }
        }
    }

    fn announce_winner(&mut self, a_won: bool) -> anyhow::Result<String> {
        let winner = if a_won { self.a.name() } else { self.b.name() }.to_string();
        log::info!("player {winner} has won the game");
        for engine in [&mut self.a, &mut self.b] {
            writeln!(engine.output_mut(), "Player {winner} has won the game!")?;
        }
        Ok(winner)
    }
}
