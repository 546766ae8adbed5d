//! Interactive deciders reading tokens from a line-oriented input.

use std::io::{self, BufRead};

use anyhow::bail;

use super::{Decider, Request};

/// Reads tokens from any buffered reader; used directly in tests with a
/// `Cursor` over scripted input.
pub struct Console<R: BufRead> {
    input: R,
}

impl<R: BufRead> Console<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Decider for Console<R> {
    fn next_token(&mut self, _request: Request) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            bail!("input closed before the game finished");
        }
        Ok(line.trim().to_string())
    }
}

/// Reads tokens from the process stdin, locking per line so that two
/// hot-seat players can share the terminal.
pub struct StdinConsole;

impl Decider for StdinConsole {
    fn next_token(&mut self, _request: Request) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = io::stdin().read_line(&mut line)?;
        if n == 0 {
            bail!("input closed before the game finished");
        }
        Ok(line.trim().to_string())
    }
}
