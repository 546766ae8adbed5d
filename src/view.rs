//! Text rendering of boards for the output sink.
//!
//! The owner's view reveals ships (kind letter, `*` once hit); the enemy
//! view shows only what the attacker has learned: the kind letter at hit
//! cells and `X` at recorded misses.

use crate::board::Board;
use crate::coord::Coordinate;

fn column_header(width: usize) -> String {
    let digits: Vec<String> = (0..width).map(|c| c.to_string()).collect();
    format!("  {}", digits.join("|"))
}

fn cell_char(board: &Board, cell: Coordinate, own: bool) -> char {
    match board.ship_at(cell) {
        Some(ship) if own => {
            if ship.was_hit_at(cell) {
                '*'
            } else {
                ship.letter()
            }
        }
        Some(ship) => {
            if ship.was_hit_at(cell) {
                ship.letter()
            } else {
                ' '
            }
        }
        None => {
            if !own && board.is_miss(cell) {
                'X'
            } else {
                ' '
            }
        }
    }
}

fn render(board: &Board, own: bool) -> String {
    let header = column_header(board.width());
    let mut lines = vec![header.clone()];
    for row in 0..board.height() {
        let letter = (b'A' + (row % 26) as u8) as char;
        let cells: Vec<String> = (0..board.width())
            .map(|col| cell_char(board, Coordinate::new(row, col), own).to_string())
            .collect();
        lines.push(format!("{} {} {}", letter, cells.join("|"), letter));
    }
    lines.push(header);
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// The player's own ocean, ships revealed.
pub fn render_own(board: &Board) -> String {
    render(board, true)
}

/// The opponent's ocean as known to the attacker.
pub fn render_enemy(board: &Board) -> String {
    render(board, false)
}

/// Own board and enemy view side by side under their headers.
pub fn render_side_by_side(
    mine: &Board,
    enemy: &Board,
    my_header: &str,
    enemy_header: &str,
) -> String {
    let left_width = 2 * mine.width() + 22;
    let left = render_own(mine);
    let right = render_enemy(enemy);
    let mut out = format!("{:pad$}{}\n", format!("     {my_header}"), enemy_header, pad = left_width);
    for (l, r) in left.lines().zip(right.lines()) {
        out.push_str(&format!("{l:left_width$}{r}\n"));
    }
    out
}
