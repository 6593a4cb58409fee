//! Terminal Grid Rendering
//!
//! Draws the 5x5 board as rows of block cells with the player cell
//! marked, for the CLI's trace mode and final report.

use crate::replayer::position::{GridPosition, GRID_MAX, GRID_MIN};

/// A board cell, two columns wide so the grid renders roughly square.
const CELL: &str = "██";
/// The player marker, same width as a cell.
const MARKER: &str = "xx";

/// Render the board with the player cell marked.
///
/// Each row is five cells followed by a newline; the player's cell is
/// drawn as `xx`.
pub fn render_grid(position: &GridPosition) -> String {
    let side = (GRID_MAX - GRID_MIN + 1) as usize;
    let mut out = String::with_capacity(side * (side * CELL.len() + 1));
    for y in GRID_MIN..=GRID_MAX {
        for x in GRID_MIN..=GRID_MAX {
            if x == position.x && y == position.y {
                out.push_str(MARKER);
            } else {
                out.push_str(CELL);
            }
        }
        out.push('\n');
    }
    out
}
