//! Terminal size query for peek.
//!
//! One-shot output needs no raw mode or alternate screen; the only thing
//! taken from the terminal is its size.

use crossterm::terminal;

/// Fallback dimensions for pipes and terminals that refuse the size query.
pub const DEFAULT_SIZE: (usize, usize) = (80, 24);

/// Current terminal size in columns and rows, with an 80x24 fallback.
pub fn size_or_default() -> (usize, usize) {
    match terminal::size() {
        Ok((w, h)) if w > 0 => (w as usize, h as usize),
        _ => DEFAULT_SIZE,
    }
}
