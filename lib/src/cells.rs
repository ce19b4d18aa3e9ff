//! Cells on the board.

use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The glyph used to render an [`Alive`](Cell::Alive) cell.
pub const ALIVE_GLYPH: char = 'O';
/// The glyph used to render a [`Dead`](Cell::Dead) cell.
pub const DEAD_GLYPH: char = '.';

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    /// A living cell.
    Alive,
    /// A dead cell.
    #[default]
    Dead,
}

impl Cell {
    /// Whether the cell is alive.
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// The glyph used when rendering the cell.
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Cell::Alive => ALIVE_GLYPH,
            Cell::Dead => DEAD_GLYPH,
        }
    }

    /// Reads a cell from a glyph.
    ///
    /// `O` and `o` are alive. `X`, `x` and `.` are dead, so both the
    /// keys used for template entry and the rendered output can be read.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'O' | 'o' => Some(Cell::Alive),
            'X' | 'x' | DEAD_GLYPH => Some(Cell::Dead),
            _ => None,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs() {
        assert_eq!(Cell::from_char(Cell::Alive.glyph()), Some(Cell::Alive));
        assert_eq!(Cell::from_char(Cell::Dead.glyph()), Some(Cell::Dead));
        assert_eq!(Cell::from_char('x'), Some(Cell::Dead));
        assert_eq!(Cell::from_char('?'), None);
        assert_eq!(Cell::default(), Cell::Dead);
        assert_eq!(Cell::Alive.to_string(), "O");
    }
}
