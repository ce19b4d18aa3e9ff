//! Snapshots of boards and templates, for storage.

use crate::{board::GameBoard, cells::Cell, error::Error, template::Template};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A representation of a board which can be easily serialized.
///
/// Restoring a board from its snapshot gives back the same dimensions
/// and cells. The generation counter is not part of the snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardSnapshot {
    /// Height.
    pub height: usize,
    /// Width.
    pub width: usize,
    /// The cells, row by row.
    pub cells: Vec<Vec<Cell>>,
}

impl BoardSnapshot {
    /// Restores the board, validating it like [`GameBoard::with_cells`].
    pub fn board(self) -> Result<GameBoard, Error> {
        GameBoard::with_cells(self.height, self.width, self.cells)
    }
}

impl GameBoard {
    /// Saves the board as a [`BoardSnapshot`].
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            height: self.height(),
            width: self.width(),
            cells: self.cells().to_vec(),
        }
    }
}

/// A representation of a template which can be easily serialized.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemplateRecord {
    /// Name.
    pub name: String,
    /// Height.
    pub height: usize,
    /// Width.
    pub width: usize,
    /// The cells, row by row.
    pub cells: Vec<Vec<Cell>>,
}

impl TemplateRecord {
    /// Restores the template, validating it like [`Template::new`].
    pub fn template(self) -> Result<Template, Error> {
        Template::new(self.name, self.height, self.width, self.cells)
    }
}

impl Template {
    /// Saves the template as a [`TemplateRecord`].
    pub fn record(&self) -> TemplateRecord {
        TemplateRecord {
            name: self.name().to_owned(),
            height: self.height(),
            width: self.width(),
            cells: self.cells().to_vec(),
        }
    }
}
