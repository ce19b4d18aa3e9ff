//! Templates: small named patterns to be placed on a board.

use crate::{
    cells::Cell,
    error::Error,
    grid::{self, Matrix},
};
use std::fmt::{self, Display, Formatter};

/// Minimal height and width of a template.
pub const MIN_TEMPLATE_SIZE: usize = 2;
/// Maximal height and width of a template.
pub const MAX_TEMPLATE_SIZE: usize = 25;
/// Maximal length of a template name, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// Characters that cannot appear in a storage key.
const RESERVED_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// An immutable named pattern.
///
/// A template is only ever read: [`GameBoard::insert_template`](crate::GameBoard::insert_template)
/// copies its living cells onto a board, and keeps no reference to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    name: String,
    height: usize,
    width: usize,
    cells: Matrix,
}

impl Template {
    /// Creates a template, validating the name, the dimensions, and the
    /// shape of the cell matrix.
    pub fn new<S: Into<String>>(
        name: S,
        height: usize,
        width: usize,
        cells: Vec<Vec<Cell>>,
    ) -> Result<Self, Error> {
        let name = name.into();
        Self::validate_name(&name)?;
        grid::check_dimension("Height", height, MIN_TEMPLATE_SIZE, MAX_TEMPLATE_SIZE)?;
        grid::check_dimension("Width", width, MIN_TEMPLATE_SIZE, MAX_TEMPLATE_SIZE)?;
        grid::check_shape(&cells, height, width)?;
        Ok(Template {
            name,
            height,
            width,
            cells,
        })
    }

    /// Creates a template from rendered rows, such as `"OO\nO."`.
    pub fn from_plaintext<S: Into<String>>(name: S, text: &str) -> Result<Self, Error> {
        let (height, width, cells) = grid::parse_plaintext(text)?;
        Self::new(name, height, width, cells)
    }

    /// Checks whether `name` can be used as a template name.
    ///
    /// The name must contain something other than whitespace, be at most
    /// [`MAX_NAME_LEN`] characters, and be free of control characters,
    /// characters reserved in file paths, and leading or trailing whitespace.
    pub fn validate_name(name: &str) -> Result<(), Error> {
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(Error::NameTooLong(len));
        }
        let padding = [name.chars().next(), name.chars().next_back()]
            .into_iter()
            .flatten()
            .find(|c| c.is_whitespace());
        match name
            .chars()
            .find(|c| c.is_control() || RESERVED_CHARS.contains(c))
            .or(padding)
        {
            Some(c) => Err(Error::InvalidNameChar(c)),
            None if name.chars().all(|c| c == '.') => Err(Error::InvalidNameChar('.')),
            None => Ok(()),
        }
    }

    /// Name of the template, also its storage key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The cell matrix, row by row.
    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Local coordinates `(row, col)` of all living cells.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_alive())
                .map(move |(col, _)| (row, col))
        })
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        grid::render(&self.cells, f)
    }
}
