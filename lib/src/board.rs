//! The game board.

use crate::{
    cancel::Cancel,
    cells::Cell,
    error::Error,
    grid::{self, Matrix},
    scheduler::{TurnOutcome, TurnScheduler},
    template::Template,
};
use educe::Educe;
use log::error;
use std::fmt::{self, Display, Formatter};

/// Minimal height and width of a board.
pub const MIN_BOARD_SIZE: usize = 3;
/// Maximal height and width of a board.
pub const MAX_BOARD_SIZE: usize = 50;

/// A bounded board of cells.
///
/// The dimensions never change after construction. The cells are only
/// changed by [`insert_template`](Self::insert_template) and by advancing
/// to the next generation, which replaces the whole matrix at once.
///
/// Two boards are equal when their dimensions and cells are equal;
/// the generation counter is ignored.
#[derive(Clone, Debug, Educe)]
#[educe(PartialEq, Eq)]
pub struct GameBoard {
    height: usize,
    width: usize,
    cells: Matrix,

    /// Number of generations computed since the board was created or restored.
    #[educe(PartialEq(ignore))]
    generation: u64,
}

impl GameBoard {
    /// Creates an all-dead board.
    pub fn new(height: usize, width: usize) -> Result<Self, Error> {
        Self::check_dimensions(height, width)?;
        Ok(GameBoard {
            height,
            width,
            cells: grid::dead_matrix(height, width),
            generation: 0,
        })
    }

    /// Creates a board with the given cells.
    ///
    /// The matrix must have exactly `height` rows of `width` cells.
    pub fn with_cells(height: usize, width: usize, cells: Vec<Vec<Cell>>) -> Result<Self, Error> {
        Self::check_dimensions(height, width)?;
        grid::check_shape(&cells, height, width)?;
        Ok(GameBoard {
            height,
            width,
            cells,
            generation: 0,
        })
    }

    /// Creates a board from rendered rows, such as `"...\nOOO\n..."`.
    pub fn from_plaintext(text: &str) -> Result<Self, Error> {
        let (height, width, cells) = grid::parse_plaintext(text)?;
        Self::with_cells(height, width, cells)
    }

    fn check_dimensions(height: usize, width: usize) -> Result<(), Error> {
        grid::check_dimension("Height", height, MIN_BOARD_SIZE, MAX_BOARD_SIZE)?;
        grid::check_dimension("Width", width, MIN_BOARD_SIZE, MAX_BOARD_SIZE)
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

    /// Gets the cell at `(row, col)`, or `None` if it is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Number of generations computed since the board was created or restored.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of living cells.
    pub fn live_count(&self) -> usize {
        grid::live_count(&self.cells)
    }

    /// Places the living cells of a template with its top left corner at
    /// column `x`, row `y`.
    ///
    /// Dead cells of the template are not copied, so living cells already
    /// on the board stay alive. Fails without touching the board if the
    /// template does not fit.
    pub fn insert_template(&mut self, template: &Template, x: usize, y: usize) -> Result<(), Error> {
        let fits = |offset: usize, size: usize, bound: usize| {
            offset.checked_add(size).map_or(false, |end| end <= bound)
        };
        if !fits(x, template.width(), self.width) || !fits(y, template.height(), self.height) {
            return Err(Error::TemplateOutOfBounds {
                x,
                y,
                width: template.width(),
                height: template.height(),
                board_width: self.width,
                board_height: self.height,
            });
        }
        for (row, col) in template.live_cells() {
            self.cells[y + row][x + col] = Cell::Alive;
        }
        Ok(())
    }

    /// Computes the next generation and replaces the cells with it.
    ///
    /// Every new cell is computed from the previous generation only.
    /// This never suspends and cannot be cancelled.
    pub fn next_generation(&mut self) {
        let mut next = grid::dead_matrix(self.height, self.width);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                let alive = matches!(
                    (cell, grid::live_neighbors(&self.cells, row, col)),
                    (Cell::Alive, 2) | (Cell::Alive, 3) | (Cell::Dead, 3)
                );
                if alive {
                    next[row][col] = Cell::Alive;
                }
            }
        }
        match self.replace_cells(next) {
            Ok(()) => self.generation += 1,
            Err(e) => error!("Generation {} discarded: {}", self.generation + 1, e),
        }
    }

    /// Replaces the whole matrix at once, after checking its shape.
    fn replace_cells(&mut self, cells: Matrix) -> Result<(), Error> {
        grid::check_shape(&cells, self.height, self.width)?;
        self.cells = cells;
        Ok(())
    }

    /// Waits one default pacing interval, then advances one generation,
    /// unless `cancel` fires first.
    ///
    /// See [`TurnScheduler::advance_turn`].
    pub async fn advance_turn<C: Cancel>(&mut self, cancel: &C) -> TurnOutcome {
        TurnScheduler::default().advance_turn(self, cancel).await
    }
}

impl Display for GameBoard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        grid::render(&self.cells, f)
    }
}
