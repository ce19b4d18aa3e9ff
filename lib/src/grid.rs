//! Geometry shared by boards and templates.

use crate::{cells::Cell, error::Error};
use std::fmt::{self, Formatter};

/// A row-major matrix of cells.
pub(crate) type Matrix = Vec<Vec<Cell>>;

/// Offsets of the eight cells in the neighborhood.
const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Checks that a dimension lies in `min..=max`.
pub(crate) fn check_dimension(
    what: &'static str,
    value: usize,
    min: usize,
    max: usize,
) -> Result<(), Error> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::DimensionOutOfRange {
            what,
            value,
            min,
            max,
        })
    }
}

/// Checks that the matrix has exactly `height` rows of `width` cells.
pub(crate) fn check_shape(cells: &[Vec<Cell>], height: usize, width: usize) -> Result<(), Error> {
    let mismatch = |found_width| Error::ShapeMismatch {
        height,
        width,
        found_height: cells.len(),
        found_width,
    };
    if cells.len() != height {
        return Err(mismatch(cells.first().map_or(0, Vec::len)));
    }
    match cells.iter().find(|row| row.len() != width) {
        Some(row) => Err(mismatch(row.len())),
        None => Ok(()),
    }
}

/// An all-dead matrix.
pub(crate) fn dead_matrix(height: usize, width: usize) -> Matrix {
    vec![vec![Cell::Dead; width]; height]
}

/// Number of living cells around `(row, col)`.
///
/// Neighbors outside the matrix do not count; there is no wraparound.
pub(crate) fn live_neighbors(cells: &[Vec<Cell>], row: usize, col: usize) -> usize {
    NBHD.iter()
        .filter_map(|&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            cells.get(r)?.get(c).copied()
        })
        .filter(|cell| cell.is_alive())
        .count()
}

/// Number of living cells in the matrix.
pub(crate) fn live_count(cells: &[Vec<Cell>]) -> usize {
    cells
        .iter()
        .flatten()
        .filter(|cell| cell.is_alive())
        .count()
}

/// Reads rendered rows back into a matrix, returning `(height, width, cells)`.
///
/// Blank lines are skipped. The width is taken from the first row; rows of
/// a different length are left for the caller's shape check to reject.
pub(crate) fn parse_plaintext(text: &str) -> Result<(usize, usize, Matrix), Error> {
    let cells = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.chars()
                .map(|c| Cell::from_char(c).ok_or(Error::InvalidCell(c)))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Matrix, _>>()?;
    let width = cells.first().map_or(0, Vec::len);
    Ok((cells.len(), width, cells))
}

/// Renders one row per line.
pub(crate) fn render(cells: &[Vec<Cell>], f: &mut Formatter) -> fmt::Result {
    for row in cells {
        for cell in row {
            write!(f, "{}", cell.glyph())?;
        }
        writeln!(f)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::Cell::{Alive, Dead};

    #[test]
    fn neighbors_are_clipped() {
        let cells = vec![vec![Alive; 3]; 3];
        assert_eq!(live_neighbors(&cells, 0, 0), 3);
        assert_eq!(live_neighbors(&cells, 0, 1), 5);
        assert_eq!(live_neighbors(&cells, 1, 1), 8);
        assert_eq!(live_neighbors(&cells, 2, 2), 3);
    }

    #[test]
    fn self_is_not_a_neighbor() {
        let mut cells = dead_matrix(3, 3);
        cells[1][1] = Alive;
        assert_eq!(live_neighbors(&cells, 1, 1), 0);
        assert_eq!(live_neighbors(&cells, 0, 0), 1);
    }

    #[test]
    fn shape() {
        let cells = vec![vec![Dead; 5]; 4];
        assert!(check_shape(&cells, 4, 5).is_ok());
        assert!(matches!(
            check_shape(&cells, 4, 4),
            Err(Error::ShapeMismatch {
                found_height: 4,
                found_width: 5,
                ..
            })
        ));
        let mut jagged = vec![vec![Dead; 4]; 4];
        jagged[2].push(Dead);
        assert!(check_shape(&jagged, 4, 4).is_err());
    }

    #[test]
    fn plaintext() {
        let (height, width, cells) = parse_plaintext("O.\nxO\n\n").unwrap();
        assert_eq!((height, width), (2, 2));
        assert_eq!(cells, vec![vec![Alive, Dead], vec![Dead, Alive]]);
        assert!(matches!(parse_plaintext("O?"), Err(Error::InvalidCell('?'))));
    }
}
