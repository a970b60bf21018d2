use std::fmt::{Display, Formatter};

use crate::Token;

/// The cell holding the longest run seen in some part of a
/// `RunLengthMatrix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Peak {
    /// Index into the old token sequence.
    pub row: usize,

    /// Index into the new token sequence.
    pub col: usize,

    /// Length of the run of matching tokens ending at `(row, col)`.
    pub length: usize,
}

/// Direction in which a local search walks the columns of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Indices from `start` up to the edge of `0..len` in this direction,
    /// `start` included. Empty if `start` is out of range.
    fn walk(self, start: usize, len: usize) -> impl Iterator<Item = usize> {
        let count = match self {
            _ if start >= len => 0,
            Direction::Left => start + 1,
            Direction::Right => len - start,
        };

        (0..count).map(move |offset| match self {
            Direction::Left => start - offset,
            Direction::Right => start + offset,
        })
    }
}

/// `M[row][col]` is the length of the contiguous run of matching tokens that
/// ends exactly at old index `row` and new index `col`:
///
/// ```not_rust
/// M[row][col] = 0                          if old[row] != new[col]
/// M[row][col] = 1 + M[row - 1][col - 1]    otherwise (0 outside the matrix)
/// ```
///
/// Rows are indexed by the old text, columns by the new text. The matrix is
/// stored densely so building it costs `O(|old| * |new|)` time and memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLengthMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
    peak: Option<Peak>,
}

impl RunLengthMatrix {
    /// Builds the matrix in row-major order while tracking its global
    /// maximum. Only a strictly greater value replaces the current maximum,
    /// so among equal runs the one ending first in row-major order wins.
    #[must_use]
    pub fn build(old: &[Token<'_>], new: &[Token<'_>]) -> Self {
        let rows = old.len();
        let cols = new.len();
        let mut cells = vec![0; rows * cols];
        let mut peak: Option<Peak> = None;

        for (row, old_token) in old.iter().enumerate() {
            for (col, new_token) in new.iter().enumerate() {
                if old_token != new_token {
                    continue;
                }

                let length = if row > 0 && col > 0 {
                    cells[(row - 1) * cols + col - 1] + 1
                } else {
                    1
                };
                cells[row * cols + col] = length;

                if peak.is_none_or(|peak| length > peak.length) {
                    peak = Some(Peak { row, col, length });
                }
            }
        }

        Self {
            rows,
            cols,
            cells,
            peak,
        }
    }

    /// Number of old tokens.
    #[must_use]
    pub fn rows(&self) -> usize { self.rows }

    /// Number of new tokens.
    #[must_use]
    pub fn cols(&self) -> usize { self.cols }

    /// Run length at `(row, col)`, 0 outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> usize {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col]
        } else {
            0
        }
    }

    /// The longest run in the whole matrix, or `None` if the texts have no
    /// token in common.
    #[must_use]
    pub fn peak(&self) -> Option<Peak> { self.peak }

    /// Length of the longest run in the whole matrix.
    #[must_use]
    pub fn max_length(&self) -> usize { self.peak.map_or(0, |peak| peak.length) }

    /// Bounded greedy search for the best run in the part of the matrix that
    /// lies on one side of `(row, col)`.
    ///
    /// Columns are visited starting at `col` towards `direction` and every
    /// column is scanned over the rows between `row` and the matrix edge in
    /// the same direction. The best cell of a column replaces the running
    /// candidate only if it is strictly longer. The scan is abandoned at the
    /// first column whose maximum is smaller than the previous column's, even
    /// though a longer run might follow.
    #[must_use]
    pub fn local_peak(&self, direction: Direction, row: usize, col: usize) -> Option<Peak> {
        if row >= self.rows || col >= self.cols {
            return None;
        }

        let mut best: Option<Peak> = None;
        let mut previous_column_max = 0;

        for col in direction.walk(col, self.cols) {
            let column_peak = self.column_peak(direction, row, col);
            let column_max = column_peak.map_or(0, |peak| peak.length);

            if column_max > best.map_or(0, |best| best.length) {
                best = column_peak;
            }

            if column_max < previous_column_max {
                log::trace!("Local {direction:?} search pruned at column {col}");
                break;
            }
            previous_column_max = column_max;
        }

        best
    }

    /// First cell with the largest positive value in `col`, scanning rows
    /// from `row` towards the edge given by `direction`.
    fn column_peak(&self, direction: Direction, row: usize, col: usize) -> Option<Peak> {
        direction.walk(row, self.rows).fold(None, |peak: Option<Peak>, row| {
            let length = self.get(row, col);
            if length > peak.map_or(0, |peak| peak.length) {
                Some(Peak { row, col, length })
            } else {
                peak
            }
        })
    }
}

/// Dumps the matrix with one line per old token and space separated run
/// lengths per new token.
impl Display for RunLengthMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            let line = (0..self.cols)
                .map(|col| self.get(row, col).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}
