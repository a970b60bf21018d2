use log::{debug, trace};

use super::{
    anchor::Anchor,
    run_length_matrix::{Direction, RunLengthMatrix},
};

/// The anchors discovered in a `RunLengthMatrix`, grouped by how they were
/// found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundAnchors {
    /// Anchors left of `primary`, leftmost first.
    pub left: Vec<Anchor>,

    /// The globally longest run.
    pub primary: Anchor,

    /// Anchors right of `primary`, leftmost first.
    pub right: Vec<Anchor>,
}

impl FoundAnchors {
    /// All anchors from left to right.
    pub fn iter(&self) -> impl Iterator<Item = &Anchor> {
        self.left
            .iter()
            .chain(std::iter::once(&self.primary))
            .chain(self.right.iter())
    }
}

/// Locates the globally longest run and then greedily searches for further
/// runs to its left and right.
///
/// This is not an optimal alignment. Each local search only looks at the
/// part of the matrix beyond the last anchor found in its direction and gives
/// up as soon as the column maxima start to drop (see
/// [`RunLengthMatrix::local_peak`]), so longer runs further away may be
/// missed.
///
/// Returns `None` if the two texts have no token in common.
#[must_use]
pub fn find_anchors(matrix: &RunLengthMatrix) -> Option<FoundAnchors> {
    let primary = Anchor::ending_at(matrix.peak()?);
    debug!(
        "Primary anchor of length {} at new {:?}, old {:?}",
        primary.len(),
        primary.new_range(),
        primary.old_range()
    );

    let left = if primary.new_range().start > 0 {
        search(matrix, &primary, Direction::Left)
    } else {
        Vec::new()
    };

    let right = if primary.new_range().end < matrix.cols() {
        search(matrix, &primary, Direction::Right)
    } else {
        Vec::new()
    };

    Some(FoundAnchors {
        left,
        primary,
        right,
    })
}

/// Repeats the local search in `direction`, each time starting one cell
/// outside the last anchor found, until nothing is found, the last anchor
/// touches the edge of the matrix or the starting row stops moving.
///
/// Returns the anchors ordered from left to right.
fn search(matrix: &RunLengthMatrix, primary: &Anchor, direction: Direction) -> Vec<Anchor> {
    let mut found = Vec::new();
    let mut boundary = primary.clone();
    let mut previous_row = None;

    loop {
        let (row, col) = start_outside(matrix, &boundary, direction);
        if previous_row == Some(row) {
            break;
        }
        previous_row = Some(row);

        let Some(peak) = matrix.local_peak(direction, row, col) else {
            break;
        };

        // The traced run may reach back into already claimed tokens, only
        // the unclaimed part becomes an anchor.
        let unclaimed = match direction {
            Direction::Left => Anchor::ending_at(peak).clip(
                0..boundary.old_range().start,
                0..boundary.new_range().start,
            ),
            Direction::Right => Anchor::ending_at(peak).clip(
                boundary.old_range().end..matrix.rows(),
                boundary.new_range().end..matrix.cols(),
            ),
        };
        let Some(anchor) = unclaimed else {
            break;
        };
        trace!(
            "{direction:?} search from ({row}, {col}) found new {:?}, old {:?}",
            anchor.new_range(),
            anchor.old_range()
        );

        let touches_edge = match direction {
            Direction::Left => anchor.new_range().start == 0,
            Direction::Right => anchor.new_range().end == matrix.cols(),
        };

        found.push(anchor.clone());
        if touches_edge {
            break;
        }
        boundary = anchor;
    }

    if direction == Direction::Left {
        found.reverse();
    }

    found
}

/// The cell diagonally adjacent to `anchor` in `direction`, clamped to the
/// matrix.
fn start_outside(matrix: &RunLengthMatrix, anchor: &Anchor, direction: Direction) -> (usize, usize) {
    match direction {
        Direction::Left => (
            anchor.old_range().start.saturating_sub(1),
            anchor.new_range().start.saturating_sub(1),
        ),
        Direction::Right => (
            anchor.old_range().end.min(matrix.rows().saturating_sub(1)),
            anchor.new_range().end.min(matrix.cols().saturating_sub(1)),
        ),
    }
}
