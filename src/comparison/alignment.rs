use ndarray::Array2;

use crate::comparison::types::Alignment;

/// Predecessor of a cell on the cheapest path reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Start,
    /// From `(i - 1, j - 1)`
    Diagonal,
    /// From `(i - 1, j)`
    Down,
    /// From `(i, j - 1)`
    Right,
}

/// Find the minimum-cost monotone path through a distance matrix.
///
/// The path starts at `(0, 0)`, ends in the bottom-right cell and moves one
/// row, one column or both per step. Equal costs prefer the diagonal, then
/// the vertical predecessor. An empty matrix yields an empty path.
pub fn find_alignment_path(distances: &Array2<f64>) -> Alignment {
    let (rows, cols) = distances.dim();
    if rows == 0 || cols == 0 {
        return Alignment {
            path: Vec::new(),
            cost: 0.0,
        };
    }

    let mut cost = Array2::<f64>::zeros((rows, cols));
    let mut steps = Array2::from_elem((rows, cols), Step::Start);

    for i in 0..rows {
        for j in 0..cols {
            let (previous, step) = match (i, j) {
                (0, 0) => (0.0, Step::Start),
                (0, _) => (cost[[0, j - 1]], Step::Right),
                (_, 0) => (cost[[i - 1, 0]], Step::Down),
                (_, _) => {
                    let diagonal = cost[[i - 1, j - 1]];
                    let down = cost[[i - 1, j]];
                    let right = cost[[i, j - 1]];
                    if diagonal <= down && diagonal <= right {
                        (diagonal, Step::Diagonal)
                    } else if down <= right {
                        (down, Step::Down)
                    } else {
                        (right, Step::Right)
                    }
                }
            };
            cost[[i, j]] = previous + distances[[i, j]];
            steps[[i, j]] = step;
        }
    }

    // Backtrack from the bottom-right cell
    let mut path = Vec::with_capacity(rows + cols - 1);
    let (mut i, mut j) = (rows - 1, cols - 1);
    loop {
        path.push((i, j));
        match steps[[i, j]] {
            Step::Start => break,
            Step::Diagonal => {
                i -= 1;
                j -= 1;
            }
            Step::Down => i -= 1,
            Step::Right => j -= 1,
        }
    }
    path.reverse();

    Alignment {
        path,
        cost: cost[[rows - 1, cols - 1]],
    }
}
