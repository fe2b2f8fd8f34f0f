// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Path reconstructor: walk the predecessor table back up from the
//! cheapest cell in the last row.

use crate::costfield::Cost;
use crate::errors::{Result, SeamError};
use crate::twodmap::TwoDimensionalMap;
use log::debug;

/// Given the two tables from the forward sweep, return the list of
/// x-coordinates that, when paired with `0..height`, give the cells of
/// the cheapest seam.  The cheapest endpoint is the leftmost one when
/// several tie.
pub fn reconstruct_seam<T: Cost>(
    cumulative: &TwoDimensionalMap<T>,
    predecessor: &TwoDimensionalMap<u32>,
) -> Result<Vec<u32>> {
    if cumulative.dimensions() != predecessor.dimensions() {
        return Err(SeamError::ShapeMismatch {
            cumulative_width: cumulative.width,
            cumulative_height: cumulative.height,
            predecessor_width: predecessor.width,
            predecessor_height: predecessor.height,
        });
    }

    let (width, height) = cumulative.dimensions();
    if width == 0 || height == 0 {
        return Ok(Vec::new());
    }

    // Find the x coordinate of the bottommost cell with the least
    // cumulative cost.
    let last = cumulative.row(height - 1);
    let mut seam_col = (1..last.len())
        .fold(0, |best, x| if last[x] < last[best] { x } else { best }) as u32;
    debug!("seam ends at column {} of row {}", seam_col, height - 1);

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    let mut seam = Vec::with_capacity(height as usize);
    for y in (0..height).rev() {
        seam.push(seam_col);
        if y > 0 {
            let parent = predecessor[(seam_col, y)];
            if parent >= width {
                return Err(SeamError::PredecessorOutOfRange {
                    x: seam_col,
                    y,
                    parent,
                    width,
                });
            }
            seam_col = parent;
        }
    }
    seam.reverse();
    Ok(seam)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map<P: Default + Copy>(width: u32, height: u32, cells: Vec<P>) -> TwoDimensionalMap<P> {
        TwoDimensionalMap::from_vec(width, height, cells).unwrap()
    }

    #[test]
    fn backtracks_through_predecessors() {
        let cumulative = map(3, 3, vec![1.0, 2.0, 3.0, 5.0, 6.0, 8.0, 12.0, 13.0, 15.0]);
        let predecessor = map(3, 3, vec![0, 0, 0, 0, 0, 1, 0, 0, 1]);
        assert_eq!(reconstruct_seam(&cumulative, &predecessor), Ok(vec![0, 0, 0]));
    }

    #[test]
    fn follows_a_diagonal() {
        let cumulative = map(3, 3, vec![0.0, 5.0, 5.0, 5.0, 0.0, 5.0, 5.0, 5.0, 0.0]);
        let predecessor = map(3, 3, vec![0, 0, 0, 0, 0, 1, 0, 1, 1]);
        assert_eq!(reconstruct_seam(&cumulative, &predecessor), Ok(vec![0, 1, 2]));
    }

    #[test]
    fn endpoint_ties_go_left() {
        let cumulative = map(4, 1, vec![3.0, 1.0, 1.0, 1.0]);
        let predecessor = map(4, 1, vec![0; 4]);
        assert_eq!(reconstruct_seam(&cumulative, &predecessor), Ok(vec![1]));
    }

    #[test]
    fn single_column_has_one_choice_per_row() {
        let cumulative = map(1, 3, vec![1.0, 2.0, 3.0]);
        let predecessor = map(1, 3, vec![0; 3]);
        assert_eq!(reconstruct_seam(&cumulative, &predecessor), Ok(vec![0, 0, 0]));
    }

    #[test]
    fn mismatched_tables_are_rejected() {
        let cumulative = map(3, 2, vec![0.0; 6]);
        let predecessor = map(2, 3, vec![0; 6]);
        assert_eq!(
            reconstruct_seam(&cumulative, &predecessor),
            Err(SeamError::ShapeMismatch {
                cumulative_width: 3,
                cumulative_height: 2,
                predecessor_width: 2,
                predecessor_height: 3,
            })
        );
    }

    #[test]
    fn out_of_range_predecessors_are_rejected() {
        let cumulative = map(2, 2, vec![0.0; 4]);
        let predecessor = map(2, 2, vec![0, 0, 7, 0]);
        assert_eq!(
            reconstruct_seam(&cumulative, &predecessor),
            Err(SeamError::PredecessorOutOfRange {
                x: 0,
                y: 1,
                parent: 7,
                width: 2,
            })
        );
    }
}
