// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find a seam
//!
//! The single entry point: normalize the orientation, run the forward
//! sweep, backtrack, and put everything back in the caller's
//! orientation.

use crate::costfield::{Cost, CostField};
use crate::cumulative::{build_cumulative, CumulativeTables};
use crate::errors::Result;
use crate::orientation::Direction;
use crate::reconstruct::reconstruct_seam;
use crate::twodmap::TwoDimensionalMap;
use log::debug;

/// A seam, along with the tables it was read out of.  The tables are in
/// the caller's orientation: for a left-to-right seam, `cumulative[(x, y)]`
/// is the cheapest way to reach `(x, y)` from column 0, and
/// `predecessor[(x, y)]` is a row index in column `x − 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeamResult<T: Cost> {
    /// The direction the seam runs.
    pub direction: Direction,
    /// One index per row (top-to-bottom) or per column (left-to-right).
    pub seam: Vec<u32>,
    pub cumulative: TwoDimensionalMap<T>,
    pub predecessor: TwoDimensionalMap<u32>,
}

impl<T: Cost> SeamResult<T> {
    pub fn len(&self) -> usize {
        self.seam.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seam.is_empty()
    }

    /// Total cost of the seam: the cumulative cost at its last cell.
    pub fn cost(&self) -> T {
        match self.coordinates().last() {
            Some(point) => self.cumulative[point],
            None => T::zero(),
        }
    }

    /// The seam's cells as `(x, y)` coordinates into the caller's field,
    /// in traversal order.
    pub fn coordinates(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let direction = self.direction;
        self.seam.iter().enumerate().map(move |(step, &index)| match direction {
            Direction::TopToBottom => (index, step as u32),
            Direction::LeftToRight => (step as u32, index),
        })
    }
}

/// Find the cheapest seam across `field` in the requested direction.
pub fn find_seam<T: Cost>(field: &CostField<T>, direction: Direction) -> Result<SeamResult<T>> {
    debug!(
        "finding a {} seam across a {}x{} field",
        direction,
        field.width(),
        field.height()
    );

    let normalized = direction.normalize(field);
    let CumulativeTables {
        cumulative,
        predecessor,
    } = build_cumulative(&normalized);
    let seam = reconstruct_seam(&cumulative, &predecessor)?;

    Ok(SeamResult {
        direction,
        seam,
        cumulative: direction.denormalize(cumulative),
        predecessor: direction.denormalize(predecessor),
    })
}

/// This trait defines how we will return seams from something that
/// holds costs.  It's a primitive interface, just enough to make room
/// for multiple seam sources as well as caching.
pub trait SeamFinder<T: Cost> {
    /// Request a seam running in `direction`, with its tables.
    fn find_seam(&self, direction: Direction) -> Result<SeamResult<T>>;

    /// Request a top-to-bottom seam: one column index per row.
    fn find_vertical_seam(&self) -> Result<Vec<u32>> {
        self.find_seam(Direction::TopToBottom).map(|found| found.seam)
    }

    /// Request a left-to-right seam: one row index per column.
    fn find_horizontal_seam(&self) -> Result<Vec<u32>> {
        self.find_seam(Direction::LeftToRight).map(|found| found.seam)
    }
}

impl<T: Cost> SeamFinder<T> for CostField<T> {
    fn find_seam(&self, direction: Direction) -> Result<SeamResult<T>> {
        find_seam(self, direction)
    }
}
