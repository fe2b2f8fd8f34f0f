// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cumulative-cost builder
//!
//! The forward half of the seam search.  Given a field already
//! normalized to run top-to-bottom, build two tables of the same
//! shape:
//!
//!   M(x,0) = e(x,0)
//!   M(x,y) = e(x,y) + min(M(x−1,y−1), M(x,y−1), M(x+1,y−1))
//!
//! where the candidates outside the field are simply left out, and a
//! predecessor table recording which `x` in row `y − 1` won.  Ties go
//! to the leftmost candidate, so the same field always produces the
//! same seam.
//!
//! Every cell in a row depends only on the row above it, never on its
//! siblings.  With the `threaded` feature on, each row is cut into
//! chunks with `chunks_mut` and the chunks are filled in parallel, with
//! a join between rows.

use crate::costfield::{Cost, CostField};
use crate::twodmap::TwoDimensionalMap;
use log::{debug, trace};

/// The two tables produced by the forward sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeTables<T: Cost> {
    /// `cumulative[(x, y)]` is the cheapest total cost of any seam that
    /// starts in row 0 and ends at `(x, y)`.
    pub cumulative: TwoDimensionalMap<T>,
    /// `predecessor[(x, y)]` is the `x` in row `y − 1` that seam came
    /// through.  Row 0 has no predecessors and is left at zero.
    pub predecessor: TwoDimensionalMap<u32>,
}

// The parent window of column `x` in a row `width` wide, as an
// inclusive range.  The edges lose their outside neighbor.
#[inline]
fn parent_window(x: usize, width: usize) -> (usize, usize) {
    let first = if x == 0 { 0 } else { x - 1 };
    let last = if x + 1 >= width { width - 1 } else { x + 1 };
    (first, last)
}

// Pick the cheapest parent for column `x`.  Candidates are visited left
// to right and only a strictly smaller cost displaces the current
// choice, which is what makes the leftmost of equal costs win.
#[inline]
fn cheapest_parent<T: Cost>(above: &[T], x: usize) -> (T, usize) {
    let (first, last) = parent_window(x, above.len());
    let mut best = (above[first], first);
    for candidate in (first + 1)..=last {
        if above[candidate] < best.0 {
            best = (above[candidate], candidate);
        }
    }
    best
}

// Fill a run of cells in one row.  `offset` is the column of the first
// cell in the run; `above` is the complete cumulative row above.
fn fill_span<T: Cost>(
    above: &[T],
    costs: &[T],
    offset: usize,
    cumulative: &mut [T],
    predecessor: &mut [u32],
) {
    for (i, (cell, parent)) in cumulative.iter_mut().zip(predecessor.iter_mut()).enumerate() {
        let x = offset + i;
        let (parent_cost, parent_x) = cheapest_parent(above, x);
        *cell = costs[x] + parent_cost;
        // The width is a u32, so every column index fits in one.
        *parent = parent_x as u32;
    }
}

#[cfg(not(feature = "threaded"))]
fn fill_row<T: Cost>(above: &[T], costs: &[T], cumulative: &mut [T], predecessor: &mut [u32]) {
    fill_span(above, costs, 0, cumulative, predecessor);
}

// Below this many columns per worker, spawning costs more than it
// saves.
#[cfg(feature = "threaded")]
const MIN_CHUNK_WIDTH: usize = 64;

#[cfg(feature = "threaded")]
fn fill_row<T: Cost>(above: &[T], costs: &[T], cumulative: &mut [T], predecessor: &mut [u32]) {
    let width = costs.len();
    let workers = num_cpus::get().max(1);
    let chunk = ((width + workers - 1) / workers).max(MIN_CHUNK_WIDTH);
    fill_row_chunked(above, costs, chunk, cumulative, predecessor);
}

// Fill one row, `chunk` columns per worker.
#[cfg(feature = "threaded")]
fn fill_row_chunked<T: Cost>(
    above: &[T],
    costs: &[T],
    chunk: usize,
    cumulative: &mut [T],
    predecessor: &mut [u32],
) {
    if chunk == 0 || chunk >= costs.len() {
        return fill_span(above, costs, 0, cumulative, predecessor);
    }

    let joined = crossbeam::scope(|scope| {
        for (n, (cumulative, predecessor)) in cumulative
            .chunks_mut(chunk)
            .zip(predecessor.chunks_mut(chunk))
            .enumerate()
        {
            scope.spawn(move |_| fill_span(above, costs, n * chunk, cumulative, predecessor));
        }
    });

    // A panicking worker is a bug in this module; let it keep unwinding.
    if let Err(panic) = joined {
        std::panic::resume_unwind(panic);
    }
}

/// Run the forward sweep over a top-to-bottom field.
pub fn build_cumulative<T: Cost>(field: &CostField<T>) -> CumulativeTables<T> {
    let (width, height) = field.dimensions();
    let costs = field.as_map();
    let row_len = width as usize;

    let mut cumulative: TwoDimensionalMap<T> = TwoDimensionalMap::new(width, height);
    let mut predecessor: TwoDimensionalMap<u32> = TwoDimensionalMap::new(width, height);

    debug!("building cumulative costs over a {}x{} field", width, height);

    // Populate the first row with their native costs.
    cumulative.as_mut_slice()[..row_len].copy_from_slice(costs.row(0));

    // Splitting the buffer at the start of row `y` freezes every row
    // above it while leaving row `y` writable, so the workers share
    // `above` without locks.
    for y in 1..height {
        let start = y as usize * row_len;
        let (done, rest) = cumulative.as_mut_slice().split_at_mut(start);
        let above = &done[start - row_len..];
        let current = &mut rest[..row_len];
        let parents = &mut predecessor.as_mut_slice()[start..start + row_len];
        fill_row(above, costs.row(y), current, parents);
        trace!("row {} of {} filled", y, height - 1);
    }

    CumulativeTables {
        cumulative,
        predecessor,
    }
}
