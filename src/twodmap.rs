// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

/// Defines the basic lattice: An addressable two-dimensional field
/// containing one value per cell.  The same container holds the cost
/// field, the cumulative-cost table, and the predecessor table.
///
/// Storage is row-major, so every row is a contiguous slice; the
/// cumulative builder relies on that to hand each row out in chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell set to `P::default()`.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Returns `None` if the buffer
    /// doesn't hold exactly `width * height` cells.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Option<Self> {
        if cells.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            cells,
        })
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// (width, height), in the same order `image` uses.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// A single row as a slice.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[P]> + '_ {
        // chunks() panics on zero; an empty map has no rows anyway.
        let width = (self.width as usize).max(1);
        self.cells.chunks(width).take(self.height as usize)
    }

    /// The backing buffer, row-major.
    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.cells
    }

    /// Produce a new map with x and y swapped.  The receiver is left
    /// untouched.
    pub fn transpose(&self) -> Self {
        let mut flipped = TwoDimensionalMap::new(self.height, self.width);
        for y in 0..self.height {
            for x in 0..self.width {
                flipped[(y, x)] = self[(x, y)];
            }
        }
        flipped
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values, as `(x, y)`.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values, as `(x, y)`.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressing_is_x_then_y() {
        let map = TwoDimensionalMap::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(map[(0, 0)], 1);
        assert_eq!(map[(2, 0)], 3);
        assert_eq!(map[(0, 1)], 4);
        assert_eq!(map.row(1), &[4, 5, 6]);
    }

    #[test]
    fn from_vec_rejects_short_buffers() {
        assert!(TwoDimensionalMap::from_vec(3, 2, vec![1, 2, 3]).is_none());
    }

    #[test]
    fn transpose_swaps_axes() {
        let map = TwoDimensionalMap::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let flipped = map.transpose();
        assert_eq!(flipped.dimensions(), (2, 3));
        assert_eq!(flipped.as_slice(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(flipped.transpose(), map);
    }

    #[test]
    fn rows_walks_top_to_bottom() {
        let map = TwoDimensionalMap::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rows: Vec<&[i32]> = map.rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..], &[5, 6][..]]);
    }
}
