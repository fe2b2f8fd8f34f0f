// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The cost field
//!
//! A validated, single-channel, two-dimensional field of costs.  How
//! those costs were computed (gradient magnitude, forward energy,
//! whatever) is the caller's business; all we promise is that every
//! field we hand to the seam search is non-empty, has exactly one
//! scalar per cell, and contains no NaNs or negative infinities.

use crate::errors::{Result, SeamError};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;
use num_traits::{Float, NumCast};
use std::convert::TryFrom;

/// The scalar type a cost field can be made of.  In practice, `f32`
/// or `f64`.
pub trait Cost: Float + Default + Send + Sync + 'static {}

impl<T: Float + Default + Send + Sync + 'static> Cost for T {}

/// A non-empty, NaN-free, single-channel field of costs.
#[derive(Debug, Clone, PartialEq)]
pub struct CostField<T: Cost> {
    map: TwoDimensionalMap<T>,
}

impl<T: Cost> CostField<T> {
    /// Build a field from interleaved samples.  `channels` is the
    /// number of samples per cell, and must be exactly one; it's taken
    /// as an argument so that callers holding multi-channel buffers
    /// get an error rather than a silently reinterpreted field.
    pub fn new(width: u32, height: u32, channels: u8, samples: Vec<T>) -> Result<Self> {
        if channels != 1 {
            return Err(SeamError::invalid_channels(channels));
        }
        if width == 0 || height == 0 {
            return Err(SeamError::invalid(format!(
                "cost field is empty ({}x{})",
                width, height
            )));
        }
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(SeamError::invalid(format!(
                "{}x{} cost field needs {} samples, found {}",
                width,
                height,
                expected,
                samples.len()
            )));
        }
        if let Some(index) = samples.iter().position(|c| c.is_nan()) {
            return Err(SeamError::invalid(format!(
                "cost at ({}, {}) is NaN",
                index % width as usize,
                index / width as usize
            )));
        }
        // +inf is a wall.  -inf would meet a wall in the sweep and sum to
        // NaN, so it's refused here.
        if let Some(index) = samples
            .iter()
            .position(|c| c.is_infinite() && c.is_sign_negative())
        {
            return Err(SeamError::invalid(format!(
                "cost at ({}, {}) is negative infinity",
                index % width as usize,
                index / width as usize
            )));
        }

        TwoDimensionalMap::from_vec(width, height, samples)
            .map(|map| CostField { map })
            .ok_or_else(|| SeamError::invalid("cost field buffer does not match its dimensions"))
    }

    /// Build a field from a list of rows.  Every row must be the same
    /// length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if let Some(y) = rows.iter().position(|r| r.as_ref().len() != width) {
            return Err(SeamError::invalid(format!(
                "row {} has {} cells, expected {}",
                y,
                rows[y].as_ref().len(),
                width
            )));
        }
        let samples = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        CostField::new(dimension(width)?, dimension(height)?, 1, samples)
    }

    /// Read a field out of an image whose pixels carry the costs
    /// directly.  Only single-channel images (Luma) are accepted; an
    /// RGB image is rejected, not converted, since there's no one right
    /// way to fold three channels into one cost.
    pub fn from_image<I, P, S>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        if P::CHANNEL_COUNT != 1 {
            return Err(SeamError::invalid_channels(P::CHANNEL_COUNT));
        }

        let (width, height) = image.dimensions();
        let samples = iproduct!(0..height, 0..width)
            .map(|(y, x)| {
                let sample = image.get_pixel(x, y).channels()[0];
                <T as NumCast>::from(sample).ok_or_else(|| {
                    SeamError::invalid(format!("sample at ({}, {}) is not representable", x, y))
                })
            })
            .collect::<Result<Vec<T>>>()?;
        CostField::new(width, height, 1, samples)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.map.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.map.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.map.dimensions()
    }

    /// The costs, as a read-only lattice.
    pub fn as_map(&self) -> &TwoDimensionalMap<T> {
        &self.map
    }

    /// A new field with rows and columns swapped.  Transposing can't
    /// invalidate a valid field, so this doesn't need to re-check.
    pub fn transpose(&self) -> Self {
        CostField {
            map: self.map.transpose(),
        }
    }
}

fn dimension(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| SeamError::invalid(format!("dimension {} is too large", len)))
}
