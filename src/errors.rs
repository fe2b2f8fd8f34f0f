// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised while validating a cost field or assembling a seam.

use failure::Fail;

/// Everything that can go wrong on the way to a seam.  All of these are
/// detected before (or instead of) doing any real work, and none of
/// them are recoverable by retrying.
#[derive(Debug, Fail, PartialEq, Eq, Clone)]
pub enum SeamError {
    /// The caller handed us something we can't search: a multi-channel
    /// field, an empty field, a NaN, an unknown direction tag.
    #[fail(display = "invalid argument: {}", _0)]
    InvalidArgument(String),

    /// The cumulative and predecessor tables don't describe the same
    /// lattice.  This is a programming error, not bad input.
    #[fail(
        display = "shape mismatch: cumulative table is {}x{}, predecessor table is {}x{}",
        cumulative_width, cumulative_height, predecessor_width, predecessor_height
    )]
    ShapeMismatch {
        cumulative_width: u32,
        cumulative_height: u32,
        predecessor_width: u32,
        predecessor_height: u32,
    },

    /// A predecessor table entry names a column that isn't there.
    /// Like `ShapeMismatch`, this means the tables were built wrong.
    #[fail(
        display = "predecessor at ({}, {}) is column {}, but the table is {} wide",
        x, y, parent, width
    )]
    PredecessorOutOfRange {
        x: u32,
        y: u32,
        parent: u32,
        width: u32,
    },
}

impl SeamError {
    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        SeamError::InvalidArgument(message.into())
    }

    /// The error for a field that doesn't have exactly one sample per
    /// cell.
    pub fn invalid_channels(channels: u8) -> Self {
        SeamError::invalid(format!(
            "cost field must have exactly one channel per cell, found {}",
            channels
        ))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SeamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_shapes() {
        let err = SeamError::ShapeMismatch {
            cumulative_width: 3,
            cumulative_height: 2,
            predecessor_width: 2,
            predecessor_height: 3,
        };
        assert_eq!(
            err.to_string(),
            "shape mismatch: cumulative table is 3x2, predecessor table is 2x3"
        );
    }

    #[test]
    fn display_names_the_broken_predecessor() {
        let err = SeamError::PredecessorOutOfRange {
            x: 1,
            y: 4,
            parent: 9,
            width: 3,
        };
        assert_eq!(
            err.to_string(),
            "predecessor at (1, 4) is column 9, but the table is 3 wide"
        );
    }

    #[test]
    fn invalid_argument_carries_its_message() {
        let err = SeamError::invalid("cost field has 3 channels");
        assert_eq!(err.to_string(), "invalid argument: cost field has 3 channels");
    }
}
