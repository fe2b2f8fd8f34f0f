// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Orientation normalizer
//!
//! The seam search only knows how to go top-to-bottom.  A left-to-right
//! request is handled by flipping the field 90° first, so that each
//! column becomes a contiguous row, running the same search, and then
//! flipping the resulting tables back.  Nothing here mutates the
//! caller's field; the flip is always a fresh copy.

use crate::costfield::{Cost, CostField};
use crate::errors::SeamError;
use crate::twodmap::TwoDimensionalMap;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Which way a seam runs across the field.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Direction {
    /// One cell per row; the seam holds column indices.  Removing it
    /// makes an image narrower.
    TopToBottom,
    /// One cell per column; the seam holds row indices.  Removing it
    /// makes an image shorter.
    LeftToRight,
}

impl Direction {
    /// The tags `FromStr` understands, canonical spelling first.
    pub const TAGS: [&'static str; 6] = [
        "top-to-bottom",
        "left-to-right",
        "vertical",
        "horizontal",
        "v",
        "h",
    ];

    /// Present the field so that the seam runs top-to-bottom.
    pub fn normalize<'a, T: Cost>(self, field: &'a CostField<T>) -> Cow<'a, CostField<T>> {
        match self {
            Direction::TopToBottom => Cow::Borrowed(field),
            Direction::LeftToRight => Cow::Owned(field.transpose()),
        }
    }

    /// Undo `normalize` on one of the tables computed from the
    /// normalized field.
    pub fn denormalize<P: Default + Copy>(self, table: TwoDimensionalMap<P>) -> TwoDimensionalMap<P> {
        match self {
            Direction::TopToBottom => table,
            Direction::LeftToRight => table.transpose(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Direction::TopToBottom => "top-to-bottom",
            Direction::LeftToRight => "left-to-right",
        })
    }
}

impl FromStr for Direction {
    type Err = SeamError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "top-to-bottom" | "vertical" | "v" => Ok(Direction::TopToBottom),
            "left-to-right" | "horizontal" | "h" => Ok(Direction::LeftToRight),
            _ => Err(SeamError::invalid(format!(
                "unrecognized direction '{}', expected one of: {}",
                tag,
                Direction::TAGS.join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> CostField<f64> {
        CostField::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn top_to_bottom_passes_through() {
        let f = field();
        let normalized = Direction::TopToBottom.normalize(&f);
        assert!(matches!(normalized, Cow::Borrowed(_)));
        assert_eq!(*normalized, f);
    }

    #[test]
    fn left_to_right_transposes_a_copy() {
        let f = field();
        let normalized = Direction::LeftToRight.normalize(&f);
        assert_eq!(normalized.dimensions(), (2, 3));
        assert_eq!(normalized.as_map().row(0), &[1.0, 4.0]);
        // The caller's field is untouched.
        assert_eq!(f.dimensions(), (3, 2));
    }

    #[test]
    fn denormalize_inverts_normalize() {
        let f = field();
        for &direction in &[Direction::TopToBottom, Direction::LeftToRight] {
            let table = direction.normalize(&f).as_map().clone();
            assert_eq!(&direction.denormalize(table), f.as_map());
        }
    }

    #[test]
    fn tags_parse() {
        assert_eq!("top-to-bottom".parse::<Direction>(), Ok(Direction::TopToBottom));
        assert_eq!("Vertical".parse::<Direction>(), Ok(Direction::TopToBottom));
        assert_eq!(" h ".parse::<Direction>(), Ok(Direction::LeftToRight));
        assert_eq!("left-to-right".parse::<Direction>(), Ok(Direction::LeftToRight));
        for tag in Direction::TAGS.iter() {
            assert!(tag.parse::<Direction>().is_ok());
        }
    }

    #[test]
    fn unknown_tags_are_invalid_arguments() {
        let err = "diagonal".parse::<Direction>().unwrap_err();
        assert!(matches!(err, SeamError::InvalidArgument(_)));
        assert!(err.to_string().contains("diagonal"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for &direction in &[Direction::TopToBottom, Direction::LeftToRight] {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }
}
