// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam finding for content-aware image resizing.
//!
//! Given a single-channel cost field (typically an energy map computed
//! from an image) and a direction, find the connected path of one cell
//! per row (or per column) whose total cost is lowest.
//!
//! ```
//! use seamfinder::{find_seam, CostField, Direction};
//!
//! let field = CostField::from_rows(&[
//!     vec![1.0, 2.0, 3.0],
//!     vec![4.0, 5.0, 6.0],
//!     vec![7.0, 8.0, 9.0],
//! ])?;
//! let found = find_seam(&field, Direction::TopToBottom)?;
//! assert_eq!(found.seam, vec![0, 0, 0]);
//! assert_eq!(found.cost(), 12.0);
//! # Ok::<(), seamfinder::SeamError>(())
//! ```

pub mod costfield;
pub mod cumulative;
pub mod errors;
pub mod orientation;
pub mod reconstruct;
pub mod seamfinder;
pub mod twodmap;

pub use costfield::{Cost, CostField};
pub use cumulative::{build_cumulative, CumulativeTables};
pub use errors::{Result, SeamError};
pub use orientation::Direction;
pub use reconstruct::reconstruct_seam;
pub use seamfinder::{find_seam, SeamFinder, SeamResult};
pub use twodmap::TwoDimensionalMap;
