// Copyright 2026 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proxima Closest: closest-pair search for points in the plane.
//!
//! Given a slice of [`kurbo::Point`]s, find the two with minimum Euclidean
//! separation.
//!
//! - [`find_closest_pair`]: `O(n log n)` divide-and-conquer. Presorts by x
//!   and by y, splits the x-ordering, mirrors the split onto the y-ordering,
//!   and merges halves through a strip scan around the dividing line.
//! - [`closest_pair_brute_force`]: the `O(n²)` exhaustive scan. Fine for
//!   tiny inputs; the recursion also uses it as its base case.
//!
//! Both return a [`ClosestPair`] whose separation is recomputed on demand,
//! and both reject inputs of fewer than two points with
//! [`ClosestPairError::TooFewPoints`]. Duplicate points are valid input; a
//! reported distance of `0.0` means the set contains coincident points.
//!
//! The search is a pure function of the input slice: no I/O, no shared
//! state, and deterministic results (ties resolve to the first pair the scan
//! order encounters).
//!
//! # Example
//!
//! ```
//! use kurbo::Point;
//! use proxima_closest::find_closest_pair;
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(3.0, 4.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(10.5, 10.0),
//! ];
//!
//! let pair = find_closest_pair(&points).unwrap();
//! assert_eq!(pair.distance(), 0.5);
//! ```
//!
//! ## Float semantics
//!
//! Coordinates are assumed finite (no NaNs or infinities). Debug builds may
//! assert. Comparisons are coordinate-exact; there is no tolerance anywhere,
//! so equal inputs always compare equal.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

// Tests use std float math (sqrt and friends) that core does not provide.
#[cfg(test)]
extern crate std;

pub mod brute;
pub mod divide;
pub mod types;

pub use brute::closest_pair_brute_force;
pub use divide::find_closest_pair;
pub use types::{ClosestPair, ClosestPairError};
