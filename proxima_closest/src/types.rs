// Copyright 2026 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Result and error types for closest-pair queries.

use kurbo::Point;

/// An unordered pair of input points realizing the minimum separation.
///
/// The pair is reported in the order the search encountered it; callers that
/// need set semantics should compare with [`ClosestPair::same_pair`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClosestPair {
    /// One endpoint of the pair.
    pub a: Point,
    /// The other endpoint.
    pub b: Point,
}

impl ClosestPair {
    /// Euclidean separation of the pair.
    ///
    /// Recomputed from the endpoints on each call; exactly `0.0` when the
    /// endpoints coincide.
    pub fn distance(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Whether `self` and `other` name the same unordered pair.
    ///
    /// Coordinate-exact, in either orientation.
    pub fn same_pair(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

/// Errors reported by the closest-pair entry points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClosestPairError {
    /// The input holds fewer than the two points a pair needs.
    #[error("closest-pair search needs at least 2 points, got {got}")]
    TooFewPoints {
        /// Number of points actually supplied.
        got: usize,
    },
}
