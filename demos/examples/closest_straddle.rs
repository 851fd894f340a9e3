// Copyright 2026 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A closest pair that straddles the dividing line.
//!
//! Each half of the x-ordering is sparse on its own; the true closest pair
//! has one endpoint just left of the median and one just right. Only the
//! strip scan can discover it.
//!
//! Run:
//! - `cargo run -p proxima_demos --example closest_straddle`

use kurbo::Point;
use proxima_closest::find_closest_pair;

fn main() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(0.0, 5.0),
        Point::new(4.9, 2.0),
        Point::new(5.1, 2.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 5.0),
    ];

    let pair = find_closest_pair(&points).unwrap();
    println!(
        "closest pair: ({},{})({},{})",
        pair.a.x, pair.a.y, pair.b.x, pair.b.y
    );
    println!("distance: {}", pair.distance());

    assert!(
        pair.distance() < 1.0,
        "the straddling pair must beat both intra-half minima"
    );
}
