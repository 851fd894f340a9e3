// Copyright 2026 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closest-pair basics.
//!
//! Build a small point cloud, run both solvers, and print the winning pair.
//!
//! Run:
//! - `cargo run -p proxima_demos --example closest_basics`

use kurbo::Point;
use proxima_closest::{closest_pair_brute_force, find_closest_pair};

fn main() {
    let points = [
        Point::new(2.0, 3.0),
        Point::new(12.0, 30.0),
        Point::new(40.0, 50.0),
        Point::new(5.0, 1.0),
        Point::new(12.0, 10.0),
        Point::new(3.0, 4.0),
    ];

    let pair = find_closest_pair(&points).unwrap();
    println!(
        "closest pair: ({},{})({},{})",
        pair.a.x, pair.a.y, pair.b.x, pair.b.y
    );
    println!("distance: {}", pair.distance());

    // The exhaustive scan agrees on the minimum separation.
    let oracle = closest_pair_brute_force(&points).unwrap();
    assert_eq!(pair.distance(), oracle.distance(), "solvers must agree");
}
