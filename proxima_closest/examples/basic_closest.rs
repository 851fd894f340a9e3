// Copyright 2026 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Proxima Closest: find the closest pair of a point slice.

use kurbo::Point;
use proxima_closest::find_closest_pair;

fn main() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(3.0, 4.0),
        Point::new(7.0, 7.0),
        Point::new(3.5, 4.5),
    ];

    let pair = find_closest_pair(&points).unwrap();
    println!(
        "closest pair: ({},{})({},{})",
        pair.a.x, pair.a.y, pair.b.x, pair.b.y
    );
    println!("distance: {}", pair.distance());
}
