// Copyright 2026 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimum spanning tree basics.
//!
//! Build a small weighted graph and print its MST and total cost.
//!
//! Run:
//! - `cargo run -p proxima_demos --example mst_basics`

use proxima_mst::{Edge, minimum_spanning_tree};

fn main() {
    //  (0)----2------(2)----19-------(4)
    //   |\            |            / | \
    //   |  \          |          /   |   9
    //   |    \        |        /     |     \
    //   8     14      25     17      5     (6)
    //   |       \     |     /        |     /
    //   |         \   |   /          |   1
    //   |           \ | /            | /
    //  (1)----21-----(3)----13------(5)
    let edges = [
        Edge::new(0, 1, 8),
        Edge::new(0, 2, 2),
        Edge::new(0, 3, 14),
        Edge::new(1, 3, 21),
        Edge::new(2, 3, 25),
        Edge::new(2, 4, 19),
        Edge::new(3, 4, 17),
        Edge::new(3, 5, 13),
        Edge::new(4, 5, 5),
        Edge::new(4, 6, 9),
        Edge::new(5, 6, 1),
    ];

    let tree = minimum_spanning_tree(7, &edges).unwrap();

    println!("Total path cost is: {}", tree.total_weight);
    print!("MST is: ");
    for e in &tree.edges {
        print!("{{{},{}}} ", e.u, e.v);
    }
    println!();

    assert_eq!(tree.total_weight, 43, "known MST cost of the demo graph");
}
