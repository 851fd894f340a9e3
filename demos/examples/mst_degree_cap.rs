// Copyright 2026 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spanning trees under a vertex degree cap.
//!
//! The same graph is spanned twice: once unconstrained (Borůvka) and once
//! with at most 3 tree edges per vertex (greedy Prim growth). The cap forces
//! a costlier tree.
//!
//! Run:
//! - `cargo run -p proxima_demos --example mst_degree_cap`

use proxima_mst::{Edge, degree_constrained_mst, minimum_spanning_tree};

fn main() {
    let edges = [
        Edge::new(0, 1, 3),
        Edge::new(0, 5, 2),
        Edge::new(1, 2, 17),
        Edge::new(1, 3, 16),
        Edge::new(2, 3, 8),
        Edge::new(2, 8, 18),
        Edge::new(3, 8, 11),
        Edge::new(3, 4, 4),
        Edge::new(4, 5, 1),
        Edge::new(4, 6, 6),
        Edge::new(4, 7, 5),
        Edge::new(4, 8, 10),
        Edge::new(5, 6, 7),
        Edge::new(6, 7, 15),
        Edge::new(7, 8, 12),
        Edge::new(7, 9, 13),
        Edge::new(8, 9, 9),
    ];

    let unconstrained = minimum_spanning_tree(10, &edges).unwrap();
    println!("unconstrained cost: {}", unconstrained.total_weight);

    let capped = degree_constrained_mst(10, &edges, 3).unwrap();
    println!("degree-capped cost: {}", capped.total_weight);
    for e in &capped.edges {
        println!("  {{{},{}}} weight {}", e.u, e.v, e.weight);
    }

    assert!(
        capped.total_weight >= unconstrained.total_weight,
        "a constraint can only cost more"
    );
}
