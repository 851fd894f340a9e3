// Copyright 2026 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proxima MST: minimum spanning trees over weighted undirected edge lists.
//!
//! Two builders over the same [`Edge`] list model:
//!
//! - [`minimum_spanning_tree`]: Borůvka rounds: per component, take the
//!   cheapest outgoing edge, merge with a disjoint-set forest, repeat until
//!   one component remains.
//! - [`degree_constrained_mst`]: greedy Prim growth that refuses edges whose
//!   endpoints have reached a degree cap. A heuristic for the NP-hard
//!   constrained problem; failures are reported, never silently degraded.
//!
//! Both are pure functions of the vertex count and edge list: no I/O, no
//! shared state, deterministic tie-breaks. Graphs are plain edge lists;
//! parallel edges and either orientation of an undirected edge are fine.
//!
//! This crate shares nothing with `proxima_closest`; the two engines are
//! independent siblings in the workspace.
//!
//! # Example
//!
//! ```
//! use proxima_mst::{minimum_spanning_tree, Edge};
//!
//! //  (0)----2------(2)----19-------(4)
//! //   |\            |            / | \
//! //   |  \          |          /   |   9
//! //   |    \        |        /     |     \
//! //   8     14      25     17      5     (6)
//! //   |       \     |     /        |     /
//! //   |         \   |   /          |   1
//! //   |           \ | /            | /
//! //  (1)----21-----(3)----13------(5)
//! let edges = [
//!     Edge::new(0, 1, 8),
//!     Edge::new(0, 2, 2),
//!     Edge::new(0, 3, 14),
//!     Edge::new(1, 3, 21),
//!     Edge::new(2, 3, 25),
//!     Edge::new(2, 4, 19),
//!     Edge::new(3, 4, 17),
//!     Edge::new(3, 5, 13),
//!     Edge::new(4, 5, 5),
//!     Edge::new(4, 6, 9),
//!     Edge::new(5, 6, 1),
//! ];
//!
//! let tree = minimum_spanning_tree(7, &edges).unwrap();
//! assert_eq!(tree.total_weight, 43);
//! assert_eq!(tree.edges.len(), 6);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod boruvka;
pub mod dsu;
pub mod prim;
pub mod types;

pub use boruvka::minimum_spanning_tree;
pub use dsu::DisjointSets;
pub use prim::degree_constrained_mst;
pub use types::{Edge, MstError, SpanningTree};
