// Copyright 2026 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge, result, and error types shared by the spanning-tree builders.

use alloc::vec::Vec;

/// An undirected weighted edge between two vertex ids.
///
/// Orientation carries no meaning: `(u, v)` and `(v, u)` name the same edge.
/// Parallel edges and repeated orientations are valid input to the builders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// One endpoint.
    pub u: u32,
    /// The other endpoint.
    pub v: u32,
    /// Edge weight.
    pub weight: i64,
}

impl Edge {
    /// Create a new edge.
    pub const fn new(u: u32, v: u32, weight: i64) -> Self {
        Self { u, v, weight }
    }
}

/// A spanning tree: the chosen edges plus their total weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    /// Sum of the chosen edge weights.
    pub total_weight: i64,
    /// The chosen edges, in the order the builder committed them.
    pub edges: Vec<Edge>,
}

/// Errors reported by the spanning-tree builders.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MstError {
    /// The graph has no vertices.
    #[error("spanning tree of an empty vertex set")]
    NoVertices,
    /// An edge endpoint is not a valid vertex id.
    #[error("edge endpoint {id} out of range for {vertices} vertices")]
    VertexOutOfRange {
        /// The offending endpoint id.
        id: u32,
        /// Number of vertices in the graph.
        vertices: u32,
    },
    /// The graph is not connected; no spanning tree exists.
    #[error("graph is disconnected")]
    Disconnected,
    /// Greedy growth found no admissible edge under the degree constraint.
    #[error("degree constraint {max_degree} cannot be satisfied")]
    Unsatisfiable {
        /// The degree cap that blocked every remaining candidate.
        max_degree: u32,
    },
}
