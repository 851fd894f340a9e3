// Copyright 2026 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Borůvka's algorithm over a weighted undirected edge list.

use alloc::vec;
use alloc::vec::Vec;

use crate::dsu::DisjointSets;
use crate::types::{Edge, MstError, SpanningTree};

/// Build a minimum spanning tree with Borůvka rounds.
///
/// `vertices` is the number of vertex ids (`0..vertices`); `edges` is an
/// undirected edge list. Each round selects, per component, the cheapest edge
/// leaving it (ties broken by position in `edges`, which keeps rounds
/// deterministic when weights repeat), then merges along the selected edges
/// with a disjoint-set forest. The component count at least halves per round.
///
/// A single vertex yields an empty tree of weight 0.
///
/// # Errors
///
/// - [`MstError::NoVertices`] if `vertices` is 0.
/// - [`MstError::VertexOutOfRange`] if an edge endpoint is `>= vertices`.
/// - [`MstError::Disconnected`] if a round finds no edge between components.
pub fn minimum_spanning_tree(vertices: u32, edges: &[Edge]) -> Result<SpanningTree, MstError> {
    if vertices == 0 {
        return Err(MstError::NoVertices);
    }
    check_endpoints(vertices, edges)?;

    let mut sets = DisjointSets::new(vertices);
    let mut tree = Vec::with_capacity((vertices as usize).saturating_sub(1));
    let mut total: i64 = 0;
    let mut components = vertices;

    // Cheapest outgoing edge per component root, as an index into `edges`.
    let mut cheapest: Vec<Option<usize>> = vec![None; vertices as usize];

    while components > 1 {
        cheapest.fill(None);

        for (i, e) in edges.iter().enumerate() {
            let ru = sets.find(e.u);
            let rv = sets.find(e.v);
            if ru == rv {
                continue;
            }
            for root in [ru, rv] {
                let slot = &mut cheapest[root as usize];
                let replace = match *slot {
                    None => true,
                    Some(j) => e.weight < edges[j].weight,
                };
                if replace {
                    *slot = Some(i);
                }
            }
        }

        // Merge along the selected edges. Two components may select the same
        // edge; the second union is a no-op and the edge is kept once.
        let mut merged_any = false;
        for slot in &cheapest {
            let Some(i) = *slot else {
                continue;
            };
            let e = edges[i];
            if sets.union(e.u, e.v) {
                tree.push(e);
                total += e.weight;
                components -= 1;
                merged_any = true;
            }
        }

        if !merged_any {
            return Err(MstError::Disconnected);
        }
    }

    Ok(SpanningTree {
        total_weight: total,
        edges: tree,
    })
}

pub(crate) fn check_endpoints(vertices: u32, edges: &[Edge]) -> Result<(), MstError> {
    for e in edges {
        for id in [e.u, e.v] {
            if id >= vertices {
                return Err(MstError::VertexOutOfRange { id, vertices });
            }
        }
    }
    Ok(())
}
