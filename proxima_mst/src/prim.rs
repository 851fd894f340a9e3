// Copyright 2026 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Degree-constrained spanning trees via Prim-style growth.

use alloc::vec;
use alloc::vec::Vec;

use crate::boruvka::check_endpoints;
use crate::types::{Edge, MstError, SpanningTree};

/// Grow a spanning tree from vertex 0, capping every vertex at `max_degree`
/// tree edges.
///
/// Greedy Prim growth: each step commits the cheapest frontier edge whose far
/// endpoint is unvisited and whose endpoints both have spare degree, then
/// continues from the newly reached vertex. Ties fall to the earlier
/// candidate, so results are deterministic.
///
/// Greedy selection is a heuristic for the (NP-hard) degree-constrained
/// spanning tree problem: it can fail on inputs where a constrained tree
/// exists. A failure is reported, never silently degraded.
///
/// # Errors
///
/// - [`MstError::NoVertices`] if `vertices` is 0.
/// - [`MstError::VertexOutOfRange`] if an edge endpoint is `>= vertices`.
/// - [`MstError::Disconnected`] if no frontier edge reaches an unvisited
///   vertex at all.
/// - [`MstError::Unsatisfiable`] if candidates remain but every one is
///   blocked by the degree cap.
pub fn degree_constrained_mst(
    vertices: u32,
    edges: &[Edge],
    max_degree: u32,
) -> Result<SpanningTree, MstError> {
    if vertices == 0 {
        return Err(MstError::NoVertices);
    }
    check_endpoints(vertices, edges)?;

    // Neighbor lists; both orientations, so growth can leave any endpoint.
    let mut adjacent: Vec<Vec<(u32, i64)>> = vec![Vec::new(); vertices as usize];
    for e in edges {
        adjacent[e.u as usize].push((e.v, e.weight));
        adjacent[e.v as usize].push((e.u, e.weight));
    }

    let mut visited = vec![false; vertices as usize];
    let mut degree = vec![0u32; vertices as usize];
    let mut frontier: Vec<Edge> = Vec::new();
    let mut tree = Vec::with_capacity((vertices as usize).saturating_sub(1));
    let mut total: i64 = 0;

    let mut current = 0u32;
    visited[0] = true;

    while tree.len() + 1 < vertices as usize {
        for &(to, weight) in &adjacent[current as usize] {
            frontier.push(Edge::new(current, to, weight));
        }

        // Cheapest admissible frontier edge to an unvisited vertex. Track
        // whether any candidate reaches unvisited territory at all, to tell
        // a disconnected graph apart from an over-tight degree cap.
        let mut pick: Option<usize> = None;
        let mut reaches_unvisited = false;
        for (i, e) in frontier.iter().enumerate() {
            if visited[e.v as usize] {
                continue;
            }
            reaches_unvisited = true;
            if degree[e.u as usize] >= max_degree || degree[e.v as usize] >= max_degree {
                continue;
            }
            let better = match pick {
                None => true,
                Some(j) => e.weight < frontier[j].weight,
            };
            if better {
                pick = Some(i);
            }
        }

        let Some(i) = pick else {
            return Err(if reaches_unvisited {
                MstError::Unsatisfiable { max_degree }
            } else {
                MstError::Disconnected
            });
        };

        let e = frontier.remove(i);
        visited[e.v as usize] = true;
        degree[e.u as usize] += 1;
        degree[e.v as usize] += 1;
        total += e.weight;
        current = e.v;
        tree.push(e);
    }

    Ok(SpanningTree {
        total_weight: total,
        edges: tree,
    })
}
