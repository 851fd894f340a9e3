// Copyright 2026 the Proxima Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disjoint-set forest with path compression and union by rank.

use alloc::vec::Vec;
use core::cmp::Ordering;

/// Disjoint-set forest over the slot ids `0..len`.
///
/// Starts with every slot in its own singleton set. [`DisjointSets::find`]
/// compresses paths and [`DisjointSets::union`] attaches by rank, so both run
/// in effectively constant amortized time.
#[derive(Clone, Debug)]
pub struct DisjointSets {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl DisjointSets {
    /// Create `len` singleton sets.
    pub fn new(len: u32) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: alloc::vec![0; len as usize],
        }
    }

    /// Representative of the set containing `id`.
    ///
    /// Compresses the walked path so later lookups are direct.
    pub fn find(&mut self, id: u32) -> u32 {
        let mut root = id;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        let mut cur = id;
        while cur != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `false` if they already share a set. The shallower tree is
    /// attached under the deeper one; equal ranks promote the survivor.
    pub fn union(&mut self, a: u32, b: u32) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra as usize].cmp(&self.rank[rb as usize]) {
            Ordering::Less => self.parent[ra as usize] = rb,
            Ordering::Greater => self.parent[rb as usize] = ra,
            Ordering::Equal => {
                self.parent[rb as usize] = ra;
                self.rank[ra as usize] += 1;
            }
        }
        true
    }
}
