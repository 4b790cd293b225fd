/*
edges.rs

Copyright 2025 Hervé Quatremain

This file is part of Sleuthgraph.

Sleuthgraph is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Sleuthgraph is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Sleuthgraph. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Roll the edges between the profiles.
//!
//! The vertexes are processed in index order.
//! A set tracks the vertexes already attached to vertex 0.
//! When the current vertex is not in that set, it is linked to a random vertex with a lower
//! index (an anchor edge), which is always attached already.
//! The vertex then rolls an edge against every other vertex.
//! The roll for vertex `k` is drawn from `k/2..size-1`, so that vertexes with a higher index
//! have a better chance to be picked.
//! Rolling stops once the vertex reaches the degree cap.
//!
//! The player vertex (the last one) never rolls and is never picked by a roll: it only gets an
//! edge to the tutorial vertex, just before it.

use log::debug;
use rand::Rng;

use super::graph::Graph;
use super::key_set::KeySet;

/// Add random edges to the graph.
///
/// All the vertexes must have been added to the graph already.
pub fn roll_edges<R: Rng + ?Sized>(graph: &mut Graph, degree_cap: usize, rng: &mut R) {
    let size: usize = graph.size();
    if size < 2 {
        return;
    }

    let mut connected: KeySet = KeySet::new();
    connected.insert(0);

    for index in 0..size - 1 {
        roll_vertex_edges(graph, index, &mut connected, degree_cap, rng);
    }

    graph.insert_edge(size - 1, size - 2);
}

/// Attach the vertex if needed, and then roll its edges against the other vertexes.
fn roll_vertex_edges<R: Rng + ?Sized>(
    graph: &mut Graph,
    index: usize,
    connected: &mut KeySet,
    degree_cap: usize,
    rng: &mut R,
) {
    let size: usize = graph.size();

    if !connected.contains(index) {
        let anchor: usize = rng.random_range(0..index);
        graph.insert_edge(index, anchor);
        connected.insert(index);
        debug!("Anchor edge {index}-{anchor}");
    }

    for k in (0..size).filter(|k| *k != index) {
        if graph.vertex_degree(index) >= degree_cap {
            break;
        }
        let roll: usize = rng.random_range(k / 2..size - 1);
        if roll == k {
            // The edge might already exist, but the roll still counts
            graph.insert_edge(index, k);
            connected.insert(k);
        }
    }
    debug!("Vertex {index}: degree {}", graph.vertex_degree(index));
}
