/*
graph.rs

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

//! Puzzle graph: the profiles, the edges between them, and the player progress.
//!
//! Vertexes are identified by their position in the graph (starting at 0).
//! The edges are stored in a symmetric adjacency matrix.
//! Edges are undirected and never removed once inserted.
//!
//! Passing an index that does not designate a vertex to the methods that modify the graph is a
//! programming error and panics.
//! Use [`Graph::get_vertex`] to look up a vertex that might not exist.

use log::{Level, debug, log_enabled};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::vertexes::{Field, NUM_FIELDS, NUM_MISC, Vertex};

/// Graph object.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Graph {
    /// Maximum number of vertexes.
    size: usize,

    /// Vertexes, in insertion order.
    vertices: Vec<Vertex>,

    /// Adjacency matrix, stored row by row (`size` x `size`).
    matrix: Vec<bool>,
}

impl Graph {
    /// Create an empty [`Graph`] object that can hold `size` vertexes.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            vertices: Vec::with_capacity(size),
            matrix: vec![false; size * size],
        }
    }

    /// Maximum number of vertexes in the graph.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of vertexes added so far.
    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    /// Return the vertex at the given index, or None if there is no such vertex.
    pub fn get_vertex(&self, id: usize) -> Option<&Vertex> {
        let v: Option<&Vertex> = self.vertices.get(id);
        if v.is_none() {
            debug!(
                "Vertex {id} does not exist (the graph has {} vertexes)",
                self.count()
            );
        }
        v
    }

    /// Iterate over the vertexes in index order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    fn vertex(&self, id: usize) -> &Vertex {
        match self.vertices.get(id) {
            Some(v) => v,
            None => panic!("Vertex {id} out of range (0..{})", self.count()),
        }
    }

    fn vertex_mut(&mut self, id: usize) -> &mut Vertex {
        let count: usize = self.count();
        match self.vertices.get_mut(id) {
            Some(v) => v,
            None => panic!("Vertex {id} out of range (0..{count})"),
        }
    }

    //
    // Structure
    //

    /// Append a vertex with all its fields hidden and return its index.
    ///
    /// # Panics
    ///
    /// Panics if the graph is already full.
    pub fn add_vertex(&mut self, name: &str, country: &str, misc: [String; NUM_MISC]) -> usize {
        assert!(
            self.count() < self.size,
            "Cannot add vertex {name}: the graph is full ({} vertexes)",
            self.size
        );
        self.vertices.push(Vertex::new(name, country, misc));
        self.count() - 1
    }

    /// Insert an edge between two vertexes.
    ///
    /// Inserting an edge that already exists does nothing.
    /// Return whether the edge was added.
    ///
    /// # Panics
    ///
    /// Panics if one of the vertexes does not exist, or if both indexes are the same.
    pub fn insert_edge(&mut self, v1: usize, v2: usize) -> bool {
        assert_ne!(v1, v2, "Vertex {v1} cannot be linked to itself");
        if self.adjacent(v1, v2) {
            return false;
        }
        self.vertex_mut(v1).edge_count += 1;
        self.vertex_mut(v2).edge_count += 1;
        self.matrix[v1 * self.size + v2] = true;
        self.matrix[v2 * self.size + v1] = true;
        true
    }

    /// Whether the two vertexes share an edge.
    ///
    /// Indexes outside the graph are never adjacent.
    pub fn adjacent(&self, v1: usize, v2: usize) -> bool {
        v1 < self.size && v2 < self.size && self.matrix[v1 * self.size + v2]
    }

    /// Number of edges of the vertex.
    pub fn vertex_degree(&self, id: usize) -> usize {
        self.vertex(id).edge_count
    }

    /// Indexes of the vertexes adjacent to the given vertex, in increasing order.
    pub fn neighbors(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |k| self.adjacent(id, *k))
    }

    /// Whether every vertex can be reached from vertex 0.
    ///
    /// An empty graph is considered connected.
    pub fn is_connected(&self) -> bool {
        if self.count() == 0 {
            return true;
        }

        let mut visited: Vec<bool> = vec![false; self.count()];
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(self.count());

        visited[0] = true;
        queue.push_back(0);
        while let Some(v) = queue.pop_front() {
            for k in self.neighbors(v) {
                if k < visited.len() && !visited[k] {
                    visited[k] = true;
                    queue.push_back(k);
                }
            }
        }
        visited.iter().all(|v| *v)
    }

    //
    // Player progress
    //

    /// Make the given field of the vertex visible to the player.
    pub fn open_field(&mut self, id: usize, field: Field) {
        self.vertex_mut(id).field_access[field.index()] = true;
    }

    /// Make all the fields of the vertex visible to the player.
    pub fn open_all_fields(&mut self, id: usize) {
        self.vertex_mut(id).field_access = [true; NUM_FIELDS];
    }

    /// Whether the player can see the given field of the vertex.
    pub fn check_field(&self, id: usize, field: Field) -> bool {
        self.vertex(id).is_open(field)
    }

    /// Whether the player has not linked the two vertexes yet.
    pub fn edge_unique(&self, v1: usize, v2: usize) -> bool {
        !self.vertex(v1).edges_found.contains(v2)
    }

    /// Record that the player found the edge between the two vertexes.
    ///
    /// The clue caches of both vertexes are invalidated because they might contain clues about
    /// the other vertex.
    ///
    /// # Panics
    ///
    /// Panics if the vertexes do not share an edge, or if the edge was already recorded.
    pub fn record_edge_found(&mut self, v1: usize, v2: usize) {
        assert!(
            self.adjacent(v1, v2),
            "Vertexes {v1} and {v2} do not share an edge"
        );
        assert!(
            self.edge_unique(v1, v2),
            "Edge {v1}-{v2} has already been found"
        );

        for (a, b) in [(v1, v2), (v2, v1)] {
            let v: &mut Vertex = self.vertex_mut(a);
            v.edges_found_count += 1;
            v.edges_found.insert(b);
            v.clue_cache_built = false;
        }
        debug!("Edge {v1}-{v2} found");
    }

    /// Recompute the completion status of the vertex and return it.
    ///
    /// A vertex is complete when its name is visible and all its edges have been found.
    pub fn compute_status(&mut self, id: usize) -> bool {
        self.vertex_mut(id).update_status()
    }

    /// Number of vertexes whose last computed status is complete.
    pub fn completed_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.status).count()
    }

    /// Give the player a new clue about the neighbors of the vertex.
    ///
    /// The clues are the countries and misc facts of the neighbors that the player has not linked
    /// to the vertex yet.
    /// They are cached in the vertex and given one at a time, each neighbor's country coming
    /// after its misc facts.
    /// The player vertex is a neighbor like any other: its facts are given as clues too.
    /// The dispensed clue is appended to the clue log of the vertex and returned.
    ///
    /// Return None, and leave the clue log unchanged, when no clue is left.
    pub fn build_clue(&mut self, id: usize) -> Option<String> {
        if !self.vertex(id).clue_cache_built {
            let clues: Vec<String> = self
                .neighbors(id)
                .filter(|k| self.edge_unique(id, *k))
                .flat_map(|k| {
                    let n: &Vertex = self.vertex(k);
                    std::iter::once(n.country.clone()).chain(n.misc.iter().cloned())
                })
                .collect();

            debug!("Clue cache for vertex {id}: {} clues", clues.len());
            let v: &mut Vertex = self.vertex_mut(id);
            v.clue_cache.clear();
            for clue in clues {
                v.clue_cache.push(clue);
            }
            v.clue_cache_built = true;
            v.clue_batch_pending = true;
        }

        let v: &mut Vertex = self.vertex_mut(id);
        let clue: String = v.clue_cache.pop()?;
        // Separate the clues of a new batch from the previous ones
        if v.clue_batch_pending {
            v.clue_log.push('\n');
            v.clue_batch_pending = false;
        }
        v.clue_log.push('\n');
        v.clue_log.push_str(&clue);
        Some(clue)
    }

    /// Whether [`Graph::build_clue`] can still give a clue for the vertex.
    pub fn has_clue(&self, id: usize) -> bool {
        let v: &Vertex = self.vertex(id);
        if v.clue_cache_built {
            !v.clue_cache.is_empty()
        } else {
            self.neighbors(id).any(|k| self.edge_unique(id, k))
        }
    }

    /// All the clues given for the vertex so far.
    pub fn clue_log(&self, id: usize) -> &str {
        self.vertex(id).clue_log()
    }

    /// Reveal the vertexes up to `depth` edges away from the given vertex (the vertex included).
    ///
    /// Return the vertexes that were hidden before the call, in breadth-first order.
    pub fn reveal_from(&mut self, id: usize, depth: usize) -> Vec<usize> {
        let mut newly_revealed: Vec<usize> = Vec::new();
        let mut visited: Vec<bool> = vec![false; self.count()];
        let mut queue: VecDeque<(usize, usize)> = VecDeque::new();

        assert!(id < self.count(), "Vertex {id} out of range (0..{})", self.count());
        visited[id] = true;
        queue.push_back((id, 0));
        while let Some((v, d)) = queue.pop_front() {
            let vx: &mut Vertex = self.vertex_mut(v);
            if !vx.revealed {
                vx.revealed = true;
                newly_revealed.push(v);
            }
            if d == depth {
                continue;
            }
            let next: Vec<usize> = self.neighbors(v).filter(|k| !visited[*k]).collect();
            for k in next {
                visited[k] = true;
                queue.push_back((k, d + 1));
            }
        }
        newly_revealed
    }

    /// Names of all the vertexes, in index order.
    pub fn roster(&self) -> Vec<&str> {
        self.vertices.iter().map(|v| v.name.as_str()).collect()
    }

    /// Print the vertexes and their edges.
    pub fn debug(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        for (id, v) in self.vertices.iter().enumerate() {
            let access: Vec<&str> = Field::ALL
                .iter()
                .map(|f| if v.is_open(*f) { "o" } else { "." })
                .collect();
            let row: String = (0..self.size)
                .map(|k| if self.adjacent(id, k) { '1' } else { '0' })
                .collect();
            debug!(
                "{id:>3} {} ({}) [{}] access={} edges={}/{} {row}",
                v.name,
                v.country,
                v.misc.join(", "),
                access.concat(),
                v.edges_found_count,
                v.edge_count,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn misc(prefix: &str) -> [String; NUM_MISC] {
        [
            format!("{prefix} misc 0"),
            format!("{prefix} misc 1"),
            format!("{prefix} misc 2"),
        ]
    }

    /// Path graph 0 - 1 - 2 - 3, plus the edge 1 - 3.
    #[fixture]
    fn graph() -> Graph {
        let mut g: Graph = Graph::new(4);
        for (name, country) in [("Ada", "Chile"), ("Bo", "Peru"), ("Cy", "Togo"), ("Di", "Oman")] {
            g.add_vertex(name, country, misc(name));
        }
        g.insert_edge(0, 1);
        g.insert_edge(1, 2);
        g.insert_edge(2, 3);
        g.insert_edge(1, 3);
        g
    }

    #[rstest]
    fn insert_edge_twice_is_idempotent(mut graph: Graph) {
        let before: Graph = graph.clone();

        assert!(!graph.insert_edge(1, 0));
        assert!(!graph.insert_edge(0, 1));
        assert_eq!(graph.matrix, before.matrix);
        assert_eq!(graph.vertex_degree(0), 1);
        assert_eq!(graph.vertex_degree(1), 3);
    }

    #[rstest]
    fn matrix_is_symmetric(graph: Graph) {
        for i in 0..4 {
            assert!(!graph.adjacent(i, i));
            for j in 0..4 {
                assert_eq!(graph.adjacent(i, j), graph.adjacent(j, i));
            }
        }
        assert!(!graph.adjacent(0, 42));
    }

    #[rstest]
    fn connectivity(graph: Graph) {
        assert!(graph.is_connected());

        let mut g: Graph = Graph::new(3);
        g.add_vertex("a", "b", misc("a"));
        g.add_vertex("c", "d", misc("c"));
        g.add_vertex("e", "f", misc("e"));
        g.insert_edge(1, 2);
        assert!(!g.is_connected());
        g.insert_edge(0, 2);
        assert!(g.is_connected());
    }

    #[test]
    fn get_vertex_out_of_range_is_none() {
        let g: Graph = Graph::new(2);

        assert!(g.get_vertex(0).is_none());
        assert!(g.get_vertex(5).is_none());
    }

    #[test]
    #[should_panic(expected = "graph is full")]
    fn add_vertex_beyond_size_panics() {
        let mut g: Graph = Graph::new(1);
        g.add_vertex("a", "b", misc("a"));
        g.add_vertex("c", "d", misc("c"));
    }

    #[rstest]
    fn edge_found_is_no_longer_unique(mut graph: Graph) {
        assert!(graph.edge_unique(1, 2));
        graph.record_edge_found(1, 2);

        assert!(!graph.edge_unique(1, 2));
        assert!(!graph.edge_unique(2, 1));
        assert!(graph.edge_unique(1, 3));
        assert_eq!(graph.get_vertex(1).map(|v| v.edges_found_count()), Some(1));
        assert_eq!(graph.get_vertex(2).map(|v| v.edges_found_count()), Some(1));
    }

    #[rstest]
    #[should_panic(expected = "do not share an edge")]
    fn record_non_adjacent_edge_panics(mut graph: Graph) {
        graph.record_edge_found(0, 2);
    }

    #[rstest]
    #[should_panic(expected = "already been found")]
    fn record_edge_twice_panics(mut graph: Graph) {
        graph.record_edge_found(0, 1);
        graph.record_edge_found(1, 0);
    }

    #[rstest]
    #[case(false, false, false)]
    #[case(true, false, false)]
    #[case(false, true, false)]
    #[case(true, true, true)]
    fn status_requires_name_and_all_edges(
        mut graph: Graph,
        #[case] name_open: bool,
        #[case] all_edges: bool,
        #[case] expected: bool,
    ) {
        if name_open {
            graph.open_field(2, Field::Name);
        }
        graph.record_edge_found(2, 1);
        if all_edges {
            graph.record_edge_found(2, 3);
        }
        assert_eq!(graph.compute_status(2), expected);
        assert_eq!(graph.get_vertex(2).map(|v| v.status()), Some(expected));
        assert_eq!(graph.completed_count(), usize::from(expected));
    }

    #[rstest]
    fn open_fields(mut graph: Graph) {
        graph.open_field(0, Field::Misc2);
        assert!(graph.check_field(0, Field::Misc2));
        assert!(!graph.check_field(0, Field::Name));

        graph.open_all_fields(3);
        assert!(Field::ALL.iter().all(|f| graph.check_field(3, *f)));
    }

    #[rstest]
    fn clues_cover_unlinked_neighbors_country_last(mut graph: Graph) {
        graph.record_edge_found(1, 0);

        let mut clues: Vec<String> = Vec::new();
        while let Some(c) = graph.build_clue(1) {
            clues.push(c);
        }

        // Neighbors 2 and 3 are not linked yet; the highest index is on top of the stack
        let expected: Vec<String> = [
            "Di misc 2",
            "Di misc 1",
            "Di misc 0",
            "Oman",
            "Cy misc 2",
            "Cy misc 1",
            "Cy misc 0",
            "Togo",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(clues, expected);
        assert!(!graph.has_clue(1));
    }

    #[rstest]
    fn clue_log_gets_a_batch_separator(mut graph: Graph) {
        let header: String = graph.clue_log(0).to_string();

        assert_eq!(graph.build_clue(0).as_deref(), Some("Bo misc 2"));
        assert_eq!(graph.build_clue(0).as_deref(), Some("Bo misc 1"));
        assert_eq!(
            graph.clue_log(0),
            format!("{header}\n\nBo misc 2\nBo misc 1")
        );
    }

    #[rstest]
    fn no_clue_when_all_neighbors_are_linked(mut graph: Graph) {
        graph.record_edge_found(0, 1);
        let log: String = graph.clue_log(0).to_string();

        assert!(!graph.has_clue(0));
        assert_eq!(graph.build_clue(0), None);
        assert_eq!(graph.build_clue(0), None);
        assert_eq!(graph.clue_log(0), log);
    }

    #[rstest]
    fn finding_an_edge_rebuilds_the_clue_cache(mut graph: Graph) {
        assert_eq!(graph.build_clue(3).as_deref(), Some("Cy misc 2"));
        graph.record_edge_found(3, 2);

        // Only vertex 1 is left
        let mut clues: Vec<String> = Vec::new();
        while let Some(c) = graph.build_clue(3) {
            clues.push(c);
        }
        assert_eq!(clues.len(), 4);
        assert_eq!(clues.last().map(String::as_str), Some("Peru"));
    }

    #[rstest]
    #[case(0, vec![0])]
    #[case(1, vec![0, 1])]
    #[case(2, vec![0, 1, 2, 3])]
    fn reveal_up_to_depth(mut graph: Graph, #[case] depth: usize, #[case] expected: Vec<usize>) {
        assert_eq!(graph.reveal_from(0, depth), expected);
        // Nothing new the second time
        assert!(graph.reveal_from(0, depth).is_empty());
    }

    #[rstest]
    fn roster_lists_names(graph: Graph) {
        assert_eq!(graph.roster(), vec!["Ada", "Bo", "Cy", "Di"]);
        assert_eq!(graph.neighbors(1).collect::<Vec<usize>>(), vec![0, 2, 3]);
    }
}
