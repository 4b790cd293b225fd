/*
generator.rs

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

//! Generate random puzzle graphs and track the player progress.
//!
//! A puzzle is a [`graph::Graph`] object: a list of profiles ([`vertexes::Vertex`] objects) and
//! the acquaintance links (edges) between them.
//! The player deduces the names of the profiles and their links from the visible fields and
//! from clues.
//!
//! To create a puzzle, read the attribute pools with [`attributes::AttributePools`], then create
//! a [`random_graph::RandomGraph`] object and use its [`random_graph::RandomGraph::generate`]
//! method.
//! Generation works in two passes:
//!
//! * [`profiles::roll_profiles`] rolls the profiles from the pools, without repeating names.
//! * [`edges::roll_edges`] rolls the edges so that every vertex is attached to vertex 0.
//!
//! The resulting graph is verified with [`graph::Graph::is_connected`] and the whole generation
//! starts over if it is not connected.
//!
//! During the game, the [`graph::Graph`] methods update the visible fields, the edges found by
//! the player, and the clues given to the player.
//! The [`key_set::KeySet`] and [`clue_cache::ClueCache`] objects support that bookkeeping.

pub mod attributes;
pub mod clue_cache;
pub mod edges;
pub mod graph;
pub mod key_set;
pub mod profiles;
pub mod random_graph;
pub mod vertexes;
