/*
lib.rs

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

//! Sleuthgraph generates social-deduction puzzles and tracks the player progress.
//!
//! A puzzle is a random connected graph of profiles.
//! Each profile has a name, a country, and three misc facts, most of them hidden from the
//! player.
//! Starting from their own profile, the player identifies the other profiles and the links
//! between them by using the visible fields and the clues they request.
//!
//! * [`generator`] builds the graph and tracks the player progress in it.
//! * [`game`] drives a play session: guesses, clues, timer, and completion.
//! * [`highscores`] and [`saver`] keep the scoreboard.

pub mod config;
pub mod game;
pub mod generator;
pub mod highscores;
pub mod saver;

pub use config::GeneratorConfig;
pub use game::{Game, GameError, SubmitOutcome};
pub use generator::attributes::{AttributeError, AttributePools};
pub use generator::graph::Graph;
pub use generator::random_graph::{GenerateError, RandomGraph, generate_graph};
pub use generator::vertexes::{Field, Vertex};
pub use highscores::ScoreIndex;
