/*
random_graph.rs

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

//! Generate a random puzzle graph.

use log::{debug, warn};
use rand::Rng;
use std::time::Instant;
use thiserror::Error;

use super::attributes::{AttributeError, AttributePools};
use super::edges;
use super::graph::Graph;
use super::profiles;
use crate::config::GeneratorConfig;

/// Type of errors.
///
/// All of them come from the settings or the attribute pools: retrying with the same input is
/// not going to help.
#[derive(Error, Debug, PartialEq)]
pub enum GenerateError {
    /// The graph needs at least one profile and the player.
    #[error("the graph needs at least 2 vertexes (got {size})")]
    SizeTooSmall { size: usize },

    /// Not enough items in a pool.
    #[error("the {pool} pool has {available} items but {required} are required")]
    PoolTooSmall {
        pool: &'static str,
        available: usize,
        required: usize,
    },

    /// No unused item found in a pool after the maximum number of rolls.
    #[error("no unused item found in the {pool} pool after {attempts} rolls")]
    RollsExhausted { pool: &'static str, attempts: usize },

    /// Every generated graph was disconnected.
    #[error("no connected graph after {attempts} attempts")]
    NotConverged { attempts: usize },

    /// The attribute pools cannot be loaded.
    #[error(transparent)]
    Attributes(#[from] AttributeError),
}

/// [`RandomGraph`] object.
pub struct RandomGraph<'a> {
    pools: &'a AttributePools,
    config: &'a GeneratorConfig,

    /// Number of attempts it took to generate the last graph.
    pub attempts: usize,

    /// Duration in seconds it took to generate the last graph.
    pub duration: f32,
}

impl<'a> RandomGraph<'a> {
    /// Create the object.
    pub fn new(pools: &'a AttributePools, config: &'a GeneratorConfig) -> Self {
        Self {
            pools,
            config,
            attempts: 0,
            duration: 0.0,
        }
    }

    /// Generate and return a connected random graph.
    ///
    /// # Errors
    ///
    /// The method returns an error when the settings or the pools do not allow building the
    /// graph, or if no connected graph has been produced after the configured number of retries.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Graph, GenerateError> {
        let degree_cap: usize = self.config.degree_cap;
        self.generate_with(rng, |graph, rng| {
            edges::roll_edges(graph, degree_cap, rng)
        })
    }

    /// Generate a graph by using the provided function to roll the edges.
    pub(crate) fn generate_with<R, F>(
        &mut self,
        rng: &mut R,
        mut roll_edges: F,
    ) -> Result<Graph, GenerateError>
    where
        R: Rng + ?Sized,
        F: FnMut(&mut Graph, &mut R),
    {
        let start: Instant = Instant::now();
        let size: usize = self.config.size;
        self.attempts = 0;
        self.duration = 0.0;

        if size < 2 {
            return Err(GenerateError::SizeTooSmall { size });
        }
        profiles::check_pools(self.pools, size)?;

        let max_attempts: usize = self.config.max_retries + 1;
        while self.attempts < max_attempts {
            self.attempts += 1;

            let mut graph: Graph = Graph::new(size);
            profiles::roll_profiles(&mut graph, self.pools, self.config, rng)?;
            roll_edges(&mut graph, rng);

            if graph.is_connected() {
                self.duration = start.elapsed().as_secs_f32();
                debug!(
                    "Graph of {size} vertexes generated in {} attempt(s), {}s",
                    self.attempts, self.duration
                );
                graph.debug();
                return Ok(graph);
            }
            warn!(
                "Generated graph is not connected (attempt {}/{max_attempts})",
                self.attempts
            );
        }

        self.duration = start.elapsed().as_secs_f32();
        Err(GenerateError::NotConverged {
            attempts: self.attempts,
        })
    }
}

/// Generate a connected random graph from the given pools and settings.
pub fn generate_graph<R: Rng + ?Sized>(
    pools: &AttributePools,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Graph, GenerateError> {
    RandomGraph::new(pools, config).generate(rng)
}
