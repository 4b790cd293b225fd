/*
profiles.rs

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

//! Roll the profiles of a new puzzle.
//!
//! Every vertex but the last one gets a random name, three random misc facts, and a random
//! country.
//! Names are never repeated in the graph, and the misc facts of a vertex are all different.
//! Countries can repeat.
//!
//! The last vertex is the player and uses the fixed profile from the configuration.
//! The vertex before it is the tutorial vertex: all its fields but the name are visible from
//! the beginning.
//! The other vertexes show one random field, never the name.

use log::debug;
use rand::Rng;

use super::attributes::AttributePools;
use super::graph::Graph;
use super::key_set::KeySet;
use super::random_graph::GenerateError;
use super::vertexes::{Field, NUM_MISC};
use crate::config::GeneratorConfig;

/// Verify that the pools are large enough to fill a graph of the given size.
pub fn check_pools(pools: &AttributePools, size: usize) -> Result<(), GenerateError> {
    let required: [(&'static str, usize, usize); 3] = [
        ("names", pools.names.len(), size.saturating_sub(1)),
        ("countries", pools.countries.len(), 1),
        ("misc", pools.misc.len(), NUM_MISC),
    ];
    for (pool, available, required) in required {
        if available < required {
            return Err(GenerateError::PoolTooSmall {
                pool,
                available,
                required,
            });
        }
    }
    Ok(())
}

/// Roll an index in `0..pool_len` that is not in `used`, and add it to `used`.
fn roll_unused<R: Rng + ?Sized>(
    pool: &'static str,
    pool_len: usize,
    used: &mut KeySet,
    max_attempts: usize,
    rng: &mut R,
) -> Result<usize, GenerateError> {
    for _ in 0..max_attempts {
        let i: usize = rng.random_range(0..pool_len);
        if used.insert(i) {
            return Ok(i);
        }
    }
    Err(GenerateError::RollsExhausted {
        pool,
        attempts: max_attempts,
    })
}

/// Add `graph.size()` profiles to the empty graph.
pub fn roll_profiles<R: Rng + ?Sized>(
    graph: &mut Graph,
    pools: &AttributePools,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<(), GenerateError> {
    let size: usize = graph.size();
    check_pools(pools, size)?;

    let mut used_names: KeySet = KeySet::new();

    for index in 0..size {
        // The player
        if index == size - 1 {
            let player = &config.player;
            let id: usize = graph.add_vertex(&player.name, &player.country, player.misc.clone());
            graph.open_all_fields(id);
            continue;
        }

        let name: usize = roll_unused(
            "names",
            pools.names.len(),
            &mut used_names,
            config.max_roll_attempts,
            rng,
        )?;

        let mut used_misc: KeySet = KeySet::new();
        let mut misc: [String; NUM_MISC] = Default::default();
        for m in &mut misc {
            let i: usize = roll_unused(
                "misc",
                pools.misc.len(),
                &mut used_misc,
                config.max_roll_attempts,
                rng,
            )?;
            *m = pools.misc[i].clone();
        }

        let country: &str = &pools.countries[rng.random_range(0..pools.countries.len())];
        let id: usize = graph.add_vertex(&pools.names[name], country, misc);

        if index == size - 2 {
            // The tutorial vertex
            for field in &Field::ALL[1..] {
                graph.open_field(id, *field);
            }
        } else {
            let field: Field = Field::from_repr(rng.random_range(1..Field::ALL.len()))
                .unwrap_or(Field::Country);
            graph.open_field(id, field);
        }
        debug!("Vertex {id}: {} ({country})", pools.names[name]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::vertexes::Vertex;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::{fixture, rstest};
    use std::collections::HashSet;

    #[fixture]
    fn pools() -> AttributePools {
        AttributePools {
            names: (0..12).map(|i| format!("name {i}")).collect(),
            countries: vec!["Chile".to_string(), "Peru".to_string()],
            misc: (0..5).map(|i| format!("misc {i}")).collect(),
        }
    }

    fn rolled(size: usize, pools: &AttributePools, seed: u64) -> Graph {
        let mut graph: Graph = Graph::new(size);
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        roll_profiles(&mut graph, pools, &GeneratorConfig::default(), &mut rng)
            .expect("pools are large enough");
        graph
    }

    #[rstest]
    #[case(2, 1)]
    #[case(7, 2)]
    #[case(13, 3)]
    fn names_and_misc_do_not_repeat(pools: AttributePools, #[case] size: usize, #[case] seed: u64) {
        let graph: Graph = rolled(size, &pools, seed);
        let profiles: Vec<&Vertex> = graph.vertices().take(size - 1).collect();

        let names: HashSet<&str> = profiles.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names.len(), size - 1);
        for v in &profiles {
            let misc: HashSet<&String> = v.misc.iter().collect();
            assert_eq!(misc.len(), NUM_MISC, "repeated misc in {v:?}");
        }
    }

    #[rstest]
    fn field_policy(pools: AttributePools) {
        let size: usize = 6;
        let graph: Graph = rolled(size, &pools, 7);

        for id in 0..size - 2 {
            let open: Vec<Field> = Field::ALL
                .into_iter()
                .filter(|f| graph.check_field(id, *f))
                .collect();
            assert_eq!(open.len(), 1, "vertex {id}");
            assert_ne!(open[0], Field::Name);
        }

        // Tutorial vertex
        assert!(!graph.check_field(size - 2, Field::Name));
        assert!(
            Field::ALL[1..]
                .iter()
                .all(|f| graph.check_field(size - 2, *f))
        );

        // Player
        let config: GeneratorConfig = GeneratorConfig::default();
        assert_eq!(
            graph.get_vertex(size - 1).map(|v| v.name.as_str()),
            Some(config.player.name.as_str())
        );
        assert!(Field::ALL.iter().all(|f| graph.check_field(size - 1, *f)));
    }

    #[rstest]
    fn small_name_pool(pools: AttributePools) {
        let mut graph: Graph = Graph::new(14);
        let mut rng: StdRng = StdRng::seed_from_u64(1);

        let res: Result<(), GenerateError> =
            roll_profiles(&mut graph, &pools, &GeneratorConfig::default(), &mut rng);
        assert_eq!(
            res,
            Err(GenerateError::PoolTooSmall {
                pool: "names",
                available: 12,
                required: 13
            })
        );
        assert_eq!(graph.count(), 0);
    }

    #[test]
    fn small_misc_pool() {
        let pools: AttributePools = AttributePools {
            names: vec!["a".to_string(), "b".to_string()],
            countries: vec!["c".to_string()],
            misc: vec!["d".to_string(), "e".to_string()],
        };

        assert_eq!(
            check_pools(&pools, 3),
            Err(GenerateError::PoolTooSmall {
                pool: "misc",
                available: 2,
                required: 3
            })
        );
    }

    #[test]
    fn rolls_are_bounded() {
        let mut used: KeySet = KeySet::new();
        let mut rng: StdRng = StdRng::seed_from_u64(3);

        assert_eq!(roll_unused("misc", 1, &mut used, 5, &mut rng), Ok(0));
        assert_eq!(
            roll_unused("misc", 1, &mut used, 5, &mut rng),
            Err(GenerateError::RollsExhausted {
                pool: "misc",
                attempts: 5
            })
        );
    }
}
