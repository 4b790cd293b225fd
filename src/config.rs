/*
config.rs

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

//! Package constants and generation settings.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::generator::vertexes::NUM_MISC;

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// First line of the clue log of every vertex.
pub const CLUE_LOG_HEADER: &str = "Clues about acquaintances:";

/// Number of buckets in the [`crate::generator::key_set::KeySet`] objects.
pub const KEY_SET_BUCKETS: usize = 7;

/// Name of the scoreboard export file.
pub const SCORES_FILE: &str = "scores.txt";

/// Attribute pools shipped with the program.
pub const BUILTIN_PROFILES: &str = include_str!("../data/profiles.txt");

/// Fixed profile of the player, which is always the last vertex of the graph.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerProfile {
    pub name: String,
    pub country: String,
    pub misc: [String; NUM_MISC],
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            name: "You".to_string(),
            country: "Unknown".to_string(),
            misc: [
                "is new in town".to_string(),
                "asks a lot of questions".to_string(),
                "keeps a notebook".to_string(),
            ],
        }
    }
}

/// Settings for generating a puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of vertexes, the player included. At least 2.
    pub size: usize,

    /// Degree at which a vertex stops rolling extra edges.
    pub degree_cap: usize,

    /// Number of times the whole generation is retried when the graph is not connected.
    pub max_retries: usize,

    /// Number of rolls allowed to find an unused name or misc fact before giving up.
    pub max_roll_attempts: usize,

    pub player: PlayerProfile,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 7,
            degree_cap: 4,
            max_retries: 16,
            max_roll_attempts: 10_000,
            player: PlayerProfile::default(),
        }
    }
}

impl GeneratorConfig {
    /// Read the settings from a JSON file. Missing keys get their default value.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let reader: BufReader<File> = BufReader::new(File::open(path)?);
        let config: GeneratorConfig = serde_json::from_reader(reader)?;
        Ok(config)
    }
}
