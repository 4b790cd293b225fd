/*
vertexes.rs

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

//! Profiles (vertexes) of the puzzle graph.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use super::clue_cache::ClueCache;
use super::key_set::KeySet;
use crate::config::CLUE_LOG_HEADER;

/// Number of misc facts for each profile.
pub const NUM_MISC: usize = 3;

/// Number of fields in a profile (name, country, and the misc facts).
pub const NUM_FIELDS: usize = 2 + NUM_MISC;

/// Profile fields that can be revealed to the player.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(usize)]
pub enum Field {
    Name = 0,
    Country = 1,
    Misc1 = 2,
    Misc2 = 3,
    Misc3 = 4,
}

impl Field {
    /// All the fields, in display order.
    pub const ALL: [Field; NUM_FIELDS] = [
        Field::Name,
        Field::Country,
        Field::Misc1,
        Field::Misc2,
        Field::Misc3,
    ];

    /// Position of the field in [`Vertex::field_access`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Country => write!(f, "country"),
            Field::Misc1 => write!(f, "misc 1"),
            Field::Misc2 => write!(f, "misc 2"),
            Field::Misc3 => write!(f, "misc 3"),
        }
    }
}

/// One profile in the puzzle.
///
/// The identity fields ([`Vertex::name`], [`Vertex::country`], and [`Vertex::misc`]) are rolled
/// once by the generator and never change.
/// All the other fields are game state, updated through the [`crate::generator::graph::Graph`]
/// methods while the player progresses.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Vertex {
    pub name: String,
    pub country: String,
    pub misc: [String; NUM_MISC],

    /// Visibility of the fields, indexed by [`Field::index`].
    pub(crate) field_access: [bool; NUM_FIELDS],

    /// Number of edges the vertex has in the generated graph.
    pub(crate) edge_count: usize,

    /// Number of edges the player has found so far.
    pub(crate) edges_found_count: usize,

    /// Neighbors the player has already linked to this vertex.
    pub(crate) edges_found: KeySet,

    /// Clues about the neighbors that the player has not linked yet.
    #[serde(skip)]
    pub(crate) clue_cache: ClueCache,

    /// Whether [`Vertex::clue_cache`] reflects the current list of found edges.
    #[serde(skip)]
    pub(crate) clue_cache_built: bool,

    /// Whether the next dispensed clue starts a new batch in the clue log.
    #[serde(skip)]
    pub(crate) clue_batch_pending: bool,

    /// All the clues given to the player so far.
    pub(crate) clue_log: String,

    /// Whether the player has found the name and all the edges of the vertex.
    pub(crate) status: bool,

    /// Whether the vertex is visible on the board.
    pub(crate) revealed: bool,
}

impl Vertex {
    /// Create a [`Vertex`] object with all its fields hidden.
    pub fn new(name: &str, country: &str, misc: [String; NUM_MISC]) -> Self {
        Self {
            name: name.to_string(),
            country: country.to_string(),
            misc,
            field_access: [false; NUM_FIELDS],
            edge_count: 0,
            edges_found_count: 0,
            edges_found: KeySet::new(),
            clue_cache: ClueCache::new(),
            clue_cache_built: false,
            clue_batch_pending: false,
            clue_log: CLUE_LOG_HEADER.to_string(),
            status: false,
            revealed: false,
        }
    }

    /// Value of the given field, whether it is visible or not.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Country => &self.country,
            Field::Misc1 => &self.misc[0],
            Field::Misc2 => &self.misc[1],
            Field::Misc3 => &self.misc[2],
        }
    }

    /// Whether the player can see the given field.
    pub fn is_open(&self, field: Field) -> bool {
        self.field_access[field.index()]
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn edges_found_count(&self) -> usize {
        self.edges_found_count
    }

    /// Last completion status computed by
    /// [`crate::generator::graph::Graph::compute_status`].
    pub fn status(&self) -> bool {
        self.status
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Clues given to the player so far.
    pub fn clue_log(&self) -> &str {
        &self.clue_log
    }

    /// Whether the name is known and all the edges have been found.
    fn is_complete(&self) -> bool {
        self.field_access[Field::Name.index()] && self.edges_found_count == self.edge_count
    }

    /// Recompute and store the completion status.
    pub(crate) fn update_status(&mut self) -> bool {
        self.status = self.is_complete();
        self.status
    }

    fn shown<'a>(&'a self, field: Field, placeholder: &'a str) -> &'a str {
        if self.is_open(field) {
            self.field(field)
        } else {
            placeholder
        }
    }

    /// Return the profile as the player sees it. Hidden fields are replaced by `placeholder`.
    pub fn describe(&self, placeholder: &str) -> String {
        let mut s: String = format!(
            "Name: {}\nCountry: {}\n",
            self.shown(Field::Name, placeholder),
            self.shown(Field::Country, placeholder)
        );
        for field in &Field::ALL[2..] {
            s.push_str(&format!("- {}\n", self.shown(*field, placeholder)));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Vertex {
        Vertex::new(
            "Ada",
            "Chile",
            [
                "owns a dog".to_string(),
                "plays chess".to_string(),
                "hates rain".to_string(),
            ],
        )
    }

    #[rstest]
    #[case(0, Some(Field::Name))]
    #[case(1, Some(Field::Country))]
    #[case(4, Some(Field::Misc3))]
    #[case(5, None)]
    fn field_from_index(#[case] index: usize, #[case] expected: Option<Field>) {
        assert_eq!(Field::from_repr(index), expected);
        if let Some(f) = expected {
            assert_eq!(f.index(), index);
        }
    }

    #[test]
    fn new_vertex_is_hidden() {
        let v: Vertex = sample();

        assert!(Field::ALL.iter().all(|f| !v.is_open(*f)));
        assert_eq!(v.edge_count(), 0);
        assert!(!v.status());
        assert!(!v.is_revealed());
        assert_eq!(v.clue_log(), CLUE_LOG_HEADER);
    }

    #[test]
    fn describe_masks_hidden_fields() {
        let mut v: Vertex = sample();
        v.field_access[Field::Country.index()] = true;
        v.field_access[Field::Misc2.index()] = true;

        assert_eq!(
            v.describe("???"),
            "Name: ???\nCountry: Chile\n- ???\n- plays chess\n- ???\n"
        );
    }
}
