/*
key_set.rs

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

//! Small open-chained hash set of vertex and pool indexes.
//!
//! The generator uses it to remember which names and misc facts were already rolled and which
//! vertexes are already attached to the connected part of the graph.
//! During play, each vertex keeps one to remember the neighbors the player already linked to it.

use serde::{Deserialize, Serialize};

use crate::config::KEY_SET_BUCKETS;

/// Hash set of `usize` keys.
///
/// The keys are spread over a fixed number of buckets (`key % buckets`), each bucket being a
/// chain of keys in insertion order.
/// Keys are never removed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct KeySet {
    buckets: Vec<Vec<usize>>,

    /// Number of distinct keys in the set.
    len: usize,
}

impl Default for KeySet {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySet {
    /// Create a [`KeySet`] object with the default number of buckets.
    pub fn new() -> Self {
        Self::with_buckets(KEY_SET_BUCKETS)
    }

    /// Create a [`KeySet`] object with the given number of buckets (at least one).
    pub fn with_buckets(num_buckets: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); num_buckets.max(1)],
            len: 0,
        }
    }

    fn bucket(&self, key: usize) -> usize {
        key % self.buckets.len()
    }

    /// Add the key to the set. Adding a key that is already present does nothing.
    ///
    /// Return whether the key was added.
    pub fn insert(&mut self, key: usize) -> bool {
        if self.contains(key) {
            return false;
        }
        let b: usize = self.bucket(key);
        self.buckets[b].push(key);
        self.len += 1;
        true
    }

    /// Whether the key is in the set.
    pub fn contains(&self, key: usize) -> bool {
        self.buckets[self.bucket(key)].contains(&key)
    }

    /// Number of keys in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn insert_is_idempotent() {
        let mut set: KeySet = KeySet::new();

        assert!(set.insert(12));
        assert!(!set.insert(12));
        assert_eq!(set.len(), 1);
        assert!(set.contains(12));
    }

    #[rstest]
    #[case(1)]
    #[case(7)]
    #[case(64)]
    fn colliding_keys_share_a_bucket(#[case] num_buckets: usize) {
        let mut set: KeySet = KeySet::with_buckets(num_buckets);
        let keys: Vec<usize> = (0..5).map(|i| 3 + i * num_buckets).collect();

        for k in &keys {
            set.insert(*k);
        }
        for k in &keys {
            assert!(set.contains(*k), "missing key {k}");
        }
        assert!(!set.contains(4 + num_buckets * 10));
        assert_eq!(set.len(), keys.len());
    }

    #[test]
    fn zero_buckets_falls_back_to_one() {
        let mut set: KeySet = KeySet::with_buckets(0);

        set.insert(0);
        set.insert(99);
        assert!(set.contains(0));
        assert!(set.contains(99));
        assert!(!set.is_empty());
    }
}
