/*
highscores.rs

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

//! Scoreboard.
//!
//! The [`ScoreIndex`] object stores the scores of the solved games in a binary search tree keyed
//! by score.
//! It renders two listings:
//!
//! * the leaderboard, best (highest) score first, with the rank of each entry:
//!   `1] 312.5\tAda`
//! * the export listing, one `score,name` line per entry in preorder.
//!   Inserting the lines of the export listing in order rebuilds the same tree.
//!
//! See the [`crate::saver::highscores`] module that saves and restores the export listing.

use log::warn;
use std::fmt;
use std::fmt::Write;

/// Node of the [`ScoreIndex`] tree.
struct ScoreNode {
    score: f32,
    name: String,
    left: Option<Box<ScoreNode>>,
    right: Option<Box<ScoreNode>>,
}

impl ScoreNode {
    fn new(score: f32, name: &str) -> Self {
        Self {
            score,
            name: name.to_string(),
            left: None,
            right: None,
        }
    }
}

/// Scores indexed by value.
#[derive(Default)]
pub struct ScoreIndex {
    root: Option<Box<ScoreNode>>,
    len: usize,
}

impl ScoreIndex {
    /// Create an empty [`ScoreIndex`] object.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Add a score. Scores equal to an existing one are stored after it.
    pub fn insert(&mut self, score: f32, name: &str) {
        let mut link: &mut Option<Box<ScoreNode>> = &mut self.root;
        while let Some(node) = link {
            link = if node.score > score {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(ScoreNode::new(score, name)));
        self.len += 1;
    }

    /// Number of scores.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return whether the scoreboard is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove all the scores.
    pub fn clear(&mut self) {
        // Detach the children before dropping each node so that degenerate trees do not
        // recurse on drop
        let mut stack: Vec<Box<ScoreNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Return the scores, highest first.
    pub fn descending(&self) -> Vec<(f32, &str)> {
        let mut out: Vec<(f32, &str)> = Vec::with_capacity(self.len);
        let mut stack: Vec<&ScoreNode> = Vec::new();
        let mut current: Option<&ScoreNode> = self.root.as_deref();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.right.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    out.push((node.score, node.name.as_str()));
                    current = node.left.as_deref();
                }
                None => break,
            }
        }
        out
    }

    /// Return the leaderboard: one `rank] score\tname` line per entry, highest score first.
    pub fn leaderboard(&self) -> String {
        let mut s: String = String::new();
        for (i, (score, name)) in self.descending().into_iter().enumerate() {
            let _ = writeln!(s, "{}] {score}\t{name}", i + 1);
        }
        s
    }

    /// Return the export listing: one `score,name` line per entry, in preorder.
    pub fn export(&self) -> String {
        let mut s: String = String::new();
        let mut stack: Vec<&ScoreNode> = self.root.as_deref().into_iter().collect();

        while let Some(node) = stack.pop() {
            let _ = writeln!(s, "{},{}", node.score, node.name);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        s
    }

    /// Rebuild a [`ScoreIndex`] object from an export listing.
    ///
    /// Lines that are not in the `score,name` format are skipped.
    pub fn import(listing: &str) -> Self {
        let mut index: ScoreIndex = ScoreIndex::new();

        for (i, line) in listing.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match line
                .split_once(',')
                .and_then(|(score, name)| score.trim().parse::<f32>().ok().map(|s| (s, name)))
            {
                Some((score, name)) => index.insert(score, name),
                None => warn!("Skipping malformed score line {}: {line:?}", i + 1),
            }
        }
        index
    }
}

impl Drop for ScoreIndex {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for ScoreIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreIndex").field("len", &self.len).finish()
    }
}
