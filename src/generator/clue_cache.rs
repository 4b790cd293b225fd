/*
clue_cache.rs

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

//! Per-vertex cache of the clues not yet given to the player.

/// Element of the [`ClueCache`] stack.
#[derive(Debug, Clone)]
struct ClueNode {
    clue: String,
    next: Option<Box<ClueNode>>,
}

/// LIFO stack of clues, implemented as a singly-linked list.
///
/// The last pushed clue is the first one to be popped.
#[derive(Debug, Clone, Default)]
pub struct ClueCache {
    head: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueCache {
    /// Create an empty [`ClueCache`] object.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Push a clue on top of the stack.
    pub fn push(&mut self, clue: String) {
        let node: Box<ClueNode> = Box::new(ClueNode {
            clue,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Remove and return the clue on top of the stack, or None if the stack is empty.
    pub fn pop(&mut self) -> Option<String> {
        self.head.take().map(|node| {
            let node: ClueNode = *node;
            self.head = node.next;
            self.len -= 1;
            node.clue
        })
    }

    /// Whether the stack has no more clues.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of clues in the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Drop all the clues.
    pub fn clear(&mut self) {
        // Unlink the nodes one by one so that long stacks do not recurse on drop
        let mut current: Option<Box<ClueNode>> = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.len = 0;
    }
}

impl Drop for ClueCache {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_returns_last_pushed() {
        let mut cache: ClueCache = ClueCache::new();

        cache.push("owns a dog".to_string());
        cache.push("Norway".to_string());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.pop().as_deref(), Some("Norway"));
        assert_eq!(cache.pop().as_deref(), Some("owns a dog"));
        assert!(cache.is_empty());
    }

    #[test]
    fn pop_on_empty_stack_changes_nothing() {
        let mut cache: ClueCache = ClueCache::new();

        assert_eq!(cache.pop(), None);
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn clear_empties_the_stack() {
        let mut cache: ClueCache = ClueCache::new();

        for i in 0..10_000 {
            cache.push(format!("clue {i}"));
        }
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.pop(), None);

        cache.push("plays chess".to_string());
        assert_eq!(cache.pop().as_deref(), Some("plays chess"));
    }
}
