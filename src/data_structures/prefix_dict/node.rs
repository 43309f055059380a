// Copyright (c) 2025 Trie Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the prefix dictionary.
//!
//! Nodes live in the dictionary's arena and refer to their children by
//! [`NodeId`]. Each node keeps the full text accumulated from the root so that
//! matches can be returned without walking back up the tree.

use std::borrow::Cow;

use fnv::FnvHashMap;

/// Index of a node inside the dictionary arena.
///
/// Ids are stable for the lifetime of the dictionary since nodes are never
/// removed or moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root sentinel always occupies the first arena slot.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Byte stored in the root node. It never takes part in any stored string.
pub const ROOT_SENTINEL: u8 = b'#';

/// A node in the prefix dictionary.
///
/// Each node consumes one byte from its parent. Terminal nodes mark complete
/// entries; non-terminal nodes are only prefixes of longer entries.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// Byte consumed from the parent
    pub(crate) byte: u8,

    /// Bytes from the root (sentinel excluded) down to this node
    pub(crate) word: Vec<u8>,

    /// Whether `word` is itself an inserted entry
    pub(crate) is_terminal: bool,

    /// Next byte to child node
    pub(crate) children: FnvHashMap<u8, NodeId>,
}

impl TrieNode {
    /// Creates the root sentinel.
    pub(crate) fn root() -> Self {
        Self {
            byte: ROOT_SENTINEL,
            word: Vec::new(),
            is_terminal: false,
            children: FnvHashMap::default(),
        }
    }

    /// Creates a non-terminal child of `parent` consuming `byte`.
    pub(crate) fn child_of(parent: &TrieNode, byte: u8) -> Self {
        let mut word = Vec::with_capacity(parent.word.len() + 1);
        word.extend_from_slice(&parent.word);
        word.push(byte);
        Self {
            byte,
            word,
            is_terminal: false,
            children: FnvHashMap::default(),
        }
    }

    /// The byte this node consumes from its parent.
    pub fn byte(&self) -> u8 {
        self.byte
    }

    /// The accumulated text as raw bytes.
    pub fn word_bytes(&self) -> &[u8] {
        &self.word
    }

    /// The accumulated text, with invalid UTF-8 replaced.
    pub fn word(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.word)
    }

    /// Whether this node marks a complete inserted entry.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Whether this node has no continuations.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of distinct next bytes.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Looks up the child reached by `byte`.
    pub fn child(&self, byte: u8) -> Option<NodeId> {
        self.children.get(&byte).copied()
    }
}
