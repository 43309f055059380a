// Copyright (c) 2025 Trie Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix dictionary.
//!
//! A byte-indexed prefix tree that records which strings were inserted as
//! complete entries and expands any prefix into the entries below it. It is
//! meant as the storage behind autocomplete and spell-check style features.
//!
//! # Features
//!
//! - Byte-exact matching; entries may contain spaces or any other byte.
//! - Arena-backed nodes with stable ids and iterative traversal, so very long
//!   keys never deepen the call stack.
//! - Each node keeps its accumulated text, so matches are returned without
//!   re-walking the tree.
//! - [`SharedPrefixDict`] for use behind a read-write lock.
//!
//! # Example
//!
//! ```
//! use trie_dict_lib::data_structures::prefix_dict::PrefixDict;
//!
//! let mut dict = PrefixDict::new();
//! dict.insert("popo");
//! dict.insert("popo scam");
//! dict.insert("portto");
//!
//! assert!(dict.contains("popo"));
//! assert!(!dict.contains("po"));
//!
//! let mut predictions = dict.predict("po");
//! predictions.sort();
//! assert_eq!(predictions, vec!["popo", "popo scam", "portto"]);
//! ```
//!
//! # Prediction order
//!
//! Children are kept in a hash map, so the order of `predict` and `dump`
//! results is deterministic for a given insertion history but otherwise
//! unspecified. Compare results as sets.

mod config;
mod error;
mod node;
mod shared;

#[cfg(test)]
mod tests;

use std::io::{self, Write};

use tracing::{debug, trace};

pub use self::config::{PrefixDictConfig, DEFAULT_MAX_KEY_LEN};
pub use self::error::{PrefixDictError, PrefixDictResult};
pub use self::node::{NodeId, TrieNode, ROOT_SENTINEL};
pub use self::shared::SharedPrefixDict;

/// Byte-exact prefix tree mapping strings to membership.
///
/// The dictionary owns every node in a single arena. Nodes are created lazily
/// on insertion and never removed, so the tree only grows and the terminal
/// flag of a node only ever goes from unset to set.
#[derive(Debug, Clone)]
pub struct PrefixDict {
    /// Node arena; slot 0 is the root sentinel
    nodes: Vec<TrieNode>,

    /// Number of terminal nodes
    entries: usize,

    /// Configuration options
    config: PrefixDictConfig,
}

impl PrefixDict {
    /// Creates an empty dictionary with default configuration.
    pub fn new() -> Self {
        Self::with_config(PrefixDictConfig::default())
    }

    /// Creates an empty dictionary with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the dictionary.
    pub fn with_config(config: PrefixDictConfig) -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            entries: 0,
            config,
        }
    }

    /// Inserts `key` as a complete entry.
    ///
    /// Missing nodes along the path are created; existing ones are reused and
    /// only the landing node's terminal flag is touched. Inserting the same
    /// key again changes nothing.
    ///
    /// The empty key is ignored since the root sentinel never holds an entry.
    /// Use [`try_insert`](Self::try_insert) to have it reported instead.
    pub fn insert<K>(&mut self, key: K)
    where
        K: AsRef<[u8]>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            debug!("Ignoring insertion of the empty key");
            return;
        }
        self.insert_key(key);
    }

    /// Inserts `key` after checking it against the configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - A new entry was added.
    /// * `Ok(false)` - The entry already existed.
    /// * `Err(PrefixDictError)` - The key is empty or longer than `max_key_len`.
    pub fn try_insert<K>(&mut self, key: K) -> PrefixDictResult<bool>
    where
        K: AsRef<[u8]>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(PrefixDictError::EmptyKey);
        }
        if key.len() > self.config.max_key_len {
            return Err(PrefixDictError::KeyTooLong {
                len: key.len(),
                max_len: self.config.max_key_len,
            });
        }
        Ok(self.insert_key(key))
    }

    fn insert_key(&mut self, key: &[u8]) -> bool {
        let mut current = NodeId::ROOT;
        for &byte in key {
            current = match self.at(current).child(byte) {
                Some(next) => next,
                None => self.push_child(current, byte),
            };
        }

        let node = &mut self.nodes[current.0];
        let is_new = !node.is_terminal;
        if is_new {
            node.is_terminal = true;
            self.entries += 1;
        }

        trace!(
            key = %String::from_utf8_lossy(key),
            is_new,
            nodes = self.nodes.len(),
            "Inserted entry"
        );
        is_new
    }

    fn push_child(&mut self, parent: NodeId, byte: u8) -> NodeId {
        let id = NodeId(self.nodes.len());
        let child = TrieNode::child_of(self.at(parent), byte);
        self.nodes.push(child);
        self.nodes[parent.0].children.insert(byte, id);
        id
    }

    /// Finds the node of an exact entry.
    ///
    /// Returns `None` when the key was never inserted, including when it is
    /// only a prefix of a longer entry. The returned node borrows the
    /// dictionary and cannot be held across a mutation.
    pub fn find<K>(&self, key: K) -> Option<&TrieNode>
    where
        K: AsRef<[u8]>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return None;
        }

        let mut node = self.root();
        for &byte in key {
            node = self.at(node.child(byte)?);
        }
        node.is_terminal.then_some(node)
    }

    /// Checks whether `key` was inserted as a complete entry.
    ///
    /// `contains("po")` is false when only `"popo"` was inserted, even though
    /// `"po"` is a path in the tree.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<[u8]>,
    {
        self.find(key).is_some()
    }

    /// Returns every entry starting with `prefix`.
    ///
    /// Entries are decoded as UTF-8 with invalid sequences replaced; use
    /// [`predict_bytes`](Self::predict_bytes) for the raw bytes. The result is
    /// empty when nothing matches.
    ///
    /// When `prefix` runs past an entry that has no continuations, that entry
    /// is returned on its own as long as `leaf_overrun_fallback` is enabled.
    pub fn predict<K>(&self, prefix: K) -> Vec<String>
    where
        K: AsRef<[u8]>,
    {
        self.predict_nodes(prefix.as_ref())
            .into_iter()
            .map(|node| node.word().into_owned())
            .collect()
    }

    /// Byte-level variant of [`predict`](Self::predict).
    pub fn predict_bytes<K>(&self, prefix: K) -> Vec<Vec<u8>>
    where
        K: AsRef<[u8]>,
    {
        self.predict_nodes(prefix.as_ref())
            .into_iter()
            .map(|node| node.word.clone())
            .collect()
    }

    /// Returns every entry in the dictionary, same as `predict("")`.
    pub fn dump(&self) -> Vec<String> {
        self.predict("")
    }

    /// Writes every entry to `out`, one numbered line each, and returns them.
    ///
    /// Lines look like `       1 popo`: a 1-based index right-aligned to
    /// eight columns, a space, then the entry.
    pub fn dump_to<W>(&self, mut out: W) -> io::Result<Vec<String>>
    where
        W: Write,
    {
        let entries = self.dump();
        for (i, entry) in entries.iter().enumerate() {
            writeln!(out, "{:>8} {}", i + 1, entry)?;
        }
        out.flush()?;
        Ok(entries)
    }

    fn predict_nodes(&self, prefix: &[u8]) -> Vec<&TrieNode> {
        match self.anchor(prefix) {
            Some(anchor) => self.expand(anchor),
            None => Vec::new(),
        }
    }

    /// Walks `prefix` down from the root and returns the node expansion
    /// starts from.
    fn anchor(&self, prefix: &[u8]) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for &byte in prefix {
            let node = self.at(current);
            match node.child(byte) {
                Some(next) => current = next,
                None => {
                    // Past the end of a childless entry. Kept for
                    // compatibility although it answers for a prefix that is
                    // not in the tree.
                    if self.config.leaf_overrun_fallback
                        && current != NodeId::ROOT
                        && node.is_leaf()
                    {
                        debug!(
                            prefix = %String::from_utf8_lossy(prefix),
                            entry = %node.word(),
                            "Prefix overruns a leaf entry, predicting the entry"
                        );
                        return Some(current);
                    }
                    return None;
                }
            }
        }
        Some(current)
    }

    /// Collects every terminal or childless node at or below `anchor`.
    fn expand(&self, anchor: NodeId) -> Vec<&TrieNode> {
        let mut found = Vec::new();
        let mut stack = vec![anchor];
        while let Some(id) = stack.pop() {
            let node = self.at(id);
            if id != NodeId::ROOT && (node.is_terminal || node.is_leaf()) {
                found.push(node);
            }
            stack.extend(node.children.values().copied());
        }
        found
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Whether no entry has been inserted.
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of nodes, root sentinel included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The root sentinel.
    pub fn root(&self) -> &TrieNode {
        self.at(NodeId::ROOT)
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&TrieNode> {
        self.nodes.get(id.0)
    }

    /// The configuration this dictionary was built with.
    pub fn config(&self) -> &PrefixDictConfig {
        &self.config
    }

    // Ids handed out by this arena are always in bounds.
    fn at(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }
}

impl Default for PrefixDict {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Extend<K> for PrefixDict
where
    K: AsRef<[u8]>,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for PrefixDict
where
    K: AsRef<[u8]>,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use std::collections::BTreeSet;
    use test_case::test_case;

    const FIXTURE: [&str; 6] = ["popo", "popo scam", "popo fuck", "portto", "pig", "cob"];

    fn fixture() -> PrefixDict {
        FIXTURE.iter().collect()
    }

    fn set(items: Vec<String>) -> BTreeSet<String> {
        items.into_iter().collect()
    }

    fn expected(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test_case("popo", true ; "exact entry")]
    #[test_case("popo scam", true ; "entry with space")]
    #[test_case("popo scam fuck", false ; "extension of entry")]
    #[test_case("popo shit", false ; "diverging sibling")]
    #[test_case("po", false ; "strict prefix")]
    #[test_case("", false ; "empty key")]
    fn test_fixture_contains(key: &str, found: bool) {
        assert_eq!(fixture().contains(key), found);
    }

    #[test_case("po", &["popo", "popo scam", "popo fuck", "portto"] ; "two byte prefix")]
    #[test_case("p", &["pig", "popo", "popo scam", "popo fuck", "portto"] ; "one byte prefix")]
    #[test_case("k", &[] ; "no match")]
    #[test_case("popo ", &["popo scam", "popo fuck"] ; "prefix ending in space")]
    #[test_case("cob", &["cob"] ; "prefix equal to leaf")]
    #[test_case("cobx", &["cob"] ; "prefix overruns leaf")]
    #[test_case("popo x", &[] ; "prefix overruns inner entry")]
    fn test_fixture_predict(prefix: &str, entries: &[&str]) {
        let dict = fixture();
        let predictions = dict.predict(prefix);
        assert_eq!(predictions.len(), entries.len());
        assert_eq!(set(predictions), expected(entries));
    }

    #[test]
    fn test_find_returns_exact_node() {
        let dict = fixture();

        let node = dict.find("popo").expect("popo is an entry");
        assert_eq!(node.word(), "popo");
        assert!(node.is_terminal());
        assert_eq!(node.byte(), b'o');

        let node = dict.find("popo scam").expect("popo scam is an entry");
        assert_eq!(node.word_bytes(), b"popo scam");

        assert!(dict.find("popo scam fuck").is_none());
        assert!(dict.find("po").is_none());
    }

    #[test]
    fn test_reinsert_is_idempotent() {
        let mut dict = fixture();
        let nodes = dict.node_count();
        let before = set(dict.predict("p"));

        dict.insert("popo");
        assert!(!dict.try_insert("popo").unwrap());

        assert_eq!(dict.len(), FIXTURE.len());
        assert_eq!(dict.node_count(), nodes);
        assert_eq!(set(dict.predict("p")), before);
    }

    #[test]
    fn test_prefix_becomes_entry() {
        let mut dict = fixture();
        assert!(!dict.contains("po"));
        let nodes = dict.node_count();

        assert!(dict.try_insert("po").unwrap());
        assert!(dict.contains("po"));
        assert_eq!(dict.node_count(), nodes);
        assert!(set(dict.predict("po")).contains("po"));
    }

    #[test]
    fn test_empty_key() {
        let mut dict = PrefixDict::new();
        dict.insert("");
        assert!(dict.is_empty());
        assert!(!dict.contains(""));
        assert!(dict.dump().is_empty());
        assert_eq!(dict.try_insert(""), Err(PrefixDictError::EmptyKey));
    }

    #[test]
    fn test_key_length_limit() {
        let mut dict = PrefixDict::with_config(PrefixDictConfig::new().with_max_key_len(4));
        assert_eq!(dict.try_insert("popo"), Ok(true));
        assert_eq!(
            dict.try_insert("portto"),
            Err(PrefixDictError::KeyTooLong { len: 6, max_len: 4 })
        );
        assert!(!dict.contains("portto"));

        // Unchecked insertion ignores the limit.
        dict.insert("portto");
        assert!(dict.contains("portto"));
    }

    #[test]
    fn test_leaf_overrun_fallback_disabled() {
        let mut dict =
            PrefixDict::with_config(PrefixDictConfig::new().with_leaf_overrun_fallback(false));
        dict.extend(FIXTURE);

        assert!(dict.predict("cobx").is_empty());
        assert_eq!(dict.predict("cob"), vec!["cob".to_string()]);
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = PrefixDict::default();
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
        assert_eq!(dict.node_count(), 1);
        assert!(dict.root().is_leaf());
        assert!(dict.predict("").is_empty());
        assert!(dict.predict("a").is_empty());
        assert!(dict.dump().is_empty());
    }

    #[test]
    fn test_dump_matches_insertions() {
        let dict = fixture();
        let dumped = dict.dump();
        assert_eq!(dumped.len(), FIXTURE.len());
        assert_eq!(set(dumped), expected(&FIXTURE));
        assert_eq!(set(dict.predict("")), expected(&FIXTURE));
    }

    #[test]
    fn test_dump_to_writes_numbered_lines() {
        let dict: PrefixDict = ["cob"].into_iter().collect();
        let mut out = Vec::new();
        let entries = dict.dump_to(&mut out).unwrap();

        assert_eq!(entries, vec!["cob".to_string()]);
        assert_eq!(String::from_utf8(out).unwrap(), "       1 cob\n");
    }

    #[test]
    fn test_non_utf8_entries() {
        let mut dict = PrefixDict::new();
        dict.insert([0x70u8, 0xFF]);
        dict.insert([0x70u8, 0xFE]);

        assert!(dict.contains([0x70u8, 0xFF]));
        let mut raw = dict.predict_bytes([0x70u8]);
        raw.sort();
        assert_eq!(raw, vec![vec![0x70, 0xFE], vec![0x70, 0xFF]]);
        assert!(dict
            .predict("p")
            .iter()
            .all(|entry| entry == "p\u{FFFD}"));
    }

    #[test]
    fn test_node_lookup() {
        let dict = fixture();
        let root = dict.root();
        let p = root.child(b'p').expect("p is a path");
        let node = dict.node(p).expect("id comes from this arena");
        assert_eq!(node.word(), "p");
        assert_eq!(node.child_count(), 2);
        assert!(dict.node(NodeId(dict.node_count())).is_none());
    }

    #[test]
    fn test_long_key_traversal() {
        let key = "a".repeat(4_000);
        let mut dict = PrefixDict::new();
        dict.insert(&key);

        assert!(dict.contains(&key));
        assert_eq!(dict.predict("a"), vec![key.clone()]);
        assert_eq!(dict.node_count(), key.len() + 1);
    }
}
