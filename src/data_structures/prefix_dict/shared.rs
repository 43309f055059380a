// Copyright (c) 2025 Trie Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-safe handle around a [`PrefixDict`].
//!
//! The dictionary itself needs `&mut self` to insert. This wrapper puts it
//! behind a single read-write lock so lookups run concurrently while
//! insertions are exclusive. Results are returned as owned data; no node
//! reference escapes the lock.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{PrefixDict, PrefixDictConfig, PrefixDictResult};

/// Cloneable, lock-guarded prefix dictionary.
#[derive(Debug, Clone, Default)]
pub struct SharedPrefixDict {
    inner: Arc<RwLock<PrefixDict>>,
}

impl SharedPrefixDict {
    /// Creates an empty shared dictionary with default configuration.
    pub fn new() -> Self {
        Self::from_dict(PrefixDict::new())
    }

    /// Creates an empty shared dictionary with the specified configuration.
    pub fn with_config(config: PrefixDictConfig) -> Self {
        Self::from_dict(PrefixDict::with_config(config))
    }

    /// Wraps an existing dictionary.
    pub fn from_dict(dict: PrefixDict) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dict)),
        }
    }

    /// Inserts `key` under the write lock. See [`PrefixDict::insert`].
    pub fn insert<K>(&self, key: K)
    where
        K: AsRef<[u8]>,
    {
        self.inner.write().insert(key);
    }

    /// Checked insertion under the write lock. See [`PrefixDict::try_insert`].
    pub fn try_insert<K>(&self, key: K) -> PrefixDictResult<bool>
    where
        K: AsRef<[u8]>,
    {
        self.inner.write().try_insert(key)
    }

    /// See [`PrefixDict::contains`].
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<[u8]>,
    {
        self.inner.read().contains(key)
    }

    /// See [`PrefixDict::predict`].
    pub fn predict<K>(&self, prefix: K) -> Vec<String>
    where
        K: AsRef<[u8]>,
    {
        self.inner.read().predict(prefix)
    }

    /// See [`PrefixDict::dump`].
    pub fn dump(&self) -> Vec<String> {
        self.inner.read().dump()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether no entry has been inserted.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs `f` with shared access to the dictionary.
    ///
    /// Insertions from other handles wait until `f` returns.
    pub fn with_read<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&PrefixDict) -> R,
    {
        let guard = self.inner.read();
        f(&*guard)
    }
}

impl From<PrefixDict> for SharedPrefixDict {
    fn from(dict: PrefixDict) -> Self {
        Self::from_dict(dict)
    }
}
