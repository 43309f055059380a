// Copyright (c) 2025 Trie Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the prefix dictionary.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Default limit applied by checked insertion.
pub const DEFAULT_MAX_KEY_LEN: usize = 1024;

/// Configuration for a [`PrefixDict`](super::PrefixDict).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixDictConfig {
    /// Longest key, in bytes, accepted by `try_insert`
    pub max_key_len: usize,

    /// Whether a prefix running past a childless entry predicts that entry
    pub leaf_overrun_fallback: bool,
}

impl PrefixDictConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_key_len: 1024
    /// - leaf_overrun_fallback: true
    pub fn new() -> Self {
        Self {
            max_key_len: DEFAULT_MAX_KEY_LEN,
            leaf_overrun_fallback: true,
        }
    }

    /// Set the longest key accepted by checked insertion.
    pub fn with_max_key_len(mut self, max_key_len: usize) -> Self {
        self.max_key_len = max_key_len;
        self
    }

    /// Enable or disable the leaf overrun fallback of `predict`.
    ///
    /// When enabled, `predict("cobx")` returns `["cob"]` if `"cob"` is an
    /// entry without continuations. When disabled, the same query is empty.
    pub fn with_leaf_overrun_fallback(mut self, enabled: bool) -> Self {
        self.leaf_overrun_fallback = enabled;
        self
    }
}

impl Default for PrefixDictConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for PrefixDictConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_key_len == 0 {
            return Err(ConfigError::ValidationError(
                "max_key_len must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
