// Copyright (c) 2025 Trie Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie Dict Library
//!
//! A byte-exact prefix-tree dictionary with exact lookup and prefix
//! prediction, plus the configuration and error types used by the
//! `trie_dict` command-line tool.
//!
//! # Example
//!
//! ```
//! use trie_dict_lib::data_structures::PrefixDict;
//!
//! let dict: PrefixDict = ["pig", "popo", "cob"].into_iter().collect();
//! assert!(dict.contains("pig"));
//! assert_eq!(dict.predict("c"), vec!["cob".to_string()]);
//! ```

pub mod config;
pub mod data_structures;
pub mod error;
pub mod word_list;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the trie dictionary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
