// Copyright (c) 2025 Trie Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for the trie dictionary.

pub mod prefix_dict;

pub use prefix_dict::{PrefixDict, PrefixDictConfig, PrefixDictError, SharedPrefixDict};
