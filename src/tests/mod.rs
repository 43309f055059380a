// Copyright (c) 2025 Trie Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Crate-level test modules.
//!
//! Dictionary behaviour is tested next to the dictionary itself; this module
//! covers configuration loading and the error types, which need temporary
//! files and environment variables.

pub mod test_utils;

pub use test_utils::TestFixture;
