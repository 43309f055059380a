// Copyright (c) 2025 Trie Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the prefix dictionary.
//!
//! Only checked insertion can fail; every other operation accepts any input.

/// Errors that can occur in checked prefix dictionary operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum PrefixDictError {
    /// The empty string cannot be stored as an entry.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// The key is longer than the configured limit.
    #[error("Key of {len} bytes exceeds maximum key length of {max_len}")]
    KeyTooLong {
        /// Length of the rejected key in bytes.
        len: usize,
        /// The configured maximum.
        max_len: usize,
    },
}

/// Result type for prefix dictionary operations.
pub type PrefixDictResult<T> = Result<T, PrefixDictError>;
