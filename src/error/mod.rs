// Copyright (c) 2025 Trie Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for the trie dictionary.
//!
//! Dictionary operations themselves are infallible; these types cover checked
//! insertion, configuration loading and the I/O done by the command-line tool.

use thiserror::Error;

use crate::data_structures::prefix_dict::PrefixDictError;

pub mod config;

/// Result type alias used throughout the crate.
pub type TrieDictResult<T> = Result<T, TrieDictError>;

/// Core error enum for the trie dictionary.
#[derive(Error, Debug)]
pub enum TrieDictError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors reported by checked dictionary operations.
    #[error("Dictionary error: {0}")]
    Dict(#[from] PrefixDictError),

    /// IO errors that may occur while reading word lists or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
