// Copyright (c) 2025 Trie Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word list loading.
//!
//! A word list holds one entry per line. Lines are taken byte for byte, so
//! spaces inside a line belong to the entry. A trailing `\r` is dropped and
//! blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::data_structures::prefix_dict::{PrefixDict, PrefixDictConfig};
use crate::error::TrieDictResult;

/// Builds a dictionary from the word list at `path`.
///
/// Lines rejected by checked insertion (too long for `config.max_key_len`)
/// are logged and skipped.
pub fn load_word_list<P: AsRef<Path>>(path: P, config: &PrefixDictConfig) -> TrieDictResult<PrefixDict> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let dict = read_word_list(BufReader::new(file), config)?;
    info!(
        path = %path.display(),
        entries = dict.len(),
        nodes = dict.node_count(),
        "Loaded word list"
    );
    Ok(dict)
}

/// Builds a dictionary from a reader holding a word list.
pub fn read_word_list<R: BufRead>(mut reader: R, config: &PrefixDictConfig) -> TrieDictResult<PrefixDict> {
    let mut dict = PrefixDict::with_config(config.clone());
    let mut line = Vec::new();
    let mut line_no = 0usize;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        line_no += 1;

        let mut entry = line.as_slice();
        if let Some(stripped) = entry.strip_suffix(b"\n") {
            entry = stripped;
        }
        if let Some(stripped) = entry.strip_suffix(b"\r") {
            entry = stripped;
        }
        if entry.is_empty() {
            continue;
        }

        if let Err(e) = dict.try_insert(entry) {
            warn!(line = line_no, error = %e, "Skipping word list entry");
        }
    }

    Ok(dict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_word_list() {
        let input = b"popo\r\npopo scam\n\nportto\npopo\ncob";
        let dict = read_word_list(&input[..], &PrefixDictConfig::default()).unwrap();

        assert_eq!(dict.len(), 4);
        assert!(dict.contains("popo scam"));
        assert!(dict.contains("cob"));
        assert!(!dict.contains("popo\r"));
    }

    #[test]
    fn test_read_word_list_skips_long_entries() {
        let config = PrefixDictConfig::new().with_max_key_len(4);
        let dict = read_word_list(&b"pig\nportto\ncob\n"[..], &config).unwrap();

        assert_eq!(dict.len(), 2);
        assert!(!dict.contains("portto"));
        assert_eq!(dict.config().max_key_len, 4);
    }

    #[test]
    fn test_load_missing_word_list() {
        let result = load_word_list("does/not/exist.txt", &PrefixDictConfig::default());
        assert!(matches!(result, Err(crate::error::TrieDictError::Io(_))));
    }
}
