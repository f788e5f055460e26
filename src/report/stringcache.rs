//! Indexed cache of report strings.
//!
//! Every distinct text is stored once and referenced by its index from the
//! JSON report model. Long texts are transparently compressed when it pays
//! off.

use std::collections::HashMap;

use base64::prelude::*;
use serde::Serialize;

// Texts shorter than this (including the '*' prefix) are never compressed.
const COMPRESS_THRESHOLD: usize = 80;
// Compression must beat the raw form by this factor to be used.
const USE_COMPRESSED_RATIO: f64 = 1.1;

const COMPRESSION_LEVEL: i32 = 3;

/// Index of a text in a [`StringCache`]. Serializes as a plain integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StringIndex(pub u64);

pub struct StringCache {
    cache: HashMap<String, StringIndex>,
    index: u64,
}

impl StringCache {
    pub fn new() -> Self {
        let mut cache = HashMap::new();
        // Index 0 is reserved for the empty text.
        cache.insert("*".to_string(), StringIndex(0));

        StringCache { cache, index: 1 }
    }

    /// Interns a text, returning its index. Empty text maps to index 0,
    /// repeated texts return the index of their first occurrence.
    pub fn add(&mut self, text: &str) -> StringIndex {
        if text.is_empty() {
            return StringIndex(0);
        }

        let encoded = self.encode(text);

        if let Some(index) = self.cache.get(&encoded) {
            return *index;
        }

        let index = StringIndex(self.index);
        self.index += 1;
        self.cache.insert(encoded, index);
        index
    }

    /// All cached texts, ordered by index. Uncompressed entries carry the
    /// `'*'` prefix, compressed ones are base64.
    pub fn dump(&self) -> Vec<String> {
        let mut entries = self.cache.iter().collect::<Vec<_>>();
        entries.sort_by_key(|(_, index)| index.0);
        entries.into_iter().map(|(text, _)| text.clone()).collect()
    }

    fn encode(&self, text: &str) -> String {
        let raw = format!("*{}", text);

        if self.cache.contains_key(&raw) || raw.len() < COMPRESS_THRESHOLD {
            return raw;
        }

        match compress_text(text) {
            Some(compressed)
                if (compressed.len() as f64) * USE_COMPRESSED_RATIO < raw.len() as f64 =>
            {
                compressed
            }
            _ => raw,
        }
    }
}

fn compress_text(text: &str) -> Option<String> {
    let compressed = zstd::encode_all(text.as_bytes(), COMPRESSION_LEVEL).ok()?;
    Some(BASE64_STANDARD.encode(compressed))
}
