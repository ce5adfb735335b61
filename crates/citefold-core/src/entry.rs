/*
 * entry.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Formatted bibliography entries and their lookup store.
 */

//! Formatted bibliography entries and their lookup store.
//!
//! The entry formatter (external to this crate) turns each bibliography
//! source record into styled rich text: a short label and a body. This
//! module only holds that output for lookup during document construction;
//! it never formats anything itself.

use citefold_doctree::Inlines;
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// The formatted rich text for one bibliography entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedEntry {
    /// The entry's citation key.
    pub key: String,
    /// The short label form (typically the bracketed citation key).
    pub label: Inlines,
    /// The full formatted entry body.
    pub body: Inlines,
}

/// Lookup store of formatted entries, in the order the formatter produced
/// them.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: LinkedHashMap<String, FormattedEntry>,
}

impl EntryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any previous entry with the same key.
    pub fn insert(&mut self, entry: FormattedEntry) {
        self.entries.insert(entry.key.clone(), entry);
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&FormattedEntry> {
        self.entries.get(key)
    }

    /// Check whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FormattedEntry> {
        self.entries.values()
    }
}
