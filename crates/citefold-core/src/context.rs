/*
 * context.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Build context for pipeline execution.
 */

//! Build context for pipeline execution.
//!
//! The `BuildContext` is the mutable state passed through all transforms of
//! one build pass: the citation registry populated during construction, the
//! entry store, the shared enumeration counter, and collected warnings.
//! Constructing a fresh context is the reset rule between independent
//! builds; nothing here survives a build.

use crate::entry::EntryStore;
use crate::registry::CitationRegistry;
use citefold_diagnostics::DiagnosticMessage;

/// Per-build mutable state handed to every transform.
pub struct BuildContext {
    /// Citations, markers, and placeholders recorded during construction.
    pub registry: CitationRegistry,

    /// Formatted entries supplied by the external entry formatter.
    pub entries: EntryStore,

    /// Shared enumeration counter: the next number an enumerated
    /// bibliography without an explicit start will assign. `None` until a
    /// first enumerated bibliography initializes it. Shared across every
    /// placeholder and document in the build, so numbering continues
    /// seamlessly unless a placeholder restarts it.
    pub enum_counter: Option<usize>,

    /// Non-fatal warnings collected during transforms.
    pub warnings: Vec<DiagnosticMessage>,
}

impl BuildContext {
    /// Create the context for one build pass.
    pub fn new(registry: CitationRegistry, entries: EntryStore) -> Self {
        BuildContext {
            registry,
            entries,
            enum_counter: None,
            warnings: Vec::new(),
        }
    }
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::new(CitationRegistry::new(), EntryStore::new())
    }
}
