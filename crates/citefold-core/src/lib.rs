/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Citation registry and bibliography rendering pipeline.
 */

//! Citation registry and bibliography rendering pipeline.
//!
//! This crate turns citation keys scattered through a multi-document build
//! into finished, cross-referenced bibliographies. It takes:
//!
//! - Formatted entries ([`FormattedEntry`]) from an external entry formatter
//! - Records of every citation, marker, and placeholder
//!   ([`CitationRegistry`]), appended by the document-construction phase
//! - Documents ([`citefold_doctree::Document`]) containing placeholder nodes
//!
//! And produces the final trees, with every placeholder replaced by its
//! rendered list.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     construction phase                      │
//! │   directives/roles → placeholder + marker nodes, recorded   │
//! │                 into the CitationRegistry                   │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │
//!                                ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    TransformPipeline                        │
//! │   BibliographyTransform (5) → LinkRepair (6) → Emphasis (7) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering is a single sequential pass per build; the only state shared
//! across placeholders is the enumeration counter on the [`BuildContext`].
//!
//! # Example
//!
//! ```rust,ignore
//! use citefold_core::{BuildContext, standard_pipeline};
//!
//! let mut ctx = BuildContext::new(registry, entries);
//! let pipeline = standard_pipeline();
//! let failures = pipeline.execute_build(&mut documents, &mut ctx);
//! ```

pub mod context;
pub mod entry;
pub mod error;
pub mod registry;
pub mod transform;
pub mod transforms;

// Re-export commonly used types
pub use context::BuildContext;
pub use entry::{EntryStore, FormattedEntry};
pub use error::{Error, Result};
pub use registry::{
    Bibliography, BibliographyKey, Citation, CitationRef, CitationRegistry, ListMode,
};
pub use transform::{DocTransform, TransformPipeline, standard_pipeline};
pub use transforms::{
    BibliographyTransform, EmphasisRepairTransform, LinkRepairTransform, repair_emphasis,
    repair_links,
};
