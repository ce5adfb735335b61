/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Structured build diagnostics for citefold.
 */

//! Structured build diagnostics.
//!
//! Build failures and warnings are reported as [`DiagnosticMessage`]s
//! rather than bare strings, following tidyverse-style guidelines:
//!
//! 1. **Code**: optional stable error code (e.g. "C-1-1") for searchability
//! 2. **Title**: brief message
//! 3. **Problem**: what went wrong (the "must" or "can't" statement)
//! 4. **Details**: specific information (bulleted)
//! 5. **Hints**: optional guidance for fixing (ends with ?)
//!
//! Messages render to terminal text ([`DiagnosticMessage::to_text`]) or to
//! JSON ([`DiagnosticMessage::to_json`]) for machine-readable build logs.
//!
//! Construct messages through [`DiagnosticMessageBuilder`]:
//!
//! ```
//! use citefold_diagnostics::DiagnosticMessageBuilder;
//!
//! let error = DiagnosticMessageBuilder::error("Unknown bibliography")
//!     .with_code("C-1-1")
//!     .problem("Placeholder 'bib-0' in document 'index' was never recorded")
//!     .add_hint("Was the bibliography directive processed for this document?")
//!     .build();
//! assert!(error.to_text().contains("C-1-1"));
//! ```

pub mod builder;
pub mod diagnostic;

pub use builder::DiagnosticMessageBuilder;
pub use diagnostic::{DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage, MessageContent};
