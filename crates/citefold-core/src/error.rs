/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Error types for bibliography rendering.
 */

//! Error types for bibliography rendering.
//!
//! Only broken registry invariants are errors: a citation or placeholder
//! referring to state the construction phase never recorded. They are fatal
//! for the affected document. Configuration anomalies (such as a malformed
//! start number) are warnings on the [`BuildContext`](crate::BuildContext),
//! and a repair pass finding nothing to repair is not an event at all.

use citefold_diagnostics::{DiagnosticMessage, DiagnosticMessageBuilder};
use thiserror::Error;

/// Result type alias for citefold-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    /// A placeholder node exists but no bibliography was recorded for it.
    #[error("no bibliography recorded for placeholder '{id}' in document '{docname}'")]
    UnknownBibliography { docname: String, id: String },

    /// A citation was recorded without a matching pre-built entry node.
    #[error(
        "no entry node for key '{key}' in bibliography '{id}' of document '{docname}'"
    )]
    MissingEntryNode {
        docname: String,
        id: String,
        key: String,
    },

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from any message.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Convert this error to a DiagnosticMessage.
    ///
    /// Rendering errors use C-1-* error codes.
    pub fn to_diagnostic(&self) -> DiagnosticMessage {
        match self {
            Error::UnknownBibliography { docname, id } => {
                DiagnosticMessageBuilder::error("Unknown bibliography")
                    .with_code("C-1-1")
                    .problem(format!(
                        "Placeholder '{}' in document '{}' was never recorded",
                        id, docname
                    ))
                    .add_hint("Was the bibliography directive processed for this document?")
                    .build()
            }

            Error::MissingEntryNode { docname, id, key } => {
                DiagnosticMessageBuilder::error("Missing entry node")
                    .with_code("C-1-2")
                    .problem(format!(
                        "Entry '{}' has no pre-built node in bibliography '{}'",
                        key, id
                    ))
                    .add_detail(format!("document '{}', bibliography '{}'", docname, id))
                    .add_detail("a citation was recorded for a key the parser never produced")
                    .build()
            }

            Error::Other(msg) => DiagnosticMessageBuilder::error("Rendering failed")
                .with_code("C-1-9")
                .problem(msg.clone())
                .build(),
        }
    }
}
