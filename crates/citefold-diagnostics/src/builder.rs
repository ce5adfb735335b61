/*
 * builder.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Builder API for diagnostic messages.
 */

//! Builder API for diagnostic messages.

use crate::diagnostic::{
    DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage, MessageContent,
};

/// Fluent builder for [`DiagnosticMessage`].
///
/// The builder encodes the tidyverse-style structure: one title, an optional
/// problem statement, bulleted details, and question-form hints.
#[derive(Debug, Clone)]
pub struct DiagnosticMessageBuilder {
    message: DiagnosticMessage,
}

impl DiagnosticMessageBuilder {
    /// Start a message of the given kind.
    pub fn new(title: impl Into<String>, kind: DiagnosticKind) -> Self {
        DiagnosticMessageBuilder {
            message: DiagnosticMessage {
                code: None,
                title: title.into(),
                kind,
                problem: None,
                details: Vec::new(),
                hints: Vec::new(),
            },
        }
    }

    /// Start an error message.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title, DiagnosticKind::Error)
    }

    /// Start a warning message.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(title, DiagnosticKind::Warning)
    }

    /// Attach a stable error code (e.g. "C-1-1").
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.message.code = Some(code.into());
        self
    }

    /// Set the problem statement.
    pub fn problem(mut self, content: impl Into<MessageContent>) -> Self {
        self.message.problem = Some(content.into());
        self
    }

    /// Add an error-kind detail bullet.
    pub fn add_detail(mut self, content: impl Into<MessageContent>) -> Self {
        self.message.details.push(DetailItem {
            kind: DetailKind::Error,
            content: content.into(),
        });
        self
    }

    /// Add an info-kind detail bullet.
    pub fn add_info(mut self, content: impl Into<MessageContent>) -> Self {
        self.message.details.push(DetailItem {
            kind: DetailKind::Info,
            content: content.into(),
        });
        self
    }

    /// Add a hint.
    pub fn add_hint(mut self, content: impl Into<MessageContent>) -> Self {
        self.message.hints.push(content.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> DiagnosticMessage {
        self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_round_trip() {
        let msg = DiagnosticMessageBuilder::error("Unknown bibliography")
            .with_code("C-1-1")
            .problem("Placeholder 'bib-0' in document 'index' was never recorded")
            .add_detail("the placeholder node exists but no record matches it")
            .add_hint("Was the bibliography directive processed for this document?")
            .build();

        assert_eq!(msg.kind, DiagnosticKind::Error);
        assert_eq!(msg.code.as_deref(), Some("C-1-1"));
        assert_eq!(msg.details.len(), 1);
        assert_eq!(msg.hints.len(), 1);
    }

    #[test]
    fn test_warning_builder_kind() {
        let msg = DiagnosticMessageBuilder::warning("Numbering fallback").build();
        assert_eq!(msg.kind, DiagnosticKind::Warning);
        assert!(msg.code.is_none());
    }
}
