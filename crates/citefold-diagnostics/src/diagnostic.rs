/*
 * diagnostic.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Core diagnostic message types.
 */

//! Core diagnostic message types.

use serde::{Deserialize, Serialize};

/// The kind of diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// An error that prevents completion
    Error,
    /// A warning that doesn't prevent completion but indicates a problem
    Warning,
    /// Informational message
    Info,
    /// A note providing additional context
    Note,
}

impl DiagnosticKind {
    fn label(self) -> &'static str {
        match self {
            DiagnosticKind::Error => "Error",
            DiagnosticKind::Warning => "Warning",
            DiagnosticKind::Info => "Info",
            DiagnosticKind::Note => "Note",
        }
    }
}

/// How detail items should be presented (tidyverse x/i bullet style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailKind {
    /// Error detail (✖ bullet)
    Error,
    /// Info detail (i bullet)
    Info,
    /// Note detail (plain bullet)
    Note,
}

impl DetailKind {
    fn bullet(self) -> &'static str {
        match self {
            DetailKind::Error => "✖",
            DetailKind::Info => "i",
            DetailKind::Note => "•",
        }
    }
}

/// The content of a message or detail item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageContent {
    /// Plain text content
    Plain(String),
    /// Markdown content
    Markdown(String),
}

impl MessageContent {
    /// Get the raw string content for display
    pub fn as_str(&self) -> &str {
        match self {
            MessageContent::Plain(s) => s,
            MessageContent::Markdown(s) => s,
        }
    }

    /// Convert to JSON value with type information
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;
        match self {
            MessageContent::Plain(s) => json!({
                "type": "plain",
                "content": s
            }),
            MessageContent::Markdown(s) => json!({
                "type": "markdown",
                "content": s
            }),
        }
    }
}

impl From<String> for MessageContent {
    fn from(s: String) -> Self {
        MessageContent::Markdown(s)
    }
}

impl From<&str> for MessageContent {
    fn from(s: &str) -> Self {
        MessageContent::Markdown(s.to_string())
    }
}

/// A detail item in a diagnostic message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailItem {
    /// The kind of detail (error, info, note)
    pub kind: DetailKind,
    /// The content of the detail
    pub content: MessageContent,
}

/// A diagnostic message following tidyverse-style structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticMessage {
    /// Optional stable error code (e.g. "C-1-1")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Brief title for the message
    pub title: String,

    /// The kind of diagnostic (Error, Warning, Info, Note)
    pub kind: DiagnosticKind,

    /// The problem statement (the "what" - using "must" or "can't")
    pub problem: Option<MessageContent>,

    /// Specific details (the "where/why")
    pub details: Vec<DetailItem>,

    /// Optional hints for fixing (ends with ?)
    pub hints: Vec<MessageContent>,
}

impl DiagnosticMessage {
    /// Access the diagnostic message builder API.
    pub fn builder(title: impl Into<String>, kind: DiagnosticKind) -> crate::DiagnosticMessageBuilder {
        crate::DiagnosticMessageBuilder::new(title, kind)
    }

    /// Render the message as terminal text.
    pub fn to_text(&self) -> String {
        let mut out = match &self.code {
            Some(code) => format!("{} [{}]: {}", self.kind.label(), code, self.title),
            None => format!("{}: {}", self.kind.label(), self.title),
        };
        if let Some(problem) = &self.problem {
            out.push('\n');
            out.push_str(problem.as_str());
        }
        for detail in &self.details {
            out.push('\n');
            out.push_str(detail.kind.bullet());
            out.push(' ');
            out.push_str(detail.content.as_str());
        }
        for hint in &self.hints {
            out.push('\n');
            out.push_str("? ");
            out.push_str(hint.as_str());
        }
        out
    }

    /// Render the message as a JSON value for machine-readable build logs.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;
        json!({
            "code": self.code,
            "title": self.title,
            "kind": self.kind,
            "problem": self.problem.as_ref().map(|p| p.to_json()),
            "details": self.details.iter().map(|d| d.content.to_json()).collect::<Vec<_>>(),
            "hints": self.hints.iter().map(|h| h.to_json()).collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_with_code_and_details() {
        let msg = DiagnosticMessage {
            code: Some("C-1-2".to_string()),
            title: "Missing entry node".to_string(),
            kind: DiagnosticKind::Error,
            problem: Some("Entry 'doe2020' has no pre-built node".into()),
            details: vec![DetailItem {
                kind: DetailKind::Error,
                content: "document 'index', bibliography 'bib-0'".into(),
            }],
            hints: vec![],
        };
        let text = msg.to_text();
        assert!(text.starts_with("Error [C-1-2]: Missing entry node"));
        assert!(text.contains("✖ document 'index', bibliography 'bib-0'"));
    }

    #[test]
    fn test_to_text_without_code() {
        let msg = DiagnosticMessage {
            code: None,
            title: "Numbering fallback".to_string(),
            kind: DiagnosticKind::Warning,
            problem: None,
            details: vec![],
            hints: vec![],
        };
        assert_eq!(msg.to_text(), "Warning: Numbering fallback");
    }

    #[test]
    fn test_to_json_includes_code() {
        let msg = DiagnosticMessage {
            code: Some("C-1-1".to_string()),
            title: "Unknown bibliography".to_string(),
            kind: DiagnosticKind::Error,
            problem: None,
            details: vec![],
            hints: vec![],
        };
        let json = msg.to_json();
        assert_eq!(json["code"], "C-1-1");
        assert_eq!(json["title"], "Unknown bibliography");
    }
}
