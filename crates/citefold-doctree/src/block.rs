/*
 * block.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attr::Attr;
use crate::inline::Inlines;
use crate::list::ListAttributes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Plain(Plain),
    Paragraph(Paragraph),
    Header(Header),
    OrderedList(OrderedList),
    BulletList(BulletList),
    HorizontalRule(HorizontalRule),
    Div(Div),

    // citefold extensions
    BibliographyPlaceholder(BibliographyPlaceholder),
    CitationEntry(CitationEntry),
    Anchor(Anchor),
}

pub type Blocks = Vec<Block>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plain {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub level: usize,
    pub attr: Attr,
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedList {
    pub attr: ListAttributes,
    pub content: Vec<Blocks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletList {
    pub content: Vec<Blocks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalRule {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Div {
    pub attr: Attr,
    pub content: Blocks,
}

/// A location where a rendered bibliography should appear.
///
/// Emitted by the document-construction phase; replaced wholesale by the
/// bibliography transform with the rendered list (or an [`Anchor`] when no
/// citations matched).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BibliographyPlaceholder {
    pub docname: String,
    pub id: String,
}

/// One rendered bibliography entry.
///
/// Created empty when the entry is first parsed and held by the registry so
/// in-text references can target `id` before rendering happens. The
/// bibliography transform fills in `docname`, `backrefs`, `label`, and the
/// formatted body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationEntry {
    pub id: String,
    pub docname: String,
    pub backrefs: Vec<String>,
    pub label: Option<Label>,
    pub content: Blocks,
}

impl CitationEntry {
    /// Create an empty entry container with the given target id.
    pub fn new(id: impl Into<String>) -> Self {
        CitationEntry {
            id: id.into(),
            docname: String::new(),
            backrefs: Vec::new(),
            label: None,
            content: Vec::new(),
        }
    }
}

/// The visible label of a citation-style entry.
///
/// `support_smart_quotes` is false for labels taken from the entry
/// formatter: their bracket/shorthand text must not be typographically
/// rewritten by downstream writers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub content: Inlines,
    pub support_smart_quotes: bool,
}

/// An inert, empty link target.
///
/// Keeps an id addressable after its original node was removed, so existing
/// cross-references to that id remain structurally valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub id: String,
}
