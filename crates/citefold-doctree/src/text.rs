/*
 * text.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Plain-text extraction from tree fragments.
 */

//! Plain-text extraction.
//!
//! Flattens a fragment of the tree into the text an author would read,
//! with no markup. Used to derive hyperlink targets from repaired text
//! fragments and by tests asserting on rendered content.

use crate::block::{Block, Blocks};
use crate::inline::{Inline, Inlines};

/// Flatten a sequence of inlines to plain text.
pub fn inlines_text(inlines: &Inlines) -> String {
    let mut out = String::new();
    push_inlines(inlines, &mut out);
    out
}

/// Flatten a sequence of blocks to plain text, blocks separated by newlines.
pub fn blocks_text(blocks: &Blocks) -> String {
    let parts: Vec<String> = blocks.iter().map(block_text).filter(|s| !s.is_empty()).collect();
    parts.join("\n")
}

fn push_inlines(inlines: &Inlines, out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Str(s) => out.push_str(&s.text),
            Inline::Code(c) => out.push_str(&c.text),
            Inline::Space(_) => out.push(' '),
            Inline::Emph(e) => push_inlines(&e.content, out),
            Inline::Strong(s) => push_inlines(&s.content, out),
            Inline::Link(l) => push_inlines(&l.content, out),
            Inline::Span(s) => push_inlines(&s.content, out),
            Inline::Cite(c) => push_inlines(&c.content, out),
        }
    }
}

fn block_text(block: &Block) -> String {
    match block {
        Block::Plain(p) => inlines_text(&p.content),
        Block::Paragraph(p) => inlines_text(&p.content),
        Block::Header(h) => inlines_text(&h.content),
        Block::OrderedList(ol) => {
            let items: Vec<String> = ol.content.iter().map(blocks_text).collect();
            items.join("\n")
        }
        Block::BulletList(bl) => {
            let items: Vec<String> = bl.content.iter().map(blocks_text).collect();
            items.join("\n")
        }
        Block::Div(div) => blocks_text(&div.content),
        Block::CitationEntry(entry) => {
            let mut parts = Vec::new();
            if let Some(label) = &entry.label {
                parts.push(inlines_text(&label.content));
            }
            let body = blocks_text(&entry.content);
            if !body.is_empty() {
                parts.push(body);
            }
            parts.join("\n")
        }
        Block::HorizontalRule(_) | Block::BibliographyPlaceholder(_) | Block::Anchor(_) => {
            String::new()
        }
    }
}
