/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document tree type definitions for citefold.
 *
 * This crate provides pure data type definitions for the rendered
 * document tree, mirroring the shape of Pandoc's AST. It has minimal
 * dependencies (serde, hashlink) and can be used by any crate that
 * needs to construct or rewrite document subtrees.
 */

pub mod attr;
pub mod block;
pub mod document;
pub mod inline;
pub mod list;
pub mod text;
pub mod walk;

// Re-export commonly used types at the crate root
pub use attr::{Attr, empty_attr, is_empty_attr};
pub use block::{
    Anchor, BibliographyPlaceholder, Block, Blocks, BulletList, CitationEntry, Div,
    HorizontalRule, Label, Header, OrderedList, Paragraph, Plain,
};
pub use document::Document;
pub use inline::{
    AsInline, Cite, Code, Emph, Inline, Inlines, Link, Space, Span, Str, Strong, Target,
    is_empty_target, str_inline,
};
pub use list::{ListAttributes, ListNumberDelim, ListNumberStyle};
pub use text::{blocks_text, inlines_text};
pub use walk::{flat_map_blocks, visit_blocks_mut, visit_inlines_mut};
