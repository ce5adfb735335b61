/*
 * walk.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Recursive traversal and node replacement over the document tree.
 */

//! Recursive traversal and node replacement.
//!
//! Transforms use two primitives:
//!
//! - [`visit_blocks_mut`] / [`visit_inlines_mut`] - visit every node of one
//!   kind, in document order, recursing through all structural containers.
//! - [`flat_map_blocks`] - replace a block with an arbitrary sequence of
//!   blocks (the "replace node N with subtree T" operation). Children are
//!   rewritten before their parent is offered for replacement.

use crate::block::{Block, Blocks};
use crate::inline::{Inline, Inlines};

/// Visit every block in document order, recursing into containers.
pub fn visit_blocks_mut<F>(blocks: &mut Blocks, f: &mut F)
where
    F: FnMut(&mut Block),
{
    for block in blocks.iter_mut() {
        f(block);
        match block {
            Block::OrderedList(ol) => {
                for item in &mut ol.content {
                    visit_blocks_mut(item, f);
                }
            }
            Block::BulletList(bl) => {
                for item in &mut bl.content {
                    visit_blocks_mut(item, f);
                }
            }
            Block::Div(div) => {
                visit_blocks_mut(&mut div.content, f);
            }
            Block::CitationEntry(entry) => {
                visit_blocks_mut(&mut entry.content, f);
            }
            _ => {}
        }
    }
}

/// Visit every inline in order, recursing into nested inline containers.
pub fn visit_inlines_mut<F>(inlines: &mut Inlines, f: &mut F)
where
    F: FnMut(&mut Inline),
{
    for inline in inlines.iter_mut() {
        f(inline);
        match inline {
            Inline::Emph(emph) => visit_inlines_mut(&mut emph.content, f),
            Inline::Strong(strong) => visit_inlines_mut(&mut strong.content, f),
            Inline::Link(link) => visit_inlines_mut(&mut link.content, f),
            Inline::Span(span) => visit_inlines_mut(&mut span.content, f),
            Inline::Cite(cite) => visit_inlines_mut(&mut cite.content, f),
            _ => {}
        }
    }
}

/// Replace blocks with block sequences, bottom-up.
///
/// `f` receives each block by value and returns its replacement sequence;
/// return `vec![block]` to keep a block unchanged. Children are processed
/// before their parent.
pub fn flat_map_blocks<F>(blocks: &mut Blocks, f: &mut F)
where
    F: FnMut(Block) -> Blocks,
{
    let mut out: Blocks = Vec::with_capacity(blocks.len());
    for mut block in blocks.drain(..) {
        match &mut block {
            Block::OrderedList(ol) => {
                for item in &mut ol.content {
                    flat_map_blocks(item, f);
                }
            }
            Block::BulletList(bl) => {
                for item in &mut bl.content {
                    flat_map_blocks(item, f);
                }
            }
            Block::Div(div) => {
                flat_map_blocks(&mut div.content, f);
            }
            Block::CitationEntry(entry) => {
                flat_map_blocks(&mut entry.content, f);
            }
            _ => {}
        }
        out.extend(f(block));
    }
    *blocks = out;
}
