/*
 * emphasis_repair.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that recovers emphasis from escaped italics markers.
 */

//! Emphasis recovery.
//!
//! An entry source with `title = {Review on \textit{E. coli} fermentation}`
//! reaches the formatter with the italics command escaped, and the rendered
//! body comes out as consecutive text fragments, one ending in the literal
//! marker `"\textit "`. This pass rebuilds a paragraph's direct children in
//! a single sweep: the marker is stripped and the *next* sibling fragment is
//! wrapped in emphasis. It only looks at citation-body paragraphs (never
//! labels) and does not descend into nested inline structures, since the
//! formatter only emits the marker at that level. Idempotent: the marker
//! text is consumed on first application.

use citefold_doctree::block::{Block, CitationEntry};
use citefold_doctree::document::Document;
use citefold_doctree::inline::{Emph, Inline, Inlines};
use citefold_doctree::visit_blocks_mut;

use crate::Result;
use crate::context::BuildContext;
use crate::transform::DocTransform;

/// The literal marker the formatter leaves for an escaped italics command.
pub const EMPHASIS_MARKER: &str = "\\textit ";

/// Transform that applies emphasis recovery to every rendered citation
/// entry.
pub struct EmphasisRepairTransform;

impl DocTransform for EmphasisRepairTransform {
    fn name(&self) -> &str {
        "emphasis-repair"
    }

    // after link repair (priority 6)
    fn priority(&self) -> u32 {
        7
    }

    fn transform(&self, doc: &mut Document, _ctx: &mut BuildContext) -> Result<()> {
        visit_blocks_mut(&mut doc.blocks, &mut |block| {
            if let Block::CitationEntry(entry) = block {
                repair_emphasis(entry);
            }
        });
        Ok(())
    }
}

/// Recover emphasis in the body paragraphs of one entry.
pub fn repair_emphasis(entry: &mut CitationEntry) {
    visit_blocks_mut(&mut entry.content, &mut |block| {
        if let Block::Paragraph(paragraph) = block {
            repair_marker_sequence(&mut paragraph.content);
        }
    });
}

fn repair_marker_sequence(inlines: &mut Inlines) {
    let mut out: Inlines = Vec::with_capacity(inlines.len());
    let mut wrap_next = false;
    for mut inline in inlines.drain(..) {
        let has_marker =
            matches!(&inline, Inline::Str(s) if s.text.ends_with(EMPHASIS_MARKER));
        if has_marker {
            if let Inline::Str(s) = &mut inline {
                s.text.truncate(s.text.len() - EMPHASIS_MARKER.len());
            }
            wrap_next = true;
        } else if wrap_next {
            inline = Inline::Emph(Emph {
                content: vec![inline],
            });
            wrap_next = false;
        }
        out.push(inline);
    }
    *inlines = out;
}

#[cfg(test)]
mod tests {
    use super::*;
    use citefold_doctree::block::Paragraph;
    use citefold_doctree::str_inline;

    #[test]
    fn test_marker_at_end_of_paragraph_wraps_nothing() {
        let mut entry = CitationEntry::new("entry-1");
        entry.content.push(Block::Paragraph(Paragraph {
            content: vec![str_inline("trailing \\textit ")],
        }));
        repair_emphasis(&mut entry);

        let Block::Paragraph(paragraph) = &entry.content[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(paragraph.content, vec![str_inline("trailing ")]);
    }

    #[test]
    fn test_label_is_never_touched() {
        use citefold_doctree::block::Label;
        let mut entry = CitationEntry::new("entry-1");
        entry.label = Some(Label {
            content: vec![str_inline("label \\textit "), str_inline("text")],
            support_smart_quotes: false,
        });
        let before = entry.clone();
        repair_emphasis(&mut entry);
        assert_eq!(entry, before);
    }
}
