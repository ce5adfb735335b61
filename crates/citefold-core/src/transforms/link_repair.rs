/*
 * link_repair.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that recovers hyperlinks from escaped URL markers.
 */

//! Link recovery.
//!
//! The entry formatter cannot emit a real hyperlink for an escaped `\url`
//! command; it leaves two adjacent text fragments instead, the first ending
//! in the literal marker `"\url "` and the second carrying the URL text.
//! This pass strips the marker and wraps the URL fragment in a link whose
//! target is its own text. It recurses through every structural descendant
//! of an entry and is idempotent: once converted, no marker remains to
//! re-trigger the pattern. A fragment with no marker, or a marker with no
//! following text fragment, is left alone.

use citefold_doctree::block::{Block, Blocks, CitationEntry};
use citefold_doctree::document::Document;
use citefold_doctree::inline::{Inline, Inlines, Link, Str};
use citefold_doctree::{empty_attr, visit_blocks_mut};

use crate::Result;
use crate::context::BuildContext;
use crate::transform::DocTransform;

/// The literal marker the formatter leaves for an escaped URL command.
pub const URL_MARKER: &str = "\\url ";

/// Transform that applies link recovery to every rendered citation entry.
pub struct LinkRepairTransform;

impl DocTransform for LinkRepairTransform {
    fn name(&self) -> &str {
        "link-repair"
    }

    // after bibliography rendering (priority 5)
    fn priority(&self) -> u32 {
        6
    }

    fn transform(&self, doc: &mut Document, _ctx: &mut BuildContext) -> Result<()> {
        visit_blocks_mut(&mut doc.blocks, &mut |block| {
            if let Block::CitationEntry(entry) = block {
                repair_links(entry);
            }
        });
        Ok(())
    }
}

/// Recover hyperlinks everywhere inside one entry.
pub fn repair_links(entry: &mut CitationEntry) {
    if let Some(label) = &mut entry.label {
        repair_url_markers(&mut label.content);
    }
    repair_blocks(&mut entry.content);
}

fn repair_blocks(blocks: &mut Blocks) {
    for block in blocks.iter_mut() {
        match block {
            Block::Plain(p) => repair_url_markers(&mut p.content),
            Block::Paragraph(p) => repair_url_markers(&mut p.content),
            Block::Header(h) => repair_url_markers(&mut h.content),
            Block::OrderedList(ol) => {
                for item in &mut ol.content {
                    repair_blocks(item);
                }
            }
            Block::BulletList(bl) => {
                for item in &mut bl.content {
                    repair_blocks(item);
                }
            }
            Block::Div(div) => repair_blocks(&mut div.content),
            Block::CitationEntry(nested) => repair_links(nested),
            _ => {}
        }
    }
}

fn repair_url_markers(inlines: &mut Inlines) {
    let mut i = 0;
    while i < inlines.len() {
        let marker_here =
            matches!(&inlines[i], Inline::Str(s) if s.text.ends_with(URL_MARKER));
        let text_next = matches!(inlines.get(i + 1), Some(Inline::Str(_)));
        if marker_here && text_next {
            if let Inline::Str(s) = &mut inlines[i] {
                s.text.truncate(s.text.len() - URL_MARKER.len());
            }
            if let Inline::Str(next) = &inlines[i + 1] {
                let url = next.text.clone();
                inlines[i + 1] = Inline::Link(Link {
                    attr: empty_attr(),
                    content: vec![Inline::Str(Str { text: url.clone() })],
                    target: (url, String::new()),
                });
            }
            i += 2;
        } else {
            match &mut inlines[i] {
                Inline::Emph(e) => repair_url_markers(&mut e.content),
                Inline::Strong(s) => repair_url_markers(&mut s.content),
                Inline::Link(l) => repair_url_markers(&mut l.content),
                Inline::Span(s) => repair_url_markers(&mut s.content),
                Inline::Cite(c) => repair_url_markers(&mut c.content),
                _ => {}
            }
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citefold_doctree::block::Paragraph;
    use citefold_doctree::str_inline;

    fn entry_with_body(body: Inlines) -> CitationEntry {
        let mut entry = CitationEntry::new("entry-1");
        entry.content.push(Block::Paragraph(Paragraph { content: body }));
        entry
    }

    #[test]
    fn test_marker_without_following_text_is_untouched() {
        let mut entry = entry_with_body(vec![str_inline("See \\url ")]);
        let before = entry.clone();
        repair_links(&mut entry);
        assert_eq!(entry, before);
    }

    #[test]
    fn test_repairs_inside_nested_emphasis() {
        use citefold_doctree::inline::Emph;
        let mut entry = entry_with_body(vec![Inline::Emph(Emph {
            content: vec![str_inline("See \\url "), str_inline("http://example.org")],
        })]);
        repair_links(&mut entry);

        let Block::Paragraph(paragraph) = &entry.content[0] else {
            panic!("expected paragraph");
        };
        let Inline::Emph(emph) = &paragraph.content[0] else {
            panic!("expected emphasis");
        };
        assert!(matches!(&emph.content[1], Inline::Link(link)
            if link.target.0 == "http://example.org"));
    }
}
