/*
 * bibliography.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that replaces bibliography placeholders with rendered citation
 * lists.
 */

//! Bibliography rendering transform.
//!
//! For each placeholder in a document, in discovery order, this transform
//! pulls the citations recorded against it and builds the final list:
//! ordered or unordered, or a flat sequence of labeled citation-style
//! entries with same-document back-references. The placeholder is replaced
//! wholesale; a placeholder with no citations becomes an inert anchor so
//! existing references to its id stay valid.
//!
//! Enumerated bibliographies share one counter per build: a list without an
//! explicit start continues numbering where the previous one stopped. The
//! counter value is threaded explicitly through each placeholder's render
//! step and stored back on the context afterwards.

use std::collections::HashMap;

use citefold_diagnostics::{DiagnosticMessage, DiagnosticMessageBuilder};
use citefold_doctree::block::{
    Anchor, BibliographyPlaceholder, Block, Blocks, BulletList, Label, OrderedList, Paragraph,
};
use citefold_doctree::document::Document;
use citefold_doctree::list::ListNumberDelim;
use citefold_doctree::walk::{flat_map_blocks, visit_blocks_mut};

use crate::Result;
use crate::context::BuildContext;
use crate::error::Error;
use crate::registry::{BibliographyKey, Citation, CitationRegistry, ListMode};
use crate::transform::DocTransform;
use crate::transforms::{repair_emphasis, repair_links};

/// Transform that renders bibliography placeholders.
pub struct BibliographyTransform;

impl DocTransform for BibliographyTransform {
    fn name(&self) -> &str {
        "bibliography"
    }

    // must run before the host resolves cross-references (priority 10), so
    // that every entry target exists by the time markers are linked
    fn priority(&self) -> u32 {
        5
    }

    fn transform(&self, doc: &mut Document, ctx: &mut BuildContext) -> Result<()> {
        let mut placeholders: Vec<BibliographyPlaceholder> = Vec::new();
        visit_blocks_mut(&mut doc.blocks, &mut |block| {
            if let Block::BibliographyPlaceholder(placeholder) = block {
                placeholders.push(placeholder.clone());
            }
        });

        if placeholders.is_empty() {
            return Ok(());
        }

        let mut counter = ctx.enum_counter;
        let mut rendered: HashMap<String, Blocks> = HashMap::new();
        for placeholder in &placeholders {
            let (blocks, next) =
                render_placeholder(placeholder, &mut ctx.registry, &mut ctx.warnings, counter)?;
            counter = next;
            rendered.insert(placeholder.id.clone(), blocks);
        }
        ctx.enum_counter = counter;

        flat_map_blocks(&mut doc.blocks, &mut |block| match block {
            Block::BibliographyPlaceholder(placeholder) => rendered
                .remove(&placeholder.id)
                .unwrap_or_else(|| vec![Block::BibliographyPlaceholder(placeholder)]),
            other => vec![other],
        });

        Ok(())
    }
}

/// Render one placeholder, threading the shared enumeration counter through.
///
/// Takes the counter value before this bibliography and returns the value
/// after it, so consecutive enumerated bibliographies neither repeat nor
/// skip numbers.
fn render_placeholder(
    placeholder: &BibliographyPlaceholder,
    registry: &mut CitationRegistry,
    warnings: &mut Vec<DiagnosticMessage>,
    counter: Option<usize>,
) -> Result<(Blocks, Option<usize>)> {
    let key = BibliographyKey::new(placeholder.docname.clone(), placeholder.id.clone());

    let citations: Vec<Citation> = registry.citations_for(&key).cloned().collect();
    let backrefs: Vec<Vec<String>> = citations
        .iter()
        .map(|citation| registry.refs_citing(&key.docname, &citation.key))
        .collect();

    let bibliography =
        registry
            .bibliography_mut(&key)
            .ok_or_else(|| Error::UnknownBibliography {
                docname: key.docname.clone(),
                id: key.id.clone(),
            })?;

    if citations.is_empty() {
        return Ok((vec![Block::Anchor(Anchor { id: key.id })], counter));
    }

    let mode = bibliography.mode.clone();

    let mut counter = counter;
    let mut start_value = 1usize;
    if let ListMode::Enumerated { start, .. } = &mode {
        start_value = match start {
            Some(n) if *n >= 1 => *n as usize,
            Some(n) => {
                tracing::warn!(
                    document = %key.docname,
                    placeholder = %key.id,
                    start = *n,
                    "start below 1 for enumerated bibliography; continuing shared numbering"
                );
                warnings.push(
                    DiagnosticMessageBuilder::warning("Bibliography numbering fallback")
                        .problem(format!(
                            "Start {} for bibliography '{}' in document '{}' must be >= 1",
                            n, key.id, key.docname
                        ))
                        .add_info("numbering continues from the shared counter instead")
                        .build(),
                );
                counter.unwrap_or(1)
            }
            None => counter.unwrap_or(1),
        };
        counter = Some(start_value);
    }

    let mut items: Vec<Blocks> = Vec::new();
    let mut flat: Blocks = Vec::new();
    for (citation, refs) in citations.iter().zip(backrefs) {
        let mut node = bibliography.citation_nodes.remove(&citation.key).ok_or_else(|| {
            Error::MissingEntryNode {
                docname: key.docname.clone(),
                id: key.id.clone(),
                key: citation.key.clone(),
            }
        })?;

        if let ListMode::CitationStyle = &mode {
            // backrefs only supported in same document
            if !refs.is_empty() {
                node.backrefs = refs;
            }
            node.label = Some(Label {
                content: citation.entry.label.clone(),
                support_smart_quotes: false,
            });
        }
        node.content.push(Block::Paragraph(Paragraph {
            content: citation.entry.body.clone(),
        }));
        node.docname = key.docname.clone();

        repair_links(&mut node);
        repair_emphasis(&mut node);

        if let ListMode::CitationStyle = &mode {
            flat.push(Block::CitationEntry(node));
        } else {
            items.push(vec![Block::CitationEntry(node)]);
        }
        if let ListMode::Enumerated { .. } = &mode {
            counter = counter.map(|c| c + 1);
        }
    }

    let container: Blocks = match &mode {
        ListMode::Enumerated { style, .. } => vec![Block::OrderedList(OrderedList {
            attr: (start_value, *style, ListNumberDelim::Period),
            content: items,
        })],
        ListMode::Bulleted => vec![Block::BulletList(BulletList { content: items })],
        ListMode::CitationStyle => flat,
    };

    let mut wrapper = bibliography.header.clone();
    wrapper.content.extend(container);
    Ok((vec![Block::Div(wrapper)], counter))
}
