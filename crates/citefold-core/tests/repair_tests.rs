//! Tests for the two text-repair passes.
//!
//! The entry formatter leaves two kinds of artifact in rendered text:
//! escaped URL markers and escaped italics markers. Both repairs must be
//! idempotent, and both must be no-ops when the artifact is absent.

use citefold_core::{repair_emphasis, repair_links};
use citefold_doctree::block::{Block, CitationEntry, Paragraph};
use citefold_doctree::inline::{Emph, Inline, Inlines};
use citefold_doctree::{inlines_text, str_inline};

fn entry_with_paragraph(content: Inlines) -> CitationEntry {
    let mut entry = CitationEntry::new("entry-1");
    entry
        .content
        .push(Block::Paragraph(Paragraph { content }));
    entry
}

fn paragraph_of(entry: &CitationEntry) -> &Paragraph {
    match &entry.content[0] {
        Block::Paragraph(paragraph) => paragraph,
        other => panic!("expected paragraph, got {:?}", other),
    }
}

// ============================================================================
// Link recovery
// ============================================================================

#[test]
fn test_url_marker_becomes_hyperlink() {
    let mut entry =
        entry_with_paragraph(vec![str_inline("See \\url "), str_inline("http://example.org")]);
    repair_links(&mut entry);

    let paragraph = paragraph_of(&entry);
    assert_eq!(paragraph.content[0], str_inline("See "));
    match &paragraph.content[1] {
        Inline::Link(link) => {
            assert_eq!(link.target.0, "http://example.org");
            assert_eq!(inlines_text(&link.content), "http://example.org");
        }
        other => panic!("expected link, got {:?}", other),
    }
}

#[test]
fn test_link_repair_is_idempotent() {
    let mut entry =
        entry_with_paragraph(vec![str_inline("See \\url "), str_inline("http://example.org")]);
    repair_links(&mut entry);
    let once = entry.clone();
    repair_links(&mut entry);
    assert_eq!(entry, once);
}

#[test]
fn test_link_repair_without_artifact_is_a_no_op() {
    let mut entry = entry_with_paragraph(vec![
        str_inline("Journal of Examples, 12(3)."),
        str_inline("http://example.org"),
    ]);
    let before = entry.clone();
    repair_links(&mut entry);
    assert_eq!(entry, before);
}

#[test]
fn test_marker_mid_fragment_does_not_trigger() {
    // the marker has to be a suffix of its fragment
    let mut entry = entry_with_paragraph(vec![
        str_inline("the \\url command"),
        str_inline("http://example.org"),
    ]);
    let before = entry.clone();
    repair_links(&mut entry);
    assert_eq!(entry, before);
}

// ============================================================================
// Emphasis recovery
// ============================================================================

#[test]
fn test_italics_marker_wraps_next_fragment() {
    let mut entry = entry_with_paragraph(vec![
        str_inline("Review on \\textit "),
        str_inline("E. coli "),
        str_inline("fermentation"),
    ]);
    repair_emphasis(&mut entry);

    let paragraph = paragraph_of(&entry);
    assert_eq!(
        paragraph.content,
        vec![
            str_inline("Review on "),
            Inline::Emph(Emph {
                content: vec![str_inline("E. coli ")],
            }),
            str_inline("fermentation"),
        ]
    );
    assert_eq!(inlines_text(&paragraph.content), "Review on E. coli fermentation");
}

#[test]
fn test_emphasis_repair_is_idempotent() {
    let mut entry = entry_with_paragraph(vec![
        str_inline("Review on \\textit "),
        str_inline("E. coli "),
        str_inline("fermentation"),
    ]);
    repair_emphasis(&mut entry);
    let once = entry.clone();
    repair_emphasis(&mut entry);
    assert_eq!(entry, once);
}

#[test]
fn test_emphasis_repair_without_artifact_is_a_no_op() {
    let mut entry = entry_with_paragraph(vec![
        str_inline("Review on "),
        str_inline("fermentation"),
    ]);
    let before = entry.clone();
    repair_emphasis(&mut entry);
    assert_eq!(entry, before);
}

#[test]
fn test_emphasis_repair_ignores_nested_structures() {
    // the marker-emission pattern only occurs among a paragraph's direct
    // children; a marker nested inside emphasis is left where it is
    let nested = Inline::Emph(Emph {
        content: vec![str_inline("inner \\textit "), str_inline("text")],
    });
    let mut entry = entry_with_paragraph(vec![nested.clone(), str_inline("tail")]);
    repair_emphasis(&mut entry);

    let paragraph = paragraph_of(&entry);
    assert_eq!(paragraph.content[0], nested);
    assert_eq!(paragraph.content[1], str_inline("tail"));
}

// ============================================================================
// Repairs through the full pipeline
// ============================================================================

#[test]
fn test_rendered_entries_come_out_repaired() {
    use citefold_core::{
        Bibliography, BibliographyKey, BuildContext, CitationRegistry, EntryStore,
        FormattedEntry, ListMode, standard_pipeline,
    };
    use citefold_doctree::block::{BibliographyPlaceholder, Div};
    use citefold_doctree::{Document, empty_attr};

    let mut registry = CitationRegistry::new();
    let bib_key = BibliographyKey::new("index", "bib-0");
    let mut bibliography = Bibliography::new(
        ListMode::Bulleted,
        Div {
            attr: empty_attr(),
            content: vec![],
        },
    );
    bibliography.add_citation_node("doe2020", CitationEntry::new("bib-0-doe2020"));
    registry.record_bibliography(bib_key.clone(), bibliography);
    registry.record_citation(
        bib_key,
        FormattedEntry {
            key: "doe2020".to_string(),
            label: vec![str_inline("[doe2020]")],
            body: vec![
                str_inline("Review on \\textit "),
                str_inline("E. coli "),
                str_inline("fermentation. See \\url "),
                str_inline("http://example.org"),
            ],
        },
    );

    let mut docs = vec![Document::new(
        "index",
        vec![Block::BibliographyPlaceholder(BibliographyPlaceholder {
            docname: "index".to_string(),
            id: "bib-0".to_string(),
        })],
    )];
    let mut ctx = BuildContext::new(registry, EntryStore::new());
    let failures = standard_pipeline().execute_build(&mut docs, &mut ctx);
    assert!(failures.is_empty());

    // dig out the rendered entry paragraph
    let Block::Div(wrapper) = &docs[0].blocks[0] else {
        panic!("expected wrapper div");
    };
    let Block::BulletList(list) = &wrapper.content[0] else {
        panic!("expected bullet list");
    };
    let Block::CitationEntry(entry) = &list.content[0][0] else {
        panic!("expected citation entry");
    };
    let paragraph = paragraph_of(entry);

    assert_eq!(paragraph.content[0], str_inline("Review on "));
    assert!(matches!(&paragraph.content[1], Inline::Emph(_)));
    assert_eq!(paragraph.content[2], str_inline("fermentation. See "));
    assert!(matches!(&paragraph.content[3], Inline::Link(link)
        if link.target.0 == "http://example.org"));

    // the standalone repair passes ran again after rendering; a second
    // full execution must not change the tree either
    let after_first = docs.clone();
    let more_failures = standard_pipeline().execute_build(&mut docs, &mut ctx);
    assert!(more_failures.is_empty());
    assert_eq!(docs, after_first);
}
