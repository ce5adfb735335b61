/*
 * registry.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Registry of citations and bibliography placeholders for one build pass.
 */

//! Registry of citations and bibliography placeholders.
//!
//! The document-construction phase records three things while walking
//! authored markup: every bibliography placeholder it emits, every citation
//! belonging to one of those placeholders, and every in-text citation
//! marker. The registry is append-only during construction and queried by
//! the bibliography transform during post-processing. It lives for exactly
//! one build pass; independent builds start from a fresh registry.

use crate::entry::FormattedEntry;
use citefold_doctree::{CitationEntry, Div, ListNumberStyle};
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifies one bibliography placeholder: the join key between a
/// placeholder and the citations that belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BibliographyKey {
    pub docname: String,
    pub id: String,
}

impl BibliographyKey {
    pub fn new(docname: impl Into<String>, id: impl Into<String>) -> Self {
        BibliographyKey {
            docname: docname.into(),
            id: id.into(),
        }
    }
}

/// How a bibliography renders its entries.
///
/// Mode-specific numbering fields only exist for the enumerated case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListMode {
    /// An ordered list. `start` of `Some(n)` with `n >= 1` restarts the
    /// shared enumeration counter at `n`; `None` continues from wherever the
    /// counter left off. Values below 1 fall back to continuing, with a
    /// warning.
    Enumerated {
        style: ListNumberStyle,
        start: Option<i32>,
    },
    /// An unordered list.
    Bulleted,
    /// No list container: labeled entries as a flat sibling sequence, each
    /// independently addressable, with same-document back-references.
    CitationStyle,
}

/// One recorded bibliography placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bibliography {
    pub mode: ListMode,
    /// Pre-built container node per cited key, created when the entry was
    /// first parsed so in-text references can already target it. Consumed
    /// exactly once at render time.
    pub citation_nodes: LinkedHashMap<String, CitationEntry>,
    /// Wrapper template cloned around the rendered list (title, chrome).
    pub header: Div,
}

impl Bibliography {
    pub fn new(mode: ListMode, header: Div) -> Self {
        Bibliography {
            mode,
            citation_nodes: LinkedHashMap::new(),
            header,
        }
    }

    /// Attach the pre-built entry node for a key.
    pub fn add_citation_node(&mut self, key: impl Into<String>, node: CitationEntry) {
        self.citation_nodes.insert(key.into(), node);
    }
}

/// One citation occurrence belonging to a specific bibliography.
///
/// The same key may be recorded against several bibliographies; each
/// occurrence renders independently, in its own numbering context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub bibliography_key: BibliographyKey,
    pub key: String,
    pub entry: FormattedEntry,
}

/// One in-text citation marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationRef {
    pub docname: String,
    /// Document-scoped id of the marker node; back-references target it.
    pub ref_id: String,
    pub keys: Vec<String>,
}

/// Append-only record of everything citation-related in one build pass.
#[derive(Debug, Default)]
pub struct CitationRegistry {
    bibliographies: HashMap<BibliographyKey, Bibliography>,
    citations: Vec<Citation>,
    citation_refs: Vec<CitationRef>,
}

impl CitationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a bibliography placeholder.
    pub fn record_bibliography(&mut self, key: BibliographyKey, bibliography: Bibliography) {
        self.bibliographies.insert(key, bibliography);
    }

    /// Record a citation occurrence, in appearance order.
    pub fn record_citation(&mut self, bibliography_key: BibliographyKey, entry: FormattedEntry) {
        self.citations.push(Citation {
            bibliography_key,
            key: entry.key.clone(),
            entry,
        });
    }

    /// Record an in-text citation marker.
    pub fn record_citation_ref(
        &mut self,
        docname: impl Into<String>,
        ref_id: impl Into<String>,
        keys: Vec<String>,
    ) {
        self.citation_refs.push(CitationRef {
            docname: docname.into(),
            ref_id: ref_id.into(),
            keys,
        });
    }

    /// Look up a recorded bibliography.
    pub fn bibliography(&self, key: &BibliographyKey) -> Option<&Bibliography> {
        self.bibliographies.get(key)
    }

    pub fn bibliography_mut(&mut self, key: &BibliographyKey) -> Option<&mut Bibliography> {
        self.bibliographies.get_mut(key)
    }

    /// The citations belonging to one bibliography, in recorded order.
    pub fn citations_for<'a>(
        &'a self,
        key: &'a BibliographyKey,
    ) -> impl Iterator<Item = &'a Citation> + 'a {
        self.citations
            .iter()
            .filter(move |citation| citation.bibliography_key == *key)
    }

    /// Ids of every marker in `docname` whose key set contains `key`.
    ///
    /// Markers in other documents never qualify: back-reference targets must
    /// resolve within a single rendered output unit.
    pub fn refs_citing(&self, docname: &str, key: &str) -> Vec<String> {
        self.citation_refs
            .iter()
            .filter(|citation_ref| {
                citation_ref.docname == docname && citation_ref.keys.iter().any(|k| k == key)
            })
            .map(|citation_ref| citation_ref.ref_id.clone())
            .collect()
    }

    pub fn citation_count(&self) -> usize {
        self.citations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citefold_doctree::{empty_attr, str_inline};

    fn entry(key: &str) -> FormattedEntry {
        FormattedEntry {
            key: key.to_string(),
            label: vec![str_inline(format!("[{}]", key))],
            body: vec![str_inline(format!("Body of {}", key))],
        }
    }

    fn header() -> Div {
        Div {
            attr: empty_attr(),
            content: vec![],
        }
    }

    #[test]
    fn test_citations_for_preserves_recorded_order() {
        let mut registry = CitationRegistry::new();
        let key = BibliographyKey::new("index", "bib-0");
        registry.record_bibliography(key.clone(), Bibliography::new(ListMode::Bulleted, header()));

        // record in non-lexical order
        registry.record_citation(key.clone(), entry("zeta1999"));
        registry.record_citation(key.clone(), entry("alpha2024"));

        let keys: Vec<&str> = registry.citations_for(&key).map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["zeta1999", "alpha2024"]);
    }

    #[test]
    fn test_citations_for_filters_by_bibliography() {
        let mut registry = CitationRegistry::new();
        let first = BibliographyKey::new("index", "bib-0");
        let second = BibliographyKey::new("other", "bib-0");

        registry.record_citation(first.clone(), entry("doe2020"));
        registry.record_citation(second.clone(), entry("doe2020"));

        assert_eq!(registry.citations_for(&first).count(), 1);
        assert_eq!(registry.citations_for(&second).count(), 1);
        assert_eq!(registry.citation_count(), 2);
    }

    #[test]
    fn test_refs_citing_is_scoped_to_document() {
        let mut registry = CitationRegistry::new();
        registry.record_citation_ref("index", "ref-1", vec!["doe2020".to_string()]);
        registry.record_citation_ref("other", "ref-2", vec!["doe2020".to_string()]);
        registry.record_citation_ref(
            "index",
            "ref-3",
            vec!["smith2021".to_string(), "doe2020".to_string()],
        );

        assert_eq!(registry.refs_citing("index", "doe2020"), vec!["ref-1", "ref-3"]);
        assert_eq!(registry.refs_citing("other", "doe2020"), vec!["ref-2"]);
        assert!(registry.refs_citing("index", "unknown").is_empty());
    }
}
