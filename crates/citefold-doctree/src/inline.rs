/*
 * inline.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attr::Attr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    Str(Str),
    Emph(Emph),
    Strong(Strong),
    Code(Code),
    Space(Space),
    Link(Link),
    Span(Span),

    // citefold extensions
    // an in-text citation marker; transforms leave these untouched so the
    // host's cross-reference resolution can link them against entry ids
    Cite(Cite),
}

pub type Inlines = Vec<Inline>;

/// A link target: (url, title).
pub type Target = (String, String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Str {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emph {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strong {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code {
    pub attr: Attr,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub attr: Attr,
    pub content: Inlines,
    pub target: Target,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub attr: Attr,
    pub content: Inlines,
}

/// An in-text citation marker.
///
/// Carries the document-scoped marker id and the set of cited entry keys.
/// The visible content is whatever the author wrote (or the role produced);
/// rendering never rewrites it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cite {
    pub id: String,
    pub keys: Vec<String>,
    pub content: Inlines,
}

pub trait AsInline {
    fn as_inline(self) -> Inline;
}

macro_rules! impl_as_inline {
    ($($type:ident),*) => {
        $(
            impl AsInline for $type {
                fn as_inline(self) -> Inline {
                    Inline::$type(self)
                }
            }
        )*
    };
}

impl AsInline for Inline {
    fn as_inline(self) -> Inline {
        self
    }
}

impl_as_inline!(Str, Emph, Strong, Code, Space, Link, Span, Cite);

pub fn is_empty_target(target: &Target) -> bool {
    target.0.is_empty() && target.1.is_empty()
}

/// Make a plain text fragment.
pub fn str_inline(text: impl Into<String>) -> Inline {
    Inline::Str(Str { text: text.into() })
}
