/*
 * document.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::Blocks;
use serde::{Deserialize, Serialize};

/*
 * One rendered output unit. A build pass owns a sequence of these and
 * processes them in order.
 */

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document name, unique within a build (e.g. "index", "chapters/intro").
    pub name: String,
    pub blocks: Blocks,
}

impl Document {
    pub fn new(name: impl Into<String>, blocks: Blocks) -> Self {
        Document {
            name: name.into(),
            blocks,
        }
    }
}
