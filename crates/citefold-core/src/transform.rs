/*
 * transform.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document transform pipeline infrastructure.
 */

//! Document transform pipeline infrastructure.
//!
//! This module provides the core abstractions for post-processing
//! transforms:
//!
//! - [`DocTransform`] - The trait implemented by all transforms
//! - [`TransformPipeline`] - Priority-ordered collection of transforms
//!
//! # Architecture
//!
//! Transforms run once per document, ordered by their priority value (lower
//! runs first; insertion order breaks ties). Each transform can mutate the
//! document tree and read from and write to the build context (registry,
//! shared counter, warnings).
//!
//! # Example
//!
//! ```ignore
//! use citefold_core::{DocTransform, TransformPipeline};
//!
//! struct MyTransform;
//!
//! impl DocTransform for MyTransform {
//!     fn name(&self) -> &str { "my-transform" }
//!     fn priority(&self) -> u32 { 50 }
//!
//!     fn transform(&self, doc: &mut Document, ctx: &mut BuildContext) -> Result<()> {
//!         // Modify the tree...
//!         Ok(())
//!     }
//! }
//!
//! let mut pipeline = TransformPipeline::new();
//! pipeline.push(Box::new(MyTransform));
//! pipeline.execute(&mut doc, &mut ctx)?;
//! ```

use crate::Result;
use crate::context::BuildContext;
use crate::error::Error;
use citefold_doctree::Document;

/// Trait for document transforms.
///
/// Transforms modify one document's tree during the post-processing phase.
/// They can also interact with the build context to thread shared state
/// (the enumeration counter) or record warnings.
pub trait DocTransform {
    /// Human-readable name for this transform.
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &str;

    /// Execution priority; lower values run first.
    fn priority(&self) -> u32;

    /// Apply the transform to one document.
    ///
    /// # Errors
    ///
    /// Returns an error if a registry invariant is broken; the document is
    /// then abandoned but the rest of the build continues (see
    /// [`TransformPipeline::execute_build`]).
    fn transform(&self, doc: &mut Document, ctx: &mut BuildContext) -> Result<()>;
}

/// A pipeline of transforms, executed in priority order.
pub struct TransformPipeline {
    transforms: Vec<Box<dyn DocTransform>>,
}

impl TransformPipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a transform to the pipeline.
    pub fn push(&mut self, transform: Box<dyn DocTransform>) {
        self.transforms.push(transform);
    }

    /// Add multiple transforms to the pipeline.
    pub fn extend(&mut self, transforms: impl IntoIterator<Item = Box<dyn DocTransform>>) {
        self.transforms.extend(transforms);
    }

    /// Get the number of transforms in the pipeline.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Check if the pipeline is empty.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// List transform names in execution order.
    ///
    /// Useful for debugging and logging.
    pub fn transform_names(&self) -> Vec<&str> {
        self.execution_order()
            .into_iter()
            .map(|i| self.transforms[i].name())
            .collect()
    }

    fn execution_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.transforms.len()).collect();
        // stable: insertion order breaks priority ties
        order.sort_by_key(|&i| self.transforms[i].priority());
        order
    }

    /// Execute all transforms on one document, in priority order.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Execution stops on error.
    pub fn execute(&self, doc: &mut Document, ctx: &mut BuildContext) -> Result<()> {
        for i in self.execution_order() {
            let transform = &self.transforms[i];
            tracing::debug!(
                transform = transform.name(),
                document = %doc.name,
                "Running transform"
            );
            transform.transform(doc, ctx)?;
        }

        Ok(())
    }

    /// Execute the pipeline over every document of a build.
    ///
    /// A document that fails keeps its current (partially transformed) tree
    /// and is reported; the remaining documents still render. Returns the
    /// per-document failures.
    pub fn execute_build(
        &self,
        docs: &mut [Document],
        ctx: &mut BuildContext,
    ) -> Vec<(String, Error)> {
        let mut failures = Vec::new();
        for doc in docs.iter_mut() {
            if let Err(err) = self.execute(doc, ctx) {
                tracing::error!(
                    document = %doc.name,
                    "{}",
                    err.to_diagnostic().to_text()
                );
                failures.push((doc.name.clone(), err));
            }
        }
        failures
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// The standard post-processing pipeline: bibliography rendering followed by
/// the two text-repair passes.
pub fn standard_pipeline() -> TransformPipeline {
    let mut pipeline = TransformPipeline::new();
    pipeline.push(Box::new(crate::transforms::BibliographyTransform));
    pipeline.push(Box::new(crate::transforms::LinkRepairTransform));
    pipeline.push(Box::new(crate::transforms::EmphasisRepairTransform));
    pipeline
}
