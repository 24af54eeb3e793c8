//! Image-to-builder resolution pipeline
//!
//! Three stages run in order:
//!
//! 1. [`strip_tags`] reduces raw references to base names
//! 2. [`match_builders_to_images`] pairs each name with its unique builder
//! 3. [`assemble_artifacts`] turns pairs into [`Artifact`] records
//!
//! [`InitPipeline`] chains them and routes diagnostics to one sink.

pub mod assemble;
pub mod matcher;
pub mod normalize;

pub use assemble::{assemble_artifacts, workspace_dir};
pub use matcher::{match_builders_to_images, BuilderImagePair, MatchResult};
pub use normalize::strip_tags;

use crate::artifact::Artifact;
use crate::builders::InitBuilder;
use crate::diagnostics::{DiagnosticSink, LoggingSink};
use crate::manifests;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Everything the surrounding init flow needs after resolution
#[derive(Debug, Clone)]
pub struct InitOutcome<B> {
    /// One artifact per resolved image, in image order
    pub artifacts: Vec<Artifact>,
    /// Builders left for the user to assign or discard
    pub unmatched_builders: Vec<B>,
    /// Images without a unique builder, sorted
    pub unresolved_images: Vec<String>,
}

impl<B> InitOutcome<B> {
    /// True when every image found a builder and every builder was used
    pub fn is_fully_resolved(&self) -> bool {
        self.unmatched_builders.is_empty() && self.unresolved_images.is_empty()
    }
}

/// Runs normalization, matching and assembly against one diagnostic sink
pub struct InitPipeline {
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for InitPipeline {
    fn default() -> Self {
        Self::new(Arc::new(LoggingSink))
    }
}

impl InitPipeline {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    pub fn run<B, S>(&self, builders: Vec<B>, images: &[S]) -> InitOutcome<B>
    where
        B: InitBuilder,
        S: AsRef<str>,
    {
        info!(
            builders = builders.len(),
            images = images.len(),
            "Matching builders to images"
        );

        let matched = match_builders_to_images(builders, images, self.sink.as_ref());
        let artifacts = assemble_artifacts(&matched.pairs, self.sink.as_ref());

        info!(
            artifacts = artifacts.len(),
            unmatched_builders = matched.unmatched_builders.len(),
            unresolved_images = matched.unresolved_images.len(),
            "Matching complete"
        );

        InitOutcome {
            artifacts,
            unmatched_builders: matched.unmatched_builders,
            unresolved_images: matched.unresolved_images,
        }
    }

    /// Collects image references from manifest files, then runs the pipeline
    pub fn run_with_manifests<B, P>(
        &self,
        builders: Vec<B>,
        manifest_paths: &[P],
    ) -> Result<InitOutcome<B>>
    where
        B: InitBuilder,
        P: AsRef<Path>,
    {
        let images = manifests::images_from_files(manifest_paths)
            .context("Failed to collect images from manifests")?;

        Ok(self.run(builders, &images))
    }
}
