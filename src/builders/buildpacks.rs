//! Cloud Native Buildpacks builder

use super::InitBuilder;
use crate::artifact::{Artifact, ArtifactType, BuildpackArtifact};
use crate::config::{InitConfig, DEFAULT_BUILDPACKS_BUILDER};
use std::path::{Path, PathBuf};

/// Builds an image with buildpacks from a detected project manifest
/// (package.json, go.mod, requirements.txt, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildpacksBuilder {
    path: PathBuf,
    image: Option<String>,
    builder: String,
}

impl BuildpacksBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            image: None,
            builder: DEFAULT_BUILDPACKS_BUILDER.to_string(),
        }
    }

    /// Uses the builder image from configuration
    pub fn from_config(path: impl Into<PathBuf>, config: &InitConfig) -> Self {
        Self::new(path).with_builder(config.buildpacks_builder.clone())
    }

    pub fn with_builder(mut self, builder: impl Into<String>) -> Self {
        self.builder = builder.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn builder_image(&self) -> &str {
        &self.builder
    }
}

impl InitBuilder for BuildpacksBuilder {
    fn name(&self) -> &str {
        "Buildpacks"
    }

    fn configured_image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn update_artifact(&self, artifact: &mut Artifact) {
        artifact.artifact_type = Some(ArtifactType::Buildpacks(BuildpackArtifact {
            builder: self.builder.clone(),
        }));
    }
}
