//! Dockerfile builder

use super::InitBuilder;
use crate::artifact::{Artifact, ArtifactType, DockerArtifact};
use std::path::{Path, PathBuf};

const DEFAULT_DOCKERFILE: &str = "Dockerfile";

/// Builds an image from a Dockerfile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerBuilder {
    path: PathBuf,
    image: Option<String>,
}

impl DockerBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            image: None,
        }
    }

    /// Declare the image this Dockerfile produces
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    fn dockerfile_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_DOCKERFILE.to_string())
    }
}

impl InitBuilder for DockerBuilder {
    fn name(&self) -> &str {
        "Docker"
    }

    fn configured_image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn update_artifact(&self, artifact: &mut Artifact) {
        artifact.artifact_type = Some(ArtifactType::Docker(DockerArtifact {
            dockerfile_path: self.dockerfile_name(),
        }));
    }
}
