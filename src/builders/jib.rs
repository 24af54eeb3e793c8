//! Jib builder (Maven and Gradle plugins)

use super::InitBuilder;
use crate::artifact::{Artifact, ArtifactType, JibArtifact, JibPluginType};
use std::path::{Path, PathBuf};

/// Builds an image with the Jib plugin of a Maven or Gradle project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JibBuilder {
    plugin: JibPluginType,
    path: PathBuf,
    image: Option<String>,
    project: Option<String>,
}

impl JibBuilder {
    pub fn maven(path: impl Into<PathBuf>) -> Self {
        Self::new(JibPluginType::Maven, path)
    }

    pub fn gradle(path: impl Into<PathBuf>) -> Self {
        Self::new(JibPluginType::Gradle, path)
    }

    pub fn new(plugin: JibPluginType, path: impl Into<PathBuf>) -> Self {
        Self {
            plugin,
            path: path.into(),
            image: None,
            project: None,
        }
    }

    /// Image from the plugin's `to.image` setting
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Maven module or Gradle sub-project that owns the plugin
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn plugin(&self) -> JibPluginType {
        self.plugin
    }
}

impl InitBuilder for JibBuilder {
    fn name(&self) -> &str {
        match self.plugin {
            JibPluginType::Maven => "Jib Maven Plugin",
            JibPluginType::Gradle => "Jib Gradle Plugin",
        }
    }

    fn describe(&self) -> String {
        match &self.project {
            Some(project) => format!(
                "{} ({}, {})",
                self.name(),
                project,
                self.path.display()
            ),
            None => format!("{} ({})", self.name(), self.path.display()),
        }
    }

    fn configured_image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn update_artifact(&self, artifact: &mut Artifact) {
        artifact.artifact_type = Some(ArtifactType::Jib(JibArtifact {
            project: self.project.clone(),
            plugin_type: self.plugin,
        }));
    }
}
