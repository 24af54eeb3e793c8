//! Builder definitions
//!
//! A builder is a detected build configuration (a Dockerfile, a Jib-enabled
//! pom.xml, a buildpacks-compatible manifest) able to produce one image.
//! Discovery happens elsewhere; this crate only reads what a builder reports
//! and lets it fill in its section of the [`Artifact`].

use crate::artifact::Artifact;
use std::path::Path;

/// Build configuration capable of producing one container image
pub trait InitBuilder: Send + Sync {
    /// Tool name (e.g., "Docker", "Jib Maven Plugin")
    fn name(&self) -> &str;

    /// Human-readable identification for prompts and logs
    fn describe(&self) -> String {
        format!("{} ({})", self.name(), self.path().display())
    }

    /// Image this builder is statically configured to produce, if declared
    fn configured_image(&self) -> Option<&str>;

    /// Location of the build configuration file
    fn path(&self) -> &Path;

    /// Populate builder-specific artifact fields
    fn update_artifact(&self, artifact: &mut Artifact);
}

impl<T: InitBuilder + ?Sized> InitBuilder for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn configured_image(&self) -> Option<&str> {
        (**self).configured_image()
    }

    fn path(&self) -> &Path {
        (**self).path()
    }

    fn update_artifact(&self, artifact: &mut Artifact) {
        (**self).update_artifact(artifact)
    }
}

impl<T: InitBuilder + ?Sized> InitBuilder for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn configured_image(&self) -> Option<&str> {
        (**self).configured_image()
    }

    fn path(&self) -> &Path {
        (**self).path()
    }

    fn update_artifact(&self, artifact: &mut Artifact) {
        (**self).update_artifact(artifact)
    }
}

pub mod buildpacks;
pub mod docker;
pub mod jib;

pub use buildpacks::BuildpacksBuilder;
pub use docker::DockerBuilder;
pub use jib::JibBuilder;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_builders_forward() {
        let builders: Vec<Box<dyn InitBuilder>> = vec![
            Box::new(DockerBuilder::new("svc/Dockerfile").with_image("app")),
            Box::new(BuildpacksBuilder::new("web/package.json")),
        ];

        assert_eq!(builders[0].configured_image(), Some("app"));
        assert_eq!(builders[0].path(), Path::new("svc/Dockerfile"));
        assert_eq!(builders[0].describe(), "Docker (svc/Dockerfile)");
        assert_eq!(builders[1].configured_image(), None);
        assert_eq!(builders[1].name(), "Buildpacks");
    }

    #[test]
    fn test_borrowed_builder_forwards() {
        let builder = DockerBuilder::new("Dockerfile").with_image("app");
        let borrowed: &dyn InitBuilder = &builder;

        let mut artifact = Artifact::new("app");
        InitBuilder::update_artifact(&borrowed, &mut artifact);
        assert!(artifact.artifact_type.is_some());
    }
}
