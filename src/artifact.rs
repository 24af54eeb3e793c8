//! Build artifact records
//!
//! An [`Artifact`] describes how to build one image: the image name, an
//! optional workspace directory and the builder-specific section filled in by
//! the matched builder. Field names follow the YAML layout config writers
//! expect (`image`, `context`, `docker`, `jib`, `buildpacks`).

use serde::{Deserialize, Serialize};

/// Workspace value meaning "the project root"
pub const ROOT_WORKSPACE: &str = ".";

/// Build record for a single image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Image base name, without tag or digest
    #[serde(rename = "image")]
    pub image_name: String,
    /// Build directory relative to the project root; unset means the root
    #[serde(rename = "context", default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    /// Builder-specific section
    #[serde(flatten)]
    pub artifact_type: Option<ArtifactType>,
}

impl Artifact {
    pub fn new(image_name: impl Into<String>) -> Self {
        Self {
            image_name: image_name.into(),
            workspace: None,
            artifact_type: None,
        }
    }

    /// Workspace directory, falling back to the project root
    pub fn workspace_or_root(&self) -> &str {
        self.workspace.as_deref().unwrap_or(ROOT_WORKSPACE)
    }
}

/// Builder-specific part of an artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactType {
    Docker(DockerArtifact),
    Jib(JibArtifact),
    Buildpacks(BuildpackArtifact),
}

/// Image built from a Dockerfile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerArtifact {
    /// Dockerfile name relative to the workspace
    #[serde(rename = "dockerfile")]
    pub dockerfile_path: String,
}

/// Build tool hosting the Jib plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JibPluginType {
    Maven,
    Gradle,
}

/// Image built by the Jib Maven or Gradle plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JibArtifact {
    /// Module (Maven) or sub-project (Gradle) to build; unset builds the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(rename = "type")]
    pub plugin_type: JibPluginType,
}

/// Image built with Cloud Native Buildpacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildpackArtifact {
    /// Builder image
    pub builder: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_artifact_defaults_to_root() {
        let artifact = Artifact::new("app");
        assert_eq!(artifact.image_name, "app");
        assert_eq!(artifact.workspace, None);
        assert_eq!(artifact.workspace_or_root(), ".");
        assert!(artifact.artifact_type.is_none());
    }

    #[test]
    fn test_serialize_docker_artifact() {
        let artifact = Artifact {
            image_name: "app".to_string(),
            workspace: Some("svc".to_string()),
            artifact_type: Some(ArtifactType::Docker(DockerArtifact {
                dockerfile_path: "Dockerfile".to_string(),
            })),
        };

        let value = serde_json::to_value(&artifact).unwrap();
        assert_eq!(
            value,
            json!({
                "image": "app",
                "context": "svc",
                "docker": { "dockerfile": "Dockerfile" }
            })
        );
    }

    #[test]
    fn test_serialize_omits_unset_fields() {
        let value = serde_json::to_value(Artifact::new("app")).unwrap();
        assert_eq!(value, json!({ "image": "app" }));
    }

    #[test]
    fn test_serialize_jib_artifact() {
        let mut artifact = Artifact::new("gcr.io/p/api");
        artifact.artifact_type = Some(ArtifactType::Jib(JibArtifact {
            project: Some("api".to_string()),
            plugin_type: JibPluginType::Gradle,
        }));

        let value = serde_json::to_value(&artifact).unwrap();
        assert_eq!(value["jib"], json!({ "project": "api", "type": "gradle" }));
    }

    #[test]
    fn test_yaml_layout() {
        let mut artifact = Artifact::new("web");
        artifact.artifact_type = Some(ArtifactType::Buildpacks(BuildpackArtifact {
            builder: "gcr.io/buildpacks/builder:v1".to_string(),
        }));

        let yaml = serde_yaml::to_string(&artifact).unwrap();
        assert!(yaml.contains("image: web"));
        assert!(yaml.contains("buildpacks:"));
        assert!(yaml.contains("gcr.io/buildpacks/builder:v1"));
        assert!(!yaml.contains("context"));
    }
}
