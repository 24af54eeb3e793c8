//! Image references from Kubernetes-style manifests
//!
//! Every string under an `image` key is collected, at any depth, so pod
//! specs, init containers, CronJobs and custom resources are all covered.

use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse manifest YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Image references in a (possibly multi-document) YAML stream, in order
pub fn images_from_yaml(content: &str) -> Result<Vec<String>, ManifestError> {
    let mut images = Vec::new();

    for document in serde_yaml::Deserializer::from_str(content) {
        let value = Value::deserialize(document)?;
        collect_images(&value, &mut images);
    }

    Ok(images)
}

/// Image references across several manifest files, in file order
pub fn images_from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>, ManifestError> {
    let mut images = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let found = images_from_yaml(&content).map_err(|e| match e {
            ManifestError::Yaml(source) => ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        debug!(manifest = %path.display(), images = found.len(), "Collected images");
        images.extend(found);
    }

    Ok(images)
}

fn collect_images(value: &Value, images: &mut Vec<String>) {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                if key.as_str() == Some("image") {
                    if let Some(image) = child.as_str() {
                        images.push(image.to_string());
                        continue;
                    }
                }
                collect_images(child, images);
            }
        }
        Value::Sequence(items) => {
            for item in items {
                collect_images(item, images);
            }
        }
        Value::Tagged(tagged) => collect_images(&tagged.value, images),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DEPLOYMENT: &str = r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: app
spec:
  template:
    spec:
      initContainers:
      - name: migrate
        image: migrate:v3
      containers:
      - name: app
        image: gcr.io/project/app:v1
      - name: sidecar
        image: envoy
"#;

    #[test]
    fn test_images_in_document_order() {
        let images = images_from_yaml(DEPLOYMENT).unwrap();
        assert_eq!(images, vec!["migrate:v3", "gcr.io/project/app:v1", "envoy"]);
    }

    #[test]
    fn test_multi_document_stream() {
        let content = r#"
apiVersion: v1
kind: Pod
spec:
  containers:
  - image: web
---
# comment-only document
---
apiVersion: batch/v1
kind: CronJob
spec:
  jobTemplate:
    spec:
      template:
        spec:
          containers:
          - image: worker:nightly
"#;
        let images = images_from_yaml(content).unwrap();
        assert_eq!(images, vec!["web", "worker:nightly"]);
    }

    #[test]
    fn test_non_string_image_is_walked() {
        let content = r#"
image:
  repository: nested
  spec:
    image: inner:1
"#;
        assert_eq!(images_from_yaml(content).unwrap(), vec!["inner:1"]);
    }

    #[test]
    fn test_invalid_yaml() {
        let result = images_from_yaml("containers: [unclosed");
        assert!(matches!(result, Err(ManifestError::Yaml(_))));
    }

    #[test]
    fn test_images_from_files() {
        let mut first = NamedTempFile::new().unwrap();
        first.write_all(DEPLOYMENT.as_bytes()).unwrap();
        let mut second = NamedTempFile::new().unwrap();
        second
            .write_all(b"spec:\n  containers:\n  - image: db:14\n")
            .unwrap();

        let images = images_from_files(&[first.path(), second.path()]).unwrap();
        assert_eq!(images.len(), 4);
        assert_eq!(images.last().map(String::as_str), Some("db:14"));
    }

    #[test]
    fn test_missing_file() {
        let result = images_from_files(&[Path::new("/nonexistent/deployment.yaml")]);
        match result {
            Err(ManifestError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/deployment.yaml"))
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_names_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"containers: [unclosed").unwrap();

        let err = images_from_files(&[file.path()]).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
