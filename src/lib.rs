//! buildmatch - pairs container images with the build configurations that produce them
//!
//! During project initialization two lists exist side by side: builders
//! detected in the source tree (Dockerfiles, Jib-enabled Maven/Gradle
//! projects, buildpacks-compatible manifests) and image names referenced by
//! deployment manifests. This library resolves each image to at most one
//! builder and turns the resolved pairs into build artifact records.
//!
//! # Example
//!
//! ```
//! use buildmatch::builders::DockerBuilder;
//! use buildmatch::diagnostics::NoOpSink;
//! use buildmatch::init::{assemble_artifacts, match_builders_to_images};
//!
//! let builders = vec![
//!     DockerBuilder::new("a/Dockerfile").with_image("app"),
//!     DockerBuilder::new("web/Dockerfile").with_image("web"),
//! ];
//! let result = match_builders_to_images(builders, &["app:v1", "web:latest", "db:v2"], &NoOpSink);
//!
//! assert_eq!(result.unresolved_images, vec!["db"]);
//! assert!(result.unmatched_builders.is_empty());
//!
//! let artifacts = assemble_artifacts(&result.pairs, &NoOpSink);
//! assert_eq!(artifacts[0].workspace.as_deref(), Some("a"));
//! ```
//!
//! # Project Structure
//!
//! - [`reference`]: image reference parsing
//! - [`builders`]: the [`InitBuilder`] trait and its Docker, Jib and Buildpacks variants
//! - [`init`]: normalization, matching and artifact assembly
//! - [`manifests`]: image references from Kubernetes-style YAML
//! - [`diagnostics`]: warning/info side channel
//! - [`artifact`]: artifact records handed to config writers

pub mod artifact;
pub mod builders;
pub mod config;
pub mod diagnostics;
pub mod init;
pub mod manifests;
pub mod reference;
pub mod util;

pub use artifact::{Artifact, ArtifactType};
pub use builders::InitBuilder;
pub use config::{ConfigError, InitConfig};
pub use diagnostics::{DiagnosticEvent, DiagnosticSink};
pub use init::{BuilderImagePair, InitOutcome, InitPipeline, MatchResult};
pub use manifests::ManifestError;
pub use reference::{ImageReference, ReferenceError};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
