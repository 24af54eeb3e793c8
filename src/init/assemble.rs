//! Artifact assembly from resolved pairs

use super::matcher::BuilderImagePair;
use crate::artifact::{Artifact, ROOT_WORKSPACE};
use crate::builders::InitBuilder;
use crate::diagnostics::{DiagnosticEvent, DiagnosticSink};
use std::path::{Component, Path, PathBuf};

/// Builds one artifact per pair, in pair order
///
/// The workspace is the directory holding the builder's configuration file;
/// it is only recorded when it differs from the project root.
pub fn assemble_artifacts<B: InitBuilder>(
    pairs: &[BuilderImagePair<B>],
    sink: &dyn DiagnosticSink,
) -> Vec<Artifact> {
    let mut artifacts = Vec::with_capacity(pairs.len());

    for pair in pairs {
        let mut artifact = Artifact::new(pair.image_name.clone());

        let workspace = workspace_dir(pair.builder.path());
        if workspace != ROOT_WORKSPACE {
            sink.on_event(&DiagnosticEvent::NonStandardWorkspace {
                image: pair.image_name.clone(),
                workspace: workspace.clone(),
            });
            artifact.workspace = Some(workspace);
        }

        pair.builder.update_artifact(&mut artifact);

        artifacts.push(artifact);
    }

    artifacts
}

/// Lexically cleaned parent directory of `path`; `.` for the project root
pub fn workspace_dir(path: &Path) -> String {
    let parent = path.parent().unwrap_or_else(|| Path::new(""));

    let mut cleaned: Vec<Component<'_>> = Vec::new();
    for component in parent.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.last() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(component),
            },
            other => cleaned.push(other),
        }
    }

    if cleaned.is_empty() {
        return ROOT_WORKSPACE.to_string();
    }

    cleaned
        .iter()
        .collect::<PathBuf>()
        .to_string_lossy()
        .into_owned()
}
