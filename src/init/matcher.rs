//! Builder-to-image matching

use super::normalize::strip_tags;
use crate::builders::InitBuilder;
use crate::diagnostics::{DiagnosticEvent, DiagnosticSink};
use std::collections::BTreeSet;

/// An image resolved to exactly one builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderImagePair<B> {
    pub image_name: String,
    pub builder: B,
}

/// Outcome of matching builders against images
#[derive(Debug, Clone)]
pub struct MatchResult<B> {
    /// Resolved pairs, in image order
    pub pairs: Vec<BuilderImagePair<B>>,
    /// Builders no image claimed, in their original order
    pub unmatched_builders: Vec<B>,
    /// Base names with zero or several candidate builders, sorted and unique
    pub unresolved_images: Vec<String>,
}

/// Pairs each image with the single builder configured to produce it
///
/// Images are reduced to base names first (see [`strip_tags`]). A builder
/// leaves the pool as soon as it is paired. An image with no candidate, or
/// with more than one, is reported as unresolved; no builder is guessed.
pub fn match_builders_to_images<B, S>(
    builders: Vec<B>,
    images: &[S],
    sink: &dyn DiagnosticSink,
) -> MatchResult<B>
where
    B: InitBuilder,
    S: AsRef<str>,
{
    let images = strip_tags(images, sink);

    let mut pool = builders;
    let mut pairs = Vec::new();
    let mut unresolved = BTreeSet::new();

    for image in images {
        match find_exactly_one_matching_builder(&pool, &image) {
            Some(idx) => {
                let builder = pool.remove(idx);
                sink.on_event(&DiagnosticEvent::ImageMatched {
                    image: image.clone(),
                    builder: builder.describe(),
                });
                pairs.push(BuilderImagePair {
                    image_name: image,
                    builder,
                });
            }
            None => {
                if !unresolved.contains(&image) {
                    sink.on_event(&DiagnosticEvent::ImageUnresolved {
                        image: image.clone(),
                    });
                    unresolved.insert(image);
                }
            }
        }
    }

    MatchResult {
        pairs,
        unmatched_builders: pool,
        unresolved_images: unresolved.into_iter().collect(),
    }
}

/// Index of the only builder configured for `image`
///
/// Returns `None` when no builder matches, and stops at the second match.
pub(crate) fn find_exactly_one_matching_builder<B: InitBuilder>(
    builders: &[B],
    image: &str,
) -> Option<usize> {
    let mut matching = None;

    for (idx, builder) in builders.iter().enumerate() {
        if builder.configured_image() != Some(image) {
            continue;
        }
        if matching.is_some() {
            return None;
        }
        matching = Some(idx);
    }

    matching
}
