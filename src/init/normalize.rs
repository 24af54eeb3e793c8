//! Image reference normalization

use crate::diagnostics::{DiagnosticEvent, DiagnosticSink};
use crate::reference::ImageReference;

/// Reduces raw image references to their base names
///
/// Unparseable references (templated names, uppercase paths) and references
/// pinned by digest are skipped with a warning. Order and duplicates are
/// preserved.
pub fn strip_tags<S: AsRef<str>>(tagged_images: &[S], sink: &dyn DiagnosticSink) -> Vec<String> {
    let mut images = Vec::with_capacity(tagged_images.len());

    for image in tagged_images {
        let image = image.as_ref();
        let parsed = match ImageReference::parse(image) {
            Ok(parsed) => parsed,
            Err(e) => {
                sink.on_event(&DiagnosticEvent::UnparseableImage {
                    image: image.to_string(),
                    error: e.to_string(),
                });
                continue;
            }
        };

        if parsed.digest.is_some() {
            sink.on_event(&DiagnosticEvent::DigestIgnored {
                image: image.to_string(),
            });
            continue;
        }

        images.push(parsed.base_name);
    }

    images
}
