//! Container image reference parsing
//!
//! Parses references of the form `[domain/]path[:tag][@digest]` following the
//! distribution reference grammar. No normalization is applied: `nginx` stays
//! `nginx` rather than becoming `docker.io/library/nginx`.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Maximum length of the name part (domain and path) of a reference
pub const NAME_TOTAL_LENGTH_MAX: usize = 255;

const NAME_COMPONENT: &str = r"[a-z0-9]+(?:(?:[._]|__|[-]*)[a-z0-9]+)*";
const DOMAIN_COMPONENT: &str = r"(?:[a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9])";
const TAG: &str = r"[A-Za-z0-9_][A-Za-z0-9_.-]{0,127}";
const DIGEST: &str = r"[A-Za-z][A-Za-z0-9]*(?:[-_+.][A-Za-z][A-Za-z0-9]*)*:[0-9a-fA-F]{32,}";

/// Errors produced while parsing an image reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("repository name must have at least one component")]
    Empty,

    #[error("invalid reference format")]
    InvalidFormat,

    #[error("invalid reference format: repository name must be lowercase")]
    ContainsUppercase,

    #[error("repository name must not be more than {NAME_TOTAL_LENGTH_MAX} characters")]
    NameTooLong,

    #[error("invalid digest {digest}: {reason}")]
    InvalidDigest { digest: String, reason: String },
}

/// A parsed image reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    /// Domain and path without tag or digest (e.g. `gcr.io/project/app`)
    pub base_name: String,
    /// Registry host, present only when the first component looks like one
    pub domain: Option<String>,
    /// Repository path below the domain (e.g. `project/app`)
    pub path: String,
    /// Last path component (e.g. `app`)
    pub repo: String,
    pub tag: Option<String>,
    pub digest: Option<String>,
    /// True when a tag or a digest pins the reference
    pub fully_qualified: bool,
}

fn reference_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // The domain alternative demands a dot, a port or `localhost` so that
        // `org/app` keeps `org` in the path.
        let domain = format!(
            r"(?:localhost(?::[0-9]+)?|{dc}(?:\.{dc})+(?::[0-9]+)?|{dc}:[0-9]+)",
            dc = DOMAIN_COMPONENT
        );
        let pattern = format!(
            concat!(
                r"^(?P<name>(?:(?P<domain>{domain})/)?(?P<path>{comp}(?:/{comp})*))",
                r"(?::(?P<tag>{tag}))?(?:@(?P<digest>{digest}))?$",
            ),
            domain = domain,
            comp = NAME_COMPONENT,
            tag = TAG,
            digest = DIGEST,
        );
        Regex::new(&pattern).expect("valid regex")
    })
}

impl ImageReference {
    /// Parses a raw image reference
    ///
    /// Templated names such as `{{.IMAGE}}` and names with uppercase path
    /// components are rejected.
    pub fn parse(image: &str) -> Result<Self, ReferenceError> {
        if image.is_empty() {
            return Err(ReferenceError::Empty);
        }

        let re = reference_regex();
        let caps = match re.captures(image) {
            Some(caps) => caps,
            None => {
                if re.is_match(&image.to_lowercase()) {
                    return Err(ReferenceError::ContainsUppercase);
                }
                return Err(ReferenceError::InvalidFormat);
            }
        };

        let base_name = caps["name"].to_string();
        if base_name.len() > NAME_TOTAL_LENGTH_MAX {
            return Err(ReferenceError::NameTooLong);
        }

        let digest = match caps.name("digest") {
            Some(m) => {
                validate_digest(m.as_str())?;
                Some(m.as_str().to_string())
            }
            None => None,
        };

        let path = caps["path"].to_string();
        let repo = path.rsplit('/').next().unwrap_or(&path).to_string();
        let tag = caps.name("tag").map(|m| m.as_str().to_string());
        let fully_qualified = tag.is_some() || digest.is_some();

        Ok(Self {
            base_name,
            domain: caps.name("domain").map(|m| m.as_str().to_string()),
            path,
            repo,
            tag,
            digest,
            fully_qualified,
        })
    }
}

fn validate_digest(digest: &str) -> Result<(), ReferenceError> {
    let invalid = |reason: &str| ReferenceError::InvalidDigest {
        digest: digest.to_string(),
        reason: reason.to_string(),
    };

    let (algorithm, encoded) = digest
        .split_once(':')
        .ok_or_else(|| invalid("missing algorithm separator"))?;

    let expected_len = match algorithm {
        "sha256" => 64,
        "sha384" => 96,
        "sha512" => 128,
        _ => return Err(invalid("unsupported digest algorithm")),
    };

    if encoded.len() != expected_len {
        return Err(invalid("invalid checksum digest length"));
    }
    if !encoded
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    {
        return Err(invalid("invalid checksum digest format"));
    }

    Ok(())
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_name)?;
        if let Some(tag) = &self.tag {
            write!(f, ":{}", tag)?;
        }
        if let Some(digest) = &self.digest {
            write!(f, "@{}", digest)?;
        }
        Ok(())
    }
}
