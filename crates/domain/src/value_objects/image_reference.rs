//! Image reference value object.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Locator for a card's image.
///
/// The reference is stored exactly as supplied at creation time and never
/// changes afterwards. Re-encoding to a [`Url`] happens on demand via
/// [`ImageReference::as_url`]; a malformed reference is accepted at
/// creation and only surfaces a parse error to consumers that need the
/// parsed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageReference(String);

impl ImageReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Returns the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Re-encode the reference as a URL.
    pub fn as_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.0)
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ImageReference {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ImageReference {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
