//! Link entity representing a shortcut-to-URL mapping.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A go link: a shortcut and the destination it redirects to.
///
/// This is also the on-disk record format: the data file is a JSON array of
/// `{"shortcut": ..., "url": ...}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub shortcut: String,
    pub url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(shortcut: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            shortcut: shortcut.into(),
            url: url.into(),
        }
    }
}

/// Input data for creating or replacing a link.
///
/// Fields are expected to be trimmed before validation; a field that is
/// empty after trimming fails validation.
#[derive(Debug, Clone, Validate)]
pub struct NewLink {
    #[validate(length(min = 1, message = "Shortcut is required"))]
    pub shortcut: String,

    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}

impl NewLink {
    /// Builds a new link from raw user input, trimming surrounding whitespace.
    pub fn from_input(shortcut: &str, url: &str) -> Self {
        Self {
            shortcut: shortcut.trim().to_string(),
            url: url.trim().to_string(),
        }
    }
}
