//! HTML page template handling.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// An HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Template {
    /// Create a template from its text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Load a template from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(fs::read_to_string(path)?))
    }

    /// Fill in the placeholders and rewrite root-relative URLs for the
    /// deployment base path.
    ///
    /// `base_path` is the root URL path the site is served under, `"/"` for
    /// local serving or e.g. `"/repo-name/"` for project pages hosting; it
    /// is expected to carry a trailing slash.
    pub fn apply(&self, title: &str, content: &str, base_path: &str) -> String {
        self.text
            .replace("{{ Title }}", title)
            .replace("{{ Content }}", content)
            .replace("href=\"/", &format!("href=\"{base_path}"))
            .replace("src=\"/", &format!("src=\"{base_path}"))
    }
}
