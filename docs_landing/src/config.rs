//! Site configuration for the landing page.
//!
//! Loads an optional TOML file. Every key may be omitted:
//!
//! ```toml
//! title = "SunCulture Docs"
//! tagline = "Everything our platforms do, written down"
//! page_title = "Welcome"
//! get_started_link = "/docs/intro"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Page-level metadata supplied to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name shown in the hero banner and the document title
    pub title: String,
    /// Subtitle under the hero heading
    pub tagline: String,
    /// First part of the `<title>` element
    pub page_title: String,
    /// `<meta name="description">` content
    pub page_description: String,
    /// Target of the hero call-to-action
    pub get_started_link: String,
    /// Label of the hero call-to-action
    pub get_started_label: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "SunCulture Documentation".into(),
            tagline: "Technical documentation for SunCulture applications and services".into(),
            page_title: "Welcome".into(),
            page_description: "Technical documentation for SunCulture applications and services"
                .into(),
            get_started_link: "/docs/intro".into(),
            get_started_label: "Get Started with SunCulture Documentation".into(),
        }
    }
}

impl SiteConfig {
    /// Load config from `path`.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// read or parsed is an error, as is a blank required field.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no site config, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse config from a TOML string without validating it.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reject blank values for the fields the page cannot do without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("title", &self.title),
            ("page_title", &self.page_title),
            ("get_started_link", &self.get_started_link),
            ("get_started_label", &self.get_started_label),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(name));
            }
        }
        Ok(())
    }

    /// Contents of the `<title>` element.
    pub fn document_title(&self) -> String {
        format!("{} | {}", self.page_title, self.title)
    }
}
