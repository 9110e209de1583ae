//! Error types for catalog validation and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// A violation of the catalog or quick-link invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog record #{index} has an empty title")]
    EmptyTitle { index: usize },

    #[error("catalog title `{title}` appears more than once")]
    DuplicateTitle { title: String },

    #[error("catalog record `{title}` has an empty description")]
    EmptyDescription { title: String },

    #[error("`{title}` is in production but has no documentation link")]
    UnroutedProduction { title: String },

    #[error("`{title}` has an empty entry in `{field}`")]
    EmptyEntry { title: String, field: &'static str },

    #[error("quick-link group #{index} has an empty heading")]
    EmptyHeading { index: usize },

    #[error("quick-link group `{heading}` has a link without label or target")]
    IncompleteQuickLink { heading: String },
}

/// Failure to load or accept a site configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("site config field `{0}` must not be empty")]
    EmptyField(&'static str),
}
