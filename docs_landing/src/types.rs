//! Data types for the landing page content.
//!
//! Records are made of `&'static str` and `&'static [..]` so the catalog and
//! quick-link tables can live in `static` items for the whole process.
//!
//! # Example
//!
//! ```rust
//! use docs_landing::types::{ApplicationRecord, Status};
//!
//! const PORTAL: ApplicationRecord = ApplicationRecord {
//!     title: "Customer Portal",
//!     description: "Self-service portal for customer account management",
//!     link: "#",
//!     status: Status::ComingSoon,
//!     tech: &["React", "TypeScript"],
//!     features: &[],
//! };
//!
//! assert!(!PORTAL.status.is_active());
//! ```

use serde::Serialize;

/// Link target meaning "destination not yet routed".
///
/// Only ever paired with a disabled control, so it never navigates.
pub const PLACEHOLDER_LINK: &str = "#";

/// Lifecycle state of an application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    /// Generally available; the card links to its documentation.
    Production,
    /// Not yet available; the card's action is disabled.
    #[serde(rename = "Coming Soon")]
    ComingSoon,
}

impl Status {
    /// Whether the card for this status gets an enabled action.
    pub fn is_active(self) -> bool {
        match self {
            Status::Production => true,
            Status::ComingSoon => false,
        }
    }

    /// Badge text shown on the card.
    pub fn label(self) -> &'static str {
        match self {
            Status::Production => "Production",
            Status::ComingSoon => "Coming Soon",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the application catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ApplicationRecord {
    /// Display name, unique within the catalog
    pub title: &'static str,
    /// One-sentence summary
    pub description: &'static str,
    /// Documentation path, or [`PLACEHOLDER_LINK`]
    pub link: &'static str,
    /// Lifecycle state
    pub status: Status,
    /// Technology tags, in display order
    pub tech: &'static [&'static str],
    /// Feature bullets, in display order
    pub features: &'static [&'static str],
}

impl ApplicationRecord {
    /// True when `link` is the placeholder sentinel.
    pub fn has_placeholder_link(&self) -> bool {
        self.link == PLACEHOLDER_LINK
    }
}

/// A single entry in a quick-link list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuickLink {
    pub label: &'static str,
    pub to: &'static str,
}

/// A titled column of quick links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuickLinkGroup {
    pub heading: &'static str,
    pub links: &'static [QuickLink],
}
