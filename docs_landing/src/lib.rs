//! # docs-landing
//!
//! Leptos SSR renderer for the documentation landing page.
//!
//! The page has a hero banner, a grid of application cards built from a
//! fixed catalog, and a band of quick links. Everything is rendered on the
//! server into one static HTML document; no hydration or client runtime.
//!
//! ## Quick Start
//!
//! ```rust
//! use docs_landing::{catalog, render_default_page, SiteConfig};
//!
//! catalog::validate_catalog(catalog::CATALOG).expect("catalog");
//!
//! let html = render_default_page(&SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("AMT Backend"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Catalog and quick-link records
//! - [`catalog`] - The built-in tables and their validation
//! - [`card`] - Record to card mapping (status badge, feature preview, action)
//! - [`components`] - Leptos UI components
//! - [`config`] - Site configuration
//! - [`styles`] - CSS constants

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod card;
pub mod catalog;
#[allow(missing_docs)]
pub mod components;
pub mod config;
#[allow(missing_docs)]
pub mod error;
pub mod styles;
#[allow(missing_docs)]
pub mod types;

use card::card_models;
use components::LandingDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{ApplicationRecord, QuickLinkGroup};

pub use config::SiteConfig;
pub use error::{CatalogError, ConfigError};

/// Render the complete landing page.
///
/// Cards appear in the order of `records`. The records are assumed to have
/// passed [`catalog::validate_catalog`]; rendering itself cannot fail.
///
/// # Example
///
/// ```rust
/// use docs_landing::{render_landing_page, SiteConfig};
/// use docs_landing::types::{ApplicationRecord, Status};
///
/// let records = [ApplicationRecord {
///     title: "Sales Portal",
///     description: "Sales team management and lead tracking system",
///     link: "#",
///     status: Status::ComingSoon,
///     tech: &["React"],
///     features: &[],
/// }];
///
/// let html = render_landing_page(&SiteConfig::default(), &records, &[]);
/// assert!(html.contains("Sales Portal"));
/// ```
pub fn render_landing_page(
    site: &SiteConfig,
    records: &[ApplicationRecord],
    quick_links: &[QuickLinkGroup],
) -> String {
    tracing::debug!(
        cards = records.len(),
        link_groups = quick_links.len(),
        "rendering landing page"
    );

    let doc = view! {
        <LandingDocument
            site=site.clone()
            cards=card_models(records)
            quick_links=quick_links.to_vec()
        />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the landing page from the built-in catalog and quick links.
pub fn render_default_page(site: &SiteConfig) -> String {
    render_landing_page(site, catalog::CATALOG, catalog::QUICK_LINKS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    const AMT: ApplicationRecord = ApplicationRecord {
        title: "AMT Backend",
        description: "Account Management Tool",
        link: "/docs/amt/intro",
        status: Status::Production,
        tech: &["TypeScript", "Express"],
        features: &[
            "Customer accounts",
            "Payment processing",
            "Commission calculations",
            "Product catalog",
            "KYC verification",
        ],
    };

    const PLATFORM: ApplicationRecord = ApplicationRecord {
        title: "360 Platform",
        description: "Internal operations frontend",
        link: "#",
        status: Status::ComingSoon,
        tech: &[],
        features: &[],
    };

    fn render(records: &[ApplicationRecord]) -> String {
        render_landing_page(&SiteConfig::default(), records, &[])
    }

    #[test]
    fn renders_document_shell() {
        let site = SiteConfig {
            title: "Acme Docs".into(),
            tagline: "Manuals for everything".into(),
            ..SiteConfig::default()
        };
        let html = render_landing_page(&site, &[], &[]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Welcome | Acme Docs"));
        assert!(html.contains("Manuals for everything"));
        assert!(html.contains("href=\"/docs/intro\""));
    }

    #[test]
    fn production_card_has_enabled_link() {
        let html = render(&[AMT]);

        assert!(html.contains("href=\"/docs/amt/intro\""));
        assert!(html.contains("View Documentation"));
        assert!(html.contains("class=\"badge badge--success\""));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn production_card_truncates_features() {
        let html = render(&[AMT]);

        for shown in ["Customer accounts", "Payment processing", "Commission calculations"] {
            assert!(html.contains(shown), "missing {shown}");
        }
        assert!(!html.contains("Product catalog"));
        assert!(!html.contains("KYC verification"));
        assert_eq!(html.matches("...and more").count(), 1);
    }

    #[test]
    fn coming_soon_card_is_disabled_and_bare() {
        let html = render(&[PLATFORM]);

        let button_at = html.find("<button").expect("action button");
        let button_tag = &html[button_at..button_at + html[button_at..].find('>').expect("tag end")];
        assert!(button_tag.contains("disabled"));
        assert!(!button_tag.contains("href"));
        assert!(html.contains("Coming Soon"));
        assert!(html.contains("class=\"badge badge--secondary\""));
        assert!(!html.contains("View Documentation"));
        assert!(!html.contains("class=\"card__tech\""));
        assert!(!html.contains("class=\"card__features\""));
    }

    #[test]
    fn coming_soon_card_never_links_even_with_real_path() {
        let record = ApplicationRecord {
            link: "/docs/secret",
            ..PLATFORM
        };
        let html = render(&[record]);

        assert!(!html.contains("/docs/secret"));
    }

    #[test]
    fn tech_tags_render_in_order() {
        let html = render_default_page(&SiteConfig::default());
        let positions: Vec<_> = ["TypeScript", "Express", "MySQL", "Redis"]
            .iter()
            .map(|tag| html.find(tag).expect("tag rendered"))
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn cards_follow_catalog_order() {
        let html = render_default_page(&SiteConfig::default());
        let mut cursor = 0;
        for record in catalog::CATALOG {
            let found = html[cursor..]
                .find(record.title)
                .unwrap_or_else(|| panic!("{} out of order", record.title));
            cursor += found;
        }
    }

    #[test]
    fn renders_quick_links() {
        let html = render_default_page(&SiteConfig::default());

        assert!(html.contains("Quick Links"));
        for group in catalog::QUICK_LINKS {
            assert!(html.contains(group.heading));
            for link in group.links {
                assert!(html.contains(link.label));
            }
        }
        assert!(html.contains("href=\"/docs/amt/api-reference\""));
    }
}
