//! The built-in application catalog and quick-link tables.
//!
//! Both tables are `static` and never change at runtime. Call
//! [`validate_catalog`] and [`validate_quick_links`] once at startup; the
//! renderer itself assumes well-formed data.

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::types::{ApplicationRecord, QuickLink, QuickLinkGroup, Status};

/// Applications shown on the landing page, in display order.
pub static CATALOG: &[ApplicationRecord] = &[
    ApplicationRecord {
        title: "AMT Backend",
        description: "Account Management Tool - Comprehensive backend API for customer lifecycle management",
        link: "/docs/amt/intro",
        status: Status::Production,
        tech: &["TypeScript", "Express", "MySQL", "Redis"],
        features: &[
            "Customer account management",
            "Payment processing",
            "Commission calculations",
            "Product catalog",
            "KYC verification",
        ],
    },
    ApplicationRecord {
        title: "360 Platform",
        description: "Frontend application for internal operations and management",
        link: "#",
        status: Status::ComingSoon,
        tech: &["React", "Node.js"],
        features: &[],
    },
    ApplicationRecord {
        title: "FMA (Field Management App)",
        description: "Mobile application for field agents and operations",
        link: "#",
        status: Status::ComingSoon,
        tech: &["React Native"],
        features: &[],
    },
    ApplicationRecord {
        title: "Customer Portal",
        description: "Self-service portal for customer account management",
        link: "#",
        status: Status::ComingSoon,
        tech: &["React", "TypeScript"],
        features: &[],
    },
    ApplicationRecord {
        title: "M-Pesa Integration",
        description: "Mobile money payment gateway integration service",
        link: "#",
        status: Status::ComingSoon,
        tech: &["Node.js", "Express"],
        features: &[],
    },
    ApplicationRecord {
        title: "Sales Portal",
        description: "Sales team management and lead tracking system",
        link: "#",
        status: Status::ComingSoon,
        tech: &["React", "Node.js"],
        features: &[],
    },
    ApplicationRecord {
        title: "IoT Platform",
        description: "Device management and monitoring system",
        link: "#",
        status: Status::ComingSoon,
        tech: &["Python", "MQTT"],
        features: &[],
    },
];

/// Quick-link columns shown below the catalog.
pub static QUICK_LINKS: &[QuickLinkGroup] = &[
    QuickLinkGroup {
        heading: "API References",
        links: &[
            QuickLink { label: "AMT API", to: "/docs/amt/api-reference" },
            QuickLink { label: "Payment Gateway APIs", to: "#" },
            QuickLink { label: "Integration Guides", to: "#" },
        ],
    },
    QuickLinkGroup {
        heading: "Development",
        links: &[
            QuickLink { label: "Getting Started", to: "/docs/amt/getting-started" },
            QuickLink { label: "Architecture", to: "/docs/amt/architecture" },
            QuickLink { label: "Database Schema", to: "/docs/amt/database" },
        ],
    },
    QuickLinkGroup {
        heading: "Operations",
        links: &[
            QuickLink { label: "Deployment Guide", to: "/docs/amt/deployment" },
            QuickLink { label: "Monitoring", to: "#" },
            QuickLink { label: "Troubleshooting", to: "#" },
        ],
    },
];

/// Check the structural invariants of a catalog.
///
/// Stops at the first violation, reporting the record's position.
pub fn validate_catalog(records: &[ApplicationRecord]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if record.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle { index });
        }
        if !seen.insert(record.title) {
            return Err(CatalogError::DuplicateTitle {
                title: record.title.to_string(),
            });
        }
        if record.description.trim().is_empty() {
            return Err(CatalogError::EmptyDescription {
                title: record.title.to_string(),
            });
        }
        if record.status == Status::Production
            && (record.link.trim().is_empty() || record.has_placeholder_link())
        {
            return Err(CatalogError::UnroutedProduction {
                title: record.title.to_string(),
            });
        }
        if record.tech.iter().any(|t| t.trim().is_empty()) {
            return Err(CatalogError::EmptyEntry {
                title: record.title.to_string(),
                field: "tech",
            });
        }
        if record.features.iter().any(|f| f.trim().is_empty()) {
            return Err(CatalogError::EmptyEntry {
                title: record.title.to_string(),
                field: "features",
            });
        }
    }

    Ok(())
}

/// Check that every quick-link group has a heading and usable links.
pub fn validate_quick_links(groups: &[QuickLinkGroup]) -> Result<(), CatalogError> {
    for (index, group) in groups.iter().enumerate() {
        if group.heading.trim().is_empty() {
            return Err(CatalogError::EmptyHeading { index });
        }
        for link in group.links {
            if link.label.trim().is_empty() || link.to.trim().is_empty() {
                return Err(CatalogError::IncompleteQuickLink {
                    heading: group.heading.to_string(),
                });
            }
        }
    }
    Ok(())
}
