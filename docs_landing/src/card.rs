//! Mapping from an [`ApplicationRecord`] to what its card displays.
//!
//! The components in [`crate::components`] only turn an
//! [`ApplicationCardModel`] into markup; every display decision lives here.

use crate::types::{ApplicationRecord, Status};

/// Number of feature bullets shown before the "more" marker.
pub const FEATURE_PREVIEW_LEN: usize = 3;

/// Text of the synthetic entry appended to a truncated feature list.
pub const MORE_MARKER: &str = "...and more";

/// Visual emphasis of the status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Secondary,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Success => "badge badge--success",
            BadgeVariant::Secondary => "badge badge--secondary",
        }
    }
}

/// One rendered line of the feature list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureItem {
    Entry(&'static str),
    More,
}

impl FeatureItem {
    pub fn text(self) -> &'static str {
        match self {
            FeatureItem::Entry(text) => text,
            FeatureItem::More => MORE_MARKER,
        }
    }
}

/// The single action control at the bottom of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallToAction {
    /// Enabled link to the application's documentation.
    ViewDocumentation { href: &'static str },
    /// Disabled button with no target.
    ComingSoon,
}

impl CallToAction {
    pub fn label(self) -> &'static str {
        match self {
            CallToAction::ViewDocumentation { .. } => "View Documentation",
            CallToAction::ComingSoon => "Coming Soon",
        }
    }

    /// Navigation target, `None` when the control is disabled.
    pub fn href(self) -> Option<&'static str> {
        match self {
            CallToAction::ViewDocumentation { href } => Some(href),
            CallToAction::ComingSoon => None,
        }
    }

    pub fn is_enabled(self) -> bool {
        self.href().is_some()
    }
}

/// Everything a catalog card shows, derived from one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationCardModel {
    pub title: &'static str,
    pub description: &'static str,
    pub status: Status,
    pub badge: BadgeVariant,
    /// Every tag, in order. Empty means no tag row is rendered.
    pub tech: Vec<&'static str>,
    /// Empty means no list is rendered.
    pub features: Vec<FeatureItem>,
    pub action: CallToAction,
}

impl ApplicationCardModel {
    pub fn from_record(record: &ApplicationRecord) -> Self {
        let (badge, action) = match record.status {
            Status::Production => (
                BadgeVariant::Success,
                CallToAction::ViewDocumentation { href: record.link },
            ),
            Status::ComingSoon => (BadgeVariant::Secondary, CallToAction::ComingSoon),
        };

        Self {
            title: record.title,
            description: record.description,
            status: record.status,
            badge,
            tech: record.tech.to_vec(),
            features: feature_preview(record.features),
            action,
        }
    }
}

/// Card models for a whole catalog, in catalog order.
pub fn card_models(records: &[ApplicationRecord]) -> Vec<ApplicationCardModel> {
    records.iter().map(ApplicationCardModel::from_record).collect()
}

/// First [`FEATURE_PREVIEW_LEN`] features, plus one [`FeatureItem::More`]
/// when anything was cut.
pub fn feature_preview(features: &[&'static str]) -> Vec<FeatureItem> {
    let mut items: Vec<FeatureItem> = features
        .iter()
        .copied()
        .take(FEATURE_PREVIEW_LEN)
        .map(FeatureItem::Entry)
        .collect();
    if features.len() > FEATURE_PREVIEW_LEN {
        items.push(FeatureItem::More);
    }
    items
}

/// Comma-joined tags, capped at `cap` with a `+N` suffix for the rest.
pub fn tech_preview(tech: &[&str], cap: usize) -> String {
    let shown = tech.iter().take(cap).copied().collect::<Vec<_>>().join(", ");
    match tech.len().saturating_sub(cap) {
        0 => shown,
        rest if shown.is_empty() => format!("+{rest}"),
        rest => format!("{shown} +{rest}"),
    }
}
