//! Root document component - the complete HTML page

use super::{ApplicationsSection, HomepageHeader, QuickLinks};
use crate::card::ApplicationCardModel;
use crate::config::SiteConfig;
use crate::styles::LANDING_CSS;
use crate::types::QuickLinkGroup;
use leptos::prelude::*;

/// The complete HTML document for the landing page
#[component]
pub fn LandingDocument(
    site: SiteConfig,
    cards: Vec<ApplicationCardModel>,
    quick_links: Vec<QuickLinkGroup>,
) -> impl IntoView {
    let document_title = site.document_title();
    let description = site.page_description.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{document_title}</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <HomepageHeader site=site />
                <main>
                    <ApplicationsSection cards=cards />
                    <QuickLinks groups=quick_links />
                </main>
            </body>
        </html>
    }
}
