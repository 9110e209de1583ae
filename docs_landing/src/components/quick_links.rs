//! Quick-link columns pointing at frequently used documentation pages.

use super::NavLink;
use crate::types::QuickLinkGroup;
use leptos::prelude::*;

/// The "Quick Links" band below the catalog.
#[component]
pub fn QuickLinks(groups: Vec<QuickLinkGroup>) -> impl IntoView {
    view! {
        <section class="hero hero--light quick-links">
            <div class="container">
                <div class="text--center margin-bottom--lg">
                    <h2>"Quick Links"</h2>
                </div>
                <div class="row">
                    {groups
                        .into_iter()
                        .map(|group| view! { <QuickLinkColumn group=group /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn QuickLinkColumn(group: QuickLinkGroup) -> impl IntoView {
    view! {
        <div class="col col--4">
            <div class="text--center">
                <h3>{group.heading}</h3>
                <ul class="quick-links__list">
                    {group
                        .links
                        .iter()
                        .map(|link| view! {
                            <li>
                                <NavLink to=link.to>{link.label}</NavLink>
                            </li>
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </div>
    }
}
