//! Hero banner with the site title, tagline and the "get started" link.

use super::NavLink;
use crate::config::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn HomepageHeader(site: SiteConfig) -> impl IntoView {
    view! {
        <header class="hero hero--primary hero-banner">
            <div class="container">
                <h1 class="hero__title">{site.title}</h1>
                <p class="hero__subtitle">{site.tagline}</p>
                <div class="hero__buttons">
                    <NavLink to=site.get_started_link class="button button--secondary button--lg">
                        {site.get_started_label}
                    </NavLink>
                </div>
            </div>
        </header>
    }
}
