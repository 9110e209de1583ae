//! Navigation link primitive shared by the hero, cards and quick links.

use leptos::prelude::*;

/// An anchor to another documentation page.
#[component]
pub fn NavLink(
    /// Target path; `#` for pages that are not routed yet
    #[prop(into)]
    to: String,
    /// CSS classes for the anchor
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a class=class href=to>
            {children()}
        </a>
    }
}
