//! Application catalog grid and the per-application card.

use super::NavLink;
use crate::card::{ApplicationCardModel, CallToAction};
use leptos::prelude::*;

/// The "Applications" section: one card per catalog record, in order.
#[component]
pub fn ApplicationsSection(cards: Vec<ApplicationCardModel>) -> impl IntoView {
    view! {
        <section class="applications">
            <div class="container">
                <div class="text--center margin-bottom--xl">
                    <h2>"Applications"</h2>
                    <p>"Explore documentation for SunCulture's technical platforms and services"</p>
                </div>
                <div class="row">
                    {cards
                        .into_iter()
                        .enumerate()
                        .map(|(idx, card)| view! {
                            <ApplicationCard card=card position=idx />
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// A single catalog card.
///
/// The tag row and the feature list are omitted entirely when empty; the
/// footer always holds exactly one action control.
#[component]
pub fn ApplicationCard(
    card: ApplicationCardModel,
    /// Position in the catalog, exposed as `data-position`
    #[prop(default = 0)]
    position: usize,
) -> impl IntoView {
    let tech = (!card.tech.is_empty()).then(|| {
        view! {
            <div class="card__tech">
                {card
                    .tech
                    .iter()
                    .map(|tag| view! { <span class="badge badge--primary">{*tag}</span> })
                    .collect::<Vec<_>>()}
            </div>
        }
    });

    let features = (!card.features.is_empty()).then(|| {
        view! {
            <ul class="card__features">
                {card
                    .features
                    .iter()
                    .map(|item| view! { <li>{item.text()}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        }
    });

    let label = card.action.label();
    let action = match card.action {
        CallToAction::ViewDocumentation { href } => view! {
            <NavLink to=href class="button button--primary button--block">
                {label}
            </NavLink>
        }
        .into_any(),
        CallToAction::ComingSoon => view! {
            <button class="button button--secondary button--block" disabled=true>
                {label}
            </button>
        }
        .into_any(),
    };

    view! {
        <div class="col col--6 application-card" data-position={position.to_string()}>
            <div class="card">
                <div class="card__header">
                    <h3>{card.title}</h3>
                    <span class={card.badge.class()}>{card.status.label()}</span>
                </div>
                <div class="card__body">
                    <p>{card.description}</p>
                    {tech}
                    {features}
                </div>
                <div class="card__footer">{action}</div>
            </div>
        </div>
    }
}
