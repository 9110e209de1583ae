//! Leptos UI components for the landing page.
//!
//! Each component is a Leptos `#[component]` function rendered on the server
//! into static HTML. Display decisions are made beforehand in
//! [`crate::card`]; components here only lay the data out.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! ├── HomepageHeader
//! └── <main>
//!     ├── ApplicationsSection
//!     │   └── ApplicationCard (per catalog record)
//!     └── QuickLinks
//!         └── QuickLinkColumn (per group)
//! ```

mod applications;
mod document;
mod hero;
mod nav_link;
mod quick_links;

pub use applications::{ApplicationCard, ApplicationsSection};
pub use document::LandingDocument;
pub use hero::HomepageHeader;
pub use nav_link::NavLink;
pub use quick_links::QuickLinks;
