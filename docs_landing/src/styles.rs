//! CSS for the landing page.
//!
//! Class names follow the Infima conventions used by documentation sites
//! (`hero`, `card__header`, `badge--success`, `col--6`), so the markup stays
//! familiar to anyone theming the surrounding docs.
//!
//! # Customization
//!
//! ```rust
//! use docs_landing::styles::LANDING_CSS;
//!
//! let my_css = ".hero--primary { background: #0b6e4f; }";
//! let combined = format!("{}\n{}", LANDING_CSS, my_css);
//! assert!(combined.contains("hero--primary"));
//! ```

/// Complete inline stylesheet for the landing page.
pub const LANDING_CSS: &str = r#"
:root {
    --color-primary: #2e8555;
    --color-primary-dark: #29784c;
    --color-secondary: #ebedf0;
    --color-success: #00a400;
    --color-text: #1c1e21;
    --color-muted: #606770;
    --color-light: #f5f6f7;
    --radius: 0.4rem;
    --font-base: system-ui, -apple-system, "Segoe UI", Roboto, Ubuntu, sans-serif;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: var(--font-base);
    color: var(--color-text);
    line-height: 1.65;
}

a { color: var(--color-primary); text-decoration: none; }
a:hover { text-decoration: underline; }

.container {
    max-width: 1140px;
    margin: 0 auto;
    padding: 0 1rem;
}

.row {
    display: flex;
    flex-wrap: wrap;
    margin: 0 -0.75rem;
}

.col { padding: 0 0.75rem; }
.col--4 { flex: 0 0 33.333%; max-width: 33.333%; }
.col--6 { flex: 0 0 50%; max-width: 50%; }

@media (max-width: 996px) {
    .col--4, .col--6 { flex: 0 0 100%; max-width: 100%; }
}

.text--center { text-align: center; }
.margin-bottom--lg { margin-bottom: 2rem; }
.margin-bottom--xl { margin-bottom: 3rem; }

/* Hero */
.hero { padding: 4rem 0; }
.hero--primary { background: var(--color-primary); color: #fff; }
.hero--light { background: var(--color-light); }
.hero-banner { text-align: center; position: relative; overflow: hidden; }
.hero__title { font-size: 3rem; margin: 0 0 1rem; }
.hero__subtitle { font-size: 1.5rem; margin: 0 0 2rem; }
.hero__buttons { display: flex; align-items: center; justify-content: center; }

@media (max-width: 996px) {
    .hero-banner { padding: 2rem; }
}

/* Applications */
.applications { padding: 4rem 0; }
.application-card { margin-bottom: 2rem; }

.card {
    height: 100%;
    position: relative;
    display: flex;
    flex-direction: column;
    border-radius: var(--radius);
    box-shadow: 0 1px 2px 0 rgba(0, 0, 0, 0.1);
    background: #fff;
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}

.card:hover {
    transform: translateY(-4px);
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
}

.card__header { padding: 1rem 1rem 0; }
.card__header h3 { margin: 0 6rem 0.5rem 0; }
.card__header .badge { position: absolute; top: 1rem; right: 1rem; }
.card__body { padding: 1rem; flex: 1; }
.card__footer { padding: 0 1rem 1rem; }
.card__tech { margin-bottom: 1rem; }
.card__tech .badge { margin-right: 0.5rem; }
.card__features { font-size: 0.9rem; margin-bottom: 1rem; }

/* Badges */
.badge {
    display: inline-block;
    padding: 0.25em 0.5em;
    border-radius: var(--radius);
    font-size: 75%;
    font-weight: 700;
    line-height: 1;
    color: #fff;
}
.badge--primary { background: var(--color-primary); }
.badge--success { background: var(--color-success); }
.badge--secondary { background: var(--color-secondary); color: var(--color-text); }

/* Buttons */
.button {
    display: inline-block;
    padding: 0.375rem 1.5rem;
    border: 1px solid transparent;
    border-radius: var(--radius);
    font-size: 0.875rem;
    font-weight: 700;
    text-align: center;
    cursor: pointer;
}
.button--lg { padding: 0.75rem 2rem; font-size: 1rem; }
.button--block { display: block; width: 100%; }
.button--primary { background: var(--color-primary); color: #fff; }
.button--primary:hover { background: var(--color-primary-dark); text-decoration: none; }
.button--secondary { background: var(--color-secondary); color: var(--color-text); }
.button:disabled { opacity: 0.65; cursor: not-allowed; }

/* Quick links */
.quick-links { padding: 3rem 0; }
.quick-links__list { list-style: none; padding: 0; }
.quick-links__list li { margin-bottom: 0.25rem; }
"#;
