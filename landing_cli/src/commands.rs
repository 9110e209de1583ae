//! Subcommand implementations.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use docs_landing::card::tech_preview;
use docs_landing::catalog::{CATALOG, QUICK_LINKS, validate_catalog, validate_quick_links};
use docs_landing::{SiteConfig, render_default_page};
use tracing::{debug, info};

/// Tags shown per application in `list` output before collapsing to `+N`.
const LIST_TECH_CAP: usize = 2;

/// Refuse to continue unless the built-in tables are well formed.
fn validate_builtin() -> Result<()> {
    validate_catalog(CATALOG).context("application catalog is invalid")?;
    validate_quick_links(QUICK_LINKS).context("quick links are invalid")?;
    debug!(
        applications = CATALOG.len(),
        link_groups = QUICK_LINKS.len(),
        "built-in tables validated"
    );
    Ok(())
}

fn load_config(path: &Path) -> Result<SiteConfig> {
    let config = SiteConfig::load_from_path(path)
        .with_context(|| format!("could not load site config {}", path.display()))?;
    debug!(title = %config.title, "site config loaded");
    Ok(config)
}

pub fn render(config_path: &Path, out: &Path) -> Result<()> {
    validate_builtin()?;
    let site = load_config(config_path)?;
    let html = render_default_page(&site);

    if out == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(html.as_bytes())
            .context("failed to write page to stdout")?;
        return Ok(());
    }

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(out, &html).with_context(|| format!("failed to write {}", out.display()))?;

    info!(path = %out.display(), bytes = html.len(), "landing page written");
    println!("Landing page written to: {}", out.display());
    Ok(())
}

pub fn check(config_path: &Path) -> Result<()> {
    validate_builtin()?;
    load_config(config_path)?;

    let live = CATALOG.iter().filter(|r| r.status.is_active()).count();
    println!(
        "OK: {} applications ({} in production), {} quick-link groups",
        CATALOG.len(),
        live,
        QUICK_LINKS.len()
    );
    Ok(())
}

pub fn list(json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(CATALOG).context("failed to serialize catalog")?;
        println!("{out}");
        return Ok(());
    }

    for record in CATALOG {
        let tech = tech_preview(record.tech, LIST_TECH_CAP);
        println!("{:<28} {:<12} {}", record.title, record.status.label(), tech);
    }
    Ok(())
}
