//! Documentation-site configuration.
//!
//! The course ships as a static documentation site; this module models the
//! generator's contract (title, base path, favicon, per-locale navigation and
//! sidebar trees) and validates that every menu route resolves to a markdown
//! page under `docs/`. No HTML is rendered here; `emit` serializes the
//! configuration for the external generator.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Site metadata and per-locale menu trees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    /// Base path the site is served under. Must start and end with `/`.
    pub base: String,
    /// Favicon link, relative to `base`.
    pub favicon: String,
    pub default_locale: String,
    pub locales: Vec<Locale>,
}

/// One locale: language tag, display label, and its menu trees.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Locale {
    /// Language tag, also the route prefix (`/en/...`).
    pub lang: String,
    /// Display label in the locale switcher.
    pub label: String,
    #[serde(default)]
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub sidebar: Vec<SidebarGroup>,
}

/// A menu label mapped to a content route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

/// A titled group of sidebar links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidebarGroup {
    pub text: String,
    pub items: Vec<NavItem>,
}

impl SiteConfig {
    /// Structural validation that needs no filesystem access.
    ///
    /// Route resolution against the docs directory is separate ([`Self::validate_routes`])
    /// so manifest parsing stays pure.
    pub fn validate_shape(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            bail!("site.title must be non-empty");
        }
        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            bail!("site.base must start and end with '/'");
        }
        if self.favicon.trim().is_empty() {
            bail!("site.favicon must be non-empty");
        }
        if self.locales.is_empty() {
            bail!("site.locales must be a non-empty array");
        }
        let mut langs: Vec<&str> = self.locales.iter().map(|l| l.lang.as_str()).collect();
        langs.sort_unstable();
        for pair in langs.windows(2) {
            if pair[0] == pair[1] {
                bail!("duplicate locale lang {}", pair[0]);
            }
        }
        if !self
            .locales
            .iter()
            .any(|locale| locale.lang == self.default_locale)
        {
            bail!(
                "site.default_locale {} is not in site.locales",
                self.default_locale
            );
        }
        for locale in &self.locales {
            locale
                .validate_shape()
                .with_context(|| format!("locale {} invalid", locale.lang))?;
        }
        Ok(())
    }

    /// Check that every nav and sidebar link resolves to a page under `docs_root`.
    ///
    /// Returns the list of broken links; empty means the site is consistent.
    pub fn validate_routes(&self, docs_root: &Path) -> Result<Vec<String>> {
        let mut broken = Vec::new();
        for locale in &self.locales {
            for item in locale.links() {
                match route_to_page(&item.link, &locale.lang) {
                    Ok(page) => {
                        if !docs_root.join(&page).is_file() {
                            broken.push(format!(
                                "{} -> missing page docs/{}",
                                item.link,
                                page.display()
                            ));
                        }
                    }
                    Err(err) => broken.push(format!("{} -> {err}", item.link)),
                }
            }
        }
        Ok(broken)
    }

    /// Serialize the configuration as pretty JSON for the site generator.
    pub fn emit(&self) -> Result<String> {
        let mut payload = serde_json::to_string_pretty(self).context("serialize site config")?;
        payload.push('\n');
        Ok(payload)
    }
}

impl Locale {
    fn validate_shape(&self) -> Result<()> {
        if self.lang.trim().is_empty() {
            bail!("lang must be non-empty");
        }
        if self.label.trim().is_empty() {
            bail!("label must be non-empty");
        }
        if self.nav.is_empty() {
            bail!("nav must be a non-empty array");
        }
        for group in &self.sidebar {
            if group.text.trim().is_empty() {
                bail!("sidebar group text must be non-empty");
            }
            if group.items.is_empty() {
                bail!("sidebar group {} has no items", group.text);
            }
        }
        for item in self.links() {
            if item.text.trim().is_empty() {
                bail!("menu item for {} has empty text", item.link);
            }
        }
        Ok(())
    }

    /// All menu items of this locale: nav entries followed by sidebar items.
    pub fn links(&self) -> impl Iterator<Item = &NavItem> {
        self.nav
            .iter()
            .chain(self.sidebar.iter().flat_map(|group| group.items.iter()))
    }
}

/// Map a route to its markdown page, relative to the docs root.
///
/// `/en/cards` resolves to `en/cards.md`, the directory route `/en/` to
/// `en/index.md`. Routes must be absolute and live under their locale prefix.
pub fn route_to_page(link: &str, lang: &str) -> Result<PathBuf> {
    let prefix = format!("/{lang}/");
    let Some(rest) = link.strip_prefix(&prefix) else {
        bail!("route must start with {prefix}");
    };
    if rest.contains("..") {
        bail!("route must not contain '..'");
    }
    let page = if rest.is_empty() {
        format!("{lang}/index.md")
    } else if let Some(dir) = rest.strip_suffix('/') {
        format!("{lang}/{dir}/index.md")
    } else {
        format!("{lang}/{rest}.md")
    };
    Ok(PathBuf::from(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn site_with_links(links: &[&str]) -> SiteConfig {
        SiteConfig {
            title: "Type Drills".to_string(),
            description: "course".to_string(),
            base: "/drills/".to_string(),
            favicon: "/favicon.ico".to_string(),
            default_locale: "en".to_string(),
            locales: vec![Locale {
                lang: "en".to_string(),
                label: "English".to_string(),
                nav: links
                    .iter()
                    .map(|link| NavItem {
                        text: "item".to_string(),
                        link: (*link).to_string(),
                    })
                    .collect(),
                sidebar: Vec::new(),
            }],
        }
    }

    #[test]
    fn routes_map_to_pages() {
        assert_eq!(
            route_to_page("/en/cards", "en").expect("route"),
            PathBuf::from("en/cards.md")
        );
        assert_eq!(
            route_to_page("/en/", "en").expect("route"),
            PathBuf::from("en/index.md")
        );
        assert_eq!(
            route_to_page("/fr/exercices/", "fr").expect("route"),
            PathBuf::from("fr/exercices/index.md")
        );
    }

    #[test]
    fn routes_outside_locale_are_rejected() {
        let err = route_to_page("/de/cards", "en").expect_err("wrong prefix");
        assert!(err.to_string().contains("/en/"));
        let err = route_to_page("/en/../secret", "en").expect_err("escape");
        assert!(err.to_string().contains(".."));
    }

    #[test]
    fn validate_routes_reports_missing_pages() {
        let temp = tempdir().expect("tempdir");
        fs::create_dir_all(temp.path().join("en")).expect("docs dir");
        fs::write(temp.path().join("en/index.md"), "# Welcome\n").expect("index");

        let site = site_with_links(&["/en/", "/en/cards"]);
        let broken = site.validate_routes(temp.path()).expect("validate");
        assert_eq!(broken.len(), 1);
        assert!(broken[0].contains("/en/cards"));
    }

    #[test]
    fn shape_rejects_unknown_default_locale() {
        let mut site = site_with_links(&["/en/"]);
        site.default_locale = "fr".to_string();
        let err = site.validate_shape().expect_err("unknown default");
        assert!(err.to_string().contains("default_locale"));
    }

    #[test]
    fn shape_rejects_bad_base() {
        let mut site = site_with_links(&["/en/"]);
        site.base = "drills".to_string();
        let err = site.validate_shape().expect_err("bad base");
        assert!(err.to_string().contains("site.base"));
    }

    #[test]
    fn emit_round_trips() {
        let site = site_with_links(&["/en/"]);
        let json = site.emit().expect("emit");
        let parsed: SiteConfig = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed, site);
    }
}
