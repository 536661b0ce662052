//! Site configuration, read once from `site.toml` bundled at compile time

use contracts::shared::config::SiteConfig;
use once_cell::sync::Lazy;

static SITE_CONFIG: Lazy<SiteConfig> =
    Lazy::new(|| SiteConfig::load(Some(include_str!("../../site.toml"))));

pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}
