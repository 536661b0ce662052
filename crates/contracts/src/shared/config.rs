use serde::Deserialize;

/// Tunables of the catalog pages
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub api: ApiConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the contact/careers API; empty means "same host as the page"
    #[serde(default)]
    pub base_url: String,
    pub submit_timeout_ms: u32,
    /// `source` field of contact requests
    pub contact_source: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// How long the "thanks for voting" notice stays visible
    pub thanks_visible_ms: u32,
    /// Gallery scroll step, roughly one image width
    pub gallery_step_px: f64,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
submit_timeout_ms = 15000
contact_source = "website"

[catalog]
thanks_visible_ms = 3000
gallery_step_px = 320.0
"#;

impl SiteConfig {
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Parse `source`, falling back to the embedded defaults
    pub fn load(source: Option<&str>) -> Self {
        if let Some(source) = source {
            match Self::from_toml(source) {
                Ok(config) => return config,
                Err(e) => log::warn!("invalid site config, using defaults: {}", e),
            }
        }
        Self::default()
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_toml(DEFAULT_CONFIG).expect("embedded default config is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = SiteConfig::default();
        assert_eq!(config.catalog.thanks_visible_ms, 3000);
        assert_eq!(config.api.submit_timeout_ms, 15000);
        assert_eq!(config.api.base_url, "");
    }

    #[test]
    fn test_override() {
        let config = SiteConfig::load(Some(
            r#"
            [api]
            base_url = "https://api.example.com"
            submit_timeout_ms = 5000
            contact_source = "landing"

            [catalog]
            thanks_visible_ms = 1500
            gallery_step_px = 280.0
            "#,
        ));
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.catalog.thanks_visible_ms, 1500);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = SiteConfig::load(Some("[api]\nsubmit_timeout_ms = \"soon\""));
        assert_eq!(config, SiteConfig::default());
    }
}
