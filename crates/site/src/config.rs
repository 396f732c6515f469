use crate::{RedirectTable, SiteConfigError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    #[default]
    Static,
    Server,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Integration {
    Sitemap,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildConfig {
    /// Directory name for hashed build assets.
    pub assets: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            assets: "_assets".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    pub site: String,
    #[serde(default)]
    pub output: OutputMode,
    #[serde(default)]
    pub integrations: Vec<Integration>,
    #[serde(default)]
    pub build: BuildConfig,
    #[serde(default)]
    pub redirects: RedirectTable,
}

const MONTESSORI_REDIRECTS: [(&str, &str); 6] = [
    ("/about", "/support/"),
    ("/about/", "/support/"),
    ("/consulting", "/support/"),
    ("/consulting/", "/support/"),
    ("/partners", "/our-team/"),
    ("/partners/", "/our-team/"),
];

impl SiteConfig {
    /// The configuration the site ships with.
    pub fn montessori() -> Result<Self, SiteConfigError> {
        let mut redirects = RedirectTable::new();
        for (from, to) in MONTESSORI_REDIRECTS {
            redirects.insert(from, to)?;
        }
        Ok(Self {
            site: "https://montessoriforadolescents.com".to_string(),
            output: OutputMode::Static,
            integrations: vec![Integration::Sitemap],
            build: BuildConfig::default(),
            redirects,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, SiteConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!(
            "Loaded site config for {} with {} redirect(s)",
            config.site,
            config.redirects.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SiteConfigError> {
        if !(self.site.starts_with("https://") || self.site.starts_with("http://")) {
            return Err(SiteConfigError::InvalidSite(self.site.clone()));
        }
        Ok(())
    }

    /// Destination for a legacy path, matched literally.
    pub fn redirect(&self, path: &str) -> Option<&str> {
        self.redirects.resolve(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_config_keeps_both_slash_variants() {
        let config = SiteConfig::montessori().unwrap();
        assert_eq!(config.redirects.len(), 6);
        for path in ["/about", "/about/", "/consulting", "/consulting/"] {
            assert_eq!(config.redirect(path), Some("/support/"), "{}", path);
        }
        assert_eq!(config.redirect("/partners/"), Some("/our-team/"));
        assert_eq!(config.redirect("/partners//"), None);
        assert_eq!(config.redirect("/support/"), None);
    }

    #[test]
    fn parses_json_with_defaults() {
        let config = SiteConfig::from_json(
            r#"{
                "site": "https://montessoriforadolescents.com",
                "integrations": ["sitemap"],
                "redirects": { "/about/": "/support/" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.output, OutputMode::Static);
        assert_eq!(config.build.assets, "_assets");
        assert_eq!(config.integrations, vec![Integration::Sitemap]);
        assert_eq!(config.redirect("/about/"), Some("/support/"));
        assert_eq!(config.redirect("/about"), None);
    }

    #[test]
    fn json_round_trip_preserves_the_shipped_config() {
        let config = SiteConfig::montessori().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SiteConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn rejects_relative_site_url() {
        assert!(matches!(
            SiteConfig::from_json(r#"{"site": "montessoriforadolescents.com"}"#),
            Err(SiteConfigError::InvalidSite(_))
        ));
    }
}
