//! `[base]` section configuration.
//!
//! Site-wide text shown on the index page.

use super::defaults;
use educe::Educe;
use serde::Deserialize;

/// A static link shown under the index heading.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub text: String,
    pub href: String,
}

/// `[base]` section in mdblog.toml - site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "78 BPM"
/// language = "en"
///
/// [[base.links]]
/// text = "Wiki"
/// href = "https://wiki.78bpm.com"
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BaseConfig {
    /// Heading of the index page.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// BCP 47 language code for the `lang` attribute.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Links listed under the index heading.
    #[serde(default = "defaults::base::links")]
    #[educe(Default = defaults::base::links())]
    pub links: Vec<Link>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::Link;

    #[test]
    fn test_base_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.base.title, "78 BPM");
        assert_eq!(config.base.language, "en");
        assert_eq!(
            config.base.links,
            vec![Link {
                text: "Wiki".into(),
                href: "https://wiki.78bpm.com".into()
            }]
        );
    }

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            title = "Field Notes"
            language = "de"

            [[base.links]]
            text = "Home"
            href = "https://example.com"

            [[base.links]]
            text = "About"
            href = "/about.html"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Field Notes");
        assert_eq!(config.base.language, "de");
        assert_eq!(config.base.links.len(), 2);
        assert_eq!(config.base.links[1].text, "About");
    }

    #[test]
    fn test_base_config_no_links() {
        let config: SiteConfig = toml::from_str("[base]\nlinks = []").unwrap();
        assert!(config.base.links.is_empty());
        assert_eq!(config.base.title, "78 BPM");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }
}
