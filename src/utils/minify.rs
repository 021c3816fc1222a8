//! HTML minification.
//!
//! Enabled by `[build].minify`; when disabled the page text passes through
//! untouched so repeated builds stay byte-identical to the layout.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Minify an HTML document if enabled in config.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify_html<'a>(html: &'a str, config: &SiteConfig) -> Cow<'a, [u8]> {
    if config.build.minify {
        Cow::Owned(minify_html_inner(html.as_bytes()))
    } else {
        Cow::Borrowed(html.as_bytes())
    }
}

/// Minify HTML content using `minify_html` crate.
fn minify_html_inner(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    minify_html::minify(html, &cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_minify(enabled: bool) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.minify = enabled;
        config
    }

    #[test]
    fn test_minify_disabled_passthrough() {
        let html = "<p>\n    hello\n</p>\n";
        let config = config_with_minify(false);
        let result = minify_html(html, &config);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(&*result, html.as_bytes());
    }

    #[test]
    fn test_minify_enabled_shrinks() {
        let html = "<ul>\n    <li>one</li>\n    <li>two</li>\n</ul>\n";
        let config = config_with_minify(true);
        let result = minify_html(html, &config);
        assert!(result.len() < html.len());
        let text = String::from_utf8_lossy(&result);
        assert!(text.contains("<li>one</li>"));
    }
}
