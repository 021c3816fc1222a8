//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

/// CommonMark plus the extensions blog posts commonly rely on.
fn markdown_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES
}

/// Render a Markdown body to an HTML fragment.
///
/// The converter is lenient: any input produces some HTML. Raw HTML in the
/// source is passed through unchanged.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, markdown_options());
    let mut out = String::with_capacity(source.len() + source.len() / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_paragraphs() {
        let html = render_markdown("# Title\n\nFirst paragraph.\n\n## Sub\n");
        assert_eq!(html, "<h1>Title</h1>\n<p>First paragraph.</p>\n<h2>Sub</h2>\n");
    }

    #[test]
    fn test_emphasis_and_links() {
        let html = render_markdown("Some *soft* and **loud** [words](https://example.com).");
        assert_eq!(
            html,
            "<p>Some <em>soft</em> and <strong>loud</strong> <a href=\"https://example.com\">words</a>.</p>\n"
        );
    }

    #[test]
    fn test_lists() {
        let html = render_markdown("- one\n- two\n\n1. first\n2. second\n");
        assert!(html.contains("<ul>\n<li>one</li>\n<li>two</li>\n</ul>"));
        assert!(html.contains("<ol>\n<li>first</li>\n<li>second</li>\n</ol>"));
    }

    #[test]
    fn test_code_span_and_block() {
        let html = render_markdown("Use `cargo`.\n\n```rust\nfn main() {}\n```\n");
        assert!(html.contains("<code>cargo</code>"));
        assert!(html.contains("<pre><code class=\"language-rust\">fn main() {}\n</code></pre>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_markdown("a < b & c");
        assert_eq!(html, "<p>a &lt; b &amp; c</p>\n");
    }

    #[test]
    fn test_strikethrough_extension() {
        assert_eq!(render_markdown("~~gone~~"), "<p><del>gone</del></p>\n");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(render_markdown(""), "");
    }
}
