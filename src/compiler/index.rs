//! Index page generation.
//!
//! Every page contributes a [`PageSummary`]; summaries are sorted newest
//! first and rendered as a single list.

use crate::config::SiteConfig;
use chrono::NaiveDate;
use quick_xml::escape::escape;

/// Index entry for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub title: String,
    pub date: String,
    pub filename: String,
    pub parsed_date: NaiveDate,
}

/// Sort by date, most recent first.
///
/// The sort is stable: pages sharing a date keep their input order.
pub fn sort_summaries(summaries: &mut [PageSummary]) {
    summaries.sort_by(|a, b| b.parsed_date.cmp(&a.parsed_date));
}

/// Fill the index layout with already sorted summaries.
pub fn render_index(summaries: &[PageSummary], config: &SiteConfig) -> String {
    let mut links = String::new();
    for link in &config.base.links {
        links.push_str(&format!(
            "    <a href=\"{}\">{}</a>\n",
            escape(link.href.as_str()),
            escape(link.text.as_str())
        ));
    }

    let mut items = String::with_capacity(summaries.len() * 192);
    for summary in summaries {
        items.push_str("        <li class=\"article-item\">\n");
        items.push_str(&format!(
            "            <span class=\"article-title\"><a href=\"{}\">{}</a></span>\n",
            urlencoding::encode(&summary.filename),
            escape(summary.title.as_str())
        ));
        items.push_str(&format!(
            "            <span class=\"article-date\">{}</span>\n",
            escape(summary.date.as_str())
        ));
        items.push_str("        </li>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link rel="stylesheet" href="{stylesheet}">
    <title>{title}</title>
    <style>
        ul {{
            padding: 0;
            margin: 0;
        }}
        .article-item {{
            display: flex;
            justify-content: space-between;
            padding: 0;
        }}
        .article-title {{
            flex-grow: 1;
            margin: 0;
            padding: 0;
        }}
        .article-date {{
            text-align: right;
            white-space: nowrap;
            color: #888;
        }}
        hr {{
            margin-top: 2rem;
            margin-bottom: 2rem;
        }}
    </style>
</head>
<body>
    <h1>{title}</h1>
{links}    <hr>
    <ul>
{items}    </ul>
</body>
</html>
"#,
        lang = escape(config.base.language.as_str()),
        stylesheet = escape(config.build.stylesheet.as_str()),
        title = escape(config.base.title.as_str()),
    )
}
