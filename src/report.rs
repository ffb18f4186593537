//! Report renderer - turns an insight set into a standalone HTML document.
//!
//! Deterministic: the same insight set always renders to byte-identical
//! output. Sections follow `Category::ALL`; a category with no insights is
//! omitted entirely and counted in `RenderedReport::empty_categories`.

use crate::domain::InsightSet;

/// Top-level document title, rendered once before any section.
pub const REPORT_TITLE: &str = "Insights and Action Plan:";

const REPORT_CSS: &str = "\
        body {
            font-family: Arial, sans-serif;
            margin: 40px;
        }
        h1, h2 {
            margin-bottom: 20px;
        }
        ol {
            padding-left: 20px;
        }
        li {
            margin-bottom: 10px;
        }";

/// A rendered report plus the number of categories it omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub html: String,
    pub empty_categories: usize,
}

/// Render the insight set into a complete HTML document.
///
/// Headings and items are escaped before insertion: insight strings echo
/// untrusted page content (hrefs, header text) verbatim, so unescaped output
/// would be an injection hole.
pub fn render_report(insights: &InsightSet) -> RenderedReport {
    let mut sections = String::new();
    let mut empty_categories = 0;

    for (category, items) in insights.sections() {
        if items.is_empty() {
            empty_categories += 1;
            continue;
        }

        sections.push_str(&format!("    <h2>{}:</h2>\n    <ol>\n", html_escape(category.title())));
        for item in items {
            sections.push_str(&format!("        <li>{}</li>\n", html_escape(item)));
        }
        sections.push_str("    </ol>\n");
    }

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>SEO Insights Report</title>
    <style>
{css}
    </style>
</head>
<body>
    <h1>{title}</h1>
{sections}</body>
</html>
"#,
        css = REPORT_CSS,
        title = html_escape(REPORT_TITLE),
        sections = sections,
    );

    RenderedReport {
        html,
        empty_categories,
    }
}

/// Escape the characters HTML assigns meaning to.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
