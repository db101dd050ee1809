//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use readycheck_core::report::AssessmentReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML report from an assessment report.
pub fn generate_html(report: &AssessmentReport) -> String {
    let results = &report.results;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>readycheck report — {}</title>\n",
        html_escape(&report.catalog.name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>readycheck report</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Catalog: <strong>{}</strong> | {} questions | {} answered | {}</p>\n",
        html_escape(&report.catalog.name),
        report.catalog.question_count,
        report.response_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Recommendation banner
    let rec_class = match results.recommendation {
        readycheck_core::results::Recommendation::StrongFit => "strong",
        readycheck_core::results::Recommendation::ConditionalFit => "conditional",
        readycheck_core::results::Recommendation::WeakFit => "weak",
    };
    html.push_str(&format!(
        "<section class=\"banner {}\">\n<h2>{}</h2>\n<p class=\"overall\">{}%</p>\n<p>Overall readiness score</p>\n</section>\n",
        rec_class,
        html_escape(results.recommendation.headline()),
        results.overall_score,
    ));

    // Score breakdown
    html.push_str("<section class=\"scores\">\n");
    html.push_str("<h2>Score breakdown</h2>\n");
    let mut bars: Vec<(String, u32)> = vec![
        ("trait fit".into(), results.trait_score),
        ("knowledge fit".into(), results.knowledge_score),
    ];
    for (dimension, score) in results.dimensions.iter() {
        bars.push((dimension.to_string(), score));
    }
    html.push_str(&generate_bar_chart(&bars));
    html.push_str("</section>\n");

    // Insight lists
    push_list(&mut html, "Strengths", &results.strengths);
    push_list(&mut html, "Areas to improve", &results.improvements);
    push_list(&mut html, "Next steps", &results.next_steps);
    push_list(&mut html, "Suggested roles", &results.suggested_roles);

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

fn push_list(html: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    html.push_str("<section>\n");
    html.push_str(&format!("<h2>{}</h2>\n<ul>\n", html_escape(title)));
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", html_escape(item)));
    }
    html.push_str("</ul>\n</section>\n");
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn generate_bar_chart(bars: &[(String, u32)]) -> String {
    let bar_height = 24;
    let max_width = 400;
    let padding = 8;
    let label_width = 160;

    let total_height = bars.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, (label, score)) in bars.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = (*score as usize).min(100) * max_width / 100;

        let color = if *score >= 75 {
            "#22c55e"
        } else if *score >= 60 {
            "#eab308"
        } else {
            "#ef4444"
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"13\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(label)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}%</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            score
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --strong: #dcfce7; --conditional: #fef9c3; --weak: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --strong: #064e3b; --conditional: #713f12; --weak: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); max-width: 48rem; margin: 0 auto; }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.banner { border-radius: 8px; padding: 1rem 2rem; text-align: center; }
.banner.strong { background: var(--strong); }
.banner.conditional { background: var(--conditional); }
.banner.weak { background: var(--weak); }
.overall { font-size: 3rem; font-weight: bold; margin: 0.5rem 0; }
ul { line-height: 1.8; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;
