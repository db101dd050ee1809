//! Markdown report renderer.

use std::path::Path;

use anyhow::Result;

use readycheck_core::report::AssessmentReport;

/// Render an assessment report as markdown.
pub fn render(report: &AssessmentReport) -> String {
    let results = &report.results;
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", report.catalog.name));
    md.push_str(&format!(
        "**{}** — overall readiness {}% ({} of {} questions answered, {})\n\n",
        results.recommendation.headline(),
        results.overall_score,
        report.response_count,
        report.catalog.question_count,
        report.created_at.format("%Y-%m-%d %H:%M UTC"),
    ));

    md.push_str("## Scores\n\n");
    md.push_str("| Aggregate | Score |\n");
    md.push_str("|-----------|-------|\n");
    md.push_str(&format!("| Trait fit | {}% |\n", results.trait_score));
    md.push_str(&format!(
        "| Knowledge fit | {}% |\n",
        results.knowledge_score
    ));
    md.push_str(&format!("| Overall | {}% |\n\n", results.overall_score));

    md.push_str("## Readiness dimensions\n\n");
    md.push_str("| Dimension | Score |\n");
    md.push_str("|-----------|-------|\n");
    for (dimension, score) in results.dimensions.iter() {
        md.push_str(&format!("| {dimension} | {score}% |\n"));
    }
    md.push('\n');

    push_list(&mut md, "Strengths", &results.strengths);
    push_list(&mut md, "Areas to improve", &results.improvements);
    push_list(&mut md, "Next steps", &results.next_steps);
    push_list(&mut md, "Suggested roles", &results.suggested_roles);

    md
}

fn push_list(md: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    md.push_str(&format!("## {title}\n\n"));
    for item in items {
        md.push_str(&format!("- {item}\n"));
    }
    md.push('\n');
}

/// Write a markdown report to a file.
pub fn write_markdown_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    let md = render(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, md)?;
    Ok(())
}
