//! Subcommand implementations.

use std::path::Path;

use anyhow::Result;

use readycheck_core::catalog;
use readycheck_core::model::Catalog;
use readycheck_core::parser;
use readycheck_core::report::AssessmentReport;

pub mod init;
pub mod questions;
pub mod score;
pub mod take;
pub mod validate;

/// Load a catalog from a TOML path, or fall back to the built-in bank.
/// Validation warnings are surfaced but never fatal.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => parser::parse_catalog(path)?,
        None => catalog::builtin(),
    };

    for warning in parser::validate_catalog(&catalog) {
        match &warning.question_id {
            Some(id) => tracing::warn!("catalog warning [{id}]: {}", warning.message),
            None => tracing::warn!("catalog warning: {}", warning.message),
        }
    }

    Ok(catalog)
}

/// Print the results summary table and insight lists.
pub(crate) fn print_summary(report: &AssessmentReport) {
    use comfy_table::{Cell, Table};

    let results = &report.results;

    let mut table = Table::new();
    table.set_header(vec!["Aggregate", "Score"]);
    table.add_row(vec![
        Cell::new("Trait fit"),
        Cell::new(format!("{}%", results.trait_score)),
    ]);
    table.add_row(vec![
        Cell::new("Knowledge fit"),
        Cell::new(format!("{}%", results.knowledge_score)),
    ]);
    for (dimension, score) in results.dimensions.iter() {
        table.add_row(vec![
            Cell::new(format!("Readiness: {dimension}")),
            Cell::new(format!("{score}%")),
        ]);
    }
    table.add_row(vec![
        Cell::new("Overall"),
        Cell::new(format!("{}%", results.overall_score)),
    ]);

    eprintln!("\n{table}");
    eprintln!(
        "\nRecommendation: {} ({})",
        results.recommendation,
        results.recommendation.headline()
    );

    print_list("Strengths", &results.strengths);
    print_list("Areas to improve", &results.improvements);
    print_list("Next steps", &results.next_steps);
    print_list("Suggested roles", &results.suggested_roles);
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    eprintln!("\n{title}:");
    for item in items {
        eprintln!("  - {item}");
    }
}

/// Write the report in the requested formats under `output`.
pub(crate) fn write_report(report: &AssessmentReport, output: &Path, format: &str) -> Result<()> {
    std::fs::create_dir_all(output)?;
    let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "markdown", "html"]
    } else {
        format.split(',').map(|s| s.trim()).collect()
    };

    for fmt in &formats {
        match *fmt {
            "json" => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Results saved to: {}", path.display());
            }
            "markdown" | "md" => {
                let path = output.join(format!("report-{timestamp}.md"));
                readycheck_report::markdown::write_markdown_report(report, &path)?;
                eprintln!("Markdown report: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("report-{timestamp}.html"));
                readycheck_report::html::write_html_report(report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}
