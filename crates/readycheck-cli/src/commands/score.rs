//! The `readycheck score` command: score an already-collected responses file.

use std::path::PathBuf;

use anyhow::{Context, Result};

use readycheck_core::model::Response;
use readycheck_core::report::AssessmentReport;
use readycheck_core::scoring;

use super::{load_catalog, print_summary, write_report};

pub fn execute(
    responses_path: PathBuf,
    catalog_path: Option<PathBuf>,
    output: PathBuf,
    format: String,
) -> Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    let content = std::fs::read_to_string(&responses_path)
        .with_context(|| format!("failed to read responses from {}", responses_path.display()))?;
    let responses: Vec<Response> =
        serde_json::from_str(&content).context("failed to parse responses JSON")?;

    eprintln!(
        "Scoring {} response(s) against catalog '{}' ({} questions)",
        responses.len(),
        catalog.name,
        catalog.len()
    );

    let results = scoring::evaluate(&catalog, &responses);
    let report = AssessmentReport::new(&catalog, &responses, results);

    print_summary(&report);
    write_report(&report, &output, &format)?;

    Ok(())
}
