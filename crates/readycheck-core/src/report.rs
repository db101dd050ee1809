//! Assessment report with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Catalog, Response};
use crate::results::Results;

/// A complete, persistable record of one assessment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the catalog the candidate was assessed against.
    pub catalog: CatalogSummary,
    /// Number of responses collected.
    pub response_count: usize,
    /// Wall-clock duration of the run in milliseconds, if tracked.
    #[serde(default)]
    pub duration_ms: Option<u64>,
    /// The scored results.
    pub results: Results,
}

/// Summary of a catalog (without the full question definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
}

impl AssessmentReport {
    /// Build a report for one evaluation run.
    pub fn new(catalog: &Catalog, responses: &[Response], results: Results) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            catalog: CatalogSummary {
                id: catalog.id.clone(),
                name: catalog.name.clone(),
                question_count: catalog.len(),
            },
            response_count: responses.len(),
            duration_ms: None,
            results,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use crate::scoring::evaluate;

    #[test]
    fn report_captures_catalog_summary() {
        let catalog = builtin();
        let results = evaluate(&catalog, &[]);
        let report = AssessmentReport::new(&catalog, &[], results);

        assert_eq!(report.catalog.id, "aiops-readiness");
        assert_eq!(report.catalog.question_count, 17);
        assert_eq!(report.response_count, 0);
    }

    #[test]
    fn json_roundtrip() {
        let catalog = builtin();
        let results = evaluate(&catalog, &[]);
        let report = AssessmentReport::new(&catalog, &[], results);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        report.save_json(&path).unwrap();
        let loaded = AssessmentReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.results, report.results);
    }

    #[test]
    fn load_missing_file_errors() {
        let err = AssessmentReport::load_json(Path::new("no_such_report.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read report"));
    }
}
