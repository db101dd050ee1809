//! TOML catalog parser.
//!
//! Loads question catalogs from TOML files and directories, and validates
//! them. Validation produces warnings rather than errors: the scoring engine
//! tolerates imperfect catalogs, but authors want to know about them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Catalog, Category, Dimension, Question, QuestionKind};

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    catalog: TomlCatalogHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    kind: String,
    category: String,
    #[serde(default)]
    dimension: Option<String>,
    prompt: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default = "default_scale")]
    scale: u32,
    #[serde(default)]
    answer_key: Option<String>,
    #[serde(default)]
    points: Option<u32>,
}

fn default_scale() -> u32 {
    5
}

/// Parse a single TOML file into a `Catalog`.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `Catalog` (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut catalog = Catalog {
        id: parsed.catalog.id,
        name: parsed.catalog.name,
        trait_survey: Vec::new(),
        knowledge_check: Vec::new(),
        readiness: Vec::new(),
    };

    for q in parsed.questions {
        let category: Category = q
            .category
            .parse()
            .map_err(|e: String| anyhow::anyhow!("question '{}': {}", q.id, e))?;
        let kind: QuestionKind = parse_kind(&q.kind)
            .map_err(|e| anyhow::anyhow!("question '{}': {}", q.id, e))?;
        let dimension: Option<Dimension> = q
            .dimension
            .map(|d| {
                d.parse()
                    .map_err(|e: String| anyhow::anyhow!("question '{}': {}", q.id, e))
            })
            .transpose()?;

        let question = Question {
            id: q.id,
            kind,
            category,
            dimension,
            prompt: q.prompt,
            options: q.options,
            scale: q.scale,
            answer_key: q.answer_key,
            points: q.points,
        };

        match category {
            Category::TraitSurvey => catalog.trait_survey.push(question),
            Category::KnowledgeCheck => catalog.knowledge_check.push(question),
            Category::Readiness => catalog.readiness.push(question),
        }
    }

    Ok(catalog)
}

fn parse_kind(s: &str) -> Result<QuestionKind, String> {
    match s.to_lowercase().as_str() {
        "scaled-rating" | "rating" | "likert" => Ok(QuestionKind::ScaledRating),
        "single-choice" => Ok(QuestionKind::SingleChoice),
        "forced-choice" => Ok(QuestionKind::ForcedChoice),
        other => Err(format!("unknown question kind: {other}")),
    }
}

/// Recursively load all `.toml` catalog files from a directory.
pub fn load_catalog_directory(dir: &Path) -> Result<Vec<Catalog>> {
    let mut catalogs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            catalogs.extend(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_catalog(&path) {
                Ok(catalog) => catalogs.push(catalog),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(catalogs)
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog against the data-model invariants.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate question IDs
    let mut seen_ids = std::collections::HashSet::new();
    for question in catalog.iter() {
        if !seen_ids.insert(&question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!("duplicate question ID: {}", question.id),
            });
        }
    }

    for question in catalog.iter() {
        if question.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "prompt is empty".into(),
            });
        }

        match question.kind {
            QuestionKind::ScaledRating => {
                if question.scale < 2 {
                    warnings.push(ValidationWarning {
                        question_id: Some(question.id.clone()),
                        message: format!("scale must be at least 2, got {}", question.scale),
                    });
                }
            }
            QuestionKind::SingleChoice | QuestionKind::ForcedChoice => {
                if question.options.is_empty() {
                    warnings.push(ValidationWarning {
                        question_id: Some(question.id.clone()),
                        message: "choice question has no options".into(),
                    });
                }
            }
        }
    }

    // Every knowledge check needs a canonical correct choice
    for question in &catalog.knowledge_check {
        match &question.answer_key {
            None => warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "knowledge-check question has no answer_key".into(),
            }),
            Some(key) if !question.options.is_empty() && !question.options.contains(key) => {
                warnings.push(ValidationWarning {
                    question_id: Some(question.id.clone()),
                    message: "answer_key is not among the question's options".into(),
                });
            }
            Some(_) => {}
        }
    }

    // Readiness questions are scored per dimension
    for question in &catalog.readiness {
        if question.dimension.is_none() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "readiness question has no dimension".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[catalog]
id = "mini"
name = "Mini Catalog"

[[questions]]
id = "psy-1"
kind = "scaled-rating"
category = "trait-survey"
prompt = "I enjoy automating things."
scale = 5

[[questions]]
id = "tech-1"
kind = "single-choice"
category = "knowledge-check"
prompt = "Pick the container orchestrator."
options = ["Kubernetes", "Git", "Excel"]
answer_key = "Kubernetes"
points = 10

[[questions]]
id = "rdy-will-1"
kind = "scaled-rating"
category = "readiness"
dimension = "will"
prompt = "I put in the hours."
"#;

    #[test]
    fn parse_valid_toml() {
        let catalog = parse_catalog_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(catalog.id, "mini");
        assert_eq!(catalog.trait_survey.len(), 1);
        assert_eq!(catalog.knowledge_check.len(), 1);
        assert_eq!(catalog.readiness.len(), 1);
        assert_eq!(
            catalog.knowledge_check[0].answer_key.as_deref(),
            Some("Kubernetes")
        );
        assert_eq!(
            catalog.readiness[0].dimension,
            Some(Dimension::Will)
        );
        // Default scale applies when omitted.
        assert_eq!(catalog.readiness[0].scale, 5);
    }

    #[test]
    fn parse_unknown_category_fails() {
        let toml = r#"
[catalog]
id = "bad"
name = "Bad"

[[questions]]
id = "q1"
kind = "scaled-rating"
category = "astrology"
prompt = "?"
"#;
        let result = parse_catalog_str(toml, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_catalog_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_duplicate_ids() {
        let toml = r#"
[catalog]
id = "dupes"
name = "Dupes"

[[questions]]
id = "same"
kind = "scaled-rating"
category = "trait-survey"
prompt = "First"

[[questions]]
id = "same"
kind = "scaled-rating"
category = "trait-survey"
prompt = "Second"
"#;
        let catalog = parse_catalog_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_catalog(&catalog);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_knowledge_check_without_answer_key() {
        let toml = r#"
[catalog]
id = "no-key"
name = "No Key"

[[questions]]
id = "tech-1"
kind = "single-choice"
category = "knowledge-check"
prompt = "Pick one."
options = ["a", "b"]
"#;
        let catalog = parse_catalog_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_catalog(&catalog);
        assert!(warnings.iter().any(|w| w.message.contains("answer_key")));
    }

    #[test]
    fn validate_answer_key_must_be_an_option() {
        let toml = r#"
[catalog]
id = "stray-key"
name = "Stray Key"

[[questions]]
id = "tech-1"
kind = "single-choice"
category = "knowledge-check"
prompt = "Pick one."
options = ["a", "b"]
answer_key = "c"
"#;
        let catalog = parse_catalog_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_catalog(&catalog);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("not among the question's options")));
    }

    #[test]
    fn validate_degenerate_scale() {
        let toml = r#"
[catalog]
id = "tiny-scale"
name = "Tiny Scale"

[[questions]]
id = "psy-1"
kind = "scaled-rating"
category = "trait-survey"
prompt = "Agree?"
scale = 1
"#;
        let catalog = parse_catalog_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_catalog(&catalog);
        assert!(warnings.iter().any(|w| w.message.contains("scale")));
    }

    #[test]
    fn validate_readiness_without_dimension() {
        let toml = r#"
[catalog]
id = "no-dim"
name = "No Dim"

[[questions]]
id = "rdy-1"
kind = "scaled-rating"
category = "readiness"
prompt = "Ready?"
"#;
        let catalog = parse_catalog_str(toml, &PathBuf::from("test.toml")).unwrap();
        let warnings = validate_catalog(&catalog);
        assert!(warnings.iter().any(|w| w.message.contains("dimension")));
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("test.toml");
        std::fs::write(&file_path, VALID_TOML).unwrap();

        let catalogs = load_catalog_directory(dir.path()).unwrap();
        assert_eq!(catalogs.len(), 1);
        assert_eq!(catalogs[0].id, "mini");
    }
}
