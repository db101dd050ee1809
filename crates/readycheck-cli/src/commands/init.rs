//! The `readycheck init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create catalog.toml
    if std::path::Path::new("catalog.toml").exists() {
        println!("catalog.toml already exists, skipping.");
    } else {
        std::fs::write("catalog.toml", STARTER_CATALOG)?;
        println!("Created catalog.toml");
    }

    // Create sample responses
    if std::path::Path::new("responses.sample.json").exists() {
        println!("responses.sample.json already exists, skipping.");
    } else {
        std::fs::write("responses.sample.json", SAMPLE_RESPONSES)?;
        println!("Created responses.sample.json");
    }

    println!("\nNext steps:");
    println!("  1. Edit catalog.toml with your own questions");
    println!("  2. Run: readycheck validate --catalog catalog.toml");
    println!("  3. Run: readycheck take --catalog catalog.toml");
    println!("  4. Or score collected answers: readycheck score --responses responses.sample.json --catalog catalog.toml");

    Ok(())
}

const STARTER_CATALOG: &str = r#"# readycheck catalog

[catalog]
id = "starter"
name = "Starter Readiness Catalog"

[[questions]]
id = "psy-1"
kind = "scaled-rating"
category = "trait-survey"
prompt = "I enjoy creating automated workflows for complex systems."
scale = 5

[[questions]]
id = "psy-2"
kind = "forced-choice"
category = "trait-survey"
prompt = "Which scenario appeals to you more?"
options = [
    "Optimizing an existing pipeline for better performance",
    "Designing a completely new architecture",
]

[[questions]]
id = "tech-1"
kind = "single-choice"
category = "knowledge-check"
prompt = "What is the primary purpose of a model registry?"
options = [
    "To store training data",
    "To version and manage ML models",
    "To deploy models to production",
]
answer_key = "To version and manage ML models"
points = 10

[[questions]]
id = "rdy-will-1"
kind = "scaled-rating"
category = "readiness"
dimension = "will"
prompt = "How many hours per week do you spend learning new technologies?"
scale = 5

[[questions]]
id = "rdy-skill-1"
kind = "forced-choice"
category = "readiness"
dimension = "skill"
prompt = "Rate your current skill level with Docker containers:"
options = [
    "Never used Docker",
    "Basic: Can run existing containers",
    "Advanced: Can optimize multi-stage builds",
]
"#;

const SAMPLE_RESPONSES: &str = r#"[
  { "question_id": "psy-1", "answer": 4 },
  { "question_id": "psy-2", "answer": "Designing a completely new architecture" },
  { "question_id": "tech-1", "answer": "To version and manage ML models" },
  { "question_id": "rdy-will-1", "answer": 5 },
  { "question_id": "rdy-skill-1", "answer": "Basic: Can run existing containers" }
]
"#;
