//! The `readycheck questions` command: list the catalog.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use readycheck_core::model::Category;

use super::load_catalog;

pub fn execute(catalog_path: Option<PathBuf>, category: Option<String>) -> Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    let filter: Option<Category> = category
        .map(|c| c.parse().map_err(|e: String| anyhow::anyhow!("{}", e)))
        .transpose()?;

    let mut table = Table::new();
    table.set_header(vec!["Id", "Category", "Kind", "Dimension", "Prompt"]);

    let mut shown = 0usize;
    for question in catalog.iter() {
        if filter.is_some_and(|c| question.category != c) {
            continue;
        }
        shown += 1;
        table.add_row(vec![
            Cell::new(&question.id),
            Cell::new(question.category),
            Cell::new(question.kind),
            Cell::new(
                question
                    .dimension
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".into()),
            ),
            Cell::new(&question.prompt),
        ]);
    }

    println!("{table}");
    println!("{shown} question(s)");

    Ok(())
}
