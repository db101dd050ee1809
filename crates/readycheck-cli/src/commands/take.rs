//! The `readycheck take` command: interactive assessment on the terminal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use readycheck_core::model::{AnswerValue, Question, QuestionKind};
use readycheck_core::report::AssessmentReport;
use readycheck_core::session::{Session, Stage};

use super::{load_catalog, print_summary, write_report};

pub fn execute(
    catalog_path: Option<PathBuf>,
    output: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", catalog.name);
    println!(
        "{} questions across three sections. Ratings are on a 1-5 agreement scale.",
        catalog.len()
    );
    print!("Press Enter to begin... ");
    io::stdout().flush()?;
    lines.next().context("input ended before the assessment started")??;

    let mut session = Session::new(catalog);
    session.start();
    let mut current_section = None;

    while let Some(question) = session.current_question() {
        if let Stage::Section(category) = session.stage() {
            if current_section != Some(category) {
                current_section = Some(category);
                println!("\n=== Section: {category} ===");
            }
        }

        let question = question.clone();
        let answer = prompt_answer(&question, &mut lines)?;
        session.submit(answer)?;
    }

    let results = session.results().context("assessment did not complete")?;
    let report = AssessmentReport::new(session.catalog(), session.responses(), results);

    print_summary(&report);
    if let Some(output) = output {
        write_report(&report, &output, &format)?;
    }

    Ok(())
}

/// Show one question and read a valid answer, re-prompting on bad input.
fn prompt_answer(
    question: &Question,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<AnswerValue> {
    println!("\n{}", question.prompt);

    match question.kind {
        QuestionKind::ScaledRating => loop {
            print!("  [1 = strongly disagree .. {} = strongly agree] > ", question.scale);
            io::stdout().flush()?;
            let line = lines.next().context("input ended mid-assessment")??;
            match line.trim().parse::<u32>() {
                Ok(value) if (1..=question.scale).contains(&value) => {
                    return Ok(AnswerValue::Rating(value));
                }
                _ => println!("  Please enter a number between 1 and {}.", question.scale),
            }
        },
        QuestionKind::SingleChoice | QuestionKind::ForcedChoice => loop {
            for (i, option) in question.options.iter().enumerate() {
                println!("  {}) {option}", i + 1);
            }
            print!("  > ");
            io::stdout().flush()?;
            let line = lines.next().context("input ended mid-assessment")??;
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=question.options.len()).contains(&n) => {
                    return Ok(AnswerValue::Choice(question.options[n - 1].clone()));
                }
                _ => println!(
                    "  Please enter a number between 1 and {}.",
                    question.options.len()
                ),
            }
        },
    }
}
