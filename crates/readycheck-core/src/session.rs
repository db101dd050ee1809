//! Sequential assessment session: intro, three question sections, results.
//!
//! A small finite state machine over the static catalog. Answers are
//! collected strictly in catalog order, which guarantees exactly one
//! response per question without any dedup bookkeeping.

use std::time::Instant;

use crate::error::SessionError;
use crate::model::{AnswerValue, Catalog, Category, Question, Response};
use crate::results::Results;
use crate::scoring;

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Not started yet.
    Intro,
    /// Working through one section's questions.
    Section(Category),
    /// Every question answered; results are available.
    Complete,
}

/// One candidate's run through the assessment.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    stage: Stage,
    question_index: usize,
    responses: Vec<Response>,
    question_started: Option<Instant>,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            stage: Stage::Intro,
            question_index: 0,
            responses: Vec::new(),
            question_started: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Begin the assessment at the first non-empty section.
    pub fn start(&mut self) {
        self.responses.clear();
        self.question_index = 0;
        self.stage = self.first_stage();
        self.question_started = Some(Instant::now());
    }

    fn first_stage(&self) -> Stage {
        Category::ALL
            .into_iter()
            .find(|c| !self.catalog.section(*c).is_empty())
            .map_or(Stage::Complete, Stage::Section)
    }

    /// Section that follows `current`, skipping empty ones.
    fn next_stage(&self, current: Category) -> Stage {
        Category::ALL
            .into_iter()
            .skip_while(|c| *c != current)
            .skip(1)
            .find(|c| !self.catalog.section(*c).is_empty())
            .map_or(Stage::Complete, Stage::Section)
    }

    /// The question awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match self.stage {
            Stage::Section(category) => self.catalog.section(category).get(self.question_index),
            _ => None,
        }
    }

    /// Record an answer for the current question and advance.
    ///
    /// Returns the stage after advancing, so the caller can detect section
    /// transitions and completion.
    pub fn submit(&mut self, answer: AnswerValue) -> Result<Stage, SessionError> {
        let category = match self.stage {
            Stage::Intro => return Err(SessionError::NotStarted),
            Stage::Complete => return Err(SessionError::AlreadyComplete),
            Stage::Section(category) => category,
        };

        let section = self.catalog.section(category);
        let question = &section[self.question_index];
        let elapsed_ms = self
            .question_started
            .map(|t| t.elapsed().as_millis() as u64);

        self.responses.push(Response {
            question_id: question.id.clone(),
            answer,
            elapsed_ms,
        });

        self.question_index += 1;
        if self.question_index >= section.len() {
            self.question_index = 0;
            self.stage = self.next_stage(category);
        }
        self.question_started = Some(Instant::now());

        Ok(self.stage)
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// Scored results, available once the session is complete.
    pub fn results(&self) -> Option<Results> {
        match self.stage {
            Stage::Complete => Some(scoring::evaluate(&self.catalog, &self.responses)),
            _ => None,
        }
    }

    /// Answered share of the whole catalog, 0..=100.
    pub fn overall_progress(&self) -> f64 {
        if self.catalog.is_empty() {
            return 100.0;
        }
        self.responses.len() as f64 / self.catalog.len() as f64 * 100.0
    }

    /// Position within the current section, 0..=100.
    pub fn section_progress(&self) -> f64 {
        match self.stage {
            Stage::Section(category) => {
                let len = self.catalog.section(category).len();
                (self.question_index + 1) as f64 / len as f64 * 100.0
            }
            _ => 100.0,
        }
    }

    /// Back to the intro, discarding all answers.
    pub fn reset(&mut self) {
        self.stage = Stage::Intro;
        self.question_index = 0;
        self.responses.clear();
        self.question_started = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use crate::results::Recommendation;

    fn answer_for(question: &Question) -> AnswerValue {
        match question.kind {
            crate::model::QuestionKind::ScaledRating => AnswerValue::Rating(question.scale),
            _ => AnswerValue::Choice(
                question
                    .answer_key
                    .clone()
                    .unwrap_or_else(|| question.options[0].clone()),
            ),
        }
    }

    #[test]
    fn submit_before_start_is_an_error() {
        let mut session = Session::new(builtin());
        assert_eq!(session.stage(), Stage::Intro);
        assert_eq!(
            session.submit(AnswerValue::Rating(3)),
            Err(SessionError::NotStarted)
        );
    }

    #[test]
    fn sections_progress_in_order() {
        let mut session = Session::new(builtin());
        session.start();
        assert_eq!(session.stage(), Stage::Section(Category::TraitSurvey));

        let mut seen = vec![session.stage()];
        while session.stage() != Stage::Complete {
            let answer = answer_for(session.current_question().unwrap());
            let stage = session.submit(answer).unwrap();
            if seen.last() != Some(&stage) {
                seen.push(stage);
            }
        }

        assert_eq!(
            seen,
            vec![
                Stage::Section(Category::TraitSurvey),
                Stage::Section(Category::KnowledgeCheck),
                Stage::Section(Category::Readiness),
                Stage::Complete,
            ]
        );
    }

    #[test]
    fn complete_session_yields_results_once_per_question() {
        let mut session = Session::new(builtin());
        session.start();
        assert!(session.results().is_none());

        while let Some(question) = session.current_question() {
            let answer = answer_for(question);
            session.submit(answer).unwrap();
        }

        assert_eq!(session.responses().len(), session.catalog().len());
        let results = session.results().expect("session complete");
        assert_eq!(results.knowledge_score, 100);
        assert_eq!(results.recommendation, Recommendation::StrongFit);

        assert_eq!(
            session.submit(AnswerValue::Rating(1)),
            Err(SessionError::AlreadyComplete)
        );
    }

    #[test]
    fn progress_tracks_answered_share() {
        let mut session = Session::new(builtin());
        session.start();
        assert_eq!(session.overall_progress(), 0.0);

        let answer = answer_for(session.current_question().unwrap());
        session.submit(answer).unwrap();
        let expected = 100.0 / session.catalog().len() as f64;
        assert!((session.overall_progress() - expected).abs() < 1e-9);
    }

    #[test]
    fn reset_discards_answers() {
        let mut session = Session::new(builtin());
        session.start();
        let answer = answer_for(session.current_question().unwrap());
        session.submit(answer).unwrap();

        session.reset();
        assert_eq!(session.stage(), Stage::Intro);
        assert!(session.responses().is_empty());
    }

    #[test]
    fn empty_sections_are_skipped() {
        let mut catalog = builtin();
        catalog.knowledge_check.clear();
        let mut session = Session::new(catalog);
        session.start();

        let mut stage = session.stage();
        while stage == Stage::Section(Category::TraitSurvey) {
            let answer = answer_for(session.current_question().unwrap());
            stage = session.submit(answer).unwrap();
        }
        assert_eq!(stage, Stage::Section(Category::Readiness));
    }
}
