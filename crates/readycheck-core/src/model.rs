//! Core data model types for readycheck.
//!
//! These are the fundamental types the entire readycheck system uses to
//! represent questions, collected responses, and the question catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the three assessment sections a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Personality/motivation fit questions.
    TraitSurvey,
    /// Questions with one canonical correct answer.
    KnowledgeCheck,
    /// Questions tagged with one of the six readiness dimensions.
    Readiness,
}

impl Category {
    /// Section order as presented to the candidate.
    pub const ALL: [Category; 3] = [
        Category::TraitSurvey,
        Category::KnowledgeCheck,
        Category::Readiness,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::TraitSurvey => write!(f, "trait-survey"),
            Category::KnowledgeCheck => write!(f, "knowledge-check"),
            Category::Readiness => write!(f, "readiness"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trait-survey" | "trait" => Ok(Category::TraitSurvey),
            "knowledge-check" | "knowledge" => Ok(Category::KnowledgeCheck),
            "readiness" => Ok(Category::Readiness),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// The six fixed readiness dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl Dimension {
    /// All six dimensions, in reporting order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Will,
        Dimension::Interest,
        Dimension::Skill,
        Dimension::Cognitive,
        Dimension::Ability,
        Dimension::RealWorld,
    ];
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Will => write!(f, "will"),
            Dimension::Interest => write!(f, "interest"),
            Dimension::Skill => write!(f, "skill"),
            Dimension::Cognitive => write!(f, "cognitive"),
            Dimension::Ability => write!(f, "ability"),
            Dimension::RealWorld => write!(f, "real-world"),
        }
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "will" => Ok(Dimension::Will),
            "interest" => Ok(Dimension::Interest),
            "skill" => Ok(Dimension::Skill),
            "cognitive" => Ok(Dimension::Cognitive),
            "ability" => Ok(Dimension::Ability),
            "real-world" | "realworld" => Ok(Dimension::RealWorld),
            other => Err(format!("unknown dimension: {other}")),
        }
    }
}

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Integer agreement rating on a 1..=scale scale.
    ScaledRating,
    /// One correct option among several (knowledge checks).
    SingleChoice,
    /// One of several unranked options, none "correct".
    ForcedChoice,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::ScaledRating => write!(f, "scaled-rating"),
            QuestionKind::SingleChoice => write!(f, "single-choice"),
            QuestionKind::ForcedChoice => write!(f, "forced-choice"),
        }
    }
}

/// A single question in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique, category-prefixed identifier (e.g. "psy-3", "rdy-will-1").
    pub id: String,
    /// How the question is answered.
    pub kind: QuestionKind,
    /// Which section the question belongs to.
    pub category: Category,
    /// Readiness dimension, for readiness-framework questions.
    #[serde(default)]
    pub dimension: Option<Dimension>,
    /// The prompt shown to the candidate.
    pub prompt: String,
    /// Choice labels, for choice questions.
    #[serde(default)]
    pub options: Vec<String>,
    /// Rating upper bound for scaled-rating questions.
    #[serde(default = "default_scale")]
    pub scale: u32,
    /// Canonical correct choice, for knowledge-check questions.
    #[serde(default)]
    pub answer_key: Option<String>,
    /// Point weight. Carried on the record but not used by scoring.
    #[serde(default)]
    pub points: Option<u32>,
}

fn default_scale() -> u32 {
    5
}

/// An answer value: either an integer rating or a selected choice label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Rating(u32),
    Choice(String),
}

impl AnswerValue {
    /// The answer as a rating, if it is one. A `Choice` holding a decimal
    /// integer string also counts, matching the original collector's
    /// tolerance for stringly-typed ratings.
    pub fn as_rating(&self) -> Option<u32> {
        match self {
            AnswerValue::Rating(v) => Some(*v),
            AnswerValue::Choice(s) => s.trim().parse().ok(),
        }
    }

    /// The answer as a choice label, if it is one.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            AnswerValue::Choice(s) => Some(s),
            AnswerValue::Rating(_) => None,
        }
    }
}

/// One collected answer to one catalog question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Id of the question being answered.
    pub question_id: String,
    /// The answer value.
    pub answer: AnswerValue,
    /// Time spent on the question, if the collector tracked it.
    #[serde(default)]
    pub elapsed_ms: Option<u64>,
}

/// The full question catalog: three ordered, static section lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Trait-survey section.
    #[serde(default)]
    pub trait_survey: Vec<Question>,
    /// Knowledge-check section.
    #[serde(default)]
    pub knowledge_check: Vec<Question>,
    /// Readiness-framework section.
    #[serde(default)]
    pub readiness: Vec<Question>,
}

impl Catalog {
    /// Questions in one section, in presentation order.
    pub fn section(&self, category: Category) -> &[Question] {
        match category {
            Category::TraitSurvey => &self.trait_survey,
            Category::KnowledgeCheck => &self.knowledge_check,
            Category::Readiness => &self.readiness,
        }
    }

    /// All questions across the three sections, in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.trait_survey
            .iter()
            .chain(self.knowledge_check.iter())
            .chain(self.readiness.iter())
    }

    /// Total question count.
    pub fn len(&self) -> usize {
        self.trait_survey.len() + self.knowledge_check.len() + self.readiness.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a question by id.
    pub fn find(&self, id: &str) -> Option<&Question> {
        self.iter().find(|q| q.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display_and_parse() {
        assert_eq!(Category::TraitSurvey.to_string(), "trait-survey");
        assert_eq!(Category::KnowledgeCheck.to_string(), "knowledge-check");
        assert_eq!(
            "trait-survey".parse::<Category>().unwrap(),
            Category::TraitSurvey
        );
        assert_eq!(
            "Knowledge".parse::<Category>().unwrap(),
            Category::KnowledgeCheck
        );
        assert!("psychic".parse::<Category>().is_err());
    }

    #[test]
    fn dimension_display_and_parse() {
        assert_eq!(Dimension::RealWorld.to_string(), "real-world");
        assert_eq!("will".parse::<Dimension>().unwrap(), Dimension::Will);
        assert_eq!(
            "realWorld".parse::<Dimension>().unwrap(),
            Dimension::RealWorld
        );
        assert!("luck".parse::<Dimension>().is_err());
    }

    #[test]
    fn answer_value_as_rating() {
        assert_eq!(AnswerValue::Rating(4).as_rating(), Some(4));
        assert_eq!(AnswerValue::Choice("3".into()).as_rating(), Some(3));
        assert_eq!(AnswerValue::Choice("Deployment".into()).as_rating(), None);
    }

    #[test]
    fn answer_value_untagged_serde() {
        let rating: AnswerValue = serde_json::from_str("4").unwrap();
        assert_eq!(rating, AnswerValue::Rating(4));

        let choice: AnswerValue = serde_json::from_str("\"Deployment\"").unwrap();
        assert_eq!(choice, AnswerValue::Choice("Deployment".into()));
    }

    #[test]
    fn response_serde_roundtrip() {
        let response = Response {
            question_id: "psy-1".into(),
            answer: AnswerValue::Rating(5),
            elapsed_ms: Some(4200),
        };
        let json = serde_json::to_string(&response).unwrap();
        let deserialized: Response = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.question_id, "psy-1");
        assert_eq!(deserialized.answer, AnswerValue::Rating(5));
    }

    #[test]
    fn catalog_lookup_and_order() {
        let catalog = crate::catalog::builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.find("psy-1").is_some());
        assert!(catalog.find("nope").is_none());

        // Sections come back in presentation order.
        let ids: Vec<&str> = catalog.iter().map(|q| q.id.as_str()).collect();
        let first_tech = ids.iter().position(|id| id.starts_with("tech-")).unwrap();
        let first_rdy = ids.iter().position(|id| id.starts_with("rdy-")).unwrap();
        assert!(first_tech < first_rdy);
    }
}
