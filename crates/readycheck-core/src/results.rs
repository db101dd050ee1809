//! Assessment result types.
//!
//! A [`Results`] value is produced exactly once per evaluation and is
//! immutable afterwards; every field is derived by [`crate::scoring`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Dimension;

/// Three-way fit recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    /// Ready to pursue the role now.
    StrongFit,
    /// Potential, with targeted development first.
    ConditionalFit,
    /// Better served by an adjacent path for now.
    WeakFit,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::StrongFit => write!(f, "strong fit"),
            Recommendation::ConditionalFit => write!(f, "conditional fit"),
            Recommendation::WeakFit => write!(f, "weak fit"),
        }
    }
}

impl Recommendation {
    /// Short headline used by the presentation layer.
    pub fn headline(&self) -> &'static str {
        match self {
            Recommendation::StrongFit => "Ready for AI Ops Role",
            Recommendation::ConditionalFit => "Potential with Development",
            Recommendation::WeakFit => "Consider Alternative Paths",
        }
    }
}

/// The six readiness-dimension scores, rounded to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub will: u32,
    pub interest: u32,
    pub skill: u32,
    pub cognitive: u32,
    pub ability: u32,
    pub real_world: u32,
}

impl DimensionScores {
    /// Score for one dimension.
    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Will => self.will,
            Dimension::Interest => self.interest,
            Dimension::Skill => self.skill,
            Dimension::Cognitive => self.cognitive,
            Dimension::Ability => self.ability,
            Dimension::RealWorld => self.real_world,
        }
    }

    /// Mean of the six rounded scores.
    pub fn mean(&self) -> f64 {
        let sum = self.will + self.interest + self.skill + self.cognitive + self.ability
            + self.real_world;
        f64::from(sum) / 6.0
    }

    /// (dimension, score) pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u32)> + '_ {
        Dimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}

/// Complete assessment results, as consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Results {
    /// Trait-survey fit, 0..=100.
    pub trait_score: u32,
    /// Knowledge-check fit, 0..=100.
    pub knowledge_score: u32,
    /// Per-dimension readiness scores.
    pub dimensions: DimensionScores,
    /// Weighted overall score, 0..=100.
    pub overall_score: u32,
    /// Three-way classification.
    pub recommendation: Recommendation,
    /// Identified strengths. May be empty.
    pub strengths: Vec<String>,
    /// Identified improvement areas. May be empty.
    pub improvements: Vec<String>,
    /// Recommended next steps, keyed by the recommendation.
    pub next_steps: Vec<String>,
    /// Suggested roles, keyed by the recommendation.
    pub suggested_roles: Vec<String>,
}
