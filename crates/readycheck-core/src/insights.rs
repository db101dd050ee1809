//! Canned insight generation from the computed aggregates.
//!
//! Purely additive rule evaluation: each strength/improvement rule fires
//! independently, and the next-steps/suggested-roles lists are fixed content
//! keyed solely by the recommendation.

use crate::model::Dimension;
use crate::results::Recommendation;
use crate::scoring::Aggregates;

/// The four generated text lists.
#[derive(Debug, Clone, Default)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub next_steps: Vec<String>,
    pub suggested_roles: Vec<String>,
}

/// Evaluate the insight rule tables on the unrounded aggregates.
pub fn generate(aggregates: &Aggregates, recommendation: Recommendation) -> Insights {
    let mut insights = Insights::default();

    if aggregates.trait_fit >= 75.0 {
        insights
            .strengths
            .push("Strong personality fit for AI Ops role".into());
    }
    if aggregates.knowledge_fit >= 75.0 {
        insights
            .strengths
            .push("Excellent technical foundation".into());
    }
    if aggregates.dimension(Dimension::Will) >= 75.0 {
        insights.strengths.push("High motivation and drive".into());
    }
    if aggregates.dimension(Dimension::Interest) >= 75.0 {
        insights
            .strengths
            .push("Genuine interest in AI Operations".into());
    }

    if aggregates.knowledge_fit < 60.0 {
        insights
            .improvements
            .push("Strengthen technical knowledge in MLOps and infrastructure".into());
    }
    if aggregates.trait_fit < 60.0 {
        insights
            .improvements
            .push("Develop patience and systematic thinking skills".into());
    }
    if aggregates.dimension(Dimension::Skill) < 60.0 {
        insights
            .improvements
            .push("Build hands-on experience with AI/ML tools".into());
    }

    let (next_steps, suggested_roles): (&[&str], &[&str]) = match recommendation {
        Recommendation::StrongFit => (
            &[
                "Start applying for AI Ops Engineer positions",
                "Build a portfolio of MLOps projects",
                "Get certified in cloud platforms (AWS, GCP, Azure)",
            ],
            &["AI Ops Engineer", "MLOps Engineer", "ML Platform Engineer"],
        ),
        Recommendation::ConditionalFit => (
            &[
                "Complete foundational courses in MLOps",
                "Gain hands-on experience with Docker and Kubernetes",
                "Build 2-3 end-to-end ML deployment projects",
            ],
            &["Junior AI Ops Engineer", "DevOps Engineer", "Data Engineer"],
        ),
        Recommendation::WeakFit => (
            &[
                "Focus on programming fundamentals",
                "Learn Linux and command-line tools",
                "Consider starting with DevOps or Data Engineering",
            ],
            &["DevOps Engineer", "Data Engineer", "Software Developer"],
        ),
    };

    insights.next_steps = next_steps.iter().map(|s| s.to_string()).collect();
    insights.suggested_roles = suggested_roles.iter().map(|s| s.to_string()).collect();

    insights
}
