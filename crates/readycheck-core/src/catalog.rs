//! Built-in AI Ops readiness question bank.
//!
//! Pure data. Custom catalogs can be loaded from TOML via [`crate::parser`];
//! this module provides the default bank shipped with the tool.

use crate::model::{Catalog, Category, Dimension, Question, QuestionKind};

fn rating(id: &str, category: Category, dimension: Option<Dimension>, prompt: &str) -> Question {
    Question {
        id: id.into(),
        kind: QuestionKind::ScaledRating,
        category,
        dimension,
        prompt: prompt.into(),
        options: Vec::new(),
        scale: 5,
        answer_key: None,
        points: None,
    }
}

fn forced_choice(
    id: &str,
    category: Category,
    dimension: Option<Dimension>,
    prompt: &str,
    options: &[&str],
) -> Question {
    Question {
        id: id.into(),
        kind: QuestionKind::ForcedChoice,
        category,
        dimension,
        prompt: prompt.into(),
        options: options.iter().map(|s| s.to_string()).collect(),
        scale: 5,
        answer_key: None,
        points: None,
    }
}

fn knowledge(id: &str, prompt: &str, options: &[&str], answer_key: &str) -> Question {
    Question {
        id: id.into(),
        kind: QuestionKind::SingleChoice,
        category: Category::KnowledgeCheck,
        dimension: None,
        prompt: prompt.into(),
        options: options.iter().map(|s| s.to_string()).collect(),
        scale: 5,
        answer_key: Some(answer_key.into()),
        points: Some(10),
    }
}

/// The default AI Ops readiness catalog.
pub fn builtin() -> Catalog {
    Catalog {
        id: "aiops-readiness".into(),
        name: "AI Ops Engineer Readiness Assessment".into(),
        trait_survey: vec![
            rating(
                "psy-1",
                Category::TraitSurvey,
                None,
                "I enjoy creating automated workflows for complex systems.",
            ),
            rating(
                "psy-2",
                Category::TraitSurvey,
                None,
                "I prefer working on well-defined tasks rather than open-ended exploration.",
            ),
            forced_choice(
                "psy-3",
                Category::TraitSurvey,
                None,
                "What motivates you most about AI Ops engineering?",
                &[
                    "Building robust systems that never fail",
                    "Being at the cutting edge of AI technology",
                    "Solving complex technical challenges",
                    "Enabling others to deploy AI solutions",
                ],
            ),
            rating(
                "psy-4",
                Category::TraitSurvey,
                None,
                "I can work for hours debugging a complex system issue.",
            ),
            rating(
                "psy-5",
                Category::TraitSurvey,
                None,
                "I enjoy explaining technical concepts to non-technical team members.",
            ),
            forced_choice(
                "psy-6",
                Category::TraitSurvey,
                None,
                "Which scenario appeals to you more?",
                &[
                    "Optimizing an existing AI pipeline for better performance",
                    "Designing a completely new deployment architecture",
                    "Troubleshooting production issues under pressure",
                    "Researching new tools and technologies",
                ],
            ),
        ],
        knowledge_check: vec![
            knowledge(
                "tech-1",
                "What is the primary purpose of a model registry in AI Ops?",
                &[
                    "To store training data",
                    "To version and manage ML models",
                    "To monitor model performance",
                    "To deploy models to production",
                ],
                "To version and manage ML models",
            ),
            knowledge(
                "tech-2",
                "Which Kubernetes resource is most appropriate for deploying a stateless ML model API?",
                &["StatefulSet", "DaemonSet", "Deployment", "Job"],
                "Deployment",
            ),
            knowledge(
                "tech-3",
                "What does \"model drift\" refer to in AI Ops?",
                &[
                    "The model moving between servers",
                    "Changes in model performance over time",
                    "The gradual degradation of hardware",
                    "Code changes in the model implementation",
                ],
                "Changes in model performance over time",
            ),
            knowledge(
                "tech-4",
                "In a CI/CD pipeline for ML models, what should trigger a model redeployment?",
                &[
                    "Every code commit",
                    "Model validation passing quality gates",
                    "Daily schedule",
                    "Manual approval only",
                ],
                "Model validation passing quality gates",
            ),
            knowledge(
                "tech-5",
                "Which tool is commonly used for monitoring ML model performance in production?",
                &["Jenkins", "Prometheus + Grafana", "Git", "Jupyter Notebook"],
                "Prometheus + Grafana",
            ),
        ],
        readiness: vec![
            rating(
                "rdy-will-1",
                Category::Readiness,
                Some(Dimension::Will),
                "How many hours per week do you currently spend learning about AI/ML technologies?",
            ),
            rating(
                "rdy-interest-1",
                Category::Readiness,
                Some(Dimension::Interest),
                "I regularly follow AI Ops blogs, podcasts, or communities.",
            ),
            forced_choice(
                "rdy-skill-1",
                Category::Readiness,
                Some(Dimension::Skill),
                "Rate your current skill level with Docker containers:",
                &[
                    "Never used Docker",
                    "Basic: Can run existing containers",
                    "Intermediate: Can write Dockerfiles",
                    "Advanced: Can optimize multi-stage builds",
                    "Expert: Can design container architectures",
                ],
            ),
            forced_choice(
                "rdy-cognitive-1",
                Category::Readiness,
                Some(Dimension::Cognitive),
                "A production ML model starts giving inconsistent results. What's your first step?",
                &[
                    "Restart the service",
                    "Check recent data changes and model inputs",
                    "Rollback to the previous model version",
                    "Contact the data science team immediately",
                ],
            ),
            rating(
                "rdy-ability-1",
                Category::Readiness,
                Some(Dimension::Ability),
                "I actively seek feedback on my technical work and use it to improve.",
            ),
            forced_choice(
                "rdy-real-1",
                Category::Readiness,
                Some(Dimension::RealWorld),
                "Which AI Ops challenge interests you most?",
                &[
                    "Scaling models to handle millions of requests",
                    "Ensuring model fairness and bias detection",
                    "Optimizing infrastructure costs",
                    "Building robust monitoring and alerting systems",
                ],
            ),
        ],
    }
}
