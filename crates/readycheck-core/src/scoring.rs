//! Response aggregation, normalization, and recommendation classification.
//!
//! The engine is a pure function of the catalog and the collected responses:
//! it never fails, unknown question ids are dropped, and absent sections fall
//! back to fixed defaults (0 for the trait/knowledge fits, 50 per readiness
//! dimension). All arithmetic stays in f64 until the [`Results`] boundary,
//! where scores are rounded to the nearest integer.

use crate::insights;
use crate::model::{AnswerValue, Catalog, Category, Dimension, Question, QuestionKind, Response};
use crate::results::{DimensionScores, Recommendation, Results};

/// Ratio accumulator for the trait-survey and readiness aggregates.
///
/// Scaled ratings contribute value/scale; choice questions contribute a
/// fixed 3/5 midpoint regardless of which option was picked (options are
/// unranked, so they are not differentiated for scoring).
#[derive(Debug, Clone, Copy, Default)]
struct RatioAcc {
    earned: f64,
    possible: f64,
}

impl RatioAcc {
    fn add(&mut self, question: &Question, answer: &AnswerValue) {
        match question.kind {
            QuestionKind::ScaledRating => {
                if let Some(value) = answer.as_rating() {
                    self.earned += f64::from(value);
                    self.possible += f64::from(question.scale);
                }
            }
            QuestionKind::SingleChoice | QuestionKind::ForcedChoice => {
                self.earned += 3.0;
                self.possible += 5.0;
            }
        }
    }

    /// Percentage score, or `default` if nothing was accumulated.
    fn percent_or(&self, default: f64) -> f64 {
        if self.possible == 0.0 {
            default
        } else {
            self.earned / self.possible * 100.0
        }
    }
}

/// Unrounded aggregates, prior to the `Results` rounding boundary.
#[derive(Debug, Clone, Copy)]
pub struct Aggregates {
    /// Trait-survey fit, 0.0..=100.0.
    pub trait_fit: f64,
    /// Knowledge-check fit, 0.0..=100.0.
    pub knowledge_fit: f64,
    /// Readiness-dimension scores, indexed in [`Dimension::ALL`] order.
    pub dimensions: [f64; 6],
}

fn dimension_index(dimension: Dimension) -> usize {
    match dimension {
        Dimension::Will => 0,
        Dimension::Interest => 1,
        Dimension::Skill => 2,
        Dimension::Cognitive => 3,
        Dimension::Ability => 4,
        Dimension::RealWorld => 5,
    }
}

impl Aggregates {
    /// Unrounded score for one readiness dimension.
    pub fn dimension(&self, dimension: Dimension) -> f64 {
        self.dimensions[dimension_index(dimension)]
    }

    /// Mean of the six dimension scores.
    pub fn dimension_mean(&self) -> f64 {
        self.dimensions.iter().sum::<f64>() / 6.0
    }

    /// Fixed linear weighting: knowledge fit counts the most.
    pub fn overall(&self) -> f64 {
        self.trait_fit * 0.30 + self.knowledge_fit * 0.40 + self.dimension_mean() * 0.30
    }
}

/// Aggregate the full response list into the three intermediate score sets.
pub fn aggregate(catalog: &Catalog, responses: &[Response]) -> Aggregates {
    let mut trait_acc = RatioAcc::default();
    let mut answered_checks = 0u32;
    let mut correct_checks = 0u32;
    let mut dimension_accs = [RatioAcc::default(); 6];

    for response in responses {
        let Some(question) = catalog.find(&response.question_id) else {
            tracing::debug!("dropping response for unknown question id '{}'", response.question_id);
            continue;
        };

        match question.category {
            Category::TraitSurvey => trait_acc.add(question, &response.answer),
            Category::KnowledgeCheck => {
                // Only questions with an answer key count toward the ratio.
                // Comparison is exact string equality, no partial credit.
                if let Some(key) = &question.answer_key {
                    answered_checks += 1;
                    if response.answer.as_choice() == Some(key.as_str()) {
                        correct_checks += 1;
                    }
                }
            }
            Category::Readiness => {
                if let Some(dimension) = question.dimension {
                    dimension_accs[dimension_index(dimension)].add(question, &response.answer);
                }
            }
        }
    }

    let knowledge_fit = if answered_checks == 0 {
        0.0
    } else {
        f64::from(correct_checks) / f64::from(answered_checks) * 100.0
    };

    let mut dimensions = [0.0; 6];
    for (i, acc) in dimension_accs.iter().enumerate() {
        // An unanswered dimension defaults to the neutral midpoint, not 0.
        dimensions[i] = acc.percent_or(50.0);
    }

    Aggregates {
        trait_fit: trait_acc.percent_or(0.0),
        knowledge_fit,
        dimensions,
    }
}

/// Classify the three aggregates into a recommendation.
///
/// Rules are evaluated in precedence order; threshold comparisons are
/// inclusive.
pub fn classify(overall: f64, knowledge_fit: f64, trait_fit: f64) -> Recommendation {
    if overall >= 75.0 && knowledge_fit >= 70.0 && trait_fit >= 65.0 {
        Recommendation::StrongFit
    } else if overall >= 60.0 && (knowledge_fit >= 50.0 || trait_fit >= 60.0) {
        Recommendation::ConditionalFit
    } else {
        Recommendation::WeakFit
    }
}

fn round_score(value: f64) -> u32 {
    value.round() as u32
}

/// Run the full scoring engine: aggregation, classification, and insight
/// generation. Deterministic and order-independent over `responses`.
pub fn evaluate(catalog: &Catalog, responses: &[Response]) -> Results {
    let aggregates = aggregate(catalog, responses);
    let overall = aggregates.overall();
    let recommendation = classify(overall, aggregates.knowledge_fit, aggregates.trait_fit);
    let insights = insights::generate(&aggregates, recommendation);

    Results {
        trait_score: round_score(aggregates.trait_fit),
        knowledge_score: round_score(aggregates.knowledge_fit),
        dimensions: DimensionScores {
            will: round_score(aggregates.dimension(Dimension::Will)),
            interest: round_score(aggregates.dimension(Dimension::Interest)),
            skill: round_score(aggregates.dimension(Dimension::Skill)),
            cognitive: round_score(aggregates.dimension(Dimension::Cognitive)),
            ability: round_score(aggregates.dimension(Dimension::Ability)),
            real_world: round_score(aggregates.dimension(Dimension::RealWorld)),
        },
        overall_score: round_score(overall),
        recommendation,
        strengths: insights.strengths,
        improvements: insights.improvements,
        next_steps: insights.next_steps,
        suggested_roles: insights.suggested_roles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;

    fn rating(question_id: &str, value: u32) -> Response {
        Response {
            question_id: question_id.into(),
            answer: AnswerValue::Rating(value),
            elapsed_ms: None,
        }
    }

    fn choice(question_id: &str, label: &str) -> Response {
        Response {
            question_id: question_id.into(),
            answer: AnswerValue::Choice(label.into()),
            elapsed_ms: None,
        }
    }

    /// Answer everything: max ratings, correct knowledge answers, first
    /// option for choice questions.
    fn perfect_responses(catalog: &Catalog) -> Vec<Response> {
        catalog
            .iter()
            .map(|q| match q.kind {
                QuestionKind::ScaledRating => rating(&q.id, q.scale),
                QuestionKind::SingleChoice => {
                    choice(&q.id, q.answer_key.as_deref().unwrap_or(&q.options[0]))
                }
                QuestionKind::ForcedChoice => choice(&q.id, &q.options[0]),
            })
            .collect()
    }

    #[test]
    fn empty_responses_yield_defaults() {
        let catalog = builtin();
        let results = evaluate(&catalog, &[]);

        assert_eq!(results.trait_score, 0);
        assert_eq!(results.knowledge_score, 0);
        for (_, score) in results.dimensions.iter() {
            assert_eq!(score, 50);
        }
        // 0.30*0 + 0.40*0 + 0.30*50
        assert_eq!(results.overall_score, 15);
        assert_eq!(results.recommendation, Recommendation::WeakFit);
    }

    #[test]
    fn all_correct_knowledge_answers_score_100() {
        let catalog = builtin();
        let responses: Vec<Response> = catalog
            .knowledge_check
            .iter()
            .map(|q| choice(&q.id, q.answer_key.as_deref().unwrap()))
            .collect();

        let agg = aggregate(&catalog, &responses);
        assert!((agg.knowledge_fit - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wrong_knowledge_answers_score_zero() {
        let catalog = builtin();
        let responses = vec![choice("tech-1", "To store training data")];
        let agg = aggregate(&catalog, &responses);
        assert_eq!(agg.knowledge_fit, 0.0);
    }

    #[test]
    fn max_ratings_score_100() {
        let catalog = builtin();
        let responses: Vec<Response> = catalog
            .trait_survey
            .iter()
            .filter(|q| q.kind == QuestionKind::ScaledRating)
            .map(|q| rating(&q.id, q.scale))
            .collect();

        let agg = aggregate(&catalog, &responses);
        assert!((agg.trait_fit - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn forced_choice_gets_midpoint_credit_regardless_of_option() {
        let catalog = builtin();
        // psy-3 is forced-choice: any option credits 3/5 = 60%.
        for option_index in 0..4 {
            let q = catalog.find("psy-3").unwrap();
            let responses = vec![choice("psy-3", &q.options[option_index])];
            let agg = aggregate(&catalog, &responses);
            assert!((agg.trait_fit - 60.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn single_max_rating_gives_trait_100() {
        let catalog = builtin();
        let responses = vec![rating("psy-1", 5)];
        let results = evaluate(&catalog, &responses);

        assert_eq!(results.trait_score, 100);
        assert_eq!(results.knowledge_score, 0);
        for (_, score) in results.dimensions.iter() {
            assert_eq!(score, 50);
        }
        // 0.30*100 + 0.40*0 + 0.30*50 = 45
        assert_eq!(results.overall_score, 45);
        assert_eq!(results.recommendation, Recommendation::WeakFit);
    }

    #[test]
    fn unknown_question_ids_are_dropped() {
        let catalog = builtin();
        let baseline = evaluate(&catalog, &[rating("psy-1", 5)]);
        let with_noise = evaluate(
            &catalog,
            &[
                rating("psy-1", 5),
                rating("ghost-1", 5),
                choice("ghost-2", "Deployment"),
            ],
        );
        assert_eq!(baseline, with_noise);
    }

    #[test]
    fn order_independent_and_idempotent() {
        let catalog = builtin();
        let mut responses = perfect_responses(&catalog);

        let forward = evaluate(&catalog, &responses);
        responses.reverse();
        let backward = evaluate(&catalog, &responses);
        let again = evaluate(&catalog, &responses);

        assert_eq!(forward, backward);
        assert_eq!(backward, again);
    }

    #[test]
    fn stringly_typed_rating_still_counts() {
        let catalog = builtin();
        let responses = vec![choice("psy-1", "5")];
        let agg = aggregate(&catalog, &responses);
        assert!((agg.trait_fit - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_rating_is_not_clamped() {
        // Rating bounds are deliberately not validated; an out-of-range
        // value just skews the ratio.
        let catalog = builtin();
        let responses = vec![rating("psy-1", 10)];
        let agg = aggregate(&catalog, &responses);
        assert!((agg.trait_fit - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn classify_thresholds_are_inclusive() {
        assert_eq!(classify(75.0, 70.0, 65.0), Recommendation::StrongFit);
        assert_eq!(classify(74.9, 70.0, 65.0), Recommendation::ConditionalFit);
        assert_eq!(classify(75.0, 69.9, 65.0), Recommendation::ConditionalFit);
        assert_eq!(classify(75.0, 70.0, 64.9), Recommendation::ConditionalFit);
    }

    #[test]
    fn classify_conditional_needs_one_of_two() {
        assert_eq!(classify(60.0, 50.0, 0.0), Recommendation::ConditionalFit);
        assert_eq!(classify(60.0, 0.0, 60.0), Recommendation::ConditionalFit);
        assert_eq!(classify(60.0, 49.9, 59.9), Recommendation::WeakFit);
        assert_eq!(classify(59.9, 100.0, 100.0), Recommendation::WeakFit);
    }

    #[test]
    fn perfect_run_is_a_strong_fit() {
        let catalog = builtin();
        let responses = perfect_responses(&catalog);
        let results = evaluate(&catalog, &responses);

        assert_eq!(results.knowledge_score, 100);
        assert_eq!(results.recommendation, Recommendation::StrongFit);
    }

    #[test]
    fn duplicate_dimension_responses_accumulate_within_group() {
        let catalog = builtin();
        // Only the will dimension is answered; the rest stay at 50.
        let responses = vec![rating("rdy-will-1", 4)];
        let agg = aggregate(&catalog, &responses);
        assert!((agg.dimension(Dimension::Will) - 80.0).abs() < f64::EPSILON);
        assert!((agg.dimension(Dimension::Skill) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rounding_happens_only_at_the_results_boundary() {
        let catalog = builtin();
        // One correct, two wrong: knowledge = 33.333...
        let responses = vec![
            choice("tech-1", "To version and manage ML models"),
            choice("tech-2", "Job"),
            choice("tech-3", "The model moving between servers"),
        ];
        let agg = aggregate(&catalog, &responses);
        assert!((agg.knowledge_fit - 100.0 / 3.0).abs() < 1e-9);

        let results = evaluate(&catalog, &responses);
        assert_eq!(results.knowledge_score, 33);
        // Overall derives from the unrounded 33.33, not the rounded 33:
        // 0.30*0 + 0.40*33.333 + 0.30*50 = 28.333 -> 28.
        assert_eq!(results.overall_score, 28);
    }
}
