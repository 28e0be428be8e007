//! Scoring engine: answers → group averages → axis decisions → result record.
//!
//! Everything here is a pure function of its inputs; the engine keeps no state
//! between calls.

mod aggregate;
mod compose;
mod resolver;
mod trace;

pub use aggregate::{calculate_raw_scores, RawScores};
pub use compose::{QuizResult, TracedResult};
pub use resolver::{
    identity_clarity_level, resolve_change_stance, resolve_interaction, resolve_preference,
    resolve_value_focus, resolve_variant, social_adaptability_level, InteractionBasis, Pole,
    Preference, VariantBasis, STRONG_PREFERENCE_MARGIN, TIEBREAK_THRESHOLD,
};
pub use trace::{AxisTrace, InteractionTrace, ScoringTrace, VariantTrace};

use super::answers::AnswerSet;
use super::catalog::ItemCatalog;

pub fn calculate_results(answers: &AnswerSet, catalog: &ItemCatalog) -> QuizResult {
    calculate_traced_results(answers, catalog).result
}

pub fn calculate_traced_results(answers: &AnswerSet, catalog: &ItemCatalog) -> TracedResult {
    compose::compose_result(calculate_raw_scores(answers, catalog))
}

/// Classifies a precomputed set of group averages.
pub fn resolve_raw_scores(raw_scores: RawScores) -> TracedResult {
    compose::compose_result(raw_scores)
}

/// Stateless evaluator bound to one item catalog.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: ItemCatalog,
}

impl ScoringEngine {
    pub fn new(catalog: ItemCatalog) -> Self {
        Self { catalog }
    }

    pub fn standard() -> Self {
        Self::new(ItemCatalog::standard())
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn raw_scores(&self, answers: &AnswerSet) -> RawScores {
        calculate_raw_scores(answers, &self.catalog)
    }

    pub fn classify(&self, answers: &AnswerSet) -> QuizResult {
        calculate_results(answers, &self.catalog)
    }

    pub fn classify_traced(&self, answers: &AnswerSet) -> TracedResult {
        calculate_traced_results(answers, &self.catalog)
    }

    /// True once every catalog item has an answer; only then is a classification authoritative.
    pub fn is_complete(&self, answers: &AnswerSet) -> bool {
        self.catalog.is_complete(answers)
    }
}
