use super::resolver::{InteractionBasis, Pole, Preference, VariantBasis};
use serde::Serialize;

/// Inputs and outcome of one `resolve_preference` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisTrace {
    pub left: f64,
    pub right: f64,
    pub difference: f64,
    pub tiebreak_pole: Pole,
    pub tiebreak_score: f64,
    pub preference: Preference,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InteractionTrace {
    pub difference: f64,
    pub social_adaptability: f64,
    pub basis: InteractionBasis,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VariantTrace {
    pub emotional_stability: f64,
    pub identity_clarity: f64,
    pub basis: VariantBasis,
}

/// Intermediate axis decisions for callers that want to inspect how a result
/// was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringTrace {
    pub perception: AxisTrace,
    pub judgment: AxisTrace,
    pub orientation: AxisTrace,
    pub interaction: InteractionTrace,
    pub variant: VariantTrace,
    pub value_focus_difference: f64,
    pub change_stance_difference: f64,
}
