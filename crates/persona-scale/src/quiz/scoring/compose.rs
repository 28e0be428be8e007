use super::super::domain::{
    ChangeStance, CoreType, Interaction, Judgment, Level, Orientation, Perception, ValueFocus,
    Variant,
};
use super::aggregate::RawScores;
use super::resolver::{
    identity_clarity_level, resolve_change_stance, resolve_interaction, resolve_preference,
    resolve_value_focus, resolve_variant, social_adaptability_level, Pole,
};
use super::trace::{AxisTrace, InteractionTrace, ScoringTrace, VariantTrace};
use serde::{Deserialize, Serialize};

/// Final classification. Fields are read-only; a new submission yields a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    perception: Perception,
    judgment: Judgment,
    orientation: Orientation,
    core_type: CoreType,
    variant: Variant,
    interaction: Interaction,
    full_type: String,
    social_adaptability: Level,
    identity_clarity: Level,
    value_focus: ValueFocus,
    change_stance: ChangeStance,
    raw_scores: RawScores,
}

impl QuizResult {
    pub fn perception(&self) -> Perception {
        self.perception
    }

    pub fn judgment(&self) -> Judgment {
        self.judgment
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn core_type(&self) -> CoreType {
        self.core_type
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Interaction letter followed by the core type, e.g. `ENTP`.
    pub fn full_type(&self) -> &str {
        &self.full_type
    }

    /// Full type with the variant suffix, e.g. `ENTP-A`.
    pub fn full_type_with_variant(&self) -> String {
        format!("{}-{}", self.full_type, self.variant.key())
    }

    pub fn social_adaptability(&self) -> Level {
        self.social_adaptability
    }

    pub fn identity_clarity(&self) -> Level {
        self.identity_clarity
    }

    pub fn value_focus(&self) -> ValueFocus {
        self.value_focus
    }

    pub fn change_stance(&self) -> ChangeStance {
        self.change_stance
    }

    pub fn raw_scores(&self) -> &RawScores {
        &self.raw_scores
    }
}

/// Result paired with the intermediate decisions that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TracedResult {
    pub result: QuizResult,
    pub trace: ScoringTrace,
}

pub(crate) fn compose_result(raw_scores: RawScores) -> TracedResult {
    let identity = raw_scores.identity_clarity;

    let perception_trace = axis(raw_scores.intuition, raw_scores.sensing, Pole::Left, identity);
    let perception = if perception_trace.preference.favors_left() {
        Perception::Intuition
    } else {
        Perception::Sensing
    };

    let judgment_trace = axis(raw_scores.thinking, raw_scores.feeling, Pole::Right, identity);
    let judgment = if judgment_trace.preference.favors_left() {
        Judgment::Thinking
    } else {
        Judgment::Feeling
    };

    let orientation_trace = axis(raw_scores.judging, raw_scores.perceiving, Pole::Left, identity);
    let orientation = if orientation_trace.preference.favors_left() {
        Orientation::Judging
    } else {
        Orientation::Perceiving
    };

    let core_type = CoreType::new(perception, judgment, orientation);

    let (variant, variant_basis) = resolve_variant(raw_scores.emotional_stability, identity);
    let (interaction, interaction_basis) = resolve_interaction(
        raw_scores.extraversion,
        raw_scores.introversion,
        raw_scores.social_adaptability,
    );

    let full_type = format!("{}{}", interaction.letter(), core_type);

    let result = QuizResult {
        perception,
        judgment,
        orientation,
        core_type,
        variant,
        interaction,
        full_type,
        social_adaptability: social_adaptability_level(raw_scores.social_adaptability),
        identity_clarity: identity_clarity_level(identity),
        value_focus: resolve_value_focus(
            raw_scores.self_transcendence,
            raw_scores.self_enhancement,
        ),
        change_stance: resolve_change_stance(raw_scores.openness, raw_scores.conservation),
        raw_scores,
    };

    let trace = ScoringTrace {
        perception: perception_trace,
        judgment: judgment_trace,
        orientation: orientation_trace,
        interaction: InteractionTrace {
            difference: raw_scores.extraversion - raw_scores.introversion,
            social_adaptability: raw_scores.social_adaptability,
            basis: interaction_basis,
        },
        variant: VariantTrace {
            emotional_stability: raw_scores.emotional_stability,
            identity_clarity: identity,
            basis: variant_basis,
        },
        value_focus_difference: raw_scores.self_transcendence - raw_scores.self_enhancement,
        change_stance_difference: raw_scores.openness - raw_scores.conservation,
    };

    TracedResult { result, trace }
}

fn axis(left: f64, right: f64, tiebreak_pole: Pole, tiebreak_score: f64) -> AxisTrace {
    AxisTrace {
        left,
        right,
        difference: left - right,
        tiebreak_pole,
        tiebreak_score,
        preference: resolve_preference(left, right, tiebreak_pole, tiebreak_score),
    }
}
