use super::super::domain::{ChangeStance, Interaction, Level, ValueFocus, Variant};
use serde::{Deserialize, Serialize};

/// Difference at or beyond which a pole wins outright.
pub const STRONG_PREFERENCE_MARGIN: f64 = 0.25;
/// Tiebreak score at or above which the configured pole wins an ambiguous axis.
pub const TIEBREAK_THRESHOLD: f64 = 4.5;
pub const SOCIAL_EXTRAVERTED_LEAN: f64 = 4.2;
pub const SOCIAL_INTROVERTED_LEAN: f64 = 3.8;
pub const ASSERTIVE_STABILITY: f64 = 4.5;
pub const TURBULENT_STABILITY: f64 = 3.5;
pub const ASSERTIVE_IDENTITY: f64 = 4.5;
pub const VALUE_BALANCE_MARGIN: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pole {
    Left,
    Right,
}

/// Outcome of [`resolve_preference`]; the `*Tie` variants were decided inside
/// the ambiguous band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    Left,
    Right,
    LeftTie,
    RightTie,
}

impl Preference {
    pub const fn favors_left(self) -> bool {
        matches!(self, Self::Left | Self::LeftTie)
    }

    pub const fn is_tie(self) -> bool {
        matches!(self, Self::LeftTie | Self::RightTie)
    }
}

pub fn resolve_preference(
    left: f64,
    right: f64,
    tiebreak_pole: Pole,
    tiebreak_score: f64,
) -> Preference {
    let diff = left - right;
    if diff >= STRONG_PREFERENCE_MARGIN {
        return Preference::Left;
    }
    if diff <= -STRONG_PREFERENCE_MARGIN {
        return Preference::Right;
    }

    if tiebreak_score >= TIEBREAK_THRESHOLD {
        return match tiebreak_pole {
            Pole::Left => Preference::LeftTie,
            Pole::Right => Preference::RightTie,
        };
    }

    if left > right {
        Preference::LeftTie
    } else {
        Preference::RightTie
    }
}

/// Which rule settled the E/I letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionBasis {
    Difference,
    SocialAdaptability,
    Magnitude,
}

pub fn resolve_interaction(
    extraversion: f64,
    introversion: f64,
    social_adaptability: f64,
) -> (Interaction, InteractionBasis) {
    let diff = extraversion - introversion;
    if diff >= STRONG_PREFERENCE_MARGIN {
        return (Interaction::Extraverted, InteractionBasis::Difference);
    }
    if diff <= -STRONG_PREFERENCE_MARGIN {
        return (Interaction::Introverted, InteractionBasis::Difference);
    }
    if social_adaptability >= SOCIAL_EXTRAVERTED_LEAN {
        return (Interaction::Extraverted, InteractionBasis::SocialAdaptability);
    }
    if social_adaptability <= SOCIAL_INTROVERTED_LEAN {
        return (Interaction::Introverted, InteractionBasis::SocialAdaptability);
    }

    let interaction = if extraversion > introversion {
        Interaction::Extraverted
    } else {
        Interaction::Introverted
    };
    (interaction, InteractionBasis::Magnitude)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantBasis {
    EmotionalStability,
    IdentityClarity,
}

pub fn resolve_variant(emotional_stability: f64, identity_clarity: f64) -> (Variant, VariantBasis) {
    if emotional_stability >= ASSERTIVE_STABILITY {
        return (Variant::Assertive, VariantBasis::EmotionalStability);
    }
    if emotional_stability <= TURBULENT_STABILITY {
        return (Variant::Turbulent, VariantBasis::EmotionalStability);
    }

    let variant = if identity_clarity >= ASSERTIVE_IDENTITY {
        Variant::Assertive
    } else {
        Variant::Turbulent
    };
    (variant, VariantBasis::IdentityClarity)
}

pub fn social_adaptability_level(score: f64) -> Level {
    if score >= 5.0 {
        Level::High
    } else if score >= 3.6 {
        Level::Medium
    } else {
        Level::Low
    }
}

pub fn identity_clarity_level(score: f64) -> Level {
    if score >= 4.8 {
        Level::High
    } else if score >= 3.8 {
        Level::Medium
    } else {
        Level::Low
    }
}

pub fn resolve_value_focus(self_transcendence: f64, self_enhancement: f64) -> ValueFocus {
    let diff = self_transcendence - self_enhancement;
    if diff >= VALUE_BALANCE_MARGIN {
        ValueFocus::SelfTranscendence
    } else if diff <= -VALUE_BALANCE_MARGIN {
        ValueFocus::SelfEnhancement
    } else {
        ValueFocus::Balanced
    }
}

pub fn resolve_change_stance(openness: f64, conservation: f64) -> ChangeStance {
    let diff = openness - conservation;
    if diff >= VALUE_BALANCE_MARGIN {
        ChangeStance::OpennessToChange
    } else if diff <= -VALUE_BALANCE_MARGIN {
        ChangeStance::Conservation
    } else {
        ChangeStance::Balanced
    }
}
