use persona_scale::quiz::presets::{find_preset, standard_presets};
use persona_scale::quiz::{ChangeStance, Level, ScoringEngine, ValueFocus};

struct Expected {
    preset: &'static str,
    full_type: &'static str,
    social: Level,
    identity: Level,
    value_focus: ValueFocus,
    change_stance: ChangeStance,
}

const EXPECTED: [Expected; 7] = [
    Expected {
        preset: "ntp_a",
        full_type: "ENTP-A",
        social: Level::High,
        identity: Level::High,
        value_focus: ValueFocus::SelfTranscendence,
        change_stance: ChangeStance::OpennessToChange,
    },
    Expected {
        preset: "stj_a",
        full_type: "ISTJ-A",
        social: Level::High,
        identity: Level::High,
        value_focus: ValueFocus::SelfEnhancement,
        change_stance: ChangeStance::Conservation,
    },
    Expected {
        preset: "nfp_t",
        full_type: "INFP-T",
        social: Level::Medium,
        identity: Level::Low,
        value_focus: ValueFocus::SelfTranscendence,
        change_stance: ChangeStance::Balanced,
    },
    Expected {
        preset: "entj_a",
        full_type: "ENTJ-A",
        social: Level::High,
        identity: Level::High,
        value_focus: ValueFocus::SelfEnhancement,
        change_stance: ChangeStance::Conservation,
    },
    Expected {
        preset: "intj_t",
        full_type: "INTJ-T",
        social: Level::Medium,
        identity: Level::Medium,
        value_focus: ValueFocus::Balanced,
        change_stance: ChangeStance::Balanced,
    },
    Expected {
        preset: "isfp_a",
        full_type: "ISFP-A",
        social: Level::Medium,
        identity: Level::Medium,
        value_focus: ValueFocus::SelfTranscendence,
        change_stance: ChangeStance::Balanced,
    },
    Expected {
        preset: "enfp_t",
        full_type: "ENFP-T",
        social: Level::Medium,
        identity: Level::Medium,
        value_focus: ValueFocus::SelfTranscendence,
        change_stance: ChangeStance::OpennessToChange,
    },
];

#[test]
fn every_preset_lands_on_its_labelled_type() {
    let engine = ScoringEngine::standard();
    assert_eq!(standard_presets().len(), EXPECTED.len());

    for expected in &EXPECTED {
        let preset = find_preset(expected.preset).expect("preset exists");
        let answers = preset.answers(engine.catalog());
        assert!(engine.is_complete(&answers), "{} fills every item", preset.key);

        let result = engine.classify(&answers);
        assert_eq!(
            result.full_type_with_variant(),
            expected.full_type,
            "type for {}",
            preset.key
        );
        assert_eq!(result.social_adaptability(), expected.social, "{}", preset.key);
        assert_eq!(result.identity_clarity(), expected.identity, "{}", preset.key);
        assert_eq!(result.value_focus(), expected.value_focus, "{}", preset.key);
        assert_eq!(result.change_stance(), expected.change_stance, "{}", preset.key);
    }
}

#[test]
fn preset_labels_match_core_and_variant() {
    let engine = ScoringEngine::standard();
    for preset in standard_presets() {
        let result = engine.classify(&preset.answers(engine.catalog()));
        let label_core = preset.label.trim_start_matches(['E', 'I']);
        let expected_core = format!("{}-{}", result.core_type(), result.variant().key());
        assert_eq!(label_core, expected_core, "{}", preset.key);
    }
}

#[test]
fn turbulent_presets_are_decided_by_emotional_stability() {
    let engine = ScoringEngine::standard();
    let preset = find_preset("enfp_t").expect("preset exists");
    let traced = engine.classify_traced(&preset.answers(engine.catalog()));

    assert_eq!(traced.trace.variant.emotional_stability, 2.5);
    assert_eq!(traced.result.raw_scores().emotional_stability, 2.5);
}
