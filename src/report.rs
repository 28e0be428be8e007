use persona_scale::quiz::presets::TestPreset;
use persona_scale::quiz::storage::{Screen, StoredState};
use persona_scale::quiz::{
    AnswerSet, ContentCatalog, ContentGap, Interaction, ItemCatalog, QuizResult, ScoringGroup,
};
use std::fmt::Write as _;

const BAR_WIDTH: usize = 14;

/// Radar dimensions from the browser chart, rendered here as bars.
const PROFILE_DIMENSIONS: [(ScoringGroup, &str); 7] = [
    (ScoringGroup::E, "外向 (E)"),
    (ScoringGroup::N, "直覺 (N)"),
    (ScoringGroup::T, "思考 (T)"),
    (ScoringGroup::J, "判斷 (J)"),
    (ScoringGroup::ES, "情緒穩定"),
    (ScoringGroup::SA, "社會適應"),
    (ScoringGroup::IC, "自我認同"),
];

pub fn result_report(result: &QuizResult, content: &ContentCatalog) -> String {
    let mut out = String::new();
    let core = result.core_type();
    let variant = result.variant();
    let core_name = content
        .core_profile(core)
        .map(|profile| profile.name.clone())
        .unwrap_or_else(|| core.key());

    let _ = writeln!(
        out,
        "{}-{} ({})",
        core_name,
        variant.key(),
        result.full_type_with_variant()
    );
    if let Some(profile) = content.core_profile(core) {
        let _ = writeln!(out, "{}", profile.summary);
    }

    let value_names = [
        content
            .value_focus_profile(result.value_focus())
            .map(|axis| axis.name.as_str())
            .unwrap_or(result.value_focus().key()),
        content
            .change_stance_profile(result.change_stance())
            .map(|axis| axis.name.as_str())
            .unwrap_or(result.change_stance().key()),
    ];
    let social = content
        .social_level(result.social_adaptability())
        .map(|level| level.name.as_str())
        .unwrap_or(result.social_adaptability().label());
    let identity = content
        .identity_level(result.identity_clarity())
        .map(|level| level.name.as_str())
        .unwrap_or(result.identity_clarity().label());
    let _ = writeln!(
        out,
        "價值觀: {} × {} | 社會適應: {} | 認同清晰: {}",
        value_names[0], value_names[1], social, identity
    );

    let _ = writeln!(out, "\n人格維度");
    for (group, label) in PROFILE_DIMENSIONS {
        let score = result.raw_scores().get(group);
        let _ = writeln!(out, "- {:<8} {:>4.2} {}", label, score, bar(score));
    }

    let variant_copy = content.variant_profile(variant);
    let _ = writeln!(out, "\n核心特質: {} ({})", core_name, core);
    if let Some(copy) = variant_copy {
        let _ = writeln!(out, "A/T 變體觀察（{}）：{}", copy.modifier, copy.strength_phrase);
    }

    let interaction_copy = content.interaction_profile(result.interaction());
    let _ = writeln!(out, "\n互動風格（{}）", result.interaction().key());
    match interaction_copy {
        Some(copy) => {
            let _ = writeln!(out, "{}", copy.tagline);
            push_list(&mut out, &copy.bullets);
        }
        None => {
            let _ = writeln!(out, "- 暫無對應說明,後續將補齊。");
        }
    }

    if let Some(profile) = content.core_profile(core) {
        push_section(&mut out, "優勢", &profile.strengths);
        push_section(&mut out, "常見盲點", &profile.weaknesses);
        push_section(&mut out, "建議情境 / 職能", &profile.scenarios);

        let mut growth = profile.growth.clone();
        if let Some(copy) = variant_copy {
            growth.push(copy.growth_phrase.clone());
        }
        growth.push(interaction_growth(result.interaction(), content));
        push_section(&mut out, "個人成長建議", &growth);
    }

    let descriptions: Vec<String> = [
        content.value_focus_profile(result.value_focus()),
        content.change_stance_profile(result.change_stance()),
    ]
    .into_iter()
    .flatten()
    .map(|axis| axis.description.clone())
    .collect();
    push_section(&mut out, "價值觀解讀", &descriptions);

    if let Some(level) = content.social_level(result.social_adaptability()) {
        push_section(&mut out, "社會適應力分析", &level.advice);
    }
    if let Some(level) = content.identity_level(result.identity_clarity()) {
        push_section(&mut out, "自我認同清晰度", &level.advice);
    }

    out
}

fn interaction_growth(interaction: Interaction, content: &ContentCatalog) -> String {
    content
        .interaction_profile(interaction)
        .and_then(|copy| copy.growth_suggestion.clone())
        .unwrap_or_else(|| match interaction {
            Interaction::Extraverted => {
                "外向:以每週的反思時間收斂行動步調,讓熱情更聚焦。".to_string()
            }
            Interaction::Introverted => {
                "內向:安排定期的公開分享或協作任務,練習把洞見帶到外部。".to_string()
            }
        })
}

fn bar(score: f64) -> String {
    let filled = ((score.clamp(0.0, 7.0) / 7.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn push_section(out: &mut String, title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{title}");
    push_list(out, lines);
}

fn push_list(out: &mut String, lines: &[String]) {
    for line in lines {
        let _ = writeln!(out, "- {line}");
    }
}

pub fn progress_line(answered: usize, total: usize) -> String {
    let percent = if total == 0 {
        0.0
    } else {
        answered as f64 / total as f64 * 100.0
    };
    format!("{answered}/{total} answered ({percent:.0}%)")
}

/// Resume prompt shown when no subcommand is given.
pub fn status_message(state: &StoredState, catalog: &ItemCatalog) -> String {
    let total = catalog.len();
    match (&state.results, state.current_screen) {
        (Some(result), Screen::Results) => format!(
            "Latest result: {}\nRun `persona-scale export --format json` to save it.\n",
            result.full_type_with_variant()
        ),
        _ if catalog.is_complete(&state.answers) => format!(
            "All {total} statements answered.\nRun `persona-scale submit` to see your result.\n"
        ),
        _ if state.is_incomplete(total) => format!(
            "Unfinished questionnaire: {}\nRun `persona-scale questions --unanswered` to continue.\n",
            progress_line(catalog.answered_count(&state.answers), total)
        ),
        _ => format!(
            "{total} statements, answer each from 1 (disagree) to 7 (agree).\nRun `persona-scale questions` to begin.\n"
        ),
    }
}

pub fn question_listing(catalog: &ItemCatalog, answers: &AnswerSet, unanswered_only: bool) -> String {
    let mut out = String::new();
    for item in catalog.items() {
        let answer = answers.get(item.id);
        if unanswered_only && answer.is_some() {
            continue;
        }
        let marker = answer
            .map(|score| score.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "[{:>2}] ({}) {}", item.id, marker, item.text);
    }
    out
}

pub fn preset_listing(presets: &[TestPreset]) -> String {
    let mut out = String::new();
    for preset in presets {
        let _ = writeln!(out, "- {} ({})", preset.key, preset.label);
    }
    out
}

pub fn gap_listing(gaps: &[ContentGap]) -> String {
    if gaps.is_empty() {
        return "Content catalog covers every result key.\n".to_string();
    }
    let mut out = format!("{} missing entries\n", gaps.len());
    for gap in gaps {
        let _ = writeln!(out, "- {gap}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_scale::quiz::presets::find_preset;
    use persona_scale::quiz::ScoringEngine;

    #[test]
    fn report_names_type_and_sections() {
        let engine = ScoringEngine::standard();
        let preset = find_preset("ntp_a").expect("preset");
        let result = engine.classify(&preset.answers(engine.catalog()));

        let report = result_report(&result, &ContentCatalog::standard());
        assert!(report.starts_with("探索者-A (ENTP-A)"));
        assert!(report.contains("互動風格（E）"));
        assert!(report.contains("個人成長建議"));
        assert!(report.contains("- 外向 (E)"));
    }

    #[test]
    fn report_falls_back_to_keys_without_content() {
        let engine = ScoringEngine::standard();
        let answers = AnswerSet::new();
        let result = engine.classify(&answers);

        let report = result_report(&result, &ContentCatalog::default());
        assert!(report.starts_with("SFP-T (ISFP-T)"));
        assert!(report.contains("價值觀: STSE_Balance × OPCO_Balance | 社會適應: 中 | 認同清晰: 中"));
        assert!(report.contains("暫無對應說明"));
    }

    #[test]
    fn progress_and_bars_are_bounded() {
        assert_eq!(progress_line(12, 48), "12/48 answered (25%)");
        assert_eq!(progress_line(0, 0), "0/0 answered (0%)");
        assert_eq!(bar(7.0), "#".repeat(BAR_WIDTH));
        assert_eq!(bar(-1.0), ".".repeat(BAR_WIDTH));
    }

    #[test]
    fn listing_can_hide_answered_items() {
        let catalog = ItemCatalog::standard();
        let answers = AnswerSet::from_pairs([(1, 6)]).expect("valid");
        let all = question_listing(&catalog, &answers, false);
        let open = question_listing(&catalog, &answers, true);
        assert_eq!(all.lines().count(), 48);
        assert_eq!(open.lines().count(), 47);
        assert!(all.starts_with("[ 1] (6) "));
    }

    #[test]
    fn status_suggests_the_next_step() {
        let catalog = ItemCatalog::standard();
        let mut state = StoredState::default();
        assert!(status_message(&state, &catalog).contains("to begin"));

        state.answers.record(1, 5).expect("valid");
        assert!(status_message(&state, &catalog).contains("1/48 answered"));

        state.answers =
            AnswerSet::from_pairs(catalog.items().iter().map(|item| (item.id, 4))).expect("valid");
        state.current_screen = Screen::Quiz;
        let message = status_message(&state, &catalog);
        assert!(message.starts_with("All 48 statements answered."));
        assert!(message.contains("persona-scale submit"));

        let engine = ScoringEngine::standard();
        state.results = Some(engine.classify(&state.answers));
        state.current_screen = Screen::Results;
        assert!(status_message(&state, &catalog).starts_with("Latest result: ISFP-T"));
    }
}
