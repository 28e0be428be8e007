use super::super::answers::{AnswerSet, ItemId};
use super::super::catalog::{ItemCatalog, ScoringGroup};
use serde::{Deserialize, Serialize};

/// Group averages for one scoring run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawScores {
    pub extraversion: f64,
    pub introversion: f64,
    pub sensing: f64,
    pub intuition: f64,
    pub thinking: f64,
    pub feeling: f64,
    pub judging: f64,
    pub perceiving: f64,
    pub emotional_stability: f64,
    pub social_adaptability: f64,
    pub identity_clarity: f64,
    pub self_transcendence: f64,
    pub self_enhancement: f64,
    pub openness: f64,
    pub conservation: f64,
}

impl RawScores {
    pub fn from_fn(mut score: impl FnMut(ScoringGroup) -> f64) -> Self {
        Self {
            extraversion: score(ScoringGroup::E),
            introversion: score(ScoringGroup::I),
            sensing: score(ScoringGroup::S),
            intuition: score(ScoringGroup::N),
            thinking: score(ScoringGroup::T),
            feeling: score(ScoringGroup::F),
            judging: score(ScoringGroup::J),
            perceiving: score(ScoringGroup::P),
            emotional_stability: score(ScoringGroup::ES),
            social_adaptability: score(ScoringGroup::SA),
            identity_clarity: score(ScoringGroup::IC),
            self_transcendence: score(ScoringGroup::ST),
            self_enhancement: score(ScoringGroup::SE),
            openness: score(ScoringGroup::OP),
            conservation: score(ScoringGroup::CO),
        }
    }

    pub const fn get(&self, group: ScoringGroup) -> f64 {
        match group {
            ScoringGroup::E => self.extraversion,
            ScoringGroup::I => self.introversion,
            ScoringGroup::S => self.sensing,
            ScoringGroup::N => self.intuition,
            ScoringGroup::T => self.thinking,
            ScoringGroup::F => self.feeling,
            ScoringGroup::J => self.judging,
            ScoringGroup::P => self.perceiving,
            ScoringGroup::ES => self.emotional_stability,
            ScoringGroup::SA => self.social_adaptability,
            ScoringGroup::IC => self.identity_clarity,
            ScoringGroup::ST => self.self_transcendence,
            ScoringGroup::SE => self.self_enhancement,
            ScoringGroup::OP => self.openness,
            ScoringGroup::CO => self.conservation,
        }
    }

    /// `(group, average)` pairs in catalog order.
    pub fn entries(&self) -> Vec<(ScoringGroup, f64)> {
        ScoringGroup::ordered()
            .into_iter()
            .map(|group| (group, self.get(group)))
            .collect()
    }
}

pub fn calculate_raw_scores(answers: &AnswerSet, catalog: &ItemCatalog) -> RawScores {
    RawScores::from_fn(|group| group_average(catalog.group(group), answers, catalog))
}

fn group_average(ids: &[ItemId], answers: &AnswerSet, catalog: &ItemCatalog) -> f64 {
    if ids.is_empty() {
        return 0.0;
    }

    let total: f64 = ids
        .iter()
        .filter_map(|id| catalog.item(*id))
        .map(|item| item.adjusted_score(answers.get(item.id)))
        .sum();

    total / ids.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog::{Item, ItemKey};
    use std::collections::BTreeMap;

    fn single_item_catalog(reverse: bool) -> ItemCatalog {
        let items = vec![Item::new(7, "solo", ItemKey::EsMinus, reverse)];
        let groups = BTreeMap::from([(ScoringGroup::ES, vec![7])]);
        ItemCatalog::with_groups(items, groups).expect("valid catalog")
    }

    #[test]
    fn reverse_item_contributes_eight_minus_answer() {
        let catalog = single_item_catalog(true);
        for raw in 1..=7u8 {
            let answers = AnswerSet::from_pairs([(7, raw)]).unwrap();
            let scores = calculate_raw_scores(&answers, &catalog);
            assert_eq!(scores.emotional_stability, f64::from(8 - raw));
        }
    }

    #[test]
    fn empty_groups_average_to_zero() {
        let catalog = single_item_catalog(false);
        let answers = AnswerSet::from_pairs([(7, 6)]).unwrap();
        let scores = calculate_raw_scores(&answers, &catalog);
        assert_eq!(scores.emotional_stability, 6.0);
        assert_eq!(scores.extraversion, 0.0);
        assert_eq!(scores.conservation, 0.0);
    }

    #[test]
    fn missing_answers_score_as_midpoint() {
        let catalog = ItemCatalog::standard();
        let scores = calculate_raw_scores(&AnswerSet::new(), &catalog);
        for (group, average) in scores.entries() {
            assert_eq!(average, 4.0, "group {group:?}");
        }
    }

    #[test]
    fn averages_mix_answered_and_missing_items() {
        let catalog = ItemCatalog::standard();
        let extraversion_ids = catalog.group(ScoringGroup::E).to_vec();
        let answers = AnswerSet::from_pairs([(extraversion_ids[0], 7), (extraversion_ids[1], 7)])
            .unwrap();
        let scores = calculate_raw_scores(&answers, &catalog);
        assert!((scores.extraversion - 6.0).abs() < 1e-12);
    }
}
