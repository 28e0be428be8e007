//! Developer presets that fill the questionnaire with a known profile.

use super::answers::{AnswerSet, LIKERT_MIDPOINT};
use super::catalog::{ItemCatalog, ItemKey};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestPreset {
    pub key: &'static str,
    pub label: &'static str,
    values: &'static [(&'static str, u8)],
}

impl TestPreset {
    pub fn value(&self, name: &str) -> Option<u8> {
        self.values
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, value)| *value)
    }

    /// Answers every catalog item from the first preset value matching one of
    /// its key's aliases; items with no match sit at the midpoint.
    pub fn answers(&self, catalog: &ItemCatalog) -> AnswerSet {
        let mut answers = AnswerSet::new();
        for item in catalog.items() {
            let score = preset_aliases(item.key)
                .iter()
                .find_map(|alias| self.value(alias))
                .unwrap_or(LIKERT_MIDPOINT);
            if let Err(err) = answers.record(item.id, score) {
                warn!(preset = self.key, %err, "preset value ignored");
            }
        }
        answers
    }
}

/// Preset value names consulted for an item key, most specific first.
pub const fn preset_aliases(key: ItemKey) -> &'static [&'static str] {
    match key {
        ItemKey::E => &["E"],
        ItemKey::I => &["I"],
        ItemKey::N => &["N"],
        ItemKey::S => &["S"],
        ItemKey::T => &["T"],
        ItemKey::F => &["F"],
        ItemKey::J => &["J"],
        ItemKey::P => &["P"],
        ItemKey::EsPlus => &["ESPlus", "ES"],
        ItemKey::EsMinus => &["ESMinus", "ES"],
        ItemKey::SaPlus => &["SAPlus", "SA"],
        ItemKey::SaMinus => &["SAMinus", "SA"],
        ItemKey::IcPlus => &["ICPlus", "IC"],
        ItemKey::IcMinus => &["ICMinus", "IC"],
        ItemKey::ST => &["ST"],
        ItemKey::SE => &["SE"],
        ItemKey::OP => &["OP"],
        ItemKey::CO => &["CO"],
    }
}

pub fn standard_presets() -> &'static [TestPreset] {
    &PRESETS
}

pub fn find_preset(key: &str) -> Option<&'static TestPreset> {
    let wanted = key.trim().to_ascii_lowercase();
    PRESETS.iter().find(|preset| preset.key == wanted)
}

static PRESETS: [TestPreset; 7] = [
    TestPreset {
        key: "ntp_a",
        label: "NTP-A",
        values: &[
            ("E", 6), ("I", 2), ("N", 7), ("S", 1), ("T", 6), ("F", 2), ("P", 7), ("J", 1),
            ("ESPlus", 6), ("ESMinus", 2), ("SAPlus", 6), ("SAMinus", 3),
            ("ICPlus", 6), ("ICMinus", 3), ("ST", 6), ("SE", 2), ("OP", 7), ("CO", 1),
        ],
    },
    TestPreset {
        key: "stj_a",
        label: "STJ-A",
        values: &[
            ("E", 2), ("I", 6), ("S", 7), ("N", 1), ("T", 7), ("F", 1), ("J", 7), ("P", 1),
            ("ESPlus", 6), ("ESMinus", 2), ("SAPlus", 6), ("SAMinus", 3),
            ("ICPlus", 7), ("ICMinus", 2), ("ST", 1), ("SE", 7), ("OP", 1), ("CO", 7),
        ],
    },
    TestPreset {
        key: "nfp_t",
        label: "NFP-T",
        values: &[
            ("E", 2), ("I", 6), ("N", 7), ("S", 1), ("T", 1), ("F", 7), ("P", 7), ("J", 1),
            ("ESPlus", 2), ("ESMinus", 6), ("SAPlus", 4), ("SAMinus", 4),
            ("ICPlus", 3), ("ICMinus", 5), ("ST", 7), ("SE", 1), ("OP", 5), ("CO", 5),
        ],
    },
    TestPreset {
        key: "entj_a",
        label: "ENTJ-A",
        values: &[
            ("E", 6), ("I", 2), ("N", 6), ("S", 3), ("T", 6), ("F", 3), ("J", 6), ("P", 3),
            ("ESPlus", 6), ("ESMinus", 2), ("SAPlus", 5), ("SAMinus", 3),
            ("ICPlus", 5), ("ICMinus", 3), ("ST", 4), ("SE", 6), ("OP", 4), ("CO", 6),
        ],
    },
    TestPreset {
        key: "intj_t",
        label: "INTJ-T",
        values: &[
            ("E", 2), ("I", 6), ("N", 6), ("S", 3), ("T", 6), ("F", 3), ("J", 6), ("P", 3),
            ("ESPlus", 4), ("ESMinus", 4), ("SAPlus", 4), ("SAMinus", 4),
            ("ICPlus", 4), ("ICMinus", 4), ("ST", 5), ("SE", 5), ("OP", 5), ("CO", 5),
        ],
    },
    TestPreset {
        key: "isfp_a",
        label: "ISFP-A",
        values: &[
            ("E", 3), ("I", 5), ("N", 3), ("S", 6), ("T", 3), ("F", 6), ("J", 3), ("P", 6),
            ("ESPlus", 6), ("ESMinus", 2), ("SAPlus", 4), ("SAMinus", 3),
            ("ICPlus", 4), ("ICMinus", 3), ("ST", 5), ("SE", 4), ("OP", 4), ("CO", 4),
        ],
    },
    TestPreset {
        key: "enfp_t",
        label: "ENFP-T",
        values: &[
            ("E", 6), ("I", 2), ("N", 6), ("S", 3), ("T", 3), ("F", 6), ("J", 3), ("P", 6),
            ("ESPlus", 3), ("ESMinus", 6), ("SAPlus", 4), ("SAMinus", 4),
            ("ICPlus", 4), ("ICMinus", 4), ("ST", 6), ("SE", 4), ("OP", 6), ("CO", 3),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::catalog::{Item, ScoringGroup};

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(find_preset("NTP_A").map(|preset| preset.label), Some("NTP-A"));
        assert!(find_preset("xyz").is_none());
        assert_eq!(standard_presets().len(), 7);
    }

    #[test]
    fn minus_items_take_their_own_value_without_double_inversion() {
        let catalog = ItemCatalog::standard();
        let preset = find_preset("ntp_a").expect("preset");
        let answers = preset.answers(&catalog);

        assert!(catalog.is_complete(&answers));
        let minus_item = catalog
            .items()
            .iter()
            .find(|item| item.key == ItemKey::EsMinus)
            .expect("ES- item");
        assert_eq!(answers.get(minus_item.id), Some(2));
    }

    #[test]
    fn aliases_fall_back_to_group_value_then_midpoint() {
        let items = vec![
            Item::new(1, "plus", ItemKey::EsPlus, false),
            Item::new(2, "minus", ItemKey::EsMinus, true),
            Item::new(3, "other", ItemKey::CO, false),
        ];
        let catalog = ItemCatalog::from_items(items).unwrap();
        let preset = TestPreset {
            key: "custom",
            label: "custom",
            values: &[("ES", 6), ("ESMinus", 1)],
        };

        let answers = preset.answers(&catalog);
        assert_eq!(answers.get(1), Some(6));
        assert_eq!(answers.get(2), Some(1));
        assert_eq!(answers.get(3), Some(LIKERT_MIDPOINT));
        assert_eq!(catalog.group(ScoringGroup::ES), &[1, 2]);
    }
}
