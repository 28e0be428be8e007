use super::answers::{AnswerSet, ItemId, LIKERT_MAX, LIKERT_MIDPOINT, LIKERT_MIN};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Named group whose items are averaged into one raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoringGroup {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
    ES,
    SA,
    IC,
    ST,
    SE,
    OP,
    CO,
}

impl ScoringGroup {
    pub const fn ordered() -> [Self; 15] {
        [
            Self::E,
            Self::I,
            Self::S,
            Self::N,
            Self::T,
            Self::F,
            Self::J,
            Self::P,
            Self::ES,
            Self::SA,
            Self::IC,
            Self::ST,
            Self::SE,
            Self::OP,
            Self::CO,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::E => "E",
            Self::I => "I",
            Self::S => "S",
            Self::N => "N",
            Self::T => "T",
            Self::F => "F",
            Self::J => "J",
            Self::P => "P",
            Self::ES => "ES",
            Self::SA => "SA",
            Self::IC => "IC",
            Self::ST => "ST",
            Self::SE => "SE",
            Self::OP => "OP",
            Self::CO => "CO",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::E => "外向",
            Self::I => "內向",
            Self::S => "實感",
            Self::N => "直覺",
            Self::T => "思考",
            Self::F => "情感",
            Self::J => "判斷",
            Self::P => "感知",
            Self::ES => "情緒穩定",
            Self::SA => "社會適應",
            Self::IC => "自我認同",
            Self::ST => "自我超越",
            Self::SE => "自我提升",
            Self::OP => "開放變化",
            Self::CO => "保守穩定",
        }
    }
}

/// Item-level tag as authored in the catalog. `+`/`-` keys mark positively and
/// negatively worded items of the same facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKey {
    E,
    I,
    N,
    S,
    T,
    F,
    J,
    P,
    #[serde(rename = "ES+")]
    EsPlus,
    #[serde(rename = "ES-")]
    EsMinus,
    #[serde(rename = "SA+")]
    SaPlus,
    #[serde(rename = "SA-")]
    SaMinus,
    #[serde(rename = "IC+")]
    IcPlus,
    #[serde(rename = "IC-")]
    IcMinus,
    ST,
    SE,
    OP,
    CO,
}

impl ItemKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::E => "E",
            Self::I => "I",
            Self::N => "N",
            Self::S => "S",
            Self::T => "T",
            Self::F => "F",
            Self::J => "J",
            Self::P => "P",
            Self::EsPlus => "ES+",
            Self::EsMinus => "ES-",
            Self::SaPlus => "SA+",
            Self::SaMinus => "SA-",
            Self::IcPlus => "IC+",
            Self::IcMinus => "IC-",
            Self::ST => "ST",
            Self::SE => "SE",
            Self::OP => "OP",
            Self::CO => "CO",
        }
    }

    /// Scoring group an item with this key feeds.
    pub const fn group(self) -> ScoringGroup {
        match self {
            Self::E => ScoringGroup::E,
            Self::I => ScoringGroup::I,
            Self::N => ScoringGroup::N,
            Self::S => ScoringGroup::S,
            Self::T => ScoringGroup::T,
            Self::F => ScoringGroup::F,
            Self::J => ScoringGroup::J,
            Self::P => ScoringGroup::P,
            Self::EsPlus | Self::EsMinus => ScoringGroup::ES,
            Self::SaPlus | Self::SaMinus => ScoringGroup::SA,
            Self::IcPlus | Self::IcMinus => ScoringGroup::IC,
            Self::ST => ScoringGroup::ST,
            Self::SE => ScoringGroup::SE,
            Self::OP => ScoringGroup::OP,
            Self::CO => ScoringGroup::CO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub key: ItemKey,
    #[serde(default)]
    pub reverse: bool,
}

impl Item {
    pub fn new(id: ItemId, text: impl Into<String>, key: ItemKey, reverse: bool) -> Self {
        Self {
            id,
            text: text.into(),
            key,
            reverse,
        }
    }

    /// Score this item contributes to its group; unanswered items sit at the midpoint.
    pub fn adjusted_score(&self, answer: Option<u8>) -> f64 {
        let score = answer.unwrap_or(LIKERT_MIDPOINT);
        let adjusted = if self.reverse {
            (LIKERT_MIN + LIKERT_MAX).saturating_sub(score)
        } else {
            score
        };
        f64::from(adjusted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("item id {0} appears more than once in the catalog")]
    DuplicateItem(ItemId),
    #[error("scoring group {group:?} references unknown item {item}")]
    UnknownItem { group: ScoringGroup, item: ItemId },
}

/// Indexed questionnaire: items plus the group-membership table used for scoring.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
    groups: BTreeMap<ScoringGroup, Vec<ItemId>>,
}

impl ItemCatalog {
    /// The built-in 48-item questionnaire.
    pub fn standard() -> Self {
        let items = standard_items();
        let groups = groups_from_keys(&items);
        let index = index_items(&items);
        Self {
            items,
            index,
            groups,
        }
    }

    /// Builds a catalog whose group table is derived from each item's key.
    pub fn from_items(items: Vec<Item>) -> Result<Self, CatalogError> {
        let groups = groups_from_keys(&items);
        Self::with_groups(items, groups)
    }

    /// Builds a catalog with an explicit group table. Every referenced id must
    /// resolve; a group may be empty and then scores 0.
    pub fn with_groups(
        items: Vec<Item>,
        groups: BTreeMap<ScoringGroup, Vec<ItemId>>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id, position).is_some() {
                return Err(CatalogError::DuplicateItem(item.id));
            }
        }

        for (group, ids) in &groups {
            if let Some(missing) = ids.iter().find(|id| !index.contains_key(id)) {
                return Err(CatalogError::UnknownItem {
                    group: *group,
                    item: *missing,
                });
            }
        }

        Ok(Self {
            items,
            index,
            groups,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|position| &self.items[*position])
    }

    pub fn group(&self, group: ScoringGroup) -> &[ItemId] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of catalog items the answer set covers; answers to unknown ids are ignored.
    pub fn answered_count(&self, answers: &AnswerSet) -> usize {
        self.items
            .iter()
            .filter(|item| answers.get(item.id).is_some())
            .count()
    }

    pub fn is_complete(&self, answers: &AnswerSet) -> bool {
        self.answered_count(answers) == self.items.len()
    }
}

fn index_items(items: &[Item]) -> HashMap<ItemId, usize> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| (item.id, position))
        .collect()
}

fn groups_from_keys(items: &[Item]) -> BTreeMap<ScoringGroup, Vec<ItemId>> {
    let mut groups: BTreeMap<ScoringGroup, Vec<ItemId>> = ScoringGroup::ordered()
        .into_iter()
        .map(|group| (group, Vec::new()))
        .collect();
    for item in items {
        groups.entry(item.key.group()).or_default().push(item.id);
    }
    groups
}

fn standard_items() -> Vec<Item> {
    use ItemKey::*;

    let rows: [(ItemKey, bool, &str); 48] = [
        (E, false, "在人多的聚會中,我通常感到精力充沛。"),
        (E, false, "我喜歡主動結識新朋友。"),
        (E, false, "我習慣在與人討論的過程中釐清自己的想法。"),
        (I, false, "長時間社交之後,我需要獨處來恢復精力。"),
        (I, false, "比起團體活動,我更喜歡深入的一對一交談。"),
        (I, false, "我習慣先在心中想清楚,再開口表達。"),
        (S, false, "我重視具體的事實與細節。"),
        (S, false, "我偏好經過驗證、切實可行的做法。"),
        (S, false, "我從實際操作中學習最有效率。"),
        (N, false, "我常思考事物背後的意義與可能性。"),
        (N, false, "我喜歡構想未來的各種情境。"),
        (N, false, "新奇的概念與理論很容易吸引我。"),
        (T, false, "做決定時,我優先考量邏輯與客觀標準。"),
        (T, false, "我認為直接指出問題比顧及感受更重要。"),
        (T, false, "我習慣分析利弊之後再下結論。"),
        (F, false, "做決定時,我會優先考慮對他人的影響。"),
        (F, false, "維持和諧的人際關係對我而言非常重要。"),
        (F, false, "我很容易察覺他人的情緒變化。"),
        (J, false, "我喜歡事先規劃,並按照計畫進行。"),
        (J, false, "把事情完成之後再休息,讓我感到安心。"),
        (J, false, "我偏好明確的期限與結構。"),
        (P, false, "我喜歡保留彈性,視情況隨機應變。"),
        (P, false, "我常在期限將至時才集中精力完成工作。"),
        (P, false, "過於固定的行程會讓我感到束縛。"),
        (EsPlus, false, "面對壓力時,我通常能保持冷靜。"),
        (EsPlus, false, "遇到挫折時,我能很快調整心情。"),
        (EsMinus, true, "我經常為小事感到焦慮不安。"),
        (EsMinus, true, "我的情緒容易受到他人評價的影響。"),
        (SaPlus, false, "我能迅速適應新的團體與環境。"),
        (SaPlus, false, "我能依不同場合調整自己的表達方式。"),
        (SaMinus, true, "在陌生的社交場合中,我常感到手足無措。"),
        (SaMinus, true, "我不太擅長處理人際之間的衝突。"),
        (IcPlus, false, "我清楚知道自己重視的是什麼。"),
        (IcPlus, false, "我對自己的人生方向有明確的想法。"),
        (IcMinus, true, "我常不確定自己真正想要的是什麼。"),
        (IcMinus, true, "我的想法容易因他人的意見而動搖。"),
        (ST, false, "我認為幫助他人是人生中重要的事。"),
        (ST, false, "我關心社會公平與弱勢族群的處境。"),
        (ST, false, "我願意為了群體利益犧牲部分個人利益。"),
        (SE, false, "取得成就並獲得他人認可對我很重要。"),
        (SE, false, "我希望在團體中具有影響力。"),
        (SE, false, "我會積極爭取能提升自身地位的機會。"),
        (OP, false, "我喜歡嘗試新的體驗與挑戰。"),
        (OP, false, "我重視獨立思考與自由選擇。"),
        (OP, false, "一成不變的生活讓我感到乏味。"),
        (CO, false, "我重視傳統與既有的規範。"),
        (CO, false, "安全與穩定是我做選擇時的首要考量。"),
        (CO, false, "我認為遵守規則能讓社會運作得更好。"),
    ];

    rows.into_iter()
        .zip(1..)
        .map(|((key, reverse, text), id)| Item::new(id, text, key, reverse))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_catalog_has_48_unique_items() {
        let catalog = ItemCatalog::standard();
        assert_eq!(catalog.len(), 48);

        let ids: HashSet<ItemId> = catalog.items().iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), 48);
        assert_eq!(catalog.item(1).map(|item| item.key), Some(ItemKey::E));
        assert_eq!(catalog.item(48).map(|item| item.key), Some(ItemKey::CO));
        assert!(catalog.item(49).is_none());
    }

    #[test]
    fn standard_groups_cover_every_item_once() {
        let catalog = ItemCatalog::standard();
        let mut seen = Vec::new();
        for group in ScoringGroup::ordered() {
            let ids = catalog.group(group);
            assert!(!ids.is_empty(), "group {group:?} should have items");
            seen.extend_from_slice(ids);
        }
        seen.sort_unstable();
        let expected: Vec<ItemId> = (1..=48).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn only_negatively_worded_items_are_reversed() {
        let catalog = ItemCatalog::standard();
        for item in catalog.items() {
            let negative = matches!(
                item.key,
                ItemKey::EsMinus | ItemKey::SaMinus | ItemKey::IcMinus
            );
            assert_eq!(item.reverse, negative, "item {} reverse flag", item.id);
        }
    }

    #[test]
    fn with_groups_rejects_unknown_and_duplicate_ids() {
        let items = vec![
            Item::new(1, "a", ItemKey::E, false),
            Item::new(2, "b", ItemKey::I, false),
        ];
        let groups = BTreeMap::from([(ScoringGroup::E, vec![1, 7])]);
        assert_eq!(
            ItemCatalog::with_groups(items.clone(), groups).unwrap_err(),
            CatalogError::UnknownItem {
                group: ScoringGroup::E,
                item: 7
            }
        );

        let duplicated = vec![items[0].clone(), items[0].clone()];
        assert_eq!(
            ItemCatalog::from_items(duplicated).unwrap_err(),
            CatalogError::DuplicateItem(1)
        );
    }

    #[test]
    fn adjusted_score_reverses_and_defaults_to_midpoint() {
        let forward = Item::new(1, "f", ItemKey::E, false);
        let reversed = Item::new(2, "r", ItemKey::EsMinus, true);
        assert_eq!(forward.adjusted_score(Some(6)), 6.0);
        assert_eq!(reversed.adjusted_score(Some(6)), 2.0);
        assert_eq!(reversed.adjusted_score(None), 4.0);
        assert_eq!(forward.adjusted_score(None), 4.0);
    }

    #[test]
    fn completeness_ignores_unknown_answer_ids() {
        let catalog = ItemCatalog::standard();
        let mut answers = AnswerSet::new();
        for id in 1..=47 {
            answers.record(id, 4).unwrap();
        }
        answers.record(99, 4).unwrap();
        assert_eq!(catalog.answered_count(&answers), 47);
        assert!(!catalog.is_complete(&answers));

        answers.record(48, 4).unwrap();
        assert!(catalog.is_complete(&answers));
    }
}
