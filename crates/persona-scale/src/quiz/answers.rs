use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type ItemId = u16;

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 7;
/// Score assumed for an unanswered item; carries no directional signal.
pub const LIKERT_MIDPOINT: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("score {score} for item {item} is outside the 1-7 scale")]
    OutOfRange { item: ItemId, score: u8 },
}

/// Item id to Likert score. Partial sets are valid input for scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<ItemId, u8>",
    into = "BTreeMap<ItemId, u8>"
)]
pub struct AnswerSet {
    scores: BTreeMap<ItemId, u8>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a score, returning the previous answer for the item if any.
    pub fn record(&mut self, item: ItemId, score: u8) -> Result<Option<u8>, AnswerError> {
        if !(LIKERT_MIN..=LIKERT_MAX).contains(&score) {
            return Err(AnswerError::OutOfRange { item, score });
        }
        Ok(self.scores.insert(item, score))
    }

    pub fn from_pairs<I>(pairs: I) -> Result<Self, AnswerError>
    where
        I: IntoIterator<Item = (ItemId, u8)>,
    {
        let mut answers = Self::new();
        for (item, score) in pairs {
            answers.record(item, score)?;
        }
        Ok(answers)
    }

    pub fn get(&self, item: ItemId) -> Option<u8> {
        self.scores.get(&item).copied()
    }

    pub fn remove(&mut self, item: ItemId) -> Option<u8> {
        self.scores.remove(&item)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, u8)> + '_ {
        self.scores.iter().map(|(item, score)| (*item, *score))
    }
}

impl TryFrom<BTreeMap<ItemId, u8>> for AnswerSet {
    type Error = AnswerError;

    fn try_from(value: BTreeMap<ItemId, u8>) -> Result<Self, Self::Error> {
        Self::from_pairs(value)
    }
}

impl From<AnswerSet> for BTreeMap<ItemId, u8> {
    fn from(value: AnswerSet) -> Self {
        value.scores
    }
}
