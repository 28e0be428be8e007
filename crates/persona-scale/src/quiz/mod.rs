pub mod answers;
pub mod catalog;
pub mod content;
pub mod domain;
pub mod export;
pub mod presets;
pub mod sanity;
pub mod scoring;
pub mod share;
pub mod storage;

pub use answers::{AnswerError, AnswerSet, ItemId, LIKERT_MAX, LIKERT_MIDPOINT, LIKERT_MIN};
pub use catalog::{CatalogError, Item, ItemCatalog, ItemKey, ScoringGroup};
pub use content::{ContentCatalog, ContentError};
pub use domain::{
    ChangeStance, CoreType, Interaction, Judgment, Level, Orientation, Perception, ValueFocus,
    Variant,
};
pub use sanity::{sanity_check, ContentGap};
pub use scoring::{
    calculate_raw_scores, calculate_results, calculate_traced_results, QuizResult, RawScores,
    ScoringEngine, ScoringTrace, TracedResult,
};
