use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Perception axis letter (S/N).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Perception {
    #[serde(rename = "S")]
    Sensing,
    #[serde(rename = "N")]
    Intuition,
}

impl Perception {
    pub const fn ordered() -> [Self; 2] {
        [Self::Intuition, Self::Sensing]
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Sensing => 'S',
            Self::Intuition => 'N',
        }
    }
}

/// Judging-function axis letter (T/F).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Judgment {
    #[serde(rename = "T")]
    Thinking,
    #[serde(rename = "F")]
    Feeling,
}

impl Judgment {
    pub const fn ordered() -> [Self; 2] {
        [Self::Thinking, Self::Feeling]
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Thinking => 'T',
            Self::Feeling => 'F',
        }
    }
}

/// Orientation axis letter (J/P).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "J")]
    Judging,
    #[serde(rename = "P")]
    Perceiving,
}

impl Orientation {
    pub const fn ordered() -> [Self; 2] {
        [Self::Judging, Self::Perceiving]
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Judging => 'J',
            Self::Perceiving => 'P',
        }
    }
}

/// Social-interaction letter (E/I) prefixed to the core type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interaction {
    #[serde(rename = "E")]
    Extraverted,
    #[serde(rename = "I")]
    Introverted,
}

impl Interaction {
    pub const fn ordered() -> [Self; 2] {
        [Self::Extraverted, Self::Introverted]
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Extraverted => 'E',
            Self::Introverted => 'I',
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Extraverted => "E",
            Self::Introverted => "I",
        }
    }
}

/// Assertive / Turbulent facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    #[serde(rename = "A")]
    Assertive,
    #[serde(rename = "T")]
    Turbulent,
}

impl Variant {
    pub const fn ordered() -> [Self; 2] {
        [Self::Assertive, Self::Turbulent]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Assertive => "A",
            Self::Turbulent => "T",
        }
    }
}

/// Banded level shared by social adaptability and identity clarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "高")]
    High,
    #[serde(rename = "中")]
    Medium,
    #[serde(rename = "低")]
    Low,
}

impl Level {
    pub const fn ordered() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "高",
            Self::Medium => "中",
            Self::Low => "低",
        }
    }
}

/// Self-transcendence versus self-enhancement balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueFocus {
    #[serde(rename = "ST")]
    SelfTranscendence,
    #[serde(rename = "SE")]
    SelfEnhancement,
    #[serde(rename = "STSE_Balance")]
    Balanced,
}

impl ValueFocus {
    pub const fn ordered() -> [Self; 3] {
        [Self::SelfTranscendence, Self::SelfEnhancement, Self::Balanced]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::SelfTranscendence => "ST",
            Self::SelfEnhancement => "SE",
            Self::Balanced => "STSE_Balance",
        }
    }
}

/// Openness-to-change versus conservation balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeStance {
    #[serde(rename = "OP")]
    OpennessToChange,
    #[serde(rename = "CO")]
    Conservation,
    #[serde(rename = "OPCO_Balance")]
    Balanced,
}

impl ChangeStance {
    pub const fn ordered() -> [Self; 3] {
        [Self::OpennessToChange, Self::Conservation, Self::Balanced]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::OpennessToChange => "OP",
            Self::Conservation => "CO",
            Self::Balanced => "OPCO_Balance",
        }
    }
}

/// Three-letter S/N + T/F + J/P combination. Built from the three axis enums, so
/// only the eight valid keys can exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CoreType {
    perception: Perception,
    judgment: Judgment,
    orientation: Orientation,
}

impl CoreType {
    pub const fn new(perception: Perception, judgment: Judgment, orientation: Orientation) -> Self {
        Self {
            perception,
            judgment,
            orientation,
        }
    }

    /// All eight keys, `NTJ` first.
    pub fn all() -> Vec<CoreType> {
        let mut keys = Vec::with_capacity(8);
        for perception in Perception::ordered() {
            for judgment in Judgment::ordered() {
                for orientation in Orientation::ordered() {
                    keys.push(CoreType::new(perception, judgment, orientation));
                }
            }
        }
        keys
    }

    pub const fn perception(&self) -> Perception {
        self.perception
    }

    pub const fn judgment(&self) -> Judgment {
        self.judgment
    }

    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.perception.letter(),
            self.judgment.letter(),
            self.orientation.letter()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a core type key (expected one of S/N, T/F, J/P)")]
pub struct CoreTypeParseError(pub String);

impl FromStr for CoreType {
    type Err = CoreTypeParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut letters = raw.trim().chars();
        let perception = match letters.next() {
            Some('S') => Perception::Sensing,
            Some('N') => Perception::Intuition,
            _ => return Err(CoreTypeParseError(raw.to_string())),
        };
        let judgment = match letters.next() {
            Some('T') => Judgment::Thinking,
            Some('F') => Judgment::Feeling,
            _ => return Err(CoreTypeParseError(raw.to_string())),
        };
        let orientation = match letters.next() {
            Some('J') => Orientation::Judging,
            Some('P') => Orientation::Perceiving,
            _ => return Err(CoreTypeParseError(raw.to_string())),
        };
        if letters.next().is_some() {
            return Err(CoreTypeParseError(raw.to_string()));
        }

        Ok(CoreType::new(perception, judgment, orientation))
    }
}

impl TryFrom<String> for CoreType {
    type Error = CoreTypeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CoreType> for String {
    fn from(value: CoreType) -> Self {
        value.to_string()
    }
}
