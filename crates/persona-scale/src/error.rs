use crate::config::ConfigError;
use crate::quiz::export::ExportError;
use crate::quiz::share::ShareCodeError;
use crate::quiz::storage::StorageError;
use crate::quiz::{AnswerError, ContentError, ItemId};
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Answers(AnswerError),
    Content(ContentError),
    Storage(StorageError),
    Share(ShareCodeError),
    Export(ExportError),
    UnknownItem { item: ItemId },
    UnknownPreset { key: String },
    Incomplete { answered: usize, total: usize },
    NoResults,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Json(err) => write!(f, "invalid JSON: {}", err),
            AppError::Answers(err) => write!(f, "invalid answers: {}", err),
            AppError::Content(err) => write!(f, "content error: {}", err),
            AppError::Storage(err) => write!(f, "storage error: {}", err),
            AppError::Share(err) => write!(f, "share error: {}", err),
            AppError::Export(err) => write!(f, "export error: {}", err),
            AppError::UnknownItem { item } => write!(f, "no questionnaire item with id {}", item),
            AppError::UnknownPreset { key } => write!(
                f,
                "unknown preset `{}`; run `persona-scale preset --list`",
                key
            ),
            AppError::Incomplete { answered, total } => write!(
                f,
                "questionnaire incomplete: {} of {} items answered",
                answered, total
            ),
            AppError::NoResults => write!(f, "no results yet; submit the questionnaire first"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Answers(err) => Some(err),
            AppError::Content(err) => Some(err),
            AppError::Storage(err) => Some(err),
            AppError::Share(err) => Some(err),
            AppError::Export(err) => Some(err),
            AppError::UnknownItem { .. }
            | AppError::UnknownPreset { .. }
            | AppError::Incomplete { .. }
            | AppError::NoResults => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<AnswerError> for AppError {
    fn from(value: AnswerError) -> Self {
        Self::Answers(value)
    }
}

impl From<ContentError> for AppError {
    fn from(value: ContentError) -> Self {
        Self::Content(value)
    }
}

impl From<StorageError> for AppError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<ShareCodeError> for AppError {
    fn from(value: ShareCodeError) -> Self {
        Self::Share(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn wraps_module_errors_with_source() {
        let err = AppError::from(AnswerError::OutOfRange { item: 3, score: 9 });
        assert_eq!(
            err.to_string(),
            "invalid answers: score 9 for item 3 is outside the 1-7 scale"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn incomplete_reports_counts() {
        let err = AppError::Incomplete {
            answered: 40,
            total: 48,
        };
        assert_eq!(
            err.to_string(),
            "questionnaire incomplete: 40 of 48 items answered"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn unknown_preset_points_at_the_listing() {
        let err = AppError::UnknownPreset {
            key: "xyz".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown preset `xyz`; run `persona-scale preset --list`"
        );
        assert!(err.source().is_none());
    }
}
