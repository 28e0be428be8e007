//! Local key-value snapshot of the in-progress quiz.

use super::answers::AnswerSet;
use super::scoring::QuizResult;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const STATE_KEY: &str = "personalityQuizState";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access snapshot file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("snapshot file {path} is not a valid key-value document: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode quiz state: {0}")]
    Encode(#[source] serde_json::Error),
}

/// String key-value storage, the shape of a browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON object on disk; every write rewrites the whole document.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write_document(&self, document: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let io_error = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let payload = serde_json::to_string_pretty(document).map_err(StorageError::Encode)?;
        fs::write(&self.path, payload).map_err(io_error)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_document()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        let mut document = self.read_document()?;
        document.insert(key.to_string(), value);
        self.write_document(&document)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut document = self.read_document()?;
        if document.remove(key).is_some() {
            self.write_document(&document)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Welcome,
    Quiz,
    Results,
}

impl Screen {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Quiz => "quiz",
            Self::Results => "results",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredState {
    #[serde(default)]
    pub answers: AnswerSet,
    #[serde(default)]
    pub results: Option<QuizResult>,
    #[serde(default, rename = "currentScreen", alias = "current_screen")]
    pub current_screen: Screen,
}

impl StoredState {
    /// Started but not finished.
    pub fn is_incomplete(&self, total_questions: usize) -> bool {
        let answered = self.answers.len();
        answered > 0 && answered < total_questions
    }
}

/// Persists [`StoredState`] under [`STATE_KEY`] in any [`KeyValueStore`].
#[derive(Debug)]
pub struct QuizStateRepository<S> {
    store: S,
}

impl<S: KeyValueStore> QuizStateRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&mut self, state: &StoredState) -> Result<(), StorageError> {
        let payload = serde_json::to_string(state).map_err(StorageError::Encode)?;
        self.store.set(STATE_KEY, payload)?;
        debug!(
            answered = state.answers.len(),
            screen = state.current_screen.label(),
            "quiz state saved"
        );
        Ok(())
    }

    /// Loads the saved state. A snapshot that no longer parses is logged,
    /// removed, and reported as absent.
    pub fn load(&mut self) -> Result<Option<StoredState>, StorageError> {
        let Some(raw) = self.store.get(STATE_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<StoredState>(&raw) {
            Ok(state) => Ok(Some(state)),
            Err(err) => {
                warn!(%err, "failed to parse saved quiz state; discarding it");
                self.store.remove(STATE_KEY)?;
                Ok(None)
            }
        }
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(STATE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_requires_some_but_not_all_answers() {
        let mut state = StoredState::default();
        assert!(!state.is_incomplete(48));
        state.answers.record(1, 5).unwrap();
        assert!(state.is_incomplete(48));
        assert!(!state.is_incomplete(1));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let state: StoredState = serde_json::from_str(r#"{"answers":{"3":6}}"#).unwrap();
        assert_eq!(state.answers.get(3), Some(6));
        assert!(state.results.is_none());
        assert_eq!(state.current_screen, Screen::Welcome);
    }

    #[test]
    fn corrupt_snapshot_is_discarded() {
        let mut store = InMemoryStore::default();
        store.set(STATE_KEY, "{not json".to_string()).unwrap();
        let mut repository = QuizStateRepository::new(store);

        assert!(repository.load().unwrap().is_none());
        assert!(repository.store().get(STATE_KEY).unwrap().is_none());
    }

    #[test]
    fn save_then_load_restores_answers_and_screen() {
        let mut repository = QuizStateRepository::new(InMemoryStore::default());
        let mut state = StoredState {
            current_screen: Screen::Quiz,
            ..StoredState::default()
        };
        state.answers.record(10, 2).unwrap();

        repository.save(&state).unwrap();
        let loaded = repository.load().unwrap().expect("state saved");
        assert_eq!(loaded, state);

        repository.clear().unwrap();
        assert!(repository.load().unwrap().is_none());
    }
}
