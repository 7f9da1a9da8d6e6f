//! JSON file holding the score tally under a fixed key.

use derive_getters::Getters;
use derive_new::new;
use noughts_core::ScoreTally;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

use crate::store::StoreError;

/// Key the tally is stored under.
pub const SCORE_STORAGE_KEY: &str = "ticTacToeScores";

/// Reads and writes the score tally in a JSON document on disk.
///
/// The document is a JSON object; the tally lives under
/// [`SCORE_STORAGE_KEY`] and any other keys are left alone.
#[derive(Debug, Clone, new, Getters)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Loads the saved tally.
    ///
    /// Never fails: a missing file or key yields a zeroed tally, and so does
    /// unreadable or corrupt data (with a warning).
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> ScoreTally {
        match self.try_load() {
            Ok(Some(tally)) => {
                info!(%tally, "Scores loaded");
                tally
            }
            Ok(None) => {
                debug!("No saved scores, starting from zero");
                ScoreTally::default()
            }
            Err(e) => {
                warn!(error = %e, "Saved scores unusable, starting from zero");
                ScoreTally::default()
            }
        }
    }

    /// Overwrites the saved tally, keeping other keys in the document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self, tally: &ScoreTally) -> Result<(), StoreError> {
        let mut document = match self.read_document() {
            Ok(Some(document)) => document,
            Ok(None) => Map::new(),
            Err(e) => {
                warn!(error = %e, "Replacing unreadable score file");
                Map::new()
            }
        };
        document.insert(SCORE_STORAGE_KEY.to_string(), serde_json::to_value(tally)?);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&Value::Object(document))?;
        std::fs::write(&self.path, content)?;

        debug!(%tally, "Scores saved");
        Ok(())
    }

    fn try_load(&self) -> Result<Option<ScoreTally>, StoreError> {
        let Some(document) = self.read_document()? else {
            return Ok(None);
        };
        document
            .get(SCORE_STORAGE_KEY)
            .map(|value| serde_json::from_value(value.clone()))
            .transpose()
            .map_err(StoreError::from)
    }

    fn read_document(&self) -> Result<Option<Map<String, Value>>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let value: Value = serde_json::from_str(&content)?;
        match value {
            Value::Object(document) => Ok(Some(document)),
            other => Err(StoreError::new(format!(
                "Expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
