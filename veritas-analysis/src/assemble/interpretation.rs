//! Static interpretive content, loaded at startup.
//!
//! The engine decides *what the number is*; this table holds *what we
//! say about it*. Content (and its translations) is authored outside
//! the engine and loaded as plain key-value data — recommendation text
//! is looked up, never computed.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use veritas_core::errors::ConfigError;
use veritas_core::types::ScoreLevel;

/// Recommendation text per level for one dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelTexts {
    pub low: Option<String>,
    pub moderate: Option<String>,
    pub high: Option<String>,
    pub exceptional: Option<String>,
}

impl LevelTexts {
    fn get(&self, level: ScoreLevel) -> Option<&str> {
        match level {
            ScoreLevel::Low => self.low.as_deref(),
            ScoreLevel::Moderate => self.moderate.as_deref(),
            ScoreLevel::High => self.high.as_deref(),
            ScoreLevel::Exceptional => self.exceptional.as_deref(),
        }
    }
}

/// Per-dimension, per-level recommendation lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterpretationTable {
    entries: FxHashMap<String, LevelTexts>,
}

impl InterpretationTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a JSON table: `{ "dimension": { "low": "...", ... } }`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::ParseError {
            path: "<inline>".into(),
            message: e.to_string(),
        })
    }

    /// Text for a `(dimension, level)` key, if the content covers it.
    pub fn get(&self, dimension: &str, level: ScoreLevel) -> Option<&str> {
        self.entries.get(dimension).and_then(|t| t.get(level))
    }

    pub fn insert(
        &mut self,
        dimension: impl Into<String>,
        level: ScoreLevel,
        text: impl Into<String>,
    ) {
        let entry = self.entries.entry(dimension.into()).or_default();
        let text = text.into();
        match level {
            ScoreLevel::Low => entry.low = Some(text),
            ScoreLevel::Moderate => entry.moderate = Some(text),
            ScoreLevel::High => entry.high = Some(text),
            ScoreLevel::Exceptional => entry.exceptional = Some(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_table_loads() {
        use std::io::Write;
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"drive": {{"moderate": "Set weekly goals."}}}}"#).unwrap();

        let table = InterpretationTable::load_from_file(f.path()).unwrap();
        assert_eq!(
            table.get("drive", ScoreLevel::Moderate),
            Some("Set weekly goals.")
        );
    }

    #[test]
    fn json_table_lookup() {
        let table = InterpretationTable::from_json(
            r#"{
                "resilience": {
                    "low": "Build a recovery routine.",
                    "high": "Mentor others on recovery habits."
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            table.get("resilience", ScoreLevel::Low),
            Some("Build a recovery routine.")
        );
        assert_eq!(table.get("resilience", ScoreLevel::Moderate), None);
        assert_eq!(table.get("unknown", ScoreLevel::Low), None);
    }
}
