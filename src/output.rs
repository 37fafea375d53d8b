//! Canonical two-field JSON output.

use clap::ValueEnum;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::models::ResolutionOutcome;

/// Name of the field carrying the resolved region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryKey {
    #[default]
    Result,
    /// Legacy key emitted by the spatial pipeline
    State,
}

impl PrimaryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryKey::Result => "result",
            PrimaryKey::State => "state",
        }
    }

    /// Hand-built line used only when encoding the real output fails
    fn fallback(&self) -> &'static str {
        match self {
            PrimaryKey::Result => r#"{"result":"","error":"failed to encode output"}"#,
            PrimaryKey::State => r#"{"state":"","error":"failed to encode output"}"#,
        }
    }
}

/// `{ <primary>: name, "error": message }`
pub struct CanonicalOutput<'a> {
    key: PrimaryKey,
    outcome: &'a ResolutionOutcome,
}

impl<'a> CanonicalOutput<'a> {
    pub fn new(key: PrimaryKey, outcome: &'a ResolutionOutcome) -> Self {
        Self { key, outcome }
    }

    /// Encode as a single JSON line. Never fails.
    pub fn to_json_line(&self) -> String {
        match serde_json::to_string(self) {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to encode output: {}", e);
                self.key.fallback().to_string()
            }
        }
    }
}

impl Serialize for CanonicalOutput<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.key.as_str(), self.outcome.name())?;
        map.serialize_entry("error", self.outcome.error())?;
        map.end()
    }
}

/// Render an outcome under the given key
pub fn render(outcome: &ResolutionOutcome, key: PrimaryKey) -> String {
    CanonicalOutput::new(key, outcome).to_json_line()
}
