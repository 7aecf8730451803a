//! Settings for the racer integration.
//!
//! Settings are split into one file per category. [`Settings`] aggregates
//! them and merges partial JSON payloads or a `racer-lens.toml` file over the
//! defaults.

pub(crate) mod completion;
pub(crate) mod logging;
pub(crate) mod racer;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use completion::CompletionSettings;
use completion::CompletionSettingsPatch;
use logging::LoggingSettingsPatch;
pub use logging::{LogLevel, LoggingSettings};
pub use racer::{DEFAULT_RACER_COMMAND, RacerSettings};
use racer::RacerSettingsPatch;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub const SETTINGS_SECTION_KEY: &str = "racer-lens";
pub const SETTINGS_FILE_NAME: &str = "racer-lens.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub racer: RacerSettings,
    pub completion: CompletionSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    pub fn from_payload(payload: Option<&Value>) -> Self {
        let mut settings = Self::default();
        if let Some(payload) = payload {
            settings = settings.merged_with_payload(payload);
        }
        settings
    }

    pub fn merged_with_payload(
        &self,
        payload: &Value,
    ) -> Self {
        let mut merged = self.clone();

        for candidate in payload_candidates(payload) {
            match serde_json::from_value::<SettingsPatch>(candidate.clone()) {
                Ok(patch) => merged.apply_patch(patch),
                Err(e) => debug!("Ignoring settings payload: {e}"),
            }
        }

        merged.normalize();
        merged
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let payload: Value = toml::from_str(text)?;
        Ok(Self::from_payload(Some(&payload)))
    }

    /// Loads `path`, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn apply_patch(
        &mut self,
        patch: SettingsPatch,
    ) {
        if let Some(p) = patch.racer {
            self.racer.apply_patch(p);
        }
        if let Some(p) = patch.completion {
            self.completion.apply_patch(p);
        }
        if let Some(p) = patch.logging {
            self.logging.apply_patch(p);
        }
    }

    fn normalize(&mut self) {
        self.racer.normalize();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct SettingsPatch {
    racer: Option<RacerSettingsPatch>,
    completion: Option<CompletionSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

fn payload_candidates(payload: &Value) -> Vec<Value> {
    let mut candidates = Vec::new();
    candidates.push(payload.clone());
    if let Some(scoped) = payload.get(SETTINGS_SECTION_KEY) {
        candidates.push(scoped.clone());
    }
    candidates
}

#[cfg(test)]
#[path = "../../tests/src/config/settings_tests.rs"]
mod tests;
