use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_RACER_COMMAND: &str = "racer";

/// How the racer executable is invoked.
#[derive(Debug, Clone, PartialEq)]
pub struct RacerSettings {
    pub command: String,
    /// Appended after racer's positional arguments.
    pub extra_args: Vec<String>,
}

impl Default for RacerSettings {
    fn default() -> Self {
        Self {
            command: DEFAULT_RACER_COMMAND.to_string(),
            extra_args: Vec::new(),
        }
    }
}

impl RacerSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: RacerSettingsPatch,
    ) {
        if let Some(v) = patch.command {
            self.command = v;
        }
        if let Some(v) = patch.extra_args {
            self.extra_args = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        self.command = self.command.trim().to_string();
        if self.command.is_empty() {
            self.command = DEFAULT_RACER_COMMAND.to_string();
        }
        self.extra_args = self.extra_args.iter().map(|a| a.trim().to_string()).filter(|a| !a.is_empty()).collect();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RacerSettingsPatch {
    pub(crate) command: Option<String>,
    pub(crate) extra_args: Option<Vec<String>>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
