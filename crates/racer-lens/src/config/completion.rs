use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Controls what goes into a suggestion's description.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    /// Append the item's sanitized documentation.
    pub show_doc: bool,
    /// Prefix the description with the function signature.
    pub signature_in_doc: bool,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            show_doc: true,
            signature_in_doc: true,
        }
    }
}

impl CompletionSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: CompletionSettingsPatch,
    ) {
        if let Some(v) = patch.show_doc {
            self.show_doc = v;
        }
        if let Some(v) = patch.signature_in_doc {
            self.signature_in_doc = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct CompletionSettingsPatch {
    pub(crate) show_doc: Option<bool>,
    pub(crate) signature_in_doc: Option<bool>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
