use serde::Serialize;
use tracing::debug;

use crate::{
    config::CompletionSettings,
    doc::sanitize_doc,
    protocol::{CompletionMatch, MatchKind},
    signature::decompose_signature,
};

/// A completion entry ready for an editor's suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub snippet: Option<String>,
    pub display_text: String,
    pub left_label: Option<String>,
    pub right_label: Option<String>,
    pub kind: MatchKind,
    pub description_markdown: Option<String>,
}

/// Builds the suggestion shown for one completion match.
///
/// Functions are shown as `name<generics>(args)` with qualifiers on the left
/// and the return type on the right. When the context cannot be decomposed
/// the raw context is shown instead.
pub fn build_suggestion(
    m: CompletionMatch,
    settings: &CompletionSettings,
) -> Suggestion {
    let mut left_label = None;
    let mut signature_doc = None;

    let function_context = m.context.as_deref().filter(|_| m.kind.is_function());
    let (display_text, right_label) = match function_context {
        Some(context) => match decompose_signature(context) {
            Ok(sig) => {
                left_label = sig.qualifiers();
                let head = sig.head();
                let tail = sig.tail();
                if settings.signature_in_doc {
                    let parts: Vec<&str> = [left_label.as_deref(), Some(head.as_str()), tail.as_deref()]
                        .into_iter()
                        .flatten()
                        .collect();
                    signature_doc = Some(format!("`{}`", parts.join(" ")));
                }
                (head, tail)
            }
            Err(e) => {
                debug!("Showing raw context for `{}`: {e}", m.text);
                (m.text.clone(), Some(context.to_string()))
            }
        },
        None => (m.text.clone(), Some(m.kind.to_string())),
    };

    let doc = if settings.show_doc { sanitize_doc(m.doc.as_deref()) } else { None };
    let description_markdown = match (signature_doc, doc) {
        (Some(signature), Some(doc)) => Some(format!("{signature}\n\n{doc}")),
        (signature, doc) => signature.or(doc),
    };

    Suggestion {
        snippet: m.snippet,
        display_text,
        left_label,
        right_label,
        kind: m.kind,
        description_markdown,
    }
}

#[cfg(test)]
#[path = "../../tests/src/completion/suggestion_tests.rs"]
mod tests;
