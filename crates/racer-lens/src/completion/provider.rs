use std::path::Path;

use tracing::{debug, error};

use crate::{
    completion::suggestion::{Suggestion, build_suggestion},
    config::CompletionSettings,
    navigation::Position,
    protocol::DiagnosticSink,
    racer::{QueryKind, RacerBackend, RacerQuery},
    response::parse_completion_blob,
};

/// Answers completion requests by asking racer and parsing its reply.
pub struct CompletionProvider<B> {
    backend: B,
    settings: CompletionSettings,
}

impl<B: RacerBackend> CompletionProvider<B> {
    pub fn new(
        backend: B,
        settings: CompletionSettings,
    ) -> Self {
        Self {
            backend,
            settings,
        }
    }

    /// Suggestions for `position` in `buffer`. A racer failure is logged and
    /// yields no suggestions.
    pub async fn provide(
        &self,
        path: &Path,
        buffer: &str,
        position: Position,
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<Suggestion> {
        let query = RacerQuery::new(QueryKind::CompleteWithSnippet, path, position, buffer);
        let output = match self.backend.run(&query).await {
            Ok(output) => output,
            Err(e) => {
                error!("Racer completion failed for {}: {e}", path.display());
                return Vec::new();
            }
        };

        let suggestions = parse_completion_blob(&output, |m| build_suggestion(m, &self.settings), sink);
        debug!("Racer returned {} suggestions for {}", suggestions.len(), path.display());
        suggestions
    }
}
