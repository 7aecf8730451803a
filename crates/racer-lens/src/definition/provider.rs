use std::path::Path;

use serde::Serialize;
use tracing::{debug, error};

use crate::{
    navigation::SourceRange,
    protocol::{DefinitionMatch, DiagnosticSink},
    racer::{QueryKind, RacerBackend, RacerQuery},
    response::{DefinitionResponse, parse_definition_blob},
};

/// How a candidate is listed when racer reports several definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionLabel {
    pub title: String,
    pub right_label: String,
}

/// Titles a candidate with its kind and labels it `file.rs (l. 12)`.
pub fn build_definition_label(m: &DefinitionMatch) -> DefinitionLabel {
    let file_name = Path::new(&m.source).file_name().map_or_else(|| m.source.clone(), |n| n.to_string_lossy().into_owned());
    DefinitionLabel {
        title: m.kind.to_string(),
        right_label: format!("{file_name} (l. {})", m.row),
    }
}

/// Answers go-to-definition requests through racer.
pub struct DefinitionProvider<B> {
    backend: B,
}

impl<B: RacerBackend> DefinitionProvider<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
        }
    }

    /// Looks up the definition of the word covering `range`. Racer is asked
    /// at the end of the range. A racer failure is logged and treated as no
    /// result.
    pub async fn provide(
        &self,
        path: &Path,
        buffer: &str,
        range: SourceRange,
        sink: &mut dyn DiagnosticSink,
    ) -> DefinitionResponse<DefinitionLabel> {
        let query = RacerQuery::new(QueryKind::FindDefinition, path, range.end, buffer);
        let output = match self.backend.run(&query).await {
            Ok(output) => output,
            Err(e) => {
                error!("Racer find-definition failed for {}: {e}", path.display());
                return DefinitionResponse::NoResult;
            }
        };

        let response = parse_definition_blob(&output, range, build_definition_label, sink);
        debug!("Definition lookup in {} resolved to {}", path.display(), response_shape(&response));
        response
    }
}

fn response_shape<I>(response: &DefinitionResponse<I>) -> &'static str {
    match response {
        DefinitionResponse::NoResult => "no result",
        DefinitionResponse::Direct { .. } => "a single target",
        DefinitionResponse::Disambiguation { .. } => "several candidates",
    }
}

#[cfg(test)]
#[path = "../../tests/src/definition/provider_tests.rs"]
mod tests;
