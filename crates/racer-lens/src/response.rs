//! Turns a whole racer stdout capture into results.

use serde::Serialize;
use tracing::debug;

use crate::{
    navigation::{Location, Navigate, Position, SourceRange},
    protocol::{
        CompletionMatch, DefinitionMatch, DiagnosticSink, MATCH_MARKER, ParseFailureKind, parse_completion_line,
        parse_definition_line,
    },
};

/// A definition candidate as shown in a disambiguation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionItem<I> {
    pub item: I,
    pub target: Location,
}

impl<I> DefinitionItem<I> {
    pub fn navigate(
        &self,
        navigator: &impl Navigate,
    ) {
        self.target.navigate(navigator);
    }
}

/// Outcome of a `find-definition` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "camelCase")]
pub enum DefinitionResponse<I> {
    /// Racer found nothing; the editor should do nothing.
    NoResult,
    /// Exactly one candidate; jump straight to it.
    Direct { range: SourceRange, target: Location },
    /// Several candidates; the user picks one.
    Disambiguation { range: SourceRange, items: Vec<DefinitionItem<I>> },
}

impl<I> DefinitionResponse<I> {
    pub fn is_no_result(&self) -> bool {
        matches!(self, Self::NoResult)
    }

    /// Navigates to the direct target. Returns `false` when there is no
    /// single target to jump to.
    pub fn navigate(
        &self,
        navigator: &impl Navigate,
    ) -> bool {
        match self {
            Self::Direct {
                target, ..
            } => {
                target.navigate(navigator);
                true
            }
            Self::NoResult | Self::Disambiguation { .. } => false,
        }
    }
}

/// Parses every completion record in `text` and maps it through `builder`.
///
/// Results keep the order of the input lines. Lines that fail to parse are
/// reported to `sink` and skipped.
pub fn parse_completion_blob<T>(
    text: &str,
    mut builder: impl FnMut(CompletionMatch) -> T,
    sink: &mut dyn DiagnosticSink,
) -> Vec<T> {
    parse_records(text, parse_completion_line, sink).into_iter().map(&mut builder).collect()
}

/// Parses every definition record in `text` and decides how the editor
/// should navigate.
pub fn parse_definition_blob<I>(
    text: &str,
    range: SourceRange,
    mut item_builder: impl FnMut(&DefinitionMatch) -> I,
    sink: &mut dyn DiagnosticSink,
) -> DefinitionResponse<I> {
    let mut matches = parse_records(text, parse_definition_line, sink);

    match matches.len() {
        0 => DefinitionResponse::NoResult,
        1 => {
            let only = matches.remove(0);
            DefinitionResponse::Direct {
                range,
                target: definition_target(&only),
            }
        }
        _ => {
            let items = matches
                .iter()
                .map(|m| DefinitionItem {
                    item: item_builder(m),
                    target: definition_target(m),
                })
                .collect();
            DefinitionResponse::Disambiguation {
                range,
                items,
            }
        }
    }
}

fn definition_target(m: &DefinitionMatch) -> Location {
    Location::new(&m.source, Position::from_racer(m.row, m.column))
}

fn parse_records<M>(
    text: &str,
    parse_line: impl Fn(&str) -> Result<M, ParseFailureKind>,
    sink: &mut dyn DiagnosticSink,
) -> Vec<M> {
    let mut records = Vec::new();

    for line in text.lines().filter(|line| line.starts_with(MATCH_MARKER)) {
        match parse_line(line) {
            Ok(record) => records.push(record),
            Err(kind) => {
                debug!("Skipping racer line ({kind}): {line}");
                sink.on_parse_failure(line, kind);
            }
        }
    }

    records
}

#[cfg(test)]
#[path = "../tests/src/response_tests.rs"]
mod tests;
