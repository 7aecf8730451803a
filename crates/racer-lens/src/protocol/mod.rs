//! Decoding of the line records racer prints on stdout.
//!
//! Racer answers `complete-with-snippet` with semicolon separated records and
//! `find-definition` with comma separated ones. Both start with the `MATCH`
//! marker; every other line of its output (`PREFIX`, `END`, ...) is noise for
//! our purposes.

pub(crate) mod completion;
pub(crate) mod definition;
pub(crate) mod escape;

use std::fmt;

use serde::Serialize;
use tracing::warn;

pub use completion::{CompletionMatch, parse_completion_line};
pub use definition::{DefinitionMatch, parse_definition_line};

/// Literal that opens every record line.
pub const MATCH_MARKER: &str = "MATCH";

/// Symbol category reported by racer in the `kind` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Struct,
    Module,
    MatchArm,
    Function,
    Crate,
    Let,
    IfLet,
    WhileLet,
    For,
    StructField,
    Impl,
    TraitImpl,
    Enum,
    EnumVariant,
    Type,
    FnArg,
    Trait,
    Const,
    Static,
    Macro,
    Builtin,
    /// A kind this crate does not know about, kept verbatim.
    Other(String),
}

impl MatchKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Struct => "Struct",
            Self::Module => "Module",
            Self::MatchArm => "MatchArm",
            Self::Function => "Function",
            Self::Crate => "Crate",
            Self::Let => "Let",
            Self::IfLet => "IfLet",
            Self::WhileLet => "WhileLet",
            Self::For => "For",
            Self::StructField => "StructField",
            Self::Impl => "Impl",
            Self::TraitImpl => "TraitImpl",
            Self::Enum => "Enum",
            Self::EnumVariant => "EnumVariant",
            Self::Type => "Type",
            Self::FnArg => "FnArg",
            Self::Trait => "Trait",
            Self::Const => "Const",
            Self::Static => "Static",
            Self::Macro => "Macro",
            Self::Builtin => "Builtin",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function)
    }
}

impl From<&str> for MatchKind {
    fn from(value: &str) -> Self {
        match value {
            "Struct" => Self::Struct,
            "Module" => Self::Module,
            "MatchArm" => Self::MatchArm,
            "Function" => Self::Function,
            "Crate" => Self::Crate,
            "Let" => Self::Let,
            "IfLet" => Self::IfLet,
            "WhileLet" => Self::WhileLet,
            "For" => Self::For,
            "StructField" => Self::StructField,
            "Impl" => Self::Impl,
            "TraitImpl" => Self::TraitImpl,
            "Enum" => Self::Enum,
            "EnumVariant" => Self::EnumVariant,
            "Type" => Self::Type,
            "FnArg" => Self::FnArg,
            "Trait" => Self::Trait,
            "Const" => Self::Const,
            "Static" => Self::Static,
            "Macro" => Self::Macro,
            "Builtin" => Self::Builtin,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MatchKind {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Why a `MATCH` line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParseFailureKind {
    /// The line does not follow the record field grammar.
    MalformedRecordLine,
    /// Row or column is not a non-negative integer.
    InvalidNumericField,
}

impl fmt::Display for ParseFailureKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::MalformedRecordLine => f.write_str("malformed record line"),
            Self::InvalidNumericField => f.write_str("invalid numeric field"),
        }
    }
}

/// A rejected line together with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFailure {
    pub line: String,
    pub kind: ParseFailureKind,
}

/// Receives one call per `MATCH` line that could not be parsed.
///
/// The parsers never present anything themselves; an editor integration
/// implements this to surface a warning, the CLI collects into a `Vec`.
pub trait DiagnosticSink {
    fn on_parse_failure(
        &mut self,
        raw_line: &str,
        kind: ParseFailureKind,
    );
}

impl DiagnosticSink for Vec<ParseFailure> {
    fn on_parse_failure(
        &mut self,
        raw_line: &str,
        kind: ParseFailureKind,
    ) {
        self.push(ParseFailure {
            line: raw_line.to_string(),
            kind,
        });
    }
}

/// Sink that reports failures through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn on_parse_failure(
        &mut self,
        raw_line: &str,
        kind: ParseFailureKind,
    ) {
        warn!("Failed to parse racer response line ({kind}): {raw_line}");
    }
}

/// Strips the `MATCH` marker and the whitespace that must follow it.
pub(crate) fn record_payload(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(MATCH_MARKER)?;
    let payload = rest.trim_start();
    if payload.len() == rest.len() {
        return None;
    }
    Some(payload)
}

/// Parses a row or column field. Only plain ASCII digits are accepted.
pub(crate) fn parse_position_field(field: &str) -> Result<u32, ParseFailureKind> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseFailureKind::InvalidNumericField);
    }
    field.parse().map_err(|_| ParseFailureKind::InvalidNumericField)
}

#[cfg(test)]
#[path = "../../tests/src/protocol/kind_tests.rs"]
mod tests;
