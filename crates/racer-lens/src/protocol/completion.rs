use serde::Serialize;

use crate::protocol::{
    MatchKind, ParseFailureKind,
    escape::{COMPLETION_LINE_ESCAPES, DOC_ESCAPES, SEMICOLON_ESCAPES, decode, decode_optional, split_fields, unescaped_positions},
    parse_position_field, record_payload,
};

/// `text;snippet;row;column;source;kind;context;"doc"`
const FIELD_COUNT: usize = 8;

/// One record of `racer complete-with-snippet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionMatch {
    pub text: String,
    pub snippet: Option<String>,
    /// 1-based, as printed by racer.
    pub row: u32,
    pub column: u32,
    pub source: String,
    pub kind: MatchKind,
    pub context: Option<String>,
    pub doc: Option<String>,
}

/// Parses a single completion record line.
///
/// Lines look like
/// `MATCH text;snippet;row;column;source;kind;context;"doc"` where snippet,
/// context and doc may be empty.
pub fn parse_completion_line(line: &str) -> Result<CompletionMatch, ParseFailureKind> {
    let line = decode(line, COMPLETION_LINE_ESCAPES);
    let payload = record_payload(&line).ok_or(ParseFailureKind::MalformedRecordLine)?;

    let fields = split_fields(payload, ';', FIELD_COUNT);
    let [text, snippet, row, column, source, kind, context, doc] = fields.as_slice() else {
        return Err(ParseFailureKind::MalformedRecordLine);
    };
    if text.is_empty() || source.is_empty() || kind.is_empty() {
        return Err(ParseFailureKind::MalformedRecordLine);
    }

    let row = parse_position_field(row)?;
    let column = parse_position_field(column)?;
    let doc = quoted_doc(doc)?;

    Ok(CompletionMatch {
        text: (*text).to_string(),
        snippet: decode_optional(snippet, SEMICOLON_ESCAPES),
        row,
        column,
        source: decode(source, SEMICOLON_ESCAPES).into_owned(),
        kind: MatchKind::from(*kind),
        context: decode_optional(context, SEMICOLON_ESCAPES),
        doc,
    })
}

/// The doc field runs from its opening quote to the last unescaped quote on
/// the line.
fn quoted_doc(field: &str) -> Result<Option<String>, ParseFailureKind> {
    let inner = field.strip_prefix('"').ok_or(ParseFailureKind::MalformedRecordLine)?;
    let close = unescaped_positions(inner, '"').last().ok_or(ParseFailureKind::MalformedRecordLine)?;
    Ok(decode_optional(&inner[..close], DOC_ESCAPES))
}

#[cfg(test)]
#[path = "../../tests/src/protocol/completion_tests.rs"]
mod tests;
