use serde::Serialize;

use crate::protocol::{
    MatchKind, ParseFailureKind,
    escape::{COMMA_ESCAPES, DEFINITION_LINE_ESCAPES, decode, decode_optional, split_fields},
    parse_position_field, record_payload,
};

/// `text,row,column,source,kind,context`, plus one slot for anything racer
/// appends after the context.
const FIELD_LIMIT: usize = 7;

/// One record of `racer find-definition`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionMatch {
    pub text: String,
    /// 1-based, as printed by racer.
    pub row: u32,
    pub column: u32,
    pub source: String,
    pub kind: MatchKind,
    pub context: Option<String>,
}

/// Parses a single definition record line: `MATCH text,row,column,source,kind,context`.
///
/// The context stops at the next unescaped comma; trailing text is ignored.
pub fn parse_definition_line(line: &str) -> Result<DefinitionMatch, ParseFailureKind> {
    let line = decode(line, DEFINITION_LINE_ESCAPES);
    let payload = record_payload(&line).ok_or(ParseFailureKind::MalformedRecordLine)?;

    let fields = split_fields(payload, ',', FIELD_LIMIT);
    let [text, row, column, source, kind, rest @ ..] = fields.as_slice() else {
        return Err(ParseFailureKind::MalformedRecordLine);
    };
    if text.is_empty() || source.is_empty() || kind.is_empty() {
        return Err(ParseFailureKind::MalformedRecordLine);
    }

    Ok(DefinitionMatch {
        text: (*text).to_string(),
        row: parse_position_field(row)?,
        column: parse_position_field(column)?,
        source: decode(source, COMMA_ESCAPES).into_owned(),
        kind: MatchKind::from(*kind),
        context: rest.first().and_then(|context| decode_optional(context, COMMA_ESCAPES)),
    })
}

#[cfg(test)]
#[path = "../../tests/src/protocol/definition_tests.rs"]
mod tests;
