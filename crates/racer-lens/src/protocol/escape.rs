//! Escape-aware field splitting and decoding for racer records.
//!
//! Racer escapes delimiters inside a field with a backslash. Splitting has to
//! skip those escaped delimiters before any decoding happens, so the two steps
//! are kept separate: [`split_fields`] cuts a record into raw slices, and
//! [`decode`] resolves the escapes a given field is allowed to carry.

use std::borrow::Cow;

pub(crate) const ESCAPE: char = '\\';

/// Escapes resolved in snippet, source and context fields of completion records.
pub(crate) const SEMICOLON_ESCAPES: &[char] = &[';'];
/// Escapes resolved in the quoted documentation field.
pub(crate) const DOC_ESCAPES: &[char] = &[';', 'n', '"', '\\'];
/// Escapes resolved in source and context fields of definition records.
pub(crate) const COMMA_ESCAPES: &[char] = &[','];
/// Racer escapes single quotes anywhere on a completion line.
pub(crate) const COMPLETION_LINE_ESCAPES: &[char] = &['\''];
/// Definition lines additionally carry `\;` outside of any semicolon grammar.
pub(crate) const DEFINITION_LINE_ESCAPES: &[char] = &['\'', ';'];

/// Byte offsets of every `target` that is not preceded by an escape.
///
/// A backslash always consumes the character after it, so `\\;` yields the
/// `;` while `\;` does not.
pub(crate) fn unescaped_positions(
    text: &str,
    target: char,
) -> impl Iterator<Item = usize> + '_ {
    let mut escaped = false;
    text.char_indices().filter_map(move |(idx, ch)| {
        if escaped {
            escaped = false;
            return None;
        }
        if ch == ESCAPE {
            escaped = true;
            return None;
        }
        (ch == target).then_some(idx)
    })
}

/// Splits `text` at unescaped `delimiter`s into at most `limit` fields.
///
/// The last field receives the remainder of the text, delimiters included.
pub(crate) fn split_fields(
    text: &str,
    delimiter: char,
    limit: usize,
) -> Vec<&str> {
    let limit = limit.max(1);
    let mut fields = Vec::with_capacity(limit);
    let mut start = 0;

    for idx in unescaped_positions(text, delimiter) {
        if fields.len() + 1 == limit {
            break;
        }
        fields.push(&text[start..idx]);
        start = idx + delimiter.len_utf8();
    }
    fields.push(&text[start..]);

    fields
}

/// Resolves the escapes listed in `escapes` in a single left-to-right pass.
///
/// `escapes` names the character following the backslash; `n` decodes to a
/// newline, everything else to itself. Escapes not in the list are kept
/// verbatim, together with their backslash.
pub(crate) fn decode<'a>(
    field: &'a str,
    escapes: &[char],
) -> Cow<'a, str> {
    if !field.contains(ESCAPE) {
        return Cow::Borrowed(field);
    }

    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars();
    while let Some(ch) = chars.next() {
        if ch != ESCAPE {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some(next) if escapes.contains(&next) => out.push(unescaped_char(next)),
            Some(next) => {
                out.push(ESCAPE);
                out.push(next);
            }
            None => out.push(ESCAPE),
        }
    }

    Cow::Owned(out)
}

/// Decodes an optional field; an empty field is treated as absent.
pub(crate) fn decode_optional(
    field: &str,
    escapes: &[char],
) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(decode(field, escapes).into_owned())
    }
}

fn unescaped_char(escaped: char) -> char {
    match escaped {
        'n' => '\n',
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/src/protocol/escape_tests.rs"]
mod tests;
