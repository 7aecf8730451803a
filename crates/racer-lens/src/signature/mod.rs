//! Splits the one-line function context racer reports into its parts.
//!
//! This is not a Rust parser. It understands exactly the shape
//! `[vis] [qualifiers] fn name[<generics>](args) [-> ret] [where ...]` and
//! relies on bracket balancing for everything nested. Qualifiers other than
//! `unsafe` are accepted but not reported.

mod brackets;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub use brackets::find_closing;

/// Visibility, then any run of `default`, `const`, `async`, `unsafe` and
/// `extern "ABI"` before `fn`.
static QUALIFIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)^\s*(?:(pub(?:\s*\([^)]*\))?)\s+)?((?:(?:default|const|async|unsafe|extern(?:\s*"[^"]*")?)\s+)*)fn\s+(.*)$"#,
    )
    .expect("qualifier regex is valid")
});

static WHERE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|\s)where\s").expect("where regex is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecomposeError {
    #[error("signature does not match `[pub] [qualifiers] fn <name>`")]
    MissingQualifierMatch,
    #[error("unbalanced `{open}` in signature")]
    UnbalancedBracket { open: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecomposedSignature {
    pub identifier: String,
    pub visibility: Option<String>,
    pub unsafety: Option<String>,
    /// Includes the enclosing `<` and `>`.
    pub generics: Option<String>,
    /// Includes the enclosing parentheses.
    pub args: String,
    /// Without the `->` arrow.
    pub return_type: Option<String>,
    /// Starts with the `where` keyword.
    pub where_clause: Option<String>,
}

impl DecomposedSignature {
    /// Visibility and unsafety joined by a space, e.g. `pub unsafe`.
    pub fn qualifiers(&self) -> Option<String> {
        let parts: Vec<&str> = [self.visibility.as_deref(), self.unsafety.as_deref()].into_iter().flatten().collect();
        if parts.is_empty() { None } else { Some(parts.join(" ")) }
    }

    /// Name, generics and argument list, e.g. `map<U>(self, f: F)`.
    pub fn head(&self) -> String {
        format!("{}{}{}", self.identifier, self.generics.as_deref().unwrap_or(""), self.args)
    }

    /// Return type and where clause, e.g. `-> U where F: Fn(T) -> U`.
    pub fn tail(&self) -> Option<String> {
        match (&self.return_type, &self.where_clause) {
            (Some(ret), Some(clause)) => Some(format!("-> {ret} {clause}")),
            (Some(ret), None) => Some(format!("-> {ret}")),
            (None, Some(clause)) => Some(clause.clone()),
            (None, None) => None,
        }
    }
}

/// Decomposes a function context such as `pub fn get<K: Hash>(&self, k: K) -> Option<&V>`.
pub fn decompose_signature(context: &str) -> Result<DecomposedSignature, DecomposeError> {
    let caps = QUALIFIER_RE.captures(context).ok_or(DecomposeError::MissingQualifierMatch)?;
    let visibility = caps.get(1).map(|m| m.as_str().to_string());
    let unsafety = caps
        .get(2)
        .filter(|m| m.as_str().split_whitespace().any(|word| word == "unsafe"))
        .map(|_| "unsafe".to_string());
    let rest = caps.get(3).map_or("", |m| m.as_str());

    let paren = rest.find('(').ok_or(DecomposeError::UnbalancedBracket {
        open: '(',
    })?;
    let angle = rest.find('<').filter(|&idx| idx < paren);

    let identifier = rest[..angle.unwrap_or(paren)].trim();
    if identifier.is_empty() {
        return Err(DecomposeError::MissingQualifierMatch);
    }

    let (generics, after_generics) = match angle {
        Some(start) => {
            let end = find_closing(rest, '<', '>', start + 1, 1).ok_or(DecomposeError::UnbalancedBracket {
                open: '<',
            })?;
            (Some(rest[start..end].to_string()), rest[end..].trim_start())
        }
        None => (None, &rest[paren..]),
    };

    if !after_generics.starts_with('(') {
        return Err(DecomposeError::UnbalancedBracket {
            open: '(',
        });
    }
    let args_end = find_closing(after_generics, '(', ')', 1, 1).ok_or(DecomposeError::UnbalancedBracket {
        open: '(',
    })?;
    let args = after_generics[..args_end].to_string();

    let (return_type, where_clause) = split_trailing(after_generics[args_end..].trim());

    Ok(DecomposedSignature {
        identifier: identifier.to_string(),
        visibility,
        unsafety,
        generics,
        args,
        return_type,
        where_clause,
    })
}

/// Splits what follows the argument list into return type and where clause.
fn split_trailing(trailing: &str) -> (Option<String>, Option<String>) {
    if trailing.is_empty() {
        return (None, None);
    }

    match WHERE_RE.find(trailing) {
        Some(m) => {
            let where_clause = trailing[m.start()..].trim_start();
            (return_type(&trailing[..m.start()]), Some(where_clause.to_string()))
        }
        None => (return_type(trailing), None),
    }
}

fn return_type(candidate: &str) -> Option<String> {
    let candidate = candidate.trim();
    let candidate = candidate.strip_prefix("->").unwrap_or(candidate).trim();
    if candidate.is_empty() { None } else { Some(candidate.to_string()) }
}

#[cfg(test)]
#[path = "../../tests/src/signature/signature_tests.rs"]
mod tests;
