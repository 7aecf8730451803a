use once_cell::sync::Lazy;
use regex::Regex;

static FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*```").expect("fence regex is valid"));
static HIDDEN_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#\s+").expect("hidden line regex is valid"));

/// Cleans up documentation extracted by racer for display.
///
/// Inside fenced code blocks, rustdoc hides lines starting with `# `; those
/// are dropped. Everything else, including headings outside fences, is kept
/// line for line. A fence left open at the end stays open.
pub fn sanitize_doc(doc: Option<&str>) -> Option<String> {
    let doc = doc.filter(|doc| !doc.is_empty())?;

    let mut in_code = false;
    let mut lines = Vec::new();
    for line in doc.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if FENCE_RE.is_match(line) {
            in_code = !in_code;
        } else if in_code && HIDDEN_LINE_RE.is_match(line) {
            continue;
        }
        lines.push(line);
    }

    Some(lines.join("\n"))
}

#[cfg(test)]
#[path = "../tests/src/doc_tests.rs"]
mod tests;
