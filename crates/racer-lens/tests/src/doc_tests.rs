use super::*;

#[test]
fn none_and_empty_input_yield_none() {
    assert_eq!(sanitize_doc(None), None);
    assert_eq!(sanitize_doc(Some("")), None);
}

#[test]
fn drops_hidden_lines_inside_fences_only() {
    let doc = "# Examples\n\n```\n# use std::fmt;\nlet x = 1;\n```\n# Panics";
    assert_eq!(
        sanitize_doc(Some(doc)).as_deref(),
        Some("# Examples\n\n```\nlet x = 1;\n```\n# Panics")
    );
}

#[test]
fn fences_with_info_string_toggle() {
    let doc = "```rust\n    # fn main() {\nfoo();\n    # }\n```";
    assert_eq!(sanitize_doc(Some(doc)).as_deref(), Some("```rust\nfoo();\n```"));
}

#[test]
fn attributes_and_bare_hashes_are_kept() {
    let doc = "```\n#[derive(Debug)]\n#\nstruct S;\n```";
    assert_eq!(sanitize_doc(Some(doc)).as_deref(), Some(doc));
}

#[test]
fn unterminated_fence_stays_open() {
    let doc = "text\n```\n# hidden\nstill code";
    assert_eq!(sanitize_doc(Some(doc)).as_deref(), Some("text\n```\nstill code"));
}

#[test]
fn crlf_line_endings_are_normalized() {
    let doc = "a\r\n```\r\n# hidden\r\nb\r\n```\r\n";
    assert_eq!(sanitize_doc(Some(doc)).as_deref(), Some("a\n```\nb\n```\n"));
}

#[test]
fn text_without_fences_is_unchanged() {
    let doc = "Line one.\n\n# Heading\nLine two.\n";
    assert_eq!(sanitize_doc(Some(doc)).as_deref(), Some(doc));
}
