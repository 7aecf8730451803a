use super::*;

fn function_match(context: Option<&str>) -> CompletionMatch {
    CompletionMatch {
        text: "get".to_string(),
        snippet: Some("get(${1:k})".to_string()),
        row: 10,
        column: 4,
        source: "src/map.rs".to_string(),
        kind: MatchKind::Function,
        context: context.map(str::to_string),
        doc: Some("Returns a value.\n\n```\n# use map::Map;\nlet v = m.get(1);\n```".to_string()),
    }
}

#[test]
fn function_suggestion_splits_signature_into_labels() {
    let m = function_match(Some("pub unsafe fn get<K>(&self, k: K) -> Option<&V> where K: Hash"));
    let settings = CompletionSettings {
        show_doc: false,
        signature_in_doc: false,
    };

    let suggestion = build_suggestion(m, &settings);
    assert_eq!(suggestion.display_text, "get<K>(&self, k: K)");
    assert_eq!(suggestion.left_label.as_deref(), Some("pub unsafe"));
    assert_eq!(suggestion.right_label.as_deref(), Some("-> Option<&V> where K: Hash"));
    assert_eq!(suggestion.snippet.as_deref(), Some("get(${1:k})"));
    assert_eq!(suggestion.kind, MatchKind::Function);
    assert_eq!(suggestion.description_markdown, None);
}

#[test]
fn signature_and_sanitized_doc_are_combined() {
    let m = function_match(Some("fn get(&self) -> u8"));
    let suggestion = build_suggestion(m, &CompletionSettings::default());

    assert_eq!(suggestion.left_label, None);
    assert_eq!(
        suggestion.description_markdown.as_deref(),
        Some("`get(&self) -> u8`\n\nReturns a value.\n\n```\nlet v = m.get(1);\n```")
    );
}

#[test]
fn doc_only_when_signature_is_disabled() {
    let m = function_match(Some("fn get(&self)"));
    let settings = CompletionSettings {
        show_doc: true,
        signature_in_doc: false,
    };

    let suggestion = build_suggestion(m, &settings);
    assert_eq!(suggestion.right_label, None);
    assert_eq!(
        suggestion.description_markdown.as_deref(),
        Some("Returns a value.\n\n```\nlet v = m.get(1);\n```")
    );
}

#[test]
fn undecomposable_context_falls_back_to_raw_text() {
    let m = function_match(Some("fn get<K(&self"));
    let settings = CompletionSettings {
        show_doc: false,
        signature_in_doc: true,
    };

    let suggestion = build_suggestion(m, &settings);
    assert_eq!(suggestion.display_text, "get");
    assert_eq!(suggestion.right_label.as_deref(), Some("fn get<K(&self"));
    assert_eq!(suggestion.left_label, None);
    assert_eq!(suggestion.description_markdown, None);
}

#[test]
fn const_fn_context_is_split_into_labels() {
    let m = function_match(Some("pub const fn new() -> Vec<T>"));
    let settings = CompletionSettings {
        show_doc: false,
        signature_in_doc: true,
    };

    let suggestion = build_suggestion(m, &settings);
    assert_eq!(suggestion.display_text, "new()");
    assert_eq!(suggestion.left_label.as_deref(), Some("pub"));
    assert_eq!(suggestion.right_label.as_deref(), Some("-> Vec<T>"));
    assert_eq!(suggestion.description_markdown.as_deref(), Some("`pub new() -> Vec<T>`"));
}

#[test]
fn function_without_context_shows_its_kind() {
    let settings = CompletionSettings {
        show_doc: false,
        signature_in_doc: true,
    };

    let suggestion = build_suggestion(function_match(None), &settings);
    assert_eq!(suggestion.display_text, "get");
    assert_eq!(suggestion.left_label, None);
    assert_eq!(suggestion.right_label.as_deref(), Some("Function"));
    assert_eq!(suggestion.description_markdown, None);
}

#[test]
fn other_kinds_show_kind_on_the_right() {
    let m = CompletionMatch {
        text: "HashMap".to_string(),
        snippet: Some("HashMap".to_string()),
        row: 1,
        column: 0,
        source: "map.rs".to_string(),
        kind: MatchKind::Struct,
        context: Some("pub struct HashMap<K, V>".to_string()),
        doc: None,
    };

    let suggestion = build_suggestion(m, &CompletionSettings::default());
    assert_eq!(suggestion.display_text, "HashMap");
    assert_eq!(suggestion.right_label.as_deref(), Some("Struct"));
    assert_eq!(suggestion.description_markdown, None);
}

#[test]
fn serializes_with_camel_case_keys() {
    let m = function_match(Some("fn get(&self)"));
    let json = serde_json::to_value(build_suggestion(m, &CompletionSettings::default())).expect("serialize");

    assert_eq!(json["displayText"], "get(&self)");
    assert_eq!(json["kind"], "Function");
}
