use expect_test::expect;

use super::*;

#[test]
fn plain_function_with_return_type() {
    let sig = decompose_signature("fn foo(x: i32) -> i32").expect("decomposes");
    assert_eq!(
        sig,
        DecomposedSignature {
            identifier: "foo".to_string(),
            visibility: None,
            unsafety: None,
            generics: None,
            args: "(x: i32)".to_string(),
            return_type: Some("i32".to_string()),
            where_clause: None,
        }
    );
}

#[test]
fn qualifiers_generics_and_where_clause() {
    let sig = decompose_signature("pub unsafe fn bar<T>(x: T) where T: Clone").expect("decomposes");
    assert_eq!(
        sig,
        DecomposedSignature {
            identifier: "bar".to_string(),
            visibility: Some("pub".to_string()),
            unsafety: Some("unsafe".to_string()),
            generics: Some("<T>".to_string()),
            args: "(x: T)".to_string(),
            return_type: None,
            where_clause: Some("where T: Clone".to_string()),
        }
    );
}

#[test]
fn return_type_and_where_clause_are_both_kept() {
    let sig = decompose_signature("pub fn map<U, F>(self, f: F) -> Option<U> where F: FnOnce(T) -> U")
        .expect("decomposes");
    assert_eq!(sig.generics.as_deref(), Some("<U, F>"));
    assert_eq!(sig.args, "(self, f: F)");
    assert_eq!(sig.return_type.as_deref(), Some("Option<U>"));
    assert_eq!(sig.where_clause.as_deref(), Some("where F: FnOnce(T) -> U"));
}

#[test]
fn nested_generics_and_arguments() {
    let sig = decompose_signature(
        "pub fn with_hasher<K: Hash + Eq, V: Into<Vec<Box<dyn Fn(u8) -> u8>>>>(map: HashMap<K, (V, Vec<(u8, u8)>)>) -> Result<(), Error<K>>",
    )
    .expect("decomposes");

    expect![[r#"
        DecomposedSignature {
            identifier: "with_hasher",
            visibility: Some(
                "pub",
            ),
            unsafety: None,
            generics: Some(
                "<K: Hash + Eq, V: Into<Vec<Box<dyn Fn(u8) -> u8>>>>",
            ),
            args: "(map: HashMap<K, (V, Vec<(u8, u8)>)>)",
            return_type: Some(
                "Result<(), Error<K>>",
            ),
            where_clause: None,
        }
    "#]]
    .assert_debug_eq(&sig);
}

#[test]
fn generics_in_arguments_only_are_not_function_generics() {
    let sig = decompose_signature("fn len(v: &Vec<u8>) -> usize").expect("decomposes");
    assert_eq!(sig.identifier, "len");
    assert_eq!(sig.generics, None);
    assert_eq!(sig.args, "(v: &Vec<u8>)");
}

#[test]
fn restricted_visibility_is_captured() {
    let sig = decompose_signature("pub(crate) fn helper()").expect("decomposes");
    assert_eq!(sig.visibility.as_deref(), Some("pub(crate)"));
    assert_eq!(sig.args, "()");
    assert_eq!(sig.return_type, None);
    assert_eq!(sig.where_clause, None);
}

#[test]
fn lifetimes_and_whitespace_before_arguments() {
    let sig = decompose_signature("unsafe fn from_raw <'a> (ptr: *const u8) -> &'a str").expect("decomposes");
    assert_eq!(sig.identifier, "from_raw");
    assert_eq!(sig.unsafety.as_deref(), Some("unsafe"));
    assert_eq!(sig.generics.as_deref(), Some("<'a>"));
    assert_eq!(sig.args, "(ptr: *const u8)");
    assert_eq!(sig.return_type.as_deref(), Some("&'a str"));
}

#[test]
fn where_inside_identifier_does_not_split() {
    let sig = decompose_signature("fn go(self) -> Somewhere").expect("decomposes");
    assert_eq!(sig.return_type.as_deref(), Some("Somewhere"));
    assert_eq!(sig.where_clause, None);
}

#[test]
fn missing_fn_keyword_fails() {
    assert_eq!(decompose_signature("struct Foo"), Err(DecomposeError::MissingQualifierMatch));
    assert_eq!(decompose_signature("let f = 1"), Err(DecomposeError::MissingQualifierMatch));
    assert_eq!(decompose_signature("fn (x: u8)"), Err(DecomposeError::MissingQualifierMatch));
}

#[test]
fn unbalanced_brackets_fail() {
    assert_eq!(
        decompose_signature("fn foo<T(x: T)"),
        Err(DecomposeError::UnbalancedBracket {
            open: '<',
        })
    );
    assert_eq!(
        decompose_signature("fn foo(x: (u8, u8)"),
        Err(DecomposeError::UnbalancedBracket {
            open: '(',
        })
    );
    assert_eq!(
        decompose_signature("fn foo"),
        Err(DecomposeError::UnbalancedBracket {
            open: '(',
        })
    );
}

#[test]
fn display_helpers_compose_labels() {
    let sig = decompose_signature("pub unsafe fn get<T>(&self) -> &T where T: Sized").expect("decomposes");
    assert_eq!(sig.qualifiers().as_deref(), Some("pub unsafe"));
    assert_eq!(sig.head(), "get<T>(&self)");
    assert_eq!(sig.tail().as_deref(), Some("-> &T where T: Sized"));

    let bare = decompose_signature("fn f()").expect("decomposes");
    assert_eq!(bare.qualifiers(), None);
    assert_eq!(bare.tail(), None);
}

#[test]
fn const_async_and_extern_qualifiers_are_accepted() {
    let new = decompose_signature("pub const fn new() -> Vec<T>").expect("const fn decomposes");
    assert_eq!(new.identifier, "new");
    assert_eq!(new.visibility.as_deref(), Some("pub"));
    assert_eq!(new.unsafety, None);
    assert_eq!(new.args, "()");
    assert_eq!(new.return_type.as_deref(), Some("Vec<T>"));

    let read = decompose_signature("pub async fn read(&mut self) -> usize").expect("async fn decomposes");
    assert_eq!(read.head(), "read(&mut self)");
    assert_eq!(read.tail().as_deref(), Some("-> usize"));

    let free = decompose_signature(r#"pub unsafe extern "C" fn free(p: *mut u8)"#).expect("extern fn decomposes");
    assert_eq!(free.identifier, "free");
    assert_eq!(free.qualifiers().as_deref(), Some("pub unsafe"));
    assert_eq!(free.args, "(p: *mut u8)");
    assert_eq!(free.return_type, None);

    let extern_only = decompose_signature(r#"extern "system" fn callback(code: i32)"#).expect("abi-only fn decomposes");
    assert_eq!(extern_only.qualifiers(), None);
    assert_eq!(extern_only.identifier, "callback");
}

#[test]
fn unsafe_is_reported_anywhere_in_the_qualifier_run() {
    let sig = decompose_signature("pub const unsafe fn from_utf8_unchecked(v: &[u8]) -> &str").expect("decomposes");
    assert_eq!(sig.identifier, "from_utf8_unchecked");
    assert_eq!(sig.unsafety.as_deref(), Some("unsafe"));
    assert_eq!(sig.args, "(v: &[u8])");
    assert_eq!(sig.return_type.as_deref(), Some("&str"));

    let specialized = decompose_signature("default unsafe fn get_unchecked(&self, i: usize) -> &T").expect("decomposes");
    assert_eq!(specialized.qualifiers().as_deref(), Some("unsafe"));
}

#[test]
fn qualifier_words_without_fn_still_fail() {
    assert_eq!(decompose_signature("pub const MAX: usize = 8"), Err(DecomposeError::MissingQualifierMatch));
    assert_eq!(decompose_signature("pub async move"), Err(DecomposeError::MissingQualifierMatch));
}
