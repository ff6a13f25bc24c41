use analyzer::{Dialect, Pos};
use evaluator::{Callable, Realm};

use crate::{Buffer, EditorType, HintOptions, javascript_hint};
use crate::tests::hint_dsl::t;

// ----------------------------
// Chain roots
// ----------------------------

#[test]
fn test_string_root_with_regular_vocabulary() {
    t("\"hi\".$0")
        .editor_type(EditorType::Regular)
        .expect_contains_labels(&["init", "$outer", "charAt", "fromCharCode", "length"])
        .expect_order("init", "data")
        .expect_order("$outer", "length")
        .expect_range(5, 5)
        .expect_well_formed();
}

#[test]
fn test_template_root_is_unresolved() {
    t("`hi`.$0").expect_empty();
}

#[test]
fn test_atom_root_lists_number_prototype() {
    t("true.to$0").expect_labels(&[
        "toExponential",
        "toFixed",
        "toPrecision",
        "toString",
        "toLocaleString",
    ]);
}

#[test]
fn test_global_variable_root() {
    t("Math.fl$0")
        .expect_labels(&["floor"])
        .expect_range(5, 7);
}

#[test]
fn test_deep_chain() {
    t("window.document.createEl$0")
        .expect_labels(&["createElement", "createElementNS"]);
    t("window.window.self.Mat$0").expect_labels(&["Math"]);
}

#[test]
fn test_document_lists_instance_and_prototype_members() {
    t("document.$0")
        .expect_contains_labels(&["body", "title", "createElement", "querySelector"])
        .expect_order("title", "createElement")
        .expect_well_formed();
}

#[test]
fn test_nullish_link_yields_empty_list() {
    t("document.missing.$0").expect_empty();
    t("nothing.$0").expect_empty();
}

#[test]
fn test_library_functions_are_invoked() {
    let mut realm = Realm::standard();
    let instance = realm.plain_object();
    let fade = realm.function("fadeIn", Callable::Native);
    realm.set(instance, "fadeIn", fade);
    realm.set(instance, "find", fade);
    let jquery = realm.factory("jQuery", instance);
    realm.define_global("jQuery", jquery);

    t("$.f$0")
        .realm(realm.clone())
        .expect_labels(&["fadeIn", "find"]);
    t("jQuery.fa$0").realm(realm).expect_labels(&["fadeIn"]);
}

#[test]
fn test_library_without_callable_global_is_unresolved() {
    t("$.f$0").expect_empty();

    let mut realm = Realm::standard();
    let broken = realm.function(
        "_",
        Callable::Throws {
            message: "no lodash".to_string(),
        },
    );
    realm.define_global("_", broken);
    t("_.ma$0").realm(realm).expect_empty();
}

// ----------------------------
// Malformed chains
// ----------------------------

#[test]
fn test_malformed_chains_yield_nothing() {
    t("x .$0").expect_none();
    t("(a).$0").expect_none();
    t("a[0].$0").expect_none();
    t("f().b$0").expect_none();
}

#[test]
fn test_no_hint_after_whitespace_or_at_line_start() {
    t("x = $0").expect_none();
    t("$0document").expect_none();
}

#[test]
fn test_chain_on_later_line() {
    t("var a = 1;\n  Math.ro$0")
        .expect_labels(&["round"])
        .expect_range(7, 9);
}

#[test]
fn test_repeated_requests_are_identical() {
    let buffer = Buffer::new("document.get", Dialect::JavaScript).with_cursor(Pos::new(0, 12));
    let options = HintOptions::default();
    let first = javascript_hint(&buffer, &options);
    assert_eq!(first, javascript_hint(&buffer, &options));
    assert!(first.is_some_and(|result| !result.list.is_empty()));
}
