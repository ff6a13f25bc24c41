use std::rc::Rc;

use analyzer::{StyledToken, TokenStyle};
use evaluator::{Realm, Value, standard_realm};

use crate::HintOptions;
use crate::completion::resolve::RootKind;
use crate::tests::hint_dsl::t;

fn root(string: &str, style: Option<TokenStyle>) -> StyledToken {
    StyledToken {
        start: 0,
        end: string.len() as u32,
        string: string.to_string(),
        style,
        state: Rc::default(),
    }
}

#[test]
fn test_root_kind_by_style() {
    let cases = [
        (Some(TokenStyle::Variable), RootKind::Variable("a")),
        (Some(TokenStyle::Variable2), RootKind::Variable("a")),
        (Some(TokenStyle::String), RootKind::String),
        (Some(TokenStyle::String2), RootKind::Unresolved),
        (Some(TokenStyle::Atom), RootKind::Atom),
        (Some(TokenStyle::Function), RootKind::Function("a")),
        (Some(TokenStyle::Def), RootKind::Unresolved),
        (Some(TokenStyle::Number), RootKind::Unresolved),
        (None, RootKind::Unresolved),
    ];
    for (style, expected) in cases {
        let token = root("a", style);
        assert_eq!(RootKind::of(&token), expected, "style: {style:?}");
    }
}

#[test]
fn test_root_bases() {
    let realm = standard_realm();
    let options = HintOptions::default();

    assert_eq!(
        RootKind::String.base(realm, &options),
        realm.global_value("String")
    );
    assert_eq!(RootKind::Atom.base(realm, &options), Value::Number(1.0));
    assert_eq!(
        RootKind::Variable("Math").base(realm, &options),
        realm.global_value("Math")
    );
    assert_eq!(
        RootKind::Function("$").base(realm, &options),
        Value::Undefined
    );
    assert_eq!(
        RootKind::Unresolved.base(realm, &options),
        Value::Undefined
    );
}

#[test]
fn test_context_beats_global_namespace() {
    let mut realm = Realm::standard();
    let api = realm.plain_object();
    realm.set(api, "floorPlan", 1.0);

    t("Math.fl$0")
        .realm(realm.clone())
        .context("Math", api)
        .expect_labels(&["floorPlan"]);
    t("Math.fl$0")
        .realm(realm)
        .context("Math", Value::Null)
        .expect_labels(&["floor"]);
}

#[test]
fn test_context_survives_use_global_scope_false() {
    let mut realm = Realm::new();
    let api = realm.plain_object();
    let users = realm.array(vec![Value::string("ada")]);
    realm.set(api, "users", users);

    t("api.us$0")
        .realm(realm.clone())
        .context("api", api)
        .no_global_scope()
        .expect_labels(&["users"]);
    t("api.users.$0")
        .realm(realm.clone())
        .context("api", api)
        .no_global_scope()
        .expect_labels(&["0", "length"]);
    t("Math.$0").realm(realm).no_global_scope().expect_empty();
    t("document.$0").no_global_scope().expect_empty();
}

#[test]
fn test_primitive_context_values() {
    t("name.len$0")
        .context("name", "ada")
        .expect_labels(&["length"]);
    t("flag.to$0")
        .context("flag", true)
        .expect_labels(&["toString"]);
}
