use super::{Member, Prim};

/// Element-valued members of `document`, with their classes.
pub(super) const DOCUMENT_ELEMENTS: &[(&str, &str)] = &[
    ("documentElement", "HTMLHtmlElement"),
    ("head", "HTMLHeadElement"),
    ("body", "HTMLBodyElement"),
];

pub(super) fn document_instance() -> Vec<Member> {
    data![
        ("URL", Prim::Str("about:blank")),
        ("title", Prim::Str("")),
        ("cookie", Prim::Str("")),
        ("domain", Prim::Str("")),
        ("referrer", Prim::Str("")),
        ("readyState", Prim::Str("complete")),
        ("characterSet", Prim::Str("UTF-8")),
        ("forms", Prim::Object("HTMLCollection")),
        ("images", Prim::Object("HTMLCollection")),
        ("links", Prim::Object("HTMLCollection")),
        ("scripts", Prim::Object("HTMLCollection")),
    ]
}

pub(super) fn document_prototype() -> Vec<Member> {
    methods![
        "getElementById",
        "getElementsByClassName",
        "getElementsByName",
        "getElementsByTagName",
        "querySelector",
        "querySelectorAll",
        "createElement",
        "createElementNS",
        "createTextNode",
        "createComment",
        "createDocumentFragment",
        "createEvent",
        "createRange",
        "addEventListener",
        "removeEventListener",
        "dispatchEvent",
        "hasFocus",
        "open",
        "close",
        "write",
        "writeln",
    ]
}

pub(super) fn element_prototype() -> Vec<Member> {
    let mut members = data![
        ("id", Prim::Str("")),
        ("className", Prim::Str("")),
        ("innerHTML", Prim::Str("")),
        ("outerHTML", Prim::Str("")),
        ("textContent", Prim::Str("")),
        ("tagName", Prim::Str("")),
        ("parentNode", Prim::Null),
        ("children", Prim::Object("HTMLCollection")),
        ("childNodes", Prim::Object("NodeList")),
        ("classList", Prim::Object("DOMTokenList")),
        ("style", Prim::Object("CSSStyleDeclaration")),
        ("dataset", Prim::Object("DOMStringMap")),
    ];
    members.extend(methods![
        "appendChild",
        "removeChild",
        "replaceChild",
        "insertBefore",
        "cloneNode",
        "contains",
        "getAttribute",
        "setAttribute",
        "removeAttribute",
        "hasAttribute",
        "getBoundingClientRect",
        "querySelector",
        "querySelectorAll",
        "addEventListener",
        "removeEventListener",
        "dispatchEvent",
        "focus",
        "blur",
        "click",
        "remove",
    ]);
    members
}

pub(super) fn location() -> Vec<Member> {
    let mut members = data![
        ("href", Prim::Str("about:blank")),
        ("origin", Prim::Str("null")),
        ("protocol", Prim::Str("about:")),
        ("host", Prim::Str("")),
        ("hostname", Prim::Str("")),
        ("port", Prim::Str("")),
        ("pathname", Prim::Str("blank")),
        ("search", Prim::Str("")),
        ("hash", Prim::Str("")),
    ];
    members.extend(methods!["assign", "reload", "replace", "toString"]);
    members
}

pub(super) fn navigator() -> Vec<Member> {
    let mut members = data![
        ("userAgent", Prim::Str("")),
        ("language", Prim::Str("en-US")),
        ("languages", Prim::Object("Array")),
        ("platform", Prim::Str("")),
        ("onLine", Prim::Bool(true)),
        ("cookieEnabled", Prim::Bool(true)),
        ("clipboard", Prim::Object("Clipboard")),
        ("geolocation", Prim::Object("Geolocation")),
    ];
    members.extend(methods!["sendBeacon", "vibrate"]);
    members
}

pub(super) fn storage_prototype() -> Vec<Member> {
    let mut members = data![("length", Prim::Number(0.0))];
    members.extend(methods!["clear", "getItem", "key", "removeItem", "setItem"]);
    members
}

pub(super) fn console() -> Vec<Member> {
    methods![
        "debug",
        "error",
        "info",
        "log",
        "warn",
        "dir",
        "table",
        "trace",
        "group",
        "groupCollapsed",
        "groupEnd",
        "clear",
        "count",
        "assert",
        "time",
        "timeEnd",
    ]
}

pub(super) fn window_functions() -> Vec<Member> {
    let mut members = methods![
        "parseInt",
        "parseFloat",
        "isNaN",
        "isFinite",
        "decodeURI",
        "decodeURIComponent",
        "encodeURI",
        "encodeURIComponent",
        "escape",
        "unescape",
        "alert",
        "confirm",
        "prompt",
        "setTimeout",
        "clearTimeout",
        "setInterval",
        "clearInterval",
        "requestAnimationFrame",
        "cancelAnimationFrame",
        "fetch",
        "addEventListener",
        "removeEventListener",
        "open",
        "close",
        "scrollTo",
        "getComputedStyle",
    ];
    members.extend(data![
        ("innerWidth", Prim::Number(0.0)),
        ("innerHeight", Prim::Number(0.0)),
        ("name", Prim::Str("")),
        ("opener", Prim::Null),
        ("status", Prim::Str("")),
        ("closed", Prim::Bool(false)),
        ("onload", Prim::Null),
        ("frameElement", Prim::Undefined),
    ]);
    members
}
