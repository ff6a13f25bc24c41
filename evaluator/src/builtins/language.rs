use super::{Member, Prim};

pub(super) const ERROR_SUBCLASSES: &[&str] = &[
    "TypeError",
    "RangeError",
    "SyntaxError",
    "ReferenceError",
    "EvalError",
    "URIError",
];

pub(super) fn object_statics() -> Vec<Member> {
    methods![
        "assign",
        "getOwnPropertyDescriptor",
        "getOwnPropertyDescriptors",
        "getOwnPropertyNames",
        "getOwnPropertySymbols",
        "is",
        "preventExtensions",
        "seal",
        "create",
        "defineProperties",
        "defineProperty",
        "freeze",
        "getPrototypeOf",
        "setPrototypeOf",
        "isExtensible",
        "isFrozen",
        "isSealed",
        "keys",
        "entries",
        "fromEntries",
        "values",
    ]
}

pub(super) fn object_prototype() -> Vec<Member> {
    methods![
        "__defineGetter__",
        "__defineSetter__",
        "hasOwnProperty",
        "__lookupGetter__",
        "__lookupSetter__",
        "isPrototypeOf",
        "propertyIsEnumerable",
        "toString",
        "valueOf",
        "toLocaleString",
    ]
}

pub(super) fn function_prototype() -> Vec<Member> {
    let mut members = data![("length", Prim::Number(0.0)), ("name", Prim::Str(""))];
    members.extend(methods!["apply", "bind", "call", "toString"]);
    members
}

pub(super) fn array_statics() -> Vec<Member> {
    methods!["isArray", "from", "of"]
}

pub(super) fn array_prototype() -> Vec<Member> {
    let mut members = data![("length", Prim::Number(0.0))];
    members.extend(methods![
        "concat",
        "copyWithin",
        "fill",
        "find",
        "findIndex",
        "findLast",
        "findLastIndex",
        "lastIndexOf",
        "pop",
        "push",
        "reverse",
        "shift",
        "unshift",
        "slice",
        "sort",
        "splice",
        "includes",
        "indexOf",
        "join",
        "keys",
        "entries",
        "values",
        "forEach",
        "filter",
        "flat",
        "flatMap",
        "map",
        "every",
        "some",
        "reduce",
        "reduceRight",
        "toLocaleString",
        "toString",
        "at",
    ]);
    members
}

pub(super) fn string_statics() -> Vec<Member> {
    methods!["fromCharCode", "fromCodePoint", "raw"]
}

pub(super) fn string_prototype() -> Vec<Member> {
    let mut members = data![("length", Prim::Number(0.0))];
    members.extend(methods![
        "anchor",
        "at",
        "big",
        "blink",
        "bold",
        "charAt",
        "charCodeAt",
        "codePointAt",
        "concat",
        "endsWith",
        "fontcolor",
        "fontsize",
        "fixed",
        "includes",
        "indexOf",
        "italics",
        "lastIndexOf",
        "link",
        "localeCompare",
        "match",
        "matchAll",
        "normalize",
        "padEnd",
        "padStart",
        "repeat",
        "replace",
        "replaceAll",
        "search",
        "slice",
        "small",
        "split",
        "strike",
        "sub",
        "substr",
        "substring",
        "sup",
        "startsWith",
        "toString",
        "trim",
        "trimStart",
        "trimLeft",
        "trimEnd",
        "trimRight",
        "toLocaleLowerCase",
        "toLocaleUpperCase",
        "toLowerCase",
        "toUpperCase",
        "valueOf",
    ]);
    members
}

pub(super) fn number_statics() -> Vec<Member> {
    let mut members = methods![
        "isFinite",
        "isInteger",
        "isNaN",
        "isSafeInteger",
        "parseFloat",
        "parseInt",
    ];
    members.extend(data![
        ("MAX_VALUE", Prim::Number(f64::MAX)),
        ("MIN_VALUE", Prim::Number(5e-324)),
        ("NaN", Prim::Number(f64::NAN)),
        ("NEGATIVE_INFINITY", Prim::Number(f64::NEG_INFINITY)),
        ("POSITIVE_INFINITY", Prim::Number(f64::INFINITY)),
        ("MAX_SAFE_INTEGER", Prim::Number(9_007_199_254_740_991.0)),
        ("MIN_SAFE_INTEGER", Prim::Number(-9_007_199_254_740_991.0)),
        ("EPSILON", Prim::Number(f64::EPSILON)),
    ]);
    members
}

pub(super) fn number_prototype() -> Vec<Member> {
    methods![
        "toExponential",
        "toFixed",
        "toPrecision",
        "toString",
        "valueOf",
        "toLocaleString",
    ]
}

pub(super) fn boolean_prototype() -> Vec<Member> {
    methods!["toString", "valueOf"]
}

pub(super) fn date_statics() -> Vec<Member> {
    methods!["now", "parse", "UTC"]
}

pub(super) fn date_prototype() -> Vec<Member> {
    methods![
        "toString",
        "toDateString",
        "toTimeString",
        "toISOString",
        "toUTCString",
        "getDate",
        "setDate",
        "getDay",
        "getFullYear",
        "setFullYear",
        "getHours",
        "setHours",
        "getMilliseconds",
        "setMilliseconds",
        "getMinutes",
        "setMinutes",
        "getMonth",
        "setMonth",
        "getSeconds",
        "setSeconds",
        "getTime",
        "setTime",
        "getTimezoneOffset",
        "getUTCDate",
        "setUTCDate",
        "getUTCDay",
        "getUTCFullYear",
        "setUTCFullYear",
        "getUTCHours",
        "setUTCHours",
        "getUTCMilliseconds",
        "setUTCMilliseconds",
        "getUTCMinutes",
        "setUTCMinutes",
        "getUTCMonth",
        "setUTCMonth",
        "getUTCSeconds",
        "setUTCSeconds",
        "valueOf",
        "toJSON",
        "toLocaleString",
        "toLocaleDateString",
        "toLocaleTimeString",
    ]
}

pub(super) fn regexp_prototype() -> Vec<Member> {
    let mut members = methods!["exec", "compile", "toString", "test"];
    members.extend(data![
        ("dotAll", Prim::Bool(false)),
        ("flags", Prim::Str("")),
        ("global", Prim::Bool(false)),
        ("hasIndices", Prim::Bool(false)),
        ("ignoreCase", Prim::Bool(false)),
        ("multiline", Prim::Bool(false)),
        ("source", Prim::Str("(?:)")),
        ("sticky", Prim::Bool(false)),
        ("unicode", Prim::Bool(false)),
    ]);
    members
}

pub(super) fn error_prototype() -> Vec<Member> {
    let mut members = data![("name", Prim::Str("Error")), ("message", Prim::Str(""))];
    members.extend(methods!["toString"]);
    members
}

pub(super) fn map_prototype() -> Vec<Member> {
    let mut members = methods![
        "get", "set", "has", "delete", "clear", "entries", "forEach", "keys",
    ];
    members.extend(data![("size", Prim::Number(0.0))]);
    members.extend(methods!["values"]);
    members
}

pub(super) fn set_prototype() -> Vec<Member> {
    let mut members = methods!["has", "add", "delete", "clear", "entries", "forEach"];
    members.extend(data![("size", Prim::Number(0.0))]);
    members.extend(methods!["values", "keys"]);
    members
}

pub(super) fn promise_statics() -> Vec<Member> {
    methods!["all", "allSettled", "any", "race", "resolve", "reject"]
}

pub(super) fn promise_prototype() -> Vec<Member> {
    methods!["then", "catch", "finally"]
}

pub(super) fn math() -> Vec<Member> {
    let mut members = methods![
        "abs", "acos", "acosh", "asin", "asinh", "atan", "atanh", "atan2", "ceil", "cbrt",
        "expm1", "clz32", "cos", "cosh", "exp", "floor", "fround", "hypot", "imul", "log",
        "log1p", "log2", "log10", "max", "min", "pow", "random", "round", "sign", "sin", "sinh",
        "sqrt", "tan", "tanh", "trunc",
    ];
    members.extend(data![
        ("E", Prim::Number(std::f64::consts::E)),
        ("LN10", Prim::Number(std::f64::consts::LN_10)),
        ("LN2", Prim::Number(std::f64::consts::LN_2)),
        ("LOG10E", Prim::Number(std::f64::consts::LOG10_E)),
        ("LOG2E", Prim::Number(std::f64::consts::LOG2_E)),
        ("PI", Prim::Number(std::f64::consts::PI)),
        ("SQRT1_2", Prim::Number(std::f64::consts::FRAC_1_SQRT_2)),
        ("SQRT2", Prim::Number(std::f64::consts::SQRT_2)),
    ]);
    members
}

pub(super) fn json() -> Vec<Member> {
    methods!["parse", "stringify"]
}
