//! Static candidate tables.

use crate::options::EditorType;

const REGULAR: &[&str] = &[
    "init", "data", "computed", "directive", "extend", "Regular", "implement", "filter",
    "animation", "component", "use", "$compile", "destroy", "config", "parse", "$inject",
    "$watch", "$unwatch", "$update", "$get", "$refs", "$on", "$off", "$emit", "$mute", "$bind",
    "$root", "$outer",
];

const VUE: &[&str] = &[
    "init", "vue", "computed", "directive", "extend", "nextTick", "filter", "set", "delete",
    "component", "use", "mixin", "compile", "version", "data", "props", "propsData", "methods",
    "watch", "render", "renderError", "beforeCreate", "created", "beforeMount", "mounted",
    "beforeUpdate", "updated", "activated", "deactivated", "beforeDestroy", "destroyed",
    "delimiters", "model", "inheritAttrs", "comments", "$data", "$props", "$el", "$options",
    "$parent", "$root", "$children", "$slots", "$refs", "$isServer", "$attrs", "$listeners",
    "$watch", "$set", "$delete", "$on", "$once", "$off", "$emit", "$mount", "$forceUpdate",
    "$nextTick", "$destroy",
];

const REACT: &[&str] = &["React", "ReactDOM"];

/// Reserved words offered when the cursor is not inside a property access.
pub(crate) const KEYWORDS: &[&str] = &[
    "break", "case", "catch", "continue", "debugger", "default", "delete", "do", "else", "false",
    "finally", "for", "function", "if", "in", "instanceof", "new", "null", "return", "switch",
    "throw", "true", "try", "typeof", "var", "let", "const", "void", "while", "with",
];

/// Framework symbols listed ahead of runtime members.
pub(crate) fn vocabulary(editor_type: Option<EditorType>) -> &'static [&'static str] {
    match editor_type {
        Some(EditorType::Regular) => REGULAR,
        Some(EditorType::Vue) => VUE,
        Some(EditorType::React) => REACT,
        None => &[],
    }
}
