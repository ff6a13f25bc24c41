//! Named hint helpers per editor mode.

use std::fmt;

use analyzer::{Dialect, Pos, StyledToken, TokenStyle};
use indexmap::IndexMap;

use crate::completion::is_word;
use crate::editor::Editor;
use crate::options::HintOptions;
use crate::{HintResult, script_hint};

/// A hint entry point for one mode.
pub type HintHelper = fn(&dyn Editor, &HintOptions<'_>) -> Option<HintResult>;

/// Mode name → hint helper.
#[derive(Clone)]
pub struct HintRegistry {
    helpers: IndexMap<String, HintHelper>,
}

impl Default for HintRegistry {
    /// Registers `javascript` and `coffeescript`.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Dialect::JavaScript.name(), javascript_hint);
        registry.register(Dialect::CoffeeScript.name(), coffeescript_hint);
        registry
    }
}

impl HintRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self {
            helpers: IndexMap::new(),
        }
    }

    /// Registers `helper` for `mode`, replacing any previous helper.
    pub fn register(&mut self, mode: impl Into<String>, helper: HintHelper) {
        self.helpers.insert(mode.into(), helper);
    }

    pub fn get(&self, mode: &str) -> Option<HintHelper> {
        self.helpers.get(mode).copied()
    }

    pub fn modes(&self) -> impl Iterator<Item = &str> {
        self.helpers.keys().map(String::as_str)
    }

    /// Runs the helper registered for `mode`; `None` for unknown modes.
    pub fn hint(
        &self,
        mode: &str,
        editor: &dyn Editor,
        options: &HintOptions<'_>,
    ) -> Option<HintResult> {
        let helper = self.get(mode)?;
        helper(editor, options)
    }
}

impl fmt::Debug for HintRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.modes()).finish()
    }
}

pub fn javascript_hint(editor: &dyn Editor, options: &HintOptions<'_>) -> Option<HintResult> {
    script_hint(editor, &javascript_token, options)
}

pub fn coffeescript_hint(editor: &dyn Editor, options: &HintOptions<'_>) -> Option<HintResult> {
    script_hint(editor, &coffeescript_token, options)
}

fn javascript_token(editor: &dyn Editor, pos: Pos) -> StyledToken {
    editor.token_at(pos)
}

/// CoffeeScript fuses the dot into member tokens (`.name`); split it back out.
///
/// With the cursor right after the dot the token becomes a zero-width `.`; otherwise the dot is
/// stripped and the rest is a property.
pub fn coffeescript_token(editor: &dyn Editor, pos: Pos) -> StyledToken {
    let mut token = editor.token_at(pos);
    if pos.ch == token.start + 1 && token.string.starts_with('.') {
        token.end = token.start;
        token.string = ".".to_string();
        token.style = Some(TokenStyle::Property);
    } else if let Some(name) = token.string.strip_prefix('.')
        && is_word(name)
    {
        token.string = name.to_string();
        token.start += 1;
        token.style = Some(TokenStyle::Property);
    }
    token
}
