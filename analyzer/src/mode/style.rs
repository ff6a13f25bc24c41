use std::fmt;

/// Style tag a mode assigns to a token, rendered the way editors name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenStyle {
    /// Free or global identifier.
    Variable,
    /// Identifier bound in an enclosing function scope.
    Variable2,
    /// Binding occurrence (`var x`, parameters, function names).
    Def,
    Property,
    String,
    /// Template and regex literals.
    String2,
    Comment,
    Atom,
    Number,
    Keyword,
    Operator,
    /// Well-known library entry point (`$`, `jQuery`, `_`).
    Function,
}

impl TokenStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenStyle::Variable => "variable",
            TokenStyle::Variable2 => "variable-2",
            TokenStyle::Def => "def",
            TokenStyle::Property => "property",
            TokenStyle::String => "string",
            TokenStyle::String2 => "string-2",
            TokenStyle::Comment => "comment",
            TokenStyle::Atom => "atom",
            TokenStyle::Number => "number",
            TokenStyle::Keyword => "keyword",
            TokenStyle::Operator => "operator",
            TokenStyle::Function => "function",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let style = match name {
            "variable" => TokenStyle::Variable,
            "variable-2" => TokenStyle::Variable2,
            "def" => TokenStyle::Def,
            "property" => TokenStyle::Property,
            "string" => TokenStyle::String,
            "string-2" => TokenStyle::String2,
            "comment" => TokenStyle::Comment,
            "atom" => TokenStyle::Atom,
            "number" => TokenStyle::Number,
            "keyword" => TokenStyle::Keyword,
            "operator" => TokenStyle::Operator,
            "function" => TokenStyle::Function,
            _ => return None,
        };
        Some(style)
    }

    /// `variable`, `variable-2`: any style whose name starts with `variable`.
    pub fn is_variable(self) -> bool {
        self.as_str().starts_with("variable")
    }

    /// Styles whose name contains the word `string` or `comment`.
    pub fn is_string_or_comment(self) -> bool {
        matches!(
            self,
            TokenStyle::String | TokenStyle::String2 | TokenStyle::Comment
        )
    }
}

impl fmt::Display for TokenStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
