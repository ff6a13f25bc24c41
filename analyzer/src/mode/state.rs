/// Lexical scope snapshot attached to every styled token.
///
/// Bindings are ordered newest first. `inner` holds the state of an embedded mode when the
/// buffer mixes languages; completion always reads the innermost one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeState {
    pub local_vars: Vec<String>,
    pub global_vars: Vec<String>,
    pub inner: Option<Box<ModeState>>,
}

impl ModeState {
    pub fn new(local_vars: Vec<String>, global_vars: Vec<String>) -> Self {
        Self {
            local_vars,
            global_vars,
            inner: None,
        }
    }

    /// Wraps `inner` as the embedded mode state of `self`.
    pub fn with_inner(mut self, inner: ModeState) -> Self {
        self.inner = Some(Box::new(inner));
        self
    }

    pub fn innermost(&self) -> &ModeState {
        let mut state = self;
        while let Some(inner) = state.inner.as_deref() {
            state = inner;
        }
        state
    }
}
