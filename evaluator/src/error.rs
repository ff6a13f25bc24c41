use thiserror::Error;

/// Why an expression could not be evaluated to a value category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("syntax error: {0}")]
    Syntax(String),
    #[error("{0} is not defined")]
    Reference(String),
    #[error("unsupported expression: {0}")]
    Unsupported(String),
    #[error("{0} is not a constructor")]
    NotConstructor(String),
    #[error("{0}")]
    Construct(String),
}

/// Failure invoking a function value in a realm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("{0} is not a function")]
    NotCallable(String),
    #[error("uncaught exception: {0}")]
    Thrown(String),
}
