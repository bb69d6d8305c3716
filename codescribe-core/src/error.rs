use thiserror::Error;

/// Internal executor failures.
///
/// These never escape the dispatcher: `dispatch` converts every `Err`
/// into an error-flagged [`crate::ExecutionResult`]. Structural
/// validation, transpilation, and runtime execution failures are not
/// modeled here because they are part of a handler's normal output
/// (prefixed console lines), not exceptional control flow.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("script engine failure: {0}")]
    Engine(String),
    #[error("syntax error: {0}")]
    Syntax(String),
}

impl From<rquickjs::Error> for ExecError {
    fn from(err: rquickjs::Error) -> Self {
        ExecError::Engine(err.to_string())
    }
}
