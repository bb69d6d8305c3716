//! The execution contract: request and result types, plus the console
//! collector that executors write their output through.

use serde::Serialize;

/// Horizontal rule used between sections of executor output.
pub const SEPARATOR: &str = "------------------------";

/// A single run of the execution service: arbitrary source text plus a
/// raw language tag. Unrecognized tags take the generic preview path in
/// the dispatcher rather than being rejected.
#[derive(Debug, Clone)]
pub struct ExecutionRequest {
    pub code: String,
    pub language: String,
}

impl ExecutionRequest {
    pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
        ExecutionRequest {
            code: code.into(),
            language: language.into(),
        }
    }
}

/// Ordered console lines plus an error indicator. `output` is never
/// empty: executors that produce nothing get a generic success line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    pub output: Vec<String>,
    pub error: bool,
}

impl ExecutionResult {
    pub fn failure(output: Vec<String>) -> Self {
        ExecutionResult {
            output,
            error: true,
        }
    }
}

/// Output collector threaded through every executor.
///
/// This replaces the original design's temporary override of shared
/// console bindings: each invocation owns its collector, so there is no
/// global state to corrupt and nothing to restore on exit paths.
#[derive(Debug, Default)]
pub struct Console {
    lines: Vec<String>,
    error: bool,
}

impl Console {
    pub fn new() -> Self {
        Console::default()
    }

    /// Append a plain output line.
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Append a line and mark the run as failed.
    pub fn fail(&mut self, text: impl Into<String>) {
        self.error = true;
        self.lines.push(text.into());
    }

    /// Mark the run as failed without appending anything.
    pub fn flag_error(&mut self) {
        self.error = true;
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn finish(mut self) -> ExecutionResult {
        if self.lines.is_empty() {
            // Uphold the non-empty output invariant.
            self.lines
                .push("Code executed successfully with no output.".to_string());
        }
        ExecutionResult {
            output: self.lines,
            error: self.error,
        }
    }
}
