//! JavaScript and TypeScript execution.
//!
//! This is the one genuinely executing path: the submitted text is
//! parsed as a function body (`new Function(...)`) inside a fresh
//! QuickJS context and then invoked. A console shim installed into that
//! context collects output into an in-context array, which is read back
//! after the run. Host-process state is never touched, so invocations
//! are isolated from each other on every exit path.

use once_cell::sync::Lazy;
use regex::Regex;
use rquickjs::{CatchResultExt, CaughtError, Context, Runtime};

use crate::error::ExecError;
use crate::result::{Console, ExecutionResult};

/// Installed before the user code runs. `__lines` is the output
/// collector; `__flagged` records whether `console.error` was called.
const BOOTSTRAP: &str = r#"
globalThis.__lines = [];
globalThis.__flagged = false;
globalThis.__fmt = function (value) {
    if (typeof value === "object" && value !== null) {
        try {
            return JSON.stringify(value, null, 2);
        } catch (_) {
            return String(value);
        }
    }
    return String(value);
};
globalThis.console = {
    log: function () {
        __lines.push(Array.prototype.map.call(arguments, __fmt).join(" "));
    },
    error: function () {
        __flagged = true;
        __lines.push("Error: " + Array.prototype.map.call(arguments, __fmt).join(" "));
    },
    warn: function () {
        __lines.push("Warning: " + Array.prototype.map.call(arguments, __fmt).join(" "));
    },
    info: function () {
        __lines.push("Info: " + Array.prototype.map.call(arguments, __fmt).join(" "));
    },
};
"#;

/// Invokes the constructed body and reports a non-`undefined` return
/// value as a formatted string (or `null` when there is nothing to
/// report, which maps to `None` on the Rust side).
const INVOKE: &str = r#"
globalThis.__ret = __body();
__ret === undefined ? null : __fmt(__ret)
"#;

pub fn run_javascript(code: &str) -> Result<ExecutionResult, ExecError> {
    run_function_body(code, "Syntax Error")
}

pub fn run_typescript(code: &str) -> Result<ExecutionResult, ExecError> {
    run_function_body(&strip_types(code), "TypeScript Transpilation Error")
}

fn run_function_body(code: &str, parse_label: &str) -> Result<ExecutionResult, ExecError> {
    let runtime = Runtime::new()?;
    let context = Context::full(&runtime)?;
    context.with(|ctx| -> Result<ExecutionResult, ExecError> {
        let _: rquickjs::Value = ctx.eval(BOOTSTRAP)?;

        // Parse stage: construct the function without running it, so
        // syntax failures are distinguishable from runtime failures.
        let literal = serde_json::to_string(code).map_err(|err| ExecError::Engine(err.to_string()))?;
        let construct = format!("globalThis.__body = new Function({literal});");
        if let Err(caught) = ctx.eval::<rquickjs::Value, _>(construct).catch(&ctx) {
            let mut console = Console::new();
            console.fail(format!("{parse_label}: {}", caught_message(&caught)));
            return Ok(console.finish());
        }

        // Run stage. Lines captured before an exception are preserved.
        let outcome = ctx.eval::<Option<String>, _>(INVOKE).catch(&ctx);
        let captured: Vec<String> = ctx.eval("globalThis.__lines")?;
        let flagged: bool = ctx.eval("globalThis.__flagged")?;

        let mut console = Console::new();
        for line in captured {
            console.line(line);
        }
        if flagged {
            console.flag_error();
        }
        match outcome {
            Ok(Some(value)) => console.line(format!("Return value: {value}")),
            Ok(None) => {}
            Err(caught) => console.fail(format!("Execution Error: {}", caught_message(&caught))),
        }
        Ok(console.finish())
    })
}

fn caught_message(caught: &CaughtError<'_>) -> String {
    match caught {
        CaughtError::Exception(exception) => exception
            .message()
            .unwrap_or_else(|| String::from("uncaught exception")),
        CaughtError::Value(value) => value
            .as_string()
            .and_then(|text| text.to_string().ok())
            .unwrap_or_else(|| String::from("uncaught non-error value")),
        CaughtError::Error(err) => err.to_string(),
    }
}

// -------------------------------------------------------------------
// TypeScript type stripping
// -------------------------------------------------------------------

static INTERFACE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)interface\s+\w+\s*\{.*?\}").expect("valid regex"));
static TYPE_ALIAS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)type\s+\w+\s*=.*?;").expect("valid regex"));
// The annotation must start like a type name; a digit after the colon
// is a value (`{ x: 1 }`), not an annotation, and stays untouched.
static TYPE_ANNOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m):\s*[A-Za-z_$][\w$<>\[\]|&.\s]*?(?P<delim>[=;,){]|$)").expect("valid regex")
});
static GENERIC_PARAMS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[A-Za-z0-9_$\[\]|,\s]+>").expect("valid regex"));

/// Best-effort removal of TypeScript surface syntax so the result can be
/// handed to the JavaScript path. This is textual, not a real
/// transpiler; code it cannot handle fails in the parse stage and is
/// reported as a transpilation error.
pub fn strip_types(code: &str) -> String {
    let stripped = INTERFACE_BLOCK.replace_all(code, "");
    let stripped = TYPE_ALIAS.replace_all(&stripped, "");
    let stripped = TYPE_ANNOTATION.replace_all(&stripped, "$delim");
    GENERIC_PARAMS.replace_all(&stripped, "").into_owned()
}
