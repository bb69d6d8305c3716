//! HTML and CSS feature detection, and the JSON validator.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ExecError;
use crate::result::{Console, ExecutionResult, SEPARATOR};

/// Preview length cap, in characters.
const PREVIEW_LIMIT: usize = 300;

static MARKUP_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[A-Za-z][^>]*>").expect("valid regex"));

pub fn run_html(code: &str) -> ExecutionResult {
    let mut console = Console::new();
    console.line("HTML Rendering:");
    console.line(SEPARATOR);

    if code.to_lowercase().contains("<!doctype") {
        console.line("Document type declaration found");
    }
    let tag_count = MARKUP_TAG.find_iter(code).count();
    if tag_count > 0 {
        console.line(format!("{tag_count} markup tags detected"));
    }
    if code.contains("<script") {
        console.line("Inline script block present");
    }
    if code.contains("<style") {
        console.line("Inline style block present");
    }

    console.line("HTML code would render in a browser environment.");
    console.line(SEPARATOR);
    console.line("Code preview:");
    console.line(preview(code));
    console.finish()
}

pub fn run_css(code: &str) -> ExecutionResult {
    let mut console = Console::new();
    console.line("CSS Styling:");
    console.line(SEPARATOR);

    let rule_count = code.matches('{').count();
    if rule_count > 0 {
        console.line(format!("{rule_count} style rules detected"));
    }
    let media_count = code.matches("@media").count();
    if media_count > 0 {
        console.line(format!("{media_count} media queries detected"));
    }

    console.line("CSS would apply styling to HTML elements.");
    console.line(SEPARATOR);
    console.line("Code preview:");
    console.line(preview(code));
    console.finish()
}

pub fn run_json(code: &str) -> Result<ExecutionResult, ExecError> {
    let value: serde_json::Value = serde_json::from_str(code)
        .map_err(|err| ExecError::Syntax(format!("invalid JSON: {err}")))?;
    let pretty =
        serde_json::to_string_pretty(&value).map_err(|err| ExecError::Engine(err.to_string()))?;

    let mut console = Console::new();
    console.line("JSON validated successfully");
    console.line(pretty);
    Ok(console.finish())
}

fn preview(code: &str) -> String {
    let mut text: String = code.chars().take(PREVIEW_LIMIT).collect();
    if code.chars().count() > PREVIEW_LIMIT {
        text.push_str("...");
    }
    text
}
