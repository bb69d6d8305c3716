//! The execution dispatcher: tag resolution, the artificial latency
//! window, and the catch-all that keeps failures inside results.

use std::thread;
use std::time::Duration;

use crate::error::ExecError;
use crate::registry::Language;
use crate::result::{Console, ExecutionRequest, ExecutionResult, SEPARATOR};
use crate::{javascript, markup, scripted, sql};

/// Fixed delay applied by [`execute`] to simulate processing time.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(500);

/// Number of source lines echoed by the unsupported-language preview.
const PREVIEW_LINES: usize = 5;

/// Run a request after the simulated latency window. Never panics and
/// never returns an error: failures come back as error-flagged results.
pub fn execute(request: &ExecutionRequest) -> ExecutionResult {
    thread::sleep(SIMULATED_LATENCY);
    dispatch(request)
}

/// The undelayed transform behind [`execute`].
pub fn dispatch(request: &ExecutionRequest) -> ExecutionResult {
    let outcome = match Language::from_tag(&request.language) {
        Some(language) => run(language, &request.code),
        None => Ok(preview_unsupported(&request.language, &request.code)),
    };
    outcome.unwrap_or_else(|err| ExecutionResult::failure(vec![format!("Error: {err}")]))
}

fn run(language: Language, code: &str) -> Result<ExecutionResult, ExecError> {
    Ok(match language {
        Language::JavaScript => javascript::run_javascript(code)?,
        Language::TypeScript => javascript::run_typescript(code)?,
        Language::Python => scripted::run_python(code),
        Language::Java => scripted::run_java(code),
        Language::Cpp | Language::CSharp => {
            scripted::run_cfamily(code, language.display_name())
        }
        Language::Go => scripted::run_go(code),
        Language::Rust => scripted::run_rust(code),
        Language::Ruby => scripted::run_ruby(code),
        Language::Php => scripted::run_php(code),
        Language::Sql => sql::run(code)?,
        Language::Html => markup::run_html(code),
        Language::Css => markup::run_css(code),
        Language::Json => markup::run_json(code)?,
    })
}

/// Fixed-shape fallback for tags outside the registry: a header, a
/// notice, and the first few lines of the submitted text.
fn preview_unsupported(tag: &str, code: &str) -> ExecutionResult {
    let mut console = Console::new();
    console.line(format!("Executing {tag} code:"));
    console.line(SEPARATOR);
    console.line("This language is not fully supported yet.");
    console.line(SEPARATOR);
    console.line("Code preview:");
    let lines: Vec<&str> = code.lines().collect();
    let mut echoed = lines
        .iter()
        .take(PREVIEW_LINES)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    if lines.len() > PREVIEW_LINES {
        echoed.push_str("\n...");
    }
    console.line(echoed);
    console.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LANGUAGES;

    #[test]
    fn every_starter_snippet_runs_cleanly_under_its_own_tag() {
        for descriptor in LANGUAGES {
            let request = ExecutionRequest::new(descriptor.starter, descriptor.tag);
            let result = dispatch(&request);
            assert!(
                !result.output.is_empty(),
                "empty output for {}",
                descriptor.tag
            );
            assert!(
                !result.error,
                "starter for {} failed: {:?}",
                descriptor.tag, result.output
            );
        }
    }

    #[test]
    fn every_tag_produces_output_for_arbitrary_text() {
        for descriptor in LANGUAGES {
            let request = ExecutionRequest::new("zzz", descriptor.tag);
            let result = dispatch(&request);
            assert!(
                !result.output.is_empty(),
                "empty output for {}",
                descriptor.tag
            );
        }
    }

    #[test]
    fn unknown_tags_fall_back_to_the_preview() {
        let request = ExecutionRequest::new("one\ntwo\nthree\nfour\nfive\nsix", "brainfuck");
        let result = dispatch(&request);
        assert!(!result.error);
        assert_eq!(result.output[0], "Executing brainfuck code:");
        assert_eq!(result.output[2], "This language is not fully supported yet.");
        assert_eq!(result.output[4], "Code preview:");
        assert_eq!(result.output[5], "one\ntwo\nthree\nfour\nfive\n...");
    }

    #[test]
    fn short_input_previews_without_ellipsis() {
        let request = ExecutionRequest::new("one\ntwo", "cobol");
        let result = dispatch(&request);
        assert_eq!(result.output[5], "one\ntwo");
    }

    #[test]
    fn sql_syntax_errors_surface_as_flagged_results() {
        let request = ExecutionRequest::new("SELECT 1", "sql");
        let result = dispatch(&request);
        assert!(result.error);
        assert!(result.output[0].contains("FROM"));
    }

    #[test]
    fn invalid_json_surfaces_the_parser_message() {
        let request = ExecutionRequest::new("{ nope", "json");
        let result = dispatch(&request);
        assert!(result.error);
        assert!(result.output[0].contains("invalid JSON"));
    }

    #[test]
    fn execute_applies_the_latency_window() {
        let request = ExecutionRequest::new("SELECT * FROM users", "sql");
        let start = std::time::Instant::now();
        let result = execute(&request);
        assert!(start.elapsed() >= SIMULATED_LATENCY);
        assert_eq!(result, dispatch(&request));
    }
}
