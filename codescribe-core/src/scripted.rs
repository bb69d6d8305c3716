//! Simulated executors for Python, Java, C++/C#, Go, Rust, Ruby and PHP.
//!
//! None of these run anything. Each handler gates on the language's
//! required entry-point construct, then scans for the language's
//! print-like idiom and synthesizes one console line per match.
//! Argument rendering is heuristic: string literals are unquoted,
//! format placeholders and interpolation holes collapse to a generic
//! token, and concatenation operators are dropped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::result::{Console, ExecutionResult, SEPARATOR};

/// Stands in for anything the scanner cannot resolve to a literal.
const PLACEHOLDER: &str = "…";

static PY_PRINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"print\s*\((.*?)\)").expect("valid regex"));
static JAVA_PRINTLN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"System\.out\.println\s*\((.*?)\)\s*;").expect("valid regex"));
static COUT: Lazy<Regex> = Lazy::new(|| Regex::new(r"cout\s*<<\s*(.*?);").expect("valid regex"));
static PRINTF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"printf\s*\((.*?)\)\s*;").expect("valid regex"));
static WRITELINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Console\.WriteLine\s*\((.*?)\)\s*;").expect("valid regex"));
static GO_PRINTLN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"fmt\.Println\s*\((.*?)\)").expect("valid regex"));
static RUST_PRINTLN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"println!\s*\((.*?)\)").expect("valid regex"));
static RUBY_PUTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)puts\s+(.*)$").expect("valid regex"));
static PHP_ECHO: Lazy<Regex> = Lazy::new(|| Regex::new(r"echo\s+(.*?);").expect("valid regex"));

static FORMAT_HOLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#?\{[^{}]*\}").expect("valid regex"));
static PERCENT_SPEC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%[-+ #0-9.]*[A-Za-z]").expect("valid regex"));

pub fn run_python(code: &str) -> ExecutionResult {
    let mut console = Console::new();
    console.line("Running Python code:");
    console.line(SEPARATOR);
    console.line(numbered_listing(code));
    console.line(SEPARATOR);

    let mark = console.len();
    for captures in PY_PRINT.captures_iter(code) {
        console.line(format!("Output: {}", render_argument(&captures[1])));
    }
    if code.contains("def ") {
        console.line("Function defined successfully");
    }
    if code.contains("import ") {
        console.line("Modules imported successfully");
    }
    if console.len() == mark {
        console.line("Code executed successfully with no output.");
    }
    console.finish()
}

pub fn run_java(code: &str) -> ExecutionResult {
    let mut console = Console::new();
    console.line("Compiling and running Java code:");
    console.line(SEPARATOR);

    if !code.contains("class ") {
        console.fail("Error: No class declaration found. Java code requires a class.");
        return console.finish();
    }
    if !code.contains("public static void main") {
        console.fail(
            "Error: No public static void main method found. Java code requires a main method.",
        );
        return console.finish();
    }

    let mark = console.len();
    for captures in JAVA_PRINTLN.captures_iter(code) {
        console.line(format!("Output: {}", render_argument(&captures[1])));
    }
    console.line("Class compiled successfully");
    if console.len() == mark + 1 {
        console.line("Code compiled and executed successfully with no output.");
    }
    console.finish()
}

/// Shared by C++ and C# (the print idioms differ, the shape does not).
pub fn run_cfamily(code: &str, display_name: &str) -> ExecutionResult {
    let mut console = Console::new();
    console.line(format!("Compiling and running {display_name} code:"));
    console.line(SEPARATOR);

    // Case-insensitive so `static void Main()` passes for C#.
    let lowered = code.to_lowercase();
    if !lowered.contains("main(") && !lowered.contains("main (") {
        console.fail(format!(
            "Error: No main() function found. {display_name} code requires a main function."
        ));
        return console.finish();
    }

    let mark = console.len();
    for regex in [&*COUT, &*PRINTF, &*WRITELINE] {
        for captures in regex.captures_iter(code) {
            console.line(format!("Output: {}", render_argument(&captures[1])));
        }
    }
    if console.len() == mark {
        console.line("Code compiled and executed successfully with no output.");
    }
    console.finish()
}

pub fn run_go(code: &str) -> ExecutionResult {
    let mut console = Console::new();
    console.line("Compiling and running Go code:");
    console.line(SEPARATOR);

    if !code.contains("package main") {
        console.fail("Error: Missing 'package main' declaration");
        return console.finish();
    }
    if !code.contains("func main()") {
        console.fail("Error: Missing 'func main()' function");
        return console.finish();
    }
    console.line("Go program structure is valid");

    let mark = console.len();
    for captures in GO_PRINTLN.captures_iter(code) {
        console.line(format!("Output: {}", render_argument(&captures[1])));
    }
    if console.len() == mark {
        console.line("Go code executed successfully with no output.");
    }
    console.finish()
}

pub fn run_rust(code: &str) -> ExecutionResult {
    let mut console = Console::new();
    console.line("Compiling and running Rust code:");
    console.line(SEPARATOR);

    if !code.contains("fn main()") {
        console.fail("Error: Missing 'fn main()' function");
        return console.finish();
    }
    console.line("Rust program structure is valid");

    let mark = console.len();
    for captures in RUST_PRINTLN.captures_iter(code) {
        console.line(format!("Output: {}", render_argument(&captures[1])));
    }
    if console.len() == mark {
        console.line("Rust code executed successfully with no output.");
    }
    console.finish()
}

pub fn run_ruby(code: &str) -> ExecutionResult {
    let mut console = Console::new();
    console.line("Running Ruby code:");
    console.line(SEPARATOR);

    let mark = console.len();
    for captures in RUBY_PUTS.captures_iter(code) {
        console.line(format!("Output: {}", render_argument(captures[1].trim())));
    }
    if code.contains("def ") {
        console.line("Method defined successfully");
    }
    if console.len() == mark {
        console.line("Ruby code executed successfully with no output.");
    }
    console.finish()
}

pub fn run_php(code: &str) -> ExecutionResult {
    let mut console = Console::new();
    console.line("Running PHP code:");
    console.line(SEPARATOR);

    let mark = console.len();
    for captures in PHP_ECHO.captures_iter(code) {
        console.line(format!("Output: {}", render_argument(&captures[1])));
    }
    if code.contains("function ") {
        console.line("Function defined successfully");
    }
    if console.len() == mark {
        console.line("PHP code executed successfully with no output.");
    }
    console.finish()
}

fn numbered_listing(code: &str) -> String {
    code.lines()
        .enumerate()
        .map(|(index, line)| format!("{:>2}| {line}", index + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

// -------------------------------------------------------------------
// Print-argument rendering
// -------------------------------------------------------------------

#[derive(Debug, PartialEq)]
enum Piece {
    Literal { text: String, had_hole: bool },
    Bare(String),
    ArgumentBreak,
}

/// Render the raw argument text of a print-like construct into the line
/// a real run would plausibly produce.
fn render_argument(raw: &str) -> String {
    let pieces = tokenize(raw);

    // A leading format string absorbs the remaining arguments.
    if let Some(Piece::Literal {
        text,
        had_hole: true,
    }) = pieces.first()
    {
        return text.clone();
    }

    let mut rendered = String::new();
    let mut previous_bare = false;
    for piece in &pieces {
        match piece {
            Piece::Literal { text, .. } => {
                rendered.push_str(text);
                previous_bare = false;
            }
            Piece::Bare(word) => {
                if word == "endl" || word == "std::endl" {
                    continue;
                }
                if previous_bare {
                    rendered.push(' ');
                }
                rendered.push_str(word);
                previous_bare = true;
            }
            Piece::ArgumentBreak => {
                rendered.push(' ');
                previous_bare = false;
            }
        }
    }
    rendered.trim().to_string()
}

fn tokenize(raw: &str) -> Vec<Piece> {
    let chars: Vec<char> = raw.chars().collect();
    let mut pieces = Vec::new();
    let mut bare = String::new();
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        match ch {
            '"' | '\'' => {
                // A short alphabetic run glued to the quote is a string
                // prefix (f"...", r"...").
                if !bare.is_empty() && bare.len() <= 2 && bare.chars().all(|c| c.is_ascii_alphabetic())
                {
                    bare.clear();
                }
                flush_bare(&mut bare, &mut pieces);
                let mut text = String::new();
                i += 1;
                while i < chars.len() && chars[i] != ch {
                    if chars[i] == '\\' && i + 1 < chars.len() {
                        match chars[i + 1] {
                            'n' | 'r' => {}
                            't' => text.push(' '),
                            other => text.push(other),
                        }
                        i += 2;
                        continue;
                    }
                    text.push(chars[i]);
                    i += 1;
                }
                i += 1; // closing quote
                let had_hole = FORMAT_HOLE.is_match(&text) || PERCENT_SPEC.is_match(&text);
                let text = FORMAT_HOLE.replace_all(&text, PLACEHOLDER);
                let text = PERCENT_SPEC.replace_all(&text, PLACEHOLDER).into_owned();
                pieces.push(Piece::Literal { text, had_hole });
                continue;
            }
            ',' => {
                flush_bare(&mut bare, &mut pieces);
                pieces.push(Piece::ArgumentBreak);
            }
            '+' => flush_bare(&mut bare, &mut pieces),
            '<' if chars.get(i + 1) == Some(&'<') => {
                flush_bare(&mut bare, &mut pieces);
                i += 2;
                continue;
            }
            '.' if is_concat_dot(&chars, i) => flush_bare(&mut bare, &mut pieces),
            c if c.is_whitespace() => flush_bare(&mut bare, &mut pieces),
            c => bare.push(c),
        }
        i += 1;
    }
    flush_bare(&mut bare, &mut pieces);
    pieces
}

fn flush_bare(bare: &mut String, pieces: &mut Vec<Piece>) {
    if !bare.is_empty() {
        pieces.push(Piece::Bare(std::mem::take(bare)));
    }
}

/// A dot is a concatenation operator (PHP style) only at a token
/// boundary; dots inside identifiers and numbers stay put.
fn is_concat_dot(chars: &[char], index: usize) -> bool {
    let boundary = |c: Option<&char>| match c {
        None => true,
        Some(c) => c.is_whitespace() || *c == '"' || *c == '\'',
    };
    boundary(index.checked_sub(1).and_then(|p| chars.get(p))) || boundary(chars.get(index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plain_string_literals() {
        assert_eq!(render_argument(r#""Hello, World!""#), "Hello, World!");
        assert_eq!(render_argument("'single'"), "single");
    }

    #[test]
    fn renders_format_strings_with_placeholders() {
        assert_eq!(render_argument(r#""Hello, {}!", name"#), "Hello, …!");
        assert_eq!(render_argument(r#"f"Hello, {name}!""#), "Hello, …!");
        assert_eq!(render_argument(r#""%d bottles\n", n"#), "… bottles");
    }

    #[test]
    fn renders_concatenation() {
        assert_eq!(
            render_argument(r#""Hello, " . $name . "!""#),
            "Hello, $name!"
        );
        assert_eq!(render_argument(r#""Hello, " + name + "!""#), "Hello, name!");
    }

    #[test]
    fn drops_stream_noise() {
        assert_eq!(
            render_argument(r#""Hello, World!" << std::endl"#),
            "Hello, World!"
        );
    }

    #[test]
    fn keeps_bare_expressions_verbatim() {
        assert_eq!(render_argument("message"), "message");
        assert_eq!(render_argument("user.name"), "user.name");
    }

    #[test]
    fn python_scans_prints_and_acknowledges_definitions() {
        let result = run_python("def greet():\n    print(\"hi\")\n\ngreet()");
        assert!(!result.error);
        assert!(result.output.contains(&"Output: hi".to_string()));
        assert!(
            result
                .output
                .contains(&"Function defined successfully".to_string())
        );
    }

    #[test]
    fn python_echoes_a_numbered_listing() {
        let result = run_python("print(1)\nprint(2)");
        assert_eq!(result.output[2], " 1| print(1)\n 2| print(2)");
    }

    #[test]
    fn python_without_output_reports_success() {
        let result = run_python("x = 1");
        assert!(!result.error);
        assert_eq!(
            result.output.last().map(String::as_str),
            Some("Code executed successfully with no output.")
        );
    }

    #[test]
    fn java_requires_a_main_method() {
        let result = run_java("public class Main { }");
        assert!(result.error);
        assert!(
            result
                .output
                .last()
                .expect("line")
                .contains("public static void main")
        );
    }

    #[test]
    fn java_requires_a_class() {
        let result = run_java("int x = 1;");
        assert!(result.error);
        assert!(result.output.last().expect("line").contains("class"));
    }

    #[test]
    fn java_extracts_println_literals() {
        let code = "public class Main {\n    public static void main(String[] args) {\n        System.out.println(\"Hello, World!\");\n    }\n}";
        let result = run_java(code);
        assert!(!result.error);
        assert!(
            result
                .output
                .contains(&"Output: Hello, World!".to_string())
        );
    }

    #[test]
    fn cpp_requires_a_main_function() {
        let result = run_cfamily("#include <iostream>", "C++");
        assert!(result.error);
        assert!(result.output.last().expect("line").contains("main"));
    }

    #[test]
    fn cpp_extracts_cout_statements() {
        let code = "int main() {\n    std::cout << \"Hello, World!\" << std::endl;\n    return 0;\n}";
        let result = run_cfamily(code, "C++");
        assert!(!result.error);
        assert!(
            result
                .output
                .contains(&"Output: Hello, World!".to_string())
        );
    }

    #[test]
    fn csharp_main_gate_is_case_insensitive() {
        let code = "class Program\n{\n    static void Main()\n    {\n        Console.WriteLine(\"Hello, World!\");\n    }\n}";
        let result = run_cfamily(code, "C#");
        assert!(!result.error, "output: {:?}", result.output);
        assert!(
            result
                .output
                .contains(&"Output: Hello, World!".to_string())
        );
    }

    #[test]
    fn go_reports_each_missing_construct() {
        let missing_package = run_go("func main() {}");
        assert!(missing_package.error);
        assert!(
            missing_package
                .output
                .last()
                .expect("line")
                .contains("package main")
        );

        let missing_main = run_go("package main");
        assert!(missing_main.error);
        assert!(
            missing_main
                .output
                .last()
                .expect("line")
                .contains("func main()")
        );
    }

    #[test]
    fn go_extracts_println_literals() {
        let code = "package main\n\nimport \"fmt\"\n\nfunc main() {\n    fmt.Println(\"Hello, World!\")\n}";
        let result = run_go(code);
        assert!(!result.error);
        assert!(
            result
                .output
                .contains(&"Output: Hello, World!".to_string())
        );
    }

    #[test]
    fn rust_requires_fn_main() {
        let result = run_rust("fn helper() {}");
        assert!(result.error);
        assert!(result.output.last().expect("line").contains("fn main()"));
    }

    #[test]
    fn rust_renders_format_placeholders() {
        let result = run_rust("fn main() {\n    println!(\"Hello, {}!\", \"World\");\n}");
        assert!(!result.error);
        assert!(result.output.contains(&"Output: Hello, …!".to_string()));
    }

    #[test]
    fn ruby_scans_puts_lines() {
        let result = run_ruby("def greet\n  puts \"Hello, World!\"\nend\ngreet");
        assert!(!result.error);
        assert!(
            result
                .output
                .contains(&"Output: Hello, World!".to_string())
        );
        assert!(
            result
                .output
                .contains(&"Method defined successfully".to_string())
        );
    }

    #[test]
    fn ruby_interpolation_collapses_to_a_placeholder() {
        let result = run_ruby("puts \"Hello, #{name}!\"");
        assert!(result.output.contains(&"Output: Hello, …!".to_string()));
    }

    #[test]
    fn php_scans_echo_statements() {
        let result = run_php("<?php\necho \"Hello, \" . $name . \"!\";\n?>");
        assert!(!result.error);
        assert!(
            result
                .output
                .contains(&"Output: Hello, $name!".to_string())
        );
    }
}
