use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use codescribe_core::{DEFAULT_LANGUAGE, ExecutionRequest, LANGUAGES, Language, execute};

/// Command-line shell over the CodeScribe execution service.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Source file to run; stdin is used when omitted
    #[arg(short, long)]
    input: Option<String>,

    /// Language tag; inferred from the input file extension when omitted
    #[arg(short, long)]
    language: Option<String>,

    /// List the supported languages and exit
    #[arg(long)]
    list: bool,

    /// Print the starter snippet for the selected language and exit
    #[arg(long)]
    snippet: bool,

    /// Emit the execution result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        for descriptor in LANGUAGES {
            println!("{:<12} {}", descriptor.tag, descriptor.display_name);
        }
        return Ok(());
    }

    if cli.snippet {
        let tag = resolve_tag(&cli);
        let language = Language::from_tag(&tag)
            .ok_or_else(|| anyhow!("unsupported language tag: {tag}"))?;
        print!("{}", language.starter());
        return Ok(());
    }

    let source = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {path}"))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let tag = resolve_tag(&cli);
    let result = execute(&ExecutionRequest::new(source, tag));

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for line in &result.output {
            println!("{line}");
        }
    }

    if result.error {
        std::process::exit(1);
    }
    Ok(())
}

/// Explicit tag first, then the input file extension, then the default.
/// Unknown explicit tags are passed through so the dispatcher can answer
/// with its preview fallback.
fn resolve_tag(cli: &Cli) -> String {
    if let Some(tag) = &cli.language {
        return tag.clone();
    }
    if let Some(path) = &cli.input {
        if let Some(language) = Path::new(path)
            .extension()
            .and_then(|extension| extension.to_str())
            .and_then(Language::from_extension)
        {
            return language.tag().to_string();
        }
    }
    DEFAULT_LANGUAGE.tag().to_string()
}
