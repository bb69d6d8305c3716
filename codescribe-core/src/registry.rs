//! Static language registry.
//!
//! Descriptors are defined at compile time and never mutated. Starter
//! snippets live as real source files under `snippets/` and are embedded
//! with `include_str!`.

/// Every language the dispatcher has a dedicated handler for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
    Html,
    Css,
    Json,
    Python,
    Java,
    CSharp,
    Cpp,
    Go,
    Php,
    Ruby,
    Rust,
    Sql,
}

/// Metadata about a single supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDescriptor {
    /// Variant used by the dispatcher.
    pub language: Language,

    /// Wire tag (e.g. `javascript`, `cpp`).
    pub tag: &'static str,

    /// Human-facing name (e.g. `C++`).
    pub display_name: &'static str,

    /// File extensions the CLI may infer the tag from.
    pub extensions: &'static [&'static str],

    /// Default editor snippet.
    pub starter: &'static str,
}

/// The complete registry, in presentation order.
///
/// Tooling should refer to this table instead of hard-coding tags.
pub const LANGUAGES: &[LanguageDescriptor] = &[
    LanguageDescriptor {
        language: Language::JavaScript,
        tag: "javascript",
        display_name: "JavaScript",
        extensions: &["js", "mjs", "cjs"],
        starter: include_str!("../snippets/javascript.js"),
    },
    LanguageDescriptor {
        language: Language::TypeScript,
        tag: "typescript",
        display_name: "TypeScript",
        extensions: &["ts"],
        starter: include_str!("../snippets/typescript.ts"),
    },
    LanguageDescriptor {
        language: Language::Html,
        tag: "html",
        display_name: "HTML",
        extensions: &["html", "htm"],
        starter: include_str!("../snippets/html.html"),
    },
    LanguageDescriptor {
        language: Language::Css,
        tag: "css",
        display_name: "CSS",
        extensions: &["css"],
        starter: include_str!("../snippets/css.css"),
    },
    LanguageDescriptor {
        language: Language::Json,
        tag: "json",
        display_name: "JSON",
        extensions: &["json"],
        starter: include_str!("../snippets/json.json"),
    },
    LanguageDescriptor {
        language: Language::Python,
        tag: "python",
        display_name: "Python",
        extensions: &["py"],
        starter: include_str!("../snippets/python.py"),
    },
    LanguageDescriptor {
        language: Language::Java,
        tag: "java",
        display_name: "Java",
        extensions: &["java"],
        starter: include_str!("../snippets/java.java"),
    },
    LanguageDescriptor {
        language: Language::CSharp,
        tag: "csharp",
        display_name: "C#",
        extensions: &["cs"],
        starter: include_str!("../snippets/csharp.cs"),
    },
    LanguageDescriptor {
        language: Language::Cpp,
        tag: "cpp",
        display_name: "C++",
        extensions: &["cpp", "cc", "cxx"],
        starter: include_str!("../snippets/cpp.cpp"),
    },
    LanguageDescriptor {
        language: Language::Go,
        tag: "go",
        display_name: "Go",
        extensions: &["go"],
        starter: include_str!("../snippets/go.go"),
    },
    LanguageDescriptor {
        language: Language::Php,
        tag: "php",
        display_name: "PHP",
        extensions: &["php"],
        starter: include_str!("../snippets/php.php"),
    },
    LanguageDescriptor {
        language: Language::Ruby,
        tag: "ruby",
        display_name: "Ruby",
        extensions: &["rb"],
        starter: include_str!("../snippets/ruby.rb"),
    },
    LanguageDescriptor {
        language: Language::Rust,
        tag: "rust",
        display_name: "Rust",
        extensions: &["rs"],
        starter: include_str!("../snippets/rust.rs"),
    },
    LanguageDescriptor {
        language: Language::Sql,
        tag: "sql",
        display_name: "SQL",
        extensions: &["sql"],
        starter: include_str!("../snippets/sql.sql"),
    },
];

pub const DEFAULT_LANGUAGE: Language = Language::JavaScript;

impl Language {
    /// Look up a language by its wire tag.
    ///
    /// The search is linear over `LANGUAGES` because the table is small.
    pub fn from_tag(tag: &str) -> Option<Language> {
        LANGUAGES
            .iter()
            .find(|descriptor| descriptor.tag == tag)
            .map(|descriptor| descriptor.language)
    }

    /// Look up a language by file extension (without the dot).
    pub fn from_extension(extension: &str) -> Option<Language> {
        let extension = extension.to_ascii_lowercase();
        LANGUAGES
            .iter()
            .find(|descriptor| descriptor.extensions.contains(&extension.as_str()))
            .map(|descriptor| descriptor.language)
    }

    pub fn descriptor(self) -> &'static LanguageDescriptor {
        LANGUAGES
            .iter()
            .find(|descriptor| descriptor.language == self)
            .expect("every Language variant has a registry entry")
    }

    pub fn tag(self) -> &'static str {
        self.descriptor().tag
    }

    pub fn display_name(self) -> &'static str {
        self.descriptor().display_name
    }

    pub fn starter(self) -> &'static str {
        self.descriptor().starter
    }
}
