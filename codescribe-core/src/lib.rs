//! Core execution service for the CodeScribe learning platform.
//!
//! This crate implements the language registry and the per-language code
//! execution dispatcher. The flow for a single run is:
//!
//!   (source text, language tag)
//!     -> registry   (tag resolution, starter snippets)
//!     -> dispatch   (fixed latency, tagged-variant routing)
//!     -> executor   (genuine JavaScript via QuickJS, or a simulator)
//!     -> ExecutionResult (console lines + error flag)
//!
//! The dispatcher never returns an error to its caller: every internal
//! failure is folded into an error-flagged result. Higher-level tools
//! (the CLI shell, embedders) should depend on this crate rather than
//! reimplementing the dispatch rules.

// ---------------------------------------------------------------------
// Error handling and the execution contract
// ---------------------------------------------------------------------

pub mod error;
pub mod result;

// ---------------------------------------------------------------------
// Language registry
// ---------------------------------------------------------------------

pub mod registry;

// ---------------------------------------------------------------------
// Dispatcher and per-language executors
// ---------------------------------------------------------------------

pub mod dispatch;
pub mod javascript;
pub mod markup;
pub mod scripted;
pub mod sql;

// ---------------------------------------------------------------------
// Public API re-exports
// ---------------------------------------------------------------------

pub use dispatch::{SIMULATED_LATENCY, dispatch, execute};
pub use error::ExecError;
pub use registry::{DEFAULT_LANGUAGE, LANGUAGES, Language, LanguageDescriptor};
pub use result::{Console, ExecutionRequest, ExecutionResult, SEPARATOR};
