//! # triggermap
//!
//! **Button-to-handler mapper for Shiny apps** - reads an application source,
//! finds every `actionButton()` and the `observeEvent(input$...)` block bound to
//! it, and reports what each handler calls and changes.
//!
//! No parser involved: regexes and brace balancing over raw text, best effort by
//! construction. Anything that does not match is skipped and the report still
//! renders.
//!
//! ## Features
//!
//! - **Trigger scan** - `actionButton("id", "Label")` declarations, first wins
//! - **Handler blocks** - brace-balanced `observeEvent` bodies, with an optional
//!   literal-aware scan
//! - **Key calls** - custom functions plus an allowlist of significant calls
//! - **Side effects** - DB reads/writes, emails, modals, notifications, refreshes
//! - **Purpose** - one sentence per handler from an ordered rule table
//! - **Reports** - Quarto document with a Mermaid diagram and tables, or JSON
//!
//! ## Library Usage
//!
//! ```rust
//! use triggermap::analyzer::ButtonMapper;
//!
//! let source = r#"
//! actionButton("new_project_btn", "New Project")
//! observeEvent(input$new_project_btn, {
//!   showModal(modalDialog())
//! })
//! "#;
//! let map = ButtonMapper::default().map_source(source);
//! assert_eq!(map.handlers.len(), 1);
//! assert_eq!(
//!     map.handlers[0].purpose,
//!     "Open the Create Project modal and prefill lookup choices."
//! );
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! triggermap --app sequencing-app/app.R --out docs/app-button-function-map.qmd
//! triggermap --app app.R --format json --out map.json
//! ```

/// Scanners, classifiers and renderers.
///
/// # Submodules
///
/// - [`analyzer::triggers`] - `actionButton` declarations
/// - [`analyzer::blocks`] - brace-balance block matching
/// - [`analyzer::calls`] - call extraction and key calls
/// - [`analyzer::effects`] - side-effect classification
/// - [`analyzer::extract`] - inputs, SQL targets, notification texts
/// - [`analyzer::purpose`] - purpose sentences
/// - [`analyzer::mermaid`] - core workflow diagram
/// - [`analyzer::qmd`] - Quarto report
/// - [`analyzer::runner`] - file in, report out
pub mod analyzer;

/// `triggermap` command-line arguments and entry point.
pub mod cli;

/// Terminal colors for status output.
pub mod colors;

/// Optional `.triggermap/config.toml` support.
pub mod config;

/// Errors surfaced to the caller.
pub mod error;

/// Core data types: triggers, handler blocks, analyses.
pub mod types;

pub use analyzer::{ButtonMapper, EffectKind};
pub use error::MapError;
pub use types::{ButtonMap, HandlerAnalysis, TriggerControl};
