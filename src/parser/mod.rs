//! Report parsers for the two supported input schemas.
//!
//! This module provides the [`ReportParser`] trait and one implementation
//! per schema, each decoding a whole JSON report into normalized
//! [`RawIssue`]s.
//!
//! | Parser | Mode | Top-level key |
//! |--------|------|---------------|
//! | [`ApiParser`] | `api` | `issues` |
//! | [`CliParser`] | `cli` | `vulnerabilities` |
//!
//! # Example
//!
//! ```
//! use fixplan::model::Mode;
//! use fixplan::parser::{parser_for, ReportParser};
//!
//! let parser = parser_for(Mode::Cli);
//! let issues = parser.parse(r#"{"vulnerabilities": []}"#)?;
//! assert!(issues.is_empty());
//! # Ok::<(), anyhow::Error>(())
//! ```

mod api;
mod cli;

pub use api::ApiParser;
pub use cli::CliParser;

use crate::model::{Mode, RawIssue};
use anyhow::Result;

/// Trait for decoding one report schema into normalized issues.
///
/// Parsing is all-or-nothing for the document (malformed JSON is an error)
/// but lenient inside records: missing fields fall back to empty values and
/// are handled downstream by the aggregation rules.
pub trait ReportParser {
    /// Returns the human-readable name of this parser, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Returns the mode this parser handles.
    fn mode(&self) -> Mode;

    /// Decodes a full report document into issues, in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or does not
    /// structurally match the schema.
    fn parse(&self, input: &str) -> Result<Vec<RawIssue>>;
}

/// Returns the parser for a mode.
///
/// # Example
///
/// ```
/// use fixplan::model::Mode;
/// use fixplan::parser::{parser_for, ReportParser};
///
/// assert_eq!(parser_for(Mode::Api).name(), "API report");
/// assert_eq!(parser_for(Mode::Cli).name(), "CLI report");
/// ```
pub fn parser_for(mode: Mode) -> Box<dyn ReportParser> {
    match mode {
        Mode::Api => Box::new(ApiParser),
        Mode::Cli => Box::new(CliParser),
    }
}
