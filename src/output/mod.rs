//! Tree formatting and display
//!
//! This module provides formatters for rendering a walked task tree:
//! - Indented text outline with colors
//! - Markdown headings and checkbox lists
//! - JSON
//! - XML
//!
//! The text and Markdown formatters are visitors themselves: they render
//! each node as the traversal enters it, so only nodes the traversal visits
//! are written.
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Depth tracking and note helpers
//! - `text` - Text outline formatter
//! - `markdown` - Markdown output formatter
//! - `json` - JSON output
//! - `xml` - XML output

mod config;
mod json;
mod markdown;
mod text;
mod utils;
mod xml;

use std::io;

use thiserror::Error;

use crate::model::Node;
use crate::visitor::TraversalError;

pub use config::OutputConfig;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
pub use xml::XmlFormatter;

/// Errors raised while rendering a tree.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Traversal(#[from] TraversalError),

    #[error("error writing output: {0}")]
    Io(#[from] io::Error),

    #[error("error encoding JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders a tree to the formatter's sink.
///
/// Takes the tree mutably because rendering runs a traversal.
pub trait Formatter {
    fn format(&mut self, root: &mut Node) -> Result<(), OutputError>;
}
