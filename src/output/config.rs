//! Output configuration types

use chrono::NaiveDate;

const DEFAULT_INDENT: usize = 2;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Print project and task notes under their node
    pub show_notes: bool,
    /// Spaces per nesting level in text output
    pub indent: usize,
    /// Deepest level rendered; the root is level 0
    pub max_depth: Option<usize>,
    /// Print the node counts after the tree
    pub summary: bool,
    /// Reference date for highlighting overdue tasks
    pub today: Option<NaiveDate>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_notes: false,
            indent: DEFAULT_INDENT,
            max_depth: None,
            summary: true,
            today: None,
        }
    }
}
