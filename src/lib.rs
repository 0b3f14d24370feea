//! ofexport - walk a task tree with visitors and render it as text, Markdown, JSON or XML

pub mod export;
pub mod model;
pub mod output;
pub mod visitor;
pub mod visitors;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use export::{ExportConfig, ExportError, Exporter, load_tree, load_tree_from_reader};
pub use model::{Context, Folder, Node, NodeKind, NodeRef, Project, ProjectStatus, Task};
pub use output::{
    Formatter, JsonFormatter, MarkdownFormatter, OutputConfig, OutputError, TextFormatter,
    XmlFormatter,
};
pub use visitor::{
    Interrupt, TraversalError, VisitResult, Visitor, VisitorDescriptor, traverse,
};
pub use visitors::{
    LevelLimit, Pruner, ProjectFilter, Sorter, Stats, TaskFilter, TaskMatch, TreeStats,
};
