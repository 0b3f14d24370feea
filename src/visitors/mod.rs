//! Stock visitors
//!
//! Each visitor carries its own `VisitorDescriptor` and does one job per
//! traversal. The export pipeline runs them one after another before the
//! tree is rendered.

mod level;
mod project_filter;
mod prune;
mod sort;
mod stats;
mod task_filter;

pub use level::LevelLimit;
pub use project_filter::ProjectFilter;
pub use prune::Pruner;
pub use sort::Sorter;
pub use stats::{Stats, TreeStats};
pub use task_filter::{TaskFilter, TaskMatch};
