//! Visitor-driven traversal of task trees
//!
//! A `Visitor` supplies a `VisitorDescriptor` and lifecycle hooks. `traverse`
//! walks a tree depth first, calling `enter` and `exit` around every visited
//! node and passing child collections through the filter hooks on the way
//! down and on the way back up.
//!
//! # Module Structure
//!
//! - `descriptor` - per-kind visit/filter switches
//! - `error` - hook interrupts and the traversal failure type
//! - `traverser` - the depth-first walker

mod descriptor;
mod error;
mod traverser;

pub use descriptor::VisitorDescriptor;
pub use error::{BoxError, Interrupt, TraversalError, VisitResult};
pub use traverser::traverse;

use crate::model::{Context, Folder, NodeRef, Project, Task};

/// Hooks invoked by `traverse`.
///
/// Every hook may return `Interrupt::AbortSubtree` to drop the rest of the
/// current node, or `Interrupt::Fail` to stop the traversal. Filter hooks
/// receive a node's child collection and return its replacement; they only
/// run when the descriptor enables filtering for that kind.
pub trait Visitor {
    /// The switches governing this traversal.
    fn what(&self) -> VisitorDescriptor;

    fn enter(&mut self, _node: NodeRef<'_>) -> VisitResult {
        Ok(())
    }

    fn exit(&mut self, _node: NodeRef<'_>) -> VisitResult {
        Ok(())
    }

    fn filter_folders_down(&mut self, folders: Vec<Folder>) -> VisitResult<Vec<Folder>> {
        Ok(folders)
    }

    fn filter_folders_up(&mut self, folders: Vec<Folder>) -> VisitResult<Vec<Folder>> {
        Ok(folders)
    }

    fn filter_projects_down(&mut self, projects: Vec<Project>) -> VisitResult<Vec<Project>> {
        Ok(projects)
    }

    fn filter_projects_up(&mut self, projects: Vec<Project>) -> VisitResult<Vec<Project>> {
        Ok(projects)
    }

    fn filter_contexts_down(&mut self, contexts: Vec<Context>) -> VisitResult<Vec<Context>> {
        Ok(contexts)
    }

    fn filter_contexts_up(&mut self, contexts: Vec<Context>) -> VisitResult<Vec<Context>> {
        Ok(contexts)
    }

    fn filter_tasks_down(&mut self, tasks: Vec<Task>) -> VisitResult<Vec<Task>> {
        Ok(tasks)
    }

    fn filter_tasks_up(&mut self, tasks: Vec<Task>) -> VisitResult<Vec<Task>> {
        Ok(tasks)
    }
}
