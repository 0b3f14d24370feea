//! Depth-first walker driving a `Visitor` over a task tree

use tracing::debug;

use crate::model::{Context, Folder, Node, NodeRef, Project, Task};

use super::descriptor::VisitorDescriptor;
use super::error::{BoxError, Interrupt, TraversalError, VisitResult};
use super::Visitor;

/// Walk `node` and its subtree with `visitor`.
///
/// Subtree aborts raised by hooks stay local to the node that raised them.
/// Any other hook error stops the walk and is returned wrapped in a
/// `TraversalError`. Child collections are left as the filter hooks returned
/// them; a collection whose hook interrupted keeps its previous contents.
pub fn traverse<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &mut Node,
) -> Result<(), TraversalError> {
    let what = visitor.what();
    let mut walk = Traversal { visitor, what };
    walk.node(node).map_err(TraversalError::new)
}

struct Traversal<'v, V: ?Sized> {
    visitor: &'v mut V,
    what: VisitorDescriptor,
}

impl<V: Visitor + ?Sized> Traversal<'_, V> {
    fn node(&mut self, node: &mut Node) -> Result<(), BoxError> {
        debug!("Traversing node: {}", node.view());
        match node {
            Node::Folder(folder) => self.folder(folder),
            Node::Project(project) => self.project(project),
            Node::Context(context) => self.context(context),
            // A task walked directly behaves like one reached from its project.
            Node::Task(task) => self.task(task, true),
        }
    }

    fn folder(&mut self, node: &mut Folder) -> Result<(), BoxError> {
        if !self.what.visit_folders() {
            return Ok(());
        }
        debug!("Traversing folder: {}", node.name);
        let result = self.folder_body(node);
        settle(result, NodeRef::Folder(node))
    }

    fn folder_body(&mut self, node: &mut Folder) -> VisitResult {
        let what = self.what;
        self.visitor.enter(NodeRef::Folder(node))?;

        if what.filter_folders() {
            refilter(&mut node.folders, |c| self.visitor.filter_folders_down(c))?;
        }
        if what.filter_projects() {
            refilter(&mut node.projects, |c| self.visitor.filter_projects_down(c))?;
        }

        for child in &mut node.folders {
            self.folder(child).map_err(Interrupt::Fail)?;
        }
        if what.visit_projects() {
            for child in &mut node.projects {
                self.project(child).map_err(Interrupt::Fail)?;
            }
        }

        if what.filter_folders() {
            refilter(&mut node.folders, |c| self.visitor.filter_folders_up(c))?;
        }
        if what.filter_projects() {
            refilter(&mut node.projects, |c| self.visitor.filter_projects_up(c))?;
        }

        self.visitor.exit(NodeRef::Folder(node))
    }

    fn project(&mut self, node: &mut Project) -> Result<(), BoxError> {
        if !self.what.visit_projects() {
            return Ok(());
        }
        debug!("Traversing project: {}", node.name);
        let result = self.project_body(node);
        settle(result, NodeRef::Project(node))
    }

    fn project_body(&mut self, node: &mut Project) -> VisitResult {
        let what = self.what;
        self.visitor.enter(NodeRef::Project(node))?;

        if what.filter_tasks() {
            refilter(&mut node.tasks, |c| self.visitor.filter_tasks_down(c))?;
        }

        if what.visit_tasks() {
            for child in &mut node.tasks {
                self.task(child, true).map_err(Interrupt::Fail)?;
            }
        }

        if what.filter_tasks() {
            refilter(&mut node.tasks, |c| self.visitor.filter_tasks_up(c))?;
        }

        self.visitor.exit(NodeRef::Project(node))
    }

    fn context(&mut self, node: &mut Context) -> Result<(), BoxError> {
        if !self.what.visit_contexts() {
            return Ok(());
        }
        debug!("Traversing context: {}", node.name);
        let result = self.context_body(node);
        settle(result, NodeRef::Context(node))
    }

    fn context_body(&mut self, node: &mut Context) -> VisitResult {
        let what = self.what;
        self.visitor.enter(NodeRef::Context(node))?;

        if what.filter_tasks() {
            refilter(&mut node.tasks, |c| self.visitor.filter_tasks_down(c))?;
        }
        if what.filter_contexts() {
            refilter(&mut node.contexts, |c| self.visitor.filter_contexts_down(c))?;
        }

        // Tasks are flat in the context hierarchy.
        if what.visit_tasks() {
            for child in &mut node.tasks {
                self.task(child, false).map_err(Interrupt::Fail)?;
            }
        }
        for child in &mut node.contexts {
            self.context(child).map_err(Interrupt::Fail)?;
        }

        if what.filter_tasks() {
            refilter(&mut node.tasks, |c| self.visitor.filter_tasks_up(c))?;
        }
        if what.filter_contexts() {
            refilter(&mut node.contexts, |c| self.visitor.filter_contexts_up(c))?;
        }

        self.visitor.exit(NodeRef::Context(node))
    }

    fn task(&mut self, node: &mut Task, from_project: bool) -> Result<(), BoxError> {
        if !self.what.visit_tasks() {
            return Ok(());
        }
        debug!("Traversing task: {}", node.name);
        let result = self.task_body(node, from_project);
        settle(result, NodeRef::Task(node))
    }

    fn task_body(&mut self, node: &mut Task, from_project: bool) -> VisitResult {
        let what = self.what;
        self.visitor.enter(NodeRef::Task(node))?;

        if what.filter_tasks() {
            refilter(&mut node.tasks, |c| self.visitor.filter_tasks_down(c))?;
        }

        if from_project {
            for child in &mut node.tasks {
                self.task(child, from_project).map_err(Interrupt::Fail)?;
            }
        }

        if what.filter_tasks() {
            refilter(&mut node.tasks, |c| self.visitor.filter_tasks_up(c))?;
        }

        self.visitor.exit(NodeRef::Task(node))
    }
}

/// Hand a copy of `items` to a filter hook and keep what it returns. An
/// interrupted hook leaves `items` untouched.
fn refilter<T: Clone>(
    items: &mut Vec<T>,
    hook: impl FnOnce(Vec<T>) -> VisitResult<Vec<T>>,
) -> VisitResult {
    *items = hook(items.clone())?;
    Ok(())
}

/// Close out one node's frame: an abort ends here, a failure keeps going up.
fn settle(result: VisitResult, node: NodeRef<'_>) -> Result<(), BoxError> {
    match result {
        Ok(()) => Ok(()),
        Err(Interrupt::AbortSubtree) => {
            debug!("Traversal aborted: {}", node);
            Ok(())
        }
        Err(Interrupt::Fail(e)) => Err(e),
    }
}
