//! Cut a tree off below a given level

use crate::model::{Context, Folder, NodeRef, Project, Task};
use crate::visitor::{VisitResult, Visitor, VisitorDescriptor};

/// Removes every node deeper than `max_depth`, the root being level 0.
///
/// Children are dropped by the down-filters of the last level kept, so
/// nothing below the limit is ever walked.
#[derive(Debug, Clone, Copy)]
pub struct LevelLimit {
    max_depth: usize,
    depth: usize,
}

impl LevelLimit {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            depth: 0,
        }
    }

    /// Whether children of the node just entered sit past the limit.
    fn children_cut(&self) -> bool {
        self.depth > self.max_depth
    }

    fn cut<T>(&self, items: Vec<T>) -> VisitResult<Vec<T>> {
        if self.children_cut() {
            Ok(Vec::new())
        } else {
            Ok(items)
        }
    }
}

impl Visitor for LevelLimit {
    fn what(&self) -> VisitorDescriptor {
        VisitorDescriptor::visit_all().filter_all()
    }

    fn enter(&mut self, _node: NodeRef<'_>) -> VisitResult {
        self.depth += 1;
        Ok(())
    }

    fn exit(&mut self, _node: NodeRef<'_>) -> VisitResult {
        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }

    fn filter_folders_down(&mut self, folders: Vec<Folder>) -> VisitResult<Vec<Folder>> {
        self.cut(folders)
    }

    fn filter_projects_down(&mut self, projects: Vec<Project>) -> VisitResult<Vec<Project>> {
        self.cut(projects)
    }

    fn filter_contexts_down(&mut self, contexts: Vec<Context>) -> VisitResult<Vec<Context>> {
        self.cut(contexts)
    }

    fn filter_tasks_down(&mut self, tasks: Vec<Task>) -> VisitResult<Vec<Task>> {
        self.cut(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;
    use crate::visitor::traverse;
    use crate::visitors::Stats;

    fn sample() -> Node {
        Node::from(
            Folder::new("Root")
                .with_folder(
                    Folder::new("Home").with_project(
                        Project::new("Garden")
                            .with_task(Task::new("Dig").with_task(Task::new("Buy spade"))),
                    ),
                )
                .with_project(Project::new("Admin").with_task(Task::new("Expenses"))),
        )
    }

    fn count(root: &mut Node) -> (usize, usize, usize) {
        let mut stats = Stats::new();
        traverse(&mut stats, root).unwrap();
        let stats = stats.finalize();
        (stats.folders, stats.projects, stats.tasks)
    }

    #[test]
    fn test_level_zero_keeps_only_root() {
        let mut root = sample();
        traverse(&mut LevelLimit::new(0), &mut root).unwrap();
        assert_eq!(count(&mut root), (1, 0, 0));
    }

    #[test]
    fn test_levels_cut_each_kind() {
        let mut root = sample();
        traverse(&mut LevelLimit::new(1), &mut root).unwrap();
        assert_eq!(count(&mut root), (2, 1, 0));

        let mut root = sample();
        traverse(&mut LevelLimit::new(3), &mut root).unwrap();
        assert_eq!(count(&mut root), (2, 2, 2));
    }

    #[test]
    fn test_deep_limit_leaves_tree_alone() {
        let mut root = sample();
        traverse(&mut LevelLimit::new(10), &mut root).unwrap();
        assert_eq!(root, sample());
    }

    #[test]
    fn test_context_tasks_are_one_level_down() {
        let mut root = Node::from(
            Context::new("Errands")
                .with_task(Task::new("Post office").with_task(Task::new("Stamps")))
                .with_context(Context::new("Phone").with_task(Task::new("Call plumber"))),
        );
        traverse(&mut LevelLimit::new(1), &mut root).unwrap();

        let Node::Context(context) = root else {
            panic!("root changed kind");
        };
        assert_eq!(context.tasks.len(), 1);
        assert!(context.tasks[0].tasks.is_empty());
        assert!(context.contexts[0].tasks.is_empty());
    }
}
