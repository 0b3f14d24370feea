//! Remove containers left empty, typically after filtering

use crate::model::{Context, Folder, Project};
use crate::visitor::{VisitResult, Visitor, VisitorDescriptor};

/// Drops projects without tasks, folders without folders or projects, and
/// contexts without tasks or contexts.
///
/// Pruning happens on the way up, so a folder whose sub-folders were all
/// pruned is itself pruned.
#[derive(Debug, Default)]
pub struct Pruner;

impl Visitor for Pruner {
    fn what(&self) -> VisitorDescriptor {
        VisitorDescriptor::new()
            .with_visit_folders(true)
            .with_filter_folders(true)
            .with_filter_projects(true)
            .with_visit_contexts(true)
            .with_filter_contexts(true)
    }

    fn filter_folders_up(&mut self, mut folders: Vec<Folder>) -> VisitResult<Vec<Folder>> {
        folders.retain(|f| !f.folders.is_empty() || !f.projects.is_empty());
        Ok(folders)
    }

    fn filter_projects_up(&mut self, mut projects: Vec<Project>) -> VisitResult<Vec<Project>> {
        projects.retain(|p| !p.tasks.is_empty());
        Ok(projects)
    }

    fn filter_contexts_up(&mut self, mut contexts: Vec<Context>) -> VisitResult<Vec<Context>> {
        contexts.retain(|c| !c.contexts.is_empty() || !c.tasks.is_empty());
        Ok(contexts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Node, Task};
    use crate::visitor::traverse;

    #[test]
    fn test_prunes_empty_folders_bottom_up() {
        let mut root = Node::from(
            Folder::new("Root")
                .with_folder(Folder::new("Outer").with_folder(Folder::new("Inner")))
                .with_folder(Folder::new("Busy").with_project(Project::new("Empty")))
                .with_folder(
                    Folder::new("Kept").with_project(Project::new("Full").with_task(Task::new("t"))),
                ),
        );

        traverse(&mut Pruner, &mut root).unwrap();

        let Node::Folder(folder) = root else {
            panic!("root changed kind");
        };
        let names: Vec<_> = folder.folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Kept"]);
        assert_eq!(folder.folders[0].projects.len(), 1);
    }

    #[test]
    fn test_prunes_empty_contexts() {
        let mut root = Node::from(
            Context::new("All")
                .with_context(Context::new("Empty").with_context(Context::new("Also empty")))
                .with_context(Context::new("Phone").with_task(Task::new("Call mum"))),
        );

        traverse(&mut Pruner, &mut root).unwrap();

        let Node::Context(context) = root else {
            panic!("root changed kind");
        };
        let names: Vec<_> = context.contexts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Phone"]);
    }

    #[test]
    fn test_root_is_never_removed() {
        let mut root = Node::from(Folder::new("Lonely"));
        traverse(&mut Pruner, &mut root).unwrap();
        assert_eq!(root, Node::from(Folder::new("Lonely")));
    }
}
