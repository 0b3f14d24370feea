//! Order every child collection by name

use crate::model::{Context, Folder, Project, Task};
use crate::visitor::{VisitResult, Visitor, VisitorDescriptor};

fn sort_key(name: &str) -> String {
    name.to_lowercase()
}

/// Sorts siblings by case-insensitive name. Sorting is stable, so equal
/// names keep their original order.
#[derive(Debug, Default)]
pub struct Sorter;

impl Visitor for Sorter {
    fn what(&self) -> VisitorDescriptor {
        VisitorDescriptor::visit_all().filter_all()
    }

    fn filter_folders_down(&mut self, mut folders: Vec<Folder>) -> VisitResult<Vec<Folder>> {
        folders.sort_by_cached_key(|f| sort_key(&f.name));
        Ok(folders)
    }

    fn filter_projects_down(&mut self, mut projects: Vec<Project>) -> VisitResult<Vec<Project>> {
        projects.sort_by_cached_key(|p| sort_key(&p.name));
        Ok(projects)
    }

    fn filter_contexts_down(&mut self, mut contexts: Vec<Context>) -> VisitResult<Vec<Context>> {
        contexts.sort_by_cached_key(|c| sort_key(&c.name));
        Ok(contexts)
    }

    fn filter_tasks_down(&mut self, mut tasks: Vec<Task>) -> VisitResult<Vec<Task>> {
        tasks.sort_by_cached_key(|t| sort_key(&t.name));
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;
    use crate::visitor::traverse;

    #[test]
    fn test_sorts_every_level() {
        let mut root = Node::from(
            Folder::new("Root")
                .with_folder(Folder::new("b"))
                .with_folder(Folder::new("A"))
                .with_project(
                    Project::new("P").with_task(
                        Task::new("parent")
                            .with_task(Task::new("zeta"))
                            .with_task(Task::new("Alpha")),
                    ),
                ),
        );

        traverse(&mut Sorter, &mut root).unwrap();

        let Node::Folder(folder) = root else {
            panic!("root changed kind");
        };
        let names: Vec<_> = folder.folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A", "b"]);
        let subtasks: Vec<_> = folder.projects[0].tasks[0]
            .tasks
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(subtasks, vec!["Alpha", "zeta"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut root = Node::from(
            Context::new("C")
                .with_task(Task::new("same").flagged())
                .with_task(Task::new("Same")),
        );

        traverse(&mut Sorter, &mut root).unwrap();

        let Node::Context(context) = root else {
            panic!("root changed kind");
        };
        assert!(context.tasks[0].flagged);
        assert_eq!(context.tasks[1].name, "Same");
    }
}
