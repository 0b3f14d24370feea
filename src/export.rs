//! Loading a task tree and preparing it for output
//!
//! `Exporter` turns an `ExportConfig` into a series of stock visitors and
//! runs each as its own traversal, in a fixed order: project filter, task
//! filter, pruning, sorting, level limit.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{Days, NaiveDate};
use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::Node;
use crate::output::OutputError;
use crate::visitor::{traverse, TraversalError};
use crate::visitors::{LevelLimit, ProjectFilter, Pruner, Sorter, TaskFilter, TaskMatch};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Errors raised while loading, preparing or rendering a tree.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid task document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid task pattern: {0}")]
    TaskPattern(#[from] regex::Error),

    #[error("invalid project pattern: {0}")]
    ProjectPattern(#[from] glob::PatternError),

    #[error("due window of {0:?} is out of range")]
    DueWindow(Duration),

    #[error(transparent)]
    Traversal(#[from] TraversalError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Which stock visitors run before output.
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Regex a task name must contain
    pub task_pattern: Option<String>,
    /// Glob a project name must match
    pub project_pattern: Option<String>,
    pub flagged_only: bool,
    /// Keep tasks due within this long from today
    pub due_within: Option<Duration>,
    pub hide_completed: bool,
    /// Drop projects, folders and contexts left empty
    pub prune: bool,
    /// Sort every level by name
    pub sort: bool,
    /// Drop everything below this level (root is level 0)
    pub max_depth: Option<usize>,
}

/// Prepared pipeline of visitors.
#[derive(Debug)]
pub struct Exporter {
    project_filter: Option<ProjectFilter>,
    task_filter: Option<TaskFilter>,
    prune: bool,
    sort: bool,
    max_depth: Option<usize>,
}

impl Exporter {
    /// Compile the config's patterns. `today` anchors `due_within`.
    pub fn new(config: &ExportConfig, today: NaiveDate) -> Result<Self, ExportError> {
        let project_filter = config
            .project_pattern
            .as_deref()
            .map(ProjectFilter::new)
            .transpose()?;

        let due_by = match config.due_within {
            Some(window) => Some(
                today
                    .checked_add_days(Days::new(window.as_secs() / SECONDS_PER_DAY))
                    .ok_or(ExportError::DueWindow(window))?,
            ),
            None => None,
        };
        let criteria = TaskMatch {
            name: config.task_pattern.as_deref().map(Regex::new).transpose()?,
            flagged_only: config.flagged_only,
            due_by,
            hide_completed: config.hide_completed,
        };
        let task_filter = (!criteria.is_empty()).then(|| TaskFilter::new(criteria));

        Ok(Self {
            project_filter,
            task_filter,
            prune: config.prune,
            sort: config.sort,
            max_depth: config.max_depth,
        })
    }

    /// Run the configured visitors over `root`, in place.
    pub fn prepare(&mut self, root: &mut Node) -> Result<(), ExportError> {
        if let Some(filter) = self.project_filter.as_mut() {
            debug!("Filtering projects");
            traverse(filter, root)?;
        }
        if let Some(filter) = self.task_filter.as_mut() {
            debug!("Filtering tasks");
            traverse(filter, root)?;
            debug!("Removed {} tasks", filter.removed());
        }
        if self.prune {
            debug!("Pruning empty nodes");
            traverse(&mut Pruner, root)?;
        }
        if self.sort {
            debug!("Sorting");
            traverse(&mut Sorter, root)?;
        }
        if let Some(max_depth) = self.max_depth {
            debug!("Cutting below level {}", max_depth);
            traverse(&mut LevelLimit::new(max_depth), root)?;
        }
        Ok(())
    }
}

/// Load a tree from a JSON document on disk.
pub fn load_tree(path: &Path) -> Result<Node, ExportError> {
    let file = File::open(path).map_err(|source| {
        warn!("Cannot open {}: {}", path.display(), source);
        ExportError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;
    load_tree_from_reader(BufReader::new(file))
}

/// Load a tree from any JSON reader, such as stdin.
pub fn load_tree_from_reader<R: Read>(reader: R) -> Result<Node, ExportError> {
    let node: Node = serde_json::from_reader(reader)?;
    debug!("Loaded {}", node.view());
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Folder, Project, Task};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn sample() -> Node {
        Node::from(
            Folder::new("Root")
                .with_project(
                    Project::new("Work")
                        .with_task(Task::new("report"))
                        .with_task(Task::new("Email").flagged()),
                )
                .with_project(Project::new("Home").with_task(Task::new("dishes")))
                .with_folder(Folder::new("Empty")),
        )
    }

    fn project_names(node: &Node) -> Vec<&str> {
        match node {
            Node::Folder(f) => f.projects.iter().map(|p| p.name.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_default_config_leaves_tree_alone() {
        let mut root = sample();
        Exporter::new(&ExportConfig::default(), today())
            .unwrap()
            .prepare(&mut root)
            .unwrap();
        assert_eq!(root, sample());
    }

    #[test]
    fn test_flagged_with_prune_and_sort() {
        let mut root = sample();
        let config = ExportConfig {
            flagged_only: true,
            prune: true,
            sort: true,
            ..Default::default()
        };
        Exporter::new(&config, today()).unwrap().prepare(&mut root).unwrap();

        let Node::Folder(folder) = &root else {
            panic!("root changed kind");
        };
        assert_eq!(project_names(&root), vec!["Work"]);
        assert_eq!(folder.projects[0].tasks.len(), 1);
        assert!(folder.folders.is_empty());
    }

    #[test]
    fn test_sort_only() {
        let mut root = sample();
        let config = ExportConfig {
            sort: true,
            ..Default::default()
        };
        Exporter::new(&config, today()).unwrap().prepare(&mut root).unwrap();
        assert_eq!(project_names(&root), vec!["Home", "Work"]);
    }

    #[test]
    fn test_max_depth_runs_after_prune() {
        let mut root = sample();
        let config = ExportConfig {
            prune: true,
            max_depth: Some(1),
            ..Default::default()
        };
        Exporter::new(&config, today()).unwrap().prepare(&mut root).unwrap();

        let Node::Folder(folder) = &root else {
            panic!("root changed kind");
        };
        assert_eq!(project_names(&root), vec!["Work", "Home"]);
        assert!(folder.projects.iter().all(|p| p.tasks.is_empty()));
        assert!(folder.folders.is_empty());
    }

    #[test]
    fn test_project_pattern() {
        let mut root = sample();
        let config = ExportConfig {
            project_pattern: Some("h*".to_string()),
            ..Default::default()
        };
        Exporter::new(&config, today()).unwrap().prepare(&mut root).unwrap();
        assert_eq!(project_names(&root), vec!["Home"]);
    }

    #[test]
    fn test_due_within_counts_whole_days() {
        let mut root = Node::from(
            Project::new("P")
                .with_task(Task::new("soon").due(NaiveDate::from_ymd_opt(2024, 6, 8).unwrap()))
                .with_task(Task::new("later").due(NaiveDate::from_ymd_opt(2024, 6, 9).unwrap())),
        );
        let config = ExportConfig {
            due_within: Some(Duration::from_secs(7 * SECONDS_PER_DAY)),
            ..Default::default()
        };
        Exporter::new(&config, today()).unwrap().prepare(&mut root).unwrap();

        let Node::Project(project) = root else {
            panic!("root changed kind");
        };
        assert_eq!(project.tasks.len(), 1);
        assert_eq!(project.tasks[0].name, "soon");
    }

    #[test]
    fn test_bad_patterns_are_reported() {
        let config = ExportConfig {
            task_pattern: Some("(".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            Exporter::new(&config, today()),
            Err(ExportError::TaskPattern(_))
        ));

        let config = ExportConfig {
            project_pattern: Some("[".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            Exporter::new(&config, today()),
            Err(ExportError::ProjectPattern(_))
        ));
    }

    #[test]
    fn test_load_from_reader() {
        let json = r#"{"type": "context", "name": "Phone", "tasks": [{"name": "Call"}]}"#;
        let node = load_tree_from_reader(json.as_bytes()).unwrap();
        assert_eq!(node.name(), "Phone");
    }

    #[test]
    fn test_load_rejects_unknown_type() {
        let json = r#"{"type": "area", "name": "Phone"}"#;
        assert!(matches!(
            load_tree_from_reader(json.as_bytes()),
            Err(ExportError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_tree(Path::new("/nonexistent/tasks.json")).unwrap_err();
        assert!(err.to_string().starts_with("cannot read '/nonexistent/tasks.json'"));
    }
}
