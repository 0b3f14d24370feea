//! Task tree model: folders, projects, contexts and tasks
//!
//! Folders hold sub-folders and projects. Projects hold a task tree. Contexts
//! hold sub-contexts and a flat list of tasks. Tasks hold sub-tasks.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The fixed discriminant of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    Project,
    Context,
    Task,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Folder => "folder",
            NodeKind::Project => "project",
            NodeKind::Context => "context",
            NodeKind::Task => "task",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Folder {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<Folder>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Active,
    OnHold,
    Completed,
    Dropped,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Dropped => "dropped",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub status: ProjectStatus,
    pub flagged: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,
}

/// A context and the tasks filed under it.
///
/// `tasks` is flat: the sub-tasks of these tasks belong to their project
/// hierarchy and are not walked from here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<Context>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub flagged: bool,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_folder(mut self, folder: Folder) -> Self {
        self.folders.push(folder);
        self
    }

    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.contexts.push(context);
        self
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn flagged(mut self) -> Self {
        self.flagged = true;
        self
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    pub fn due(mut self, date: NaiveDate) -> Self {
        self.due = Some(date);
        self
    }

    /// Number of tasks in this task's tree, itself included.
    pub fn size(&self) -> usize {
        1 + self.tasks.iter().map(Task::size).sum::<usize>()
    }

    /// Whether the task is still open with a due date before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due.is_some_and(|due| due < today)
    }
}

/// A node of any kind. The kind is fixed for the node's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Folder(Folder),
    Project(Project),
    Context(Context),
    Task(Task),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        self.view().kind()
    }

    pub fn name(&self) -> &str {
        self.view().name()
    }

    pub fn view(&self) -> NodeRef<'_> {
        match self {
            Node::Folder(f) => NodeRef::Folder(f),
            Node::Project(p) => NodeRef::Project(p),
            Node::Context(c) => NodeRef::Context(c),
            Node::Task(t) => NodeRef::Task(t),
        }
    }
}

impl From<Folder> for Node {
    fn from(folder: Folder) -> Self {
        Node::Folder(folder)
    }
}

impl From<Project> for Node {
    fn from(project: Project) -> Self {
        Node::Project(project)
    }
}

impl From<Context> for Node {
    fn from(context: Context) -> Self {
        Node::Context(context)
    }
}

impl From<Task> for Node {
    fn from(task: Task) -> Self {
        Node::Task(task)
    }
}

/// Borrowed view of a node, handed to visitor hooks.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Folder(&'a Folder),
    Project(&'a Project),
    Context(&'a Context),
    Task(&'a Task),
}

impl<'a> NodeRef<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Folder(_) => NodeKind::Folder,
            NodeRef::Project(_) => NodeKind::Project,
            NodeRef::Context(_) => NodeKind::Context,
            NodeRef::Task(_) => NodeKind::Task,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            NodeRef::Folder(f) => &f.name,
            NodeRef::Project(p) => &p.name,
            NodeRef::Context(c) => &c.name,
            NodeRef::Task(t) => &t.name,
        }
    }

    pub fn note(&self) -> Option<&'a str> {
        match self {
            NodeRef::Project(p) => p.note.as_deref(),
            NodeRef::Task(t) => t.note.as_deref(),
            NodeRef::Folder(_) | NodeRef::Context(_) => None,
        }
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind(), self.name())
    }
}
