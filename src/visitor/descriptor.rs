//! Per-kind visit and filter switches for a traversal

/// Which node kinds a traversal visits and which child collections it
/// passes through the visitor's filter hooks.
///
/// The default visits and filters nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitorDescriptor {
    visit_folders: bool,
    filter_folders: bool,
    visit_projects: bool,
    filter_projects: bool,
    visit_contexts: bool,
    filter_contexts: bool,
    visit_tasks: bool,
    filter_tasks: bool,
}

impl VisitorDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit every kind, filter nothing.
    pub fn visit_all() -> Self {
        Self::new()
            .with_visit_folders(true)
            .with_visit_projects(true)
            .with_visit_contexts(true)
            .with_visit_tasks(true)
    }

    /// Turn on filtering for every kind.
    pub fn filter_all(self) -> Self {
        self.with_filter_folders(true)
            .with_filter_projects(true)
            .with_filter_contexts(true)
            .with_filter_tasks(true)
    }

    pub fn with_visit_folders(mut self, on: bool) -> Self {
        self.visit_folders = on;
        self
    }

    pub fn with_filter_folders(mut self, on: bool) -> Self {
        self.filter_folders = on;
        self
    }

    pub fn with_visit_projects(mut self, on: bool) -> Self {
        self.visit_projects = on;
        self
    }

    pub fn with_filter_projects(mut self, on: bool) -> Self {
        self.filter_projects = on;
        self
    }

    pub fn with_visit_contexts(mut self, on: bool) -> Self {
        self.visit_contexts = on;
        self
    }

    pub fn with_filter_contexts(mut self, on: bool) -> Self {
        self.filter_contexts = on;
        self
    }

    pub fn with_visit_tasks(mut self, on: bool) -> Self {
        self.visit_tasks = on;
        self
    }

    pub fn with_filter_tasks(mut self, on: bool) -> Self {
        self.filter_tasks = on;
        self
    }

    pub fn visit_folders(&self) -> bool {
        self.visit_folders
    }

    pub fn filter_folders(&self) -> bool {
        self.filter_folders
    }

    pub fn visit_projects(&self) -> bool {
        self.visit_projects
    }

    pub fn filter_projects(&self) -> bool {
        self.filter_projects
    }

    pub fn visit_contexts(&self) -> bool {
        self.visit_contexts
    }

    pub fn filter_contexts(&self) -> bool {
        self.filter_contexts
    }

    pub fn visit_tasks(&self) -> bool {
        self.visit_tasks
    }

    pub fn filter_tasks(&self) -> bool {
        self.filter_tasks
    }
}
