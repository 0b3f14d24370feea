//! Node counts per kind

use std::fmt;

use serde::Serialize;

use crate::model::NodeRef;
use crate::visitor::{VisitResult, Visitor, VisitorDescriptor};

/// How many nodes of each kind a traversal entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub folders: usize,
    pub projects: usize,
    pub contexts: usize,
    pub tasks: usize,
    /// Open tasks that are flagged
    pub flagged: usize,
    pub completed: usize,
}

impl TreeStats {
    pub fn record(&mut self, node: NodeRef<'_>) {
        match node {
            NodeRef::Folder(_) => self.folders += 1,
            NodeRef::Project(_) => self.projects += 1,
            NodeRef::Context(_) => self.contexts += 1,
            NodeRef::Task(task) => {
                self.tasks += 1;
                if task.completed {
                    self.completed += 1;
                } else if task.flagged {
                    self.flagged += 1;
                }
            }
        }
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} folders, {} projects, {} contexts, {} tasks",
            self.folders, self.projects, self.contexts, self.tasks
        )
    }
}

/// Counts every node it enters.
#[derive(Debug, Default)]
pub struct Stats {
    stats: TreeStats,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finalize(self) -> TreeStats {
        self.stats
    }
}

impl Visitor for Stats {
    fn what(&self) -> VisitorDescriptor {
        VisitorDescriptor::visit_all()
    }

    fn enter(&mut self, node: NodeRef<'_>) -> VisitResult {
        self.stats.record(node);
        Ok(())
    }
}
