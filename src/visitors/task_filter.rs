//! Keep only tasks matching a predicate, plus their ancestors

use chrono::NaiveDate;
use regex::Regex;

use crate::model::Task;
use crate::visitor::{VisitResult, Visitor, VisitorDescriptor};

/// Conditions a task must meet to be kept. Unset conditions match anything.
#[derive(Debug, Clone, Default)]
pub struct TaskMatch {
    /// Regex searched for in the task name
    pub name: Option<Regex>,
    pub flagged_only: bool,
    /// Keep tasks due on or before this date
    pub due_by: Option<NaiveDate>,
    pub hide_completed: bool,
}

impl TaskMatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && !self.flagged_only && self.due_by.is_none() && !self.hide_completed
    }

    /// Whether `task` itself satisfies every condition.
    pub fn matches(&self, task: &Task) -> bool {
        if self.hide_completed && task.completed {
            return false;
        }
        if self.flagged_only && !task.flagged {
            return false;
        }
        if let Some(limit) = self.due_by {
            if !task.due.is_some_and(|due| due <= limit) {
                return false;
            }
        }
        self.name.as_ref().is_none_or(|re| re.is_match(&task.name))
    }

    /// Whether `task` or anything below it satisfies the conditions.
    pub fn keeps(&self, task: &Task) -> bool {
        self.matches(task) || task.tasks.iter().any(|t| self.keeps(t))
    }
}

/// Drops tasks that neither match nor lead to a match.
///
/// Runs on the way back up, so a project's task tree has already been
/// pruned below each task by the time that task is judged.
#[derive(Debug, Clone)]
pub struct TaskFilter {
    criteria: TaskMatch,
    removed: usize,
}

impl TaskFilter {
    pub fn new(criteria: TaskMatch) -> Self {
        Self {
            criteria,
            removed: 0,
        }
    }

    /// Number of tasks dropped so far.
    pub fn removed(&self) -> usize {
        self.removed
    }
}

impl Visitor for TaskFilter {
    fn what(&self) -> VisitorDescriptor {
        VisitorDescriptor::visit_all().with_filter_tasks(true)
    }

    fn filter_tasks_up(&mut self, tasks: Vec<Task>) -> VisitResult<Vec<Task>> {
        let before = tasks.len();
        let kept: Vec<Task> = tasks.into_iter().filter(|t| self.criteria.keeps(t)).collect();
        self.removed += before - kept.len();
        Ok(kept)
    }
}
