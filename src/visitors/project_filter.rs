//! Keep only projects whose name matches a glob pattern

use glob::{MatchOptions, Pattern};

use crate::model::Project;
use crate::visitor::{VisitResult, Visitor, VisitorDescriptor};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Drops projects whose names don't match before they are descended into.
#[derive(Debug, Clone)]
pub struct ProjectFilter {
    pattern: Pattern,
}

impl ProjectFilter {
    pub fn new(pattern: &str) -> Result<Self, glob::PatternError> {
        Ok(Self {
            pattern: Pattern::new(pattern)?,
        })
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.pattern.matches_with(&project.name, MATCH_OPTIONS)
    }
}

impl Visitor for ProjectFilter {
    fn what(&self) -> VisitorDescriptor {
        VisitorDescriptor::new()
            .with_visit_folders(true)
            .with_filter_projects(true)
    }

    fn filter_projects_down(&mut self, projects: Vec<Project>) -> VisitResult<Vec<Project>> {
        Ok(projects.into_iter().filter(|p| self.matches(p)).collect())
    }
}
