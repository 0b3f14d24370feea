//! Test utilities: sample trees and temporary input documents.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;

use crate::model::{Context, Folder, Node, Project, Task};

/// A temporary directory holding task documents.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestInput {
    dir: TempDir,
}

impl TestInput {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `node` as JSON to `name` and return its path.
    pub fn add_tree(&self, name: &str, node: &Node) -> PathBuf {
        let json = serde_json::to_string_pretty(node).expect("Failed to encode tree");
        self.add_raw(name, &json)
    }

    /// Write arbitrary content to `name` and return its path.
    pub fn add_raw(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(name);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

impl Default for TestInput {
    fn default() -> Self {
        Self::new()
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A small folder tree with nested projects and sub-tasks.
pub fn sample_folders() -> Node {
    let mut taxes = Project::new("Taxes")
        .with_task(Task::new("Gather receipts").due(date(2024, 4, 1)))
        .with_task(Task::new("File return").flagged().due(date(2024, 4, 15)));
    taxes.note = Some("Accountant: Jo".to_string());

    let garden = Project::new("Garden")
        .with_task(
            Task::new("Build beds")
                .with_task(Task::new("Buy timber").completed())
                .with_task(Task::new("Call about soil delivery")),
        )
        .with_task(Task::new("Plant tomatoes"));

    let work = Folder::new("Work")
        .with_project(Project::new("Quarterly report").with_task(Task::new("Draft summary")))
        .with_project(Project::new("Hiring"));

    Node::from(
        Folder::new("Life")
            .with_folder(Folder::new("Home").with_project(garden).with_project(taxes))
            .with_folder(work)
            .with_folder(Folder::new("Someday")),
    )
}

/// A context tree whose tasks carry sub-tasks that a context walk skips.
pub fn sample_contexts() -> Node {
    Node::from(
        Context::new("Errands")
            .with_task(Task::new("Hardware store").with_task(Task::new("Screws")))
            .with_task(Task::new("Post office").flagged())
            .with_context(Context::new("Phone").with_task(Task::new("Call plumber")))
            .with_context(Context::new("Online")),
    )
}

/// A generated folder tree, `breadth` wide at every level and `depth` deep,
/// with a project of `breadth` two-level tasks in each folder.
pub fn generated_tree(breadth: usize, depth: usize) -> Node {
    fn folder(name: String, breadth: usize, depth: usize) -> Folder {
        let mut project = Project::new(format!("{} project", name));
        for t in 0..breadth {
            project.tasks.push(
                Task::new(format!("{} task {}", name, t))
                    .with_task(Task::new(format!("{} task {}.1", name, t))),
            );
        }
        let mut node = Folder::new(name.clone()).with_project(project);
        if depth > 0 {
            for f in 0..breadth {
                node.folders
                    .push(folder(format!("{}/{}", name, f), breadth, depth - 1));
            }
        }
        node
    }
    Node::from(folder("root".to_string(), breadth, depth))
}
