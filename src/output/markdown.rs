//! Markdown output formatting
//!
//! Folders, projects and contexts become headings, tasks become nested
//! checkbox list items. Suitable for documentation or pasting into notes.

use std::io::Write;

use crate::model::{Node, NodeRef, Task};
use crate::visitor::{traverse, VisitResult, Visitor, VisitorDescriptor};

use super::config::OutputConfig;
use super::utils::{note_lines, DepthGate};
use super::{Formatter, OutputError};

const MAX_HEADING_LEVEL: usize = 6;

/// Markdown formatter writing to any `io::Write` sink.
pub struct MarkdownFormatter<W> {
    config: OutputConfig,
    out: W,
    gate: DepthGate,
    task_depth: usize,
    wrote_any: bool,
    after_heading: bool,
}

impl<W: Write> MarkdownFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        let gate = DepthGate::new(config.max_depth);
        Self {
            config,
            out,
            gate,
            task_depth: 0,
            wrote_any: false,
            after_heading: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_heading(
        &mut self,
        level: usize,
        title: &str,
        note: Option<&str>,
    ) -> std::io::Result<()> {
        if self.wrote_any {
            writeln!(self.out)?;
        }
        let hashes = "#".repeat((level + 1).min(MAX_HEADING_LEVEL));
        writeln!(self.out, "{} {}", hashes, title)?;
        if let Some(note) = note.filter(|_| self.config.show_notes) {
            writeln!(self.out)?;
            for line in note_lines(note) {
                writeln!(self.out, "{}", line)?;
            }
        }
        self.after_heading = true;
        Ok(())
    }

    fn write_task(&mut self, task: &Task) -> std::io::Result<()> {
        // Blank line between a heading and the list below it.
        if self.after_heading {
            writeln!(self.out)?;
            self.after_heading = false;
        }
        let indent = "  ".repeat(self.task_depth);
        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        write!(self.out, "{}- {} {}", indent, checkbox, task.name)?;
        if let Some(due) = task.due {
            write!(self.out, " (due {})", due.format("%Y-%m-%d"))?;
        }
        if task.flagged {
            write!(self.out, " **flagged**")?;
        }
        writeln!(self.out)?;

        if self.config.show_notes {
            if let Some(note) = task.note.as_deref() {
                for line in note_lines(note) {
                    writeln!(self.out, "{}  > {}", indent, line)?;
                }
            }
        }
        Ok(())
    }
}

impl<W: Write> Visitor for MarkdownFormatter<W> {
    fn what(&self) -> VisitorDescriptor {
        VisitorDescriptor::visit_all()
    }

    fn enter(&mut self, node: NodeRef<'_>) -> VisitResult {
        let level = self.gate.enter()?;
        match node {
            NodeRef::Task(task) => {
                self.write_task(task)?;
                self.task_depth += 1;
            }
            NodeRef::Project(project) if project.flagged => {
                let title = format!("{} **flagged**", project.name);
                self.write_heading(level, &title, node.note())?;
            }
            _ => self.write_heading(level, node.name(), node.note())?,
        }
        self.wrote_any = true;
        Ok(())
    }

    fn exit(&mut self, node: NodeRef<'_>) -> VisitResult {
        self.gate.exit();
        if let NodeRef::Task(_) = node {
            self.task_depth = self.task_depth.saturating_sub(1);
        }
        Ok(())
    }
}

impl<W: Write> Formatter for MarkdownFormatter<W> {
    fn format(&mut self, root: &mut Node) -> Result<(), OutputError> {
        traverse(self, root)?;
        self.out.flush()?;
        Ok(())
    }
}
