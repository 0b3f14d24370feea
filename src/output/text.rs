//! Indented text outline
//!
//! This module provides `TextFormatter`, a visitor that writes one line per
//! node as it is entered, indented by depth, with optional colors.

use std::io::Write;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::model::{Node, NodeRef, Task};
use crate::visitor::{traverse, VisitResult, Visitor, VisitorDescriptor};
use crate::visitors::TreeStats;

use super::config::OutputConfig;
use super::utils::{note_lines, DepthGate};
use super::{Formatter, OutputError};

/// Text outline formatter writing to any `WriteColor` sink.
pub struct TextFormatter<W> {
    config: OutputConfig,
    out: W,
    gate: DepthGate,
    stats: TreeStats,
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        let gate = DepthGate::new(config.max_depth);
        Self {
            config,
            out,
            gate,
            stats: TreeStats::default(),
        }
    }

    /// Counts of the nodes written so far.
    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Switch to `spec` when color is enabled.
    fn paint(&mut self, spec: &ColorSpec) -> std::io::Result<()> {
        if self.config.use_color {
            self.out.set_color(spec)?;
        }
        Ok(())
    }

    fn unpaint(&mut self) -> std::io::Result<()> {
        if self.config.use_color {
            self.out.reset()?;
        }
        Ok(())
    }

    fn label_color(&self, node: NodeRef<'_>) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match node {
            NodeRef::Folder(_) => {
                spec.set_fg(Some(Color::Blue)).set_bold(true);
            }
            NodeRef::Project(_) => {
                spec.set_fg(Some(Color::Green)).set_bold(true);
            }
            NodeRef::Context(_) => {
                spec.set_fg(Some(Color::Magenta)).set_bold(true);
            }
            NodeRef::Task(task) if task.completed => {
                spec.set_dimmed(true);
            }
            NodeRef::Task(_) => {}
        }
        spec
    }

    fn write_node(&mut self, node: NodeRef<'_>, level: usize) -> std::io::Result<()> {
        let indent = " ".repeat(level * self.config.indent);
        write!(self.out, "{}", indent)?;

        let label = match node {
            NodeRef::Folder(f) => format!("Folder: {}", f.name),
            NodeRef::Project(p) => format!("Project: {}", p.name),
            NodeRef::Context(c) => format!("Context: {}", c.name),
            NodeRef::Task(t) => format!("{} {}", checkbox(t), t.name),
        };
        self.paint(&self.label_color(node))?;
        write!(self.out, "{}", label)?;
        self.unpaint()?;

        if let NodeRef::Task(task) = node {
            self.write_task_annotations(task)?;
        }
        if let NodeRef::Project(project) = node {
            if project.flagged {
                self.write_flag()?;
            }
        }
        writeln!(self.out)?;

        if self.config.show_notes {
            if let Some(note) = node.note() {
                let note_indent = " ".repeat((level + 1) * self.config.indent);
                self.paint(ColorSpec::new().set_dimmed(true))?;
                for line in note_lines(note) {
                    writeln!(self.out, "{}> {}", note_indent, line)?;
                }
                self.unpaint()?;
            }
        }
        Ok(())
    }

    fn write_task_annotations(&mut self, task: &Task) -> std::io::Result<()> {
        if let Some(due) = task.due {
            let overdue = self.config.today.is_some_and(|today| task.is_overdue(today));
            let mut spec = ColorSpec::new();
            if overdue {
                spec.set_fg(Some(Color::Red)).set_bold(true);
            } else {
                spec.set_fg(Some(Color::Cyan));
            }
            write!(self.out, " ")?;
            self.paint(&spec)?;
            write!(self.out, "(due {})", due.format("%Y-%m-%d"))?;
            self.unpaint()?;
        }
        if task.flagged {
            self.write_flag()?;
        }
        Ok(())
    }

    fn write_flag(&mut self) -> std::io::Result<()> {
        write!(self.out, " ")?;
        self.paint(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(self.out, "[flagged]")?;
        self.unpaint()
    }

    /// Write the trailing summary line.
    pub fn finish(&mut self) -> std::io::Result<()> {
        if self.config.summary {
            writeln!(self.out)?;
            writeln!(self.out, "{}", self.stats)?;
        }
        self.out.flush()
    }
}

fn checkbox(task: &Task) -> &'static str {
    if task.completed { "[x]" } else { "[ ]" }
}

impl<W: WriteColor> Visitor for TextFormatter<W> {
    fn what(&self) -> VisitorDescriptor {
        VisitorDescriptor::visit_all()
    }

    fn enter(&mut self, node: NodeRef<'_>) -> VisitResult {
        let level = self.gate.enter()?;
        self.stats.record(node);
        self.write_node(node, level)?;
        Ok(())
    }

    fn exit(&mut self, _node: NodeRef<'_>) -> VisitResult {
        self.gate.exit();
        Ok(())
    }
}

impl<W: WriteColor> Formatter for TextFormatter<W> {
    fn format(&mut self, root: &mut Node) -> Result<(), OutputError> {
        traverse(self, root)?;
        self.finish()?;
        Ok(())
    }
}
