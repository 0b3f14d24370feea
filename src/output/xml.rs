//! XML output formatting

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::model::{Context, Folder, Node, Project, Task};

use super::{Formatter, OutputError};

const INDENT: usize = 2;

/// Writes the whole tree as indented XML, one element per node.
///
/// Fields become attributes (`flagged` and `completed` only when set) and
/// notes become a leading `<note>` child. Context tasks are written with
/// their sub-tasks, so nothing in the tree is lost.
pub struct XmlFormatter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlFormatter<W> {
    pub fn new(out: W) -> Self {
        Self {
            writer: Writer::new_with_indent(out, b' ', INDENT),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Open an element, or self-close it when there is nothing inside.
    /// Returns whether a closing tag is still owed.
    fn open(
        &mut self,
        start: BytesStart<'_>,
        note: Option<&str>,
        empty: bool,
    ) -> Result<bool, OutputError> {
        if empty && note.is_none() {
            self.writer.write_event(Event::Empty(start))?;
            return Ok(false);
        }
        self.writer.write_event(Event::Start(start))?;
        if let Some(note) = note {
            self.writer.write_event(Event::Start(BytesStart::new("note")))?;
            self.writer.write_event(Event::Text(BytesText::new(note)))?;
            self.writer.write_event(Event::End(BytesEnd::new("note")))?;
        }
        Ok(true)
    }

    fn close(&mut self, tag: &str) -> Result<(), OutputError> {
        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    fn folder(&mut self, folder: &Folder) -> Result<(), OutputError> {
        let mut start = BytesStart::new("folder");
        start.push_attribute(("name", folder.name.as_str()));

        let empty = folder.folders.is_empty() && folder.projects.is_empty();
        if self.open(start, None, empty)? {
            for child in &folder.folders {
                self.folder(child)?;
            }
            for project in &folder.projects {
                self.project(project)?;
            }
            self.close("folder")?;
        }
        Ok(())
    }

    fn project(&mut self, project: &Project) -> Result<(), OutputError> {
        let mut start = BytesStart::new("project");
        start.push_attribute(("name", project.name.as_str()));
        start.push_attribute(("status", project.status.as_str()));
        if project.flagged {
            start.push_attribute(("flagged", "true"));
        }

        if self.open(start, project.note.as_deref(), project.tasks.is_empty())? {
            for task in &project.tasks {
                self.task(task)?;
            }
            self.close("project")?;
        }
        Ok(())
    }

    fn context(&mut self, context: &Context) -> Result<(), OutputError> {
        let mut start = BytesStart::new("context");
        start.push_attribute(("name", context.name.as_str()));

        let empty = context.tasks.is_empty() && context.contexts.is_empty();
        if self.open(start, None, empty)? {
            for task in &context.tasks {
                self.task(task)?;
            }
            for child in &context.contexts {
                self.context(child)?;
            }
            self.close("context")?;
        }
        Ok(())
    }

    fn task(&mut self, task: &Task) -> Result<(), OutputError> {
        let mut start = BytesStart::new("task");
        start.push_attribute(("name", task.name.as_str()));
        if task.flagged {
            start.push_attribute(("flagged", "true"));
        }
        if task.completed {
            start.push_attribute(("completed", "true"));
        }
        if let Some(due) = task.due {
            let due = due.format("%Y-%m-%d").to_string();
            start.push_attribute(("due", due.as_str()));
        }

        if self.open(start, task.note.as_deref(), task.tasks.is_empty())? {
            for child in &task.tasks {
                self.task(child)?;
            }
            self.close("task")?;
        }
        Ok(())
    }
}

impl<W: Write> Formatter for XmlFormatter<W> {
    fn format(&mut self, root: &mut Node) -> Result<(), OutputError> {
        let decl = BytesDecl::new("1.0", Some("UTF-8"), None);
        self.writer.write_event(Event::Decl(decl))?;
        match root {
            Node::Folder(folder) => self.folder(folder)?,
            Node::Project(project) => self.project(project)?,
            Node::Context(context) => self.context(context)?,
            Node::Task(task) => self.task(task)?,
        }
        let out = self.writer.get_mut();
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}
