//! JSON output formatting

use std::io::Write;

use crate::model::Node;

use super::{Formatter, OutputError};

/// Writes the tree as pretty JSON, in the same shape the loader reads.
pub struct JsonFormatter<W> {
    out: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Formatter for JsonFormatter<W> {
    fn format(&mut self, root: &mut Node) -> Result<(), OutputError> {
        serde_json::to_writer_pretty(&mut self.out, &*root)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Folder, Project, Task};

    #[test]
    fn test_json_reads_back_as_same_tree() {
        let mut root = Node::from(
            Folder::new("Home").with_project(Project::new("Garden").with_task(Task::new("Dig"))),
        );
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.format(&mut root).unwrap();

        let bytes = formatter.into_inner();
        let parsed: Node = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, root);
        assert!(bytes.ends_with(b"}\n"));
    }
}
