//! Shared helpers for the outline formatters

use crate::visitor::{Interrupt, VisitResult};

/// Tracks nesting depth across enter/exit and cuts off anything below
/// `max_depth`.
///
/// A node past the limit aborts its own subtree from `enter`, so it never
/// receives an `exit` and the depth stays balanced.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthGate {
    depth: usize,
    max_depth: Option<usize>,
}

impl DepthGate {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            depth: 0,
            max_depth,
        }
    }

    /// Step into a node, returning the level it sits at.
    pub fn enter(&mut self) -> VisitResult<usize> {
        if self.max_depth.is_some_and(|max| self.depth > max) {
            return Err(Interrupt::AbortSubtree);
        }
        let level = self.depth;
        self.depth += 1;
        Ok(level)
    }

    /// Step out of a node, returning the level it sat at.
    pub fn exit(&mut self) -> usize {
        self.depth = self.depth.saturating_sub(1);
        self.depth
    }
}

/// Non-blank lines of a note, trimmed at the end.
pub fn note_lines(note: &str) -> impl Iterator<Item = &str> {
    note.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
}
