//! Hook interrupts and the traversal failure type

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Boxed error raised from inside a visitor hook.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Why a visitor hook stopped normal traversal.
#[derive(Debug)]
pub enum Interrupt {
    /// Abandon the current node and the rest of its subtree. Siblings and
    /// ancestors carry on.
    AbortSubtree,
    /// Stop the whole traversal with an error.
    Fail(BoxError),
}

impl Interrupt {
    pub fn fail(error: impl Into<BoxError>) -> Self {
        Interrupt::Fail(error.into())
    }
}

impl fmt::Display for Interrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interrupt::AbortSubtree => f.write_str("subtree aborted"),
            Interrupt::Fail(e) => write!(f, "{}", e),
        }
    }
}

impl From<std::io::Error> for Interrupt {
    fn from(e: std::io::Error) -> Self {
        Interrupt::Fail(Box::new(e))
    }
}

/// Result of a visitor hook. `Ok` continues the traversal.
pub type VisitResult<T = ()> = Result<T, Interrupt>;

/// A traversal stopped by a hook error. The hook's error is the `source()`.
#[derive(Debug, Error)]
#[error("traversal failed: {source}")]
pub struct TraversalError {
    #[source]
    source: BoxError,
}

impl TraversalError {
    pub(crate) fn new(source: BoxError) -> Self {
        Self { source }
    }

    /// The error raised by the hook.
    pub fn hook_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.source.as_ref()
    }

    pub fn into_hook_error(self) -> BoxError {
        self.source
    }
}
