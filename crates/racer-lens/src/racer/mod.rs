//! Running racer itself.
//!
//! The parsers only need racer's captured stdout. [`RacerBackend`] is the seam
//! between them and whatever produces that text; [`RacerProcess`] spawns the
//! real executable.

mod process;

use std::future::Future;
use std::path::PathBuf;

use thiserror::Error;

use crate::navigation::Position;

pub use process::RacerProcess;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    CompleteWithSnippet,
    FindDefinition,
}

impl QueryKind {
    pub fn subcommand(self) -> &'static str {
        match self {
            Self::CompleteWithSnippet => "complete-with-snippet",
            Self::FindDefinition => "find-definition",
        }
    }
}

/// One racer invocation. `buffer` is the current editor text, which racer
/// reads from stdin in place of the file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RacerQuery {
    pub kind: QueryKind,
    pub path: PathBuf,
    pub position: Position,
    pub buffer: String,
}

impl RacerQuery {
    pub fn new(
        kind: QueryKind,
        path: impl Into<PathBuf>,
        position: Position,
        buffer: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            position,
            buffer: buffer.into(),
        }
    }

    /// Racer's positional arguments. Racer counts rows from 1 and columns
    /// from 0; the trailing `-` makes it read the buffer from stdin.
    pub fn arguments(&self) -> Vec<String> {
        vec![
            self.kind.subcommand().to_string(),
            (self.position.row + 1).to_string(),
            self.position.column.to_string(),
            self.path.display().to_string(),
            "-".to_string(),
        ]
    }
}

#[derive(Debug, Error)]
pub enum RacerError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("racer i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("racer exited with {}: {stderr}", describe_exit(.code))]
    Failed { code: Option<i32>, stderr: String },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "a signal".to_string(),
    }
}

/// Produces racer's stdout for a query.
pub trait RacerBackend {
    fn run(
        &self,
        query: &RacerQuery,
    ) -> impl Future<Output = Result<String, RacerError>> + Send;
}

#[cfg(test)]
#[path = "../../tests/src/racer/racer_tests.rs"]
mod tests;
