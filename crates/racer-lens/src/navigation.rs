use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Zero-based editor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(
        row: u32,
        column: u32,
    ) -> Self {
        Self {
            row,
            column,
        }
    }

    /// Converts racer's 1-based row into an editor position. The column is
    /// already in the editor's convention.
    pub const fn from_racer(
        row: u32,
        column: u32,
    ) -> Self {
        Self::new(row.saturating_sub(1), column)
    }
}

/// The range of the word a definition was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourceRange {
    pub start: Position,
    pub end: Position,
}

impl SourceRange {
    pub const fn new(
        start: Position,
        end: Position,
    ) -> Self {
        Self {
            start,
            end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub source: PathBuf,
    pub position: Position,
}

impl Location {
    pub fn new(
        source: impl Into<PathBuf>,
        position: Position,
    ) -> Self {
        Self {
            source: source.into(),
            position,
        }
    }
}

/// Opens a file at a position. Implemented by whatever owns the editor.
pub trait Navigate {
    fn navigate(
        &self,
        source: &Path,
        position: Position,
    );
}

impl<F> Navigate for F
where
    F: Fn(&Path, Position),
{
    fn navigate(
        &self,
        source: &Path,
        position: Position,
    ) {
        self(source, position)
    }
}

impl Location {
    pub fn navigate(
        &self,
        navigator: &impl Navigate,
    ) {
        navigator.navigate(&self.source, self.position);
    }
}
