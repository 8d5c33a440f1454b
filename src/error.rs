use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitBarsError>;

/// Fatal conditions. Any of these aborts the run before output is written.
#[derive(Error, Debug)]
pub enum GitBarsError {
    #[error("Could not run git: {0}")]
    GitUnavailable(#[source] io::Error),
    #[error("Not a git repository ({}): {message}", .path.display())]
    NotARepository { path: PathBuf, message: String },
    #[error("Broken HEAD ({}): {message}", .path.display())]
    BrokenHead { path: PathBuf, message: String },
    #[error("git log failed ({status}): {message}")]
    GitLog { status: ExitStatus, message: String },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A single log line that could not be turned into a commit record.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("expected 2 fields, found {found}")]
    FieldCount { found: usize },
    #[error("invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
