use crate::error::{GitBarsError, Result};
use crate::model::LogQuery;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Separates the timestamp and author fields of each log line (ASCII unit separator).
pub const FIELD_SEPARATOR: char = '\u{1f}';

// %ai: author date, ISO-like with offset. %ae: author e-mail.
const LOG_FORMAT: &str = "--pretty=format:%ai%x1f%ae";

pub struct GitLog {
    path: PathBuf,
}

impl GitLog {
    /// Read history from the repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };

        if !path.is_dir() {
            return Err(GitBarsError::NotARepository {
                path,
                message: "no such directory".to_string(),
            });
        }

        let log = Self { path };
        let output = log.git(&["rev-parse", "--git-dir"])?;
        if !output.status.success() {
            return Err(GitBarsError::NotARepository {
                path: log.path.clone(),
                message: stderr_message(&output),
            });
        }

        Ok(log)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn args(query: &LogQuery) -> Vec<String> {
        let mut args = vec!["log".to_string(), LOG_FORMAT.to_string()];

        if let Some(after) = &query.range.after {
            args.push(format!("--after={after}"));
        }
        if let Some(before) = &query.range.before {
            args.push(format!("--before={before}"));
        }
        if let Some(author) = query.author_filter() {
            args.push("--fixed-strings".to_string());
            args.push(format!("--author={author}"));
        }

        args
    }

    /// Raw log lines in the order git emits them (newest first).
    pub fn read_lines(&self, query: &LogQuery) -> Result<Vec<String>> {
        if !self.has_commits()? {
            debug!(path = %self.path.display(), "repository has no commits yet");
            return Ok(Vec::new());
        }

        let args = Self::args(query);
        debug!(?args, "running git");
        let output = self.git(args.as_slice())?;
        if !output.status.success() {
            return Err(GitBarsError::GitLog {
                status: output.status,
                message: stderr_message(&output),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().map(str::to_owned).collect())
    }

    /// `false` only for an unborn branch: HEAD names a branch that has no commit yet.
    fn has_commits(&self) -> Result<bool> {
        let head = self.git(&["rev-parse", "--verify", "--quiet", "HEAD^{commit}"])?;
        if head.status.success() {
            return Ok(true);
        }

        let symbolic = self.git(&["symbolic-ref", "--quiet", "HEAD"])?;
        if !symbolic.status.success() {
            return Err(GitBarsError::BrokenHead {
                path: self.path.clone(),
                message: "detached HEAD does not point at a commit".to_string(),
            });
        }

        let branch = String::from_utf8_lossy(&symbolic.stdout).trim().to_string();
        let exists = self.git(&["show-ref", "--verify", "--quiet", branch.as_str()])?;
        if exists.status.success() {
            return Err(GitBarsError::BrokenHead {
                path: self.path.clone(),
                message: format!("{branch} does not point at a commit"),
            });
        }

        Ok(false)
    }

    fn git<S: AsRef<std::ffi::OsStr>>(&self, args: &[S]) -> Result<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                    GitBarsError::GitUnavailable(e)
                }
                _ => GitBarsError::Io(e),
            })
    }
}

fn stderr_message(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}
