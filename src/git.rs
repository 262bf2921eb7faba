//! Git operations run through the system `git` binary.
//!
//! Each call blocks until git exits and inherits the terminal so the
//! operator sees git's own output. Callers in the release pipeline wrap the
//! results in [`BestEffort`] so a failed tag push never aborts a release.
use log::*;
use std::{
    fmt::Display,
    path::{Path, PathBuf},
    process::Command,
};

use crate::error::{ReleaseError, Result};

/// Version control operations needed to publish a release.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl {
    /// Stage the given files for the next commit.
    fn stage(&self, paths: &[PathBuf]) -> Result<()>;
    /// Commit staged changes.
    fn commit(&self, message: &str) -> Result<()>;
    /// Create a lightweight tag on HEAD.
    fn create_tag(&self, tag: &str) -> Result<()>;
    /// Push a single tag to `remote`.
    fn push_tag(&self, remote: &str, tag: &str) -> Result<()>;
}

/// Outcome of a step whose failure must not abort the release.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum BestEffort {
    Completed,
    Failed(String),
}

impl BestEffort {
    /// Downgrade a hard result, logging the failure for `step`.
    pub fn from_result(step: &str, result: Result<()>) -> Self {
        match result {
            Ok(()) => BestEffort::Completed,
            Err(err) => {
                warn!("{step} failed: continuing: {err}");
                BestEffort::Failed(err.to_string())
            }
        }
    }

    /// Whether the step succeeded.
    pub fn is_completed(&self) -> bool {
        matches!(self, BestEffort::Completed)
    }
}

impl Display for BestEffort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BestEffort::Completed => f.write_str("completed"),
            BestEffort::Failed(reason) => write!(f, "failed ({reason})"),
        }
    }
}

/// [`VersionControl`] backed by the `git` executable.
pub struct SystemGit {
    work_dir: PathBuf,
}

impl SystemGit {
    /// Run git commands inside `work_dir`.
    pub fn new(work_dir: &Path) -> Self {
        Self {
            work_dir: work_dir.to_path_buf(),
        }
    }

    fn run<I, S>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let mut cmd = Command::new("git");
        cmd.args(args).current_dir(&self.work_dir);

        let command = describe(&cmd);
        debug!("running: {command}");

        let status = cmd.status().map_err(|source| {
            ReleaseError::CommandSpawn {
                command: command.clone(),
                source,
            }
        })?;

        if !status.success() {
            return Err(ReleaseError::CommandFailed { command, status });
        }

        Ok(())
    }
}

impl VersionControl for SystemGit {
    fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        info!("staging {} file(s)", paths.len());
        let mut args = vec![PathBuf::from("add"), PathBuf::from("--")];
        // git runs inside work_dir, so paths under it must be made relative
        args.extend(paths.iter().map(|path| {
            path.strip_prefix(&self.work_dir).unwrap_or(path).to_path_buf()
        }));
        self.run(args)
    }

    fn commit(&self, message: &str) -> Result<()> {
        info!("committing: {message}");
        self.run(["commit", "-m", message])
    }

    fn create_tag(&self, tag: &str) -> Result<()> {
        info!("creating tag: {tag}");
        self.run(["tag", tag])
    }

    fn push_tag(&self, remote: &str, tag: &str) -> Result<()> {
        info!("pushing tag {tag} to {remote}");
        self.run(["push", remote, tag])
    }
}

fn describe(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}
