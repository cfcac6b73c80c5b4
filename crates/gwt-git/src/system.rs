//! [`SystemGit`]: the production [`Git`] implementation that shells out to
//! the git binary.
//!
//! Every failure keeps git's own stderr intact. Callers surface those
//! messages verbatim instead of rephrasing them, so whatever git says about
//! an invalid base branch or a dirty worktree reaches the user unchanged.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::error::{Error, Result};
use crate::provider::Git;
use crate::worktrees::{parse_worktree_list, WorktreeEntry};

/// Runs git as a subprocess.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: OsString,
}

impl SystemGit {
    /// Uses the `git` found on `PATH`.
    pub fn new() -> Self {
        Self {
            program: OsString::from("git"),
        }
    }

    /// Uses an explicit executable instead of `git`. Mainly useful for
    /// exercising spawn failures in tests.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn invoke(&self, dir: Option<&Path>, args: &[OsString]) -> Result<(String, Output)> {
        let mut command = Command::new(&self.program);
        if let Some(dir) = dir {
            command.arg("-C").arg(dir);
        }
        command.args(args);

        let rendered = self.render(dir, args);
        tracing::debug!(command = %rendered, "running git");

        let output = command.output().map_err(|source| Error::Spawn {
            command: rendered.clone(),
            source,
        })?;
        Ok((rendered, output))
    }

    fn run(&self, dir: Option<&Path>, args: &[OsString]) -> Result<String> {
        let (rendered, output) = self.invoke(dir, args)?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            Err(command_failed(rendered, &output))
        }
    }

    fn render(&self, dir: Option<&Path>, args: &[OsString]) -> String {
        let mut parts = vec![self.program.to_string_lossy().into_owned()];
        if let Some(dir) = dir {
            parts.push("-C".to_string());
            parts.push(dir.display().to_string());
        }
        parts.extend(args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

fn command_failed(command: String, output: &Output) -> Error {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let stderr = if stderr.is_empty() {
        format!("exited with {}", output.status)
    } else {
        stderr
    };
    Error::CommandFailed { command, stderr }
}

fn os(part: &str) -> OsString {
    OsString::from(part)
}

fn os_path(path: &Path) -> OsString {
    path.as_os_str().to_os_string()
}

impl Git for SystemGit {
    fn toplevel(&self, dir: &Path) -> Result<PathBuf> {
        let out = self.run(Some(dir), &[os("rev-parse"), os("--show-toplevel")])?;
        Ok(PathBuf::from(out))
    }

    fn common_dir(&self, dir: &Path) -> Result<PathBuf> {
        let out = self.run(Some(dir), &[os("rev-parse"), os("--git-common-dir")])?;
        Ok(PathBuf::from(out))
    }

    fn head_branch(&self, dir: &Path) -> Result<String> {
        self.run(Some(dir), &[os("symbolic-ref"), os("--short"), os("HEAD")])
    }

    fn branch_exists(&self, dir: &Path, branch: &str) -> Result<bool> {
        // show-ref exits 1 for a missing ref, which is an answer here, not
        // a failure.
        let args = [
            os("show-ref"),
            os("--verify"),
            os("--quiet"),
            os(&format!("refs/heads/{branch}")),
        ];
        let (rendered, output) = self.invoke(Some(dir), &args)?;
        match output.status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => Err(command_failed(rendered, &output)),
        }
    }

    fn local_branches(&self, dir: &Path) -> Result<Vec<String>> {
        let out = self.run(
            Some(dir),
            &[os("branch"), os("--format=%(refname:short)")],
        )?;
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn delete_branch(&self, dir: &Path, branch: &str) -> Result<()> {
        self.run(Some(dir), &[os("branch"), os("-d"), os(branch)])?;
        Ok(())
    }

    fn add_worktree(&self, dir: &Path, path: &Path, branch: &str) -> Result<()> {
        self.run(
            Some(dir),
            &[os("worktree"), os("add"), os_path(path), os(branch)],
        )?;
        Ok(())
    }

    fn add_worktree_with_branch(
        &self,
        dir: &Path,
        path: &Path,
        branch: &str,
        base: Option<&str>,
    ) -> Result<()> {
        let mut args = vec![
            os("worktree"),
            os("add"),
            os("-b"),
            os(branch),
            os_path(path),
        ];
        if let Some(base) = base {
            args.push(os(base));
        }
        self.run(Some(dir), &args)?;
        Ok(())
    }

    fn remove_worktree(&self, dir: &Path, path: &Path) -> Result<()> {
        self.run(Some(dir), &[os("worktree"), os("remove"), os_path(path)])?;
        Ok(())
    }

    fn list_worktrees(&self, dir: &Path) -> Result<Vec<WorktreeEntry>> {
        let out = self.run(
            Some(dir),
            &[os("worktree"), os("list"), os("--porcelain")],
        )?;
        Ok(parse_worktree_list(&out))
    }

    fn clone_bare(&self, url: &str, dest: &Path) -> Result<()> {
        self.run(None, &[os("clone"), os("--bare"), os(url), os_path(dest)])?;
        Ok(())
    }

    fn set_config(&self, dir: &Path, key: &str, value: &str) -> Result<()> {
        self.run(Some(dir), &[os("config"), os(key), os(value)])?;
        Ok(())
    }
}
