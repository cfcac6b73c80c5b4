//! In-memory [`Git`] implementation for operation tests.
//!
//! Holds repository state behind `RefCell` so the trait's `&self` methods
//! can mutate it, and records every call so tests can assert on ordering.
//! `add_worktree` and `clone_bare` also materialise directories on disk,
//! which lets the conversion pipeline run end to end without a git binary.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use gwt_git::{Error as GitError, Git, Result as GitResult, WorktreeEntry};

const FAKE_OID: &str = "0123456789abcdef0123456789abcdef01234567";

#[derive(Default)]
pub(crate) struct FakeGit {
    toplevel: Option<PathBuf>,
    common_dir: Option<PathBuf>,
    head: Option<String>,
    branches: RefCell<BTreeSet<String>>,
    entries: RefCell<Vec<WorktreeEntry>>,
    refuse_branch_delete: Option<String>,
    fail_worktree_add: Option<String>,
    fail_clone: Option<String>,
    pub(crate) calls: RefCell<Vec<String>>,
}

impl FakeGit {
    pub(crate) fn with_toplevel(mut self, path: impl Into<PathBuf>) -> Self {
        self.toplevel = Some(path.into());
        self
    }

    pub(crate) fn with_common_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.common_dir = Some(path.into());
        self
    }

    pub(crate) fn with_head(mut self, branch: &str) -> Self {
        self.head = Some(branch.to_string());
        self
    }

    pub(crate) fn with_branch(self, branch: &str) -> Self {
        self.branches.borrow_mut().insert(branch.to_string());
        self
    }

    pub(crate) fn with_worktree(self, path: impl Into<PathBuf>, branch: Option<&str>) -> Self {
        self.entries.borrow_mut().push(WorktreeEntry {
            path: path.into(),
            head: Some(FAKE_OID.to_string()),
            branch: branch.map(str::to_string),
            bare: false,
            detached: branch.is_none(),
        });
        self
    }

    pub(crate) fn with_bare_entry(self, path: impl Into<PathBuf>) -> Self {
        self.entries.borrow_mut().push(WorktreeEntry {
            path: path.into(),
            head: None,
            branch: None,
            bare: true,
            detached: false,
        });
        self
    }

    pub(crate) fn refusing_branch_delete(mut self, stderr: &str) -> Self {
        self.refuse_branch_delete = Some(stderr.to_string());
        self
    }

    pub(crate) fn failing_worktree_add(mut self, stderr: &str) -> Self {
        self.fail_worktree_add = Some(stderr.to_string());
        self
    }

    pub(crate) fn failing_clone(mut self, stderr: &str) -> Self {
        self.fail_clone = Some(stderr.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn has_branch(&self, branch: &str) -> bool {
        self.branches.borrow().contains(branch)
    }

    fn note(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

fn failed(command: &str, stderr: &str) -> GitError {
    GitError::CommandFailed {
        command: command.to_string(),
        stderr: stderr.to_string(),
    }
}

impl Git for FakeGit {
    fn toplevel(&self, dir: &Path) -> GitResult<PathBuf> {
        self.note(format!("toplevel {}", dir.display()));
        self.toplevel
            .clone()
            .ok_or_else(|| failed("git rev-parse --show-toplevel", "fatal: not a git repository"))
    }

    fn common_dir(&self, dir: &Path) -> GitResult<PathBuf> {
        self.note(format!("common-dir {}", dir.display()));
        self.common_dir
            .clone()
            .ok_or_else(|| failed("git rev-parse --git-common-dir", "fatal: not a git repository"))
    }

    fn head_branch(&self, dir: &Path) -> GitResult<String> {
        self.note(format!("head-branch {}", dir.display()));
        self.head
            .clone()
            .ok_or_else(|| failed("git symbolic-ref --short HEAD", "fatal: ref HEAD is not a symbolic ref"))
    }

    fn branch_exists(&self, _dir: &Path, branch: &str) -> GitResult<bool> {
        self.note(format!("branch-exists {branch}"));
        Ok(self.branches.borrow().contains(branch))
    }

    fn local_branches(&self, _dir: &Path) -> GitResult<Vec<String>> {
        self.note("local-branches".to_string());
        Ok(self.branches.borrow().iter().cloned().collect())
    }

    fn delete_branch(&self, _dir: &Path, branch: &str) -> GitResult<()> {
        self.note(format!("branch -d {branch}"));
        if let Some(stderr) = &self.refuse_branch_delete {
            return Err(failed("git branch -d", stderr));
        }
        if !self.branches.borrow_mut().remove(branch) {
            return Err(failed(
                "git branch -d",
                &format!("error: branch '{branch}' not found"),
            ));
        }
        Ok(())
    }

    fn add_worktree(&self, dir: &Path, path: &Path, branch: &str) -> GitResult<()> {
        self.note(format!("worktree add {} {branch}", path.display()));
        if let Some(stderr) = &self.fail_worktree_add {
            return Err(failed("git worktree add", stderr));
        }
        if !self.branches.borrow().contains(branch) {
            return Err(failed(
                "git worktree add",
                &format!("fatal: invalid reference: {branch}"),
            ));
        }
        materialise_worktree(dir, path, branch);
        self.entries.borrow_mut().push(WorktreeEntry {
            path: path.to_path_buf(),
            head: Some(FAKE_OID.to_string()),
            branch: Some(branch.to_string()),
            bare: false,
            detached: false,
        });
        Ok(())
    }

    fn add_worktree_with_branch(
        &self,
        dir: &Path,
        path: &Path,
        branch: &str,
        base: Option<&str>,
    ) -> GitResult<()> {
        self.note(format!(
            "worktree add -b {branch} {} {}",
            path.display(),
            base.unwrap_or("HEAD")
        ));
        if let Some(stderr) = &self.fail_worktree_add {
            return Err(failed("git worktree add -b", stderr));
        }
        if let Some(base) = base
            && !self.branches.borrow().contains(base)
        {
            return Err(failed(
                "git worktree add -b",
                &format!("fatal: invalid reference: {base}"),
            ));
        }
        self.branches.borrow_mut().insert(branch.to_string());
        materialise_worktree(dir, path, branch);
        self.entries.borrow_mut().push(WorktreeEntry {
            path: path.to_path_buf(),
            head: Some(FAKE_OID.to_string()),
            branch: Some(branch.to_string()),
            bare: false,
            detached: false,
        });
        Ok(())
    }

    fn remove_worktree(&self, _dir: &Path, path: &Path) -> GitResult<()> {
        self.note(format!("worktree remove {}", path.display()));
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|e| e.path != path);
        if entries.len() == before {
            return Err(failed(
                "git worktree remove",
                &format!("fatal: '{}' is not a working tree", path.display()),
            ));
        }
        if path.exists() {
            fs::remove_dir_all(path).expect("fake: failed to remove worktree dir");
        }
        Ok(())
    }

    fn list_worktrees(&self, _dir: &Path) -> GitResult<Vec<WorktreeEntry>> {
        self.note("worktree list".to_string());
        Ok(self.entries.borrow().clone())
    }

    fn clone_bare(&self, url: &str, dest: &Path) -> GitResult<()> {
        self.note(format!("clone --bare {url} {}", dest.display()));
        if let Some(stderr) = &self.fail_clone {
            return Err(failed("git clone --bare", stderr));
        }
        fs::create_dir_all(dest).expect("fake: failed to create bare store");
        fs::write(dest.join("HEAD"), "ref: refs/heads/main\n")
            .expect("fake: failed to write HEAD");
        Ok(())
    }

    fn set_config(&self, dir: &Path, key: &str, value: &str) -> GitResult<()> {
        self.note(format!("config {key} {value} in {}", dir.display()));
        Ok(())
    }
}

/// Creates the directory structure a real `git worktree add` would: the
/// worktree directory with a `.git` link file, and the admin record under
/// `<store>/worktrees/<name>` with its `gitdir` back-pointer.
fn materialise_worktree(store: &Path, path: &Path, branch: &str) {
    fs::create_dir_all(path).expect("fake: failed to create worktree dir");
    let name = path
        .file_name()
        .expect("fake: worktree path has no name")
        .to_os_string();
    let admin = store.join("worktrees").join(&name);
    fs::create_dir_all(&admin).expect("fake: failed to create admin dir");
    fs::write(path.join(".git"), format!("gitdir: {}\n", admin.display()))
        .expect("fake: failed to write .git link");
    fs::write(admin.join("gitdir"), format!("{}\n", path.join(".git").display()))
        .expect("fake: failed to write gitdir back-pointer");
    fs::write(admin.join("HEAD"), format!("ref: refs/heads/{branch}\n"))
        .expect("fake: failed to write admin HEAD");
}
