//! Parsing of `git worktree list --porcelain` output.
//!
//! The porcelain format is a sequence of stanzas separated by blank lines.
//! Each stanza opens with a `worktree <path>` line followed by attribute
//! lines (`HEAD <oid>`, `branch <ref>`, `bare`, `detached`, ...). Attribute
//! lines this crate does not care about are ignored rather than rejected so
//! newer git versions keep working.

use std::path::PathBuf;

/// One worktree as reported by `git worktree list --porcelain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorktreeEntry {
    /// Absolute path of the worktree (or of the bare store for `bare`).
    pub path: PathBuf,
    /// Commit id at HEAD, absent for a bare entry.
    pub head: Option<String>,
    /// Short branch name, absent when detached or bare.
    pub branch: Option<String>,
    /// Whether this entry is the bare metadata store itself.
    pub bare: bool,
    /// Whether HEAD is detached.
    pub detached: bool,
}

impl WorktreeEntry {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            head: None,
            branch: None,
            bare: false,
            detached: false,
        }
    }

    /// Directory name of the worktree.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Parses the output of `git worktree list --porcelain`.
///
/// Unknown attribute lines are skipped; a malformed stream degrades to
/// fewer entries rather than a panic.
pub fn parse_worktree_list(output: &str) -> Vec<WorktreeEntry> {
    let mut entries = Vec::new();
    let mut current: Option<WorktreeEntry> = None;

    for line in output.lines() {
        if let Some(path) = line.strip_prefix("worktree ") {
            if let Some(entry) = current.take() {
                entries.push(entry);
            }
            current = Some(WorktreeEntry::new(PathBuf::from(path)));
        } else if let Some(entry) = current.as_mut() {
            if let Some(oid) = line.strip_prefix("HEAD ") {
                entry.head = Some(oid.to_string());
            } else if let Some(refname) = line.strip_prefix("branch ") {
                entry.branch = Some(short_branch(refname).to_string());
            } else if line == "bare" {
                entry.bare = true;
            } else if line == "detached" {
                entry.detached = true;
            }
        }
    }

    if let Some(entry) = current {
        entries.push(entry);
    }
    entries
}

/// Reduces `refs/heads/main` to `main`; other refs pass through unchanged.
fn short_branch(refname: &str) -> &str {
    refname.strip_prefix("refs/heads/").unwrap_or(refname)
}
