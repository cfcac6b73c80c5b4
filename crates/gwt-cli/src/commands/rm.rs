//! Rm command implementation
//!
//! Removes a worktree and, on request, the branch that backed it.

use std::path::Path;

use colored::Colorize;
use gwt_core::BranchDeletion;
use gwt_git::SystemGit;

use crate::error::Result;

/// Run the rm command
///
/// Removes the worktree for `branch`. With `delete_branch` set, also runs a
/// safe branch deletion afterwards; if git refuses because the branch holds
/// unmerged work, the worktree removal still counts as a success and the
/// refusal is reported as a warning.
pub fn run_rm(path: &Path, branch: &str, delete_branch: bool) -> Result<()> {
    let git = SystemGit::new();

    println!(
        "{} Removing worktree {}...",
        "=>".blue().bold(),
        branch.cyan()
    );

    let removed = gwt_core::remove_worktree(&git, path, branch, delete_branch)?;

    match removed.branch_deletion {
        Some(BranchDeletion::Deleted) => {
            println!(
                "{} Worktree and branch {} removed.",
                "OK".green().bold(),
                removed.branch.cyan()
            );
        }
        Some(BranchDeletion::Refused { message }) => {
            println!(
                "{} Worktree {} removed.",
                "OK".green().bold(),
                removed.branch.cyan()
            );
            eprintln!(
                "{}: branch {} was kept: {}",
                "warning".yellow().bold(),
                removed.branch.cyan(),
                message.trim()
            );
            eprintln!(
                "   Force-delete it with {} once you are sure.",
                format!("git branch -D {}", removed.branch).cyan()
            );
        }
        None => {
            println!(
                "{} Worktree {} removed (branch kept).",
                "OK".green().bold(),
                removed.branch.cyan()
            );
        }
    }

    Ok(())
}
