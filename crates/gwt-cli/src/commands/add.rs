//! Add command implementation
//!
//! Creates a new worktree next to the existing ones, reusing the branch if
//! it already exists.

use std::path::Path;

use colored::Colorize;
use gwt_git::SystemGit;

use crate::error::Result;

/// Run the add command
///
/// Creates a worktree for `branch` under the container root. If the branch
/// does not exist yet it is created from `base` (or from the current HEAD
/// when no base is given).
pub fn run_add(path: &Path, branch: &str, base: Option<&str>) -> Result<()> {
    let git = SystemGit::new();

    println!(
        "{} Creating worktree {}...",
        "=>".blue().bold(),
        branch.cyan()
    );

    let added = gwt_core::add_worktree(&git, path, branch, base)?;

    if added.created_branch {
        println!(
            "{} Worktree {} ready at {} (new branch)",
            "OK".green().bold(),
            added.branch.cyan(),
            added.path.display().to_string().yellow()
        );
    } else {
        println!(
            "{} Worktree {} ready at {} (existing branch)",
            "OK".green().bold(),
            added.branch.cyan(),
            added.path.display().to_string().yellow()
        );
    }

    Ok(())
}
