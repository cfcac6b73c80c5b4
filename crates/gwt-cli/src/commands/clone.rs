//! Clone command implementation
//!
//! Clones a remote repository straight into the worktree layout.

use std::path::Path;

use colored::Colorize;
use gwt_git::SystemGit;

use crate::error::Result;

/// Run the clone command
///
/// Clones `url` as a bare store inside a fresh container directory and
/// checks out one worktree for the default branch (or `branch`, if given).
pub fn run_clone(
    path: &Path,
    url: &str,
    directory: Option<&str>,
    branch: Option<&str>,
) -> Result<()> {
    let git = SystemGit::new();

    println!("{} Cloning {}...", "=>".blue().bold(), url.cyan());

    let cloned = gwt_core::clone_with_layout(&git, path, url, directory, branch)?;

    println!(
        "{} Cloned into {}",
        "OK".green().bold(),
        cloned.directory.display().to_string().yellow()
    );
    println!(
        "   Worktree {} at {}",
        cloned.branch.cyan(),
        cloned.worktree.display().to_string().yellow()
    );

    Ok(())
}
