//! Init command implementation
//!
//! Converts a standard repository in place into the bare-store layout with
//! one worktree per branch.

use std::path::Path;

use colored::Colorize;
use gwt_core::AutoConfirm;
use gwt_git::SystemGit;

use crate::error::Result;
use crate::interactive::TerminalConfirm;

/// Run the init command
///
/// Rewrites the repository at `path` (or any of its parent directories, if
/// `path` is a subdirectory) into a container holding a `.bare` store and a
/// single worktree named after `branch`. Asks for confirmation first unless
/// `yes` is set, since the repository directory is restructured in place.
pub fn run_init(path: &Path, branch: &str, yes: bool) -> Result<()> {
    let git = SystemGit::new();

    println!(
        "{} Converting repository to the worktree layout (branch {})...",
        "=>".blue().bold(),
        branch.cyan()
    );

    let converted = if yes {
        gwt_core::convert(&git, path, branch, &mut AutoConfirm)?
    } else {
        gwt_core::convert(&git, path, branch, &mut TerminalConfirm)?
    };

    let store = converted.root.join(gwt_core::BARE_DIR);
    println!(
        "{} Converted. Bare store at {}",
        "OK".green().bold(),
        store.display().to_string().yellow()
    );
    println!(
        "   Worktree {} at {}",
        converted.branch.cyan(),
        converted.worktree.display().to_string().yellow()
    );

    Ok(())
}
