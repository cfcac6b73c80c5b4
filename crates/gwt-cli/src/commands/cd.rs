//! Cd command implementation
//!
//! Prints the absolute path of a worktree so a shell wrapper can `cd` into
//! it. A child process cannot change its parent shell's directory, which is
//! why this command only resolves and prints.

use std::path::Path;

use gwt_git::SystemGit;

use crate::error::Result;

/// Run the cd command
///
/// Resolves `branch` to its worktree directory and prints the absolute path
/// as the only stdout output. All decoration would break `cd "$(gwt cd x)"`,
/// so none is emitted.
pub fn run_cd(path: &Path, branch: &str) -> Result<()> {
    let git = SystemGit::new();
    let target = gwt_core::resolve_worktree_path(&git, path, branch)?;

    println!("{}", target.display());
    Ok(())
}
