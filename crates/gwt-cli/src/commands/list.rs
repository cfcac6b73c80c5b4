//! List command implementation
//!
//! Shows the worktrees in the current container, either human-readable or
//! as JSON for scripting.

use std::path::Path;

use colored::Colorize;
use gwt_git::SystemGit;

use crate::error::Result;

/// Run the list command
///
/// Lists all worktrees in the container. The bare store itself is never
/// shown. With `json` set, prints a machine-readable array instead of the
/// human-readable table.
pub fn run_list(path: &Path, json: bool) -> Result<()> {
    let git = SystemGit::new();
    let worktrees = gwt_core::list_worktrees(&git, path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&worktrees)?);
        return Ok(());
    }

    if worktrees.is_empty() {
        println!("{} No worktrees found.", "=>".blue().bold());
        return Ok(());
    }

    println!("{} Worktrees:", "=>".blue().bold());

    for worktree in &worktrees {
        let mut line = String::new();

        // Current worktree marker
        if worktree.is_current {
            line.push_str(&format!("  {} ", "*".green()));
        } else {
            line.push_str("    ");
        }

        let name_display = if worktree.is_current {
            worktree.name.green().bold().to_string()
        } else {
            worktree.name.clone()
        };
        line.push_str(&name_display);

        if worktree.branch.is_none() {
            line.push_str(&format!(" {}", "(detached)".dimmed()));
        }

        line.push_str(&format!(
            " -> {}",
            worktree.path.display().to_string().dimmed()
        ));

        println!("{}", line);
    }

    Ok(())
}
