//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use gwt_core::DEFAULT_BRANCH;

/// gwt - Manage git repositories in the hidden-bare worktree layout
#[derive(Parser, Debug)]
#[command(name = "gwt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Convert the current repository to the worktree layout
    ///
    /// Moves the git metadata into a hidden .bare/ store and the working
    /// files into a worktree directory named after BRANCH, inside the same
    /// root. The repository is rewritten in place after a confirmation.
    ///
    /// Examples:
    ///   gwt init               # worktree for the default branch
    ///   gwt init develop       # worktree for 'develop'
    ///   gwt init -y            # no confirmation prompt
    Init {
        /// Branch the initial worktree is created for
        #[arg(default_value = DEFAULT_BRANCH, env = "GWT_DEFAULT_BRANCH")]
        branch: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Add a worktree for BRANCH next to the current one
    ///
    /// An existing branch is checked out as-is. A missing branch is created
    /// from BASE (or from the current HEAD when BASE is omitted).
    ///
    /// Examples:
    ///   gwt add feature-x          # attach or create 'feature-x'
    ///   gwt add feature-x develop  # create 'feature-x' from 'develop'
    Add {
        /// Branch to attach or create
        branch: String,

        /// Base branch for a newly created BRANCH
        base: Option<String>,
    },

    /// Remove the worktree for BRANCH
    ///
    /// The branch itself is kept unless -d is given. Branch deletion is the
    /// safe kind: git refuses to delete unmerged work, and that refusal is
    /// reported without undoing the removal.
    Rm {
        /// Branch whose worktree to remove
        branch: String,

        /// Also delete the branch (safe deletion)
        #[arg(short = 'd', long = "delete-branch")]
        delete_branch: bool,
    },

    /// List worktrees of the current repository
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the absolute path of the worktree for BRANCH
    ///
    /// Prints only the path, so a shell wrapper can `cd "$(gwt cd BRANCH)"`.
    /// See `gwt shell-init` for a ready-made wrapper.
    Cd {
        /// Branch whose worktree path to print
        branch: String,
    },

    /// Clone a repository directly into the worktree layout
    ///
    /// Creates DIRECTORY containing a .bare/ store and one worktree for the
    /// remote's default branch (or BRANCH when given).
    ///
    /// Examples:
    ///   gwt clone https://example.com/owner/project.git
    ///   gwt clone git@example.com:owner/project.git workdir
    ///   gwt clone https://example.com/owner/project.git workdir develop
    Clone {
        /// Repository URL to clone
        url: String,

        /// Directory to clone into (derived from URL when omitted)
        directory: Option<String>,

        /// Branch for the initial worktree (remote default when omitted)
        branch: Option<String>,
    },

    /// Print a shell function that makes `gwt cd` change directory
    ///
    /// A child process cannot change its parent shell's directory, so `gwt
    /// cd` only prints the path. Eval this snippet in your shell profile:
    ///
    ///   eval "$(gwt shell-init)"           # bash / zsh
    ///   gwt shell-init --shell fish | source   # fish
    ShellInit {
        /// Shell dialect to emit
        #[arg(long, value_enum, default_value_t = ShellFlavor::Bash)]
        shell: ShellFlavor,
    },

    /// Generate shell completions
    ///
    /// Outputs completion script for your shell.
    ///
    /// Examples:
    ///   gwt completions bash > ~/.local/share/bash-completion/completions/gwt
    ///   gwt completions zsh > ~/.zfunc/_gwt
    ///   gwt completions fish > ~/.config/fish/completions/gwt.fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Shells the `gwt` wrapper function can be emitted for
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlavor {
    Bash,
    Zsh,
    Fish,
}
