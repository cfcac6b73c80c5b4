//! gwt command-line interface
//!
//! Manages git repositories in the hidden-bare worktree layout: a `.bare`
//! store plus one directory per checked-out branch, side by side.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} Git worktree layout manager", "gwt".green().bold());
            println!();
            println!("Run {} for available commands.", "gwt --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init { branch, yes } => {
            let cwd = std::env::current_dir()?;
            commands::run_init(&cwd, &branch, yes)
        }
        Commands::Add { branch, base } => {
            let cwd = std::env::current_dir()?;
            commands::run_add(&cwd, &branch, base.as_deref())
        }
        Commands::Rm {
            branch,
            delete_branch,
        } => {
            let cwd = std::env::current_dir()?;
            commands::run_rm(&cwd, &branch, delete_branch)
        }
        Commands::List { json } => {
            let cwd = std::env::current_dir()?;
            commands::run_list(&cwd, json)
        }
        Commands::Cd { branch } => {
            let cwd = std::env::current_dir()?;
            commands::run_cd(&cwd, &branch)
        }
        Commands::Clone {
            url,
            directory,
            branch,
        } => {
            let cwd = std::env::current_dir()?;
            commands::run_clone(&cwd, &url, directory.as_deref(), branch.as_deref())
        }
        Commands::ShellInit { shell } => commands::run_shell_init(shell),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "gwt", &mut std::io::stdout());
            Ok(())
        }
    }
}
