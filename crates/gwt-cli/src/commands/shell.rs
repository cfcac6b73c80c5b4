//! Shell-init command implementation
//!
//! Emits a shell function that shadows the `gwt` binary so that `gwt cd`
//! can change the caller's directory. Everything except `cd` is passed
//! through to the real binary untouched.

use crate::cli::ShellFlavor;
use crate::error::Result;

/// Wrapper for bash and zsh. Both accept the same POSIX-style function.
const POSIX_WRAPPER: &str = r#"# gwt shell integration. Add to your shell rc:
#   eval "$(gwt shell-init --shell bash)"
gwt() {
    if [ "$1" = "cd" ]; then
        shift
        local target
        target="$(command gwt cd "$@")" || return $?
        cd "$target"
    else
        command gwt "$@"
    fi
}
"#;

/// Wrapper for fish, which has its own function syntax.
const FISH_WRAPPER: &str = r#"# gwt shell integration. Add to your shell config:
#   gwt shell-init --shell fish | source
function gwt
    if test (count $argv) -ge 1; and test "$argv[1]" = cd
        set -e argv[1]
        set -l target (command gwt cd $argv); or return $status
        cd $target
    else
        command gwt $argv
    end
end
"#;

/// Run the shell-init command
///
/// Prints the wrapper function for the requested shell. The caller is
/// expected to `eval` (or `source`) the output from their shell rc file.
pub fn run_shell_init(shell: ShellFlavor) -> Result<()> {
    print!("{}", wrapper_for(shell));
    Ok(())
}

fn wrapper_for(shell: ShellFlavor) -> &'static str {
    match shell {
        ShellFlavor::Bash | ShellFlavor::Zsh => POSIX_WRAPPER,
        ShellFlavor::Fish => FISH_WRAPPER,
    }
}
