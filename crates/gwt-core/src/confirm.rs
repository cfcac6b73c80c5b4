//! Confirmation capability for destructive operations.
//!
//! Conversion rewrites a repository in place, so it asks before acting. The
//! asking is injected through [`Confirm`] rather than read from stdin here,
//! which keeps core testable and lets the CLI decide how to prompt.

/// Answers yes/no questions on behalf of the user.
pub trait Confirm {
    /// Returns whether the user approved. Anything that prevents a clear
    /// "yes" (including a failed prompt) should return `false`.
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Approves every prompt. Used for `--yes` and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Declines every prompt.
#[derive(Debug, Default, Clone, Copy)]
pub struct DenyConfirm;

impl Confirm for DenyConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        false
    }
}
