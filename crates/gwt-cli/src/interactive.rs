//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based confirmation.

use gwt_core::Confirm as ConfirmCapability;

/// Terminal-backed confirmation, defaulting to "no".
///
/// A prompt that cannot be shown (no tty, closed stdin) counts as a
/// decline: a rewrite-in-place should never proceed on a guess.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirm;

impl ConfirmCapability for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        match dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "confirmation prompt failed; treating as decline");
                false
            }
        }
    }
}
