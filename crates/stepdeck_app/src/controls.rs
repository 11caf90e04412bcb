// SPDX-License-Identifier: MIT OR Apache-2.0
//! Console input translation.
//!
//! Maps raw console input onto viewer commands. The animating-input-drop
//! policy is not here: the sequencer itself ignores navigation while a
//! run is in flight, so this layer stays a pure key map.

/// A viewer command after key translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Advance to the next step
    Next,
    /// Go back to the previous step
    Previous,
    /// Reset to the landing view
    Reset,
    /// Print the control reminder
    Help,
    /// Toggle the console display mode (sequencing state is unaffected)
    ToggleDetail,
    /// End the session
    Quit,
}

/// One-line control reminder printed at startup and on `h`
pub const HELP: &str =
    "Controls: ENTER = next | b = previous | r = reset | f = display mode | h = help | q = quit";

/// Translate one line of console input into a command.
///
/// A bare ENTER advances, mirroring the spacebar of the windowed tools.
/// Unrecognized input maps to nothing and is ignored by the caller.
pub fn parse(input: &str) -> Option<Command> {
    match input.trim().to_ascii_lowercase().as_str() {
        "" | "n" | "next" => Some(Command::Next),
        "b" | "back" => Some(Command::Previous),
        "r" | "reset" => Some(Command::Reset),
        "h" | "?" | "help" => Some(Command::Help),
        "f" => Some(Command::ToggleDetail),
        "q" | "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}
