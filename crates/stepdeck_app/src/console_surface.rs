// SPDX-License-Identifier: MIT OR Apache-2.0
//! Console render surface: a text readout of the deck state.
//!
//! The sequencing core treats this as its `RenderSurface` collaborator.
//! Output is a pure function of `(step, progress)` plus the display mode,
//! so repeated calls with the same arguments produce the same lines.

use std::io::{self, Write};
use stepdeck_sequencer::{Easing, Progress, RenderError, RenderSurface, Storyboard};

const BAR_WIDTH: usize = 40;

/// Console display mode, toggled with the `f` key.
/// The sequencing core is indifferent to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// One line per tick: reveal bar plus typewriter step title
    #[default]
    Full,
    /// Only settled frames and the landing view
    Quiet,
}

/// Text render surface writing step reveals to a writer
pub struct ConsoleSurface<W: Write> {
    title: String,
    step_names: Vec<String>,
    mode: DisplayMode,
    out: W,
}

impl ConsoleSurface<io::Stdout> {
    /// Console surface for a storyboard, writing to stdout
    pub fn stdout(storyboard: &Storyboard) -> Self {
        Self::new(storyboard, io::stdout())
    }
}

impl<W: Write> ConsoleSurface<W> {
    /// Console surface writing to an arbitrary writer
    pub fn new(storyboard: &Storyboard, out: W) -> Self {
        Self {
            title: storyboard.title.clone(),
            step_names: storyboard.steps().map(|step| step.name.clone()).collect(),
            mode: DisplayMode::default(),
            out,
        }
    }

    /// Flip between full and quiet display
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            DisplayMode::Full => DisplayMode::Quiet,
            DisplayMode::Quiet => DisplayMode::Full,
        };
        tracing::debug!(mode = ?self.mode, "display mode toggled");
    }

    fn bar(progress: Progress) -> String {
        let filled = (Easing::ease_in_out(progress.value()) * BAR_WIDTH as f32).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
    }
}

impl<W: Write> RenderSurface for ConsoleSurface<W> {
    fn render_step(&mut self, step: usize, progress: Progress) -> Result<(), RenderError> {
        let name = self
            .step_names
            .get(step)
            .map_or("(unknown step)", String::as_str);

        if progress.is_settled() {
            writeln!(self.out, "  {} {}", Self::bar(progress), name)?;
        } else if self.mode == DisplayMode::Full {
            let (shown, cursor) = Easing::typewriter(name, progress.value());
            let cursor = if cursor { "_" } else { "" };
            writeln!(self.out, "  {} {shown}{cursor}", Self::bar(progress))?;
        }
        Ok(())
    }

    fn render_landing(&mut self) -> Result<(), RenderError> {
        writeln!(self.out, "=== {} ===", self.title)?;
        writeln!(
            self.out,
            "{} steps. Press ENTER to begin.",
            self.step_names.len()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepdeck_sequencer::StepDescriptor;

    fn board() -> Storyboard {
        Storyboard::new(
            "Demo Deck",
            vec![StepDescriptor::new("Opening", 4)],
        )
        .unwrap()
    }

    fn rendered(surface: ConsoleSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.out).unwrap()
    }

    #[test]
    fn test_landing_shows_title() {
        let board = board();
        let mut surface = ConsoleSurface::new(&board, Vec::new());
        surface.render_landing().unwrap();
        let out = rendered(surface);
        assert!(out.contains("Demo Deck"));
        assert!(out.contains("1 steps"));
    }

    #[test]
    fn test_settled_step_shows_full_bar_and_name() {
        let board = board();
        let mut surface = ConsoleSurface::new(&board, Vec::new());
        surface.render_step(0, Progress::SETTLED).unwrap();
        let out = rendered(surface);
        assert!(out.contains(&"#".repeat(BAR_WIDTH)));
        assert!(out.contains("Opening"));
    }

    #[test]
    fn test_same_arguments_same_output() {
        let board = board();
        let mut first = ConsoleSurface::new(&board, Vec::new());
        let mut second = ConsoleSurface::new(&board, Vec::new());
        first.render_step(0, Progress::SETTLED).unwrap();
        second.render_step(0, Progress::SETTLED).unwrap();
        assert_eq!(rendered(first), rendered(second));
    }

    #[test]
    fn test_quiet_mode_skips_in_flight_frames() {
        let board = board();
        let mut surface = ConsoleSurface::new(&board, Vec::new());
        surface.toggle_mode();
        surface.render_step(0, Progress::ZERO).unwrap();
        assert!(rendered(surface).is_empty());
    }
}
