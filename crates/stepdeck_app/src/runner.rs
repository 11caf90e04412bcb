// SPDX-License-Identifier: MIT OR Apache-2.0
//! Interactive console session: reads commands and drives the sequencer.
//!
//! The runner owns the timer: after an accepted advance it plays the
//! step's animation out at a fixed tick interval, then returns to the
//! prompt. Input is line-buffered, so commands are only read between
//! runs; the sequencer's own animating gate covers any host that
//! delivers input mid-run.

use crate::console_surface::ConsoleSurface;
use crate::controls::{self, Command};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use stepdeck_sequencer::{NavOutcome, RenderError, StepSequencer, Storyboard};
use thiserror::Error;

/// Fixed animation tick interval
pub const TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Session-fatal runner errors
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The render surface failed; visual state is undefined
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Console input could not be read
    #[error("failed to read console input: {0}")]
    Input(#[from] io::Error),
}

/// Whether the session continues after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading commands
    Continue,
    /// End the session
    Quit,
}

/// Drives one deck through an interactive console session
pub struct Runner<W: Write> {
    sequencer: StepSequencer,
    surface: ConsoleSurface<W>,
    tick_interval: Duration,
}

impl Runner<io::Stdout> {
    /// Runner for a storyboard on stdout at the standard tick interval
    pub fn new(storyboard: Storyboard) -> Self {
        let surface = ConsoleSurface::stdout(&storyboard);
        Self {
            sequencer: StepSequencer::new(storyboard),
            surface,
            tick_interval: TICK_INTERVAL,
        }
    }
}

impl<W: Write> Runner<W> {
    /// Runner with a custom writer and tick interval
    pub fn with_writer(storyboard: Storyboard, out: W, tick_interval: Duration) -> Self {
        let surface = ConsoleSurface::new(&storyboard, out);
        Self {
            sequencer: StepSequencer::new(storyboard),
            surface,
            tick_interval,
        }
    }

    /// Run the session until quit or end of input
    pub fn run(&mut self) -> Result<(), RunnerError> {
        self.sequencer.render_current(&mut self.surface)?;
        println!("{}", controls::HELP);

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let Some(command) = controls::parse(&line) else {
                continue;
            };
            if self.handle(command)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Apply one command
    pub fn handle(&mut self, command: Command) -> Result<Flow, RunnerError> {
        match command {
            Command::Next => match self.sequencer.advance(&mut self.surface)? {
                NavOutcome::Moved(_) => {
                    self.play_out()?;
                    self.print_status();
                }
                NavOutcome::AtLastStep => println!("Already at the last step."),
                NavOutcome::Busy | NavOutcome::AtFirstStep => {}
            },
            Command::Previous => match self.sequencer.retreat(&mut self.surface)? {
                NavOutcome::Moved(_) => self.print_status(),
                NavOutcome::AtFirstStep => println!("Already at the first step."),
                NavOutcome::Busy | NavOutcome::AtLastStep => {}
            },
            Command::Reset => self.sequencer.reset(&mut self.surface)?,
            Command::Help => println!("{}", controls::HELP),
            Command::ToggleDetail => {
                self.surface.toggle_mode();
                self.sequencer.render_current(&mut self.surface)?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn play_out(&mut self) -> Result<(), RenderError> {
        while self.sequencer.is_animating() {
            thread::sleep(self.tick_interval);
            self.sequencer.tick(&mut self.surface)?;
        }
        Ok(())
    }

    fn print_status(&self) {
        let (current, total) = self.sequencer.step_counter();
        if self.sequencer.is_complete() {
            println!("Step {current}/{total} - end of deck. b = back, r = restart.");
        } else {
            println!("Step {current}/{total}. ENTER = next step.");
        }
    }

    /// The sequencer being driven
    pub fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }
}
