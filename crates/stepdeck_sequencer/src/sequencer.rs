// SPDX-License-Identifier: MIT OR Apache-2.0
//! Step navigation: the authoritative owner of "where are we in the deck".
//!
//! The sequencer holds the storyboard and the current position, gatekeeps
//! navigation while an animation is in flight, and drives the frame
//! scheduler. Rendering is delegated entirely to the host's
//! [`RenderSurface`]; the sequencer only decides *what* to show.

use crate::scheduler::{FrameScheduler, TickOutcome};
use crate::storyboard::Storyboard;
use crate::surface::{Progress, RenderError, RenderSurface};

/// Where the viewer currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The pre-storyboard landing view, rendered once, statically
    Landing,
    /// Storyboard step at this index
    Step(usize),
}

impl Position {
    /// Step index, if positioned on a storyboard step
    pub fn step_index(self) -> Option<usize> {
        match self {
            Position::Landing => None,
            Position::Step(index) => Some(index),
        }
    }

    /// Whether this is the landing view
    pub fn is_landing(self) -> bool {
        matches!(self, Position::Landing)
    }
}

/// Informational outcome of a navigation request.
///
/// Rejections are policy, not faults: input is ignored while an animation
/// runs, and walking off either end of the deck simply reports where the
/// viewer already is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Navigation accepted; now at this position
    Moved(Position),
    /// Rejected: an animation run is in flight
    Busy,
    /// Rejected: already at the landing view
    AtFirstStep,
    /// Rejected: already at the last step
    AtLastStep,
}

/// Owns navigation state and drives playback of the current step.
pub struct StepSequencer {
    storyboard: Storyboard,
    position: Position,
    scheduler: FrameScheduler,
    animating: bool,
}

impl StepSequencer {
    /// Create a sequencer at the landing view of a validated storyboard
    pub fn new(storyboard: Storyboard) -> Self {
        Self {
            storyboard,
            position: Position::Landing,
            scheduler: FrameScheduler::new(),
            animating: false,
        }
    }

    /// The storyboard being played
    pub fn storyboard(&self) -> &Storyboard {
        &self.storyboard
    }

    /// Current position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether a step animation is in flight
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Whether the deck has reached its designated complete condition:
    /// last step, fully settled. Not terminal; retreat remains possible.
    pub fn is_complete(&self) -> bool {
        !self.animating && self.position == Position::Step(self.storyboard.last_step())
    }

    /// Move to the next step and start its reveal animation.
    ///
    /// Delivers the new step's first frame synchronously; the host timer
    /// delivers the rest via [`tick`](Self::tick). Ignored while an
    /// animation runs, and past the last step.
    pub fn advance(&mut self, surface: &mut dyn RenderSurface) -> Result<NavOutcome, RenderError> {
        if self.animating {
            tracing::debug!("advance ignored: animation in flight");
            return Ok(NavOutcome::Busy);
        }

        let next = match self.position {
            Position::Landing => 0,
            Position::Step(index) => index + 1,
        };
        let Some(step) = self.storyboard.step(next) else {
            tracing::debug!("advance ignored: already at last step");
            return Ok(NavOutcome::AtLastStep);
        };

        let total_frames = step.total_frames;
        tracing::info!(
            step = next + 1,
            of = self.storyboard.step_count(),
            name = %step.name,
            "advancing"
        );

        self.position = Position::Step(next);
        self.animating = true;
        let outcome = self.scheduler.start(next, total_frames, surface)?;
        if matches!(outcome, TickOutcome::Completed { .. }) {
            self.animating = false;
        }
        Ok(NavOutcome::Moved(self.position))
    }

    /// Move back one step and show it fully settled.
    ///
    /// Backward navigation never replays an animation: the target step is
    /// redrawn once at [`Progress::SETTLED`], or the landing view is shown
    /// when retreating off the first step. Ignored while an animation runs.
    pub fn retreat(&mut self, surface: &mut dyn RenderSurface) -> Result<NavOutcome, RenderError> {
        if self.animating {
            tracing::debug!("retreat ignored: animation in flight");
            return Ok(NavOutcome::Busy);
        }

        match self.position {
            Position::Landing => {
                tracing::debug!("retreat ignored: already at first step");
                Ok(NavOutcome::AtFirstStep)
            }
            Position::Step(0) => {
                self.position = Position::Landing;
                tracing::info!("retreating to landing");
                surface.render_landing()?;
                Ok(NavOutcome::Moved(self.position))
            }
            Position::Step(index) => {
                let target = index - 1;
                self.position = Position::Step(target);
                tracing::info!(step = target + 1, "retreating");
                surface.render_step(target, Progress::SETTLED)?;
                Ok(NavOutcome::Moved(self.position))
            }
        }
    }

    /// Return to the landing view, cancelling any in-flight animation.
    pub fn reset(&mut self, surface: &mut dyn RenderSurface) -> Result<(), RenderError> {
        self.scheduler.cancel();
        self.animating = false;
        self.position = Position::Landing;
        tracing::info!("sequencer reset to landing");
        surface.render_landing()
    }

    /// Deliver the next frame of the in-flight animation, if any.
    ///
    /// The host calls this once per timer interval. When the run's final
    /// frame is delivered, the animating gate drops and navigation is
    /// accepted again.
    pub fn tick(&mut self, surface: &mut dyn RenderSurface) -> Result<TickOutcome, RenderError> {
        let outcome = self.scheduler.tick(surface)?;
        if let TickOutcome::Completed { step } = outcome {
            self.animating = false;
            tracing::info!(step = step + 1, "step complete");
        }
        Ok(outcome)
    }

    /// Statically redraw the current view: the landing page, or the
    /// current step fully settled. Intended for hosts that need to repaint
    /// outside the animation path (startup, display-mode changes).
    pub fn render_current(&self, surface: &mut dyn RenderSurface) -> Result<(), RenderError> {
        match self.position {
            Position::Landing => surface.render_landing(),
            Position::Step(index) => surface.render_step(index, Progress::SETTLED),
        }
    }

    /// Fraction of the deck reached, for status displays.
    /// Landing counts as zero; the last step as one.
    pub fn deck_progress(&self) -> f32 {
        match self.position {
            Position::Landing => 0.0,
            Position::Step(index) => (index + 1) as f32 / self.storyboard.step_count() as f32,
        }
    }

    /// `(current, total)` step counter for status displays; landing is step 0
    pub fn step_counter(&self) -> (usize, usize) {
        let total = self.storyboard.step_count();
        match self.position {
            Position::Landing => (0, total),
            Position::Step(index) => (index + 1, total),
        }
    }
}
