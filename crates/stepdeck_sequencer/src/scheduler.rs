// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tick-by-tick driver for a single step's reveal animation.
//!
//! The scheduler is poll-driven and cooperative: the host owns the timer
//! and calls [`FrameScheduler::tick`] at a fixed interval. Each call
//! delivers exactly one frame to the render surface; the scheduler never
//! blocks and never runs two animations at once.

use crate::surface::{Progress, RenderError, RenderSurface};

/// Ephemeral state of one in-flight step animation.
///
/// Created when a run starts and dropped the instant the run completes or
/// is cancelled; nothing survives across runs.
#[derive(Debug, Clone, Copy)]
struct AnimationRun {
    step: usize,
    total_frames: u32,
    current_frame: u32,
}

/// Outcome of one scheduler poll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No animation run is in flight
    Idle,
    /// Delivered one frame; more remain
    Advanced {
        /// Step being animated
        step: usize,
        /// Progress value just delivered to the surface
        progress: Progress,
    },
    /// Delivered the final frame; the run is finished and dropped
    Completed {
        /// Step whose animation just finished
        step: usize,
    },
}

/// Drives a step's progressive reveal one frame per poll.
///
/// Within a run, progress values are `0/T, 1/T, ..., (T-1)/T` in strictly
/// increasing order, one render call per tick, exactly `T` calls in total.
/// Full settlement (`1.0`) is never delivered by the scheduler; that path
/// belongs to the sequencer's static redraws.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    run: Option<AnimationRun>,
}

impl FrameScheduler {
    /// Create an idle scheduler
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a run for `step` and deliver its first frame synchronously.
    ///
    /// Any residual run is cancelled first; the sequencer's animating gate
    /// means none should exist, but starting must never interleave two runs.
    /// `total_frames` is at least 1, guaranteed by storyboard validation.
    pub fn start(
        &mut self,
        step: usize,
        total_frames: u32,
        surface: &mut dyn RenderSurface,
    ) -> Result<TickOutcome, RenderError> {
        self.cancel();
        self.run = Some(AnimationRun {
            step,
            total_frames,
            current_frame: 0,
        });
        tracing::debug!(step, total_frames, "animation run started");
        self.tick(surface)
    }

    /// Deliver the next frame of the in-flight run, if any.
    ///
    /// Render failures propagate unmodified; the run is left in place so
    /// the failure cannot be papered over by a completion report.
    pub fn tick(&mut self, surface: &mut dyn RenderSurface) -> Result<TickOutcome, RenderError> {
        let Some(run) = self.run.as_mut() else {
            return Ok(TickOutcome::Idle);
        };

        let progress = Progress::at_frame(run.current_frame, run.total_frames);
        surface.render_step(run.step, progress)?;
        run.current_frame += 1;

        if run.current_frame >= run.total_frames {
            let step = run.step;
            self.run = None;
            tracing::debug!(step, "animation run complete");
            Ok(TickOutcome::Completed { step })
        } else {
            Ok(TickOutcome::Advanced {
                step: run.step,
                progress,
            })
        }
    }

    /// Cancel the in-flight run; no further frames are delivered for it.
    ///
    /// Synchronous with respect to scheduling: after this returns, a
    /// subsequent [`tick`](Self::tick) reports [`TickOutcome::Idle`].
    pub fn cancel(&mut self) {
        if let Some(run) = self.run.take() {
            tracing::debug!(
                step = run.step,
                frame = run.current_frame,
                "animation run cancelled"
            );
        }
    }

    /// Whether a run is in flight
    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Frame counter of the in-flight run, if any
    pub fn current_frame(&self) -> Option<u32> {
        self.run.map(|run| run.current_frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingSurface, RenderCall};

    #[test]
    fn test_run_delivers_every_frame() {
        let mut scheduler = FrameScheduler::new();
        let mut surface = RecordingSurface::new();

        let first = scheduler.start(0, 4, &mut surface).unwrap();
        assert_eq!(
            first,
            TickOutcome::Advanced {
                step: 0,
                progress: Progress::ZERO
            }
        );

        let mut outcomes = Vec::new();
        while scheduler.is_running() {
            outcomes.push(scheduler.tick(&mut surface).unwrap());
        }

        assert_eq!(outcomes.last(), Some(&TickOutcome::Completed { step: 0 }));
        assert_eq!(
            surface.step_progresses(0),
            vec![0.0, 1.0 / 4.0, 2.0 / 4.0, 3.0 / 4.0]
        );
        assert_eq!(surface.calls.len(), 4);
    }

    #[test]
    fn test_single_frame_run_completes_immediately() {
        let mut scheduler = FrameScheduler::new();
        let mut surface = RecordingSurface::new();

        let outcome = scheduler.start(2, 1, &mut surface).unwrap();
        assert_eq!(outcome, TickOutcome::Completed { step: 2 });
        assert!(!scheduler.is_running());
        assert_eq!(surface.step_progresses(2), vec![0.0]);
    }

    #[test]
    fn test_cancel_stops_delivery() {
        let mut scheduler = FrameScheduler::new();
        let mut surface = RecordingSurface::new();

        scheduler.start(0, 3, &mut surface).unwrap();
        scheduler.cancel();
        assert!(!scheduler.is_running());

        let outcome = scheduler.tick(&mut surface).unwrap();
        assert_eq!(outcome, TickOutcome::Idle);
        assert_eq!(surface.calls.len(), 1);
    }

    #[test]
    fn test_start_supersedes_previous_run() {
        let mut scheduler = FrameScheduler::new();
        let mut surface = RecordingSurface::new();

        scheduler.start(0, 5, &mut surface).unwrap();
        scheduler.start(1, 2, &mut surface).unwrap();

        // The superseded run's remaining ticks never fire.
        let outcome = scheduler.tick(&mut surface).unwrap();
        assert_eq!(outcome, TickOutcome::Completed { step: 1 });
        assert_eq!(surface.step_progresses(0), vec![0.0]);
        assert_eq!(surface.step_progresses(1), vec![0.0, 0.5]);
    }

    #[test]
    fn test_tick_without_run_is_idle() {
        let mut scheduler = FrameScheduler::new();
        let mut surface = RecordingSurface::new();
        assert_eq!(scheduler.tick(&mut surface).unwrap(), TickOutcome::Idle);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_render_failure_propagates() {
        let mut scheduler = FrameScheduler::new();
        let mut surface = RecordingSurface::new();

        scheduler.start(0, 3, &mut surface).unwrap();
        surface.fail_next = true;
        let err = scheduler.tick(&mut surface).unwrap_err();
        assert!(err.to_string().contains("injected failure"));

        // The failed frame was not consumed.
        assert_eq!(scheduler.current_frame(), Some(1));
        assert_eq!(surface.calls, vec![RenderCall::step(0, 0.0)]);
    }
}
