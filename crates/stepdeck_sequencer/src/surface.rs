// SPDX-License-Identifier: MIT OR Apache-2.0
//! Render surface contract between the sequencing core and a renderer.

use thiserror::Error;

/// Normalized reveal progress of a step animation.
///
/// During an animation run the value is `current_frame / total_frames`,
/// so the last value delivered by a run is `(total_frames - 1) / total_frames`.
/// Exactly `1.0` is reserved for static redraws of a fully settled step.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Progress(f32);

impl Progress {
    /// Start of a reveal animation
    pub const ZERO: Progress = Progress(0.0);
    /// Fully revealed, no further transition
    pub const SETTLED: Progress = Progress(1.0);

    /// Progress of `frame` within a run of `total_frames` ticks
    pub(crate) fn at_frame(frame: u32, total_frames: u32) -> Self {
        debug_assert!(total_frames >= 1);
        debug_assert!(frame < total_frames);
        Self(frame as f32 / total_frames as f32)
    }

    /// Raw value in `[0, 1]`
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether this is the fully settled state
    pub fn is_settled(self) -> bool {
        self.0 >= 1.0
    }
}

/// Failure reported by a render surface.
///
/// The core never retries or swallows these; they bubble up unmodified
/// through navigation and tick calls, and the host should treat them as
/// fatal to the current session.
#[derive(Debug, Error)]
#[error("render surface failure: {0}")]
pub struct RenderError(Box<dyn std::error::Error + Send + Sync>);

impl RenderError {
    /// Wrap a surface-specific failure
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err)
    }
}

/// A renderer the sequencing core drives but does not implement.
///
/// Invoked once per tick while a step animation runs, and once per static
/// redraw (the landing view, or a step settled at [`Progress::SETTLED`]).
/// Implementations must be idempotent for a given `(step, progress)` pair:
/// backward navigation relies on exact reproducibility of a step's settled
/// frame. Progress values within one run never regress.
pub trait RenderSurface {
    /// Render storyboard step `step` at the given reveal progress
    fn render_step(&mut self, step: usize, progress: Progress) -> Result<(), RenderError>;

    /// Render the landing view (the pre-storyboard state, no progress axis)
    fn render_landing(&mut self) -> Result<(), RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_at_frame() {
        let p = Progress::at_frame(0, 4);
        assert_eq!(p.value(), 0.0);
        let p = Progress::at_frame(3, 4);
        assert_eq!(p.value(), 0.75);
        assert!(!p.is_settled());
    }

    #[test]
    fn test_settled_is_terminal() {
        assert!(Progress::SETTLED.is_settled());
        assert!(Progress::ZERO < Progress::SETTLED);
    }

    #[test]
    fn test_render_error_display() {
        let err = RenderError::new("backend lost");
        assert!(err.to_string().contains("backend lost"));
    }
}
