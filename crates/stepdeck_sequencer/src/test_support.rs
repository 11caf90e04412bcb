// SPDX-License-Identifier: MIT OR Apache-2.0
//! Recording render surface shared by the crate's unit tests.

use crate::surface::{Progress, RenderError, RenderSurface};

/// One recorded render invocation
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    /// A step render at a progress value
    Step {
        /// Step index
        step: usize,
        /// Raw progress value
        progress: f32,
    },
    /// A landing render
    Landing,
}

impl RenderCall {
    /// Shorthand step-call constructor
    pub fn step(step: usize, progress: f32) -> Self {
        Self::Step { step, progress }
    }
}

/// Surface that records every call and can fail on demand
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// All calls, in delivery order
    pub calls: Vec<RenderCall>,
    /// Fail the next render call with an injected error
    pub fail_next: bool,
}

impl RecordingSurface {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress values delivered for one step, in order
    pub fn step_progresses(&self, step: usize) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::Step { step: s, progress } if *s == step => Some(*progress),
                _ => None,
            })
            .collect()
    }

    fn check_failure(&mut self) -> Result<(), RenderError> {
        if self.fail_next {
            self.fail_next = false;
            return Err(RenderError::new("injected failure"));
        }
        Ok(())
    }
}

impl RenderSurface for RecordingSurface {
    fn render_step(&mut self, step: usize, progress: Progress) -> Result<(), RenderError> {
        self.check_failure()?;
        self.calls.push(RenderCall::Step {
            step,
            progress: progress.value(),
        });
        Ok(())
    }

    fn render_landing(&mut self) -> Result<(), RenderError> {
        self.check_failure()?;
        self.calls.push(RenderCall::Landing);
        Ok(())
    }
}
